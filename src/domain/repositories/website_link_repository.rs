// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::company_repository::RepositoryError;
use crate::domain::models::website_link::WebsiteLink;
use async_trait::async_trait;
use uuid::Uuid;

/// 列表排序方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrder {
    /// 不指定顺序，按存储返回的顺序
    Unordered,
    /// 按创建时间倒序（最新在前）
    NewestFirst,
}

/// 网站链接仓库特质
#[async_trait]
pub trait WebsiteLinkRepository: Send + Sync {
    /// 列出所有链接（不按公司过滤）
    async fn find_all(&self, order: RowOrder) -> Result<Vec<WebsiteLink>, RepositoryError>;
    async fn find_by_id(&self, id: Uuid) -> Result<Option<WebsiteLink>, RepositoryError>;
    async fn create(&self, link: &WebsiteLink) -> Result<WebsiteLink, RepositoryError>;
    async fn update(&self, link: &WebsiteLink) -> Result<WebsiteLink, RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
