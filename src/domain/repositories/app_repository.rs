// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::company_repository::RepositoryError;
use super::website_link_repository::RowOrder;
use crate::domain::models::app::App;
use async_trait::async_trait;
use uuid::Uuid;

/// 应用仓库特质
///
/// 定义应用数据访问接口
#[async_trait]
pub trait AppRepository: Send + Sync {
    /// 列出所有应用（不按公司过滤）
    async fn find_all(&self, order: RowOrder) -> Result<Vec<App>, RepositoryError>;
    /// 根据ID查找应用
    async fn find_by_id(&self, id: Uuid) -> Result<Option<App>, RepositoryError>;
    /// 创建应用
    async fn create(&self, app: &App) -> Result<App, RepositoryError>;
    /// 更新应用
    async fn update(&self, app: &App) -> Result<App, RepositoryError>;
    /// 删除应用
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
