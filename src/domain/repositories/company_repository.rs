// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::company::Company;
use async_trait::async_trait;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// 仓库错误类型
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
    /// 记录未找到
    #[error("Record not found")]
    NotFound,
}

/// 公司查询过滤条件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyFilter {
    /// 所有公司（管理视图）
    All,
    /// 仅已启用的公司（公开视图）
    ActiveOnly,
}

/// 公司仓库特质
///
/// 定义公司数据访问接口
#[async_trait]
pub trait CompanyRepository: Send + Sync {
    /// 按名称升序列出公司
    async fn find_all(&self, filter: CompanyFilter) -> Result<Vec<Company>, RepositoryError>;
    /// 根据ID查找公司
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, RepositoryError>;
    /// 创建公司
    async fn create(&self, company: &Company) -> Result<Company, RepositoryError>;
    /// 更新公司，不存在时返回 NotFound
    async fn update(&self, company: &Company) -> Result<Company, RepositoryError>;
    /// 删除公司及其链接和应用，不存在时返回 NotFound
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
