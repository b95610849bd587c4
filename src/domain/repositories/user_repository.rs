// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::company_repository::RepositoryError;
use crate::domain::models::user::User;
use async_trait::async_trait;
use uuid::Uuid;

/// 用户仓库特质
///
/// 令牌只以摘要形式存储和查询
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 根据令牌摘要查找用户
    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<User>, RepositoryError>;
    /// 检查用户是否拥有指定角色
    async fn has_role(&self, user_id: Uuid, role: &str) -> Result<bool, RepositoryError>;
    /// 创建或更新用户令牌，并授予指定角色
    async fn upsert_with_role(
        &self,
        email: &str,
        token_hash: &str,
        role: &str,
    ) -> Result<User, RepositoryError>;
}
