// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::{User, ADMIN_ROLE};
use crate::domain::repositories::company_repository::RepositoryError;
use crate::domain::repositories::user_repository::UserRepository;
use sha2::{Digest, Sha256};
use std::sync::Arc;
use tracing::info;

/// 计算令牌摘要，数据库中只保存摘要
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}

/// 认证服务
///
/// 提供当前用户解析和管理员判定
#[derive(Clone)]
pub struct AuthService {
    user_repo: Arc<dyn UserRepository>,
}

impl AuthService {
    pub fn new(user_repo: Arc<dyn UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 根据令牌解析当前用户，未知令牌返回 None
    pub async fn current_user(&self, token: &str) -> Result<Option<User>, RepositoryError> {
        if token.is_empty() {
            return Ok(None);
        }
        self.user_repo.find_by_token_hash(&hash_token(token)).await
    }

    /// 判断用户是否为管理员
    pub async fn is_admin(&self, user: &User) -> Result<bool, RepositoryError> {
        self.user_repo.has_role(user.id, ADMIN_ROLE).await
    }

    /// 确保指定管理员账户存在并使用给定令牌
    pub async fn ensure_admin(&self, email: &str, token: &str) -> Result<User, RepositoryError> {
        let user = self
            .user_repo
            .upsert_with_role(email, &hash_token(token), ADMIN_ROLE)
            .await?;
        info!("Admin account ensured for {}", user.email);
        Ok(user)
    }
}
