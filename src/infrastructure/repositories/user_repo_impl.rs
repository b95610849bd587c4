// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::user::User;
use crate::domain::repositories::company_repository::RepositoryError;
use crate::domain::repositories::user_repository::UserRepository;
use crate::infrastructure::database::entities::{user, user_role};
use async_trait::async_trait;
use chrono::Utc;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 用户仓库实现
#[derive(Clone)]
pub struct UserRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryImpl {
    /// 创建新的用户仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_by_token_hash(&self, token_hash: &str) -> Result<Option<User>, RepositoryError> {
        let model = user::Entity::find()
            .filter(user::Column::TokenHash.eq(token_hash))
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn has_role(&self, user_id: Uuid, role: &str) -> Result<bool, RepositoryError> {
        let count = user_role::Entity::find()
            .filter(user_role::Column::UserId.eq(user_id))
            .filter(user_role::Column::Role.eq(role))
            .count(self.db.as_ref())
            .await?;

        Ok(count > 0)
    }

    async fn upsert_with_role(
        &self,
        email: &str,
        token_hash: &str,
        role: &str,
    ) -> Result<User, RepositoryError> {
        let txn = self.db.begin().await?;

        let existing = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&txn)
            .await?;

        let model = match existing {
            Some(model) => {
                let mut active: user::ActiveModel = model.into();
                active.token_hash = Set(token_hash.to_string());
                active.update(&txn).await?
            }
            None => {
                user::ActiveModel {
                    id: Set(Uuid::new_v4()),
                    email: Set(email.to_string()),
                    token_hash: Set(token_hash.to_string()),
                    created_at: Set(Utc::now().into()),
                }
                .insert(&txn)
                .await?
            }
        };

        let has_role = user_role::Entity::find()
            .filter(user_role::Column::UserId.eq(model.id))
            .filter(user_role::Column::Role.eq(role))
            .one(&txn)
            .await?
            .is_some();

        if !has_role {
            user_role::ActiveModel {
                id: Set(Uuid::new_v4()),
                user_id: Set(model.id),
                role: Set(role.to_string()),
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;
        Ok(model.into())
    }
}

impl From<user::Model> for User {
    fn from(model: user::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            created_at: model.created_at.into(),
        }
    }
}
