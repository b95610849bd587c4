// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::website_link::WebsiteLink;
use crate::domain::repositories::company_repository::RepositoryError;
use crate::domain::repositories::website_link_repository::{RowOrder, WebsiteLinkRepository};
use crate::infrastructure::database::entities::website_link;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 网站链接仓库实现
#[derive(Clone)]
pub struct WebsiteLinkRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl WebsiteLinkRepositoryImpl {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WebsiteLinkRepository for WebsiteLinkRepositoryImpl {
    async fn find_all(&self, order: RowOrder) -> Result<Vec<WebsiteLink>, RepositoryError> {
        let mut query = website_link::Entity::find();
        if order == RowOrder::NewestFirst {
            query = query.order_by_desc(website_link::Column::CreatedAt);
        }

        let models = query.all(self.db.as_ref()).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<WebsiteLink>, RepositoryError> {
        let model = website_link::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn create(&self, link: &WebsiteLink) -> Result<WebsiteLink, RepositoryError> {
        let model = website_link::ActiveModel {
            id: Set(link.id),
            company_id: Set(link.company_id),
            title: Set(link.title.clone()),
            url: Set(link.url.clone()),
            link_type: Set(link.link_type.into()),
            created_at: Set(link.created_at.into()),
        };

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn update(&self, link: &WebsiteLink) -> Result<WebsiteLink, RepositoryError> {
        let model = website_link::ActiveModel {
            id: Unchanged(link.id),
            company_id: Set(link.company_id),
            title: Set(link.title.clone()),
            url: Set(link.url.clone()),
            link_type: Set(link.link_type.into()),
            created_at: NotSet,
        };

        match model.update(self.db.as_ref()).await {
            Ok(updated) => Ok(updated.into()),
            Err(DbErr::RecordNotUpdated) => Err(RepositoryError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = website_link::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl From<website_link::Model> for WebsiteLink {
    fn from(model: website_link::Model) -> Self {
        Self {
            id: model.id,
            company_id: model.company_id,
            title: model.title,
            url: model.url,
            link_type: model.link_type.into(),
            created_at: model.created_at.into(),
        }
    }
}
