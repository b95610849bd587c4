// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::app::App;
use crate::domain::repositories::app_repository::AppRepository;
use crate::domain::repositories::company_repository::RepositoryError;
use crate::domain::repositories::website_link_repository::RowOrder;
use crate::infrastructure::database::entities::app;
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 应用仓库实现
#[derive(Clone)]
pub struct AppRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl AppRepositoryImpl {
    /// 创建新的应用仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AppRepository for AppRepositoryImpl {
    async fn find_all(&self, order: RowOrder) -> Result<Vec<App>, RepositoryError> {
        let mut query = app::Entity::find();
        if order == RowOrder::NewestFirst {
            query = query.order_by_desc(app::Column::CreatedAt);
        }

        let models = query.all(self.db.as_ref()).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<App>, RepositoryError> {
        let model = app::Entity::find_by_id(id).one(self.db.as_ref()).await?;
        Ok(model.map(Into::into))
    }

    async fn create(&self, app: &App) -> Result<App, RepositoryError> {
        let model = app::ActiveModel {
            id: Set(app.id),
            company_id: Set(app.company_id),
            app_name: Set(app.app_name.clone()),
            apk_file_url: Set(app.apk_file_url.clone()),
            created_at: Set(app.created_at.into()),
        };

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn update(&self, app: &App) -> Result<App, RepositoryError> {
        let model = app::ActiveModel {
            id: Unchanged(app.id),
            company_id: Set(app.company_id),
            app_name: Set(app.app_name.clone()),
            apk_file_url: Set(app.apk_file_url.clone()),
            created_at: NotSet,
        };

        match model.update(self.db.as_ref()).await {
            Ok(updated) => Ok(updated.into()),
            Err(DbErr::RecordNotUpdated) => Err(RepositoryError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = app::Entity::delete_by_id(id)
            .exec(self.db.as_ref())
            .await?;

        if result.rows_affected == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

impl From<app::Model> for App {
    fn from(model: app::Model) -> Self {
        Self {
            id: model.id,
            company_id: model.company_id,
            app_name: model.app_name,
            apk_file_url: model.apk_file_url,
            created_at: model.created_at.into(),
        }
    }
}
