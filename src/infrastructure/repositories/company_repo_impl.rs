// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::company::Company;
use crate::domain::repositories::company_repository::{
    CompanyFilter, CompanyRepository, RepositoryError,
};
use crate::infrastructure::database::entities::{app, company, website_link};
use async_trait::async_trait;
use sea_orm::*;
use std::sync::Arc;
use uuid::Uuid;

/// 公司仓库实现
#[derive(Clone)]
pub struct CompanyRepositoryImpl {
    db: Arc<DatabaseConnection>,
}

impl CompanyRepositoryImpl {
    /// 创建新的公司仓库实现
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CompanyRepository for CompanyRepositoryImpl {
    async fn find_all(&self, filter: CompanyFilter) -> Result<Vec<Company>, RepositoryError> {
        let mut query = company::Entity::find();
        if filter == CompanyFilter::ActiveOnly {
            query = query.filter(company::Column::IsActive.eq(true));
        }

        let models = query
            .order_by_asc(company::Column::Name)
            .all(self.db.as_ref())
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Company>, RepositoryError> {
        let model = company::Entity::find_by_id(id)
            .one(self.db.as_ref())
            .await?;

        Ok(model.map(Into::into))
    }

    async fn create(&self, company: &Company) -> Result<Company, RepositoryError> {
        let model = company::ActiveModel {
            id: Set(company.id),
            name: Set(company.name.clone()),
            logo_url: Set(company.logo_url.clone()),
            is_active: Set(company.is_active),
            created_at: Set(company.created_at.into()),
            updated_at: Set(company.updated_at.into()),
        };

        let inserted = model.insert(self.db.as_ref()).await?;
        Ok(inserted.into())
    }

    async fn update(&self, company: &Company) -> Result<Company, RepositoryError> {
        let model = company::ActiveModel {
            id: Unchanged(company.id),
            name: Set(company.name.clone()),
            logo_url: Set(company.logo_url.clone()),
            is_active: Set(company.is_active),
            created_at: NotSet,
            updated_at: Set(company.updated_at.into()),
        };

        match model.update(self.db.as_ref()).await {
            Ok(updated) => Ok(updated.into()),
            Err(DbErr::RecordNotUpdated) => Err(RepositoryError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        // dependents first, all inside one transaction
        let txn = self.db.begin().await?;

        app::Entity::delete_many()
            .filter(app::Column::CompanyId.eq(id))
            .exec(&txn)
            .await?;

        website_link::Entity::delete_many()
            .filter(website_link::Column::CompanyId.eq(id))
            .exec(&txn)
            .await?;

        let result = company::Entity::delete_by_id(id).exec(&txn).await?;
        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(RepositoryError::NotFound);
        }

        txn.commit().await?;
        Ok(())
    }
}

impl From<company::Model> for Company {
    fn from(model: company::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            logo_url: model.logo_url,
            is_active: model.is_active,
            created_at: model.created_at.into(),
            updated_at: model.updated_at.into(),
        }
    }
}
