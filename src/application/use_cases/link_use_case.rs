// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::finish_mutation;
use crate::application::dto::link_request::LinkRequestDto;
use crate::domain::models::website_link::WebsiteLink;
use crate::domain::repositories::company_repository::CompanyRepository;
use crate::domain::repositories::website_link_repository::WebsiteLinkRepository;
use crate::infrastructure::cache::query_cache::QueryCache;
use crate::utils::errors::PortalError;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

const ENTITY: &str = "link";

/// 网站链接管理用例
pub struct LinkUseCase {
    link_repo: Arc<dyn WebsiteLinkRepository>,
    company_repo: Arc<dyn CompanyRepository>,
    cache: QueryCache,
}

impl LinkUseCase {
    pub fn new(
        link_repo: Arc<dyn WebsiteLinkRepository>,
        company_repo: Arc<dyn CompanyRepository>,
        cache: QueryCache,
    ) -> Self {
        Self {
            link_repo,
            company_repo,
            cache,
        }
    }

    pub async fn create(&self, dto: LinkRequestDto) -> Result<WebsiteLink, PortalError> {
        dto.validate()?;
        self.ensure_company(dto.company_id).await?;

        let link = WebsiteLink::new(
            dto.company_id,
            dto.title.trim().to_string(),
            dto.url,
            dto.link_type,
        );
        let created = self.link_repo.create(&link).await.map_err(|e| {
            error!("Failed to insert link: {}", e);
            PortalError::from(e)
        })?;

        finish_mutation(&self.cache, ENTITY, "create");
        Ok(created)
    }

    pub async fn update(&self, id: Uuid, dto: LinkRequestDto) -> Result<WebsiteLink, PortalError> {
        dto.validate()?;

        let existing = self
            .link_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| PortalError::NotFound(format!("Link {}", id)))?;
        if existing.company_id != dto.company_id {
            self.ensure_company(dto.company_id).await?;
        }

        let link = WebsiteLink {
            company_id: dto.company_id,
            title: dto.title.trim().to_string(),
            url: dto.url,
            link_type: dto.link_type,
            ..existing
        };
        let updated = self
            .link_repo
            .update(&link)
            .await
            .map_err(|e| PortalError::from_repository(e, format!("Link {}", id)))?;

        finish_mutation(&self.cache, ENTITY, "update");
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), PortalError> {
        self.link_repo
            .delete(id)
            .await
            .map_err(|e| PortalError::from_repository(e, format!("Link {}", id)))?;

        finish_mutation(&self.cache, ENTITY, "delete");
        Ok(())
    }

    async fn ensure_company(&self, company_id: Uuid) -> Result<(), PortalError> {
        match self.company_repo.find_by_id(company_id).await? {
            Some(_) => Ok(()),
            None => Err(PortalError::NotFound(format!("Company {}", company_id))),
        }
    }
}
