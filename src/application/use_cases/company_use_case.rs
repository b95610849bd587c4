// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::{finish_mutation, present, warn_orphaned_asset};
use crate::{
    application::dto::company_request::CompanyRequestDto,
    domain::{
        models::{
            asset::{AssetBucket, UploadedFile},
            company::Company,
        },
        repositories::company_repository::CompanyRepository,
        services::asset_service::AssetService,
    },
    infrastructure::cache::query_cache::QueryCache,
    utils::errors::PortalError,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

const ENTITY: &str = "company";

/// 公司管理用例
pub struct CompanyUseCase {
    company_repo: Arc<dyn CompanyRepository>,
    assets: AssetService,
    cache: QueryCache,
}

impl CompanyUseCase {
    pub fn new(
        company_repo: Arc<dyn CompanyRepository>,
        assets: AssetService,
        cache: QueryCache,
    ) -> Self {
        Self {
            company_repo,
            assets,
            cache,
        }
    }

    /// 创建公司，Logo可选
    ///
    /// Logo先上传，上传成功后才写入记录；任一步失败都不会写入记录。
    pub async fn create(
        &self,
        dto: CompanyRequestDto,
        logo: Option<UploadedFile>,
    ) -> Result<Company, PortalError> {
        dto.validate()?;
        let logo = present(logo);
        if let Some(file) = &logo {
            validate_logo(file)?;
        }

        let logo_url = match &logo {
            Some(file) => Some(self.upload_logo(file).await?),
            None => None,
        };

        let company = Company::new(dto.name.trim().to_string(), logo_url, dto.is_active);
        let created = self.company_repo.create(&company).await.map_err(|e| {
            error!("Failed to insert company: {}", e);
            warn_orphaned_asset(company.logo_url.as_deref(), ENTITY);
            PortalError::from(e)
        })?;

        finish_mutation(&self.cache, ENTITY, "create");
        Ok(created)
    }

    /// 更新公司
    ///
    /// 提供新Logo时替换地址；未提供且 `remove_logo` 为真时清除地址；
    /// 否则保留原地址。
    pub async fn update(
        &self,
        id: Uuid,
        dto: CompanyRequestDto,
        logo: Option<UploadedFile>,
    ) -> Result<Company, PortalError> {
        dto.validate()?;
        let logo = present(logo);
        if let Some(file) = &logo {
            validate_logo(file)?;
        }

        let existing = self
            .company_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| PortalError::NotFound(format!("Company {}", id)))?;

        let (logo_url, uploaded) = match &logo {
            Some(file) => (Some(self.upload_logo(file).await?), true),
            None if dto.remove_logo => (None, false),
            None => (existing.logo_url.clone(), false),
        };

        let company = Company {
            name: dto.name.trim().to_string(),
            logo_url,
            is_active: dto.is_active,
            updated_at: Utc::now(),
            ..existing
        };

        let updated = self.company_repo.update(&company).await.map_err(|e| {
            error!("Failed to update company {}: {}", id, e);
            if uploaded {
                warn_orphaned_asset(company.logo_url.as_deref(), ENTITY);
            }
            PortalError::from_repository(e, format!("Company {}", id))
        })?;

        finish_mutation(&self.cache, ENTITY, "update");
        Ok(updated)
    }

    /// 删除公司及其链接和应用
    pub async fn delete(&self, id: Uuid) -> Result<(), PortalError> {
        self.company_repo
            .delete(id)
            .await
            .map_err(|e| PortalError::from_repository(e, format!("Company {}", id)))?;

        finish_mutation(&self.cache, ENTITY, "delete");
        Ok(())
    }

    async fn upload_logo(&self, file: &UploadedFile) -> Result<String, PortalError> {
        self.assets
            .upload(AssetBucket::CompanyLogos, file)
            .await
            .map_err(|e| {
                error!("Logo upload failed: {}", e);
                PortalError::from(e)
            })
    }
}

fn validate_logo(file: &UploadedFile) -> Result<(), PortalError> {
    match file.content_type.as_deref() {
        Some(ct) if !ct.starts_with("image/") => Err(PortalError::Validation(format!(
            "Logo must be an image, got {}",
            ct
        ))),
        _ => Ok(()),
    }
}
