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
    application::dto::app_request::AppRequestDto,
    domain::{
        models::{
            app::App,
            asset::{AssetBucket, UploadedFile},
        },
        repositories::{app_repository::AppRepository, company_repository::CompanyRepository},
        services::asset_service::AssetService,
    },
    infrastructure::cache::query_cache::QueryCache,
    utils::errors::PortalError,
};
use std::sync::Arc;
use tracing::error;
use uuid::Uuid;
use validator::Validate;

const ENTITY: &str = "app";

/// 应用管理用例
///
/// 创建时必须提供APK文件，更新时可选替换。
pub struct AppUseCase {
    app_repo: Arc<dyn AppRepository>,
    company_repo: Arc<dyn CompanyRepository>,
    assets: AssetService,
    cache: QueryCache,
}

impl AppUseCase {
    pub fn new(
        app_repo: Arc<dyn AppRepository>,
        company_repo: Arc<dyn CompanyRepository>,
        assets: AssetService,
        cache: QueryCache,
    ) -> Self {
        Self {
            app_repo,
            company_repo,
            assets,
            cache,
        }
    }

    /// 创建应用
    ///
    /// # 参数
    ///
    /// * `dto` - 应用字段
    /// * `apk` - APK安装包，缺失时返回校验错误且不写入记录
    pub async fn create(
        &self,
        dto: AppRequestDto,
        apk: Option<UploadedFile>,
    ) -> Result<App, PortalError> {
        dto.validate()?;
        let apk = present(apk)
            .ok_or_else(|| PortalError::Validation("APK file is required".to_string()))?;
        validate_apk(&apk)?;
        self.ensure_company(dto.company_id).await?;

        let apk_file_url = self.upload_apk(&apk).await?;
        let app = App::new(dto.company_id, dto.app_name.trim().to_string(), apk_file_url);
        let created = self.app_repo.create(&app).await.map_err(|e| {
            error!("Failed to insert app: {}", e);
            warn_orphaned_asset(Some(&app.apk_file_url), ENTITY);
            PortalError::from(e)
        })?;

        finish_mutation(&self.cache, ENTITY, "create");
        Ok(created)
    }

    /// 更新应用，提供新APK时替换下载地址
    pub async fn update(
        &self,
        id: Uuid,
        dto: AppRequestDto,
        apk: Option<UploadedFile>,
    ) -> Result<App, PortalError> {
        dto.validate()?;
        let apk = present(apk);
        if let Some(file) = &apk {
            validate_apk(file)?;
        }

        let existing = self
            .app_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| PortalError::NotFound(format!("App {}", id)))?;
        if existing.company_id != dto.company_id {
            self.ensure_company(dto.company_id).await?;
        }

        let (apk_file_url, uploaded) = match &apk {
            Some(file) => (self.upload_apk(file).await?, true),
            None => (existing.apk_file_url.clone(), false),
        };

        let app = App {
            company_id: dto.company_id,
            app_name: dto.app_name.trim().to_string(),
            apk_file_url,
            ..existing
        };
        let updated = self.app_repo.update(&app).await.map_err(|e| {
            error!("Failed to update app {}: {}", id, e);
            if uploaded {
                warn_orphaned_asset(Some(&app.apk_file_url), ENTITY);
            }
            PortalError::from_repository(e, format!("App {}", id))
        })?;

        finish_mutation(&self.cache, ENTITY, "update");
        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), PortalError> {
        self.app_repo
            .delete(id)
            .await
            .map_err(|e| PortalError::from_repository(e, format!("App {}", id)))?;

        finish_mutation(&self.cache, ENTITY, "delete");
        Ok(())
    }

    async fn ensure_company(&self, company_id: Uuid) -> Result<(), PortalError> {
        match self.company_repo.find_by_id(company_id).await? {
            Some(_) => Ok(()),
            None => Err(PortalError::NotFound(format!("Company {}", company_id))),
        }
    }

    async fn upload_apk(&self, file: &UploadedFile) -> Result<String, PortalError> {
        self.assets
            .upload(AssetBucket::ApkFiles, file)
            .await
            .map_err(|e| {
                error!("APK upload failed: {}", e);
                PortalError::from(e)
            })
    }
}

fn validate_apk(file: &UploadedFile) -> Result<(), PortalError> {
    if !file.file_name.to_ascii_lowercase().ends_with(".apk") {
        return Err(PortalError::Validation(format!(
            "Expected an .apk file, got '{}'",
            file.file_name
        )));
    }
    Ok(())
}
