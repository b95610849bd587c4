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

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    application::{
        dto::company_request::CompanyRequestDto, use_cases::company_use_case::CompanyUseCase,
    },
    domain::services::directory_service::DirectoryService,
    presentation::{errors::AppError, extractors::upload_form::UploadForm},
    utils::errors::PortalError,
};

/// 公开页面：已启用的公司及其链接和应用
pub async fn list_public_companies(
    Extension(directory): Extension<Arc<DirectoryService>>,
) -> Result<impl IntoResponse, AppError> {
    let companies = directory.fetch_public_companies().await?;
    Ok(Json(companies))
}

/// 管理视图：全部公司
pub async fn list_companies(
    Extension(directory): Extension<Arc<DirectoryService>>,
) -> Result<impl IntoResponse, AppError> {
    let companies = directory.fetch_all_companies().await?;
    Ok(Json(companies))
}

/// 创建公司（multipart：name、is_active、logo）
pub async fn create_company(
    Extension(use_case): Extension<Arc<CompanyUseCase>>,
    mut form: UploadForm,
) -> Result<impl IntoResponse, AppError> {
    let dto = company_dto(&form)?;
    let logo = form.take_file("logo");
    let company = use_case.create(dto, logo).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// 更新公司（multipart：name、is_active、logo、remove_logo）
pub async fn update_company(
    Extension(use_case): Extension<Arc<CompanyUseCase>>,
    Path(id): Path<Uuid>,
    mut form: UploadForm,
) -> Result<impl IntoResponse, AppError> {
    let dto = company_dto(&form)?;
    let logo = form.take_file("logo");
    let company = use_case.update(id, dto, logo).await?;
    Ok(Json(company))
}

pub async fn delete_company(
    Extension(use_case): Extension<Arc<CompanyUseCase>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    use_case.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn company_dto(form: &UploadForm) -> Result<CompanyRequestDto, PortalError> {
    Ok(CompanyRequestDto {
        name: form.required_text("name")?,
        is_active: form.flag("is_active", true)?,
        remove_logo: form.flag("remove_logo", false)?,
    })
}
