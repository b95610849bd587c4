// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    application::{dto::app_request::AppRequestDto, use_cases::app_use_case::AppUseCase},
    domain::services::directory_service::DirectoryService,
    presentation::{errors::AppError, extractors::upload_form::UploadForm},
    utils::errors::PortalError,
};

/// 管理视图：全部应用，最新在前
pub async fn list_apps(
    Extension(directory): Extension<Arc<DirectoryService>>,
) -> Result<impl IntoResponse, AppError> {
    let apps = directory.fetch_all_apps().await?;
    Ok(Json(apps))
}

/// 创建应用（multipart：company_id、app_name、apk）
pub async fn create_app(
    Extension(use_case): Extension<Arc<AppUseCase>>,
    mut form: UploadForm,
) -> Result<impl IntoResponse, AppError> {
    let dto = app_dto(&form)?;
    let apk = form.take_file("apk");
    let app = use_case.create(dto, apk).await?;
    Ok((StatusCode::CREATED, Json(app)))
}

pub async fn update_app(
    Extension(use_case): Extension<Arc<AppUseCase>>,
    Path(id): Path<Uuid>,
    mut form: UploadForm,
) -> Result<impl IntoResponse, AppError> {
    let dto = app_dto(&form)?;
    let apk = form.take_file("apk");
    let app = use_case.update(id, dto, apk).await?;
    Ok(Json(app))
}

pub async fn delete_app(
    Extension(use_case): Extension<Arc<AppUseCase>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    use_case.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn app_dto(form: &UploadForm) -> Result<AppRequestDto, PortalError> {
    Ok(AppRequestDto {
        company_id: form.uuid("company_id")?,
        app_name: form.required_text("app_name")?,
    })
}
