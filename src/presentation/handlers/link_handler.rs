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
    application::{dto::link_request::LinkRequestDto, use_cases::link_use_case::LinkUseCase},
    domain::services::directory_service::DirectoryService,
    presentation::{errors::AppError, extractors::json_body::JsonBody},
};

/// 管理视图：全部链接，最新在前
pub async fn list_links(
    Extension(directory): Extension<Arc<DirectoryService>>,
) -> Result<impl IntoResponse, AppError> {
    let links = directory.fetch_all_links().await?;
    Ok(Json(links))
}

pub async fn create_link(
    Extension(use_case): Extension<Arc<LinkUseCase>>,
    JsonBody(payload): JsonBody<LinkRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let link = use_case.create(payload).await?;
    Ok((StatusCode::CREATED, Json(link)))
}

pub async fn update_link(
    Extension(use_case): Extension<Arc<LinkUseCase>>,
    Path(id): Path<Uuid>,
    JsonBody(payload): JsonBody<LinkRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    let link = use_case.update(id, payload).await?;
    Ok(Json(link))
}

pub async fn delete_link(
    Extension(use_case): Extension<Arc<LinkUseCase>>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    use_case.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
