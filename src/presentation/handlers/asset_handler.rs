// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path, Query},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    domain::{models::asset::AssetBucket, repositories::storage_repository::StorageRepository},
    infrastructure::storage::validate_key,
    presentation::errors::AppError,
    utils::errors::PortalError,
};

/// 下载参数
#[derive(Debug, Default, Deserialize)]
pub struct DownloadQuery {
    /// 作为附件下载时使用的文件名
    pub name: Option<String>,
}

/// 读取存储的资源
///
/// 带 `name` 参数时以附件形式返回，例如APK按应用名下载。
pub async fn download_asset(
    Extension(storage): Extension<Arc<dyn StorageRepository>>,
    Path((bucket, key)): Path<(String, String)>,
    Query(query): Query<DownloadQuery>,
) -> Result<Response, AppError> {
    let not_found = || PortalError::NotFound(format!("Asset {}/{}", bucket, key));

    let asset_bucket: AssetBucket = bucket.parse().map_err(|_| not_found())?;
    validate_key(&key).map_err(|_| not_found())?;

    let data = storage
        .get(asset_bucket, &key)
        .await
        .map_err(|e| PortalError::Service(e.to_string()))?
        .ok_or_else(not_found)?;

    let mut response = data.into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(content_type_for(&key)),
    );

    if let Some(name) = query.name.as_deref() {
        let file_name = download_file_name(name, &key);
        if let Ok(value) = HeaderValue::from_str(&format!("attachment; filename=\"{}\"", file_name)) {
            headers.insert(header::CONTENT_DISPOSITION, value);
        }
    }

    Ok(response)
}

fn extension(key: &str) -> Option<&str> {
    key.rsplit_once('.').map(|(_, ext)| ext)
}

fn content_type_for(key: &str) -> &'static str {
    match extension(key).map(|e| e.to_ascii_lowercase()).as_deref() {
        Some("apk") => "application/vnd.android.package-archive",
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// 清理下载文件名，并补上对象的扩展名
fn download_file_name(requested: &str, key: &str) -> String {
    let mut name: String = requested
        .chars()
        .filter(|c| c.is_ascii_graphic() || *c == ' ')
        .filter(|c| !matches!(c, '"' | '\\' | '/' | ';'))
        .collect();
    name = name.trim().to_string();
    if name.is_empty() {
        name = key.to_string();
    }

    if let Some(ext) = extension(key) {
        let suffix = format!(".{}", ext.to_ascii_lowercase());
        if !name.to_ascii_lowercase().ends_with(&suffix) {
            name.push_str(&suffix);
        }
    }
    name
}
