// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::company_request::not_blank;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 创建或更新应用的请求
///
/// APK文件随 multipart 表单单独传递。
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct AppRequestDto {
    pub company_id: Uuid,
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub app_name: String,
}
