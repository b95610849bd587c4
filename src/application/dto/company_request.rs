// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// 创建或更新公司的请求
///
/// Logo文件随 multipart 表单单独传递，不在此结构中。
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct CompanyRequestDto {
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub name: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    /// 更新时清除现有Logo（同时上传新Logo时忽略）
    #[serde(default)]
    pub remove_logo: bool,
}

fn default_is_active() -> bool {
    true
}

/// 拒绝只包含空白字符的字段
pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
