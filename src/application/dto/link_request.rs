// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::dto::company_request::not_blank;
use crate::domain::models::website_link::LinkType;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// 创建或更新网站链接的请求
#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct LinkRequestDto {
    pub company_id: Uuid,
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub title: String,
    #[validate(url)]
    pub url: String,
    #[serde(rename = "type", default)]
    pub link_type: LinkType,
}
