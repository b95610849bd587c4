// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// 网站链接实体
///
/// 挂在某个公司下的命名URL，区分公开网站和后台管理两类。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebsiteLink {
    /// 链接唯一标识符
    pub id: Uuid,
    /// 所属公司ID
    pub company_id: Uuid,
    /// 链接标题，1到100个字符
    pub title: String,
    /// 目标地址
    pub url: String,
    /// 链接类型
    #[serde(rename = "type")]
    pub link_type: LinkType,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl WebsiteLink {
    pub fn new(company_id: Uuid, title: String, url: String, link_type: LinkType) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_id,
            title,
            url,
            link_type,
            created_at: Utc::now(),
        }
    }
}

/// 链接类型枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LinkType {
    /// 公开网站
    #[default]
    Website,
    /// 后台管理入口
    Admin,
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkType::Website => write!(f, "website"),
            LinkType::Admin => write!(f, "admin"),
        }
    }
}
