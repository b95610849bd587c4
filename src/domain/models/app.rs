// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 应用实体
///
/// 公司提供下载的移动应用安装包（APK）。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    /// 应用唯一标识符
    pub id: Uuid,
    /// 所属公司ID
    pub company_id: Uuid,
    /// 应用名称，1到100个字符
    pub app_name: String,
    /// APK文件公开下载地址，创建后非空
    pub apk_file_url: String,
    /// 创建时间
    pub created_at: DateTime<Utc>,
}

impl App {
    pub fn new(company_id: Uuid, app_name: String, apk_file_url: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            company_id,
            app_name,
            apk_file_url,
            created_at: Utc::now(),
        }
    }
}
