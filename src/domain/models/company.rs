// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::domain::models::app::App;
use crate::domain::models::website_link::WebsiteLink;

/// 公司实体
///
/// 表示目录中的一个组织条目，包含名称、Logo和启用状态。
/// 未启用的公司只在管理视图中可见。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    /// 公司唯一标识符，创建后不可变
    pub id: Uuid,
    /// 公司名称，1到100个字符
    pub name: String,
    /// Logo公开访问地址
    pub logo_url: Option<String>,
    /// 是否在公开页面展示
    pub is_active: bool,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 更新时间
    pub updated_at: DateTime<Utc>,
}

impl Company {
    /// 创建一个新的公司
    ///
    /// # 参数
    ///
    /// * `name` - 公司名称
    /// * `logo_url` - Logo地址（可选）
    /// * `is_active` - 是否公开展示
    pub fn new(name: String, logo_url: Option<String>, is_active: bool) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            logo_url,
            is_active,
            created_at: now,
            updated_at: now,
        }
    }
}

/// 带关联数据的公司视图
///
/// 每次聚合查询时从三张基础表重新计算，不做持久化。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyWithRelations {
    #[serde(flatten)]
    pub company: Company,
    pub website_links: Vec<WebsiteLink>,
    pub apps: Vec<App>,
}

impl CompanyWithRelations {
    /// 将链接和应用按 company_id 归属到各公司
    ///
    /// 保持公司的输入顺序以及链接、应用各自的获取顺序。
    /// 不属于任何给定公司的链接和应用会被丢弃。
    pub fn assemble(companies: Vec<Company>, links: Vec<WebsiteLink>, apps: Vec<App>) -> Vec<Self> {
        let mut links_by_company: HashMap<Uuid, Vec<WebsiteLink>> = HashMap::new();
        for link in links {
            links_by_company.entry(link.company_id).or_default().push(link);
        }

        let mut apps_by_company: HashMap<Uuid, Vec<App>> = HashMap::new();
        for app in apps {
            apps_by_company.entry(app.company_id).or_default().push(app);
        }

        companies
            .into_iter()
            .map(|company| {
                let website_links = links_by_company.remove(&company.id).unwrap_or_default();
                let apps = apps_by_company.remove(&company.id).unwrap_or_default();
                Self {
                    company,
                    website_links,
                    apps,
                }
            })
            .collect()
    }
}
