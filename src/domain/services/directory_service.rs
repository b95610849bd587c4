// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::app::App;
use crate::domain::models::company::{Company, CompanyWithRelations};
use crate::domain::models::website_link::WebsiteLink;
use crate::domain::repositories::app_repository::AppRepository;
use crate::domain::repositories::company_repository::{CompanyFilter, CompanyRepository};
use crate::domain::repositories::website_link_repository::{RowOrder, WebsiteLinkRepository};
use crate::infrastructure::cache::query_cache::{QueryCache, QueryKey};
use crate::utils::errors::PortalError;
use std::sync::Arc;
use tracing::{debug, error};

/// 目录服务
///
/// 负责公开页面的聚合查询和管理视图的列表查询，所有结果都经过查询缓存。
#[derive(Clone)]
pub struct DirectoryService {
    company_repo: Arc<dyn CompanyRepository>,
    link_repo: Arc<dyn WebsiteLinkRepository>,
    app_repo: Arc<dyn AppRepository>,
    cache: QueryCache,
}

impl DirectoryService {
    /// 创建新的目录服务实例
    pub fn new(
        company_repo: Arc<dyn CompanyRepository>,
        link_repo: Arc<dyn WebsiteLinkRepository>,
        app_repo: Arc<dyn AppRepository>,
        cache: QueryCache,
    ) -> Self {
        Self {
            company_repo,
            link_repo,
            app_repo,
            cache,
        }
    }

    /// 获取公开展示的公司及其链接和应用
    ///
    /// 只包含已启用的公司，按名称升序。链接和应用并发获取，
    /// 任一获取失败则整个读取失败，不返回部分结果。
    ///
    /// # 返回值
    ///
    /// * `Ok(Arc<Vec<CompanyWithRelations>>)` - 聚合后的公司列表
    /// * `Err(PortalError)` - 任一读取失败
    pub async fn fetch_public_companies(
        &self,
    ) -> Result<Arc<Vec<CompanyWithRelations>>, PortalError> {
        self.cache
            .get_or_try_load(QueryKey::PublicCompanies, || self.load_public_companies())
            .await
    }

    async fn load_public_companies(&self) -> Result<Vec<CompanyWithRelations>, PortalError> {
        let companies = self
            .company_repo
            .find_all(CompanyFilter::ActiveOnly)
            .await
            .map_err(|e| {
                error!("Failed to fetch active companies: {}", e);
                PortalError::from(e)
            })?;

        if companies.is_empty() {
            debug!("No active companies, skipping link and app fetch");
            return Ok(Vec::new());
        }

        let (links, apps) = futures::try_join!(
            self.link_repo.find_all(RowOrder::Unordered),
            self.app_repo.find_all(RowOrder::Unordered),
        )
        .map_err(|e| {
            error!("Failed to fetch company relations: {}", e);
            PortalError::from(e)
        })?;

        debug!(
            "Aggregating {} companies with {} links and {} apps",
            companies.len(),
            links.len(),
            apps.len()
        );

        Ok(CompanyWithRelations::assemble(companies, links, apps))
    }

    /// 获取全部公司（包含未启用的），按名称升序
    pub async fn fetch_all_companies(&self) -> Result<Arc<Vec<Company>>, PortalError> {
        self.cache
            .get_or_try_load(QueryKey::AdminCompanies, || async {
                self.company_repo
                    .find_all(CompanyFilter::All)
                    .await
                    .map_err(PortalError::from)
            })
            .await
    }

    /// 获取全部链接，最新创建的在前
    pub async fn fetch_all_links(&self) -> Result<Arc<Vec<WebsiteLink>>, PortalError> {
        self.cache
            .get_or_try_load(QueryKey::AdminLinks, || async {
                self.link_repo
                    .find_all(RowOrder::NewestFirst)
                    .await
                    .map_err(PortalError::from)
            })
            .await
    }

    /// 获取全部应用，最新创建的在前
    pub async fn fetch_all_apps(&self) -> Result<Arc<Vec<App>>, PortalError> {
        self.cache
            .get_or_try_load(QueryKey::AdminApps, || async {
                self.app_repo
                    .find_all(RowOrder::NewestFirst)
                    .await
                    .map_err(PortalError::from)
            })
            .await
    }
}
