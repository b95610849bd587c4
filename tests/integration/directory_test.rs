// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::mocks::{FailingRepository, RecordingRepository};
use super::helpers::setup_db;
use portalrs::domain::models::app::App;
use portalrs::domain::models::company::Company;
use portalrs::domain::models::website_link::{LinkType, WebsiteLink};
use portalrs::domain::repositories::app_repository::AppRepository;
use portalrs::domain::repositories::company_repository::CompanyRepository;
use portalrs::domain::repositories::website_link_repository::WebsiteLinkRepository;
use portalrs::domain::services::directory_service::DirectoryService;
use portalrs::infrastructure::cache::query_cache::QueryCache;
use portalrs::infrastructure::repositories::app_repo_impl::AppRepositoryImpl;
use portalrs::infrastructure::repositories::company_repo_impl::CompanyRepositoryImpl;
use portalrs::infrastructure::repositories::website_link_repo_impl::WebsiteLinkRepositoryImpl;
use portalrs::utils::errors::PortalError;
use std::sync::Arc;
use std::time::Duration;

struct Fixture {
    companies: Arc<CompanyRepositoryImpl>,
    links: Arc<WebsiteLinkRepositoryImpl>,
    apps: Arc<AppRepositoryImpl>,
    cache: QueryCache,
    directory: DirectoryService,
}

async fn fixture() -> Fixture {
    let db = setup_db().await;
    let companies = Arc::new(CompanyRepositoryImpl::new(db.clone()));
    let links = Arc::new(WebsiteLinkRepositoryImpl::new(db.clone()));
    let apps = Arc::new(AppRepositoryImpl::new(db));
    let cache = QueryCache::new(None);
    let directory = DirectoryService::new(
        companies.clone(),
        links.clone(),
        apps.clone(),
        cache.clone(),
    );

    Fixture {
        companies,
        links,
        apps,
        cache,
        directory,
    }
}

async fn insert_company(fx: &Fixture, name: &str, is_active: bool) -> Company {
    fx.companies
        .create(&Company::new(name.to_string(), None, is_active))
        .await
        .unwrap()
}

async fn insert_link(fx: &Fixture, company: &Company, title: &str, link_type: LinkType) -> WebsiteLink {
    let link = WebsiteLink::new(
        company.id,
        title.to_string(),
        format!("https://{}.example", title.to_lowercase()),
        link_type,
    );
    fx.links.create(&link).await.unwrap()
}

async fn insert_app(fx: &Fixture, company: &Company, name: &str) -> App {
    let app = App::new(
        company.id,
        name.to_string(),
        format!("http://localhost:3000/assets/apk-files/{}.apk", name),
    );
    fx.apps.create(&app).await.unwrap()
}

/// 单个启用公司带一个链接、没有应用
#[tokio::test]
async fn test_public_companies_single_company_with_link() {
    let fx = fixture().await;
    let acme = insert_company(&fx, "Acme", true).await;
    let site = insert_link(&fx, &acme, "Site", LinkType::Website).await;

    let result = fx.directory.fetch_public_companies().await.unwrap();

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].company.id, acme.id);
    assert_eq!(result[0].company.name, "Acme");
    assert_eq!(result[0].website_links.len(), 1);
    assert_eq!(result[0].website_links[0].id, site.id);
    assert_eq!(result[0].website_links[0].url, "https://site.example");
    assert!(result[0].apps.is_empty());
}

/// 未启用公司只出现在管理视图
#[tokio::test]
async fn test_inactive_company_only_in_admin_view() {
    let fx = fixture().await;
    let acme = insert_company(&fx, "Acme", false).await;
    insert_link(&fx, &acme, "Site", LinkType::Website).await;

    let public = fx.directory.fetch_public_companies().await.unwrap();
    assert!(public.is_empty());

    let all = fx.directory.fetch_all_companies().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, acme.id);
    assert!(!all[0].is_active);
}

/// 每个公司恰好拿到自己的链接和应用，公司按名称排序
#[tokio::test]
async fn test_relations_grouped_by_company() {
    let fx = fixture().await;
    let zeta = insert_company(&fx, "Zeta", true).await;
    let acme = insert_company(&fx, "Acme", true).await;
    let hidden = insert_company(&fx, "Hidden", false).await;

    insert_link(&fx, &acme, "Acme-Site", LinkType::Website).await;
    insert_link(&fx, &acme, "Acme-Console", LinkType::Admin).await;
    insert_link(&fx, &zeta, "Zeta-Site", LinkType::Website).await;
    insert_link(&fx, &hidden, "Hidden-Site", LinkType::Website).await;
    insert_app(&fx, &zeta, "zeta-mobile").await;
    insert_app(&fx, &hidden, "hidden-mobile").await;

    let result = fx.directory.fetch_public_companies().await.unwrap();
    let names: Vec<&str> = result.iter().map(|c| c.company.name.as_str()).collect();
    assert_eq!(names, vec!["Acme", "Zeta"]);

    let acme_view = &result[0];
    assert_eq!(acme_view.website_links.len(), 2);
    assert!(acme_view.website_links.iter().all(|l| l.company_id == acme.id));
    assert!(acme_view.apps.is_empty());
    assert_eq!(
        acme_view
            .website_links
            .iter()
            .filter(|l| l.link_type == LinkType::Admin)
            .count(),
        1
    );

    let zeta_view = &result[1];
    assert_eq!(zeta_view.website_links.len(), 1);
    assert_eq!(zeta_view.apps.len(), 1);
    assert_eq!(zeta_view.apps[0].app_name, "zeta-mobile");

    let total_links: usize = result.iter().map(|c| c.website_links.len()).sum();
    assert_eq!(total_links, 3);
}

/// 没有启用公司时不再查询链接和应用
#[tokio::test]
async fn test_empty_directory_skips_relation_fetch() {
    let db = setup_db().await;
    let companies = Arc::new(CompanyRepositoryImpl::new(db));
    let links = Arc::new(RecordingRepository::default());
    let apps = Arc::new(RecordingRepository::default());
    let directory = DirectoryService::new(
        companies,
        links.clone(),
        apps.clone(),
        QueryCache::new(None),
    );

    let result = directory.fetch_public_companies().await.unwrap();

    assert!(result.is_empty());
    assert_eq!(links.calls(), 0);
    assert_eq!(apps.calls(), 0);
}

/// 任一读取失败时整个聚合失败
#[tokio::test]
async fn test_relation_fetch_failure_aborts_aggregation() {
    let db = setup_db().await;
    let companies = Arc::new(CompanyRepositoryImpl::new(db.clone()));
    companies
        .create(&Company::new("Acme".to_string(), None, true))
        .await
        .unwrap();

    let directory = DirectoryService::new(
        companies,
        Arc::new(FailingRepository),
        Arc::new(AppRepositoryImpl::new(db)),
        QueryCache::new(None),
    );

    let result = directory.fetch_public_companies().await;
    assert!(matches!(result, Err(PortalError::Service(_))));
}

/// 读取结果被缓存，失效后重新加载
#[tokio::test]
async fn test_reads_are_cached_until_invalidated() {
    let repo = Arc::new(RecordingRepository::default());
    let cache = QueryCache::new(None);
    let directory = DirectoryService::new(repo.clone(), repo.clone(), repo.clone(), cache.clone());

    directory.fetch_all_companies().await.unwrap();
    directory.fetch_all_companies().await.unwrap();
    assert_eq!(repo.calls(), 1);

    cache.invalidate_all();
    directory.fetch_all_companies().await.unwrap();
    assert_eq!(repo.calls(), 2);
}

/// 管理视图中链接和应用按创建时间倒序
#[tokio::test]
async fn test_admin_lists_newest_first() {
    let fx = fixture().await;
    let acme = insert_company(&fx, "Acme", true).await;

    let first = insert_link(&fx, &acme, "First", LinkType::Website).await;
    tokio::time::sleep(Duration::from_millis(5)).await;
    let second = insert_link(&fx, &acme, "Second", LinkType::Website).await;

    let older = insert_app(&fx, &acme, "older").await;
    tokio::time::sleep(Duration::from_millis(5)).await;
    let newer = insert_app(&fx, &acme, "newer").await;

    let links = fx.directory.fetch_all_links().await.unwrap();
    let link_ids: Vec<_> = links.iter().map(|l| l.id).collect();
    assert_eq!(link_ids, vec![second.id, first.id]);

    let apps = fx.directory.fetch_all_apps().await.unwrap();
    let app_ids: Vec<_> = apps.iter().map(|a| a.id).collect();
    assert_eq!(app_ids, vec![newer.id, older.id]);

    assert!(!fx.cache.is_empty());
}
