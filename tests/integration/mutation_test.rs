// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::mocks::{FailingRepository, FailingStorage, RecordingRepository};
use super::helpers::{components_with_storage, setup_db, PUBLIC_BASE_URL};
use portalrs::application::dto::app_request::AppRequestDto;
use portalrs::application::dto::company_request::CompanyRequestDto;
use portalrs::application::dto::link_request::LinkRequestDto;
use portalrs::application::use_cases::app_use_case::AppUseCase;
use portalrs::application::use_cases::link_use_case::LinkUseCase;
use portalrs::domain::models::asset::UploadedFile;
use portalrs::domain::models::company::Company;
use portalrs::domain::models::website_link::LinkType;
use portalrs::domain::repositories::company_repository::CompanyRepository;
use portalrs::domain::services::asset_service::AssetService;
use portalrs::infrastructure::cache::query_cache::QueryCache;
use portalrs::infrastructure::repositories::company_repo_impl::CompanyRepositoryImpl;
use portalrs::infrastructure::storage::InMemoryStorage;
use portalrs::presentation::routes::AppComponents;
use portalrs::utils::errors::PortalError;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use uuid::Uuid;

async fn components() -> (AppComponents, Arc<InMemoryStorage>) {
    let db = setup_db().await;
    let storage = Arc::new(InMemoryStorage::new(PUBLIC_BASE_URL));
    (components_with_storage(db, storage.clone()), storage)
}

fn company_dto(name: &str) -> CompanyRequestDto {
    CompanyRequestDto {
        name: name.to_string(),
        is_active: true,
        remove_logo: false,
    }
}

fn logo() -> UploadedFile {
    UploadedFile::new("logo.png", Some("image/png".to_string()), b"\x89PNG\r\n".to_vec())
}

fn apk() -> UploadedFile {
    UploadedFile::new(
        "acme.apk",
        Some("application/vnd.android.package-archive".to_string()),
        b"PK\x03\x04".to_vec(),
    )
}

fn link_dto(company_id: Uuid, url: &str) -> LinkRequestDto {
    LinkRequestDto {
        company_id,
        title: "Site".to_string(),
        url: url.to_string(),
        link_type: LinkType::Website,
    }
}

/// 创建应用时缺少APK返回校验错误且不写入记录
#[tokio::test]
async fn test_create_app_without_apk_inserts_nothing() {
    let (c, storage) = components().await;
    let acme = c.companies.create(company_dto("Acme"), None).await.unwrap();

    let result = c
        .apps
        .create(
            AppRequestDto {
                company_id: acme.id,
                app_name: "Acme Mobile".to_string(),
            },
            None,
        )
        .await;

    assert!(matches!(result, Err(PortalError::Validation(_))));
    assert!(c.directory.fetch_all_apps().await.unwrap().is_empty());
    assert!(storage.is_empty().await);
}

/// APK上传失败时不写入记录
#[tokio::test]
async fn test_upload_failure_inserts_no_row() {
    let db = setup_db().await;
    let storage = Arc::new(FailingStorage::default());
    let c = components_with_storage(db, storage.clone());
    let acme = c.companies.create(company_dto("Acme"), None).await.unwrap();

    let result = c
        .apps
        .create(
            AppRequestDto {
                company_id: acme.id,
                app_name: "Acme Mobile".to_string(),
            },
            Some(apk()),
        )
        .await;

    assert!(matches!(result, Err(PortalError::Upload(_))));
    assert_eq!(storage.attempts.load(Ordering::SeqCst), 1);
    assert!(c.directory.fetch_all_apps().await.unwrap().is_empty());
}

/// Logo上传失败时不创建公司
#[tokio::test]
async fn test_logo_upload_failure_creates_no_company() {
    let db = setup_db().await;
    let c = components_with_storage(db, Arc::new(FailingStorage::default()));

    let result = c.companies.create(company_dto("Acme"), Some(logo())).await;

    assert!(matches!(result, Err(PortalError::Upload(_))));
    assert!(c.directory.fetch_all_companies().await.unwrap().is_empty());
}

/// 清除Logo后读取结果中不再有Logo地址
#[tokio::test]
async fn test_remove_logo_clears_url() {
    let (c, storage) = components().await;
    let acme = c
        .companies
        .create(company_dto("Acme"), Some(logo()))
        .await
        .unwrap();

    let logo_url = acme.logo_url.clone().unwrap();
    assert!(logo_url.starts_with("http://localhost:3000/assets/company-logos/"));
    assert!(logo_url.ends_with(".png"));
    assert_eq!(storage.len().await, 1);

    let mut dto = company_dto("Acme");
    dto.remove_logo = true;
    c.companies.update(acme.id, dto, None).await.unwrap();

    let public = c.directory.fetch_public_companies().await.unwrap();
    assert_eq!(public.len(), 1);
    assert!(public[0].company.logo_url.is_none());
}

/// 未提供新Logo且未要求清除时保留原地址
#[tokio::test]
async fn test_update_without_file_keeps_logo() {
    let (c, _storage) = components().await;
    let acme = c
        .companies
        .create(company_dto("Acme"), Some(logo()))
        .await
        .unwrap();

    let updated = c
        .companies
        .update(acme.id, company_dto("Acme Corp"), None)
        .await
        .unwrap();

    assert_eq!(updated.name, "Acme Corp");
    assert_eq!(updated.logo_url, acme.logo_url);
    assert!(updated.updated_at >= acme.updated_at);
}

/// 新Logo替换原地址
#[tokio::test]
async fn test_update_with_new_logo_replaces_url() {
    let (c, storage) = components().await;
    let acme = c
        .companies
        .create(company_dto("Acme"), Some(logo()))
        .await
        .unwrap();

    let updated = c
        .companies
        .update(acme.id, company_dto("Acme"), Some(logo()))
        .await
        .unwrap();

    assert_ne!(updated.logo_url, acme.logo_url);
    assert_eq!(storage.len().await, 2);
}

/// 非图片Logo在上传前被拒绝
#[tokio::test]
async fn test_non_image_logo_rejected_before_upload() {
    let (c, storage) = components().await;
    let pdf = UploadedFile::new("logo.pdf", Some("application/pdf".to_string()), b"%PDF".to_vec());

    let result = c.companies.create(company_dto("Acme"), Some(pdf)).await;

    assert!(matches!(result, Err(PortalError::Validation(_))));
    assert!(storage.is_empty().await);
}

/// 非法URL在任何仓库调用之前被拒绝
#[tokio::test]
async fn test_invalid_url_rejected_before_any_call() {
    let links = Arc::new(RecordingRepository::default());
    let companies = Arc::new(RecordingRepository::default());
    let use_case = LinkUseCase::new(links.clone(), companies.clone(), QueryCache::new(None));

    let result = use_case.create(link_dto(Uuid::new_v4(), "not-a-url")).await;

    assert!(matches!(result, Err(PortalError::Validation(_))));
    assert_eq!(links.calls(), 0);
    assert_eq!(companies.calls(), 0);
}

/// 删除公司后两个视图都不再包含它，其链接和应用也被删除
#[tokio::test]
async fn test_delete_company_cascades() {
    let (c, _storage) = components().await;
    let acme = c.companies.create(company_dto("Acme"), None).await.unwrap();
    let other = c.companies.create(company_dto("Other"), None).await.unwrap();

    c.links
        .create(link_dto(acme.id, "https://acme.example"))
        .await
        .unwrap();
    c.links
        .create(link_dto(other.id, "https://other.example"))
        .await
        .unwrap();
    c.apps
        .create(
            AppRequestDto {
                company_id: acme.id,
                app_name: "Acme Mobile".to_string(),
            },
            Some(apk()),
        )
        .await
        .unwrap();

    // warm the cache so the delete has something to invalidate
    assert_eq!(c.directory.fetch_public_companies().await.unwrap().len(), 2);

    c.companies.delete(acme.id).await.unwrap();

    let public = c.directory.fetch_public_companies().await.unwrap();
    assert_eq!(public.len(), 1);
    assert_eq!(public[0].company.id, other.id);
    assert!(public
        .iter()
        .flat_map(|company| company.website_links.iter())
        .all(|link| link.company_id != acme.id));

    let all = c.directory.fetch_all_companies().await.unwrap();
    assert!(all.iter().all(|company| company.id != acme.id));

    let links = c.directory.fetch_all_links().await.unwrap();
    assert_eq!(links.len(), 1);
    assert!(c.directory.fetch_all_apps().await.unwrap().is_empty());
}

/// 目标不存在时返回 NotFound，且不会上传资源
#[tokio::test]
async fn test_mutations_on_missing_ids_are_not_found() {
    let (c, storage) = components().await;
    let missing = Uuid::new_v4();

    let update = c
        .companies
        .update(missing, company_dto("Ghost"), Some(logo()))
        .await;
    assert!(matches!(update, Err(PortalError::NotFound(_))));
    assert!(storage.is_empty().await);

    assert!(matches!(
        c.companies.delete(missing).await,
        Err(PortalError::NotFound(_))
    ));
    assert!(matches!(
        c.links.delete(missing).await,
        Err(PortalError::NotFound(_))
    ));
    assert!(matches!(
        c.apps.delete(missing).await,
        Err(PortalError::NotFound(_))
    ));
    assert!(matches!(
        c.links
            .update(missing, link_dto(Uuid::new_v4(), "https://x.example"))
            .await,
        Err(PortalError::NotFound(_))
    ));
}

/// 公司不存在时不上传APK
#[tokio::test]
async fn test_app_for_unknown_company_uploads_nothing() {
    let (c, storage) = components().await;

    let result = c
        .apps
        .create(
            AppRequestDto {
                company_id: Uuid::new_v4(),
                app_name: "Orphan".to_string(),
            },
            Some(apk()),
        )
        .await;

    assert!(matches!(result, Err(PortalError::NotFound(_))));
    assert!(storage.is_empty().await);
}

/// 上传成功但记录写入失败时资源成为孤儿文件
#[tokio::test]
async fn test_row_write_failure_after_upload_leaves_orphan() {
    let db = setup_db().await;
    let companies = Arc::new(CompanyRepositoryImpl::new(db));
    let storage = Arc::new(InMemoryStorage::new(PUBLIC_BASE_URL));
    let cache = QueryCache::new(None);
    let mut events = cache.subscribe();

    let company = companies
        .create(&Company::new("Acme".to_string(), None, true))
        .await
        .unwrap();

    let use_case = AppUseCase::new(
        Arc::new(FailingRepository),
        companies,
        AssetService::new(storage.clone()),
        cache,
    );

    let result = use_case
        .create(
            AppRequestDto {
                company_id: company.id,
                app_name: "Acme Mobile".to_string(),
            },
            Some(apk()),
        )
        .await;

    assert!(matches!(result, Err(PortalError::Service(_))));
    assert_eq!(storage.len().await, 1);
    assert!(events.try_recv().is_err());
}

/// 每个成功的写操作都会使缓存整体失效
#[tokio::test]
async fn test_every_mutation_invalidates_cache() {
    let (c, _storage) = components().await;
    let mut events = c.cache.subscribe();

    let acme = c.companies.create(company_dto("Acme"), None).await.unwrap();
    let link = c
        .links
        .create(link_dto(acme.id, "https://acme.example"))
        .await
        .unwrap();
    c.links.delete(link.id).await.unwrap();

    for expected in 1..=3 {
        let event = events.recv().await.unwrap();
        assert_eq!(event.generation, expected);
        assert_eq!(event.keys.len(), 4);
    }
    assert_eq!(c.cache.generation(), 3);
}

/// 失败的写操作不会使缓存失效
#[tokio::test]
async fn test_failed_mutation_keeps_cache() {
    let (c, _storage) = components().await;
    c.directory.fetch_all_companies().await.unwrap();
    assert!(!c.cache.is_empty());

    let result = c.companies.create(company_dto(""), None).await;

    assert!(matches!(result, Err(PortalError::Validation(_))));
    assert_eq!(c.cache.generation(), 0);
    assert!(!c.cache.is_empty());
}
