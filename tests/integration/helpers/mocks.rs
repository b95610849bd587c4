// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use async_trait::async_trait;
use portalrs::domain::models::app::App;
use portalrs::domain::models::asset::AssetBucket;
use portalrs::domain::models::company::Company;
use portalrs::domain::models::website_link::WebsiteLink;
use portalrs::domain::repositories::app_repository::AppRepository;
use portalrs::domain::repositories::company_repository::{
    CompanyFilter, CompanyRepository, RepositoryError,
};
use portalrs::domain::repositories::storage_repository::{StorageError, StorageRepository};
use portalrs::domain::repositories::website_link_repository::{RowOrder, WebsiteLinkRepository};
use sea_orm::DbErr;
use std::sync::atomic::{AtomicUsize, Ordering};
use uuid::Uuid;

/// 所有写入都失败的对象存储
#[derive(Default)]
pub struct FailingStorage {
    pub attempts: AtomicUsize,
}

#[async_trait]
impl StorageRepository for FailingStorage {
    async fn save(
        &self,
        _bucket: AssetBucket,
        _key: &str,
        _data: &[u8],
        _content_type: Option<&str>,
    ) -> Result<(), StorageError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(StorageError::Other("object store unavailable".to_string()))
    }

    async fn get(&self, _bucket: AssetBucket, _key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(None)
    }

    fn public_url(&self, bucket: AssetBucket, key: &str) -> String {
        format!("memory://failing/{}/{}", bucket, key)
    }
}

/// 记录调用次数的空仓库
#[derive(Default)]
pub struct RecordingRepository {
    pub calls: AtomicUsize,
}

impl RecordingRepository {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl CompanyRepository for RecordingRepository {
    async fn find_all(&self, _filter: CompanyFilter) -> Result<Vec<Company>, RepositoryError> {
        self.record();
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<Company>, RepositoryError> {
        self.record();
        Ok(None)
    }

    async fn create(&self, company: &Company) -> Result<Company, RepositoryError> {
        self.record();
        Ok(company.clone())
    }

    async fn update(&self, company: &Company) -> Result<Company, RepositoryError> {
        self.record();
        Ok(company.clone())
    }

    async fn delete(&self, _id: Uuid) -> Result<(), RepositoryError> {
        self.record();
        Ok(())
    }
}

#[async_trait]
impl WebsiteLinkRepository for RecordingRepository {
    async fn find_all(&self, _order: RowOrder) -> Result<Vec<WebsiteLink>, RepositoryError> {
        self.record();
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<WebsiteLink>, RepositoryError> {
        self.record();
        Ok(None)
    }

    async fn create(&self, link: &WebsiteLink) -> Result<WebsiteLink, RepositoryError> {
        self.record();
        Ok(link.clone())
    }

    async fn update(&self, link: &WebsiteLink) -> Result<WebsiteLink, RepositoryError> {
        self.record();
        Ok(link.clone())
    }

    async fn delete(&self, _id: Uuid) -> Result<(), RepositoryError> {
        self.record();
        Ok(())
    }
}

#[async_trait]
impl AppRepository for RecordingRepository {
    async fn find_all(&self, _order: RowOrder) -> Result<Vec<App>, RepositoryError> {
        self.record();
        Ok(Vec::new())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<App>, RepositoryError> {
        self.record();
        Ok(None)
    }

    async fn create(&self, app: &App) -> Result<App, RepositoryError> {
        self.record();
        Ok(app.clone())
    }

    async fn update(&self, app: &App) -> Result<App, RepositoryError> {
        self.record();
        Ok(app.clone())
    }

    async fn delete(&self, _id: Uuid) -> Result<(), RepositoryError> {
        self.record();
        Ok(())
    }
}

/// 所有调用都返回数据库错误的仓库
pub struct FailingRepository;

fn unavailable() -> RepositoryError {
    RepositoryError::Database(DbErr::Custom("store unavailable".to_string()))
}

#[async_trait]
impl WebsiteLinkRepository for FailingRepository {
    async fn find_all(&self, _order: RowOrder) -> Result<Vec<WebsiteLink>, RepositoryError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<WebsiteLink>, RepositoryError> {
        Err(unavailable())
    }

    async fn create(&self, _link: &WebsiteLink) -> Result<WebsiteLink, RepositoryError> {
        Err(unavailable())
    }

    async fn update(&self, _link: &WebsiteLink) -> Result<WebsiteLink, RepositoryError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: Uuid) -> Result<(), RepositoryError> {
        Err(unavailable())
    }
}

#[async_trait]
impl AppRepository for FailingRepository {
    async fn find_all(&self, _order: RowOrder) -> Result<Vec<App>, RepositoryError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: Uuid) -> Result<Option<App>, RepositoryError> {
        Err(unavailable())
    }

    async fn create(&self, _app: &App) -> Result<App, RepositoryError> {
        Err(unavailable())
    }

    async fn update(&self, _app: &App) -> Result<App, RepositoryError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: Uuid) -> Result<(), RepositoryError> {
        Err(unavailable())
    }
}
