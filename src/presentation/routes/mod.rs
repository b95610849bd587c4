// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::application::use_cases::{
    app_use_case::AppUseCase, company_use_case::CompanyUseCase, link_use_case::LinkUseCase,
};
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::domain::services::{
    asset_service::AssetService, auth_service::AuthService, directory_service::DirectoryService,
};
use crate::infrastructure::cache::query_cache::QueryCache;
use crate::infrastructure::repositories::{
    app_repo_impl::AppRepositoryImpl, company_repo_impl::CompanyRepositoryImpl,
    user_repo_impl::UserRepositoryImpl, website_link_repo_impl::WebsiteLinkRepositoryImpl,
};
use crate::presentation::handlers::{
    app_handler, asset_handler, company_handler, events_handler, link_handler,
};
use crate::presentation::middleware::auth_middleware::{auth_middleware, AuthState};
use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::{get, put},
    Extension, Router,
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 路由依赖的服务和用例
#[derive(Clone)]
pub struct AppComponents {
    pub directory: Arc<DirectoryService>,
    pub companies: Arc<CompanyUseCase>,
    pub links: Arc<LinkUseCase>,
    pub apps: Arc<AppUseCase>,
    pub auth: Arc<AuthService>,
    pub storage: Arc<dyn StorageRepository>,
    pub cache: QueryCache,
}

impl AppComponents {
    /// 基于数据库连接和存储组装全部组件
    pub fn new(
        db: Arc<DatabaseConnection>,
        storage: Arc<dyn StorageRepository>,
        cache: QueryCache,
    ) -> Self {
        let company_repo = Arc::new(CompanyRepositoryImpl::new(db.clone()));
        let link_repo = Arc::new(WebsiteLinkRepositoryImpl::new(db.clone()));
        let app_repo = Arc::new(AppRepositoryImpl::new(db.clone()));
        let user_repo = Arc::new(UserRepositoryImpl::new(db));
        let assets = AssetService::new(storage.clone());

        Self {
            directory: Arc::new(DirectoryService::new(
                company_repo.clone(),
                link_repo.clone(),
                app_repo.clone(),
                cache.clone(),
            )),
            companies: Arc::new(CompanyUseCase::new(
                company_repo.clone(),
                assets.clone(),
                cache.clone(),
            )),
            links: Arc::new(LinkUseCase::new(
                link_repo,
                company_repo.clone(),
                cache.clone(),
            )),
            apps: Arc::new(AppUseCase::new(app_repo, company_repo, assets, cache.clone())),
            auth: Arc::new(AuthService::new(user_repo)),
            storage,
            cache,
        }
    }
}

/// 创建应用路由
///
/// # 参数
///
/// * `components` - 服务和用例
/// * `max_upload_bytes` - 请求体上限，APK上传需要较大的值
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(components: AppComponents, max_upload_bytes: usize) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/v1/version", get(version))
        .route("/v1/companies", get(company_handler::list_public_companies))
        .route("/v1/events", get(events_handler::cache_events))
        .route("/assets/{bucket}/{key}", get(asset_handler::download_asset));

    let auth_state = AuthState {
        auth: components.auth.clone(),
    };

    let admin_routes = Router::new()
        .route(
            "/v1/admin/companies",
            get(company_handler::list_companies).post(company_handler::create_company),
        )
        .route(
            "/v1/admin/companies/{id}",
            put(company_handler::update_company).delete(company_handler::delete_company),
        )
        .route(
            "/v1/admin/links",
            get(link_handler::list_links).post(link_handler::create_link),
        )
        .route(
            "/v1/admin/links/{id}",
            put(link_handler::update_link).delete(link_handler::delete_link),
        )
        .route(
            "/v1/admin/apps",
            get(app_handler::list_apps).post(app_handler::create_app),
        )
        .route(
            "/v1/admin/apps/{id}",
            put(app_handler::update_app).delete(app_handler::delete_app),
        )
        .route_layer(middleware::from_fn_with_state(auth_state, auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .layer(Extension(components.directory))
        .layer(Extension(components.companies))
        .layer(Extension(components.links))
        .layer(Extension(components.apps))
        .layer(Extension(components.storage))
        .layer(Extension(components.cache))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
