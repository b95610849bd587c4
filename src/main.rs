// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use portalrs::config::settings::Settings;
use portalrs::infrastructure::cache::query_cache::QueryCache;
use portalrs::infrastructure::database::connection;
use portalrs::infrastructure::storage::create_storage_repository;
use portalrs::presentation::routes::{self, AppComponents};
use portalrs::utils::telemetry;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting portalrs...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // Initialize Prometheus Metrics
    portalrs::infrastructure::metrics::init_metrics(&settings.metrics)?;

    // 3. Connect to database and run migrations
    let db = Arc::new(connection::connect_and_migrate(&settings.database).await?);
    info!("Database connection established");

    // 4. Initialize storage and query cache
    let storage = create_storage_repository(&settings.storage)?;
    info!("Storage backend '{}' initialized", settings.storage.storage_type);
    let cache = QueryCache::with_ttl_seconds(settings.cache.ttl_seconds);

    // 5. Initialize components
    let components = AppComponents::new(db, storage, cache);

    match (
        settings.auth.bootstrap_admin_email.as_deref(),
        settings.auth.bootstrap_admin_token.as_deref(),
    ) {
        (Some(email), Some(token)) => {
            components.auth.ensure_admin(email, token).await?;
        }
        (None, None) => {}
        _ => warn!("Both auth.bootstrap_admin_email and auth.bootstrap_admin_token are required to bootstrap an admin"),
    }

    // 6. Start HTTP server
    let app = routes::routes(components, settings.upload.max_upload_bytes);

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutdown signal received");
}
