// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 用例模块
///
/// 管理端的增删改操作。每个成功的写操作都会使查询缓存整体失效。
pub mod app_use_case;
pub mod company_use_case;
pub mod link_use_case;

use crate::domain::models::asset::UploadedFile;
use crate::infrastructure::cache::query_cache::QueryCache;
use tracing::{info, warn};

/// 写操作成功后的收尾：整体失效缓存并记录指标
pub(crate) fn finish_mutation(cache: &QueryCache, entity: &'static str, operation: &'static str) {
    let event = cache.invalidate_all();
    metrics::counter!(
        "portal_mutations_total",
        "entity" => entity,
        "operation" => operation
    )
    .increment(1);
    info!(
        "{} {} committed, cache generation {}",
        entity, operation, event.generation
    );
}

/// 上传已完成但记录写入失败，资源成为孤儿文件
pub(crate) fn warn_orphaned_asset(asset_url: Option<&str>, entity: &'static str) {
    if let Some(url) = asset_url {
        metrics::counter!("portal_orphaned_assets_total", "entity" => entity).increment(1);
        warn!("Row write for {} failed after upload, asset orphaned: {}", entity, url);
    }
}

/// 浏览器在未选择文件时也会提交一个空的文件字段
pub(crate) fn present(file: Option<UploadedFile>) -> Option<UploadedFile> {
    file.filter(|f| !f.is_empty())
}
