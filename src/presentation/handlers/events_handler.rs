// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::Extension,
    response::sse::{Event, KeepAlive, Sse},
};
use futures::stream::{self, Stream};
use tokio::sync::broadcast::error::RecvError;
use tracing::debug;

use crate::infrastructure::cache::query_cache::QueryCache;

/// 缓存失效事件流（Server-Sent Events）
///
/// 客户端收到 `invalidate` 事件后重新拉取列表。
pub async fn cache_events(
    Extension(cache): Extension<QueryCache>,
) -> Sse<impl Stream<Item = Result<Event, axum::Error>>> {
    let rx = cache.subscribe();

    let events = stream::unfold(rx, |mut rx| async move {
        loop {
            match rx.recv().await {
                Ok(event) => {
                    let sse = Event::default().event("invalidate").json_data(&event);
                    return Some((sse, rx));
                }
                Err(RecvError::Lagged(skipped)) => {
                    debug!("Event subscriber lagged, skipped {} events", skipped);
                    continue;
                }
                Err(RecvError::Closed) => return None,
            }
        }
    });

    Sse::new(events).keep_alive(KeepAlive::default())
}
