// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use dashmap::DashMap;
use serde::Serialize;
use std::any::Any;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::broadcast;
use tracing::debug;

/// 事件通道容量，落后的订阅者会收到 Lagged 并继续接收新事件
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// 查询缓存键
///
/// 每个键对应一个读取视图
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum QueryKey {
    /// 公开页面的聚合公司列表
    #[serde(rename = "companies")]
    PublicCompanies,
    /// 管理视图：全部公司
    #[serde(rename = "admin-companies")]
    AdminCompanies,
    /// 管理视图：全部链接
    #[serde(rename = "admin-links")]
    AdminLinks,
    /// 管理视图：全部应用
    #[serde(rename = "admin-apps")]
    AdminApps,
}

impl QueryKey {
    /// 所有键，失效时一起清除
    pub const ALL: [QueryKey; 4] = [
        QueryKey::PublicCompanies,
        QueryKey::AdminCompanies,
        QueryKey::AdminLinks,
        QueryKey::AdminApps,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            QueryKey::PublicCompanies => "companies",
            QueryKey::AdminCompanies => "admin-companies",
            QueryKey::AdminLinks => "admin-links",
            QueryKey::AdminApps => "admin-apps",
        }
    }
}

/// 缓存失效事件
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidationEvent {
    /// 失效后的缓存代数
    pub generation: u64,
    /// 被清除的键
    pub keys: Vec<QueryKey>,
}

struct CacheEntry {
    value: Arc<dyn Any + Send + Sync>,
    created_at: Instant,
    ttl: Option<Duration>,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.ttl
            .map(|ttl| self.created_at.elapsed() > ttl)
            .unwrap_or(false)
    }
}

struct QueryCacheInner {
    entries: DashMap<QueryKey, CacheEntry>,
    generation: AtomicU64,
    ttl: Option<Duration>,
    notifier: broadcast::Sender<InvalidationEvent>,
}

/// 查询缓存
///
/// 按查询身份缓存读取结果。任何成功的写操作之后调用
/// [`QueryCache::invalidate_all`] 清除全部视图并通知订阅者。
/// 加载期间如果发生失效，加载结果不会写入缓存。
#[derive(Clone)]
pub struct QueryCache {
    inner: Arc<QueryCacheInner>,
}

impl QueryCache {
    /// 创建新的查询缓存
    ///
    /// # 参数
    ///
    /// * `ttl` - 条目存活时间，`None` 表示只依赖显式失效
    pub fn new(ttl: Option<Duration>) -> Self {
        let (notifier, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            inner: Arc::new(QueryCacheInner {
                entries: DashMap::new(),
                generation: AtomicU64::new(0),
                ttl,
                notifier,
            }),
        }
    }

    /// 从秒数配置创建，0 表示不过期
    pub fn with_ttl_seconds(ttl_seconds: u64) -> Self {
        let ttl = (ttl_seconds > 0).then(|| Duration::from_secs(ttl_seconds));
        Self::new(ttl)
    }

    /// 当前缓存代数，每次失效加一
    pub fn generation(&self) -> u64 {
        self.inner.generation.load(Ordering::SeqCst)
    }

    /// 读取缓存值，类型不匹配或已过期时返回 None
    pub fn get<T>(&self, key: QueryKey) -> Option<Arc<T>>
    where
        T: Send + Sync + 'static,
    {
        let (value, expired) = match self.inner.entries.get(&key) {
            Some(entry) => (entry.value.clone(), entry.is_expired()),
            None => return None,
        };

        if expired {
            self.inner.entries.remove(&key);
            return None;
        }

        value.downcast::<T>().ok()
    }

    /// 读取缓存值，未命中时执行加载函数
    ///
    /// 加载失败时直接返回错误，不写入任何缓存。
    pub async fn get_or_try_load<T, E, F, Fut>(&self, key: QueryKey, loader: F) -> Result<Arc<T>, E>
    where
        T: Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(value) = self.get::<T>(key) {
            metrics::counter!("portal_query_cache_hits_total", "query" => key.as_str()).increment(1);
            debug!("Query cache hit for key: {}", key.as_str());
            return Ok(value);
        }

        metrics::counter!("portal_query_cache_misses_total", "query" => key.as_str()).increment(1);
        debug!("Query cache miss for key: {}", key.as_str());

        let generation = self.generation();
        let value = Arc::new(loader().await?);
        self.store_if_current(key, value.clone(), generation);
        Ok(value)
    }

    fn store_if_current<T>(&self, key: QueryKey, value: Arc<T>, generation: u64)
    where
        T: Send + Sync + 'static,
    {
        if self.generation() != generation {
            debug!("Discarding stale load for key: {}", key.as_str());
            return;
        }

        let erased: Arc<dyn Any + Send + Sync> = value;
        self.inner.entries.insert(
            key,
            CacheEntry {
                value: erased.clone(),
                created_at: Instant::now(),
                ttl: self.inner.ttl,
            },
        );

        // invalidation may have raced with the insert above
        if self.generation() != generation {
            self.inner
                .entries
                .remove_if(&key, |_, entry| Arc::ptr_eq(&entry.value, &erased));
        }
    }

    /// 清除全部视图并通知订阅者
    pub fn invalidate_all(&self) -> InvalidationEvent {
        let generation = self.inner.generation.fetch_add(1, Ordering::SeqCst) + 1;
        for key in QueryKey::ALL {
            self.inner.entries.remove(&key);
        }

        let event = InvalidationEvent {
            generation,
            keys: QueryKey::ALL.to_vec(),
        };

        // no subscribers is fine
        let _ = self.inner.notifier.send(event.clone());
        metrics::counter!("portal_query_cache_invalidations_total").increment(1);
        debug!("Query cache invalidated, generation {}", generation);

        event
    }

    /// 订阅缓存失效事件
    pub fn subscribe(&self) -> broadcast::Receiver<InvalidationEvent> {
        self.inner.notifier.subscribe()
    }

    /// 当前缓存条目数
    pub fn len(&self) -> usize {
        self.inner.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.entries.is_empty()
    }
}
