//! 对象缓存
//!
//! 目前只缓存已认证用户（键 `user:<token>`），值为 JSON 字符串。
//! 后端由 `cache.cache_type` 选择：`moka`（进程内）或 `redis`。

pub mod object_cache;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::errors::{CoopError, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheResult<T> {
    Found(T),
    NotFound,
    // 后端出错，调用方按未命中处理并清理
    ExistsButNoValue,
}

#[async_trait]
pub trait ObjectCache: Send + Sync {
    async fn get_raw(&self, key: &str) -> CacheResult<String>;
    /// ttl 为 0 时使用 `cache.default_ttl`
    async fn insert_raw(&self, key: String, value: String, ttl: u64);
    async fn remove(&self, key: &str);
    async fn invalidate_all(&self);
}

pub async fn create_cache() -> Result<Arc<dyn ObjectCache>> {
    let config = AppConfig::get();
    match config.cache.cache_type.as_str() {
        "redis" => {
            let cache = object_cache::redis::RedisObjectCache::new()
                .await
                .map_err(CoopError::cache_connection)?;
            info!("Using redis object cache");
            Ok(Arc::new(cache))
        }
        "moka" => Ok(Arc::new(object_cache::moka::MokaCacheWrapper::new())),
        other => {
            warn!("Unknown cache type '{other}', falling back to moka");
            Ok(Arc::new(object_cache::moka::MokaCacheWrapper::new()))
        }
    }
}
