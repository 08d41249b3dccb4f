use std::sync::Arc;

use tracing::warn;

use crate::cache::ObjectCache;
use crate::cache::object_cache::moka::MokaCacheWrapper;
use crate::errors::Result;
use crate::runtime::seed;
use crate::storage::Storage;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 创建缓存实例，配置的后端不可用时回退到进程内缓存
async fn create_cache() -> Arc<dyn ObjectCache> {
    match crate::cache::create_cache().await {
        Ok(cache) => cache,
        Err(e) => {
            warn!("Failed to create configured cache: {e}");
            warn!("Falling back to memory cache");
            Arc::new(MokaCacheWrapper::new())
        }
    }
}

/// 准备服务器启动的上下文：存储、迁移、初始数据与缓存
pub async fn prepare_server_startup() -> Result<StartupContext> {
    // 重复安装只会返回 Err，忽略即可
    let _ = rustls::crypto::ring::default_provider().install_default();

    let storage = crate::storage::create_storage().await?;
    warn!("Storage backend initialized and migrations completed");

    seed::seed_admin(&storage).await;
    seed::seed_demo_data(&storage).await;

    let cache = create_cache().await;
    warn!("Cache backend initialized");

    Ok(StartupContext { storage, cache })
}
