// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::engines::traits::{EngineError, ScrapeRequest, ScrapeResponse, ScraperEngine};
use crate::infrastructure::cache::disk_cache::DiskCache;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, warn};

/// 带磁盘缓存的抓取引擎
///
/// 命中缓存时直接回放之前的响应，否则委托给内部引擎，
/// 并缓存状态码小于500的响应。
pub struct CachedEngine {
    inner: Arc<dyn ScraperEngine>,
    cache: DiskCache,
}

impl CachedEngine {
    pub fn new(inner: Arc<dyn ScraperEngine>, cache: DiskCache) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl ScraperEngine for CachedEngine {
    async fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeResponse, EngineError> {
        let key = request.url.as_str();
        if let Some(cached) = self.cache.get(key).await? {
            debug!("Cache hit for {}", key);
            return Ok(cached);
        }

        let response = self.inner.scrape(request).await?;
        if response.status_code < 500 {
            // A failed cache write only costs a refetch next time
            if let Err(e) = self.cache.put(key, &response).await {
                warn!("Failed to cache response for {}: {}", key, e);
            }
        }

        Ok(response)
    }

    fn name(&self) -> &'static str {
        "cached"
    }
}
