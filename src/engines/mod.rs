// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

pub mod cached_engine;
pub mod reqwest_engine;
pub mod traits;

use crate::config::settings::Settings;
use crate::engines::cached_engine::CachedEngine;
use crate::engines::reqwest_engine::ReqwestEngine;
use crate::engines::traits::{EngineError, ScraperEngine};
use crate::infrastructure::cache::disk_cache::DiskCache;
use std::sync::Arc;
use tracing::info;

/// 根据配置构建抓取引擎
///
/// 启用缓存时在HTTP引擎外包装磁盘缓存
pub fn build_engine(settings: &Settings) -> Result<Arc<dyn ScraperEngine>, EngineError> {
    let http: Arc<dyn ScraperEngine> = Arc::new(ReqwestEngine::new(
        &settings.http,
        &settings.crawl.allowed_domains,
    )?);
    if !settings.cache.enabled {
        return Ok(http);
    }

    info!("Using response cache at {}", settings.cache.dir);
    Ok(Arc::new(CachedEngine::new(
        http,
        DiskCache::new(&settings.cache.dir),
    )))
}
