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

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// 应用程序配置设置
///
/// 包含抓取、HTTP、缓存和输出等所有配置项
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 抓取配置
    pub crawl: CrawlSettings,
    /// HTTP配置
    pub http: HttpSettings,
    /// 缓存配置
    pub cache: CacheSettings,
    /// 输出配置
    pub output: OutputSettings,
}

/// 抓取配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlSettings {
    /// 站点根地址
    pub base_url: String,
    /// 按生日搜索的路径
    pub search_path: String,
    /// 允许访问的主机列表
    pub allowed_domains: Vec<String>,
    /// 同时进行的最大请求数
    pub max_concurrency: usize,
    /// 列表页数量上限（不设置则不限制）
    pub max_listing_pages: Option<usize>,
}

/// HTTP配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct HttpSettings {
    /// User-Agent
    pub user_agent: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 响应缓存配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct CacheSettings {
    /// 是否启用磁盘缓存
    pub enabled: bool,
    /// 缓存目录
    pub dir: String,
}

/// 输出配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct OutputSettings {
    /// 输出目录
    pub dir: String,
}

impl Settings {
    /// 创建新的配置实例
    ///
    /// 依次加载默认值、`config/default`、`config/{APP_ENVIRONMENT}` 和
    /// `STARCRAWL__` 前缀的环境变量
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 配置加载失败
    pub fn new() -> Result<Self, ConfigError> {
        let env = std::env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "default".to_string());
        let builder = Self::with_defaults(Config::builder())?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", env)).required(false))
            .add_source(
                Environment::with_prefix("STARCRAWL")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("crawl.allowed_domains")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// 仅使用内置默认值构建配置
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::with_defaults(Config::builder())?
            .build()?
            .try_deserialize()
    }

    fn with_defaults(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        builder
            // Default crawl settings
            .set_default("crawl.base_url", "https://www.imdb.com")?
            .set_default("crawl.search_path", "/search/name/")?
            .set_default("crawl.allowed_domains", vec!["www.imdb.com", "imdb.com"])?
            .set_default("crawl.max_concurrency", 4)?
            // Default HTTP settings
            .set_default(
                "http.user_agent",
                "Mozilla/5.0 (compatible; starcrawl/0.1; +https://github.com/Kirky-X)",
            )?
            .set_default("http.timeout_secs", 30)?
            // Default cache settings
            .set_default("cache.enabled", true)?
            .set_default("cache.dir", "./.imdb_cache")?
            // Default output settings
            .set_default("output.dir", "./outputs")
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
