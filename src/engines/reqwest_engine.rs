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

use crate::config::settings::HttpSettings;
use crate::engines::traits::{EngineError, ScrapeRequest, ScrapeResponse, ScraperEngine};
use crate::utils::url_utils::host_allowed;
use async_trait::async_trait;
use reqwest::redirect::Policy;
use std::sync::Arc;
use std::time::Instant;

const MAX_REDIRECTS: usize = 10;

/// 重定向策略：只跟随到允许列表内主机的重定向
fn redirect_policy(allowed_domains: &[String]) -> Policy {
    let allowed: Arc<[String]> = allowed_domains.into();
    Policy::custom(move |attempt| {
        if attempt.previous().len() >= MAX_REDIRECTS {
            return attempt.error("too many redirects");
        }
        if host_allowed(attempt.url(), &allowed) {
            return attempt.follow();
        }
        let message = format!("redirect to {} outside allowed domains", attempt.url());
        attempt.error(message)
    })
}

/// 抓取引擎
///
/// 基于reqwest实现的基本HTTP抓取引擎，所有请求共用一个客户端
pub struct ReqwestEngine {
    client: reqwest::Client,
}

impl ReqwestEngine {
    /// 根据HTTP配置创建引擎
    ///
    /// # 参数
    ///
    /// * `settings` - HTTP配置
    /// * `allowed_domains` - 允许跟随重定向的主机
    ///
    /// # 返回值
    ///
    /// * `Ok(ReqwestEngine)` - 创建成功
    /// * `Err(EngineError)` - 客户端构建失败
    pub fn new(settings: &HttpSettings, allowed_domains: &[String]) -> Result<Self, EngineError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.as_str())
            .timeout(settings.timeout())
            .redirect(redirect_policy(allowed_domains))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ScraperEngine for ReqwestEngine {
    /// 执行HTTP抓取
    ///
    /// 非 2xx 状态码不视为错误，由调用方根据 `status_code` 判断
    async fn scrape(&self, request: &ScrapeRequest) -> Result<ScrapeResponse, EngineError> {
        let start = Instant::now();
        let response = self
            .client
            .get(request.url.clone())
            .timeout(request.timeout)
            .send()
            .await?;

        let url = response.url().to_string();
        let status_code = response.status().as_u16();
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.trim().is_empty())
            .unwrap_or("text/html")
            .to_string();

        let content = response.text().await?;

        Ok(ScrapeResponse {
            url,
            status_code,
            content,
            content_type,
            response_time_ms: start.elapsed().as_millis() as u64,
        })
    }

    fn name(&self) -> &'static str {
        "reqwest"
    }
}

#[cfg(test)]
#[path = "reqwest_engine_test.rs"]
mod tests;
