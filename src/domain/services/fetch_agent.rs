// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawl_target::TargetRole;
use crate::engines::traits::{EngineError, ScrapeRequest, ScrapeResponse, ScraperEngine};
use crate::utils::url_utils::host_allowed;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// 抓取代理错误类型
#[derive(Error, Debug)]
pub enum FetchError {
    /// 主机不在允许列表中
    #[error("Domain not allowed: {0}")]
    DomainNotAllowed(String),
    /// 引擎错误
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// 非 2xx 响应
    #[error("HTTP {status} for {url}")]
    HttpStatus { status: u16, url: String },
}

/// 抓取代理
///
/// 负责一类页面（列表页或人物页）的获取。兄弟代理通过 [`FetchAgent::clone_for`]
/// 创建，共享同一个引擎（含缓存）和域名允许列表。
#[derive(Clone)]
pub struct FetchAgent {
    role: TargetRole,
    engine: Arc<dyn ScraperEngine>,
    allowed_domains: Arc<[String]>,
    timeout: Duration,
}

impl FetchAgent {
    pub fn new(
        role: TargetRole,
        engine: Arc<dyn ScraperEngine>,
        allowed_domains: Vec<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            role,
            engine,
            allowed_domains: allowed_domains.into(),
            timeout,
        }
    }

    /// 以相同的传输、缓存和域名配置创建另一角色的代理
    pub fn clone_for(&self, role: TargetRole) -> Self {
        Self {
            role,
            ..self.clone()
        }
    }

    pub fn role(&self) -> TargetRole {
        self.role
    }

    /// URL的主机是否在允许列表中
    pub fn allows(&self, url: &Url) -> bool {
        host_allowed(url, &self.allowed_domains)
    }

    /// 获取页面
    ///
    /// 不在允许列表中的URL不会交给引擎，重定向后落在列表外的响应同样被拒绝；
    /// 非 2xx 响应返回 [`FetchError::HttpStatus`]
    pub async fn fetch(&self, url: &Url) -> Result<ScrapeResponse, FetchError> {
        if !self.allows(url) {
            return Err(FetchError::DomainNotAllowed(
                url.host_str().unwrap_or_default().to_string(),
            ));
        }

        let response = self
            .engine
            .scrape(&ScrapeRequest::new(url.clone(), self.timeout))
            .await?;

        // the post-redirect address must be allowed too
        if let Ok(landed) = Url::parse(&response.url) {
            if !self.allows(&landed) {
                return Err(FetchError::DomainNotAllowed(
                    landed.host_str().unwrap_or_default().to_string(),
                ));
            }
        }

        if !response.is_success() {
            return Err(FetchError::HttpStatus {
                status: response.status_code,
                url: url.to_string(),
            });
        }

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::HttpSettings;
    use crate::engines::reqwest_engine::ReqwestEngine;
    use async_trait::async_trait;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    /// Answers every request as if it had been redirected to `landed`.
    struct LandsElsewhere {
        landed: String,
    }

    #[async_trait]
    impl ScraperEngine for LandsElsewhere {
        async fn scrape(&self, _request: &ScrapeRequest) -> Result<ScrapeResponse, EngineError> {
            Ok(ScrapeResponse {
                url: self.landed.clone(),
                status_code: 200,
                content: "<html></html>".to_string(),
                content_type: "text/html".to_string(),
                response_time_ms: 0,
            })
        }

        fn name(&self) -> &'static str {
            "lands-elsewhere"
        }
    }

    fn local_agent(engine: Arc<dyn ScraperEngine>) -> FetchAgent {
        FetchAgent::new(
            TargetRole::Listing,
            engine,
            vec!["127.0.0.1".to_string()],
            Duration::from_secs(5),
        )
    }

    #[tokio::test]
    async fn test_redirect_to_other_host_is_not_followed() {
        let server = MockServer::start().await;
        let offsite = format!("http://localhost:{}/offsite", server.address().port());
        Mock::given(method("GET"))
            .and(path("/start"))
            .respond_with(ResponseTemplate::new(302).insert_header("location", offsite.as_str()))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/offsite"))
            .respond_with(ResponseTemplate::new(200).set_body_string("OFFSITE BODY"))
            .mount(&server)
            .await;

        let allowed = vec!["127.0.0.1".to_string()];
        let settings = HttpSettings {
            user_agent: "starcrawl-test/1.0".to_string(),
            timeout_secs: 5,
        };
        let engine = Arc::new(ReqwestEngine::new(&settings, &allowed).unwrap());
        let agent = local_agent(engine);

        let start = Url::parse(&format!("{}/start", server.uri())).unwrap();
        let result = agent.fetch(&start).await;

        assert!(matches!(result, Err(FetchError::Engine(_))));
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_response_landing_off_list_is_rejected() {
        let agent = local_agent(Arc::new(LandsElsewhere {
            landed: "https://elsewhere.example/page".to_string(),
        }));

        let result = agent
            .fetch(&Url::parse("http://127.0.0.1/start").unwrap())
            .await;

        match result {
            Err(FetchError::DomainNotAllowed(host)) => assert_eq!(host, "elsewhere.example"),
            other => panic!("expected DomainNotAllowed, got {:?}", other.map(|r| r.url)),
        }
    }

    #[tokio::test]
    async fn test_unlisted_start_url_never_reaches_engine() {
        let agent = local_agent(Arc::new(LandsElsewhere {
            landed: "http://127.0.0.1/start".to_string(),
        }));

        let result = agent
            .fetch(&Url::parse("https://www.imdb.com/").unwrap())
            .await;

        assert!(matches!(result, Err(FetchError::DomainNotAllowed(_))));
    }
}
