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

use crate::config::settings::Settings;
use crate::domain::models::crawl_target::{CrawlTarget, ListingPage, TargetRole};
use crate::domain::models::month_day::MonthDay;
use crate::domain::models::star::Star;
use crate::domain::services::fetch_agent::FetchAgent;
use crate::domain::services::listing_walker::ListingWalker;
use crate::domain::services::profile_extractor::ProfileExtractor;
use crate::engines::traits::ScraperEngine;
use crate::utils::html_query::SelectorError;
use crate::utils::url_utils::resolve_url;
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};
use url::Url;

/// 爬取服务错误类型
#[derive(Error, Debug)]
pub enum CrawlError {
    /// 搜索地址无效
    #[error("Invalid search URL: {0}")]
    InvalidSearchUrl(#[from] url::ParseError),
    /// 选择器无效
    #[error(transparent)]
    Selector(#[from] SelectorError),
}

/// 单个抓取任务的结果，只由编排循环消费
enum TaskOutcome {
    Listing(Option<ListingPage>),
    Profile { seq: usize, star: Option<Star> },
}

/// 调度状态
#[derive(Default)]
struct Frontier {
    seen_listings: HashSet<Url>,
    seen_profiles: HashSet<Url>,
    listing_pages: usize,
    next_seq: usize,
}

/// 爬取服务
///
/// 列表页代理与人物页代理共享引擎、缓存和域名允许列表。
/// 抓取任务以工作队列的方式扇出，并发数由信号量限制；
/// 结果集合只由编排循环写入，最终按发现顺序返回。
pub struct CrawlService {
    listing_agent: FetchAgent,
    profile_agent: FetchAgent,
    walker: Arc<ListingWalker>,
    extractor: Arc<ProfileExtractor>,
    search_url: Url,
    max_concurrency: usize,
    max_listing_pages: Option<usize>,
}

impl CrawlService {
    /// 创建新的爬取服务实例
    ///
    /// # 参数
    ///
    /// * `engine` - 两个代理共用的抓取引擎
    /// * `settings` - 应用配置
    ///
    /// # 返回值
    ///
    /// * `Ok(CrawlService)` - 创建成功
    /// * `Err(CrawlError)` - 搜索地址或选择器无效
    pub fn new(engine: Arc<dyn ScraperEngine>, settings: &Settings) -> Result<Self, CrawlError> {
        let base = Url::parse(&settings.crawl.base_url)?;
        let search_url = resolve_url(&base, &settings.crawl.search_path)?;

        let listing_agent = FetchAgent::new(
            TargetRole::Listing,
            engine,
            settings.crawl.allowed_domains.clone(),
            settings.http.timeout(),
        );
        let profile_agent = listing_agent.clone_for(TargetRole::Profile);

        Ok(Self {
            listing_agent,
            profile_agent,
            walker: Arc::new(ListingWalker::new()?),
            extractor: Arc::new(ProfileExtractor::new()?),
            search_url,
            max_concurrency: settings.crawl.max_concurrency.max(1),
            max_listing_pages: settings.crawl.max_listing_pages,
        })
    }

    /// 按出生月日构建第一个列表页地址
    pub fn listing_url(&self, month_day: &MonthDay) -> Url {
        let mut url = self.search_url.clone();
        url.query_pairs_mut()
            .append_pair("birth_monthday", &month_day.query_value());
        url
    }

    /// 执行爬取
    ///
    /// 所有派发出去的任务完成且队列为空后返回。抓取失败或未匹配人物页标记的
    /// 页面不产生记录。
    ///
    /// # 参数
    ///
    /// * `month_day` - 出生月日
    ///
    /// # 返回值
    ///
    /// 按列表页发现顺序排列的人物记录
    pub async fn crawl(&self, month_day: &MonthDay) -> Vec<Star> {
        let start_url = self.listing_url(month_day);
        info!("Starting crawling into {}", start_url);

        let permits = Arc::new(Semaphore::new(self.max_concurrency));
        let mut tasks = JoinSet::new();
        let mut frontier = Frontier::default();
        let mut records: Vec<(usize, Star)> = Vec::new();

        self.dispatch(CrawlTarget::listing(start_url), &mut frontier, &mut tasks, &permits);

        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(TaskOutcome::Listing(Some(page))) => {
                    for target in page.into_targets() {
                        self.dispatch(target, &mut frontier, &mut tasks, &permits);
                    }
                }
                Ok(TaskOutcome::Listing(None)) => {}
                Ok(TaskOutcome::Profile { seq, star }) => {
                    if let Some(star) = star {
                        records.push((seq, star));
                    }
                }
                Err(e) => warn!("Crawl task failed: {}", e),
            }
        }

        records.sort_by_key(|(seq, _)| *seq);
        info!(
            listing_pages = frontier.listing_pages,
            profiles = frontier.next_seq,
            records = records.len(),
            "Crawl finished"
        );

        records.into_iter().map(|(_, star)| star).collect()
    }

    fn dispatch(
        &self,
        target: CrawlTarget,
        frontier: &mut Frontier,
        tasks: &mut JoinSet<TaskOutcome>,
        permits: &Arc<Semaphore>,
    ) {
        let agent = match target.role {
            TargetRole::Listing => &self.listing_agent,
            TargetRole::Profile => &self.profile_agent,
        };
        if !agent.allows(&target.url) {
            debug!("Skipping {} outside allowed domains", target.url);
            return;
        }

        match target.role {
            TargetRole::Listing => {
                if !frontier.seen_listings.insert(target.url.clone()) {
                    debug!("Listing page {} already visited", target.url);
                    return;
                }
                if self
                    .max_listing_pages
                    .is_some_and(|max| frontier.listing_pages >= max)
                {
                    info!("Listing page limit reached, not following {}", target.url);
                    return;
                }
                frontier.listing_pages += 1;

                let agent = agent.clone();
                let walker = self.walker.clone();
                let permits = permits.clone();
                tasks.spawn(async move {
                    let _permit = permits.acquire_owned().await.ok();
                    match agent.fetch(&target.url).await {
                        Ok(response) => {
                            // relative links resolve against the post-redirect address
                            let base = Url::parse(&response.url).unwrap_or_else(|_| target.url.clone());
                            TaskOutcome::Listing(Some(walker.walk(&response.content, &base)))
                        }
                        Err(e) => {
                            warn!("Failed to fetch {} page {}: {}", agent.role(), target.url, e);
                            TaskOutcome::Listing(None)
                        }
                    }
                });
            }
            TargetRole::Profile => {
                if !frontier.seen_profiles.insert(target.url.clone()) {
                    debug!("Profile {} already visited", target.url);
                    return;
                }
                let seq = frontier.next_seq;
                frontier.next_seq += 1;

                let agent = agent.clone();
                let extractor = self.extractor.clone();
                let permits = permits.clone();
                tasks.spawn(async move {
                    let _permit = permits.acquire_owned().await.ok();
                    info!("Visiting {}", target.url);
                    let star = match agent.fetch(&target.url).await {
                        Ok(response) => {
                            let star = extractor.extract(&response.content);
                            if star.is_none() {
                                debug!("No profile details found on {}", target.url);
                            }
                            star
                        }
                        Err(e) => {
                            warn!("Failed to fetch {} page {}: {}", agent.role(), target.url, e);
                            None
                        }
                    };
                    TaskOutcome::Profile { seq, star }
                });
            }
        }
    }
}

#[cfg(test)]
#[path = "crawl_service_test.rs"]
mod tests;
