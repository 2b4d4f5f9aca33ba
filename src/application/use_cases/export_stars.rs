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

use crate::domain::models::month_day::MonthDay;
use crate::domain::models::star::Star;
use crate::domain::repositories::storage_repository::StorageRepository;
use crate::domain::services::crawl_service::CrawlService;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::sync::Arc;
use tracing::{error, info};

/// 导出结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportReport {
    /// 输出文件键，例如 `12-23.json`
    pub key: String,
    /// 导出的记录数
    pub records: usize,
    /// 文件是否写入成功
    pub written: bool,
}

/// 将记录序列化为制表符缩进的JSON数组
pub fn to_pretty_json(stars: &[Star]) -> Result<Vec<u8>, serde_json::Error> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
    stars.serialize(&mut serializer)?;
    Ok(buf)
}

/// 导出用例
///
/// 爬取指定出生月日的人物并写入 `<月日>.json`。
/// 序列化和写入失败只记录日志，不中断流程。
pub struct ExportStarsUseCase<S: StorageRepository> {
    crawl_service: CrawlService,
    storage: Arc<S>,
}

impl<S: StorageRepository> ExportStarsUseCase<S> {
    pub fn new(crawl_service: CrawlService, storage: Arc<S>) -> Self {
        Self {
            crawl_service,
            storage,
        }
    }

    /// 执行导出
    ///
    /// # 参数
    ///
    /// * `month_day` - 出生月日
    ///
    /// # 返回值
    ///
    /// 导出结果摘要
    pub async fn execute(&self, month_day: &MonthDay) -> ExportReport {
        let stars = self.crawl_service.crawl(month_day).await;

        let data = to_pretty_json(&stars).unwrap_or_else(|e| {
            error!("Error while marshalling JSON: {}", e);
            Vec::new()
        });

        let key = format!("{}.json", month_day.token());
        let written = match self.storage.save(&key, &data).await {
            Ok(()) => {
                info!("Wrote {} records to {}", stars.len(), key);
                true
            }
            Err(e) => {
                error!("Error while writing JSON to {}: {}", key, e);
                false
            }
        };

        ExportReport {
            key,
            records: stars.len(),
            written,
        }
    }
}
