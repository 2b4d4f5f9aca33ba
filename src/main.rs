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

use anyhow::Context;
use starcrawl::application::use_cases::export_stars::ExportStarsUseCase;
use starcrawl::config::settings::Settings;
use starcrawl::domain::models::month_day::MonthDay;
use starcrawl::domain::services::crawl_service::CrawlService;
use starcrawl::engines::build_engine;
use starcrawl::infrastructure::storage::LocalStorage;
use starcrawl::utils::telemetry;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// 主函数
///
/// 从标准输入读取 `MM-DD`，爬取该日出生的人物并写入 `<输出目录>/<MM-DD>.json`
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();

    // 2. Load configuration
    let settings = Settings::new()?;
    info!("Configuration loaded");

    // 3. Read the date before touching the network
    println!("Type a date and month in (MM-DD) format:");
    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await
        .context("Unable to read input")?;
    let token = line
        .split_whitespace()
        .next()
        .context("Unable to read input: no date given")?;
    let month_day: MonthDay = token.parse()?;
    info!("Collecting stars born on {}", month_day);

    // 4. Initialize components
    let engine = build_engine(&settings)?;
    let crawl_service = CrawlService::new(engine, &settings)?;
    let storage = Arc::new(LocalStorage::new(&settings.output.dir));

    // 5. Crawl and export
    let report = ExportStarsUseCase::new(crawl_service, storage)
        .execute(&month_day)
        .await;
    info!(
        records = report.records,
        written = report.written,
        "Export of {} finished",
        report.key
    );

    Ok(())
}
