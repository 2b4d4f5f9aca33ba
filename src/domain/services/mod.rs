// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 爬取编排服务
pub mod crawl_service;
/// 列表页与人物页抓取代理
pub mod fetch_agent;
/// 列表页遍历
pub mod listing_walker;
/// 人物资料抽取
pub mod profile_extractor;
