// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 抓取目标与列表页解析结果
pub mod crawl_target;
/// 出生月日输入
pub mod month_day;
/// 人物资料与代表作品
pub mod star;
