// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含导出用例，将爬取结果写入输出文件
pub mod application;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 领域模块
///
/// 包含人物记录模型、抽取规则和爬取编排
pub mod domain;

/// 引擎模块
///
/// 实现HTTP抓取引擎和带缓存的引擎
pub mod engines;

/// 基础设施模块
///
/// 提供磁盘响应缓存和输出文件存储
pub mod infrastructure;

/// 工具模块
///
/// 提供文档查询、URL处理和日志初始化
pub mod utils;
