// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 包含应用程序的用例实现，将爬取服务与输出存储组合成完整流程
pub mod use_cases;
