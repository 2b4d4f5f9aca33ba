// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层模块
///
/// 包含的子模块：
/// - 缓存（cache）：按URL缓存HTTP响应的磁盘缓存
/// - 存储（storage）：导出文件的本地文件系统存储
pub mod cache;
pub mod storage;
