// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域层模块
///
/// 该模块包含系统的核心业务逻辑，包括：
/// - 领域模型（models）：人物记录、抓取目标和输入日期
/// - 仓库接口（repositories）：输出存储的抽象接口
/// - 服务（services）：字段抽取、列表页遍历和爬取编排
pub mod models;
pub mod repositories;
pub mod services;
