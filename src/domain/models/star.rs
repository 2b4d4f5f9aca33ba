// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

/// 人物资料实体
///
/// 每个成功匹配资料标记的人物页面对应一条记录。
/// 字段在构造后不再修改，缺失的字段为空字符串。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Star {
    /// 姓名
    pub name: String,
    /// 头像图片地址
    #[serde(rename = "photo")]
    pub photo_url: String,
    /// 职业
    pub job_title: String,
    /// 出生日期，保留来源页面 `datetime` 属性的原始格式
    #[serde(rename = "birthdate")]
    pub birth_date: String,
    /// 简介，已去除首尾空白
    #[serde(rename = "bio")]
    pub biography: String,
    /// 代表作品，按页面中的出现顺序排列
    #[serde(rename = "top_movies")]
    pub filmography: Vec<Movie>,
}

/// 代表作品条目
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movie {
    /// 作品标题
    pub title: String,
    /// 上映信息，通常是年份，也可能是状态标签
    #[serde(rename = "release")]
    pub release_info: String,
}

impl Movie {
    pub fn new(title: impl Into<String>, release_info: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            release_info: release_info.into(),
        }
    }
}
