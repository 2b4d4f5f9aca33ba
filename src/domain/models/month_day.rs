// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

/// 日期输入错误
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MonthDayError {
    /// 缺少分隔符
    #[error("Expected a date in MM-DD form, got {0:?}")]
    MissingSeparator(String),
    /// 月份无法解析
    #[error("Unable to convert month into int: {0}")]
    InvalidMonth(#[source] ParseIntError),
    /// 日期无法解析
    #[error("Unable to convert day into int: {0}")]
    InvalidDay(#[source] ParseIntError),
}

/// 出生月日
///
/// 只解析为整数，不校验日历范围。原始输入保留用于输出文件命名。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthDay {
    pub month: u32,
    pub day: u32,
    token: String,
}

impl MonthDay {
    /// 用户输入的原始文本
    pub fn token(&self) -> &str {
        &self.token
    }

    /// 搜索接口使用的查询值，例如 `12-23`
    pub fn query_value(&self) -> String {
        format!("{}-{}", self.month, self.day)
    }
}

impl FromStr for MonthDay {
    type Err = MonthDayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let (month, day) = token
            .split_once('-')
            .ok_or_else(|| MonthDayError::MissingSeparator(token.to_string()))?;

        Ok(Self {
            month: month.parse().map_err(MonthDayError::InvalidMonth)?,
            day: day.parse().map_err(MonthDayError::InvalidDay)?,
            token: token.to_string(),
        })
    }
}

impl fmt::Display for MonthDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}
