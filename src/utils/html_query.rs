// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 基于 CSS 选择器的文档查询
//!
//! 抽取逻辑只依赖这里的三个查询函数，不直接操作 `scraper` 的节点树。

use scraper::element_ref::Select;
use scraper::{ElementRef, Selector};
use thiserror::Error;

/// 选择器错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid selector `{selector}`: {reason}")]
pub struct SelectorError {
    pub selector: String,
    pub reason: String,
}

/// 编译 CSS 选择器
pub fn compile(selector: &str) -> Result<Selector, SelectorError> {
    Selector::parse(selector).map_err(|e| SelectorError {
        selector: selector.to_string(),
        reason: e.to_string(),
    })
}

/// 所有匹配元素文本的拼接，去除首尾空白；无匹配时返回空字符串
pub fn query_text(scope: ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .flat_map(|element| element.text())
        .collect::<String>()
        .trim()
        .to_string()
}

/// 第一个匹配元素的属性值，去除首尾空白；无匹配或无该属性时返回空字符串
pub fn query_attr(scope: ElementRef<'_>, selector: &Selector, attr: &str) -> String {
    scope
        .select(selector)
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(|value| value.trim().to_string())
        .unwrap_or_default()
}

/// 按文档顺序返回所有匹配元素
pub fn query_all<'a, 'b>(scope: ElementRef<'a>, selector: &'b Selector) -> Select<'a, 'b> {
    scope.select(selector)
}
