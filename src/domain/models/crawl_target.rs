// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use std::fmt;
use url::Url;

/// 抓取目标的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetRole {
    /// 搜索结果列表页
    Listing,
    /// 人物资料页
    Profile,
}

impl fmt::Display for TargetRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetRole::Listing => write!(f, "listing"),
            TargetRole::Profile => write!(f, "profile"),
        }
    }
}

/// 抓取目标
///
/// 由列表页解析产生，立即交给编排器调度，不做持久保存。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTarget {
    pub url: Url,
    pub role: TargetRole,
}

impl CrawlTarget {
    pub fn listing(url: Url) -> Self {
        Self {
            url,
            role: TargetRole::Listing,
        }
    }

    pub fn profile(url: Url) -> Self {
        Self {
            url,
            role: TargetRole::Profile,
        }
    }
}

/// 单个列表页的解析结果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    /// 人物资料页链接（绝对地址，页面顺序）
    pub profiles: Vec<Url>,
    /// 下一页链接
    pub next: Option<Url>,
}

impl ListingPage {
    /// 转换为抓取目标：先是人物页，最后是下一页
    pub fn into_targets(self) -> Vec<CrawlTarget> {
        self.profiles
            .into_iter()
            .map(CrawlTarget::profile)
            .chain(self.next.map(CrawlTarget::listing))
            .collect()
    }
}
