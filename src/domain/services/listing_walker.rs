// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::crawl_target::ListingPage;
use crate::utils::html_query::{compile, query_all, query_attr, SelectorError};
use crate::utils::url_utils::resolve_link;
use scraper::{Html, Selector};
use tracing::debug;
use url::Url;

const LISTER_ITEM: &str = ".mode-detail";
const PROFILE_LINK: &str = "div.lister-item-image > a";
const NEXT_PAGE: &str = "a.lister-page-next";

/// 列表页遍历器
///
/// 从搜索结果页中找出人物页链接和下一页链接，并按页面地址解析为绝对URL
#[derive(Debug, Clone)]
pub struct ListingWalker {
    item: Selector,
    profile_link: Selector,
    next_page: Selector,
}

impl ListingWalker {
    pub fn new() -> Result<Self, SelectorError> {
        Ok(Self {
            item: compile(LISTER_ITEM)?,
            profile_link: compile(PROFILE_LINK)?,
            next_page: compile(NEXT_PAGE)?,
        })
    }

    /// 解析列表页
    ///
    /// # 参数
    ///
    /// * `html` - 列表页HTML
    /// * `page_url` - 列表页自身地址，用于解析相对链接
    ///
    /// # 返回值
    ///
    /// 页面中的人物页链接（页面顺序）以及至多一个下一页链接
    pub fn walk(&self, html: &str, page_url: &Url) -> ListingPage {
        let document = Html::parse_document(html);
        let root = document.root_element();

        let profiles = query_all(root, &self.item)
            .filter_map(|item| {
                let href = query_attr(item, &self.profile_link, "href");
                let resolved = resolve_link(page_url, &href);
                if resolved.is_none() {
                    debug!("Skipping listing item without a usable profile link on {}", page_url);
                }
                resolved
            })
            .collect();

        let next_href = query_attr(root, &self.next_page, "href");
        let next = resolve_link(page_url, &next_href);

        ListingPage { profiles, next }
    }
}
