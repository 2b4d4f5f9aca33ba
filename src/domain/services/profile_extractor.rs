// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::star::{Movie, Star};
use crate::utils::html_query::{compile, query_all, query_attr, query_text, SelectorError};
use scraper::{ElementRef, Html, Selector};

/// 人物页标记，只有匹配该元素的页面才会产生记录
pub const PROFILE_MARKER: &str = "#content-2-wide";

const NAME: &str = "h1.header > span.itemprop";
const PHOTO: &str = "#name-poster";
const JOB_TITLE: &str = "#name-job-categories > a > span.itemprop";
const BIRTH_DATE: &str = "#name-born-info > time";
const BIOGRAPHY: &str = "#name-bio-text > div.name-trivia-bio-text > div.inline";
const KNOWN_FOR: &str = "div.knownfor-title";
const KNOWN_FOR_TITLE: &str = "div.knownfor-title-role > a.knownfor-ellipsis";
const KNOWN_FOR_RELEASE: &str = "div.knownfor-title > div.knownfor-year > span.knownfor-ellipsis";

/// 人物资料抽取器
///
/// 将人物页文档映射为一条 [`Star`] 记录。选择器在构造时编译一次；
/// 抽取过程本身不会失败，找不到的字段一律为空字符串。
#[derive(Debug, Clone)]
pub struct ProfileExtractor {
    marker: Selector,
    name: Selector,
    photo: Selector,
    job_title: Selector,
    birth_date: Selector,
    biography: Selector,
    known_for: Selector,
    known_for_title: Selector,
    known_for_release: Selector,
}

impl ProfileExtractor {
    pub fn new() -> Result<Self, SelectorError> {
        Ok(Self {
            marker: compile(PROFILE_MARKER)?,
            name: compile(NAME)?,
            photo: compile(PHOTO)?,
            job_title: compile(JOB_TITLE)?,
            birth_date: compile(BIRTH_DATE)?,
            biography: compile(BIOGRAPHY)?,
            known_for: compile(KNOWN_FOR)?,
            known_for_title: compile(KNOWN_FOR_TITLE)?,
            known_for_release: compile(KNOWN_FOR_RELEASE)?,
        })
    }

    /// 从HTML中抽取人物记录
    ///
    /// # 参数
    ///
    /// * `html` - 人物页HTML
    ///
    /// # 返回值
    ///
    /// 页面不含人物页标记时返回 `None`
    pub fn extract(&self, html: &str) -> Option<Star> {
        let document = Html::parse_document(html);
        let scope = document.select(&self.marker).next()?;
        Some(self.extract_from(scope))
    }

    /// 在已定位的人物资料区域内抽取字段
    pub fn extract_from(&self, scope: ElementRef<'_>) -> Star {
        let filmography = query_all(scope, &self.known_for)
            .map(|block| Movie {
                title: query_text(block, &self.known_for_title),
                release_info: query_text(block, &self.known_for_release),
            })
            .collect();

        Star {
            name: query_text(scope, &self.name),
            photo_url: query_attr(scope, &self.photo, "src"),
            job_title: query_text(scope, &self.job_title),
            birth_date: query_attr(scope, &self.birth_date, "datetime"),
            biography: query_text(scope, &self.biography).trim().to_string(),
            filmography,
        }
    }
}

#[cfg(test)]
#[path = "profile_extractor_test.rs"]
mod tests;
