// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use url::{ParseError, Url};

/// 将可能为相对路径的URL转换为绝对路径URL
pub fn resolve_url(base_url: &Url, path: &str) -> Result<Url, ParseError> {
    base_url.join(path)
}

/// 解析页面中的链接
///
/// 空链接、片段链接以及非 http(s) 链接返回 `None`
pub fn resolve_link(page_url: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty()
        || href.starts_with('#')
        || href.starts_with("mailto:")
        || href.starts_with("javascript:")
    {
        return None;
    }

    let url = resolve_url(page_url, href).ok()?;
    match url.scheme() {
        "http" | "https" => Some(url),
        _ => None,
    }
}

/// 检查URL主机是否在允许列表中（忽略大小写）
pub fn host_allowed(url: &Url, allowed_domains: &[String]) -> bool {
    url.host_str().is_some_and(|host| {
        allowed_domains
            .iter()
            .any(|domain| domain.eq_ignore_ascii_case(host))
    })
}
