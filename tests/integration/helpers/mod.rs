// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use starcrawl::config::settings::Settings;
use std::path::Path;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub fn listing_page(profile_hrefs: &[&str], next_href: Option<&str>) -> String {
    let items: String = profile_hrefs
        .iter()
        .map(|href| {
            format!(
                r#"<div class="lister-item mode-detail">
                    <div class="lister-item-image"><a href="{}"><img src="/img.jpg"></a></div>
                </div>"#,
                href
            )
        })
        .collect();
    let next = next_href
        .map(|href| format!(r#"<a href="{}" class="lister-page-next next-page">Next »</a>"#, href))
        .unwrap_or_default();
    format!(
        r#"<html><body><div class="lister-list">{}</div><div class="desc">{}</div></body></html>"#,
        items, next
    )
}

pub fn profile_page(name: &str, job: &str, born: &str, movies: &[(&str, &str)]) -> String {
    let known_for: String = movies
        .iter()
        .map(|(title, year)| {
            format!(
                r#"<div class="knownfor-title">
                    <div class="knownfor-title-role"><a class="knownfor-ellipsis">{}</a></div>
                    <div class="knownfor-year"><span class="knownfor-ellipsis">{}</span></div>
                </div>"#,
                title, year
            )
        })
        .collect();
    format!(
        r#"<html><body><div id="content-2-wide">
            <h1 class="header"><span class="itemprop">{name}</span></h1>
            <img id="name-poster" src="https://images.example/{name}.jpg">
            <div id="name-job-categories"><a><span class="itemprop">{job}</span></a></div>
            <div id="name-born-info"><time datetime="{born}">{born}</time></div>
            <div id="name-bio-text"><div class="name-trivia-bio-text"><div class="inline">
                {name} has a biography.
            </div></div></div>
            <div id="knownfor">{known_for}</div>
        </div></body></html>"#
    )
}

pub async fn mount_html(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(body),
        )
        .mount(server)
        .await;
}

pub async fn mount_search(server: &MockServer, month_day: &str, body: String) {
    Mock::given(method("GET"))
        .and(path("/search/name/"))
        .and(query_param("birth_monthday", month_day))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .set_body_string(body),
        )
        .mount(server)
        .await;
}

/// Settings pointing at the mock server, with cache and output under `work_dir`.
pub fn settings_for(server: &MockServer, work_dir: &Path) -> Settings {
    let mut settings = Settings::defaults().expect("default settings");
    settings.crawl.base_url = server.uri();
    settings.crawl.allowed_domains = vec!["127.0.0.1".to_string()];
    settings.http.timeout_secs = 5;
    settings.cache.dir = work_dir.join(".imdb_cache").to_string_lossy().to_string();
    settings.output.dir = work_dir.join("outputs").to_string_lossy().to_string();
    settings
}
