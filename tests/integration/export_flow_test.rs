// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::helpers::{listing_page, mount_html, mount_search, profile_page, settings_for};
use serde_json::{json, Value};
use starcrawl::application::use_cases::export_stars::ExportStarsUseCase;
use starcrawl::config::settings::Settings;
use starcrawl::domain::models::month_day::MonthDay;
use starcrawl::domain::services::crawl_service::CrawlService;
use starcrawl::engines::build_engine;
use starcrawl::infrastructure::storage::LocalStorage;
use std::path::Path;
use std::sync::Arc;
use wiremock::MockServer;

async fn run_export(settings: &Settings, token: &str) -> Value {
    let engine = build_engine(settings).unwrap();
    let crawl_service = CrawlService::new(engine, settings).unwrap();
    let storage = Arc::new(LocalStorage::new(&settings.output.dir));
    let month_day: MonthDay = token.parse().unwrap();

    let report = ExportStarsUseCase::new(crawl_service, storage)
        .execute(&month_day)
        .await;
    assert!(report.written);

    let file = Path::new(&settings.output.dir).join(format!("{}.json", token));
    let data = std::fs::read_to_string(file).unwrap();
    serde_json::from_str(&data).unwrap()
}

async fn mount_two_page_site(server: &MockServer) {
    mount_search(
        server,
        "12-23",
        listing_page(&["/name/nm0000001/", "/name/nm0000002/"], Some("/search/name/next/")),
    )
    .await;
    mount_html(
        server,
        "/search/name/next/",
        listing_page(&["/name/nm0000003/", "https://elsewhere.example/name/nm9/"], None),
    )
    .await;
    mount_html(
        server,
        "/name/nm0000001/",
        profile_page("Alice", "Actress", "1970-12-23", &[("Example Film", "2001")]),
    )
    .await;
    mount_html(
        server,
        "/name/nm0000002/",
        profile_page("Bob", "Director", "1955-12-23", &[]),
    )
    .await;
    mount_html(
        server,
        "/name/nm0000003/",
        profile_page(
            "Carol",
            "Writer",
            "1980-12-23",
            &[("First", "1999"), ("Second", "Completed")],
        ),
    )
    .await;
}

#[tokio::test]
async fn test_export_writes_every_profile_across_pages() {
    let server = MockServer::start().await;
    mount_two_page_site(&server).await;
    let work_dir = tempfile::tempdir().unwrap();
    let settings = settings_for(&server, work_dir.path());

    let output = run_export(&settings, "12-23").await;

    assert_eq!(
        output,
        json!([
            {
                "name": "Alice",
                "photo": "https://images.example/Alice.jpg",
                "job_title": "Actress",
                "birthdate": "1970-12-23",
                "bio": "Alice has a biography.",
                "top_movies": [{ "title": "Example Film", "release": "2001" }]
            },
            {
                "name": "Bob",
                "photo": "https://images.example/Bob.jpg",
                "job_title": "Director",
                "birthdate": "1955-12-23",
                "bio": "Bob has a biography.",
                "top_movies": []
            },
            {
                "name": "Carol",
                "photo": "https://images.example/Carol.jpg",
                "job_title": "Writer",
                "birthdate": "1980-12-23",
                "bio": "Carol has a biography.",
                "top_movies": [
                    { "title": "First", "release": "1999" },
                    { "title": "Second", "release": "Completed" }
                ]
            }
        ])
    );

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 5);
}

#[tokio::test]
async fn test_export_without_results_writes_empty_array() {
    let server = MockServer::start().await;
    mount_search(&server, "2-30", listing_page(&[], None)).await;
    let work_dir = tempfile::tempdir().unwrap();
    let settings = settings_for(&server, work_dir.path());

    let output = run_export(&settings, "2-30").await;

    assert_eq!(output, json!([]));
}

#[tokio::test]
async fn test_output_file_is_tab_indented() {
    let server = MockServer::start().await;
    mount_search(&server, "7-4", listing_page(&["/name/nm0000001/"], None)).await;
    mount_html(
        &server,
        "/name/nm0000001/",
        profile_page("Dana", "Actress", "1990-07-04", &[]),
    )
    .await;
    let work_dir = tempfile::tempdir().unwrap();
    let settings = settings_for(&server, work_dir.path());

    run_export(&settings, "7-4").await;

    let raw = std::fs::read_to_string(Path::new(&settings.output.dir).join("7-4.json")).unwrap();
    assert!(raw.starts_with("[\n\t{\n\t\t\"name\": \"Dana\""));
}

#[tokio::test]
async fn test_second_run_is_served_from_cache() {
    let server = MockServer::start().await;
    mount_two_page_site(&server).await;
    let work_dir = tempfile::tempdir().unwrap();
    let settings = settings_for(&server, work_dir.path());

    let first = run_export(&settings, "12-23").await;
    let requests_after_first = server.received_requests().await.unwrap().len();

    server.reset().await;
    let second = run_export(&settings, "12-23").await;

    assert_eq!(first, second);
    assert_eq!(requests_after_first, 5);
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_disabled_cache_refetches() {
    let server = MockServer::start().await;
    mount_two_page_site(&server).await;
    let work_dir = tempfile::tempdir().unwrap();
    let mut settings = settings_for(&server, work_dir.path());
    settings.cache.enabled = false;

    run_export(&settings, "12-23").await;
    run_export(&settings, "12-23").await;

    assert_eq!(server.received_requests().await.unwrap().len(), 10);
    assert!(!Path::new(&settings.cache.dir).exists());
}
