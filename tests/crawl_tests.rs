//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and run the full
//! fetch, convert, write and follow cycle end-to-end.

use site_scribe::config::Config;
use site_scribe::crawler::{Coordinator, HttpFetcher};
use site_scribe::output::FsWriter;
use site_scribe::url::parse_start_url;
use site_scribe::CrawlSummary;
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration with no politeness delay
fn create_test_config(max_depth: u32, max_pages: u32) -> Config {
    let mut config = Config::default();
    config.crawler.max_depth = max_depth;
    config.crawler.max_pages = max_pages;
    config.crawler.politeness_delay_ms = 0;
    config
}

async fn mount_page(server: &MockServer, page_path: &str, status: u16, body: String) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn run(server: &MockServer, config: &Config, output: &Path) -> CrawlSummary {
    let start = parse_start_url(&format!("{}/", server.uri())).expect("valid start URL");
    let fetcher = HttpFetcher::from_config(&config.user_agent, &config.crawler)
        .expect("Failed to build fetcher");
    let coordinator = Coordinator::new(config, start, output.to_path_buf(), fetcher, FsWriter)
        .expect("Failed to create coordinator");
    coordinator.run().await
}

/// Paths requested from the mock server, in order
async fn requested_paths(server: &MockServer) -> Vec<String> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| request.url.path().to_string())
        .collect()
}

fn read_output(dir: &Path, name: &str) -> String {
    std::fs::read_to_string(dir.join(name))
        .unwrap_or_else(|e| panic!("expected {} to be written: {}", name, e))
}

#[tokio::test]
async fn test_full_crawl_single_domain() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_page(
        &mock_server,
        "/",
        200,
        format!(
            r#"<html><head><title>Home</title></head><body>
            <nav><a href="/docs/">Docs</a></nav>
            <main><h1>Welcome</h1><p>Start here.</p>
            <a href="{}/about#team">About</a>
            <a href="https://elsewhere.example.org/">External</a></main>
            </body></html>"#,
            base_url
        ),
    )
    .await;
    mount_page(
        &mock_server,
        "/docs/",
        200,
        r#"<html><body><article><h2>Docs</h2><pre><code>cargo run</code></pre></article></body></html>"#
            .to_string(),
    )
    .await;
    mount_page(
        &mock_server,
        "/about",
        200,
        r#"<html><body><div id="content"><p>About us</p></div><footer>Footer text</footer></body></html>"#
            .to_string(),
    )
    .await;

    let output = TempDir::new().unwrap();
    let summary = run(&mock_server, &create_test_config(2, 10), output.path()).await;

    assert_eq!(summary.pages_scraped, 3);
    assert_eq!(summary.files_written, 3);
    assert_eq!(summary.pages_failed, 0);
    assert!(!summary.stopped_early);
    assert_eq!(requested_paths(&mock_server).await, vec!["/", "/docs/", "/about"]);

    let home = read_output(output.path(), "127.0.0.1_index.md");
    assert!(home.contains("# Welcome"));
    assert!(home.contains("Start here."));
    assert!(!home.contains("Docs"), "navigation must not be converted");

    let docs = read_output(output.path(), "127.0.0.1_docs.md");
    assert!(docs.contains("## Docs"));
    assert!(docs.contains("```"));

    let about = read_output(output.path(), "127.0.0.1_about.md");
    assert!(about.contains("About us"));
    assert!(!about.contains("Footer text"));
}

#[tokio::test]
async fn test_depth_zero_processes_seed_only() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        200,
        r#"<main><p>Seed</p><a href="/one">1</a><a href="/two">2</a></main>"#.to_string(),
    )
    .await;

    let output = TempDir::new().unwrap();
    let summary = run(&mock_server, &create_test_config(0, 10), output.path()).await;

    assert_eq!(summary.pages_scraped, 1);
    assert_eq!(summary.links_enqueued, 0);
    assert!(!summary.stopped_early);
    assert_eq!(requested_paths(&mock_server).await, vec!["/"]);
    assert_eq!(std::fs::read_dir(output.path()).unwrap().count(), 1);
}

#[tokio::test]
async fn test_not_found_page_is_skipped() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        200,
        r#"<main><a href="/missing">Missing</a><a href="/present">Present</a></main>"#.to_string(),
    )
    .await;
    mount_page(
        &mock_server,
        "/missing",
        404,
        r#"<main><a href="/secret">never followed</a></main>"#.to_string(),
    )
    .await;
    mount_page(
        &mock_server,
        "/present",
        200,
        "<main><p>Still crawled</p></main>".to_string(),
    )
    .await;

    let output = TempDir::new().unwrap();
    let summary = run(&mock_server, &create_test_config(3, 10), output.path()).await;

    assert_eq!(summary.pages_scraped, 3);
    assert_eq!(summary.pages_failed, 1);
    assert_eq!(summary.files_written, 2);
    assert!(!output.path().join("127.0.0.1_missing.md").exists());
    assert!(output.path().join("127.0.0.1_present.md").exists());
    assert!(!requested_paths(&mock_server)
        .await
        .contains(&"/secret".to_string()));
}

#[tokio::test]
async fn test_page_budget_truncates_crawl() {
    let mock_server = MockServer::start().await;
    let links: String = (1..=5)
        .map(|i| format!(r#"<a href="/p{}">{}</a>"#, i, i))
        .collect();
    mount_page(&mock_server, "/", 200, format!("<main>{}</main>", links)).await;
    for i in 1..=5 {
        mount_page(
            &mock_server,
            &format!("/p{}", i),
            200,
            format!("<main><p>Page {}</p></main>", i),
        )
        .await;
    }

    let output = TempDir::new().unwrap();
    let summary = run(&mock_server, &create_test_config(2, 3), output.path()).await;

    assert_eq!(summary.pages_scraped, 3);
    assert!(summary.stopped_early);
    assert_eq!(summary.frontier_remaining, 3);
    assert_eq!(requested_paths(&mock_server).await, vec!["/", "/p1", "/p2"]);
}

#[tokio::test]
async fn test_body_fallback_still_written() {
    let mock_server = MockServer::start().await;
    mount_page(
        &mock_server,
        "/",
        200,
        "<html><body><div><p>No landmarks here</p></div><script>track()</script></body></html>"
            .to_string(),
    )
    .await;

    let output = TempDir::new().unwrap();
    let summary = run(&mock_server, &create_test_config(1, 10), output.path()).await;

    assert_eq!(summary.fallback_pages, 1);
    let page = read_output(output.path(), "127.0.0.1_index.md");
    assert!(page.contains("No landmarks here"));
    assert!(!page.contains("track()"));
}

#[tokio::test]
async fn test_output_directory_created() {
    let mock_server = MockServer::start().await;
    mount_page(&mock_server, "/", 200, "<main>x</main>".to_string()).await;

    let temp = TempDir::new().unwrap();
    let output = temp.path().join("deeply").join("nested");
    let summary = run(&mock_server, &create_test_config(0, 1), &output).await;

    assert_eq!(summary.files_written, 1);
    assert!(output.join("127.0.0.1_index.md").is_file());
}
