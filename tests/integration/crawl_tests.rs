//! Integration tests for the crawler
//!
//! These tests use wiremock to serve a small synthetic wiki and run the
//! full crawl cycle end-to-end, word-count store included.

use std::path::Path;
use tempfile::TempDir;
use wiki_scraper::config::Config;
use wiki_scraper::crawler::crawl;
use wiki_scraper::{CountStore, JsonCountStore, PageSource, ScraperError, WordCounts};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing at the mock wiki
fn create_test_config(server: &MockServer, store_path: &Path, max_depth: u32) -> Config {
    let mut config = Config::default();
    config.wiki.base_url = format!("{}/w/", server.uri());
    config.user_agent.crawler_name = "TestBot".to_string();
    config.crawler.max_depth = max_depth;
    config.crawler.wait_seconds = 0.0;
    config.output.word_counts_path = store_path.display().to_string();
    config
}

/// Renders an article the way the wiki does: metadata script plus content region
fn article(page_id: u64, title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>{title}</title>
        <script>RLCONF={{"wgCanonicalNamespace":"","wgPageName":"{title}","wgTitle":"{title}","wgArticleId":{page_id}}};</script>
        </head><body>
        <div id="mw-navigation"><a href="/w/Special:Random">random</a> navigation</div>
        <div id="mw-content-text"><div class="mw-parser-output">{body}</div></div>
        </body></html>"#
    )
}

fn link(target: &str) -> String {
    format!(r#"<a href="/w/{target}" title="{target}">link</a>"#)
}

async fn mount_article(server: &MockServer, phrase: &str, markup: String, expected_hits: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/w/{}", phrase)))
        .respond_with(ResponseTemplate::new(200).set_body_string(markup))
        .expect(expected_hits)
        .mount(server)
        .await;
}

fn root() -> PageSource {
    PageSource::Phrase("Root".to_string())
}

fn counts(pairs: &[(&str, u64)]) -> WordCounts {
    pairs.iter().map(|(w, c)| (w.to_string(), *c)).collect()
}

#[tokio::test]
async fn test_root_without_links() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store_path = dir.path().join("word-counts.json");

    mount_article(
        &server,
        "Root",
        article(1, "Root", "<p>Creepers explode. Creepers hiss!</p>"),
        1,
    )
    .await;

    let config = create_test_config(&server, &store_path, 1);
    let stats = crawl(&config, &root()).await.unwrap();

    assert!(stats.root_found);
    assert_eq!(stats.processed, vec!["Root"]);
    assert_eq!(
        JsonCountStore::new(&store_path).load(),
        counts(&[("creepers", 2), ("explode", 1), ("hiss", 1)])
    );
}

#[tokio::test]
async fn test_shared_target_processed_once() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store_path = dir.path().join("word-counts.json");

    mount_article(
        &server,
        "Root",
        article(1, "Root", &format!("<p>{} {}</p>", link("A"), link("B"))),
        1,
    )
    .await;
    mount_article(
        &server,
        "A",
        article(2, "A", &format!("<p>alpha {}</p>", link("B"))),
        1,
    )
    .await;
    mount_article(&server, "B", article(3, "B", "<p>beta</p>"), 1).await;

    let config = create_test_config(&server, &store_path, 2);
    let stats = crawl(&config, &root()).await.unwrap();

    assert_eq!(stats.processed, vec!["Root", "A", "B"]);
    let store = JsonCountStore::new(&store_path).load();
    assert_eq!(store["beta"], 1);
    assert_eq!(store["link"], 3);
}

#[tokio::test]
async fn test_redirect_alias_processed_once() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store_path = dir.path().join("word-counts.json");

    let golem = article(5, "Iron_Golem", "<p>golem</p>");
    mount_article(
        &server,
        "Root",
        article(
            1,
            "Root",
            &format!("<p>{} {}</p>", link("Golem"), link("Iron_Golem")),
        ),
        1,
    )
    .await;
    // Both phrases are fetched; only the page ID reveals they are one article
    mount_article(&server, "Golem", golem.clone(), 1).await;
    mount_article(&server, "Iron_Golem", golem, 1).await;

    let config = create_test_config(&server, &store_path, 1);
    let stats = crawl(&config, &root()).await.unwrap();

    assert_eq!(stats.processed, vec!["Root", "Iron_Golem"]);
    assert_eq!(stats.already_visited, 1);
    assert_eq!(JsonCountStore::new(&store_path).load()["golem"], 1);
}

#[tokio::test]
async fn test_depth_bound() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store_path = dir.path().join("word-counts.json");

    mount_article(&server, "Root", article(1, "Root", &link("A")), 1).await;
    mount_article(&server, "A", article(2, "A", &link("B")), 1).await;
    mount_article(&server, "B", article(3, "B", "<p>beyond</p>"), 0).await;

    let config = create_test_config(&server, &store_path, 1);
    let stats = crawl(&config, &root()).await.unwrap();

    assert_eq!(stats.processed, vec!["Root", "A"]);
    assert!(!JsonCountStore::new(&store_path).load().contains_key("beyond"));
}

#[tokio::test]
async fn test_filtered_links_are_not_followed() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store_path = dir.path().join("word-counts.json");

    let body = format!(
        r#"<p>{} <a href="/w/File:Creeper.png">image</a> <a href="/w/A?action=edit">edit</a>
        <a href="/w/A#Behavior">section</a> <a href="https://example.com/w/A">external</a></p>"#,
        link("A")
    );
    mount_article(&server, "Root", article(1, "Root", &body), 1).await;
    mount_article(&server, "A", article(2, "A", "<p>alpha</p>"), 1).await;

    let config = create_test_config(&server, &store_path, 1);
    let stats = crawl(&config, &root()).await.unwrap();

    assert_eq!(stats.processed, vec!["Root", "A"]);
    assert_eq!(stats.links_queued, 1);
}

#[tokio::test]
async fn test_dead_link_is_skipped() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store_path = dir.path().join("word-counts.json");

    mount_article(
        &server,
        "Root",
        article(
            1,
            "Root",
            &format!("<p>{} {}</p>", link("Dead"), link("Live")),
        ),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/w/Dead"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    mount_article(&server, "Live", article(2, "Live", "<p>alive</p>"), 1).await;

    let config = create_test_config(&server, &store_path, 1);
    let stats = crawl(&config, &root()).await.unwrap();

    assert_eq!(stats.processed, vec!["Root", "Live"]);
    assert_eq!(stats.not_found, 1);
}

#[tokio::test]
async fn test_missing_content_is_skipped() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store_path = dir.path().join("word-counts.json");

    mount_article(
        &server,
        "Root",
        article(1, "Root", &format!("<p>{}</p>", link("Stub"))),
        1,
    )
    .await;
    mount_article(
        &server,
        "Stub",
        article(
            2,
            "Stub",
            r#"<div class="noarticletext"><p>There is currently no text in this page.</p></div>"#,
        ),
        1,
    )
    .await;

    let config = create_test_config(&server, &store_path, 1);
    let stats = crawl(&config, &root()).await.unwrap();

    assert_eq!(stats.processed, vec!["Root"]);
    assert_eq!(stats.content_missing, 1);
    assert!(!JsonCountStore::new(&store_path).load().contains_key("currently"));
}

#[tokio::test]
async fn test_root_missing() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store_path = dir.path().join("word-counts.json");

    Mock::given(method("GET"))
        .and(path("/w/Root"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(&server, &store_path, 1);
    let stats = crawl(&config, &root()).await.unwrap();

    assert!(!stats.root_found);
    assert!(stats.processed.is_empty());
    assert!(!store_path.exists());
}

#[tokio::test]
async fn test_server_error_aborts_crawl() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store_path = dir.path().join("word-counts.json");

    mount_article(
        &server,
        "Root",
        article(
            1,
            "Root",
            &format!("<p>kept {} {}</p>", link("Broken"), link("Later")),
        ),
        1,
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/w/Broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    mount_article(&server, "Later", article(3, "Later", "<p>later</p>"), 0).await;

    let config = create_test_config(&server, &store_path, 1);
    let err = crawl(&config, &root()).await.unwrap_err();

    assert!(matches!(err, ScraperError::HttpStatus { status: 500, .. }));
    // Counts recorded before the failure stay persisted
    assert_eq!(JsonCountStore::new(&store_path).load()["kept"], 1);
}

#[tokio::test]
async fn test_counts_accumulate_across_runs() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store_path = dir.path().join("word-counts.json");

    mount_article(&server, "Root", article(1, "Root", "<p>mob mob</p>"), 2).await;

    let config = create_test_config(&server, &store_path, 0);
    crawl(&config, &root()).await.unwrap();
    crawl(&config, &root()).await.unwrap();

    assert_eq!(JsonCountStore::new(&store_path).load(), counts(&[("mob", 4)]));
}
