//! Integration tests for page resolution and extraction
//!
//! A realistic article is served by wiremock, resolved through
//! `WikiResolver`, and run through every extractor.

use wiki_scraper::config::Config;
use wiki_scraper::extract::{
    extract_internal_link_phrases, extract_paragraphs, extract_summary, extract_tables,
    extract_word_counts,
};
use wiki_scraper::{PageResolver, PageSource, WikiResolver};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CREEPER: &str = r#"<!DOCTYPE html>
<html><head><title>Creeper – Minecraft Wiki</title>
<script>RLCONF={"wgPageName":"Creeper","wgArticleId":1104,"wgIsArticle":true};</script>
</head><body>
<div id="mw-content-text"><div class="mw-parser-output">
  <div class="hatnote">For the mob in other editions, see <a href="/w/Creeper_(Legacy)">here</a>.</div>
  <aside class="infobox"><p>Health points 20</p></aside>
  <p>A <b>creeper</b> is a common hostile <a href="/w/Mob">mob</a> .</p>
  <p>Creepers explode when near a <a href="/w/Player">player</a>.</p>
  <p>   </p>
  <table class="wikitable">
    <tr><th>Difficulty</th><th>Damage</th></tr>
    <tr><td>Easy</td><td rowspan="2;">22</td></tr>
    <tr><td>Normal</td></tr>
  </table>
  <a href="/w/File:Creeper.png">image</a>
  <a href="/w/Category:Hostile_mobs">category</a>
</div></div>
</body></html>"#;

async fn serve_creeper() -> (MockServer, WikiResolver) {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/w/Creeper"))
        .and(header("user-agent", "TestBot/2.0 (+https://example.com/bot)"))
        .respond_with(ResponseTemplate::new(200).set_body_string(CREEPER))
        .expect(1)
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.wiki.base_url = format!("{}/w/", server.uri());
    config.user_agent.crawler_name = "TestBot".to_string();
    config.user_agent.crawler_version = "2.0".to_string();
    config.user_agent.contact_url = Some("https://example.com/bot".to_string());

    let resolver = WikiResolver::from_config(&config).unwrap();
    (server, resolver)
}

#[tokio::test]
async fn test_resolve_and_extract_article() {
    let (_server, resolver) = serve_creeper().await;

    let page = resolver
        .resolve(&PageSource::Phrase("Creeper".to_string()))
        .await
        .unwrap()
        .unwrap();

    let info = page.metadata().unwrap();
    assert_eq!(info.page_id, 1104);
    assert_eq!(info.title, "Creeper");

    let parsed = page.parse();
    let content = parsed.content_region().unwrap();

    assert_eq!(
        extract_summary(content).unwrap(),
        "A creeper is a common hostile mob."
    );
    assert_eq!(
        extract_paragraphs(content),
        vec![
            "A creeper is a common hostile mob .",
            "Creepers explode when near a player .",
        ]
    );

    let links: Vec<_> = extract_internal_link_phrases(content).into_iter().collect();
    assert_eq!(links, vec!["Creeper_(Legacy)", "Mob", "Player"]);

    let counts = extract_word_counts(content);
    assert_eq!(counts["creeper"], 1);
    assert_eq!(counts["creepers"], 1);
    assert!(!counts.contains_key("20"));
}

#[tokio::test]
async fn test_tables_from_fetched_markup() {
    let (_server, resolver) = serve_creeper().await;

    let page = resolver
        .resolve(&PageSource::Phrase("Creeper".to_string()))
        .await
        .unwrap()
        .unwrap();

    let tables = extract_tables(page.raw_markup());
    assert_eq!(tables.len(), 1);

    let table = &tables[0];
    assert_eq!(
        table.headers,
        Some(vec!["Difficulty".to_string(), "Damage".to_string()])
    );
    assert_eq!(
        table.rows,
        vec![
            vec!["Easy".to_string(), "22".to_string()],
            vec!["Normal".to_string(), "22".to_string()],
        ]
    );
}
