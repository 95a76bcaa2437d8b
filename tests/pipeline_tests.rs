//! Integration tests for the extraction pipeline
//!
//! These tests use wiremock to stand in for the target site, the naver
//! mobile host, and the text-extraction proxy, exercising the full
//! strategy chain end-to-end. Rendered extraction is disabled throughout:
//! the restricted-runtime policy routes every request to fallback mode,
//! which is also the only mode a test box without Chromium can exercise.

use postlens::config::Config;
use postlens::pipeline::{ExtractionResult, Pipeline};
use postlens::platform::Platform;
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Configuration pointing every external surface at the given mock server,
/// with rendering disabled (restricted runtime)
fn test_config(server_uri: &str) -> Config {
    let mut config = Config::default();
    config.render.enabled = false;
    config.fetch.timeout_secs = 5;
    config.proxy.base_url = server_uri.to_string();
    config.proxy.timeout_secs = 5;
    config.naver.mobile_base_url = server_uri.to_string();
    config
}

fn article_body(chars: usize) -> String {
    "k".repeat(chars)
}

#[tokio::test]
async fn test_generic_article_extraction() {
    let server = MockServer::start().await;
    let body = article_body(250);

    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><head><title>Site</title></head><body>
            <h1>Post Heading</h1>
            <article>{}<img src="a.png"><img src="b.png"><img src="c.png"></article>
            <a href="/one">1</a><a href="/two">2</a>
            </body></html>"#,
            body
        )))
        .mount(&server)
        .await;

    let pipeline = Pipeline::new(test_config(&server.uri())).unwrap();
    let url = format!("{}/article", server.uri());
    let result = pipeline.run(&url, Platform::Website).await;

    match result {
        ExtractionResult::Success(post) => {
            assert_eq!(post.platform, Platform::Website);
            assert_eq!(post.title, "Post Heading");
            assert_eq!(post.content, body);
            assert_eq!(post.char_with_space, 250);
            assert_eq!(post.char_without_space, 250);
            assert_eq!(post.image_count, 3);
            assert_eq!(post.link_count, 2);
            assert!(post.scraping_method.contains("static parse"));
        }
        ExtractionResult::Failure { error, .. } => panic!("extraction failed: {}", error),
    }
}

#[tokio::test]
async fn test_extraction_is_idempotent_over_static_markup() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stable"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "<html><body><main>{}</main></body></html>",
            article_body(400)
        )))
        .mount(&server)
        .await;

    let pipeline = Pipeline::new(test_config(&server.uri())).unwrap();
    let url = format!("{}/stable", server.uri());

    let first = pipeline.run(&url, Platform::Website).await;
    let second = pipeline.run(&url, Platform::Website).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_naver_without_frame_extracts_main_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/post"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "<html><body><p>{}</p></body></html>",
            article_body(250)
        )))
        .mount(&server)
        .await;

    let pipeline = Pipeline::new(test_config(&server.uri())).unwrap();
    let url = format!("{}/post", server.uri());
    let result = pipeline.run(&url, Platform::Naver).await;

    match result {
        ExtractionResult::Success(post) => {
            assert_eq!(post.content, article_body(250));
            // No frame hop happened
            assert!(!post.scraping_method.contains("frame"));
            assert!(post.scraping_method.contains("http fetch"));
        }
        ExtractionResult::Failure { error, .. } => panic!("extraction failed: {}", error),
    }
}

#[tokio::test]
async fn test_naver_frame_with_identity_redirects_to_mobile_post() {
    let server = MockServer::start().await;

    // Desktop page embedding the post frame
    Mock::given(method("GET"))
        .and(path("/desktop"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>
            <iframe id="mainFrame" src="/PostView.naver?blogId=bob&logNo=100200"></iframe>
            </body></html>"#,
        ))
        .mount(&server)
        .await;

    // The frame interior (fetched, then superseded by the mobile page)
    Mock::given(method("GET"))
        .and(path("/PostView.naver"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("<html><body><p>frame shell</p></body></html>"),
        )
        .mount(&server)
        .await;

    // The mobile rendering of the post
    let mobile_body = article_body(300);
    Mock::given(method("GET"))
        .and(path("/bob/100200"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body>
            <div class="se-title-text">Mobile Title</div>
            <div class="se-main-container">{}</div>
            </body></html>"#,
            mobile_body
        )))
        .mount(&server)
        .await;

    let pipeline = Pipeline::new(test_config(&server.uri())).unwrap();
    let url = format!("{}/desktop", server.uri());
    let result = pipeline.run(&url, Platform::Naver).await;

    match result {
        ExtractionResult::Success(post) => {
            assert_eq!(post.title, "Mobile Title");
            assert_eq!(post.content, mobile_body);
            assert!(post.scraping_method.contains("mobile post"));
        }
        ExtractionResult::Failure { error, .. } => panic!("extraction failed: {}", error),
    }
}

#[tokio::test]
async fn test_naver_frame_without_identity_extracts_frame_interior() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/desktop"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"<html><body>
            <iframe id="mainFrame" src="/frame/inner"></iframe>
            </body></html>"#,
        ))
        .mount(&server)
        .await;

    let frame_body = article_body(300);
    Mock::given(method("GET"))
        .and(path("/frame/inner"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body><div class="post-view">{}</div></body></html>"#,
            frame_body
        )))
        .mount(&server)
        .await;

    let pipeline = Pipeline::new(test_config(&server.uri())).unwrap();
    let url = format!("{}/desktop", server.uri());
    let result = pipeline.run(&url, Platform::Naver).await;

    match result {
        ExtractionResult::Success(post) => {
            assert_eq!(post.content, frame_body);
            assert!(post.scraping_method.contains("embedded frame interior"));
        }
        ExtractionResult::Failure { error, .. } => panic!("extraction failed: {}", error),
    }
}

#[tokio::test]
async fn test_proxy_fallback_when_static_fetch_fails() {
    let server = MockServer::start().await;

    // The target page errors; the proxy (same mock server, prefixed path) works
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path_regex("^/http://.*"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("Proxied Headline. The proxy rendered this page as text."),
        )
        .mount(&server)
        .await;

    let pipeline = Pipeline::new(test_config(&server.uri())).unwrap();
    let url = format!("{}/broken", server.uri());
    let result = pipeline.run(&url, Platform::Website).await;

    match result {
        ExtractionResult::Success(post) => {
            assert_eq!(post.title, "Proxied Headline");
            assert!(post.content.starts_with("Proxied Headline."));
            // No DOM at the proxy stage
            assert_eq!(post.image_count, 0);
            assert_eq!(post.link_count, 0);
            assert!(post.scraping_method.contains("proxy"));
        }
        ExtractionResult::Failure { error, .. } => panic!("extraction failed: {}", error),
    }
}

#[tokio::test]
async fn test_all_stages_failing_reports_failure() {
    // Nothing is listening on port 1: direct fetch and proxy both refuse
    let mut config = Config::default();
    config.render.enabled = false;
    config.fetch.timeout_secs = 2;
    config.proxy.base_url = "http://127.0.0.1:1".to_string();
    config.proxy.timeout_secs = 2;

    let pipeline = Pipeline::new(config).unwrap();
    let result = pipeline.run("http://127.0.0.1:1/post", Platform::Website).await;

    match result {
        ExtractionResult::Failure { platform, error } => {
            assert_eq!(platform, Platform::Website);
            assert!(!error.is_empty());
        }
        ExtractionResult::Success(_) => panic!("expected failure when every stage is down"),
    }
}

#[tokio::test]
async fn test_short_content_still_returned() {
    let server = MockServer::start().await;

    // 150 chars is below the 200-char fallback threshold; the candidate is
    // still returned because content is never discarded once extracted
    let short_body = article_body(150);
    Mock::given(method("GET"))
        .and(path("/short"))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            r#"<html><body><div class="entry">{}</div></body></html>"#,
            short_body
        )))
        .mount(&server)
        .await;

    let pipeline = Pipeline::new(test_config(&server.uri())).unwrap();
    let url = format!("{}/short", server.uri());
    let result = pipeline.run(&url, Platform::Website).await;

    match result {
        ExtractionResult::Success(post) => {
            assert_eq!(post.content, short_body);
            assert_eq!(post.char_with_space, 150);
        }
        ExtractionResult::Failure { error, .. } => panic!("extraction failed: {}", error),
    }
}
