//! HTTP fetcher for the static extraction path
//!
//! This module handles all direct HTTP requests for the pipeline:
//! - Building an HTTP client with browser-like headers
//! - GET requests for the main page, the embedded frame, and the mobile page
//! - Redirect handling (bounded hop count)
//! - Error classification into the pipeline taxonomy

use crate::config::FetchConfig;
use crate::ScrapeError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, REFERER};
use reqwest::{redirect::Policy, Client};
use std::time::Duration;

/// Builds an HTTP client with browser-like defaults
///
/// Several blog platforms serve a reduced or outright blocking page to
/// obvious bot agents, so the client presents a desktop Chrome User-Agent
/// plus ordinary Accept / Accept-Language headers.
///
/// # Arguments
///
/// * `config` - The fetch configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
pub fn build_http_client(config: &FetchConfig) -> Result<Client, reqwest::Error> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
    );
    if let Ok(value) = HeaderValue::from_str(&config.accept_language) {
        headers.insert(ACCEPT_LANGUAGE, value);
    }

    Client::builder()
        .user_agent(config.user_agent.clone())
        .default_headers(headers)
        .timeout(Duration::from_secs(config.timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .redirect(Policy::limited(config.max_redirects))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL and returns its body as text
///
/// The Referer is sent per-request: platforms that gate the frame document
/// expect the outer page as the referrer, so callers pass the URL the hop
/// started from.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `url` - The URL to fetch
/// * `referer` - Referer header value for this request
///
/// # Returns
///
/// * `Ok(String)` - The response body
/// * `Err(ScrapeError)` - Classified network or HTTP failure
pub async fn fetch_html(client: &Client, url: &str, referer: &str) -> Result<String, ScrapeError> {
    let mut request = client.get(url);
    if let Ok(value) = HeaderValue::from_str(referer) {
        request = request.header(REFERER, value);
    }

    let response = request.send().await.map_err(|e| classify_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Http {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(|e| classify_error(url, e))
}

/// Classifies a reqwest error into the pipeline taxonomy
fn classify_error(url: &str, error: reqwest::Error) -> ScrapeError {
    let message = if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_connect() {
        "connection refused".to_string()
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else {
        error.to_string()
    };

    ScrapeError::Network {
        url: url.to_string(),
        message,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FetchConfig;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_build_http_client() {
        let config = FetchConfig::default();
        let client = build_http_client(&config);
        assert!(client.is_ok());
    }

    #[tokio::test]
    async fn test_fetch_html_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/post"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html><body>hi</body></html>"))
            .mount(&server)
            .await;

        let client = build_http_client(&FetchConfig::default()).unwrap();
        let url = format!("{}/post", server.uri());
        let body = fetch_html(&client, &url, &url).await.unwrap();
        assert!(body.contains("hi"));
    }

    #[tokio::test]
    async fn test_fetch_html_sends_referer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/frame"))
            .and(header("referer", "https://example.com/outer"))
            .respond_with(ResponseTemplate::new(200).set_body_string("frame body"))
            .mount(&server)
            .await;

        let client = build_http_client(&FetchConfig::default()).unwrap();
        let url = format!("{}/frame", server.uri());
        let body = fetch_html(&client, &url, "https://example.com/outer")
            .await
            .unwrap();
        assert_eq!(body, "frame body");
    }

    #[tokio::test]
    async fn test_fetch_html_http_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = build_http_client(&FetchConfig::default()).unwrap();
        let url = format!("{}/missing", server.uri());
        let err = fetch_html(&client, &url, &url).await.unwrap_err();
        assert!(matches!(err, ScrapeError::Http { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_fetch_html_connection_refused() {
        let client = build_http_client(&FetchConfig::default()).unwrap();
        // Port 1 is never listening
        let err = fetch_html(&client, "http://127.0.0.1:1/", "http://127.0.0.1:1/")
            .await
            .unwrap_err();
        match err {
            ScrapeError::Network { message, .. } => {
                assert!(!message.is_empty());
            }
            other => panic!("expected network error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_html_follows_redirect() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/old"))
            .respond_with(
                ResponseTemplate::new(301).insert_header("location", "/new"),
            )
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/new"))
            .respond_with(ResponseTemplate::new(200).set_body_string("moved here"))
            .mount(&server)
            .await;

        let client = build_http_client(&FetchConfig::default()).unwrap();
        let url = format!("{}/old", server.uri());
        let body = fetch_html(&client, &url, &url).await.unwrap();
        assert_eq!(body, "moved here");
    }
}
