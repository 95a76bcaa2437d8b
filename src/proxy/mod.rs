//! Remote text-extraction proxy fallback
//!
//! Last-resort path: a third-party proxy renders the target page to plain
//! text. No DOM exists at this stage, so image/link counts are unavailable
//! and the title is a heuristic over the leading text.

use crate::config::ProxyConfig;
use crate::ScrapeError;
use reqwest::Client;
use std::time::Duration;

/// Plain-text rendering of a page as returned by the proxy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyText {
    /// Heuristic title; `None` when the leading text has no sentence
    /// terminator to cut at
    pub title: Option<String>,
    /// Whitespace-squeezed text, truncated to the configured maximum
    pub content: String,
}

/// Maximum length of the heuristic title
const TITLE_MAX_CHARS: usize = 120;

/// Fetches a plain-text rendering of the target URL through the proxy
///
/// # Arguments
///
/// * `client` - The shared HTTP client (the proxy timeout is applied
///   per-request)
/// * `config` - Proxy configuration
/// * `url` - The original target URL
///
/// # Returns
///
/// * `Ok(ProxyText)` - The proxy's text rendering
/// * `Err(ScrapeError::Proxy)` - Proxy unreachable, timed out, or errored
pub async fn proxy_extract(
    client: &Client,
    config: &ProxyConfig,
    url: &str,
) -> Result<ProxyText, ScrapeError> {
    let proxy_url = build_proxy_url(&config.base_url, url);
    tracing::info!("requesting proxy text rendering: {}", proxy_url);

    let response = client
        .get(&proxy_url)
        .timeout(Duration::from_secs(config.timeout_secs))
        .send()
        .await
        .map_err(|e| proxy_error(url, e))?;

    let status = response.status();
    if !status.is_success() {
        return Err(ScrapeError::Proxy {
            url: url.to_string(),
            message: format!("proxy returned HTTP {}", status.as_u16()),
        });
    }

    let text = response.text().await.map_err(|e| proxy_error(url, e))?;
    let sanitized = squeeze_whitespace(&text);

    Ok(ProxyText {
        title: derive_title(&sanitized),
        content: truncate_chars(&sanitized, config.max_content_chars),
    })
}

/// Builds the proxy request URL: `{base}/http://{target-without-scheme}`
fn build_proxy_url(base: &str, target: &str) -> String {
    let stripped = target
        .strip_prefix("https://")
        .or_else(|| target.strip_prefix("http://"))
        .unwrap_or(target);
    format!("{}/http://{}", base.trim_end_matches('/'), stripped)
}

/// Heuristic title: text up to the first sentence terminator or line break,
/// truncated to 120 characters
fn derive_title(sanitized: &str) -> Option<String> {
    let terminator = sanitized.find(['.', '\n'])?;
    let head: String = sanitized[..terminator].chars().take(TITLE_MAX_CHARS).collect();
    let head = head.trim().to_string();
    if head.is_empty() {
        None
    } else {
        Some(head)
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn squeeze_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn proxy_error(url: &str, error: reqwest::Error) -> ScrapeError {
    let message = if error.is_timeout() {
        "proxy request timed out".to_string()
    } else if error.is_connect() {
        "proxy connection refused".to_string()
    } else {
        error.to_string()
    };

    ScrapeError::Proxy {
        url: url.to_string(),
        message,
    }
}
