//! Extraction pipeline orchestration
//!
//! One extraction request walks a fixed, ordered list of strategies —
//! rendered browser, static fetch + parse, remote proxy text — and stops at
//! the first success. Every stage-local error is caught and converted into a
//! fallthrough; when all stages fail, only the last stage's error surfaces.
//! The public contract is total: [`Pipeline::run`] always returns a result
//! record and never an error.

mod result;

pub use result::{ExtractedPost, ExtractionResult, CONTENT_NOT_FOUND, TITLE_NOT_FOUND};

use crate::config::Config;
use crate::extract::{extract, ExtractionMode};
use crate::fetch::{build_http_client, fetch_html};
use crate::platform::{naver, Platform};
use crate::proxy::proxy_extract;
use crate::render::{self, RenderSession};
use crate::ScrapeError;
use reqwest::Client;
use scraper::{Html, Selector};
use url::Url;

/// The extraction pipeline
///
/// Owns the HTTP client; holds no per-request state, so one `Pipeline` may
/// serve any number of concurrent, fully independent extractions.
pub struct Pipeline {
    config: Config,
    client: Client,
}

impl Pipeline {
    /// Builds a pipeline from the given configuration
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        let client = build_http_client(&config.fetch)?;
        Ok(Pipeline { config, client })
    }

    /// Runs one extraction request through the strategy chain
    ///
    /// # Arguments
    ///
    /// * `url` - The page to extract
    /// * `platform` - Which platform ruleset to apply
    pub async fn run(&self, url: &str, platform: Platform) -> ExtractionResult {
        tracing::info!("extracting {} as {}", url, platform);
        let mut last_error: Option<ScrapeError> = None;

        // Stage 1: rendered extraction, when the environment permits.
        // The session is released unconditionally, error or not.
        if let Some(session) =
            render::try_acquire(&self.config.render, &self.config.fetch.user_agent).await
        {
            let outcome = self.rendered_attempt(&session, url, platform).await;
            session.close().await;
            match outcome {
                Ok(post) => return ExtractionResult::Success(post),
                Err(e) => {
                    tracing::warn!("rendered extraction failed, falling back: {}", e);
                    last_error = Some(e);
                }
            }
        }

        // Stage 2: static fetch + parse
        match self.static_attempt(url, platform).await {
            Ok(post) => return ExtractionResult::Success(post),
            Err(e) => {
                tracing::warn!("static extraction failed, trying proxy: {}", e);
                last_error = Some(e);
            }
        }

        // Stage 3: remote proxy text rendering
        match proxy_extract(&self.client, &self.config.proxy, url).await {
            Ok(text) => {
                return ExtractionResult::Success(ExtractedPost::from_proxy_text(platform, text))
            }
            Err(e) => {
                tracing::warn!("proxy extraction failed: {}", e);
                last_error = Some(e);
            }
        }

        let error = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "extraction failed".to_string());
        ExtractionResult::Failure { platform, error }
    }

    /// Rendered extraction: navigate, optionally hop into the naver frame,
    /// then run the engine over the rendered document
    async fn rendered_attempt(
        &self,
        session: &RenderSession,
        url: &str,
        platform: Platform,
    ) -> Result<ExtractedPost, ScrapeError> {
        let timeout = self.config.render.navigation_timeout_secs;
        session.navigate(url, timeout).await?;

        let mut method = "rendered: browser dom";
        if platform == Platform::Naver {
            match session.embedded_frame_src().await? {
                Some(frame_src) => {
                    let frame_url = resolve_frame_url(url, &frame_src);
                    tracing::info!("following embedded frame: {}", frame_url);
                    session.navigate(&frame_url, timeout).await?;
                    method = "rendered: embedded frame interior (naver)";
                }
                None => {
                    // The main page is the content source when no frame exists
                    method = "rendered: main page, no frame hop (naver)";
                }
            }
        }

        let html = session.document_html().await?;
        let document = Html::parse_document(&html);
        let extracted = extract(&document, platform, ExtractionMode::Rendered);
        Ok(ExtractedPost::from_extracted(platform, extracted, method))
    }

    /// Static extraction: direct fetch, frame hop when the page embeds one,
    /// and the naver mobile-post redirect when an identity resolves
    async fn static_attempt(
        &self,
        url: &str,
        platform: Platform,
    ) -> Result<ExtractedPost, ScrapeError> {
        tracing::info!("static extraction attempt: {}", url);
        let mut html = fetch_html(&self.client, url, url).await?;
        let mut method = "fallback: http fetch + static parse";

        let frame_src = find_frame_src(&html);
        if let Some(src) = &frame_src {
            let frame_url = resolve_frame_url(url, src);
            tracing::info!("following embedded frame: {}", frame_url);
            html = fetch_html(&self.client, &frame_url, url).await?;
            method = "fallback: embedded frame interior (naver) + static parse";
        }

        // The frame document often lacks the interactive containers the
        // selectors expect; the mobile page is simpler markup, so jump to it
        // whenever the post identity resolves
        if let Some(identity) = naver::resolve(url, frame_src.as_deref()) {
            let mobile_url = identity.mobile_url(&self.config.naver.mobile_base_url);
            tracing::info!("redirecting to mobile post: {}", mobile_url);
            html = fetch_html(&self.client, &mobile_url, url).await?;
            method = "fallback: mobile post (naver) + static parse";
        }

        let document = Html::parse_document(&html);
        let extracted = extract(&document, platform, ExtractionMode::Fallback);
        Ok(ExtractedPost::from_extracted(platform, extracted, method))
    }
}

/// Reads the `src` of the `#mainFrame` element from raw markup
///
/// Parsing happens in its own scope so no document handle is ever held
/// across an await point.
fn find_frame_src(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("#mainFrame").ok()?;
    let element = document.select(&selector).next()?;
    element.value().attr("src").map(|s| s.to_string())
}

/// Resolves a frame `src` (possibly relative) against the page it came from
fn resolve_frame_url(base: &str, src: &str) -> String {
    Url::parse(base)
        .and_then(|b| b.join(src))
        .map(|u| u.to_string())
        .unwrap_or_else(|_| src.to_string())
}
