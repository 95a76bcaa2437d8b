//! The normalized extraction result record

use crate::extract::{Extracted, TextMetrics};
use crate::platform::Platform;
use crate::proxy::ProxyText;
use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Sentinel substituted when no title rule matched
pub const TITLE_NOT_FOUND: &str = "title not found";

/// Sentinel substituted when no content rule matched
pub const CONTENT_NOT_FOUND: &str = "content not found";

/// A successfully extracted post with its text metrics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPost {
    pub platform: Platform,
    pub title: String,
    pub content: String,
    pub char_with_space: usize,
    pub char_without_space: usize,
    pub word_count: usize,
    pub image_count: usize,
    pub link_count: usize,
    /// Provenance tag naming the strategy that produced this result;
    /// diagnostics only, never parsed downstream
    pub scraping_method: String,
}

impl ExtractedPost {
    /// Builds a post record from engine output, substituting sentinels and
    /// deriving metrics from the final content string
    pub fn from_extracted(
        platform: Platform,
        extracted: Extracted,
        scraping_method: impl Into<String>,
    ) -> Self {
        let title = extracted
            .title
            .unwrap_or_else(|| TITLE_NOT_FOUND.to_string());
        let content = extracted
            .content
            .unwrap_or_else(|| CONTENT_NOT_FOUND.to_string());
        let metrics = TextMetrics::from_text(&content);

        ExtractedPost {
            platform,
            title,
            content,
            char_with_space: metrics.char_with_space,
            char_without_space: metrics.char_without_space,
            word_count: metrics.word_count,
            image_count: extracted.image_count,
            link_count: extracted.link_count,
            scraping_method: scraping_method.into(),
        }
    }

    /// Builds a post record from a proxy text rendering; counts are 0
    /// because no DOM exists at that stage
    pub fn from_proxy_text(platform: Platform, text: ProxyText) -> Self {
        let title = text.title.unwrap_or_else(|| TITLE_NOT_FOUND.to_string());
        let content = if text.content.is_empty() {
            CONTENT_NOT_FOUND.to_string()
        } else {
            text.content
        };
        let metrics = TextMetrics::from_text(&content);

        ExtractedPost {
            platform,
            title,
            content,
            char_with_space: metrics.char_with_space,
            char_without_space: metrics.char_without_space,
            word_count: metrics.word_count,
            image_count: 0,
            link_count: 0,
            scraping_method: "fallback: proxy text rendering".to_string(),
        }
    }
}

/// Outcome of one extraction request
///
/// Exactly one variant is ever populated: a success carries the full content
/// record, a failure carries only the platform and a human-readable error.
/// The shape is enforced by the type, not by convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    Success(ExtractedPost),
    Failure { platform: Platform, error: String },
}

impl ExtractionResult {
    pub fn is_success(&self) -> bool {
        matches!(self, ExtractionResult::Success(_))
    }

    pub fn platform(&self) -> Platform {
        match self {
            ExtractionResult::Success(post) => post.platform,
            ExtractionResult::Failure { platform, .. } => *platform,
        }
    }
}

// Consumers see a flat camelCase record with a `success` discriminator, the
// shape the downstream scoring service expects.
impl Serialize for ExtractionResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ExtractionResult::Success(post) => {
                let mut record = serializer.serialize_struct("ExtractionResult", 10)?;
                record.serialize_field("platform", &post.platform)?;
                record.serialize_field("title", &post.title)?;
                record.serialize_field("content", &post.content)?;
                record.serialize_field("charWithSpace", &post.char_with_space)?;
                record.serialize_field("charWithoutSpace", &post.char_without_space)?;
                record.serialize_field("wordCount", &post.word_count)?;
                record.serialize_field("imageCount", &post.image_count)?;
                record.serialize_field("linkCount", &post.link_count)?;
                record.serialize_field("scrapingMethod", &post.scraping_method)?;
                record.serialize_field("success", &true)?;
                record.end()
            }
            ExtractionResult::Failure { platform, error } => {
                let mut record = serializer.serialize_struct("ExtractionResult", 3)?;
                record.serialize_field("platform", platform)?;
                record.serialize_field("success", &false)?;
                record.serialize_field("error", error)?;
                record.end()
            }
        }
    }
}
