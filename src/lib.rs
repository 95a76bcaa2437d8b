//! Postlens: a blog content extraction pipeline
//!
//! This crate fetches a blog or article page and extracts its title and body
//! text through a sequence of platform-specific and generic fallback
//! strategies, degrading gracefully when a browser-rendering engine is
//! unavailable. The final record carries text metrics for downstream
//! SEO/AEO analysis.

pub mod config;
pub mod extract;
pub mod fetch;
pub mod pipeline;
pub mod platform;
pub mod proxy;
pub mod render;

use thiserror::Error;

/// Stage-local error for a single extraction strategy
///
/// Every variant is caught at the pipeline boundary and converted into a
/// fallthrough to the next strategy; no `ScrapeError` ever escapes
/// [`pipeline::Pipeline::run`]. Malformed markup is not represented here at
/// all: the markup parser tolerates it silently by returning empty matches.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("network error for {url}: {message}")]
    Network { url: String, message: String },

    #[error("HTTP status {status} for {url}")]
    Http { url: String, status: u16 },

    #[error("render error: {0}")]
    Render(String),

    #[error("expected page structure missing: {0}")]
    Structure(String),

    #[error("proxy extraction failed for {url}: {message}")]
    Proxy { url: String, message: String },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Result type alias for extraction-stage operations
pub type Result<T> = std::result::Result<T, ScrapeError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::Config;
pub use pipeline::{ExtractionResult, Pipeline};
pub use platform::Platform;
