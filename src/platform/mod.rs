//! Blog platform identification
//!
//! The platform decides which extraction ruleset the engine applies and
//! whether platform-specific navigation (naver's embedded frame) is needed.

pub mod naver;

use serde::{Deserialize, Serialize};
use url::Url;

/// Supported blog platforms
///
/// `Website` is the catch-all for anything without a dedicated ruleset;
/// wordpress/medium/velog/github currently share the generic ruleset but are
/// kept distinct so the result record reports what the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Naver,
    Tistory,
    Wordpress,
    Medium,
    Velog,
    Github,
    Website,
}

impl Platform {
    /// Parses a caller-supplied platform hint
    ///
    /// Returns `None` for unknown hints so the caller can fall back to
    /// URL-based detection.
    pub fn from_hint(hint: &str) -> Option<Platform> {
        match hint.trim().to_lowercase().as_str() {
            "naver" => Some(Platform::Naver),
            "tistory" => Some(Platform::Tistory),
            "wordpress" => Some(Platform::Wordpress),
            "medium" => Some(Platform::Medium),
            "velog" => Some(Platform::Velog),
            "github" => Some(Platform::Github),
            "website" => Some(Platform::Website),
            _ => None,
        }
    }

    /// Detects the platform from the target URL's host
    pub fn detect(url: &Url) -> Platform {
        let host = match url.host_str() {
            Some(h) => h.to_lowercase(),
            None => return Platform::Website,
        };

        if host == "blog.naver.com" || host == "m.blog.naver.com" {
            Platform::Naver
        } else if host == "tistory.com" || host.ends_with(".tistory.com") {
            Platform::Tistory
        } else if host == "medium.com" || host.ends_with(".medium.com") {
            Platform::Medium
        } else if host == "velog.io" {
            Platform::Velog
        } else if host == "github.com" || host.ends_with(".github.io") {
            Platform::Github
        } else if host.ends_with(".wordpress.com") {
            Platform::Wordpress
        } else {
            Platform::Website
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Platform::Naver => "naver",
            Platform::Tistory => "tistory",
            Platform::Wordpress => "wordpress",
            Platform::Medium => "medium",
            Platform::Velog => "velog",
            Platform::Github => "github",
            Platform::Website => "website",
        };
        write!(f, "{}", name)
    }
}
