//! Per-platform extraction rulesets
//!
//! Platform differences are table entries, not control flow: adding a
//! platform means adding selector tables here, nothing in the engine
//! changes. Tables are static and read-only; the engine walks them in
//! declaration order, so order is priority.

use crate::platform::Platform;

/// Extraction mode the ruleset is tuned for
///
/// Rendered containers are structurally more reliable than statically parsed
/// ones, so rendered-mode thresholds are lower for the platform-specific
/// containers. The fallback tables also carry the generic selector tail,
/// since a statically fetched page may be an older theme that lacks the
/// platform's current markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionMode {
    Rendered,
    Fallback,
}

/// A content-container selector with its acceptance threshold
///
/// The first candidate whose cleaned text exceeds `min_chars` wins;
/// "first good enough" beats "longest", which tends to pick up boilerplate.
#[derive(Debug, Clone, Copy)]
pub struct ContentRule {
    pub selector: &'static str,
    pub min_chars: usize,
}

/// The full ruleset for one platform in one mode
#[derive(Debug, Clone, Copy)]
pub struct RuleSet {
    pub title_selectors: &'static [&'static str],
    pub content_rules: &'static [ContentRule],
    pub image_selector: &'static str,
}

const fn rule(selector: &'static str, min_chars: usize) -> ContentRule {
    ContentRule { selector, min_chars }
}

const NAVER_TITLES: &[&str] = &[".se-title-text", ".post-title", ".se_textarea", "h2", "h1"];

const TISTORY_TITLES: &[&str] = &[".entry-title", ".post-title", "h1", "h2", ".title"];

const GENERIC_TITLES: &[&str] = &[];

const NAVER_CONTENT_RENDERED: &[ContentRule] = &[
    rule(".se-main-container", 100),
    rule(".post-view", 100),
    rule(".se_component_wrap", 100),
    rule(".se_textarea", 100),
    rule(".entry-content", 100),
];

const NAVER_CONTENT_FALLBACK: &[ContentRule] = &[
    rule(".se-main-container", 200),
    rule(".post-view", 200),
    rule(".se_component_wrap", 200),
    rule(".se_textarea", 200),
    rule(".entry-content", 200),
    rule("article", 200),
    rule("main", 200),
    rule(".content", 200),
    rule(".post", 200),
    rule(".entry", 200),
];

const TISTORY_CONTENT_RENDERED: &[ContentRule] = &[
    rule(".entry-content", 100),
    rule(".post-content", 100),
    rule(".content", 100),
    rule("article", 100),
];

const TISTORY_CONTENT_FALLBACK: &[ContentRule] = &[
    rule(".entry-content", 200),
    rule(".post-content", 200),
    rule(".content", 200),
    rule("article", 200),
    rule("main", 200),
    rule(".post", 200),
    rule(".entry", 200),
];

const GENERIC_CONTENT: &[ContentRule] = &[
    rule("article", 200),
    rule("main", 200),
    rule(".content", 200),
    rule(".post", 200),
    rule(".entry", 200),
];

/// naver's editor wraps images in custom resource classes; plain `img`
/// alone misses lazy-loaded ones
const NAVER_IMAGES: &str = ".se-image-resource, .se_image, img";

const GENERIC_IMAGES: &str = "img";

/// Returns the ruleset for a platform in the given mode
pub fn rule_set(platform: Platform, mode: ExtractionMode) -> RuleSet {
    match platform {
        Platform::Naver => RuleSet {
            title_selectors: NAVER_TITLES,
            content_rules: match mode {
                ExtractionMode::Rendered => NAVER_CONTENT_RENDERED,
                ExtractionMode::Fallback => NAVER_CONTENT_FALLBACK,
            },
            image_selector: NAVER_IMAGES,
        },
        Platform::Tistory => RuleSet {
            title_selectors: TISTORY_TITLES,
            content_rules: match mode {
                ExtractionMode::Rendered => TISTORY_CONTENT_RENDERED,
                ExtractionMode::Fallback => TISTORY_CONTENT_FALLBACK,
            },
            image_selector: GENERIC_IMAGES,
        },
        Platform::Wordpress
        | Platform::Medium
        | Platform::Velog
        | Platform::Github
        | Platform::Website => RuleSet {
            title_selectors: GENERIC_TITLES,
            content_rules: GENERIC_CONTENT,
            image_selector: GENERIC_IMAGES,
        },
    }
}
