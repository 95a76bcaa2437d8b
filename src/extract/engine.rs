//! Content extraction engine
//!
//! One generic engine parameterized by a per-platform [`RuleSet`]; it walks
//! the ruleset in priority order and never fails. Callers substitute the
//! sentinel defaults when a field comes back `None`.

use crate::extract::rules::{rule_set, ExtractionMode, RuleSet};
use crate::platform::Platform;
use ego_tree::NodeRef;
use scraper::node::Node;
use scraper::{ElementRef, Html, Selector};

/// Best-effort extraction output
///
/// `title`/`content` are `None` only when no rule produced any text at all
/// (including the whole-page fallbacks); counts are always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    pub title: Option<String>,
    pub content: Option<String>,
    pub image_count: usize,
    pub link_count: usize,
}

/// Subtrees dropped before reading a content container's text; they pollute
/// both length and keyword signal
const EXCLUDED_CONTAINERS: &[&str] = &["script", "style", "nav", "footer", "aside"];

/// Title fallbacks appended after the platform selectors: structural markers
/// first, document metadata last (the `<title>` tag tends to carry site-wide
/// branding rather than the post title)
const TITLE_FALLBACKS: &[&str] = &["h1", "title"];

/// Extracts title, content, and element counts from a parsed document
///
/// # Arguments
///
/// * `document` - The parsed page (rendered or statically fetched)
/// * `platform` - Which platform ruleset to apply
/// * `mode` - Rendered or fallback thresholds
pub fn extract(document: &Html, platform: Platform, mode: ExtractionMode) -> Extracted {
    let rules = rule_set(platform, mode);

    Extracted {
        title: extract_title(document, &rules),
        content: extract_content(document, &rules),
        image_count: count_matches(document, rules.image_selector),
        link_count: count_matches(document, "a[href]"),
    }
}

/// Tries each title selector in priority order, accepting the first element
/// with non-empty trimmed text
fn extract_title(document: &Html, rules: &RuleSet) -> Option<String> {
    for sel in rules.title_selectors.iter().chain(TITLE_FALLBACKS.iter()) {
        if let Ok(selector) = Selector::parse(sel) {
            if let Some(element) = document.select(&selector).next() {
                let text = squeeze_whitespace(&element.text().collect::<String>());
                if !text.is_empty() {
                    tracing::debug!("title matched selector '{}'", sel);
                    return Some(text);
                }
            }
        }
    }
    None
}

/// Walks the content rules in priority order
///
/// Accepts the first candidate whose cleaned text exceeds its rule's
/// threshold. If no candidate clears its threshold the last-tried
/// candidate's text is used regardless of length; if no selector matched at
/// all, the whole `<body>` text stands in. Content, once extracted, is never
/// discarded for being short.
fn extract_content(document: &Html, rules: &RuleSet) -> Option<String> {
    let mut last_candidate = None;

    for rule in rules.content_rules {
        if let Ok(selector) = Selector::parse(rule.selector) {
            if let Some(element) = document.select(&selector).next() {
                let text = clean_text(element);
                if text.is_empty() {
                    continue;
                }
                if text.chars().count() > rule.min_chars {
                    tracing::debug!("content matched selector '{}'", rule.selector);
                    return Some(text);
                }
                last_candidate = Some(text);
            }
        }
    }

    last_candidate.or_else(|| body_text(document))
}

/// Collects an element's text, skipping excluded subtrees, and squeezes
/// whitespace runs to single spaces
fn clean_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    collect_text(*element, &mut raw);
    squeeze_whitespace(&raw)
}

fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => out.push_str(&text.text),
            Node::Element(element) => {
                if !EXCLUDED_CONTAINERS.contains(&element.name()) {
                    collect_text(child, out);
                }
            }
            _ => {}
        }
    }
}

/// Whole-page fallback: the full body text, cleaned the same way
fn body_text(document: &Html) -> Option<String> {
    let selector = Selector::parse("body").ok()?;
    let body = document.select(&selector).next()?;
    let text = clean_text(body);
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn count_matches(document: &Html, selector: &str) -> usize {
    match Selector::parse(selector) {
        Ok(selector) => document.select(&selector).count(),
        Err(_) => 0,
    }
}

fn squeeze_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
