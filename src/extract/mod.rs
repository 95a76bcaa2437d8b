//! Content extraction: rulesets, the generic engine, and text metrics
//!
//! The engine is one code path for every platform and both modes; platform
//! differences live entirely in the ruleset tables.

mod engine;
mod metrics;
mod rules;

pub use engine::{extract, Extracted};
pub use metrics::TextMetrics;
pub use rules::{rule_set, ContentRule, ExtractionMode, RuleSet};
