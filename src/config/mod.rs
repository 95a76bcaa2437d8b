//! Configuration module for Postlens
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every section is optional; `Config::default()` is a fully working
//! configuration.
//!
//! # Example
//!
//! ```no_run
//! use postlens::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("postlens.toml")).unwrap();
//! println!("Rendered extraction enabled: {}", config.render.enabled);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, FetchConfig, NaverConfig, ProxyConfig, RenderConfig};

// Re-export parser functions
pub use parser::load_config;
