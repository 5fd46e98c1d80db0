//! Configuration module for Shelf-Scout
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every setting has a built-in default matching the original site,
//! so a config file is only needed to point at a different catalog or
//! change the output locations.
//!
//! # Example
//!
//! ```no_run
//! use shelf_scout::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("config.toml")).unwrap();
//! println!("Scraping from: {}", config.site.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, OutputConfig, SiteConfig};

// Re-export parser functions
pub use parser::load_config;
