//! # Runtime Configuration Module
//!
//! Environment-driven settings for a dispatcher instance.
//!
//! ## Environment Variables
//!
//! ### `JSONMVC_ROUTES`
//!
//! Path of the route declaration file (YAML, JSON or TOML by extension).
//!
//! Default: `config/routes.yaml`
//!
//! ### `JSONMVC_BASE_PATH`
//!
//! Application base path requests are resolved under, e.g. `/app`.
//!
//! Default: empty (the application owns the whole path space)
//!
//! ### `JSONMVC_DEFAULT_EXCLUSIONS`
//!
//! Comma-separated dot-notation exclusions applied to every response.
//! Set to an empty string to disable.
//!
//! Default: `*.class`
//!
//! ## Usage
//!
//! ```rust
//! use jsonmvc::runtime_config::DispatcherConfig;
//!
//! let config = DispatcherConfig::from_env();
//! println!("Routes file: {}", config.routes_path.display());
//! ```

use crate::response::DEFAULT_EXCLUSION;
use std::env;
use std::path::PathBuf;

/// Default route file, relative to the working directory
pub const DEFAULT_ROUTES_PATH: &str = "config/routes.yaml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatcherConfig {
    /// Route declaration file
    pub routes_path: PathBuf,
    /// Base path requests are resolved under
    pub base_path: String,
    /// Exclusions applied to every response
    pub default_exclusions: Vec<String>,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            routes_path: PathBuf::from(DEFAULT_ROUTES_PATH),
            base_path: String::new(),
            default_exclusions: vec![DEFAULT_EXCLUSION.to_string()],
        }
    }
}

impl DispatcherConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; `from_env` uses the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            routes_path: lookup("JSONMVC_ROUTES")
                .map(PathBuf::from)
                .unwrap_or(defaults.routes_path),
            base_path: lookup("JSONMVC_BASE_PATH").unwrap_or(defaults.base_path),
            default_exclusions: lookup("JSONMVC_DEFAULT_EXCLUSIONS")
                .map(|v| parse_exclusions(&v))
                .unwrap_or(defaults.default_exclusions),
        }
    }
}

fn parse_exclusions(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
