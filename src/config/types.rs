use http::Method;
use serde::Deserialize;

/// Verbs a route may be declared with.
pub const SUPPORTED_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PUT, Method::DELETE];

/// A validated route declaration: one entry of the route file.
///
/// This is what the config loader hands to the route table. Compilation of
/// `path` into a matcher happens in [`crate::router`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path pattern, e.g. `/view/planet/%1`
    pub path: String,
    /// One of [`SUPPORTED_METHODS`]
    pub method: Method,
    /// Opaque handler identifier looked up in the action registry
    pub handler: String,
}

impl RouteEntry {
    /// Build an entry directly, bypassing file parsing.
    ///
    /// Unsupported methods are not rejected here; use the loaders for
    /// validated input.
    pub fn new(method: Method, path: impl Into<String>, handler: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method,
            handler: handler.into(),
        }
    }
}

/// Top-level shape of a route declaration file.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RouteFile {
    #[serde(default)]
    pub routes: Vec<RawRouteEntry>,
}

/// A route entry as written, before required-field validation.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawRouteEntry {
    pub path: Option<String>,
    pub method: Option<String>,
    pub handler: Option<String>,
}

/// Serialization format of a route file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteFormat {
    Yaml,
    Json,
    Toml,
}

impl RouteFormat {
    /// Detect the format from a file name. Unknown extensions are read as YAML.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let lower = path.to_ascii_lowercase();
        if lower.ends_with(".json") {
            RouteFormat::Json
        } else if lower.ends_with(".toml") {
            RouteFormat::Toml
        } else {
            RouteFormat::Yaml
        }
    }
}
