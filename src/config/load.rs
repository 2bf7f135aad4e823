use super::types::{RawRouteEntry, RouteEntry, RouteFile, RouteFormat, SUPPORTED_METHODS};
use crate::error::ConfigurationError;
use http::Method;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// The config-loader collaborator: produces the ordered route declarations.
///
/// Called at most once per successful route table build.
pub trait RouteSource: Send + Sync {
    /// Load the route declarations in declaration order.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigurationError`] if the declarations cannot be read or
    /// an entry is incomplete.
    fn load(&self) -> Result<Vec<RouteEntry>, ConfigurationError>;
}

/// Reads route declarations from a YAML, JSON or TOML file.
#[derive(Debug, Clone)]
pub struct FileRouteSource {
    path: PathBuf,
}

impl FileRouteSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RouteSource for FileRouteSource {
    fn load(&self) -> Result<Vec<RouteEntry>, ConfigurationError> {
        load_routes(&self.path)
    }
}

impl RouteSource for Vec<RouteEntry> {
    fn load(&self) -> Result<Vec<RouteEntry>, ConfigurationError> {
        Ok(self.clone())
    }
}

/// Load and validate the route declarations in `path`.
///
/// # Errors
///
/// Returns [`ConfigurationError::Io`] if the file cannot be read, and the
/// errors of [`parse_routes`] otherwise.
pub fn load_routes(path: &Path) -> Result<Vec<RouteEntry>, ConfigurationError> {
    let shown = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| ConfigurationError::Io {
        path: shown.clone(),
        message: e.to_string(),
    })?;

    let routes = parse_routes(&content, RouteFormat::from_path(&shown)).map_err(|err| {
        match err {
            ConfigurationError::Parse { message, .. } => ConfigurationError::Parse {
                path: shown.clone(),
                message,
            },
            other => other,
        }
    })?;

    info!(
        config_path = %shown,
        routes_count = routes.len(),
        "Route configuration loaded"
    );
    Ok(routes)
}

/// Parse route declarations from an in-memory document.
///
/// # Errors
///
/// - [`ConfigurationError::Parse`] for syntax errors
/// - [`ConfigurationError::MissingField`] when `path`, `method` or `handler`
///   is absent or empty
/// - [`ConfigurationError::UnsupportedMethod`] for verbs outside
///   GET/POST/PUT/DELETE
pub fn parse_routes(
    content: &str,
    format: RouteFormat,
) -> Result<Vec<RouteEntry>, ConfigurationError> {
    let parse_error = |message: String| ConfigurationError::Parse {
        path: "<inline>".to_string(),
        message,
    };

    let file: RouteFile = match format {
        RouteFormat::Yaml => serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?,
        RouteFormat::Json => serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?,
        RouteFormat::Toml => toml::from_str(content).map_err(|e| parse_error(e.to_string()))?,
    };

    file.routes
        .into_iter()
        .enumerate()
        .map(|(index, raw)| validate_entry(index, raw))
        .collect()
}

fn validate_entry(index: usize, raw: RawRouteEntry) -> Result<RouteEntry, ConfigurationError> {
    let path = required(index, "path", raw.path)?;
    let method = required(index, "method", raw.method)?;
    let handler = required(index, "handler", raw.handler)?;

    let method = parse_method(&method)
        .ok_or(ConfigurationError::UnsupportedMethod { index, method })?;

    debug!(index, method = %method, path = %path, handler = %handler, "Route entry accepted");

    Ok(RouteEntry {
        path,
        method,
        handler,
    })
}

fn required(
    index: usize,
    field: &'static str,
    value: Option<String>,
) -> Result<String, ConfigurationError> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(ConfigurationError::MissingField { index, field }),
    }
}

/// Exact, case-sensitive match against [`SUPPORTED_METHODS`].
fn parse_method(method: &str) -> Option<Method> {
    SUPPORTED_METHODS
        .iter()
        .find(|m| m.as_str() == method)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml_preserves_order() {
        let yaml = r#"
routes:
  - { path: "/view/planet/%1", method: GET, handler: PlanetHandler }
  - { path: "/view/planet/%1", method: GET, handler: ShadowHandler }
  - { path: "/planet", method: POST, handler: CreatePlanet }
"#;
        let routes = parse_routes(yaml, RouteFormat::Yaml).unwrap();
        let handlers: Vec<_> = routes.iter().map(|r| r.handler.as_str()).collect();
        assert_eq!(handlers, vec!["PlanetHandler", "ShadowHandler", "CreatePlanet"]);
        assert_eq!(routes[2].method, Method::POST);
    }

    #[test]
    fn test_empty_field_is_missing() {
        let yaml = r#"
routes:
  - { path: "", method: GET, handler: PlanetHandler }
"#;
        let err = parse_routes(yaml, RouteFormat::Yaml).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::MissingField {
                index: 0,
                field: "path"
            }
        );
    }

    #[test]
    fn test_lowercase_method_rejected() {
        let json = r#"{"routes": [{"path": "/x", "method": "get", "handler": "X"}]}"#;
        let err = parse_routes(json, RouteFormat::Json).unwrap_err();
        assert!(matches!(err, ConfigurationError::UnsupportedMethod { index: 0, .. }));
    }

    #[test]
    fn test_toml_routes() {
        let src = r#"
[[routes]]
path = "/moons"
method = "DELETE"
handler = "DeleteMoons"
"#;
        let routes = parse_routes(src, RouteFormat::Toml).unwrap();
        assert_eq!(routes, vec![RouteEntry::new(Method::DELETE, "/moons", "DeleteMoons")]);
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(RouteFormat::from_path("routes.JSON"), RouteFormat::Json);
        assert_eq!(RouteFormat::from_path("routes.toml"), RouteFormat::Toml);
        assert_eq!(RouteFormat::from_path("routes.yml"), RouteFormat::Yaml);
    }

    #[test]
    fn test_load_routes_from_file() {
        use std::io::Write;

        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(b"routes:\n  - { path: /moons, method: GET, handler: ListMoons }\n")
            .unwrap();
        let routes = load_routes(file.path()).unwrap();
        assert_eq!(routes, vec![RouteEntry::new(Method::GET, "/moons", "ListMoons")]);
    }
}
