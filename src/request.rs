//! # Request Module
//!
//! Per-request context and the extraction of positional arguments.
//!
//! For a base path `/app`, the request `/app/view/planet/1?maxSize=500&locale=en`
//! breaks down into:
//!
//! ```text
//! action path: /view/planet/1       (resolved against the route table)
//! arguments:   ["view", "planet", "1"]
//! parameters:  {"maxSize": ["500"], "locale": ["en"]}
//! ```
//!
//! Arguments are positional path segments; parameters are the multi-valued
//! query/body map supplied by the transport.

use crate::error::DispatchError;
use crate::ids::RequestId;
use smallvec::SmallVec;
use std::collections::HashMap;

/// Argument list used for the root action (`<base>` or `<base>/`)
pub const DEFAULT_ACTION: &str = "default";

/// Maximum number of arguments before heap allocation.
pub const MAX_INLINE_ARGS: usize = 8;

/// Positional path segments, stored inline for short paths.
pub type ArgVec = SmallVec<[String; MAX_INLINE_ARGS]>;

/// Parameter name to every value supplied for it, in arrival order.
pub type ParameterMap = HashMap<String, Vec<String>>;

/// Everything a handler knows about the request it is serving.
///
/// Built once per dispatch and owned by that dispatch only.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Correlation id for log records
    pub request_id: RequestId,
    /// Request verb as supplied by the transport
    pub method: String,
    /// Full request path, including the base path
    pub raw_path: String,
    /// Application base path the request was resolved under
    pub base_path: String,
    /// Positional path segments after the base path
    pub arguments: ArgVec,
    /// Query/body parameters
    pub parameters: ParameterMap,
}

impl RequestContext {
    /// First value of a parameter, if any
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&str> {
        self.parameters
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// Strip `base_path` from `path`.
///
/// The base path must be followed by nothing or by a `/`: with base `/app`,
/// `/app/x` is accepted and `/application` is not. A trailing `/` on the base
/// path is ignored.
///
/// # Errors
///
/// Returns [`DispatchError::InvalidRequest`] when `path` is not under
/// `base_path`.
pub fn relative_path<'a>(path: &'a str, base_path: &str) -> Result<&'a str, DispatchError> {
    let base = base_path.trim_end_matches('/');
    match path.strip_prefix(base) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => Ok(rest),
        _ => Err(DispatchError::InvalidRequest {
            path: path.to_string(),
            base_path: base_path.to_string(),
        }),
    }
}

/// The path matched against the route table: the relative path, or `/` when
/// the request targets the base path itself.
///
/// # Errors
///
/// Same as [`relative_path`].
pub fn action_path<'a>(path: &'a str, base_path: &str) -> Result<&'a str, DispatchError> {
    let rest = relative_path(path, base_path)?;
    if rest.len() <= 1 {
        Ok("/")
    } else {
        Ok(rest)
    }
}

/// Split the relative path into positional arguments.
///
/// - `<base>` and `<base>/` yield `["default"]`
/// - otherwise the leading `/` is dropped and the rest split on `/`; empty
///   segments between separators are kept, trailing empty segments are not
///
/// # Errors
///
/// Same as [`relative_path`].
pub fn extract_arguments(path: &str, base_path: &str) -> Result<ArgVec, DispatchError> {
    let rest = relative_path(path, base_path)?;
    if rest.len() <= 1 {
        let mut args = ArgVec::new();
        args.push(DEFAULT_ACTION.to_string());
        return Ok(args);
    }

    let mut args: ArgVec = rest[1..].split('/').map(str::to_string).collect();
    while args.last().is_some_and(String::is_empty) {
        args.pop();
    }
    Ok(args)
}

/// Build a [`ParameterMap`] from a URL-encoded query string.
///
/// Repeated names accumulate values in order. A leading `?` is ignored.
#[must_use]
pub fn parameters_from_query(query: &str) -> ParameterMap {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut params = ParameterMap::new();
    for (name, value) in url::form_urlencoded::parse(query.as_bytes()) {
        params
            .entry(name.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    params
}
