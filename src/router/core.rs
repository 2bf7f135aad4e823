//! Route table core: compiled descriptors and the resolver.

use super::pattern::{compile, PathMatcher};
use crate::action::ActionRegistry;
use crate::config::RouteEntry;
use crate::error::{ConfigurationError, DispatchError};
use http::Method;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// An immutable, compiled route.
#[derive(Debug, Clone)]
pub struct RouteDescriptor {
    /// Path pattern as declared (e.g. `/view/planet/%1`)
    pub path_pattern: String,
    /// HTTP verb the route answers to
    pub method: Method,
    /// Handler identifier resolved through the action registry
    pub handler_id: Arc<str>,
    matcher: PathMatcher,
}

impl RouteDescriptor {
    /// Compile a single route entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidPattern`] if the pattern cannot be
    /// compiled. `index` is the entry's position, used for diagnostics.
    pub fn compile(index: usize, entry: RouteEntry) -> Result<Self, ConfigurationError> {
        let matcher = compile(&entry.path).map_err(|e| ConfigurationError::InvalidPattern {
            index,
            pattern: entry.path.clone(),
            message: e.to_string(),
        })?;
        Ok(Self {
            path_pattern: entry.path,
            method: entry.method,
            handler_id: Arc::from(entry.handler),
            matcher,
        })
    }

    /// The compiled matcher for [`Self::path_pattern`]
    #[must_use]
    pub fn matcher(&self) -> &PathMatcher {
        &self.matcher
    }

    /// True if this route answers `method` on `path`
    #[inline]
    #[must_use]
    pub fn accepts(&self, method: &str, path: &str) -> bool {
        self.method.as_str() == method && self.matcher.matches(path)
    }
}

/// Ordered collection of compiled routes, in declaration order.
///
/// Duplicates (same method and pattern) are allowed; the later declaration
/// shadows the earlier one during resolution.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<RouteDescriptor>,
}

impl RouteTable {
    /// Compile every entry, keeping declaration order.
    ///
    /// # Errors
    ///
    /// Fails on the first entry whose pattern cannot be compiled.
    pub fn build(entries: Vec<RouteEntry>) -> Result<Self, ConfigurationError> {
        let routes = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| RouteDescriptor::compile(index, entry))
            .collect::<Result<Vec<_>, _>>()?;

        let routes_summary: Vec<String> = routes
            .iter()
            .take(10)
            .map(|r| format!("{} {}", r.method, r.path_pattern))
            .collect();

        info!(
            routes_count = routes.len(),
            routes_summary = ?routes_summary,
            "Route table built"
        );

        Ok(Self { routes })
    }

    /// Resolve `method` + `path` to a route.
    ///
    /// Scans the whole table and keeps the **last** matching descriptor, so a
    /// route declared later shadows an earlier one with an overlapping
    /// pattern. `path` must already be relative to the base path.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::ActionNotFound`] when nothing matches.
    pub fn resolve(&self, method: &str, path: &str) -> Result<&RouteDescriptor, DispatchError> {
        debug!(method = %method, path = %path, "Route match attempt");
        let match_start = Instant::now();

        let mut candidate = None;
        for route in &self.routes {
            if route.accepts(method, path) {
                if let Some(previous) = candidate.replace(route) {
                    debug!(
                        shadowed_handler = %previous.handler_id,
                        handler_id = %route.handler_id,
                        "Later route shadows earlier match"
                    );
                }
            }
        }

        let match_duration = match_start.elapsed();
        match candidate {
            Some(route) => {
                info!(
                    method = %method,
                    path = %path,
                    handler_id = %route.handler_id,
                    route_pattern = %route.path_pattern,
                    duration_us = match_duration.as_micros(),
                    "Route matched"
                );
                Ok(route)
            }
            None => {
                warn!(
                    method = %method,
                    path = %path,
                    duration_us = match_duration.as_micros(),
                    "No route matched"
                );
                Err(DispatchError::ActionNotFound {
                    path: path.to_string(),
                    method: method.to_string(),
                })
            }
        }
    }

    /// Handler ids referenced by the table that `registry` cannot instantiate,
    /// in first-seen order without duplicates.
    #[must_use]
    pub fn unresolved_handlers(&self, registry: &ActionRegistry) -> Vec<Arc<str>> {
        let mut missing: Vec<Arc<str>> = Vec::new();
        for route in &self.routes {
            if !registry.contains(&route.handler_id)
                && !missing.iter().any(|m| *m == route.handler_id)
            {
                missing.push(Arc::clone(&route.handler_id));
            }
        }
        missing
    }

    /// One line per route: `METHOD pattern -> handler`.
    #[must_use]
    pub fn dump_routes(&self) -> String {
        let mut out = format!("[routes] count={}\n", self.routes.len());
        for route in &self.routes {
            out.push_str(&format!(
                "[route] {} {} -> {}\n",
                route.method, route.path_pattern, route.handler_id
            ));
        }
        out
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteDescriptor> {
        self.routes.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
