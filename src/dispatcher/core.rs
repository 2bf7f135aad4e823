use super::lifecycle::{self, guarded, Completed};
use crate::action::ActionRegistry;
use crate::config::{FileRouteSource, RouteSource};
use crate::error::{ConfigurationError, DispatchError};
use crate::ids::RequestId;
use crate::request::{action_path, extract_arguments, ParameterMap, RequestContext};
use crate::response::{ErrorBean, ExclusionSerializer, JsonSerializer, ResponseEnvelope, DEFAULT_EXCLUSION};
use crate::router::RouteTable;
use crate::runtime_config::DispatcherConfig;
use once_cell::sync::OnceCell;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, info_span, warn};

/// Status written for every successful dispatch
pub const STATUS_OK: u16 = 200;

/// Status written for every failed dispatch, whatever the error kind
pub const STATUS_SERVER_ERROR: u16 = 500;

/// Last-resort body if the serializer panics
const FALLBACK_ERROR_BODY: &str = r#"{"errorMessage":"Failed to serialize response"}"#;

/// What the transport writes back: a status code and the JSON text, verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResponse {
    pub status: u16,
    pub body: String,
    pub request_id: RequestId,
}

impl DispatchResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Entry point between the transport and the application's actions.
///
/// The route table is built from the [`RouteSource`] on first use and then
/// shared, read-only, by every dispatch. Concurrent first requests block on
/// the single build; a failed build is not cached and is retried by the next
/// request.
///
/// ```rust
/// use http::Method;
/// use jsonmvc::config::RouteEntry;
/// use jsonmvc::{ActionRegistry, Dispatcher, ParameterMap};
///
/// let routes = vec![RouteEntry::new(Method::GET, "/status", "Status")];
/// let dispatcher = Dispatcher::new(routes, ActionRegistry::new());
///
/// let response = dispatcher.dispatch("GET", "/app/status", "/app", ParameterMap::new());
/// assert_eq!(response.status, 500);
/// assert_eq!(
///     response.body,
///     r#"{"errorMessage":"No action registered for handler: 'Status'"}"#
/// );
/// ```
pub struct Dispatcher {
    source: Box<dyn RouteSource>,
    routes: OnceCell<RouteTable>,
    actions: ActionRegistry,
    serializer: Arc<dyn JsonSerializer>,
    default_exclusions: Vec<String>,
}

impl Dispatcher {
    /// Dispatcher over `source` with the default serializer and the default
    /// `*.class` exclusion.
    pub fn new(source: impl RouteSource + 'static, actions: ActionRegistry) -> Self {
        Self {
            source: Box::new(source),
            routes: OnceCell::new(),
            actions,
            serializer: Arc::new(ExclusionSerializer::new()),
            default_exclusions: vec![DEFAULT_EXCLUSION.to_string()],
        }
    }

    /// Dispatcher reading routes from the configured file.
    #[must_use]
    pub fn from_config(config: &DispatcherConfig, actions: ActionRegistry) -> Self {
        Self::new(FileRouteSource::new(config.routes_path.clone()), actions)
            .with_default_exclusions(config.default_exclusions.clone())
    }

    /// Replace the serialization collaborator.
    #[must_use]
    pub fn with_serializer(mut self, serializer: Arc<dyn JsonSerializer>) -> Self {
        self.serializer = serializer;
        self
    }

    /// Replace the process-wide exclusions applied to every response.
    #[must_use]
    pub fn with_default_exclusions(mut self, exclusions: Vec<String>) -> Self {
        self.default_exclusions = exclusions;
        self
    }

    #[must_use]
    pub fn actions(&self) -> &ActionRegistry {
        &self.actions
    }

    #[must_use]
    pub fn default_exclusions(&self) -> &[String] {
        &self.default_exclusions
    }

    /// The route table, building it on first call.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigurationError`] raised while loading or compiling
    /// the routes. Nothing is cached in that case.
    pub fn routes(&self) -> Result<&RouteTable, ConfigurationError> {
        self.routes.get_or_try_init(|| {
            let entries = self.source.load()?;
            let table = RouteTable::build(entries)?;
            for handler_id in table.unresolved_handlers(&self.actions) {
                warn!(handler_id = %handler_id, "Route references an unregistered action");
            }
            Ok(table)
        })
    }

    /// Build the route table now so configuration errors surface before the
    /// first request. Returns the number of routes.
    ///
    /// # Errors
    ///
    /// Same as [`Self::routes`].
    pub fn warm_up(&self) -> Result<usize, ConfigurationError> {
        self.routes().map(RouteTable::len)
    }

    /// Dispatch one request.
    ///
    /// Never fails: every outcome, including configuration errors and handler
    /// panics, ends in a JSON body. Success answers [`STATUS_OK`], every
    /// failure [`STATUS_SERVER_ERROR`].
    pub fn dispatch(
        &self,
        method: &str,
        path: &str,
        base_path: &str,
        parameters: ParameterMap,
    ) -> DispatchResponse {
        let request_id = RequestId::new();
        let span = info_span!(
            "dispatch",
            request_id = %request_id,
            method = %method,
            path = %path
        );
        let _enter = span.enter();
        let start = Instant::now();

        let outcome = guarded("dispatch", || {
            self.try_dispatch(request_id, method, path, base_path, parameters)
        })
        .and_then(|result| result);

        let (status, envelope, completed) = match outcome {
            Ok((envelope, completed)) => (STATUS_OK, envelope, Some(completed)),
            Err(err) => {
                log_failure(&err);
                (
                    STATUS_SERVER_ERROR,
                    ResponseEnvelope::error(ErrorBean::from(&err), &self.default_exclusions),
                    None,
                )
            }
        };

        let ResponseEnvelope {
            payload,
            exclusions,
        } = envelope;
        let serialized = guarded("serialize", || {
            self.serializer.serialize(payload, &exclusions)
        });

        // post_execute only once the success body exists; the serializer is
        // never called a second time.
        let (status, body) = match (serialized, completed) {
            (Ok(body), None) => (status, body),
            (Ok(body), Some(completed)) => match completed.finish() {
                Ok(()) => (status, body),
                Err(err) => {
                    log_failure(&err);
                    (STATUS_SERVER_ERROR, render_error(&err))
                }
            },
            (Err(err), completed) => {
                log_failure(&err);
                if let Some(completed) = completed {
                    completed.abort(&err);
                }
                (STATUS_SERVER_ERROR, FALLBACK_ERROR_BODY.to_string())
            }
        };

        info!(
            status,
            body_bytes = body.len(),
            duration_us = start.elapsed().as_micros(),
            "Dispatch complete"
        );

        DispatchResponse {
            status,
            body,
            request_id,
        }
    }

    fn try_dispatch(
        &self,
        request_id: RequestId,
        method: &str,
        path: &str,
        base_path: &str,
        parameters: ParameterMap,
    ) -> Result<(ResponseEnvelope, Completed), DispatchError> {
        let relative = action_path(path, base_path)?;
        let routes = self.routes()?;
        let route = routes.resolve(method, relative)?;
        let arguments = extract_arguments(path, base_path)?;

        let ctx = RequestContext {
            request_id,
            method: method.to_string(),
            raw_path: path.to_string(),
            base_path: base_path.to_string(),
            arguments,
            parameters,
        };

        lifecycle::run(&self.actions, &route.handler_id, &ctx, &self.default_exclusions)
    }
}

fn log_failure(err: &DispatchError) {
    error!(
        error_kind = err.kind(),
        error = %err,
        "Dispatch failed"
    );
}

/// Error body for failures that happen after the serializer already ran.
fn render_error(err: &DispatchError) -> String {
    serde_json::to_string(&ErrorBean::from(err))
        .unwrap_or_else(|_| FALLBACK_ERROR_BODY.to_string())
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("routes_loaded", &self.routes.get().map(RouteTable::len))
            .field("actions", &self.actions)
            .field("default_exclusions", &self.default_exclusions)
            .finish()
    }
}
