use crate::error::ActionError;
use crate::request::{ParameterMap, RequestContext};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{info, warn};

/// Result of a handler's main operation: the object graph to serialize.
pub type ActionResult = Result<Value, ActionError>;

/// The contract every handler honors.
///
/// A fresh instance is built for every dispatch, so implementations may keep
/// per-request state in `self`. Only [`Action::execute`] is required; the
/// lifecycle callbacks default to no-ops and are invoked at fixed points:
///
/// ```text
/// pre_execute → validate → execute → exclusions → post_execute
///                   └──────────┴── on failure ──→ on_error
/// ```
pub trait Action: Send {
    /// Main operation. The returned value is serialized into the response body.
    ///
    /// # Errors
    ///
    /// Any [`ActionError`] aborts the request with an error response.
    fn execute(&mut self, arguments: &[String], parameters: &ParameterMap) -> ActionResult;

    /// Precondition check run before [`Action::execute`].
    ///
    /// # Errors
    ///
    /// Returning an error short-circuits: `execute` is never called.
    fn validate(&mut self, _arguments: &[String], _parameters: &ParameterMap) -> Result<(), ActionError> {
        Ok(())
    }

    /// Called after instantiation, before validation
    fn pre_execute(&mut self) {}

    /// Called once the response envelope has been built, on success only
    fn post_execute(&mut self) {}

    /// Called when any step after instantiation fails
    fn on_error(&mut self) {}

    /// Dot-notation field paths to drop from the serialized result, added to
    /// the process-wide defaults.
    fn exclusions(&self) -> Vec<String> {
        Vec::new()
    }
}

/// Builds a handler instance for one request, with the request context
/// injected.
pub type ActionFactory =
    Arc<dyn Fn(&RequestContext) -> Result<Box<dyn Action>, ActionError> + Send + Sync>;

/// Static map from handler identifier to factory.
///
/// Populated once at startup; lookups that miss are reported as application
/// errors by the dispatcher.
#[derive(Clone, Default)]
pub struct ActionRegistry {
    factories: HashMap<String, ActionFactory>,
}

impl ActionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a factory under `handler_id`.
    ///
    /// Replaces (and logs) any factory previously registered under the same id.
    pub fn register<F>(&mut self, handler_id: &str, factory: F)
    where
        F: Fn(&RequestContext) -> Result<Box<dyn Action>, ActionError> + Send + Sync + 'static,
    {
        if self
            .factories
            .insert(handler_id.to_string(), Arc::new(factory))
            .is_some()
        {
            warn!(handler_id = %handler_id, "Replaced existing action factory");
        } else {
            info!(
                handler_id = %handler_id,
                total_actions = self.factories.len(),
                "Action registered"
            );
        }
    }

    /// Register a handler type constructed with `Default` for every request.
    pub fn register_default<A>(&mut self, handler_id: &str)
    where
        A: Action + Default + 'static,
    {
        self.register(handler_id, |_ctx| Ok(Box::new(A::default()) as Box<dyn Action>));
    }

    #[must_use]
    pub fn get(&self, handler_id: &str) -> Option<&ActionFactory> {
        self.factories.get(handler_id)
    }

    #[must_use]
    pub fn contains(&self, handler_id: &str) -> bool {
        self.factories.contains_key(handler_id)
    }

    /// Registered handler ids, sorted
    #[must_use]
    pub fn handler_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Build a fresh handler for `handler_id`.
    ///
    /// # Errors
    ///
    /// [`ActionError::Application`] when the id is not registered, or whatever
    /// the factory itself returns.
    pub fn instantiate(
        &self,
        handler_id: &str,
        ctx: &RequestContext,
    ) -> Result<Box<dyn Action>, ActionError> {
        let factory = self.get(handler_id).ok_or_else(|| {
            ActionError::application(format!(
                "No action registered for handler: '{handler_id}'"
            ))
        })?;
        factory(ctx)
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("handler_ids", &self.handler_ids())
            .finish()
    }
}
