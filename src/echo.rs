use crate::action::{Action, ActionRegistry, ActionResult};
use crate::request::{ParameterMap, RequestContext};
use crate::router::RouteTable;
use serde_json::json;

/// Placeholder action: echoes back what it was dispatched with.
///
/// Used by the CLI `dispatch` command so a route file can be exercised before
/// any real handler exists.
#[derive(Debug, Clone)]
pub struct EchoAction {
    handler_id: String,
    method: String,
    path: String,
}

impl EchoAction {
    pub fn new(handler_id: impl Into<String>, ctx: &RequestContext) -> Self {
        Self {
            handler_id: handler_id.into(),
            method: ctx.method.clone(),
            path: ctx.raw_path.clone(),
        }
    }
}

impl Action for EchoAction {
    fn execute(&mut self, arguments: &[String], parameters: &ParameterMap) -> ActionResult {
        Ok(json!({
            "handler": self.handler_id,
            "method": self.method,
            "path": self.path,
            "arguments": arguments,
            "parameters": parameters,
        }))
    }
}

/// Register an [`EchoAction`] for every handler id in `routes` that has no
/// factory yet. Returns how many were added.
pub fn register_echo_actions(registry: &mut ActionRegistry, routes: &RouteTable) -> usize {
    let mut added = 0;
    for handler_id in routes.unresolved_handlers(registry) {
        let id = handler_id.to_string();
        registry.register(&handler_id, move |ctx| {
            Ok(Box::new(EchoAction::new(id.clone(), ctx)) as Box<dyn Action>)
        });
        added += 1;
    }
    added
}
