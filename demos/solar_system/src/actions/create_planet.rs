use jsonmvc::{Action, ActionError, ActionResult, ParameterMap, RequestContext};
use serde_json::json;
use tracing::info;

/// `POST /create/planet?name=...`
///
/// The catalogue is fixed, so creation is only acknowledged, never stored.
#[derive(Debug)]
pub struct CreatePlanet {
    request_id: String,
    name: Option<String>,
}

impl CreatePlanet {
    pub fn new(ctx: &RequestContext) -> Self {
        Self {
            request_id: ctx.request_id.to_string(),
            name: ctx
                .parameter("name")
                .map(str::trim)
                .filter(|n| !n.is_empty())
                .map(str::to_string),
        }
    }
}

impl Action for CreatePlanet {
    fn validate(&mut self, _arguments: &[String], _parameters: &ParameterMap) -> Result<(), ActionError> {
        if self.name.is_none() {
            return Err(ActionError::validation("Parameter 'name' is required"));
        }
        Ok(())
    }

    fn execute(&mut self, _arguments: &[String], _parameters: &ParameterMap) -> ActionResult {
        let name = self.name.take().unwrap_or_default();
        info!(request_id = %self.request_id, planet = %name, "Planet creation acknowledged");
        Ok(json!({ "created": name, "stored": false }))
    }
}
