use crate::data::planets;
use jsonmvc::{Action, ActionResult, ParameterMap};
use serde_json::json;

/// Served for the bare base path, where the only argument is `default`.
#[derive(Debug, Default)]
pub struct Home;

impl Action for Home {
    fn execute(&mut self, arguments: &[String], _parameters: &ParameterMap) -> ActionResult {
        Ok(json!({
            "action": arguments.first(),
            "planets": planets().len(),
        }))
    }
}
