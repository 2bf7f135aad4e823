use crate::data::planets;
use jsonmvc::{Action, ActionError, ActionResult, ParameterMap};
use serde_json::json;

/// `GET /list/planets[?sort=name|order]`
#[derive(Debug, Default)]
pub struct ListPlanets;

impl Action for ListPlanets {
    fn validate(&mut self, _arguments: &[String], parameters: &ParameterMap) -> Result<(), ActionError> {
        match sort_key(parameters) {
            "name" | "order" => Ok(()),
            other => Err(ActionError::validation(format!("Unsupported sort key: '{other}'"))),
        }
    }

    fn execute(&mut self, _arguments: &[String], parameters: &ParameterMap) -> ActionResult {
        let mut all = planets();
        if sort_key(parameters) == "name" {
            all.sort_by(|a, b| a.name.cmp(b.name));
        }
        let names: Vec<&str> = all.iter().map(|p| p.name).collect();
        Ok(json!({ "count": names.len(), "planets": names }))
    }
}

fn sort_key(parameters: &ParameterMap) -> &str {
    parameters
        .get("sort")
        .and_then(|v| v.first())
        .map_or("order", String::as_str)
}
