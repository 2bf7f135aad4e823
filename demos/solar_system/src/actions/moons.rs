use super::planet_id;
use crate::data::find_planet;
use jsonmvc::{Action, ActionError, ActionResult, ParameterMap};
use serde_json::json;

/// `GET /view/planet/%1/moons`. Moon masses are left out of the response.
#[derive(Debug, Default)]
pub struct MoonHandler;

impl Action for MoonHandler {
    fn execute(&mut self, arguments: &[String], _parameters: &ParameterMap) -> ActionResult {
        let id = planet_id(arguments, 2)?;
        let planet =
            find_planet(id).ok_or_else(|| ActionError::application(format!("Unknown planet id: {id}")))?;
        Ok(json!({
            "planet": planet.name,
            "moons": planet.moons,
        }))
    }

    fn exclusions(&self) -> Vec<String> {
        vec!["moons.mass".to_string()]
    }
}
