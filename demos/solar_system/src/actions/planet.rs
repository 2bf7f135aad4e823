use super::planet_id;
use crate::data::{find_planet, Planet};
use jsonmvc::{Action, ActionError, ActionResult, ParameterMap};
use tracing::debug;

/// `GET /view/planet/%1`
#[derive(Debug, Default)]
pub struct PlanetHandler {
    planet: Option<Planet>,
}

impl Action for PlanetHandler {
    fn validate(&mut self, arguments: &[String], _parameters: &ParameterMap) -> Result<(), ActionError> {
        let id = planet_id(arguments, 2)?;
        self.planet = find_planet(id);
        if self.planet.is_none() {
            return Err(ActionError::validation(format!("Unknown planet id: {id}")));
        }
        Ok(())
    }

    fn execute(&mut self, _arguments: &[String], _parameters: &ParameterMap) -> ActionResult {
        let planet = self
            .planet
            .take()
            .ok_or_else(|| ActionError::application("Planet was not loaded"))?;
        debug!(planet = planet.name, "Viewing planet");
        Ok(serde_json::to_value(planet)?)
    }
}
