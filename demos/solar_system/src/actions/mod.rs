pub mod create_planet;
pub mod home;
pub mod list_planets;
pub mod moons;
pub mod planet;

pub use create_planet::CreatePlanet;
pub use home::Home;
pub use list_planets::ListPlanets;
pub use moons::MoonHandler;
pub use planet::PlanetHandler;

use jsonmvc::ActionError;

/// Parse the numeric planet id at `index` of the positional arguments.
pub(crate) fn planet_id(arguments: &[String], index: usize) -> Result<u32, ActionError> {
    arguments
        .get(index)
        .and_then(|raw| raw.parse().ok())
        .ok_or_else(|| ActionError::validation("A numeric planet id is required"))
}
