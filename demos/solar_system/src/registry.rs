use crate::actions::{CreatePlanet, Home, ListPlanets, MoonHandler, PlanetHandler};
use jsonmvc::{Action, ActionRegistry};

/// Register every demo action under the handler id used in `config/routes.yaml`.
pub fn register_all(registry: &mut ActionRegistry) {
    registry.register_default::<Home>("Home");
    registry.register_default::<ListPlanets>("ListPlanets");
    registry.register_default::<PlanetHandler>("PlanetHandler");
    registry.register_default::<MoonHandler>("MoonHandler");
    registry.register("CreatePlanet", |ctx| {
        Ok(Box::new(CreatePlanet::new(ctx)) as Box<dyn Action>)
    });
}
