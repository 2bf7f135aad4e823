//! Solar system demo application for `jsonmvc`.
//!
//! A read-mostly catalogue of planets and moons served through five actions.
//! [`dispatcher`] wires the bundled route file to [`registry::register_all`].

pub mod actions;
pub mod data;
pub mod registry;

use jsonmvc::config::{parse_routes, RouteFormat};
use jsonmvc::{ActionRegistry, ConfigurationError, Dispatcher};

/// The bundled route declarations
pub const ROUTES_YAML: &str = include_str!("../config/routes.yaml");

/// Dispatcher over the bundled routes with every demo action registered.
///
/// # Errors
///
/// Returns the configuration error if the bundled route file is malformed.
pub fn dispatcher() -> Result<Dispatcher, ConfigurationError> {
    let routes = parse_routes(ROUTES_YAML, RouteFormat::Yaml)?;
    let mut actions = ActionRegistry::new();
    registry::register_all(&mut actions);
    Ok(Dispatcher::new(routes, actions))
}
