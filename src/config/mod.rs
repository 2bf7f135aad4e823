//! # Config Module
//!
//! Loading of declarative route lists.
//!
//! A route file holds one entry per route: a path pattern, an HTTP method and
//! a handler identifier. The format follows the file extension:
//!
//! ```yaml
//! routes:
//!   - path: /view/planet/%1
//!     method: GET
//!     handler: PlanetHandler
//!   - path: /planet
//!     method: POST
//!     handler: CreatePlanet
//! ```
//!
//! Entries keep their declaration order, which matters for resolution
//! (see [`crate::router`]). Missing fields and unsupported verbs are reported
//! as [`ConfigurationError`](crate::error::ConfigurationError) before any
//! request is served.

mod load;
mod types;

pub use load::{load_routes, parse_routes, FileRouteSource, RouteSource};
pub use types::{RouteEntry, RouteFormat, SUPPORTED_METHODS};
