//! # jsonmvc
//!
//! **jsonmvc** is a small dispatch layer that turns an HTTP method and path
//! into a call on an application action and returns the action's result as
//! JSON.
//!
//! ## Overview
//!
//! An application declares its routes in a file (method, path pattern,
//! handler id) and registers one factory per handler id. For every request the
//! dispatcher:
//!
//! 1. builds the route table on first use and caches it for the life of the
//!    process
//! 2. strips the application base path and resolves the remaining action path
//!    against the table, the last matching declaration winning
//! 3. splits the same path into positional arguments
//! 4. instantiates a fresh action and drives it through its lifecycle
//! 5. serializes the result, or an `{"errorMessage": ...}` body, exactly once
//!
//! The transport (HTTP server, servlet container, test harness) stays outside:
//! it hands the dispatcher a method, a path, a base path and the request
//! parameters, and writes back the returned status and body.
//!
//! ## Architecture
//!
//! - **[`config`]** - Route declaration loading (YAML, JSON, TOML)
//! - **[`router`]** - Path pattern compilation and last-match-wins resolution
//! - **[`request`]** - Base-path stripping, argument extraction, parameters
//! - **[`action`]** - The handler contract and the handler registry
//! - **[`dispatcher`]** - The entry point and the handler lifecycle runner
//! - **[`response`]** - Response envelopes and exclusion-aware JSON serialization
//! - **[`error`]** - Error taxonomy surfaced as error bodies
//! - **[`logging`]** - `tracing` subscriber setup for binaries
//! - **[`runtime_config`]** - Environment-driven dispatcher settings
//! - **[`cli`]** - The `jsonmvc` command-line tool
//!
//! ## Route Patterns
//!
//! A pattern is a literal path in which `%<digits>` stands for one numeric
//! segment. Trailing slashes are not significant:
//!
//! ```text
//! GET    /view/planet/%1     PlanetHandler
//! POST   /create/planet      CreatePlanet
//! GET    /                   Home
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use http::Method;
//! use jsonmvc::config::RouteEntry;
//! use jsonmvc::{Action, ActionRegistry, ActionResult, Dispatcher, ParameterMap};
//! use serde_json::json;
//!
//! #[derive(Default)]
//! struct Hello;
//!
//! impl Action for Hello {
//!     fn execute(&mut self, arguments: &[String], _p: &ParameterMap) -> ActionResult {
//!         Ok(json!({ "hello": arguments.last() }))
//!     }
//! }
//!
//! let mut actions = ActionRegistry::new();
//! actions.register_default::<Hello>("Hello");
//!
//! let routes = vec![RouteEntry::new(Method::GET, "/hello/%1", "Hello")];
//! let dispatcher = Dispatcher::new(routes, actions);
//!
//! let response = dispatcher.dispatch("GET", "/app/hello/42", "/app", ParameterMap::new());
//! assert_eq!(response.status, 200);
//! assert_eq!(response.body, r#"{"hello":"42"}"#);
//! ```

pub mod action;
pub mod cli;
pub mod config;
pub mod dispatcher;
pub mod echo;
pub mod error;
pub mod ids;
pub mod logging;
pub mod request;
pub mod response;
pub mod router;
pub mod runtime_config;

pub use action::{Action, ActionFactory, ActionRegistry, ActionResult};
pub use config::{RouteEntry, RouteSource};
pub use dispatcher::{DispatchResponse, Dispatcher};
pub use error::{ActionError, ConfigurationError, DispatchError};
pub use ids::RequestId;
pub use request::{parameters_from_query, ParameterMap, RequestContext};
pub use response::{ErrorBean, ExclusionSerializer, JsonSerializer};
pub use router::RouteTable;
pub use runtime_config::DispatcherConfig;
