//! # Action Module
//!
//! The handler contract and the registry that instantiates handlers by id.
//!
//! ## Implementing an action
//!
//! ```rust
//! use jsonmvc::action::{Action, ActionRegistry, ActionResult};
//! use jsonmvc::error::ActionError;
//! use jsonmvc::request::ParameterMap;
//! use serde_json::json;
//!
//! #[derive(Default)]
//! struct PlanetHandler;
//!
//! impl Action for PlanetHandler {
//!     fn validate(&mut self, args: &[String], _params: &ParameterMap) -> Result<(), ActionError> {
//!         match args.get(2) {
//!             Some(id) if id.parse::<u32>().is_ok() => Ok(()),
//!             _ => Err(ActionError::validation("planet id must be numeric")),
//!         }
//!     }
//!
//!     fn execute(&mut self, args: &[String], _params: &ParameterMap) -> ActionResult {
//!         Ok(json!({ "id": args[2], "name": "Mercury" }))
//!     }
//! }
//!
//! let mut registry = ActionRegistry::new();
//! registry.register_default::<PlanetHandler>("PlanetHandler");
//! assert!(registry.contains("PlanetHandler"));
//! ```
//!
//! Handlers that need the request context at construction time register a
//! closure with [`ActionRegistry::register`] instead.

mod core;

pub use core::{Action, ActionFactory, ActionRegistry, ActionResult};
