//! # CLI Module
//!
//! Command-line tooling for inspecting and exercising a route file without a
//! transport in front of it.
//!
//! ## Commands
//!
//! ### `routes`
//!
//! Print the compiled route table in declaration order:
//!
//! ```bash
//! jsonmvc routes --config config/routes.yaml
//! ```
//!
//! ### `check`
//!
//! Load and compile the route file, failing on the first configuration error:
//!
//! ```bash
//! jsonmvc check --config config/routes.yaml
//! ```
//!
//! ### `resolve`
//!
//! Show which handler a method and action path resolve to (last match wins):
//!
//! ```bash
//! jsonmvc resolve --config config/routes.yaml --method GET /view/planet/3
//! ```
//!
//! ### `dispatch`
//!
//! Run a full dispatch with echo actions standing in for every handler and
//! print the status and JSON body:
//!
//! ```bash
//! jsonmvc dispatch --config config/routes.yaml --base-path /app \
//!     --query 'sort=name' --method GET /app/view/planet/3
//! ```
//!
//! `--config` falls back to `JSONMVC_ROUTES`, then `config/routes.yaml`.

mod commands;


pub use commands::{execute, run_cli, Cli, Commands};
