//! # Dispatcher Module
//!
//! The single entry point between an HTTP transport and the application's
//! actions.
//!
//! ## Request Flow
//!
//! 1. The route table is built on first use from the route source and cached
//! 2. The path is made relative to the base path and resolved (last match wins)
//! 3. Positional arguments are extracted from the same relative path
//! 4. A fresh action is instantiated and driven through its lifecycle
//! 5. The success envelope, or an error envelope, is serialized exactly once
//!
//! ## Error Handling
//!
//! Nothing escapes [`Dispatcher::dispatch`]:
//! - configuration, not-found, invalid-path, validation and application
//!   errors become `{"errorMessage": "..."}` with status 500
//! - handler panics are caught and reported the same way
//! - every failure is logged with its kind before the response is built
//!
//! ## Transport Adapter
//!
//! ```rust,ignore
//! let response = dispatcher.dispatch(
//!     req.method().as_str(),
//!     req.uri().path(),
//!     "/app",
//!     parameters_from_query(req.uri().query().unwrap_or("")),
//! );
//! write_status(response.status);
//! write_body(&response.body);
//! ```

mod core;
pub mod lifecycle;

pub use core::{DispatchResponse, Dispatcher, STATUS_OK, STATUS_SERVER_ERROR};
