//! # Router Module
//!
//! Path matching and route resolution.
//!
//! ## Overview
//!
//! The router is responsible for:
//! - Compiling declarative path patterns (`/view/planet/%1`) into anchored regexes
//! - Holding the route table in declaration order
//! - Resolving a method + relative path to a [`RouteDescriptor`]
//!
//! ## Architecture
//!
//! 1. **Compilation**: when the table is built, each pattern is translated once:
//!    numbered placeholders become `[0-9]+`, all other text is escaped, and a
//!    `/*` suffix makes trailing separators optional.
//!
//! 2. **Matching**: each request scans the whole table. The last descriptor
//!    whose method and matcher both accept the request wins, so later
//!    declarations override earlier ones.
//!
//! ## Example
//!
//! ```rust
//! use http::Method;
//! use jsonmvc::config::RouteEntry;
//! use jsonmvc::router::RouteTable;
//!
//! let table = RouteTable::build(vec![
//!     RouteEntry::new(Method::GET, "/view/planet/%1", "PlanetHandler"),
//! ])
//! .unwrap();
//!
//! let route = table.resolve("GET", "/view/planet/42/").unwrap();
//! assert_eq!(&*route.handler_id, "PlanetHandler");
//! assert!(table.resolve("GET", "/view/planet/earth").is_err());
//! ```
//!
//! Argument extraction is separate from resolution; see [`crate::request`].

mod core;
mod pattern;
#[cfg(test)]
mod tests;

pub use core::{RouteDescriptor, RouteTable};
pub use pattern::{compile, pattern_to_regex, PathMatcher};
