#![deny(missing_docs)]
//! Tool routing and HTTP dispatch.
//!
//! The backend exposes one route per tool. The route table is fixed and
//! closed: a name the table does not know fails with
//! [`ToolError::UnknownTool`](wayfarer_types::ToolError::UnknownTool) before
//! any request is issued. Argument payloads arrive from the model as
//! JSON-encoded strings and are decoded into their typed shapes before
//! dispatch; the raw string is still what goes on the wire.

pub mod dispatch;
pub mod routes;

pub use dispatch::ToolDispatcher;
pub use routes::{parse_arguments, route_for};
