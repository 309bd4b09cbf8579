//! Schema registry subsystem for tableql
//!
//! A host exposes its data as tables by registering three capabilities:
//!
//! - a [`TableProvider`] that expands a source into rows
//! - one [`FieldExtractor`] per field that reads a [`Value`] from a row
//! - [`FunctionExecutor`]s callable from a query by name
//!
//! The registry is populated once, then borrowed immutably by every query.
//! Field registration order is kept explicitly because `SELECT *` expands
//! to the fields in that order.
//!
//! [`Value`]: crate::value::Value

mod capability;
mod errors;
mod registry;

pub use capability::{FieldExtractor, FunctionExecutor, FunctionFailure, TableProvider};
pub use errors::{RegistryError, RegistryResult};
pub use registry::SchemaRegistry;
