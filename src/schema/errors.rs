//! Registration errors

use thiserror::Error;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors raised while populating a [`SchemaRegistry`](super::SchemaRegistry)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Table already registered: {0}")]
    DuplicateTable(String),

    #[error("Field already registered: {table}.{field}")]
    DuplicateField { table: String, field: String },

    #[error("Function already registered: {0}")]
    DuplicateFunction(String),

    #[error("Cannot register field on unknown table: {0}")]
    UnknownTable(String),
}
