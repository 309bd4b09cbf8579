//! Capabilities a host registers for its tables and functions.
//!
//! Each trait is implemented for plain closures, so most hosts never name
//! a type:
//!
//! ```ignore
//! registry.register_field("users", "age", |u: &User| Value::from(u.age))?;
//! ```

use thiserror::Error;

use crate::value::Value;

/// Expands a source handle into the ordered rows of one table.
pub trait TableProvider<S, R>: Send + Sync {
    fn provide(&self, source: &S) -> Vec<R>;
}

impl<S, R, F> TableProvider<S, R> for F
where
    F: Fn(&S) -> Vec<R> + Send + Sync,
{
    fn provide(&self, source: &S) -> Vec<R> {
        self(source)
    }
}

/// Reads one named field out of a row.
///
/// An extractor may panic on rows it does not understand; the executor
/// contains that panic and fails the query.
pub trait FieldExtractor<R>: Send + Sync {
    fn extract(&self, row: &R) -> Value;
}

impl<R, F> FieldExtractor<R> for F
where
    F: Fn(&R) -> Value + Send + Sync,
{
    fn extract(&self, row: &R) -> Value {
        self(row)
    }
}

/// A named function callable from a query.
pub trait FunctionExecutor: Send + Sync {
    fn execute(&self, args: &[Value]) -> Result<Value, FunctionFailure>;
}

impl<F> FunctionExecutor for F
where
    F: Fn(&[Value]) -> Result<Value, FunctionFailure> + Send + Sync,
{
    fn execute(&self, args: &[Value]) -> Result<Value, FunctionFailure> {
        self(args)
    }
}

/// Error returned by a [`FunctionExecutor`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FunctionFailure {
    message: String,
}

impl FunctionFailure {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
