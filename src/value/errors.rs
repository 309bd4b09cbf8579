//! Value model errors

use thiserror::Error;

use super::compare::CompareOp;
use super::value::ValueKind;

/// Result type for value operations
pub type ValueResult<T> = Result<T, ValueError>;

/// Failures raised by comparison and pattern matching
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("cannot compare {left} {op} {right}")]
    TypeMismatch {
        left: ValueKind,
        op: CompareOp,
        right: ValueKind,
    },

    #[error("LIKE pattern must be a STRING, got {0}")]
    NonStringPattern(ValueKind),

    #[error("invalid LIKE pattern: {0}")]
    InvalidPattern(String),
}
