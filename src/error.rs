//! Query error types
//!
//! Error codes:
//! - QUERY_UNKNOWN_TABLE (REJECT)
//! - QUERY_UNKNOWN_FIELD (REJECT)
//! - QUERY_UNKNOWN_FUNCTION (REJECT)
//! - QUERY_INVALID_ARGUMENT (REJECT)
//! - QUERY_TYPE_MISMATCH (ERROR)
//! - QUERY_FUNCTION_FAILED (ERROR)
//! - QUERY_EVALUATION_PANIC (ERROR)
//!
//! Every code aborts the whole query. REJECT means the query cannot be
//! resolved against the registry; ERROR means evaluation failed on a row.

use std::fmt;

use crate::schema::FunctionFailure;
use crate::value::ValueError;

/// Severity levels for query errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Query is malformed for this registry
    Reject,
    /// Query failed while evaluating rows
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Reject => write!(f, "REJECT"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Query error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorCode {
    /// Table name not registered
    UnknownTable,
    /// Field not registered on the table
    UnknownField,
    /// Function name not registered
    UnknownFunction,
    /// Wildcard argument, non-string LIKE pattern, bad arity or type
    InvalidArgument,
    /// Comparison between values of different tags
    TypeMismatch,
    /// A function returned an error
    FunctionError,
    /// A registered extractor, function or provider panicked
    EvaluationPanic,
}

impl QueryErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            QueryErrorCode::UnknownTable => "QUERY_UNKNOWN_TABLE",
            QueryErrorCode::UnknownField => "QUERY_UNKNOWN_FIELD",
            QueryErrorCode::UnknownFunction => "QUERY_UNKNOWN_FUNCTION",
            QueryErrorCode::InvalidArgument => "QUERY_INVALID_ARGUMENT",
            QueryErrorCode::TypeMismatch => "QUERY_TYPE_MISMATCH",
            QueryErrorCode::FunctionError => "QUERY_FUNCTION_FAILED",
            QueryErrorCode::EvaluationPanic => "QUERY_EVALUATION_PANIC",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            QueryErrorCode::UnknownTable
            | QueryErrorCode::UnknownField
            | QueryErrorCode::UnknownFunction
            | QueryErrorCode::InvalidArgument => Severity::Reject,
            QueryErrorCode::TypeMismatch
            | QueryErrorCode::FunctionError
            | QueryErrorCode::EvaluationPanic => Severity::Error,
        }
    }
}

impl fmt::Display for QueryErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Query error with full context
#[derive(Debug, Clone)]
pub struct QueryError {
    /// Error code
    code: QueryErrorCode,
    /// Human-readable message
    message: String,
    /// Table, field or function name the error is about
    subject: Option<String>,
    /// Failure returned by a function executor
    source: Option<FunctionFailure>,
}

impl QueryError {
    fn new(code: QueryErrorCode, message: String, subject: Option<String>) -> Self {
        Self {
            code,
            message,
            subject,
            source: None,
        }
    }

    /// Create an unknown table error
    pub fn unknown_table(table: &str) -> Self {
        Self::new(
            QueryErrorCode::UnknownTable,
            format!("Unknown table: {}", table),
            Some(table.to_string()),
        )
    }

    /// Create an unknown field error
    pub fn unknown_field(table: &str, field: &str) -> Self {
        Self::new(
            QueryErrorCode::UnknownField,
            format!("Unknown field '{}' on table '{}'", field, table),
            Some(field.to_string()),
        )
    }

    /// Create an unknown function error
    pub fn unknown_function(name: &str) -> Self {
        Self::new(
            QueryErrorCode::UnknownFunction,
            format!("Unknown function: {}", name),
            Some(name.to_string()),
        )
    }

    /// Create an invalid argument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::new(QueryErrorCode::InvalidArgument, reason.into(), None)
    }

    /// Create a type mismatch error
    pub fn type_mismatch(reason: impl Into<String>) -> Self {
        Self::new(QueryErrorCode::TypeMismatch, reason.into(), None)
    }

    /// Create a function error wrapping the executor's failure
    pub fn function_failed(name: &str, failure: FunctionFailure) -> Self {
        Self {
            code: QueryErrorCode::FunctionError,
            message: format!("Function '{}' failed: {}", name, failure),
            subject: Some(name.to_string()),
            source: Some(failure),
        }
    }

    /// Create an error for a contained panic
    pub fn evaluation_panic(subject: &str, payload: &str) -> Self {
        Self::new(
            QueryErrorCode::EvaluationPanic,
            format!("'{}' panicked: {}", subject, payload),
            Some(subject.to_string()),
        )
    }

    /// Returns the error code
    pub fn code(&self) -> QueryErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the table, field or function name if applicable
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    /// Returns whether the query failed name resolution
    pub fn is_rejection(&self) -> bool {
        self.severity() == Severity::Reject
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

impl From<ValueError> for QueryError {
    fn from(err: ValueError) -> Self {
        match err {
            ValueError::TypeMismatch { .. } => QueryError::type_mismatch(err.to_string()),
            ValueError::NonStringPattern(_) | ValueError::InvalidPattern(_) => {
                QueryError::invalid_argument(err.to_string())
            }
        }
    }
}

/// Result type for query operations
pub type QueryResult<T> = Result<T, QueryError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{CompareOp, ValueKind};
    use std::error::Error;

    #[test]
    fn test_error_codes() {
        assert_eq!(QueryErrorCode::UnknownTable.code(), "QUERY_UNKNOWN_TABLE");
        assert_eq!(QueryErrorCode::UnknownField.code(), "QUERY_UNKNOWN_FIELD");
        assert_eq!(QueryErrorCode::UnknownFunction.code(), "QUERY_UNKNOWN_FUNCTION");
        assert_eq!(QueryErrorCode::InvalidArgument.code(), "QUERY_INVALID_ARGUMENT");
        assert_eq!(QueryErrorCode::TypeMismatch.code(), "QUERY_TYPE_MISMATCH");
        assert_eq!(QueryErrorCode::FunctionError.code(), "QUERY_FUNCTION_FAILED");
        assert_eq!(QueryErrorCode::EvaluationPanic.code(), "QUERY_EVALUATION_PANIC");
    }

    #[test]
    fn test_resolution_errors_are_rejections() {
        assert!(QueryError::unknown_table("t").is_rejection());
        assert!(QueryError::unknown_field("t", "f").is_rejection());
        assert!(QueryError::unknown_function("f").is_rejection());
        assert!(QueryError::invalid_argument("x").is_rejection());
        assert!(!QueryError::type_mismatch("x").is_rejection());
        assert!(!QueryError::evaluation_panic("c1", "boom").is_rejection());
    }

    #[test]
    fn test_error_display() {
        let err = QueryError::unknown_table("notexists");
        let display = format!("{}", err);
        assert!(display.contains("REJECT"));
        assert!(display.contains("QUERY_UNKNOWN_TABLE"));
        assert!(display.contains("notexists"));
        assert_eq!(err.subject(), Some("notexists"));
    }

    #[test]
    fn test_function_failure_is_source() {
        let err = QueryError::function_failed("wrong", FunctionFailure::new("hi, i am error"));
        assert_eq!(err.code(), QueryErrorCode::FunctionError);
        assert_eq!(err.source().unwrap().to_string(), "hi, i am error");
        assert!(err.message().contains("wrong"));
    }

    #[test]
    fn test_value_error_conversion() {
        let mismatch: QueryError = ValueError::TypeMismatch {
            left: ValueKind::Boolean,
            op: CompareOp::Gt,
            right: ValueKind::Number,
        }
        .into();
        assert_eq!(mismatch.code(), QueryErrorCode::TypeMismatch);

        let pattern: QueryError = ValueError::NonStringPattern(ValueKind::Number).into();
        assert_eq!(pattern.code(), QueryErrorCode::InvalidArgument);
    }
}
