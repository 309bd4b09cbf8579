//! Panic containment for host-supplied closures
//!
//! Providers, extractors and function executors are host code. A panic in
//! one of them must fail the query, not unwind through the executor into
//! the caller. Only those calls go through this boundary; errors raised by
//! tableql itself travel as ordinary `Result`s.
//!
//! Containment relies on unwinding. A host built with `panic = "abort"`
//! cannot be protected.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

use crate::error::{QueryError, QueryResult};

/// Runs `f`, converting a panic into [`QueryErrorCode::EvaluationPanic`].
///
/// `subject` names the field, function or table being evaluated.
///
/// [`QueryErrorCode::EvaluationPanic`]: crate::error::QueryErrorCode::EvaluationPanic
pub fn contain<T, F>(subject: &str, f: F) -> QueryResult<T>
where
    F: FnOnce() -> T,
{
    catch_unwind(AssertUnwindSafe(f))
        .map_err(|payload| QueryError::evaluation_panic(subject, &panic_message(payload.as_ref())))
}

/// Predicate-shaped boundary.
///
/// Returns `(false, Some(error))` when `f` panics, `(result, None)` otherwise.
pub fn call_where<F>(subject: &str, f: F) -> (bool, Option<QueryError>)
where
    F: FnOnce() -> bool,
{
    match contain(subject, f) {
        Ok(truth) => (truth, None),
        Err(err) => (false, Some(err)),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QueryErrorCode;

    #[test]
    fn test_call_where_contains_panic() {
        let (truth, err) = call_where("g", || panic!("err"));
        assert!(!truth);

        let err = err.expect("panic should surface as an error");
        assert_eq!(err.code(), QueryErrorCode::EvaluationPanic);
        assert!(err.message().contains("err"));
        assert_eq!(err.subject(), Some("g"));
    }

    #[test]
    fn test_call_where_passes_through() {
        assert!(matches!(call_where("g", || true), (true, None)));
        assert!(matches!(call_where("g", || false), (false, None)));
    }

    #[test]
    fn test_contain_formatted_payload() {
        let err = contain("c1", || -> u32 { panic!("row {} is not mine", 7) }).unwrap_err();
        assert!(err.message().contains("row 7 is not mine"));
    }

    #[test]
    fn test_contain_opaque_payload() {
        let err = contain("c1", || -> u32 { std::panic::panic_any(42_u8) }).unwrap_err();
        assert!(err.message().contains("non-string panic payload"));
    }

    #[test]
    fn test_contain_returns_value() {
        assert_eq!(contain("c1", || 5).unwrap(), 5);
    }
}
