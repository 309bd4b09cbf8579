//! Comparison operators over values

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::errors::{ValueError, ValueResult};
use super::like::LikePattern;
use super::value::Value;

/// Binary comparison operators usable in a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompareOp {
    Eq,
    Gt,
    Lt,
    Gte,
    Lte,
    Like,
}

impl CompareOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::Gt => ">",
            CompareOp::Lt => "<",
            CompareOp::Gte => ">=",
            CompareOp::Lte => "<=",
            CompareOp::Like => "LIKE",
        }
    }

    /// Maps a same-tag ordering to the operator's outcome.
    ///
    /// `None` (a NaN operand) is false for every operator.
    fn accepts(&self, ordering: Option<Ordering>) -> bool {
        match (self, ordering) {
            (_, None) => false,
            (CompareOp::Eq, Some(o)) => o == Ordering::Equal,
            (CompareOp::Gt, Some(o)) => o == Ordering::Greater,
            (CompareOp::Lt, Some(o)) => o == Ordering::Less,
            (CompareOp::Gte, Some(o)) => o != Ordering::Less,
            (CompareOp::Lte, Some(o)) => o != Ordering::Greater,
            (CompareOp::Like, Some(_)) => false,
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    /// Applies `op` with `self` on the left and `other` on the right.
    ///
    /// For [`CompareOp::Like`], `other` is the pattern.
    pub fn compare(&self, op: CompareOp, other: &Value) -> ValueResult<bool> {
        if op == CompareOp::Like {
            let pattern = match other {
                Value::String(p) => LikePattern::new(p)?,
                _ => return Err(ValueError::NonStringPattern(other.kind())),
            };
            return Ok(pattern.matches(&self.render()));
        }

        let ordering = self.native_cmp(other, op)?;
        Ok(op.accepts(ordering))
    }

    /// Ordering used by ORDER BY.
    ///
    /// Numbers use `total_cmp` so NaN has a fixed position and the sort
    /// stays deterministic.
    pub fn sort_cmp(&self, other: &Value) -> ValueResult<Ordering> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Ok(a.total_cmp(b)),
            (Value::String(a), Value::String(b)) => Ok(a.cmp(b)),
            (Value::Boolean(a), Value::Boolean(b)) => Ok(a.cmp(b)),
            _ => Err(ValueError::TypeMismatch {
                left: self.kind(),
                op: CompareOp::Lt,
                right: other.kind(),
            }),
        }
    }

    fn native_cmp(&self, other: &Value, op: CompareOp) -> ValueResult<Option<Ordering>> {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => Ok(a.partial_cmp(b)),
            (Value::String(a), Value::String(b)) => Ok(Some(a.cmp(b))),
            (Value::Boolean(a), Value::Boolean(b)) => Ok(Some(a.cmp(b))),
            _ => Err(ValueError::TypeMismatch {
                left: self.kind(),
                op,
                right: other.kind(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::ValueKind;

    #[test]
    fn test_numeric_operators() {
        let two = Value::number(2.0);
        let three = Value::number(3.0);

        assert!(two.compare(CompareOp::Lt, &three).unwrap());
        assert!(two.compare(CompareOp::Lte, &three).unwrap());
        assert!(!two.compare(CompareOp::Gt, &three).unwrap());
        assert!(!two.compare(CompareOp::Gte, &three).unwrap());
        assert!(two.compare(CompareOp::Eq, &Value::number(2.0)).unwrap());
        assert!(two.compare(CompareOp::Gte, &Value::number(2.0)).unwrap());
    }

    #[test]
    fn test_string_and_boolean_native_order() {
        let a = Value::string("apple");
        let b = Value::string("banana");
        assert!(a.compare(CompareOp::Lt, &b).unwrap());

        let f = Value::boolean(false);
        let t = Value::boolean(true);
        assert!(f.compare(CompareOp::Lt, &t).unwrap());
        assert!(t.compare(CompareOp::Eq, &Value::boolean(true)).unwrap());
    }

    #[test]
    fn test_cross_tag_is_type_mismatch() {
        let err = Value::boolean(true)
            .compare(CompareOp::Gt, &Value::number(0.0))
            .unwrap_err();
        assert_eq!(
            err,
            ValueError::TypeMismatch {
                left: ValueKind::Boolean,
                op: CompareOp::Gt,
                right: ValueKind::Number,
            }
        );

        assert!(Value::string("1")
            .compare(CompareOp::Eq, &Value::number(1.0))
            .is_err());
    }

    #[test]
    fn test_nan_compares_false() {
        let nan = Value::number(f64::NAN);
        for op in [CompareOp::Eq, CompareOp::Gt, CompareOp::Lt, CompareOp::Gte, CompareOp::Lte] {
            assert!(!nan.compare(op, &Value::number(1.0)).unwrap());
        }
    }

    #[test]
    fn test_like_coerces_left_operand() {
        let pattern = Value::string("1_");
        assert!(Value::number(12.0).compare(CompareOp::Like, &pattern).unwrap());
        assert!(Value::boolean(true)
            .compare(CompareOp::Like, &Value::string("t%"))
            .unwrap());
    }

    #[test]
    fn test_like_requires_string_pattern() {
        let err = Value::string("abc")
            .compare(CompareOp::Like, &Value::number(1.0))
            .unwrap_err();
        assert_eq!(err, ValueError::NonStringPattern(ValueKind::Number));
    }

    #[test]
    fn test_sort_cmp() {
        assert_eq!(
            Value::number(1.0).sort_cmp(&Value::number(2.0)).unwrap(),
            Ordering::Less
        );
        assert_eq!(
            Value::string("b").sort_cmp(&Value::string("a")).unwrap(),
            Ordering::Greater
        );
        assert!(Value::number(1.0).sort_cmp(&Value::string("1")).is_err());
        // NaN has a fixed position instead of comparing equal to everything
        assert_eq!(
            Value::number(f64::NAN).sort_cmp(&Value::number(1.0)).unwrap(),
            Ordering::Greater
        );
    }
}
