//! Predicate evaluation for query execution
//!
//! Evaluates a resolved WHERE tree against one row. Any error aborts the
//! whole query; there is no "exclude this row on error" path.

use crate::error::QueryResult;
use crate::planner::{BoundPredicate, LogicalOp};
use crate::value::{CompareOp, Value};

use super::boundary::call_where;
use super::projection::Projector;

/// Evaluates predicates against rows
pub(crate) struct PredicateFilter;

impl PredicateFilter {
    /// Returns whether `row` satisfies `predicate`
    pub(crate) fn matches<R>(predicate: &BoundPredicate<'_, R>, row: &R) -> QueryResult<bool> {
        match predicate {
            BoundPredicate::Field { name, extractor } => {
                match call_where(name, || extractor.extract(row).is_truthy()) {
                    (_, Some(err)) => Err(err),
                    (truth, None) => Ok(truth),
                }
            }
            BoundPredicate::Compare {
                op,
                left,
                right,
                pattern,
            } => {
                let left = Projector::evaluate(left, row)?;

                if let Some(pattern) = pattern {
                    return Ok(pattern.matches(&left.render()));
                }

                let right = Projector::evaluate(right, row)?;
                Self::compare(&left, *op, &right)
            }
            // Values are never null; resolution already rejected unknown fields.
            BoundPredicate::IsNull { .. } => Ok(false),
            BoundPredicate::Logical { op, children } => Self::logical(*op, children, row),
            BoundPredicate::Literal(value) => Ok(*value),
        }
    }

    fn compare(left: &Value, op: CompareOp, right: &Value) -> QueryResult<bool> {
        Ok(left.compare(op, right)?)
    }

    /// Short-circuits left to right
    fn logical<R>(op: LogicalOp, children: &[BoundPredicate<'_, R>], row: &R) -> QueryResult<bool> {
        match op {
            LogicalOp::And => {
                for child in children {
                    if !Self::matches(child, row)? {
                        return Ok(false);
                    }
                }
                Ok(true)
            }
            LogicalOp::Or => {
                for child in children {
                    if Self::matches(child, row)? {
                        return Ok(true);
                    }
                }
                Ok(false)
            }
        }
    }
}
