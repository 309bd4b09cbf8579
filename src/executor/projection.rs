//! Projection of selected columns
//!
//! Evaluates one resolved column expression against one row.

use crate::error::{QueryError, QueryResult};
use crate::planner::BoundColumn;
use crate::value::Value;

use super::boundary::contain;

/// Evaluates column expressions against rows
pub(crate) struct Projector;

impl Projector {
    /// Evaluates every selected column for one row, in order
    pub(crate) fn project_row<R>(columns: &[BoundColumn<'_, R>], row: &R) -> QueryResult<Vec<Value>> {
        columns.iter().map(|c| Self::evaluate(c, row)).collect()
    }

    /// Evaluates a single column expression.
    ///
    /// Function arguments are evaluated left to right before the call.
    pub(crate) fn evaluate<R>(column: &BoundColumn<'_, R>, row: &R) -> QueryResult<Value> {
        match column {
            BoundColumn::Field { name, extractor } => contain(name, || extractor.extract(row)),
            BoundColumn::Literal(value) => Ok(value.clone()),
            BoundColumn::Function {
                name,
                executor,
                args,
            } => {
                let values = args
                    .iter()
                    .map(|arg| Self::evaluate(arg, row))
                    .collect::<QueryResult<Vec<_>>>()?;

                contain(name, || executor.execute(&values))?
                    .map_err(|failure| QueryError::function_failed(name, failure))
            }
        }
    }
}
