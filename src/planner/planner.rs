//! Query planner
//!
//! Resolves every name in a query against the registry before any row is
//! read. Resolution order (first failure wins):
//! 1. Table
//! 2. Selected columns, left to right (wildcard expanded in registration order)
//! 3. Predicate, depth-first, left to right
//! 4. Sort field

use crate::error::{QueryError, QueryResult};
use crate::schema::{FieldExtractor, SchemaRegistry};
use crate::value::{CompareOp, LikePattern, Value};

use super::ast::{Column, Predicate, Query, SortSpec};
use super::plan::{BoundColumn, BoundPredicate, BoundSort, QueryPlan};

/// Header used for literal columns
pub const LITERAL_HEADER: &str = "static";

/// Query planner that produces resolved plans
pub struct QueryPlanner<'r, S, R> {
    registry: &'r SchemaRegistry<S, R>,
}

impl<'r, S, R> QueryPlanner<'r, S, R> {
    /// Creates a new planner
    pub fn new(registry: &'r SchemaRegistry<S, R>) -> Self {
        Self { registry }
    }

    /// Plans a query, returning an immutable plan or the first resolution error.
    pub fn plan(&self, query: &Query) -> QueryResult<QueryPlan<'r, S, R>> {
        // 1. Table
        let provider = self
            .registry
            .resolve_table(&query.table)
            .ok_or_else(|| QueryError::unknown_table(&query.table))?;

        // 2. Selected columns
        let (headers, columns) = self.bind_selection(&query.table, &query.columns)?;

        // 3. Predicate
        let predicate = query
            .predicate
            .as_ref()
            .map(|p| self.bind_predicate(&query.table, p))
            .transpose()?;

        // 4. Sort
        let sort = query
            .sort
            .as_ref()
            .map(|s| self.bind_sort(&query.table, s))
            .transpose()?;

        Ok(QueryPlan {
            table: query.table.clone(),
            provider,
            headers,
            columns,
            predicate,
            sort,
            pagination: query.pagination,
        })
    }

    fn bind_selection(
        &self,
        table: &str,
        selection: &[Column],
    ) -> QueryResult<(Vec<String>, Vec<BoundColumn<'r, R>>)> {
        let mut headers = Vec::with_capacity(selection.len());
        let mut columns = Vec::with_capacity(selection.len());

        for column in selection {
            match column {
                Column::Wildcard => {
                    let fields = self
                        .registry
                        .fields_of(table)
                        .ok_or_else(|| QueryError::unknown_table(table))?;
                    for name in fields {
                        headers.push(name.to_string());
                        columns.push(BoundColumn::Field {
                            name: name.to_string(),
                            extractor: self.resolve_field(table, name)?,
                        });
                    }
                }
                Column::Field(name) | Column::Function { name, .. } => {
                    headers.push(name.clone());
                    columns.push(self.bind_column(table, column)?);
                }
                Column::Literal(_) => {
                    headers.push(LITERAL_HEADER.to_string());
                    columns.push(self.bind_column(table, column)?);
                }
            }
        }

        Ok((headers, columns))
    }

    fn bind_column(&self, table: &str, column: &Column) -> QueryResult<BoundColumn<'r, R>> {
        match column {
            Column::Field(name) => Ok(BoundColumn::Field {
                name: name.clone(),
                extractor: self.resolve_field(table, name)?,
            }),
            Column::Literal(value) => Ok(BoundColumn::Literal(value.clone())),
            Column::Function { name, args } => {
                let executor = self
                    .registry
                    .resolve_function(name)
                    .ok_or_else(|| QueryError::unknown_function(name))?;

                let args = args
                    .iter()
                    .map(|arg| {
                        if arg.is_wildcard() {
                            return Err(QueryError::invalid_argument(format!(
                                "'*' is not allowed as an argument of {}()",
                                name
                            )));
                        }
                        self.bind_column(table, arg)
                    })
                    .collect::<QueryResult<Vec<_>>>()?;

                Ok(BoundColumn::Function {
                    name: name.clone(),
                    executor,
                    args,
                })
            }
            Column::Wildcard => Err(QueryError::invalid_argument(
                "'*' is only allowed in the selected-column list",
            )),
        }
    }

    fn bind_predicate(&self, table: &str, predicate: &Predicate) -> QueryResult<BoundPredicate<'r, R>> {
        match predicate {
            Predicate::Field(name) => Ok(BoundPredicate::Field {
                name: name.clone(),
                extractor: self.resolve_field(table, name)?,
            }),
            Predicate::Compare { op, left, right } => {
                let left = self.bind_column(table, left)?;
                let right = self.bind_column(table, right)?;

                let pattern = match (op, &right) {
                    (CompareOp::Like, BoundColumn::Literal(Value::String(p))) => {
                        Some(LikePattern::new(p)?)
                    }
                    (CompareOp::Like, BoundColumn::Literal(other)) => {
                        return Err(QueryError::invalid_argument(format!(
                            "LIKE pattern must be a STRING, got {}",
                            other.kind()
                        )));
                    }
                    _ => None,
                };

                Ok(BoundPredicate::Compare {
                    op: *op,
                    left,
                    right,
                    pattern,
                })
            }
            Predicate::IsNull(name) => {
                self.resolve_field(table, name)?;
                Ok(BoundPredicate::IsNull { name: name.clone() })
            }
            Predicate::Logical { op, children } => {
                let children = children
                    .iter()
                    .map(|child| self.bind_predicate(table, child))
                    .collect::<QueryResult<Vec<_>>>()?;
                Ok(BoundPredicate::Logical { op: *op, children })
            }
            Predicate::Literal(value) => Ok(BoundPredicate::Literal(*value)),
        }
    }

    fn bind_sort(&self, table: &str, sort: &SortSpec) -> QueryResult<BoundSort<'r, R>> {
        Ok(BoundSort {
            field: sort.field.clone(),
            extractor: self.resolve_field(table, &sort.field)?,
            direction: sort.direction,
        })
    }

    fn resolve_field(&self, table: &str, field: &str) -> QueryResult<&'r dyn FieldExtractor<R>> {
        self.registry
            .resolve_field(table, field)
            .ok_or_else(|| QueryError::unknown_field(table, field))
    }
}
