//! Query Planner subsystem for tableql
//!
//! Turns a parsed [`Query`] into a [`QueryPlan`] whose table, fields and
//! functions are resolved against a [`SchemaRegistry`].
//!
//! # Design Principles
//!
//! - Resolve once: every name is looked up before the first row is read
//! - Fail whole: any unknown name rejects the query, independent of data
//! - Deterministic: same registry + same query → same plan
//!
//! [`SchemaRegistry`]: crate::schema::SchemaRegistry

mod ast;
mod plan;
mod planner;

pub use ast::{Column, LogicalOp, Pagination, Predicate, Query, SortDirection, SortSpec};
pub use plan::QueryPlan;
pub(crate) use plan::{BoundColumn, BoundPredicate, BoundSort};
pub use planner::{QueryPlanner, LITERAL_HEADER};
