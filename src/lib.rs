//! tableql - An embeddable, deterministic query engine over host data
//!
//! A host registers tables, fields and functions in a [`SchemaRegistry`],
//! then runs structured [`Query`] values against its own data source.
//!
//! ```ignore
//! let mut registry = SchemaRegistry::new();
//! registry.register_table("users", |db: &Db| db.users.clone())?;
//! registry.register_field("users", "age", |u: &User| Value::from(u.age))?;
//!
//! let query = Query::select_all("users").with_predicate(Predicate::gt("age", 30));
//! let result = execute(&registry, &db, &query)?;
//! ```

pub mod config;
pub mod error;
pub mod executor;
pub mod observability;
pub mod planner;
pub mod schema;
pub mod value;

pub use config::ExecutorConfig;
pub use error::{QueryError, QueryErrorCode, QueryResult, Severity};
pub use executor::{execute, ExecutionResult, QueryExecutor};
pub use observability::{QueryMetrics, QueryMetricsSnapshot};
pub use planner::{Column, LogicalOp, Pagination, Predicate, Query, QueryPlan, SortDirection, SortSpec};
pub use schema::{FieldExtractor, FunctionExecutor, FunctionFailure, SchemaRegistry, TableProvider};
pub use value::{CompareOp, Value, ValueKind};
