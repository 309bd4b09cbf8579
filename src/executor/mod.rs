//! Query executor subsystem for tableql
//!
//! The executor consumes resolved plans and produces deterministic,
//! all-or-nothing results.
//!
//! # Execution Flow (strict order)
//!
//! 1. Resolve every name the query mentions
//! 2. Expand the source into rows
//! 3. Filter rows strictly according to the predicate
//! 4. Apply sort (if specified)
//! 5. Apply offset and limit
//! 6. Project the selected columns
//!
//! # Invariants
//!
//! - Same registry, source and query produce the same result
//! - A failure anywhere discards all partial output
//! - Panics in host callbacks never escape `execute`

pub mod boundary;
mod executor;
mod filters;
mod projection;
mod result;
mod sorter;

pub use boundary::{call_where, contain};
pub use executor::{execute, QueryExecutor};
pub use result::ExecutionResult;
