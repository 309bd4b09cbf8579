//! Resolved query plan
//!
//! Every name in a plan has already been looked up in the registry, so
//! evaluating a plan never fails on resolution.

use crate::schema::{FieldExtractor, FunctionExecutor, TableProvider};
use crate::value::{CompareOp, LikePattern, Value};

use super::ast::{LogicalOp, Pagination, SortDirection};

/// Column expression with its capabilities resolved
pub(crate) enum BoundColumn<'r, R> {
    Field {
        name: String,
        extractor: &'r dyn FieldExtractor<R>,
    },
    Function {
        name: String,
        executor: &'r dyn FunctionExecutor,
        args: Vec<BoundColumn<'r, R>>,
    },
    Literal(Value),
}

/// WHERE tree with its capabilities resolved
pub(crate) enum BoundPredicate<'r, R> {
    Field {
        name: String,
        extractor: &'r dyn FieldExtractor<R>,
    },
    Compare {
        op: CompareOp,
        left: BoundColumn<'r, R>,
        right: BoundColumn<'r, R>,
        /// Precompiled when the LIKE pattern is a string literal
        pattern: Option<LikePattern>,
    },
    IsNull {
        name: String,
    },
    Logical {
        op: LogicalOp,
        children: Vec<BoundPredicate<'r, R>>,
    },
    Literal(bool),
}

/// ORDER BY with its extractor resolved
pub(crate) struct BoundSort<'r, R> {
    pub(crate) field: String,
    pub(crate) extractor: &'r dyn FieldExtractor<R>,
    pub(crate) direction: SortDirection,
}

/// Immutable, fully resolved query.
///
/// Borrows its capabilities from the registry it was planned against, so
/// the registry cannot change while the plan is alive. A plan can be
/// executed against any number of sources.
pub struct QueryPlan<'r, S, R> {
    pub(crate) table: String,
    pub(crate) provider: &'r dyn TableProvider<S, R>,
    pub(crate) headers: Vec<String>,
    pub(crate) columns: Vec<BoundColumn<'r, R>>,
    pub(crate) predicate: Option<BoundPredicate<'r, R>>,
    pub(crate) sort: Option<BoundSort<'r, R>>,
    pub(crate) pagination: Option<Pagination>,
}

impl<S, R> QueryPlan<'_, S, R> {
    /// Target table
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Output column headers after wildcard expansion
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn has_predicate(&self) -> bool {
        self.predicate.is_some()
    }

    /// Sort field and direction, if any
    pub fn sort(&self) -> Option<(&str, SortDirection)> {
        self.sort.as_ref().map(|s| (s.field.as_str(), s.direction))
    }

    pub fn pagination(&self) -> Option<Pagination> {
        self.pagination
    }
}
