//! Query executor for tableql
//!
//! Execution flow (strict order):
//! 1. Plan: resolve table, columns, predicate and sort field
//! 2. Expand the source into rows via the table provider
//! 3. Filter rows with the predicate
//! 4. Sort surviving rows (stable)
//! 5. Apply the pagination window
//! 6. Project each remaining row into output values
//!
//! Any error at any step aborts the query; no partial result is returned.

use crate::config::ExecutorConfig;
use crate::error::QueryResult;
use crate::observability::{ObservationScope, QueryMetrics};
use crate::planner::{Query, QueryPlan, QueryPlanner};
use crate::schema::SchemaRegistry;

use super::boundary::contain;
use super::filters::PredicateFilter;
use super::projection::Projector;
use super::result::ExecutionResult;
use super::sorter::ResultSorter;

/// Executes queries against a borrowed registry.
///
/// Holds no state between calls; each `execute` is a function of the
/// registry, the source and the query.
pub struct QueryExecutor<'a, S, R> {
    registry: &'a SchemaRegistry<S, R>,
    config: ExecutorConfig,
    metrics: Option<&'a QueryMetrics>,
}

impl<'a, S, R> QueryExecutor<'a, S, R> {
    /// Creates a new executor
    pub fn new(registry: &'a SchemaRegistry<S, R>) -> Self {
        Self {
            registry,
            config: ExecutorConfig::default(),
            metrics: None,
        }
    }

    pub fn with_config(mut self, config: ExecutorConfig) -> Self {
        self.config = config;
        self
    }

    /// Reports every query outcome to `metrics`
    pub fn with_metrics(mut self, metrics: &'a QueryMetrics) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Resolves a query without running it
    pub fn plan(&self, query: &Query) -> QueryResult<QueryPlan<'a, S, R>> {
        QueryPlanner::new(self.registry).plan(query)
    }

    /// Plans and runs `query` against `source`.
    pub fn execute(&self, source: &S, query: &Query) -> QueryResult<ExecutionResult> {
        let scope = self.begin(&query.table);
        let outcome = self.plan(query).and_then(|plan| self.run(source, &plan));
        self.finish(scope, &outcome);
        outcome
    }

    /// Runs an already resolved plan against `source`.
    pub fn execute_plan(&self, source: &S, plan: &QueryPlan<'_, S, R>) -> QueryResult<ExecutionResult> {
        let scope = self.begin(plan.table());
        let outcome = self.run(source, plan);
        self.finish(scope, &outcome);
        outcome
    }

    fn run(&self, source: &S, plan: &QueryPlan<'_, S, R>) -> QueryResult<ExecutionResult> {
        // Step 2: Expand source
        let rows = contain(&plan.table, || plan.provider.provide(source))?;
        let scanned_count = rows.len();

        // Step 3: Filter
        let mut matched = match &plan.predicate {
            Some(predicate) => {
                let mut kept = Vec::with_capacity(rows.len());
                for row in rows {
                    if PredicateFilter::matches(predicate, &row)? {
                        kept.push(row);
                    }
                }
                kept
            }
            None => rows,
        };
        let matched_count = matched.len();

        // Step 4: Sort
        if let Some(sort) = &plan.sort {
            matched = ResultSorter::sort(matched, sort)?;
        }

        // Step 5: Paginate
        let page: Vec<R> = match plan.pagination {
            Some(pagination) => {
                let window = pagination.window(matched.len());
                matched
                    .into_iter()
                    .skip(window.start)
                    .take(window.len())
                    .collect()
            }
            None => matched,
        };

        // Step 6: Project
        let rows = page
            .iter()
            .map(|row| Projector::project_row(&plan.columns, row))
            .collect::<QueryResult<Vec<_>>>()?;

        Ok(ExecutionResult {
            headers: plan.headers.clone(),
            returned_count: rows.len(),
            rows,
            scanned_count,
            matched_count,
        })
    }

    fn begin(&self, table: &str) -> Option<ObservationScope> {
        self.config
            .log_queries
            .then(|| ObservationScope::new("QUERY_EXECUTE", &[("table", table)]))
    }

    fn finish(&self, scope: Option<ObservationScope>, outcome: &QueryResult<ExecutionResult>) {
        if let Some(metrics) = self.metrics {
            match outcome {
                Ok(result) => metrics.record_success(
                    result.scanned_count,
                    result.matched_count,
                    result.returned_count,
                ),
                Err(err) => metrics.record_failure(err.code()),
            }
        }

        if let Some(scope) = scope {
            match outcome {
                Ok(result) => scope.complete(&[
                    ("scanned", result.scanned_count.to_string()),
                    ("matched", result.matched_count.to_string()),
                    ("returned", result.returned_count.to_string()),
                ]),
                Err(err) => scope.fail(&err.to_string()),
            }
        }
    }
}

/// Plans and runs `query` against `source` with a default executor.
pub fn execute<S, R>(
    registry: &SchemaRegistry<S, R>,
    source: &S,
    query: &Query,
) -> QueryResult<ExecutionResult> {
    QueryExecutor::new(registry).execute(source, query)
}
