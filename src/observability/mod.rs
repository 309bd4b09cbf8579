//! Observability subsystem for tableql
//!
//! - Structured logging (JSON, one line per event)
//! - Lifecycle scopes for executed queries
//! - Monotonic query counters
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No effect on query results
//! 3. No async or background threads
//! 4. Deterministic output

mod logger;
mod metrics;
mod scope;

pub use logger::{LogLine, Severity};
pub use metrics::{QueryMetrics, QueryMetricsSnapshot};
pub use scope::ObservationScope;
