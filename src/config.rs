//! Executor configuration
//!
//! Configuration never changes query results; it only controls what the
//! executor reports about itself.

/// Configuration for a [`QueryExecutor`](crate::executor::QueryExecutor).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutorConfig {
    /// Emit `QUERY_EXECUTE_*` log lines for every query.
    pub log_queries: bool,
}

impl ExecutorConfig {
    /// Create config with query logging enabled.
    pub fn enabled() -> Self {
        Self { log_queries: true }
    }

    /// Create config with query logging disabled.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn with_log_queries(mut self, log_queries: bool) -> Self {
        self.log_queries = log_queries;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default_quiet() {
        let config = ExecutorConfig::default();
        assert!(!config.log_queries);
        assert_eq!(config, ExecutorConfig::disabled());
    }

    #[test]
    fn test_config_enabled() {
        assert!(ExecutorConfig::enabled().log_queries);
        assert!(!ExecutorConfig::enabled().with_log_queries(false).log_queries);
    }
}
