//! ObservationScope for automatic begin/complete logging
//!
//! - Logs `{name}_BEGIN` on creation
//! - Logs `{name}_COMPLETE` or `{name}_FAILED` when finished
//! - Logs `{name}_INCOMPLETE` if dropped without finishing

use super::logger::LogLine;

/// A scope that logs the lifecycle of one operation
///
/// ```ignore
/// let scope = ObservationScope::new("QUERY_EXECUTE", &[("table", "users")]);
/// // ... do work ...
/// scope.complete(&[("returned", "3".to_string())]);
/// ```
pub struct ObservationScope {
    name: &'static str,
    fields: Vec<(String, String)>,
    finished: bool,
}

impl ObservationScope {
    /// Creates a scope and logs `{name}_BEGIN` with `fields`.
    ///
    /// `fields` are repeated on the closing event.
    pub fn new(name: &'static str, fields: &[(&str, &str)]) -> Self {
        let fields: Vec<(String, String)> = fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        LogLine::info(format!("{}_BEGIN", name))
            .fields(&fields)
            .emit();

        Self {
            name,
            fields,
            finished: false,
        }
    }

    /// Logs `{name}_COMPLETE` with the scope fields plus `extra`
    pub fn complete(mut self, extra: &[(&str, String)]) {
        self.finished = true;
        let mut line = LogLine::info(format!("{}_COMPLETE", self.name)).fields(&self.fields);
        for (key, value) in extra {
            line = line.field(*key, value);
        }
        line.emit();
    }

    /// Logs `{name}_FAILED` at ERROR level
    pub fn fail(mut self, reason: &str) {
        self.finished = true;
        LogLine::error(format!("{}_FAILED", self.name))
            .fields(&self.fields)
            .field("reason", reason)
            .emit();
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl Drop for ObservationScope {
    fn drop(&mut self) {
        if !self.finished {
            LogLine::warn(format!("{}_INCOMPLETE", self.name))
                .fields(&self.fields)
                .field("reason", "scope dropped without completion")
                .emit();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_complete() {
        let scope = ObservationScope::new("TEST_OP", &[("table", "test")]);
        assert!(!scope.is_finished());
        scope.complete(&[("returned", "1".to_string())]);
    }

    #[test]
    fn test_scope_fail() {
        let scope = ObservationScope::new("TEST_OP", &[]);
        scope.fail("QUERY_UNKNOWN_TABLE");
    }

    #[test]
    fn test_scope_drop_without_completion() {
        let scope = ObservationScope::new("TEST_OP", &[]);
        drop(scope);
    }
}
