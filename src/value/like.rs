//! SQL LIKE patterns
//!
//! `%` matches zero or more characters, `_` matches exactly one. Every
//! other character matches itself. Matching is case-sensitive and anchored
//! to the whole input.

use regex::Regex;

use super::errors::{ValueError, ValueResult};

/// A compiled LIKE pattern
#[derive(Debug, Clone)]
pub struct LikePattern {
    source: String,
    regex: Regex,
}

impl LikePattern {
    /// Compiles a LIKE pattern
    pub fn new(pattern: &str) -> ValueResult<Self> {
        let mut expr = String::with_capacity(pattern.len() + 8);
        expr.push_str("(?s)^");

        let mut literal = String::new();
        for c in pattern.chars() {
            match c {
                '%' | '_' => {
                    expr.push_str(&regex::escape(&literal));
                    literal.clear();
                    expr.push_str(if c == '%' { ".*" } else { "." });
                }
                c => literal.push(c),
            }
        }
        expr.push_str(&regex::escape(&literal));
        expr.push('$');

        let regex = Regex::new(&expr).map_err(|e| ValueError::InvalidPattern(e.to_string()))?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// Returns true if `text` matches the whole pattern
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The pattern as written
    pub fn as_str(&self) -> &str {
        &self.source
    }
}
