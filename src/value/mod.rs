//! Value model for tableql
//!
//! Every operand, field, function argument, function result and output
//! cell is a [`Value`]: a closed union over Number, String and Boolean.
//!
//! # Comparison rules
//!
//! - Same-tag comparison uses the tag's native ordering
//! - Cross-tag comparison fails with [`ValueError::TypeMismatch`]
//! - LIKE renders the left operand as text and requires a String pattern
//!
//! # Truth
//!
//! Boolean is its own truth, Number is true when non-zero, String is true
//! when non-empty.

mod compare;
mod errors;
mod like;
mod value;

pub use compare::CompareOp;
pub use errors::{ValueError, ValueResult};
pub use like::LikePattern;
pub use value::{Value, ValueKind};
