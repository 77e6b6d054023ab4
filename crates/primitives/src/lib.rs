//! Scalar value types held by runtime flags.

/// Text parsing into typed values.
pub mod parse;
/// The four-kind tagged value and typed extraction.
pub mod value;

pub use parse::{ParseError, parse_value_for_kind};
pub use value::{FromValue, Kind, Value};
