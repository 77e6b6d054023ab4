//! Parsing of flag values from text.
//!
//! Used by collaborators that seed flags from command lines or environment
//! variables. The target kind is always known up front; text is never
//! sniffed to guess a kind.

use thiserror::Error;

use crate::{Kind, Value};

/// Failure to interpret text as a value of a given kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
	#[error("invalid boolean: '{0}' (expected true/false, yes/no, on/off, 1/0)")]
	Bool(String),
	#[error("invalid integer: '{0}'")]
	Int(String),
	#[error("invalid float: '{0}'")]
	Float(String),
}

impl ParseError {
	/// Returns the kind that was being parsed.
	pub fn kind(&self) -> Kind {
		match self {
			ParseError::Bool(_) => Kind::Bool,
			ParseError::Int(_) => Kind::Int,
			ParseError::Float(_) => Kind::Float,
		}
	}
}

/// Parse a string into a [`Value`] of the given kind.
pub fn parse_value_for_kind(text: &str, kind: Kind) -> Result<Value, ParseError> {
	match kind {
		Kind::Bool => parse_bool(text).map(Value::Bool),
		Kind::Int => parse_int(text).map(Value::Int),
		Kind::Float => parse_float(text).map(Value::Float),
		Kind::Text => Ok(Value::Text(text.to_string())),
	}
}

/// Parse a boolean value from common string representations.
pub fn parse_bool(text: &str) -> Result<bool, ParseError> {
	match text.trim().to_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Ok(true),
		"false" | "0" | "no" | "off" => Ok(false),
		_ => Err(ParseError::Bool(text.to_string())),
	}
}

/// Parse an integer value.
pub fn parse_int(text: &str) -> Result<i64, ParseError> {
	text.trim()
		.parse::<i64>()
		.map_err(|_| ParseError::Int(text.to_string()))
}

/// Parse a floating-point value.
pub fn parse_float(text: &str) -> Result<f64, ParseError> {
	text.trim()
		.parse::<f64>()
		.map_err(|_| ParseError::Float(text.to_string()))
}
