use flagpole_primitives::ParseError;
use thiserror::Error;

/// Errors from the text-facing registry operations.
///
/// The core lookup and update operations never fail; they report absence
/// through `Option`/`bool` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlagError {
	/// No flag is registered under this name.
	#[error("unknown flag: {0}")]
	UnknownFlag(String),
	/// The text could not be read as the flag's current kind.
	#[error("invalid value for flag '{flag}': {source}")]
	Parse {
		flag: String,
		#[source]
		source: ParseError,
	},
}
