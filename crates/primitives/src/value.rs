use core::fmt;

/// The value stored in a flag.
///
/// A value is one scalar of a closed set of kinds. Values are never edited in
/// place; updating a flag swaps in a freshly constructed value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(tag = "kind", content = "value", rename_all = "lowercase")
)]
pub enum Value {
	/// Boolean value (true/false).
	Bool(bool),
	/// Signed 64-bit integer value.
	Int(i64),
	/// Double-precision floating-point value.
	Float(f64),
	/// Text value.
	Text(String),
}

impl Value {
	/// Returns the discriminant of this value.
	pub fn kind(&self) -> Kind {
		match self {
			Value::Bool(_) => Kind::Bool,
			Value::Int(_) => Kind::Int,
			Value::Float(_) => Kind::Float,
			Value::Text(_) => Kind::Text,
		}
	}

	/// Returns true if this value is of the given kind.
	pub fn matches_kind(&self, kind: Kind) -> bool {
		self.kind() == kind
	}

	/// Returns the kind name of this value.
	pub fn type_name(&self) -> &'static str {
		self.kind().name()
	}

	/// Extracts the payload as `T`, returning `None` if the kind doesn't match.
	///
	/// ```
	/// use flagpole_primitives::Value;
	///
	/// let v = Value::from(30.5);
	/// assert_eq!(v.extract::<f64>(), Some(30.5));
	/// assert_eq!(v.extract::<i64>(), None);
	/// ```
	pub fn extract<T: FromValue>(&self) -> Option<T> {
		T::from_value(self)
	}

	/// Returns the boolean value if this is a `Bool` variant.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Value::Bool(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the integer value if this is an `Int` variant.
	pub fn as_int(&self) -> Option<i64> {
		match self {
			Value::Int(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the float value if this is a `Float` variant.
	pub fn as_float(&self) -> Option<f64> {
		match self {
			Value::Float(v) => Some(*v),
			_ => None,
		}
	}

	/// Returns the text value if this is a `Text` variant.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::Text(v) => Some(v),
			_ => None,
		}
	}

	/// Returns the boolean payload, or `false` for any other kind.
	pub fn to_bool(&self) -> bool {
		self.as_bool().unwrap_or_default()
	}

	/// Returns the integer payload, or `0` for any other kind.
	pub fn to_int(&self) -> i64 {
		self.as_int().unwrap_or_default()
	}

	/// Returns the float payload, or `0.0` for any other kind.
	pub fn to_float(&self) -> f64 {
		self.as_float().unwrap_or_default()
	}

	/// Returns the text payload, or an empty string for any other kind.
	pub fn to_text(&self) -> String {
		self.as_str().map(str::to_string).unwrap_or_default()
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Bool(v) => write!(f, "{v}"),
			Value::Int(v) => write!(f, "{v}"),
			Value::Float(v) => write!(f, "{v}"),
			Value::Text(v) => f.write_str(v),
		}
	}
}

impl From<bool> for Value {
	fn from(v: bool) -> Self {
		Value::Bool(v)
	}
}

impl From<i64> for Value {
	fn from(v: i64) -> Self {
		Value::Int(v)
	}
}

impl From<i32> for Value {
	fn from(v: i32) -> Self {
		Value::Int(v.into())
	}
}

impl From<u32> for Value {
	fn from(v: u32) -> Self {
		Value::Int(v.into())
	}
}

impl From<f64> for Value {
	fn from(v: f64) -> Self {
		Value::Float(v)
	}
}

impl From<f32> for Value {
	fn from(v: f32) -> Self {
		Value::Float(v.into())
	}
}

impl From<String> for Value {
	fn from(v: String) -> Self {
		Value::Text(v)
	}
}

impl From<&str> for Value {
	fn from(v: &str) -> Self {
		Value::Text(v.to_string())
	}
}

/// The kind of a flag's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
	feature = "serde",
	derive(serde::Serialize, serde::Deserialize),
	serde(rename_all = "lowercase")
)]
pub enum Kind {
	/// Boolean kind.
	Bool,
	/// Integer kind.
	Int,
	/// Floating-point kind.
	Float,
	/// Text kind.
	Text,
}

impl Kind {
	/// Every kind, in declaration order.
	pub const ALL: [Kind; 4] = [Kind::Bool, Kind::Int, Kind::Float, Kind::Text];

	/// Returns the lowercase name of this kind.
	pub const fn name(self) -> &'static str {
		match self {
			Kind::Bool => "bool",
			Kind::Int => "int",
			Kind::Float => "float",
			Kind::Text => "text",
		}
	}
}

impl fmt::Display for Kind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

// Seal the FromValue trait to prevent external implementations.
mod sealed {
	pub trait Sealed {}
	impl Sealed for bool {}
	impl Sealed for i64 {}
	impl Sealed for f64 {}
	impl Sealed for String {}
}

/// Trait for types that can be extracted from a [`Value`].
pub trait FromValue: sealed::Sealed + Sized {
	/// The kind this Rust type corresponds to.
	const KIND: Kind;

	/// Extracts the value, returning `None` if the kind doesn't match.
	fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for bool {
	const KIND: Kind = Kind::Bool;

	fn from_value(value: &Value) -> Option<Self> {
		value.as_bool()
	}
}

impl FromValue for i64 {
	const KIND: Kind = Kind::Int;

	fn from_value(value: &Value) -> Option<Self> {
		value.as_int()
	}
}

impl FromValue for f64 {
	const KIND: Kind = Kind::Float;

	fn from_value(value: &Value) -> Option<Self> {
		value.as_float()
	}
}

impl FromValue for String {
	const KIND: Kind = Kind::Text;

	fn from_value(value: &Value) -> Option<Self> {
		value.as_str().map(|s| s.to_string())
	}
}

#[cfg(test)]
mod tests;
