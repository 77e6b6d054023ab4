use core::fmt;
use std::sync::Arc;

use flagpole_primitives::{FromValue, Kind, Value};
use parking_lot::RwLock;

/// Shared handle to a registered flag.
pub type FlagRef = Arc<Flag>;

/// A named, described, individually synchronized value cell.
///
/// Name and description are fixed at construction and readable without
/// touching the value lock. The value sits behind its own reader/writer lock
/// so reads of one flag never contend with writes to another.
pub struct Flag {
	name: Box<str>,
	description: Box<str>,
	value: RwLock<Value>,
}

impl Flag {
	/// Creates a flag holding `default` as its initial value.
	pub fn new(name: impl Into<Box<str>>, default: impl Into<Value>, description: impl Into<Box<str>>) -> Self {
		Self {
			name: name.into(),
			description: description.into(),
			value: RwLock::new(default.into()),
		}
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn description(&self) -> &str {
		&self.description
	}

	/// Returns a snapshot of the current value.
	pub fn value(&self) -> Value {
		self.value.read().clone()
	}

	/// Returns the kind of the current value.
	pub fn kind(&self) -> Kind {
		self.value.read().kind()
	}

	/// Returns the current payload as `T`, or `None` if the kind differs.
	///
	/// Unlike `value().extract()`, a mismatching payload is never cloned.
	pub fn get<T: FromValue>(&self) -> Option<T> {
		T::from_value(&self.value.read())
	}

	/// Replaces the current value.
	///
	/// The new value may be of a different kind than the old one. Readers
	/// asking for the old kind see `None` from then on.
	pub fn update(&self, new_value: impl Into<Value>) {
		let new_value = new_value.into();
		let new_kind = new_value.kind();
		let old = {
			let mut guard = self.value.write();
			std::mem::replace(&mut *guard, new_value)
		};
		if old.kind() != new_kind {
			tracing::debug!(flag = %self.name, from = %old.kind(), to = %new_kind, "flag kind changed on update");
		}
	}
}

impl fmt::Debug for Flag {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Flag")
			.field("name", &self.name)
			.field("description", &self.description)
			.field("value", &*self.value.read())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn construction_keeps_metadata() {
		let flag = Flag::new("dark_mode", true, "Enable dark mode UI");
		assert_eq!(flag.name(), "dark_mode");
		assert_eq!(flag.description(), "Enable dark mode UI");
		assert_eq!(flag.value(), Value::Bool(true));
		assert_eq!(flag.kind(), Kind::Bool);
	}

	#[test]
	fn empty_description() {
		let flag = Flag::new("retries", 3, "");
		assert_eq!(flag.description(), "");
	}

	#[test]
	fn update_replaces_value() {
		let flag = Flag::new("max_connections", 100, "");
		flag.update(200);
		assert_eq!(flag.get::<i64>(), Some(200));
	}

	#[test]
	fn update_may_change_kind() {
		let flag = Flag::new("mode", 1, "");
		flag.update("fast");
		assert_eq!(flag.kind(), Kind::Text);
		assert_eq!(flag.get::<i64>(), None);
		assert_eq!(flag.get::<String>(), Some("fast".to_string()));
	}

	#[test]
	fn value_is_a_detached_snapshot() {
		let flag = Flag::new("endpoint", "a", "");
		let before = flag.value();
		flag.update("b");
		assert_eq!(before, Value::from("a"));
		assert_eq!(flag.value(), Value::from("b"));
	}
}
