use core::fmt;
use std::sync::Arc;

use flagpole_primitives::{FromValue, Value, parse_value_for_kind};
use parking_lot::RwLock;
use rustc_hash::FxHashMap as HashMap;

use crate::error::FlagError;
use crate::flag::{Flag, FlagRef};

/// Owned, point-in-time copy of one flag's state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlagSnapshot {
	pub name: String,
	pub description: String,
	pub value: Value,
}

/// Name to flag mapping.
///
/// Entries are added by [`Registry::define`] and never removed, so a
/// [`FlagRef`] handed out once stays the canonical flag for its name for the
/// life of the registry.
///
/// Locking is two-level: the map lock guards name lookup and insertion, and
/// each flag's own lock guards its value. Updates take the map lock for
/// reading only.
#[derive(Default)]
pub struct Registry {
	entries: RwLock<HashMap<Box<str>, FlagRef>>,
}

impl Registry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a flag, or returns the existing one with the same name.
	///
	/// The first definition of a name wins. Later calls get the same handle
	/// back and their `default` and `description` are dropped.
	pub fn define(&self, name: &str, default: impl Into<Value>, description: &str) -> FlagRef {
		let default = default.into();
		let mut entries = self.entries.write();
		if let Some(existing) = entries.get(name) {
			let stored = existing.kind();
			if stored != default.kind() {
				tracing::debug!(flag = name, stored = %stored, ignored = %default.kind(), "redefinition with different kind ignored");
			}
			return existing.clone();
		}

		tracing::trace!(flag = name, kind = %default.kind(), "defined flag");
		let flag = Arc::new(Flag::new(name, default, description));
		entries.insert(Box::from(name), flag.clone());
		flag
	}

	pub fn get(&self, name: &str) -> Option<FlagRef> {
		self.entries.read().get(name).cloned()
	}

	pub fn exists(&self, name: &str) -> bool {
		self.entries.read().contains_key(name)
	}

	/// Replaces the value of an existing flag.
	///
	/// Returns `false` without side effects if no flag has this name. The
	/// stored kind is allowed to change.
	pub fn update(&self, name: &str, new_value: impl Into<Value>) -> bool {
		let Some(flag) = self.get(name) else {
			tracing::trace!(flag = name, "update of unknown flag");
			return false;
		};
		flag.update(new_value);
		true
	}

	/// Returns true if the flag exists, holds a boolean, and that boolean is set.
	pub fn is_enabled(&self, name: &str) -> bool {
		self.get_value::<bool>(name).unwrap_or(false)
	}

	/// Returns the flag's value as `T`.
	///
	/// `None` covers both an unknown name and a kind mismatch; use
	/// [`Registry::exists`] to tell them apart.
	pub fn get_value<T: FromValue>(&self, name: &str) -> Option<T> {
		self.get(name)?.get::<T>()
	}

	/// Returns handles to every registered flag, in no particular order.
	pub fn get_all(&self) -> Vec<FlagRef> {
		self.entries.read().values().cloned().collect()
	}

	/// Parses `text` as the flag's current kind and stores the result.
	///
	/// On a parse failure the flag keeps its previous value.
	pub fn set_from_str(&self, name: &str, text: &str) -> Result<(), FlagError> {
		let Some(flag) = self.get(name) else {
			tracing::trace!(flag = name, "set of unknown flag");
			return Err(FlagError::UnknownFlag(name.to_string()));
		};
		let value = parse_value_for_kind(text, flag.kind()).map_err(|source| FlagError::Parse {
			flag: name.to_string(),
			source,
		})?;
		flag.update(value);
		Ok(())
	}

	/// Returns owned copies of every flag's state, sorted by name.
	pub fn snapshot(&self) -> Vec<FlagSnapshot> {
		let mut snaps: Vec<_> = self
			.get_all()
			.iter()
			.map(|flag| FlagSnapshot {
				name: flag.name().to_string(),
				description: flag.description().to_string(),
				value: flag.value(),
			})
			.collect();
		snaps.sort_by(|a, b| a.name.cmp(&b.name));
		snaps
	}

	pub fn len(&self) -> usize {
		self.entries.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.read().is_empty()
	}
}

impl fmt::Debug for Registry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Registry").field("len", &self.len()).finish()
	}
}
