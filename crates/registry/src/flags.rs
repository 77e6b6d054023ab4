//! Process-wide flag registry and free-function accessors.
//!
//! The global [`Registry`] is created on first use and never torn down.
//! Code that wants isolation (tests, embedded hosts) should construct its own
//! [`Registry`] instead.
//!
//! ```
//! use flagpole_registry::flags;
//!
//! flags::define("doc_dark_mode", true, "Enable dark mode UI");
//! assert!(flags::is_enabled("doc_dark_mode"));
//!
//! flags::update("doc_dark_mode", false);
//! assert!(!flags::is_enabled("doc_dark_mode"));
//! ```

use std::sync::LazyLock;

use flagpole_primitives::{FromValue, Value};

use crate::error::FlagError;
use crate::flag::FlagRef;
use crate::registry::{FlagSnapshot, Registry};

static REGISTRY: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Returns the process-wide registry.
pub fn instance() -> &'static Registry {
	&REGISTRY
}

/// See [`Registry::define`].
pub fn define(name: &str, default: impl Into<Value>, description: &str) -> FlagRef {
	REGISTRY.define(name, default, description)
}

pub fn get(name: &str) -> Option<FlagRef> {
	REGISTRY.get(name)
}

pub fn exists(name: &str) -> bool {
	REGISTRY.exists(name)
}

/// See [`Registry::is_enabled`].
pub fn is_enabled(name: &str) -> bool {
	REGISTRY.is_enabled(name)
}

/// See [`Registry::get_value`].
pub fn get_value<T: FromValue>(name: &str) -> Option<T> {
	REGISTRY.get_value(name)
}

/// See [`Registry::update`].
pub fn update(name: &str, new_value: impl Into<Value>) -> bool {
	REGISTRY.update(name, new_value)
}

pub fn get_all() -> Vec<FlagRef> {
	REGISTRY.get_all()
}

/// See [`Registry::set_from_str`].
pub fn set_from_str(name: &str, text: &str) -> Result<(), FlagError> {
	REGISTRY.set_from_str(name, text)
}

pub fn snapshot() -> Vec<FlagSnapshot> {
	REGISTRY.snapshot()
}
