//! Concurrent registry of named, typed runtime flags.
//!
//! A [`Flag`] is a named cell holding one [`Value`] (bool, int, float or
//! text). Flags live in a [`Registry`], which hands out shared [`FlagRef`]
//! handles. Asking for a value of the wrong kind yields `None`, never an
//! error.
//!
//! ```
//! use flagpole_registry::Registry;
//!
//! let registry = Registry::new();
//! registry.define("timeout", 30.5, "secs");
//! assert_eq!(registry.get_value::<f64>("timeout"), Some(30.5));
//!
//! registry.update("timeout", 60.0);
//! assert_eq!(registry.get_value::<f64>("timeout"), Some(60.0));
//! assert_eq!(registry.get_value::<i64>("timeout"), None);
//! ```

pub mod error;
pub mod flag;
pub mod flags;
pub mod registry;

pub use error::FlagError;
pub use flag::{Flag, FlagRef};
pub use flagpole_primitives::{FromValue, Kind, ParseError, Value};
pub use registry::{FlagSnapshot, Registry};
