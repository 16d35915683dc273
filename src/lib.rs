//! Nullable integers that remember whether they were ever assigned.
//!
//! `Option<T>` has two states. Data that crosses a JSON or SQL boundary often needs
//! three: a field can be absent, present but `null`, or present with a value.
//! [`Nullable`] tracks all three and converts to and from:
//!
//! * JSON, with [`Nullable::marshal_json`] and [`Nullable::unmarshal_json`], or through
//!   serde when the type is a struct field;
//! * plain text, with [`Nullable::marshal_text`], [`Nullable::unmarshal_text`],
//!   `Display` and `FromStr`;
//! * storage values, with [`Nullable::scan`] and [`Nullable::storage_value`];
//! * sqlx columns and bind parameters, with the `sqlx` feature (enabled by default).
//!
//! ```rust
//! use nullable::NullInt;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Patch {
//!     #[serde(default)]
//!     age: NullInt,
//! }
//!
//! let absent: Patch = serde_json::from_str("{}")?;
//! assert!(!absent.age.is_set());
//!
//! let cleared: Patch = serde_json::from_str(r#"{"age":null}"#)?;
//! assert!(cleared.age.is_set() && !cleared.age.is_valid());
//!
//! let updated: Patch = serde_json::from_str(r#"{"age":33}"#)?;
//! assert_eq!(updated.age.get(), Some(33));
//! # Ok::<(), serde_json::Error>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

// Modules
pub use nullable_core::{convert, error, value};

#[cfg(feature = "sqlx")]
#[cfg_attr(docsrs, doc(cfg(feature = "sqlx")))]
pub use nullable_core::sql;

// Types
pub use nullable_core::{
    ConversionError, Error, Integer, NullI32, NullI64, NullInt, NullU32, NullU64, NullUint,
    Nullable, Presence, Result, Value,
};

// Constants
pub use nullable_core::NULL_BYTES;
