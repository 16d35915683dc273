//! Core of nullable.
//!
//! Not intended to be used directly; see the `nullable` crate for details.
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_debug_implementations)]

pub mod convert;
pub mod error;
pub mod value;

mod integer;
mod json;
mod nullable;
mod text;

#[cfg(feature = "sqlx")]
#[cfg_attr(docsrs, doc(cfg(feature = "sqlx")))]
pub mod sql;

#[doc(inline)]
pub use self::{
    error::{ConversionError, Error, Result},
    integer::Integer,
    json::NULL_BYTES,
    nullable::{NullI32, NullI64, NullInt, NullU32, NullU64, NullUint, Nullable, Presence},
    value::Value,
};
