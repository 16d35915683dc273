//! Integration with [`sqlx`](https://docs.rs/sqlx).
//!
//! Every [`Nullable`] binds and decodes as the database's `i64` (e.g. `BIGINT` or
//! SQLite `INTEGER`), so the impls apply to any driver with `i64` support.
use sqlx_core::database::Database;
use sqlx_core::decode::Decode;
use sqlx_core::encode::{Encode, IsNull};
use sqlx_core::error::BoxDynError;
use sqlx_core::types::Type;
use sqlx_core::value::ValueRef;

use crate::integer::Integer;
use crate::nullable::Nullable;
use crate::value::Value;

impl<T, DB> Type<DB> for Nullable<T>
where
    T: Integer,
    DB: Database,
    i64: Type<DB>,
{
    fn type_info() -> DB::TypeInfo {
        <i64 as Type<DB>>::type_info()
    }

    fn compatible(ty: &DB::TypeInfo) -> bool {
        <i64 as Type<DB>>::compatible(ty)
    }
}

impl<'q, T, DB> Encode<'q, DB> for Nullable<T>
where
    T: Integer,
    DB: Database,
    i64: Encode<'q, DB>,
{
    fn encode_by_ref(
        &self,
        buf: &mut <DB as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        match self.get() {
            Some(value) => <i64 as Encode<'q, DB>>::encode_by_ref(&value.to_storage(), buf),
            None => Ok(IsNull::Yes),
        }
    }
}

/// Decoding a SQL `NULL` produces an *unset* value, the same as
/// [`Nullable::scan`] does for [`Value::Null`].
impl<'r, T, DB> Decode<'r, DB> for Nullable<T>
where
    T: Integer,
    DB: Database,
    i64: Decode<'r, DB>,
{
    fn decode(value: <DB as Database>::ValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            tracing::trace!(target: "nullable::sql", "decoded NULL as unset");
            return Ok(Self::default());
        }

        let raw = <i64 as Decode<'r, DB>>::decode(value)?;

        let mut this = Self::default();
        this.scan(&Value::Int(raw))?;

        Ok(this)
    }
}
