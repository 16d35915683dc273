use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::convert::Convert;
use crate::error::BoxDynError;

mod private {
    pub trait Sealed {}
}

/// An integer primitive that can be wrapped in a [`Nullable`](crate::Nullable).
///
/// This trait is sealed; it is implemented for `isize`, `usize`, `i32`, `i64`, `u32` and `u64`.
pub trait Integer:
    Copy
    + Default
    + Debug
    + Display
    + Eq
    + Hash
    + FromStr<Err = ParseIntError>
    + Serialize
    + Convert
    + Send
    + Sync
    + 'static
    + private::Sealed
{
    /// The 64-bit integer JSON input is parsed as before narrowing to `Self`.
    type Wide: DeserializeOwned + Display;

    /// Narrows a parsed 64-bit integer to `Self`, failing if it is out of range.
    fn narrow(wide: Self::Wide) -> Result<Self, BoxDynError>;

    /// The value as it is written to storage.
    ///
    /// Storage always receives a signed 64-bit integer. Unsigned values above
    /// `i64::MAX` wrap around to negative numbers and do not survive a round trip.
    fn to_storage(self) -> i64;
}

macro_rules! impl_integer {
    ($($ty:ty => $wide:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}

            impl Integer for $ty {
                type Wide = $wide;

                #[inline]
                fn narrow(wide: $wide) -> Result<Self, BoxDynError> {
                    Ok(wide.try_into()?)
                }

                #[inline]
                #[allow(
                    clippy::cast_possible_wrap,
                    clippy::cast_possible_truncation,
                    clippy::unnecessary_cast
                )]
                fn to_storage(self) -> i64 {
                    self as i64
                }
            }
        )*
    };
}

impl_integer! {
    isize => i64,
    i32 => i64,
    i64 => i64,
    usize => u64,
    u32 => u64,
    u64 => u64,
}
