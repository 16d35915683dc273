//! Best-effort coercion of storage values into Rust integers.
//!
//! Drivers do not agree on how an integer column arrives: some hand over an `i64`,
//! others an unsigned integer, a double, or the textual digits as a string or byte
//! slice. [`Convert`] accepts any of those as long as the value it carries is an
//! exact integer in range for the target type.
//!
//! | Source          | Accepted when                                   |
//! |-----------------|-------------------------------------------------|
//! | `Int`, `UInt`   | the value fits the target type                  |
//! | `Double`        | finite, without a fractional part, and in range |
//! | `Text`          | base-10 digits with an optional sign, no spaces |
//! | `Blob`          | valid UTF-8 that would be accepted as `Text`    |
//! | `Bool`, `Null`  | never                                           |
use std::any::type_name;
use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::{BoxDynError, ConversionError};
use crate::value::Value;

/// Coerce a [`Value`] into `Self`.
pub trait Convert: Sized {
    fn convert(value: &Value) -> Result<Self, ConversionError>;
}

fn failed<T>(value: &Value, source: impl Into<BoxDynError>) -> ConversionError {
    let source = source.into();

    tracing::debug!(
        target: "nullable::convert",
        from = value.kind(),
        to = type_name::<T>(),
        error = %source,
        "storage value conversion failed"
    );

    ConversionError::new(value.kind(), type_name::<T>(), source)
}

// -2^63 and 2^64 are exactly representable as doubles; `as` saturates, so range
// checks happen here instead.
const I64_MIN_F64: f64 = -9_223_372_036_854_775_808.0;
const U64_END_F64: f64 = 18_446_744_073_709_551_616.0;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn integral_double<T>(value: &Value, f: f64) -> Result<T, ConversionError>
where
    T: TryFrom<i64> + TryFrom<u64>,
    <T as TryFrom<i64>>::Error: Into<BoxDynError>,
    <T as TryFrom<u64>>::Error: Into<BoxDynError>,
{
    if !f.is_finite() || f.fract() != 0.0 {
        return Err(failed::<T>(
            value,
            format!("{f} is not an integral value"),
        ));
    }

    if (I64_MIN_F64..0.0).contains(&f) {
        T::try_from(f as i64).map_err(|e| failed::<T>(value, e))
    } else if (0.0..U64_END_F64).contains(&f) {
        T::try_from(f as u64).map_err(|e| failed::<T>(value, e))
    } else {
        Err(failed::<T>(value, format!("{f} is out of range")))
    }
}

fn parse_digits<T>(value: &Value, s: &str) -> Result<T, ConversionError>
where
    T: FromStr<Err = ParseIntError>,
{
    s.parse().map_err(|e| failed::<T>(value, e))
}

fn convert_integer<T>(value: &Value) -> Result<T, ConversionError>
where
    T: TryFrom<i64> + TryFrom<u64> + FromStr<Err = ParseIntError>,
    <T as TryFrom<i64>>::Error: Into<BoxDynError>,
    <T as TryFrom<u64>>::Error: Into<BoxDynError>,
{
    match value {
        Value::Int(i) => T::try_from(*i).map_err(|e| failed::<T>(value, e)),
        Value::UInt(u) => T::try_from(*u).map_err(|e| failed::<T>(value, e)),
        Value::Double(f) => integral_double(value, *f),
        Value::Text(s) => parse_digits(value, s),
        Value::Blob(b) => match std::str::from_utf8(b) {
            Ok(s) => parse_digits(value, s),
            Err(e) => Err(failed::<T>(value, e)),
        },
        Value::Bool(_) => Err(failed::<T>(
            value,
            "boolean values are not converted to integers",
        )),
        Value::Null => Err(failed::<T>(value, "unexpected null")),
    }
}

macro_rules! impl_convert_for_integer {
    ($($ty:ty),*) => {
        $(
            impl Convert for $ty {
                #[inline]
                fn convert(value: &Value) -> Result<Self, ConversionError> {
                    convert_integer(value)
                }
            }
        )*
    };
}

impl_convert_for_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_converts_integers_in_range() {
        assert_eq!(i64::convert(&Value::Int(-9)).unwrap(), -9);
        assert_eq!(u32::convert(&Value::Int(9)).unwrap(), 9);
        assert_eq!(isize::convert(&Value::UInt(42)).unwrap(), 42);
        assert_eq!(u64::convert(&Value::UInt(u64::MAX)).unwrap(), u64::MAX);
    }

    #[test]
    fn it_rejects_integers_out_of_range() {
        let err = u64::convert(&Value::Int(-1)).unwrap_err();

        assert_eq!(err.from_kind(), "int");
        assert_eq!(err.target(), "u64");

        assert!(i64::convert(&Value::UInt(u64::MAX)).is_err());
        assert!(u8::convert(&Value::Int(256)).is_err());
    }

    #[test]
    fn it_converts_integral_doubles() {
        assert_eq!(i64::convert(&Value::Double(3.0)).unwrap(), 3);
        assert_eq!(i64::convert(&Value::Double(-3.0)).unwrap(), -3);
        assert_eq!(usize::convert(&Value::Double(0.0)).unwrap(), 0);

        assert!(i64::convert(&Value::Double(3.5)).is_err());
        assert!(i64::convert(&Value::Double(f64::NAN)).is_err());
        assert!(i64::convert(&Value::Double(f64::INFINITY)).is_err());
        assert!(i64::convert(&Value::Double(1e20)).is_err());
        assert!(u64::convert(&Value::Double(-1.0)).is_err());
        assert!(u64::convert(&Value::Double(1e20)).is_err());
    }

    #[test]
    fn it_parses_text_and_blobs() {
        assert_eq!(i32::convert(&Value::from("-17")).unwrap(), -17);
        assert_eq!(u32::convert(&Value::from(&b"17"[..])).unwrap(), 17);

        assert!(i32::convert(&Value::from(" 17")).is_err());
        assert!(i32::convert(&Value::from("17.0")).is_err());
        assert!(u32::convert(&Value::from("-17")).is_err());
        assert!(u32::convert(&Value::Blob(vec![0xff, 0xfe])).is_err());
    }

    #[test]
    fn it_rejects_bool_and_null() {
        let err = i64::convert(&Value::Bool(true)).unwrap_err();
        assert_eq!(err.from_kind(), "bool");

        let err = i64::convert(&Value::Null).unwrap_err();
        assert_eq!(err.from_kind(), "null");
    }
}
