//! Dynamically typed values exchanged with a storage driver.

/// A single column value, as handed over by (or handed to) a database driver.
///
/// The variants cover the native representations drivers deliver for scalar columns.
/// Conversion into a concrete integer is done by [`Convert`](crate::convert::Convert).
#[derive(Clone, Debug, PartialEq, Default)]
#[non_exhaustive]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Double(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    /// A short, stable name for the variant; used in error messages and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Double(_) => "double",
            Value::Text(_) => "text",
            Value::Blob(_) => "blob",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

macro_rules! impl_from_for_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::$variant(value.into())
                }
            }
        )*
    };
}

impl_from_for_value! {
    bool => Bool,
    i8 => Int,
    i16 => Int,
    i32 => Int,
    i64 => Int,
    u8 => UInt,
    u16 => UInt,
    u32 => UInt,
    u64 => UInt,
    f32 => Double,
    f64 => Double,
    String => Text,
    &'_ str => Text,
    Vec<u8> => Blob,
    &'_ [u8] => Blob,
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_names_each_kind() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::from(true).kind(), "bool");
        assert_eq!(Value::from(7_i32).kind(), "int");
        assert_eq!(Value::from(7_u8).kind(), "uint");
        assert_eq!(Value::from(1.5_f32).kind(), "double");
        assert_eq!(Value::from("x").kind(), "text");
        assert_eq!(Value::from(&b"x"[..]).kind(), "blob");
    }

    #[test]
    fn it_maps_none_to_null() {
        assert!(Value::from(None::<i64>).is_null());
        assert_eq!(Value::from(Some(9_i64)), Value::Int(9));
        assert_eq!(Value::default(), Value::Null);
    }
}
