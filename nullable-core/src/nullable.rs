use crate::error::Result;
use crate::integer::Integer;
use crate::value::Value;

/// An integer that is either unset, explicitly null, or holds a value.
///
/// A freshly defaulted `Nullable` is *unset*: it was never assigned and, when it is a
/// field of a deserialized struct, the field was absent from the input. Every other
/// way of producing one (constructing it, deserializing it, or calling
/// [`set_valid`](Self::set_valid)) marks it as *set*, null or not.
///
/// ```rust
/// # use nullable_core::{NullInt, Presence};
/// let mut n = NullInt::default();
/// assert_eq!(n.presence(), Presence::Unset);
///
/// n.unmarshal_json(b"null")?;
/// assert_eq!(n.presence(), Presence::Null);
///
/// n.unmarshal_json(b"42")?;
/// assert_eq!(n.presence(), Presence::Value(42));
/// # Ok::<(), nullable_core::Error>(())
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Nullable<T> {
    pub(crate) value: T,
    pub(crate) valid: bool,
    pub(crate) set: bool,
}

/// A nullable, platform-width signed integer.
pub type NullInt = Nullable<isize>;

/// A nullable, platform-width unsigned integer.
pub type NullUint = Nullable<usize>;

pub type NullI32 = Nullable<i32>;
pub type NullI64 = Nullable<i64>;
pub type NullU32 = Nullable<u32>;
pub type NullU64 = Nullable<u64>;

/// The three states of a [`Nullable`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Presence<T> {
    /// Never assigned.
    Unset,
    /// Explicitly assigned the absence of a value.
    Null,
    Value(T),
}

impl<T> Nullable<T> {
    /// Creates a set `Nullable`.
    ///
    /// `value` is stored as-is even when `valid` is `false`.
    pub const fn new(value: T, valid: bool) -> Self {
        Self {
            value,
            valid,
            set: true,
        }
    }

    /// Creates a set, non-null `Nullable`.
    pub const fn from_value(value: T) -> Self {
        Self::new(value, true)
    }

    /// Returns `true` if this carries an explicit value and is not null.
    pub const fn is_valid(&self) -> bool {
        self.set && self.valid
    }

    /// Returns `true` if this was explicitly assigned, null included.
    pub const fn is_set(&self) -> bool {
        self.set
    }

    /// Returns `true` for any null `Nullable`, set or not.
    ///
    /// Meant for `#[serde(skip_serializing_if = "Nullable::is_zero")]`.
    pub const fn is_zero(&self) -> bool {
        !self.valid
    }

    /// A reference to the value, or `None` if this is null.
    pub const fn as_option(&self) -> Option<&T> {
        if self.valid {
            Some(&self.value)
        } else {
            None
        }
    }

    /// Changes the value and marks this as set and non-null.
    pub fn set_valid(&mut self, value: T) {
        self.value = value;
        self.valid = true;
        self.set = true;
    }
}

impl<T: Integer> Nullable<T> {
    /// Creates a set `Nullable` that is null.
    pub fn null() -> Self {
        Self::new(T::default(), false)
    }

    /// Creates a set `Nullable` that is null if `value` is `None`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from_value(value),
            None => Self::null(),
        }
    }

    /// The value, or `None` if this is null.
    pub fn get(&self) -> Option<T> {
        self.as_option().copied()
    }

    /// The stored primitive, whether or not this is null.
    pub fn value(&self) -> T {
        self.value
    }

    pub fn presence(&self) -> Presence<T> {
        match (self.set, self.valid) {
            (false, _) => Presence::Unset,
            (true, false) => Presence::Null,
            (true, true) => Presence::Value(self.value),
        }
    }

    /// Assigns from a value read out of storage.
    ///
    /// A [`Value::Null`] resets this to the *unset* state, unlike every other way of
    /// assigning null. Anything else marks this set and non-null before coercing it
    /// with [`Convert`](crate::convert::Convert); if coercion fails the previous value is kept, the flags are
    /// not rolled back, and the error is returned.
    pub fn scan(&mut self, value: &Value) -> Result<()> {
        if value.is_null() {
            *self = Self::default();
            return Ok(());
        }

        self.valid = true;
        self.set = true;
        self.value = T::convert(value)?;

        Ok(())
    }

    /// The value to write to storage: [`Value::Null`] or a [`Value::Int`].
    ///
    /// See [`Integer::to_storage`] for how unsigned values are widened.
    pub fn storage_value(&self) -> Value {
        match self.get() {
            Some(value) => Value::Int(value.to_storage()),
            None => Value::Null,
        }
    }
}

impl<T: Integer> From<T> for Nullable<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T: Integer> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        Self::from_option(value)
    }
}

impl<T: Integer> From<Nullable<T>> for Option<T> {
    fn from(value: Nullable<T>) -> Self {
        value.get()
    }
}

impl<T: Integer> From<Nullable<T>> for Value {
    fn from(value: Nullable<T>) -> Self {
        value.storage_value()
    }
}
