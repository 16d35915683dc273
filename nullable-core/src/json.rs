use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};
use crate::integer::Integer;
use crate::nullable::Nullable;

/// The JSON null token.
pub const NULL_BYTES: &[u8] = b"null";

impl<T: Integer> Nullable<T> {
    /// Assigns from a single JSON scalar.
    ///
    /// This is marked as set before the input is looked at, so it stays set even when
    /// an error is returned. `null` assigns null (and zeroes the stored value); anything
    /// else must be a JSON integer that fits `T`.
    pub fn unmarshal_json(&mut self, data: &[u8]) -> Result<()> {
        self.set = true;

        if data == NULL_BYTES {
            self.valid = false;
            self.value = T::default();
            return Ok(());
        }

        let wide: T::Wide = serde_json::from_slice(data).map_err(Error::parse)?;

        self.value = T::narrow(wide).map_err(Error::Parse)?;
        self.valid = true;

        Ok(())
    }

    /// The JSON encoding: [`NULL_BYTES`] if this is null, otherwise the decimal value.
    pub fn marshal_json(&self) -> Vec<u8> {
        match self.as_option() {
            Some(value) => value.to_string().into_bytes(),
            None => NULL_BYTES.to_vec(),
        }
    }
}

impl<T: Integer> Serialize for Nullable<T> {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.as_option() {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

/// A missing struct field never reaches this impl; mark the field `#[serde(default)]`
/// to have it come out unset.
impl<'de, T: Integer> Deserialize<'de> for Nullable<T> {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<T::Wide>::deserialize(deserializer)? {
            Some(wide) => T::narrow(wide)
                .map(Self::from_value)
                .map_err(D::Error::custom),
            None => Ok(Self::null()),
        }
    }
}
