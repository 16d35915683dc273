use std::fmt::{self, Display, Formatter};
use std::str::{self, FromStr};

use crate::error::{Error, Result};
use crate::integer::Integer;
use crate::nullable::Nullable;

impl<T: Integer> Nullable<T> {
    /// Assigns from base-10 text; empty text assigns null.
    ///
    /// Unlike [`unmarshal_json`](Self::unmarshal_json), neither the null path nor a
    /// failed parse touches the stored value. A failed parse leaves this set and null.
    pub fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
        self.set = true;

        if text.is_empty() {
            self.valid = false;
            return Ok(());
        }

        let parsed = str::from_utf8(text)
            .map_err(Error::parse)
            .and_then(|s| s.parse::<T>().map_err(Error::parse));

        self.valid = parsed.is_ok();
        self.value = parsed?;

        Ok(())
    }

    /// The text encoding: empty if this is null, otherwise the decimal value.
    pub fn marshal_text(&self) -> Vec<u8> {
        match self.as_option() {
            Some(value) => value.to_string().into_bytes(),
            None => Vec::new(),
        }
    }
}

/// Writes the decimal value, or nothing if this is null.
impl<T: Integer> Display for Nullable<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.as_option() {
            Some(value) => Display::fmt(value, f),
            None => Ok(()),
        }
    }
}

impl<T: Integer> FromStr for Nullable<T> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut this = Self::default();
        this.unmarshal_text(s.as_bytes())?;

        Ok(this)
    }
}
