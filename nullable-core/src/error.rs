//! Types for working with errors produced by nullable.

use std::error::Error as StdError;
use std::result::Result as StdResult;

/// A specialized `Result` type for nullable.
pub type Result<T> = StdResult<T, Error>;

// Convenience type alias for usage within nullable.
pub type BoxDynError = Box<dyn StdError + 'static + Send + Sync>;

/// Represents all the ways a conversion into a nullable type can fail.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The input was not a well-formed integer literal of the expected signedness and width.
    ///
    /// Returned from `unmarshal_json`, `unmarshal_text` and `FromStr`.
    #[error("error occurred while parsing: {0}")]
    Parse(#[source] BoxDynError),

    /// A storage value could not be coerced into the target integer type.
    ///
    /// Returned from `scan`.
    #[error("error occurred while converting: {0}")]
    Conversion(#[from] ConversionError),
}

impl Error {
    #[inline]
    pub(crate) fn parse(err: impl Into<BoxDynError>) -> Self {
        Error::Parse(err.into())
    }

    /// Returns `true` if this is a [`Error::Parse`].
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }

    /// Returns `true` if this is a [`Error::Conversion`].
    pub fn is_conversion(&self) -> bool {
        matches!(self, Error::Conversion(_))
    }
}

/// A storage value that could not be converted into the requested integer type.
#[derive(Debug, thiserror::Error)]
#[error("converting storage value of kind {from} to {to}: {source}")]
pub struct ConversionError {
    from: &'static str,
    to: &'static str,
    #[source]
    source: BoxDynError,
}

impl ConversionError {
    pub(crate) fn new(from: &'static str, to: &'static str, source: impl Into<BoxDynError>) -> Self {
        Self {
            from,
            to,
            source: source.into(),
        }
    }

    /// The kind of the storage value, as reported by [`Value::kind`](crate::Value::kind).
    pub fn from_kind(&self) -> &'static str {
        self.from
    }

    /// The name of the Rust type the value was being converted into.
    pub fn target(&self) -> &'static str {
        self.to
    }
}
