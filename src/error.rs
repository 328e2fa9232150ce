//! Error types

use thiserror::Error;

/// Error parsing an invalid string representation of UUID.
///
/// The error keeps a copy of the rejected input so that it can be reported as-is.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("{kind}: {input:?}")]
pub struct ParseError {
    kind: ParseErrorKind,
    input: String,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, input: &[u8]) -> Self {
        Self {
            kind,
            input: String::from_utf8_lossy(input).into_owned(),
        }
    }

    /// Returns the reason the input was rejected.
    pub const fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Returns the rejected input, with invalid UTF-8 sequences replaced.
    pub fn input(&self) -> &str {
        &self.input
    }
}

/// Reason a string representation was rejected.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// The input ends before all five groups are read.
    #[error("UUID string too short")]
    TooShort,

    /// The input carries more than one UUID representation worth of characters.
    #[error("UUID string too long")]
    TooLong,

    /// A character other than `-` sits between two groups.
    #[error("invalid group separator at position {index}")]
    InvalidSeparator { index: usize },

    /// A group contains a character that is not a hexadecimal digit.
    #[error("invalid hex digit {found:?} at position {index}")]
    InvalidHexDigit { index: usize, found: char },

    /// The input opens with `{` but does not close with `}`.
    #[error("missing closing brace")]
    MissingClosingBrace,
}

/// Error converting a byte slice that is not exactly 16 bytes long.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Error)]
#[error("UUID must be exactly 16 bytes long, got {len} bytes")]
pub struct LengthError {
    len: usize,
}

impl LengthError {
    pub(crate) const fn new(len: usize) -> Self {
        Self { len }
    }

    /// Returns the length of the rejected input.
    pub const fn actual_len(&self) -> usize {
        self.len
    }
}

/// Error reading a UUID from a value handed over by a storage driver.
#[derive(Clone, Eq, PartialEq, Debug, Error)]
#[non_exhaustive]
pub enum ScanError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Length(#[from] LengthError),

    /// The value is of a type that cannot hold a UUID, such as an integer or a NULL.
    #[error("cannot convert {0} to UUID")]
    UnsupportedSourceType(&'static str),
}

/// The secure random number source failed to produce bytes.
///
/// Generators never return this error. They panic with it instead, as continuing with
/// predictable bytes would silently break the uniqueness of every UUID produced afterwards.
#[derive(Debug, Error)]
#[error("secure random source unavailable: {0}")]
pub struct EntropyUnavailable(#[from] pub rand::Error);

#[cfg(test)]
mod tests {
    use super::{LengthError, ParseError, ParseErrorKind, ScanError};

    /// Embeds offending input in messages
    #[test]
    fn embeds_offending_input_in_messages() {
        let e = ParseError::new(ParseErrorKind::TooShort, b"6ba7b810");
        assert_eq!(e.to_string(), r#"UUID string too short: "6ba7b810""#);
        assert_eq!(e.input(), "6ba7b810");

        let e = ParseError::new(
            ParseErrorKind::InvalidHexDigit {
                index: 3,
                found: 'g',
            },
            b"6bag",
        );
        assert_eq!(e.to_string(), r#"invalid hex digit 'g' at position 3: "6bag""#);
    }

    /// Describes length and scan errors
    #[test]
    fn describes_length_and_scan_errors() {
        assert_eq!(
            LengthError::new(15).to_string(),
            "UUID must be exactly 16 bytes long, got 15 bytes"
        );
        assert_eq!(
            ScanError::UnsupportedSourceType("integer").to_string(),
            "cannot convert integer to UUID"
        );
        assert_eq!(
            ScanError::from(LengthError::new(3)).to_string(),
            LengthError::new(3).to_string()
        );
    }
}
