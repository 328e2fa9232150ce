//! Conversions to and from values exchanged with relational storage drivers

use crate::{NullUuid, ScanError, Uuid};

/// A column value handed over by a storage driver, borrowed from the driver's buffer.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum ScanSource<'a> {
    /// SQL NULL.
    Null,

    /// Binary data: the 16-byte representation, or text stored as bytes.
    Bytes(&'a [u8]),

    /// Text data.
    Text(&'a str),

    /// Any other type, identified by name for error reporting.
    Other(&'static str),
}

impl<'a> From<&'a [u8]> for ScanSource<'a> {
    fn from(src: &'a [u8]) -> Self {
        Self::Bytes(src)
    }
}

impl<'a> From<&'a str> for ScanSource<'a> {
    fn from(src: &'a str) -> Self {
        Self::Text(src)
    }
}

/// A value to bind to a statement parameter.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum BindValue {
    /// SQL NULL.
    Null,

    /// The 16-byte binary representation.
    Bytes([u8; 16]),
}

impl Uuid {
    /// Reads a UUID from a column value.
    ///
    /// A 16-byte binary value is taken as the raw representation. Any other binary value and any
    /// text value go through [`Uuid::parse_ascii()`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{ScanError, ScanSource, Uuid, NAMESPACE_DNS};
    ///
    /// let raw = NAMESPACE_DNS.to_bytes();
    /// assert_eq!(Uuid::scan(ScanSource::Bytes(&raw)), Ok(NAMESPACE_DNS));
    /// assert_eq!(Uuid::scan("6ba7b810-9dad-11d1-80b4-00c04fd430c8".into()), Ok(NAMESPACE_DNS));
    /// assert_eq!(
    ///     Uuid::scan(ScanSource::Other("integer")),
    ///     Err(ScanError::UnsupportedSourceType("integer")),
    /// );
    /// ```
    pub fn scan(src: ScanSource<'_>) -> Result<Self, ScanError> {
        match src {
            ScanSource::Bytes(bytes) if bytes.len() == 16 => Ok(Self::from_slice(bytes)?),
            ScanSource::Bytes(bytes) => Ok(Self::parse_ascii(bytes)?),
            ScanSource::Text(text) => Ok(Self::parse_str(text)?),
            ScanSource::Null => Err(ScanError::UnsupportedSourceType("NULL")),
            ScanSource::Other(type_name) => Err(ScanError::UnsupportedSourceType(type_name)),
        }
    }

    /// Returns the value to bind for this UUID: its 16-byte binary representation.
    pub fn bind_value(&self) -> BindValue {
        BindValue::Bytes(self.to_bytes())
    }
}

impl NullUuid {
    /// Reads a possibly absent UUID from a column value.
    ///
    /// NULL yields [`NullUuid::NULL`]; every other value is read as by [`Uuid::scan()`].
    pub fn scan(src: ScanSource<'_>) -> Result<Self, ScanError> {
        match src {
            ScanSource::Null => Ok(Self::NULL),
            _ => Uuid::scan(src).map(Self::new),
        }
    }

    /// Returns the value to bind: NULL if absent, or the 16-byte binary representation.
    pub fn bind_value(&self) -> BindValue {
        match self.into_option() {
            Some(uuid) => uuid.bind_value(),
            None => BindValue::Null,
        }
    }
}

#[cfg(feature = "rusqlite")]
#[cfg_attr(docsrs, doc(cfg(feature = "rusqlite")))]
mod rusqlite_support {
    use super::{BindValue, ScanSource};
    use crate::{NullUuid, Uuid};
    use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

    impl<'a> From<ValueRef<'a>> for ScanSource<'a> {
        fn from(src: ValueRef<'a>) -> Self {
            match src {
                ValueRef::Null => Self::Null,
                ValueRef::Blob(bytes) => Self::Bytes(bytes),
                ValueRef::Text(bytes) => {
                    std::str::from_utf8(bytes).map_or(Self::Bytes(bytes), Self::Text)
                }
                ValueRef::Integer(_) => Self::Other("INTEGER"),
                ValueRef::Real(_) => Self::Other("REAL"),
            }
        }
    }

    impl From<BindValue> for ToSqlOutput<'_> {
        fn from(src: BindValue) -> Self {
            match src {
                BindValue::Null => ToSqlOutput::from(rusqlite::types::Null),
                BindValue::Bytes(bytes) => ToSqlOutput::from(bytes.to_vec()),
            }
        }
    }

    impl ToSql for Uuid {
        fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
            Ok(self.bind_value().into())
        }
    }

    impl FromSql for Uuid {
        fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
            match value {
                ValueRef::Integer(_) | ValueRef::Real(_) | ValueRef::Null => {
                    Err(FromSqlError::InvalidType)
                }
                _ => Uuid::scan(value.into()).map_err(|err| FromSqlError::Other(Box::new(err))),
            }
        }
    }

    impl ToSql for NullUuid {
        fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
            Ok(self.bind_value().into())
        }
    }

    impl FromSql for NullUuid {
        fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
            match value {
                ValueRef::Integer(_) | ValueRef::Real(_) => Err(FromSqlError::InvalidType),
                _ => NullUuid::scan(value.into()).map_err(|err| FromSqlError::Other(Box::new(err))),
            }
        }
    }

}
