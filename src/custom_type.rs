//! Marshaling contract for protocol buffer custom types
//!
//! Code generators that support custom field types expect the type to report its encoded size,
//! write itself into a caller-provided buffer and read itself back. [`Uuid`] is encoded as its
//! raw 16 bytes.
//!
//! ```rust
//! use rfc4122::{custom_type::CustomType, Uuid, NAMESPACE_X500};
//!
//! let mut buf = [0u8; 20];
//! let written = NAMESPACE_X500.marshal_to(&mut buf)?;
//! assert_eq!(written, NAMESPACE_X500.size());
//!
//! let mut decoded = Uuid::NIL;
//! decoded.unmarshal(&buf[..written])?;
//! assert_eq!(decoded, NAMESPACE_X500);
//! # Ok::<(), rfc4122::LengthError>(())
//! ```

use crate::{LengthError, Uuid};

/// A value that marshals to and from a length-delimited protobuf field.
pub trait CustomType: Sized {
    /// Returns the number of bytes [`CustomType::marshal_to()`] writes.
    fn size(&self) -> usize;

    /// Writes the encoded value to the beginning of `data` and returns the number of bytes
    /// written.
    ///
    /// # Errors
    ///
    /// Fails if `data` is shorter than [`CustomType::size()`].
    fn marshal_to(&self, data: &mut [u8]) -> Result<usize, LengthError>;

    /// Replaces `self` with the value decoded from `data`.
    ///
    /// # Errors
    ///
    /// Fails if `data` is not a valid encoding; `self` is left untouched in that case.
    fn unmarshal(&mut self, data: &[u8]) -> Result<(), LengthError>;

    /// Returns the encoded value as a new buffer.
    fn marshal(&self) -> Vec<u8> {
        let mut data = vec![0u8; self.size()];
        let n = self
            .marshal_to(&mut data)
            .unwrap_or_else(|_| unreachable!("buffer sized by size()"));
        data.truncate(n);
        data
    }
}

impl CustomType for Uuid {
    fn size(&self) -> usize {
        16
    }

    fn marshal_to(&self, data: &mut [u8]) -> Result<usize, LengthError> {
        match data.get_mut(..16) {
            Some(dst) => {
                dst.copy_from_slice(self.as_bytes());
                Ok(16)
            }
            None => Err(LengthError::new(data.len())),
        }
    }

    fn unmarshal(&mut self, data: &[u8]) -> Result<(), LengthError> {
        *self = Self::from_slice(data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::CustomType;
    use crate::Uuid;

    /// Writes raw bytes to prefix of buffer
    #[test]
    fn writes_raw_bytes_to_prefix_of_buffer() {
        let e = crate::new_v4();
        let mut buf = [0xffu8; 24];
        assert_eq!(e.marshal_to(&mut buf), Ok(16));
        assert_eq!(&buf[..16], e.as_bytes());
        assert_eq!(&buf[16..], &[0xffu8; 8]);
        assert_eq!(e.marshal(), e.as_bytes().to_vec());
        assert_eq!(e.size(), 16);
    }

    /// Rejects short output buffer
    #[test]
    fn rejects_short_output_buffer() {
        let mut buf = [0u8; 15];
        let err = crate::NAMESPACE_DNS.marshal_to(&mut buf).unwrap_err();
        assert_eq!(err.actual_len(), 15);
        assert_eq!(buf, [0u8; 15]);
    }

    /// Reads back exactly 16 bytes
    #[test]
    fn reads_back_exactly_16_bytes() {
        let e = crate::NAMESPACE_URL;
        let mut x = Uuid::NIL;
        assert!(x.unmarshal(&e.as_bytes()[..15]).is_err());
        assert!(x.unmarshal(&[0u8; 17]).is_err());
        assert_eq!(x, Uuid::NIL);

        assert!(x.unmarshal(e.as_bytes()).is_ok());
        assert_eq!(x, e);
    }
}
