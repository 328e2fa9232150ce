use std::{ops, time};

use crate::LengthError;

/// Number of 100-nanosecond intervals between the UUID epoch (1582-10-15) and the Unix epoch.
pub(crate) const GREGORIAN_OFFSET: u64 = 122_192_928_000_000_000;

/// Represents a Universally Unique IDentifier.
///
/// The byte array is laid out as specified by RFC 4122, with multi-byte fields in big-endian
/// order. The derived ordering compares the sixteen bytes as unsigned integers from left to right.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// UUID layout variant, encoded in the most significant bits of byte 8.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// `0xx`: reserved for backward compatibility with the NCS layout.
    Ncs,

    /// `10x`: the layout specified by RFC 4122.
    Rfc4122,

    /// `110`: reserved for backward compatibility with Microsoft GUIDs.
    Microsoft,

    /// `111`: reserved for future definition.
    Future,
}

/// DCE security domain embedded in a version 2 UUID.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Domain {
    /// The local identifier is a POSIX user ID.
    Person = 0,

    /// The local identifier is a POSIX group ID.
    Group = 1,

    /// The local identifier is an organization-defined value.
    Org = 2,
}

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns a copy of the underlying byte array.
    pub const fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Creates an object from a byte array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Creates an object from the 128-bit big-endian integer representation.
    pub const fn from_u128(value: u128) -> Self {
        Self(value.to_be_bytes())
    }

    /// Returns the 128-bit big-endian integer representation.
    pub const fn as_u128(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    /// Creates an object from a byte slice that must be exactly 16 bytes long.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let bytes = [
    ///     0x6b, 0xa7, 0xb8, 0x10, 0x9d, 0xad, 0x11, 0xd1,
    ///     0x80, 0xb4, 0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8,
    /// ];
    /// assert_eq!(Uuid::from_slice(&bytes)?, rfc4122::NAMESPACE_DNS);
    /// assert!(Uuid::from_slice(&bytes[..15]).is_err());
    /// # Ok::<(), rfc4122::LengthError>(())
    /// ```
    pub fn from_slice(bytes: &[u8]) -> Result<Self, LengthError> {
        <[u8; 16]>::try_from(bytes)
            .map(Self)
            .map_err(|_| LengthError::new(bytes.len()))
    }

    /// Same as [`Uuid::from_slice()`], but returns the Nil UUID if the slice is not exactly 16
    /// bytes long.
    pub fn from_slice_or_nil(bytes: &[u8]) -> Self {
        Self::from_slice(bytes).unwrap_or(Self::NIL)
    }

    /// Returns true if every bit of this UUID is zero.
    pub const fn is_nil(&self) -> bool {
        self.as_u128() == 0
    }

    /// Returns the version number stored in the high nibble of byte 6.
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Returns the layout variant stored in the most significant bits of byte 8.
    pub const fn variant(&self) -> Variant {
        match self.0[8] >> 5 {
            0b000..=0b011 => Variant::Ncs,
            0b100 | 0b101 => Variant::Rfc4122,
            0b110 => Variant::Microsoft,
            _ => Variant::Future,
        }
    }

    /// Overwrites the version nibble with the lower four bits of `version`.
    pub fn set_version(&mut self, version: u8) {
        self.0[6] = (self.0[6] & 0x0f) | (version << 4);
    }

    /// Overwrites the variant bits with the RFC 4122 pattern `10`.
    pub fn set_variant(&mut self) {
        self.0[8] = (self.0[8] & 0x3f) | 0x80;
    }

    /// Creates a version 1 UUID from a 60-bit count of 100-nanosecond intervals since
    /// 1582-10-15, a clock sequence, and a node address.
    ///
    /// Bits above the field widths (60 for `timestamp` and 14 for `clock_seq`) are discarded.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::Uuid;
    ///
    /// let node = [0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8];
    /// let e = Uuid::from_fields_v1(0x1d1_9dad_6ba7_b810, 0xb4, node);
    /// assert_eq!(e.to_string(), "6ba7b810-9dad-11d1-80b4-00c04fd430c8");
    /// ```
    pub const fn from_fields_v1(timestamp: u64, clock_seq: u16, node: [u8; 6]) -> Self {
        Self([
            (timestamp >> 24) as u8,
            (timestamp >> 16) as u8,
            (timestamp >> 8) as u8,
            timestamp as u8,
            (timestamp >> 40) as u8,
            (timestamp >> 32) as u8,
            0x10 | ((timestamp >> 56) as u8 & 0x0f),
            (timestamp >> 48) as u8,
            0x80 | ((clock_seq >> 8) as u8 & 0x3f),
            clock_seq as u8,
            node[0],
            node[1],
            node[2],
            node[3],
            node[4],
            node[5],
        ])
    }

    /// Creates a version 2 (DCE security) UUID.
    ///
    /// The layout is that of version 1 except that the low 32 bits of the timestamp are replaced
    /// by `local_id` and the low byte of the clock sequence by `domain`.
    pub const fn from_fields_v2(
        local_id: u32,
        domain: Domain,
        timestamp: u64,
        clock_seq: u16,
        node: [u8; 6],
    ) -> Self {
        Self([
            (local_id >> 24) as u8,
            (local_id >> 16) as u8,
            (local_id >> 8) as u8,
            local_id as u8,
            (timestamp >> 40) as u8,
            (timestamp >> 32) as u8,
            0x20 | ((timestamp >> 56) as u8 & 0x0f),
            (timestamp >> 48) as u8,
            0x80 | ((clock_seq >> 8) as u8 & 0x3f),
            domain as u8,
            node[0],
            node[1],
            node[2],
            node[3],
            node[4],
            node[5],
        ])
    }

    /// Creates a version 6 UUID from Unix time in seconds and 11 random bytes.
    ///
    /// The lower 40 bits of `unix_ts` fill the first five bytes, which covers dates up to the year
    /// 10680. Six of the random bits are overwritten by the version and variant.
    pub const fn from_fields_v6(unix_ts: u64, random: [u8; 11]) -> Self {
        Self([
            (unix_ts >> 32) as u8,
            (unix_ts >> 24) as u8,
            (unix_ts >> 16) as u8,
            (unix_ts >> 8) as u8,
            unix_ts as u8,
            random[0],
            0x60 | (random[1] & 0x0f),
            random[2],
            0x80 | (random[3] & 0x3f),
            random[4],
            random[5],
            random[6],
            random[7],
            random[8],
            random[9],
            random[10],
        ])
    }

    /// Returns the creation time encoded in a version 1 or version 6 UUID.
    ///
    /// Version 1 UUIDs carry 100-nanosecond precision and version 6 UUIDs carry second precision.
    /// Returns `None` for the other versions and for times the platform cannot represent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::time::{Duration, UNIX_EPOCH};
    ///
    /// let t = UNIX_EPOCH + Duration::from_secs(1_700_000_000);
    /// assert_eq!(rfc4122::new_time(t).timestamp(), Some(t));
    /// assert_eq!(rfc4122::new_v4().timestamp(), None);
    /// ```
    pub fn timestamp(&self) -> Option<time::SystemTime> {
        let b = &self.0;
        match self.version() {
            1 => {
                let ticks = (u64::from(b[6] & 0x0f) << 56)
                    | (u64::from(b[7]) << 48)
                    | (u64::from(u16::from_be_bytes([b[4], b[5]])) << 32)
                    | u64::from(u32::from_be_bytes([b[0], b[1], b[2], b[3]]));
                let span = |t: u64| {
                    time::Duration::new(t / 10_000_000, (t % 10_000_000) as u32 * 100)
                };
                if ticks >= GREGORIAN_OFFSET {
                    time::UNIX_EPOCH.checked_add(span(ticks - GREGORIAN_OFFSET))
                } else {
                    time::UNIX_EPOCH.checked_sub(span(GREGORIAN_OFFSET - ticks))
                }
            }
            6 => {
                let unix_ts = u64::from_be_bytes([0, 0, 0, b[0], b[1], b[2], b[3], b[4]]);
                time::UNIX_EPOCH.checked_add(time::Duration::from_secs(unix_ts))
            }
            _ => None,
        }
    }
}

impl ops::BitAnd for Uuid {
    type Output = Self;

    /// Returns the bitwise AND of two UUIDs, as used to mask a UUID against another.
    fn bitand(self, rhs: Self) -> Self::Output {
        Self::from_u128(self.as_u128() & rhs.as_u128())
    }
}

impl ops::BitOr for Uuid {
    type Output = Self;

    /// Returns the bitwise OR of two UUIDs.
    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_u128(self.as_u128() | rhs.as_u128())
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = LengthError;

    fn try_from(src: &[u8]) -> Result<Self, Self::Error> {
        Self::from_slice(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        src.as_u128()
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self::from_u128(src)
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;

        /// Converts to and from uuid crate losslessly
        #[test]
        fn converts_to_and_from_uuid_crate_losslessly() {
            let e = crate::NAMESPACE_URL;
            let theirs = uuid::Uuid::from(e);
            assert_eq!(theirs.to_string(), e.to_string());
            assert_eq!(theirs.as_bytes(), e.as_bytes());
            assert_eq!(Uuid::from(theirs), e);
            assert_eq!(theirs.get_version_num(), 1);
        }
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::Uuid;
    use serde::{de, Deserializer, Serializer};
    use std::fmt;

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Uuid::parse_str(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            if value.len() == 16 {
                Uuid::from_slice(value).map_err(de::Error::custom)
            } else {
                Uuid::parse_ascii(value).map_err(de::Error::custom)
            }
        }
    }

}

#[cfg(test)]
mod tests {
    use super::{Domain, Uuid, Variant};
    use std::time::{Duration, UNIX_EPOCH};

    /// Returns a collection of prepared cases
    fn prepare_cases() -> &'static [Uuid] {
        const CASES: &[Uuid] = &[
            Uuid::NIL,
            Uuid::MAX,
            crate::NAMESPACE_DNS,
            crate::NAMESPACE_X500,
            Uuid::from_u128(0x017f22e2_79b0_7cc3_98c4_dc0c0c07398f),
            Uuid::from_u128(0xe6fe0a93_4482_c9f5_0734_b0cf6a1e3cb7),
        ];
        CASES
    }

    /// Classifies every possible byte 8 by the RFC 4122 variant table
    #[test]
    fn classifies_every_possible_byte_8_by_the_rfc_4122_variant_table() {
        for b in 0..=u8::MAX {
            let mut bytes = [0u8; 16];
            bytes[8] = b;
            let expected = if b & 0x80 == 0 {
                Variant::Ncs
            } else if b & 0x40 == 0 {
                Variant::Rfc4122
            } else if b & 0x20 == 0 {
                Variant::Microsoft
            } else {
                Variant::Future
            };
            assert_eq!(Uuid::from(bytes).variant(), expected, "byte 8: {b:#04x}");
        }

        let at = |b: u8| {
            let mut bytes = [0u8; 16];
            bytes[8] = b;
            Uuid::from(bytes).variant()
        };
        assert_eq!(at(0x7f), Variant::Ncs);
        assert_eq!(at(0x80), Variant::Rfc4122);
        assert_eq!(at(0xbf), Variant::Rfc4122);
        assert_eq!(at(0xc0), Variant::Microsoft);
        assert_eq!(at(0xdf), Variant::Microsoft);
        assert_eq!(at(0xe0), Variant::Future);
    }

    /// Sets version and variant bits without touching others
    #[test]
    fn sets_version_and_variant_bits_without_touching_others() {
        for e in prepare_cases() {
            for v in 1..=6 {
                let mut x = *e;
                x.set_version(v);
                x.set_variant();
                assert_eq!(x.version(), v);
                assert_eq!(x.variant(), Variant::Rfc4122);

                let mask = Uuid::from_u128(!0x0000_0000_0000_f000_c000_0000_0000_0000);
                assert_eq!(x & mask, *e & mask);
            }
        }

        let mut x = Uuid::MAX;
        x.set_version(0x14);
        assert_eq!(x.version(), 4);
    }

    /// Applies bitwise operators byte by byte
    #[test]
    fn applies_bitwise_operators_byte_by_byte() {
        for &e in prepare_cases() {
            assert_eq!(e & e, e);
            assert_eq!(e | e, e);
            assert_eq!(e | Uuid::NIL, e);
            assert_eq!(e & Uuid::NIL, Uuid::NIL);
            assert_eq!(e & Uuid::MAX, e);
            assert_eq!(e | Uuid::MAX, Uuid::MAX);
        }

        let a = Uuid::from([0xf0; 16]);
        let b = Uuid::from([0x3c; 16]);
        assert_eq!(a & b, Uuid::from([0x30; 16]));
        assert_eq!(a | b, Uuid::from([0xfc; 16]));
    }

    /// Tells Nil from other values
    #[test]
    fn tells_nil_from_other_values() {
        assert!(Uuid::NIL.is_nil());
        assert!(Uuid::default().is_nil());
        assert!(!Uuid::MAX.is_nil());
        let mut bytes = [0u8; 16];
        bytes[15] = 1;
        assert!(!Uuid::from(bytes).is_nil());
    }

    /// Rejects byte slices of wrong length
    #[test]
    fn rejects_byte_slices_of_wrong_length() {
        let bytes = [0xa5u8; 17];
        for len in [0, 15, 17] {
            let err = Uuid::from_slice(&bytes[..len]).unwrap_err();
            assert_eq!(err.actual_len(), len);
            assert_eq!(Uuid::from_slice_or_nil(&bytes[..len]), Uuid::NIL);
        }
        assert_eq!(Uuid::from_slice(&bytes[..16]), Ok(Uuid::from([0xa5; 16])));
        assert_eq!(Uuid::from_slice_or_nil(&bytes[1..]), Uuid::from([0xa5; 16]));
    }

    /// Has symmetric converters
    #[test]
    fn has_symmetric_converters() {
        for &e in prepare_cases() {
            assert_eq!(Uuid::from(<[u8; 16]>::from(e)), e);
            assert_eq!(Uuid::from(u128::from(e)), e);
            assert_eq!(Uuid::from_bytes(e.to_bytes()), e);
            assert_eq!(Uuid::try_from(e.as_ref()), Ok(e));
            assert_eq!(Uuid::from_slice(e.as_bytes()), Ok(e));
        }
    }

    /// Orders by unsigned bytes from left to right
    #[test]
    fn orders_by_unsigned_bytes_from_left_to_right() {
        let mut sorted = prepare_cases().to_vec();
        sorted.sort();
        for w in sorted.windows(2) {
            assert!(w[0].as_bytes() < w[1].as_bytes());
            assert!(w[0].as_u128() < w[1].as_u128());
        }
        assert_eq!(sorted.first(), Some(&Uuid::NIL));
        assert_eq!(sorted.last(), Some(&Uuid::MAX));

        let mut lo = [0u8; 16];
        lo[0] = 0x7f;
        let mut hi = [0u8; 16];
        hi[0] = 0x80;
        assert!(Uuid::from(lo) < Uuid::from(hi));
    }

    /// Lays out version 1 fields
    #[test]
    fn lays_out_version_1_fields() {
        let node = [0x00, 0xc0, 0x4f, 0xd4, 0x30, 0xc8];
        let e = Uuid::from_fields_v1(0x1d1_9dad_6ba7_b810, 0x00b4, node);
        assert_eq!(e, crate::NAMESPACE_DNS);
        assert_eq!(e.version(), 1);
        assert_eq!(e.variant(), Variant::Rfc4122);

        let e = Uuid::from_fields_v1(u64::MAX, u16::MAX, [0xff; 6]);
        assert_eq!(e, Uuid::from_u128(0xffffffff_ffff_1fff_bfff_ffffffffffff));
    }

    /// Lays out version 2 fields
    #[test]
    fn lays_out_version_2_fields() {
        let node = [1, 2, 3, 4, 5, 6];
        let e = Uuid::from_fields_v2(1000, Domain::Group, 0x1d1_9dad_6ba7_b810, 0x3fff, node);
        assert_eq!(&e.as_bytes()[..4], &1000u32.to_be_bytes());
        assert_eq!(&e.as_bytes()[4..8], &[0x9d, 0xad, 0x21, 0xd1]);
        assert_eq!(e.as_bytes()[8], 0xbf);
        assert_eq!(e.as_bytes()[9], 1);
        assert_eq!(&e.as_bytes()[10..], &node);
        assert_eq!(e.version(), 2);
        assert_eq!(e.variant(), Variant::Rfc4122);
    }

    /// Lays out version 6 fields
    #[test]
    fn lays_out_version_6_fields() {
        let e = Uuid::from_fields_v6(0x01_2345_6789, [0xff; 11]);
        assert_eq!(e, Uuid::from_u128(0x01234567_89ff_6fff_bfff_ffffffffffff));
        let e = Uuid::from_fields_v6(0xab_0123_4567_89, [0; 11]);
        assert_eq!(e, Uuid::from_u128(0x01234567_8900_6000_8000_000000000000));
    }

    /// Decodes embedded timestamps
    #[test]
    fn decodes_embedded_timestamps() {
        let t = UNIX_EPOCH + Duration::new(1_700_000_000, 123_456_700);
        let ticks = super::GREGORIAN_OFFSET + 17_000_000_001_234_567;
        let e = Uuid::from_fields_v1(ticks, 0, [0; 6]);
        assert_eq!(e.timestamp(), Some(t));

        let before_unix = Uuid::from_fields_v1(super::GREGORIAN_OFFSET - 10_000_000, 0, [0; 6]);
        assert_eq!(before_unix.timestamp(), UNIX_EPOCH.checked_sub(Duration::from_secs(1)));

        let e = Uuid::from_fields_v6(1_700_000_000, [0x5a; 11]);
        assert_eq!(e.timestamp(), Some(UNIX_EPOCH + Duration::from_secs(1_700_000_000)));

        let e = Uuid::from_fields_v2(0, Domain::Person, ticks, 0, [0; 6]);
        assert_eq!(e.timestamp(), None);
        assert_eq!(Uuid::NIL.timestamp(), None);
    }
}
