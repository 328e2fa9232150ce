//! Canonical string representation and the parser of textual forms

use std::{fmt, str};

use crate::{ParseError, ParseErrorKind, Uuid};

/// Prefix of the URN form (RFC 4122 section 3).
const URN_PREFIX: &[u8] = b"urn:uuid:";

/// Widths, in hexadecimal digits, of the five hyphen-separated groups.
const GROUP_WIDTHS: [usize; 5] = [8, 4, 4, 4, 12];

impl Uuid {
    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type that can be dereferenced as `str` and [`Display`](fmt::Display)ed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// let x = rfc4122::Uuid::parse_str("{6BA7B811-9DAD-11D1-80B4-00C04FD430C8}")?;
    /// let y = x.encode();
    /// assert_eq!(&y as &str, "6ba7b811-9dad-11d1-80b4-00c04fd430c8");
    /// assert_eq!(format!("{}", y), "6ba7b811-9dad-11d1-80b4-00c04fd430c8");
    /// # Ok::<(), rfc4122::ParseError>(())
    /// ```
    pub fn encode(&self) -> fstr::FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [0u8; 36];
        let mut buf_iter = buffer.iter_mut();
        for (i, &e) in self.as_bytes().iter().enumerate() {
            for digit in [DIGITS[(e >> 4) as usize], DIGITS[(e & 15) as usize]] {
                if let Some(slot) = buf_iter.next() {
                    *slot = digit;
                }
            }
            if i == 3 || i == 5 || i == 7 || i == 9 {
                if let Some(slot) = buf_iter.next() {
                    *slot = b'-';
                }
            }
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer only contains ASCII hexadecimal digits and hyphens.
        unsafe { fstr::FStr::from_inner_unchecked(buffer) }
    }

    /// Parses one of the accepted textual forms.
    ///
    /// The following forms are accepted, with hexadecimal digits in either case:
    ///
    /// - `6ba7b810-9dad-11d1-80b4-00c04fd430c8`
    /// - `{6ba7b810-9dad-11d1-80b4-00c04fd430c8}`
    /// - `urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rfc4122::{ParseErrorKind, Uuid};
    ///
    /// let a = Uuid::parse_str("6ba7b810-9dad-11d1-80b4-00c04fd430c8")?;
    /// let b = Uuid::parse_str("urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8")?;
    /// assert_eq!(a, b);
    ///
    /// let err = Uuid::parse_str("6ba7b8109dad-11d1-80b4-00c04fd430c8").unwrap_err();
    /// assert_eq!(err.kind(), &ParseErrorKind::InvalidSeparator { index: 8 });
    /// # Ok::<(), rfc4122::ParseError>(())
    /// ```
    pub fn parse_str(src: &str) -> Result<Self, ParseError> {
        Self::parse_ascii(src.as_bytes())
    }

    /// Same as [`Uuid::parse_str()`], but takes the text as a byte slice.
    pub fn parse_ascii(src: &[u8]) -> Result<Self, ParseError> {
        let err = |kind| ParseError::new(kind, src);

        if src.len() < 32 {
            return Err(err(ParseErrorKind::TooShort));
        }
        if src.len() > 45 {
            return Err(err(ParseErrorKind::TooLong));
        }

        let (mut pos, braced) = if src.starts_with(URN_PREFIX) {
            (URN_PREFIX.len(), false)
        } else if src.first() == Some(&b'{') {
            (1, true)
        } else {
            (0, false)
        };

        let mut dst = [0u8; 16];
        let mut dst_iter = dst.iter_mut();
        for (i, width) in GROUP_WIDTHS.into_iter().enumerate() {
            if i > 0 {
                match src.get(pos) {
                    Some(b'-') => pos += 1,
                    Some(_) => return Err(err(ParseErrorKind::InvalidSeparator { index: pos })),
                    None => return Err(err(ParseErrorKind::TooShort)),
                }
            }

            let group = src
                .get(pos..pos + width)
                .ok_or_else(|| err(ParseErrorKind::TooShort))?;
            for (j, pair) in group.chunks_exact(2).enumerate() {
                let index = pos + j * 2;
                let hi = decode_hex_digit(pair[0]).ok_or_else(|| {
                    err(ParseErrorKind::InvalidHexDigit {
                        index,
                        found: char::from(pair[0]),
                    })
                })?;
                let lo = decode_hex_digit(pair[1]).ok_or_else(|| {
                    err(ParseErrorKind::InvalidHexDigit {
                        index: index + 1,
                        found: char::from(pair[1]),
                    })
                })?;
                if let Some(e) = dst_iter.next() {
                    *e = (hi << 4) | lo;
                }
            }
            pos += width;
        }

        match (braced, &src[pos..]) {
            (false, []) | (true, [b'}']) => Ok(Self::from(dst)),
            (true, []) => Err(err(ParseErrorKind::MissingClosingBrace)),
            _ => Err(err(ParseErrorKind::TooLong)),
        }
    }

    /// Same as [`Uuid::parse_str()`], but returns the Nil UUID if the input is invalid.
    pub fn parse_or_nil(src: &str) -> Self {
        Self::parse_str(src).unwrap_or(Self::NIL)
    }
}

/// Decodes an ASCII hexadecimal digit in either case.
const fn decode_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = ParseError;

    /// Creates an object from one of the forms accepted by [`Uuid::parse_str()`].
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        Self::parse_str(src)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = ParseError;

    fn try_from(src: &str) -> Result<Self, Self::Error> {
        Self::parse_str(src)
    }
}

impl TryFrom<String> for Uuid {
    type Error = ParseError;

    fn try_from(src: String) -> Result<Self, Self::Error> {
        Self::parse_str(&src)
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}
