//! RFC 4122 and DCE 1.1 UUIDs
//!
//! ```rust
//! use rfc4122::{new_v1, new_v4, new_v5, Uuid, NAMESPACE_DNS};
//!
//! let uuid = new_v4();
//! println!("{}", uuid); // e.g. "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let uuid = new_v5(&NAMESPACE_DNS, "www.example.com");
//! assert_eq!(uuid.to_string(), "2ed6657d-e927-568b-95e1-2665a8aea6a2");
//!
//! let uuid: Uuid = "urn:uuid:6ba7b810-9dad-11d1-80b4-00c04fd430c8".parse()?;
//! assert_eq!(uuid, NAMESPACE_DNS);
//! assert!(new_v1() != new_v1());
//! # Ok::<(), rfc4122::ParseError>(())
//! ```
//!
//! See [RFC 4122](https://www.rfc-editor.org/rfc/rfc4122) and
//! [DCE 1.1: Authentication and Security Services](https://pubs.opengroup.org/onlinepubs/9696989899/chap5.htm).
//!
//! # Field and bit layout
//!
//! Time-based UUIDs (versions 1 and 2) have the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          time_low                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |       time_mid                |  ver  |       time_hi         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|         clock_seq         |             node              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                              node                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 60-bit timestamp counts 100-nanosecond intervals since 1582-10-15 00:00:00 UTC. It is
//!   split into `time_low` (bits 0-31), `time_mid` (bits 32-47) and `time_hi` (bits 48-59).
//! - The 4-bit `ver` field holds the version number.
//! - The 2-bit `var` field is set at `10`.
//! - The 14-bit `clock_seq` field is randomly initialized once per process and incremented
//!   whenever the clock fails to advance between two generated UUIDs.
//! - The 48-bit `node` field carries the hardware address of a network interface, or a random
//!   address with the multicast bit set if none is available.
//!
//! Version 2 replaces `time_low` with a 32-bit local identifier (a POSIX UID or GID) and the low
//! byte of `clock_seq` with the [`Domain`] of that identifier.
//!
//! Version 6 produced by this library is time-prefixed rather than field-reordered:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |    unix_ts    |     rand      |  ver  |         rand          |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                         rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                             rand                              |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! - The 40-bit `unix_ts` field holds the big-endian Unix timestamp in seconds.
//! - The `ver` and `var` fields are set as in the other versions.
//! - The remaining bits are filled with a cryptographically strong random number.
//!
//! # Crate features
//!
//! - `serde`: serialization as a string in human-readable formats and as 16 bytes otherwise.
//! - `uuid`: conversions to and from [`uuid::Uuid`](https://docs.rs/uuid).
//! - `rusqlite`: `ToSql` and `FromSql` for [`Uuid`] and [`NullUuid`].
//! - `protobuf`: the [`custom_type`] marshaling interface.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{EntropyUnavailable, LengthError, ParseError, ParseErrorKind, ScanError};

mod id;
pub use id::{Domain, Uuid, Variant};

mod text;

mod name;
pub use name::{new_v3, new_v5, NAMESPACE_DNS, NAMESPACE_OID, NAMESPACE_URL, NAMESPACE_X500};

mod null;
pub use null::NullUuid;

mod sql;
pub use sql::{BindValue, ScanSource};

pub mod generator;
#[doc(no_inline)]
pub use generator::{Generator, RandSource, StdSystemTime, Tick, TimeSource};

mod global_gen;
pub use global_gen::{new_time, new_v1, new_v2, new_v4, new_v6};

#[cfg(feature = "protobuf")]
#[cfg_attr(docsrs, doc(cfg(feature = "protobuf")))]
pub mod custom_type;
