//! Name-based UUIDs (versions 3 and 5) and the predefined namespaces

use md5::Md5;
use sha1::{Digest, Sha1};

use crate::Uuid;

/// Namespace for fully-qualified domain names (6ba7b810-9dad-11d1-80b4-00c04fd430c8)
pub const NAMESPACE_DNS: Uuid = Uuid::from_u128(0x6ba7b810_9dad_11d1_80b4_00c04fd430c8);

/// Namespace for URLs (6ba7b811-9dad-11d1-80b4-00c04fd430c8)
pub const NAMESPACE_URL: Uuid = Uuid::from_u128(0x6ba7b811_9dad_11d1_80b4_00c04fd430c8);

/// Namespace for ISO object identifiers (6ba7b812-9dad-11d1-80b4-00c04fd430c8)
pub const NAMESPACE_OID: Uuid = Uuid::from_u128(0x6ba7b812_9dad_11d1_80b4_00c04fd430c8);

/// Namespace for X.500 distinguished names (6ba7b814-9dad-11d1-80b4-00c04fd430c8)
pub const NAMESPACE_X500: Uuid = Uuid::from_u128(0x6ba7b814_9dad_11d1_80b4_00c04fd430c8);

/// Generates a UUIDv3 object from the MD5 hash of a namespace and a name.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{new_v3, NAMESPACE_DNS};
///
/// let uuid = new_v3(&NAMESPACE_DNS, "python.org");
/// assert_eq!(uuid.to_string(), "6fa459ea-ee8a-3ca4-894e-db77e160355e");
/// ```
pub fn new_v3(namespace: &Uuid, name: &str) -> Uuid {
    from_hash::<Md5>(namespace, name, 3)
}

/// Generates a UUIDv5 object from the SHA-1 hash of a namespace and a name.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{new_v5, NAMESPACE_DNS};
///
/// let uuid = new_v5(&NAMESPACE_DNS, "python.org");
/// assert_eq!(uuid.to_string(), "886313e1-3b8a-5372-9b90-0c9aee199e5d");
/// ```
pub fn new_v5(namespace: &Uuid, name: &str) -> Uuid {
    from_hash::<Sha1>(namespace, name, 5)
}

/// Hashes the namespace bytes followed by the UTF-8 name and keeps the first 16 bytes of the
/// digest.
fn from_hash<D: Digest>(namespace: &Uuid, name: &str, version: u8) -> Uuid {
    let digest = D::new()
        .chain_update(namespace.as_bytes())
        .chain_update(name.as_bytes())
        .finalize();

    let mut bytes = [0u8; 16];
    for (dst, src) in bytes.iter_mut().zip(digest.iter()) {
        *dst = *src;
    }

    let mut uuid = Uuid::from(bytes);
    uuid.set_version(version);
    uuid.set_variant();
    uuid
}
