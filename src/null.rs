use crate::Uuid;

/// Represents a UUID that may be absent, as stored in a nullable database column.
///
/// An absent value is distinct from the Nil UUID: `NullUuid::NULL` has `valid` cleared, while
/// `NullUuid::from(Uuid::NIL)` is a present value that happens to be all zeros.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{NullUuid, Uuid};
///
/// let absent = NullUuid::NULL;
/// let nil = NullUuid::from(Uuid::NIL);
/// assert_ne!(absent, nil);
/// assert_eq!(absent.into_option(), None);
/// assert_eq!(nil.into_option(), Some(Uuid::NIL));
/// ```
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct NullUuid {
    /// The stored value, meaningful only if `valid` is set.
    pub uuid: Uuid,

    /// Whether a value is present.
    pub valid: bool,
}

impl NullUuid {
    /// Absent value.
    pub const NULL: Self = Self {
        uuid: Uuid::NIL,
        valid: false,
    };

    /// Creates a present value.
    pub const fn new(uuid: Uuid) -> Self {
        Self { uuid, valid: true }
    }

    /// Returns the value if present.
    pub const fn into_option(self) -> Option<Uuid> {
        if self.valid {
            Some(self.uuid)
        } else {
            None
        }
    }
}

impl From<Uuid> for NullUuid {
    fn from(src: Uuid) -> Self {
        Self::new(src)
    }
}

impl From<Option<Uuid>> for NullUuid {
    fn from(src: Option<Uuid>) -> Self {
        src.map_or(Self::NULL, Self::new)
    }
}

impl From<NullUuid> for Option<Uuid> {
    fn from(src: NullUuid) -> Self {
        src.into_option()
    }
}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::NullUuid;
    use crate::Uuid;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for NullUuid {
        /// Serializes an absent value as none and a present one as some UUID.
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            self.into_option().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for NullUuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Option::<Uuid>::deserialize(deserializer).map(Self::from)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::NullUuid;
    use crate::Uuid;

    /// Keeps absent and Nil values apart
    #[test]
    fn keeps_absent_and_nil_values_apart() {
        assert_eq!(NullUuid::default(), NullUuid::NULL);
        assert!(!NullUuid::NULL.valid);
        assert!(NullUuid::from(Uuid::NIL).valid);
        assert_ne!(NullUuid::NULL, NullUuid::from(Uuid::NIL));
    }

    /// Converts to and from options
    #[test]
    fn converts_to_and_from_options() {
        let e = crate::NAMESPACE_OID;
        assert_eq!(NullUuid::from(Some(e)), NullUuid::new(e));
        assert_eq!(NullUuid::from(None), NullUuid::NULL);
        assert_eq!(Option::<Uuid>::from(NullUuid::new(e)), Some(e));
        assert_eq!(Option::<Uuid>::from(NullUuid::NULL), None);
    }
}
