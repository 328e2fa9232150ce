//! Process-wide generator and entry point functions.

use std::{sync, time};

use crate::generator::{random_v4, random_v6, with_rand08::Adapter};
use crate::{Domain, Uuid};
use inner::GlobalGenInner;
use rand::rngs::OsRng;

/// Returns the lock handle of process-wide global generator, creating one if none exists.
///
/// The clock sequence and node address are set up by whichever caller gets here first; the
/// others wait for that to finish.
fn lock_global_gen() -> sync::MutexGuard<'static, GlobalGenInner> {
    static G: sync::OnceLock<sync::Mutex<GlobalGenInner>> = sync::OnceLock::new();
    G.get_or_init(Default::default)
        .lock()
        .unwrap_or_else(sync::PoisonError::into_inner)
}

/// Generates a UUIDv1 object from the current timestamp and the node address.
///
/// This function employs a process-wide generator, so UUIDs generated by different threads within
/// the same clock tick still differ in their clock sequence. The node address is the hardware
/// address of a network interface, or a random one with the multicast bit set if none is found.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::new_v1();
/// println!("{}", uuid); // e.g., "c232ab00-9414-11ec-b3c8-9f6bdeced846"
/// assert_eq!(uuid.version(), 1);
/// ```
pub fn new_v1() -> Uuid {
    lock_global_gen().get_mut().generate_v1()
}

/// Generates a UUIDv2 (DCE security) object that embeds the POSIX user ID (for
/// [`Domain::Person`]) or group ID (for [`Domain::Group`]) of the current process.
///
/// The local identifier is zero for [`Domain::Org`] and on platforms without POSIX IDs.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{new_v2, Domain};
///
/// let uuid = new_v2(Domain::Person);
/// assert_eq!(uuid.version(), 2);
/// assert_eq!(uuid.as_bytes()[9], 0);
/// ```
pub fn new_v2(domain: Domain) -> Uuid {
    let local_id = posix::local_id(domain);
    lock_global_gen().get_mut().generate_v2(domain, local_id)
}

/// Generates a UUIDv4 object from the operating system's secure random number generator.
///
/// # Panics
///
/// Panics if the operating system cannot provide random bytes.
///
/// # Examples
///
/// ```rust
/// let uuid = rfc4122::new_v4();
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
/// ```
pub fn new_v4() -> Uuid {
    random_v4(&mut Adapter(OsRng))
}

/// Generates a UUIDv6 object from the current time.
///
/// The first 40 bits hold the Unix time in seconds and the remaining bits, apart from the
/// version and variant, come from the operating system's secure random number generator.
///
/// # Panics
///
/// Panics if the operating system cannot provide random bytes.
pub fn new_v6() -> Uuid {
    new_time(time::SystemTime::now())
}

/// Generates a UUIDv6 object from the specified time.
///
/// Times before the Unix epoch wrap around within the 40-bit field.
///
/// # Panics
///
/// Panics if the operating system cannot provide random bytes.
///
/// # Examples
///
/// ```rust
/// use std::time::{Duration, UNIX_EPOCH};
///
/// let uuid = rfc4122::new_time(UNIX_EPOCH + Duration::from_secs(0x01_2345_6789));
/// assert!(uuid.to_string().starts_with("01234567-89"));
/// ```
pub fn new_time(t: time::SystemTime) -> Uuid {
    let unix_ts = match t.duration_since(time::UNIX_EPOCH) {
        Ok(d) => d.as_secs(),
        Err(err) => {
            let d = err.duration();
            (d.as_secs() + u64::from(d.subsec_nanos() > 0)).wrapping_neg()
        }
    };
    random_v6(&mut Adapter(OsRng), unix_ts)
}

mod inner {
    use rand::rngs::OsRng;

    use crate::generator::{with_rand08::Adapter, Generator, StdSystemTime};

    /// The type alias for the generator behind the process-wide entry points.
    pub type GlobalGenerator = Generator<Adapter<OsRng>, StdSystemTime>;

    /// A thin wrapper to reset the state when the process ID changes (i.e., upon Unix forks).
    #[derive(Debug)]
    pub struct GlobalGenInner {
        #[cfg(unix)]
        pid: u32,
        generator: GlobalGenerator,
    }

    impl Default for GlobalGenInner {
        fn default() -> Self {
            let generator = Generator::with_rand08(OsRng, StdSystemTime);
            tracing::debug!(
                node = ?generator.node(),
                clock_seq = generator.clock_seq(),
                "initialized process-wide UUID generator"
            );
            Self {
                #[cfg(unix)]
                pid: std::process::id(),
                generator,
            }
        }
    }

    impl GlobalGenInner {
        /// Returns a mutable reference to the inner [`Generator`] instance, resetting the
        /// generator state on Unix if the process ID has changed.
        pub fn get_mut(&mut self) -> &mut GlobalGenerator {
            #[cfg(unix)]
            if self.pid != std::process::id() {
                tracing::debug!(
                    parent = self.pid,
                    "process ID changed; resetting process-wide UUID generator"
                );
                *self = Default::default();
            }
            &mut self.generator
        }
    }
}

#[cfg(unix)]
mod posix {
    use crate::Domain;
    use nix::unistd;

    /// Returns the POSIX ID that belongs to `domain`.
    pub fn local_id(domain: Domain) -> u32 {
        match domain {
            Domain::Person => unistd::getuid().as_raw(),
            Domain::Group => unistd::getgid().as_raw(),
            Domain::Org => 0,
        }
    }
}

#[cfg(not(unix))]
mod posix {
    use crate::Domain;

    pub const fn local_id(_: Domain) -> u32 {
        0
    }
}


#[cfg(test)]
mod tests_v2 {
    use super::new_v2;
    use crate::{Domain, Variant};

    /// Embeds domain and POSIX IDs
    #[test]
    fn embeds_domain_and_posix_ids() {
        for (domain, raw) in [(Domain::Person, 0), (Domain::Group, 1), (Domain::Org, 2)] {
            let e = new_v2(domain);
            assert_eq!(e.version(), 2);
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert_eq!(e.as_bytes()[9], raw);
            assert!(!e.is_nil());
            let b = e.as_bytes();
            assert_eq!(
                u32::from_be_bytes([b[0], b[1], b[2], b[3]]),
                super::posix::local_id(domain)
            );
            assert!(e.timestamp().is_none());
        }
        assert_eq!(new_v2(Domain::Org).as_bytes()[..4], [0u8; 4]);

        #[cfg(unix)]
        assert_eq!(
            super::posix::local_id(Domain::Person),
            nix::unistd::getuid().as_raw()
        );
    }

    /// Shares node address with version 1
    #[test]
    fn shares_node_address_with_version_1() {
        let a = new_v2(Domain::Group);
        let b = super::new_v1();
        assert_eq!(a.as_bytes()[10..], b.as_bytes()[10..]);
    }
}


#[cfg(test)]
mod tests_v6 {
    use super::{new_time, new_v6};
    use crate::Variant;
    use std::time::{Duration, SystemTime, UNIX_EPOCH};

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-6[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        for _ in 0..10_000 {
            let e = new_v6();
            assert!(re.is_match(&e.to_string()));
            assert_eq!(e.variant(), Variant::Rfc4122);
            assert!(!e.is_nil());
        }
    }

    /// Encodes up-to-date timestamp in seconds
    #[test]
    fn encodes_up_to_date_timestamp_in_seconds() {
        let before = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock may have gone backwards")
            .as_secs();
        let ts = new_v6().timestamp().unwrap();
        let after = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock may have gone backwards")
            .as_secs();
        let secs = ts.duration_since(UNIX_EPOCH).unwrap().as_secs();
        assert!(before <= secs && secs <= after);
    }

    /// Embeds given time and random tail
    #[test]
    fn embeds_given_time_and_random_tail() {
        let t = UNIX_EPOCH + Duration::new(0x01_2345_6789, 999_999_999);
        let a = new_time(t);
        let b = new_time(t);
        assert_eq!(a.as_bytes()[..5], [0x01, 0x23, 0x45, 0x67, 0x89]);
        assert_eq!(a.as_bytes()[..5], b.as_bytes()[..5]);
        assert_ne!(a, b);
        assert_eq!(a.timestamp(), Some(UNIX_EPOCH + Duration::from_secs(0x01_2345_6789)));

        let max = UNIX_EPOCH + Duration::from_secs((1 << 40) - 1);
        assert_eq!(new_time(max).as_bytes()[..5], [0xff; 5]);
        let wrapped = UNIX_EPOCH + Duration::from_secs(1 << 40);
        assert_eq!(new_time(wrapped).as_bytes()[..5], [0x00; 5]);

        let before_epoch = UNIX_EPOCH - Duration::from_millis(500);
        assert_eq!(new_time(before_epoch).as_bytes()[..5], [0xff; 5]);
    }
}
