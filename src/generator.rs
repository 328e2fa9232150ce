//! Time-based UUID generator and related types.

use crate::{Domain, EntropyUnavailable, Uuid};

pub(crate) mod node;
pub mod with_rand08;

/// A trait that defines the random number source interface for [`Generator`].
///
/// Implementations must be cryptographically secure: the clock sequence, random node address,
/// and random UUID bits are all drawn from this source.
pub trait RandSource {
    /// Fills `dest` with random data, or fails if no secure random data is available.
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyUnavailable>;
}

/// A trait that defines the system clock interface for [`Generator`].
pub trait TimeSource {
    /// Returns the current count of 100-nanosecond intervals since 1582-10-15 00:00:00 UTC.
    fn epoch_ticks(&mut self) -> u64;
}

/// [`TimeSource`] implementation that reads the system clock.
#[derive(Clone, Copy, Eq, PartialEq, Debug, Default)]
pub struct StdSystemTime;

impl TimeSource for StdSystemTime {
    fn epoch_ticks(&mut self) -> u64 {
        use std::time;
        let to_ticks =
            |d: time::Duration| d.as_secs() * 10_000_000 + u64::from(d.subsec_nanos() / 100);
        match time::SystemTime::now().duration_since(time::UNIX_EPOCH) {
            Ok(d) => crate::id::GREGORIAN_OFFSET + to_ticks(d),
            Err(err) => crate::id::GREGORIAN_OFFSET.saturating_sub(to_ticks(err.duration())),
        }
    }
}

/// Fills `dest` from `rand`, panicking if the source has no secure random data to offer.
pub(crate) fn fill_or_abort<R: RandSource + ?Sized>(rand: &mut R, dest: &mut [u8]) {
    if let Err(err) = rand.try_fill(dest) {
        panic!("rfc4122: {err}");
    }
}

/// Creates a UUIDv4 object from 122 bits drawn from `rand`.
pub(crate) fn random_v4<R: RandSource + ?Sized>(rand: &mut R) -> Uuid {
    let mut bytes = [0u8; 16];
    fill_or_abort(rand, &mut bytes);
    let mut uuid = Uuid::from(bytes);
    uuid.set_version(4);
    uuid.set_variant();
    uuid
}

/// Converts 100-nanosecond intervals since 1582-10-15 to Unix time in whole seconds.
///
/// Times before the Unix epoch are floored and wrap around as two's complement.
pub(crate) const fn unix_secs(ticks: u64) -> u64 {
    let offset = crate::id::GREGORIAN_OFFSET;
    if ticks >= offset {
        (ticks - offset) / 10_000_000
    } else {
        ((offset - ticks + 9_999_999) / 10_000_000).wrapping_neg()
    }
}

/// Creates a UUIDv6 object from Unix time in seconds and bits drawn from `rand`.
pub(crate) fn random_v6<R: RandSource + ?Sized>(rand: &mut R, unix_ts: u64) -> Uuid {
    let mut random = [0u8; 11];
    fill_or_abort(rand, &mut random);
    Uuid::from_fields_v6(unix_ts, random)
}

/// Snapshot of the generator state taken by [`Generator::advance()`].
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct Tick {
    /// 100-nanosecond intervals since 1582-10-15.
    pub timestamp: u64,

    /// Clock sequence in effect for `timestamp`.
    pub clock_seq: u16,

    /// Node address.
    pub node: [u8; 6],
}

/// Represents a generator of time-based UUIDs that encapsulates the clock sequence, the last
/// timestamp read, and the node address.
///
/// Whenever the clock reading is not greater than the previous one (the clock ticked too slowly,
/// went backwards, or a snapshot was restored), the clock sequence is incremented so that the
/// new UUID differs from those already issued.
///
/// The generator is a plain value; sharing one between threads requires a lock. The following
/// example guarantees process-wide uniqueness of version 1 UUIDs using Rust's standard
/// synchronization mechanism, which is what [`new_v1()`](crate::new_v1) does internally.
///
/// # Examples
///
/// ```rust
/// use rand::rngs::OsRng;
/// use rfc4122::{Generator, StdSystemTime};
/// use std::{sync, thread};
///
/// let g = sync::Arc::new(sync::Mutex::new(Generator::with_rand08(OsRng, StdSystemTime)));
/// thread::scope(|s| {
///     for i in 0..4 {
///         let g = sync::Arc::clone(&g);
///         s.spawn(move || {
///             for _ in 0..8 {
///                 println!("{} by thread {}", g.lock().unwrap().generate_v1(), i);
///                 thread::yield_now();
///             }
///         });
///     }
/// });
/// ```
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Generator<R, T = StdSystemTime> {
    last_timestamp: u64,
    clock_seq: u16,
    node: [u8; 6],

    /// The random number source used by the generator.
    rand: R,

    /// The clock used by the generator.
    time: T,
}

impl<R: RandSource, T: TimeSource> Generator<R, T> {
    /// Creates a generator with a random clock sequence and the hardware address of a network
    /// interface as node address.
    ///
    /// If no network interface exposes a usable hardware address, a random node address with the
    /// multicast bit set is used instead so that it cannot collide with a real one.
    ///
    /// # Panics
    ///
    /// Panics if `rand` fails to produce random bytes.
    pub fn new(mut rand: R, time: T) -> Self {
        let node = match node::hardware_addr() {
            Some(addr) => {
                tracing::debug!(node = ?addr, "using hardware address as node");
                addr
            }
            None => {
                let addr = node::random_addr(&mut rand);
                tracing::debug!(node = ?addr, "no hardware address found; using random node");
                addr
            }
        };
        Self::with_node(rand, time, node)
    }

    /// Creates a generator with a random clock sequence and the specified node address.
    ///
    /// # Panics
    ///
    /// Panics if `rand` fails to produce random bytes.
    pub fn with_node(mut rand: R, time: T, node: [u8; 6]) -> Self {
        let mut seq = [0u8; 2];
        fill_or_abort(&mut rand, &mut seq);
        Self {
            last_timestamp: 0,
            clock_seq: u16::from_be_bytes(seq),
            node,
            rand,
            time,
        }
    }

    /// Returns the node address embedded in time-based UUIDs.
    pub const fn node(&self) -> [u8; 6] {
        self.node
    }

    /// Returns the current clock sequence.
    pub const fn clock_seq(&self) -> u16 {
        self.clock_seq
    }

    /// Reads the clock and returns the timestamp, clock sequence, and node address to embed in
    /// the next time-based UUID.
    ///
    /// The clock sequence is incremented if the reading is not greater than the previous one.
    pub fn advance(&mut self) -> Tick {
        let now = self.time.epoch_ticks();
        if now <= self.last_timestamp {
            self.clock_seq = self.clock_seq.wrapping_add(1);
            tracing::trace!(
                now,
                last = self.last_timestamp,
                clock_seq = self.clock_seq,
                "clock did not advance; incremented clock sequence"
            );
        }
        self.last_timestamp = now;

        Tick {
            timestamp: now,
            clock_seq: self.clock_seq,
            node: self.node,
        }
    }

    /// Generates a new UUIDv1 object from the current timestamp and the node address.
    pub fn generate_v1(&mut self) -> Uuid {
        let Tick {
            timestamp,
            clock_seq,
            node,
        } = self.advance();
        Uuid::from_fields_v1(timestamp, clock_seq, node)
    }

    /// Generates a new UUIDv2 (DCE security) object that embeds `local_id` under `domain`.
    pub fn generate_v2(&mut self, domain: Domain, local_id: u32) -> Uuid {
        let Tick {
            timestamp,
            clock_seq,
            node,
        } = self.advance();
        Uuid::from_fields_v2(local_id, domain, timestamp, clock_seq, node)
    }

    /// Generates a new UUIDv4 object utilizing the random number source inside.
    ///
    /// # Panics
    ///
    /// Panics if the random number source fails.
    pub fn generate_v4(&mut self) -> Uuid {
        random_v4(&mut self.rand)
    }

    /// Generates a new UUIDv6 object from the current Unix time in seconds and random bits.
    ///
    /// This does not touch the clock sequence.
    ///
    /// # Panics
    ///
    /// Panics if the random number source fails.
    pub fn generate_v6(&mut self) -> Uuid {
        let unix_ts = unix_secs(self.time.epoch_ticks());
        random_v6(&mut self.rand, unix_ts)
    }
}

/// Supports operations as an infinite iterator that produces a new UUIDv1 object for each call of
/// `next()`.
///
/// # Examples
///
/// ```rust
/// use rfc4122::{Generator, StdSystemTime};
///
/// Generator::with_rand08(rand::rngs::OsRng, StdSystemTime)
///     .enumerate()
///     .skip(4)
///     .take(4)
///     .for_each(|(i, e)| println!("[{}] {}", i, e));
/// ```
impl<R: RandSource, T: TimeSource> Iterator for Generator<R, T> {
    type Item = Uuid;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate_v1())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl<R: RandSource, T: TimeSource> std::iter::FusedIterator for Generator<R, T> {}
