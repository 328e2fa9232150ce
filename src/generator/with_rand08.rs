//! Integration with `rand` (v0.8) crate.

use super::{Generator, RandSource, TimeSource};
use crate::EntropyUnavailable;
use rand::RngCore;

/// An adapter that implements [`RandSource`] for [`RngCore`] types.
///
/// The wrapped type should be a cryptographically secure generator such as
/// [`OsRng`](rand::rngs::OsRng).
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Adapter<T>(/** The wrapped [`RngCore`] type. */ pub T);

impl<T: RngCore> RandSource for Adapter<T> {
    fn try_fill(&mut self, dest: &mut [u8]) -> Result<(), EntropyUnavailable> {
        self.0.try_fill_bytes(dest).map_err(EntropyUnavailable)
    }
}

impl<T: RngCore, C: TimeSource> Generator<Adapter<T>, C> {
    /// Creates a generator object with a specified random number generator that implements
    /// [`RngCore`] from `rand` (v0.8) crate.
    ///
    /// # Panics
    ///
    /// Panics if `rng` fails to produce random bytes.
    pub fn with_rand08(rng: T, time: C) -> Self {
        Self::new(Adapter(rng), time)
    }
}
