//! Random sources for serials
//!
//! The encoder itself never draws randomness; the facade takes a
//! [`SerialSource`] so tests can plug in a deterministic one.

use std::ops::Range;

/// A source of serials drawn uniformly from a half-open range
///
/// Implementations may assume `range` is non-empty and must return a value
/// inside it.
///
/// # Example
/// ```
/// use dateserial::SerialSource;
///
/// struct FixedSerial;
/// impl SerialSource for FixedSerial {
///     fn serial_in(&self, range: std::ops::Range<i64>) -> i64 {
///         range.start
///     }
/// }
///
/// assert_eq!(FixedSerial.serial_in(1..999), 1);
/// ```
pub trait SerialSource {
    /// Returns a serial in `range`.
    fn serial_in(&self, range: Range<i64>) -> i64;
}

impl<F> SerialSource for F
where
    F: Fn(Range<i64>) -> i64,
{
    fn serial_in(&self, range: Range<i64>) -> i64 {
        self(range)
    }
}

#[cfg(feature = "rand")]
pub use self::random::{SharedRandom, ThreadRandom};

#[cfg(feature = "rand")]
mod random {
    use std::ops::Range;
    use std::sync::{Mutex, PoisonError};

    use rand::{rng, Rng};

    use super::SerialSource;

    /// A `SerialSource` backed by the thread-local RNG (`rand::rng()`).
    ///
    /// The type holds no RNG state, so it is `Send + Sync` and can be shared
    /// across threads without contention.
    #[derive(Default, Clone, Copy, Debug)]
    pub struct ThreadRandom;

    impl SerialSource for ThreadRandom {
        fn serial_in(&self, range: Range<i64>) -> i64 {
            rng().random_range(range)
        }
    }

    /// A `SerialSource` around a single caller-provided RNG, e.g. a seeded `StdRng`
    ///
    /// Draws are serialized through a mutex, so one seeded generator can be
    /// shared between threads.
    #[derive(Debug, Default)]
    pub struct SharedRandom<R> {
        rng: Mutex<R>,
    }

    impl<R: Rng> SharedRandom<R> {
        pub fn new(rng: R) -> Self {
            Self {
                rng: Mutex::new(rng),
            }
        }

        /// Consume the source and return the wrapped RNG
        pub fn into_inner(self) -> R {
            self.rng.into_inner().unwrap_or_else(PoisonError::into_inner)
        }
    }

    impl<R: Rng> SerialSource for SharedRandom<R> {
        fn serial_in(&self, range: Range<i64>) -> i64 {
            self.rng
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .random_range(range)
        }
    }
}
