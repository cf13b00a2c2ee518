/// A result type whose error defaults to [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// All error variants that `sleet` can emit.
///
/// Only [`Error::ClockRegression`] and [`Error::TimestampOverflow`] can occur
/// while generating IDs. The
/// `Invalid*` variants are configuration errors raised when a
/// [`SnowflakeLayout`] is built, and [`Error::LockPoisoned`] only exists for
/// the std-mutex flavour of [`LockSnowflakeGenerator`].
///
/// [`SnowflakeLayout`]: crate::SnowflakeLayout
/// [`LockSnowflakeGenerator`]: crate::LockSnowflakeGenerator
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// The clock moved backwards further than the generator tolerates, or a
    /// single call had to wait longer than the tolerance in total.
    ///
    /// `last_timestamp` is the Unix time (ms) of the last issued ID; no new ID
    /// can be issued until the clock passes it again.
    #[error(
        "clock moved backwards: last issued timestamp is {last_timestamp}ms, \
         refusing to wait more than {timeout_ms}ms"
    )]
    ClockRegression {
        /// Unix time in milliseconds of the most recently issued ID.
        last_timestamp: u64,
        /// The wait tolerance that was exceeded.
        timeout_ms: u64,
    },

    /// The clock is past the last millisecond the 41-bit timestamp field can
    /// hold for this epoch.
    ///
    /// Issuing an ID would wrap the timestamp back to zero and break ordering,
    /// so the generator refuses instead.
    #[error(
        "timestamp {relative_timestamp}ms past the epoch overflows the timestamp field (max {max}ms)"
    )]
    TimestampOverflow {
        /// Milliseconds since the epoch that were read from the clock.
        relative_timestamp: u64,
        /// The largest representable relative timestamp.
        max: u64,
    },

    /// The worker ID does not fit in its 5-bit field.
    #[error("worker id {worker_id} is out of range (max {max})")]
    InvalidWorkerId {
        /// The rejected worker ID.
        worker_id: u64,
        /// The largest accepted worker ID.
        max: u64,
    },

    /// The datacenter ID does not fit in its 5-bit field.
    #[error("datacenter id {datacenter_id} is out of range (max {max})")]
    InvalidDatacenterId {
        /// The rejected datacenter ID.
        datacenter_id: u64,
        /// The largest accepted datacenter ID.
        max: u64,
    },

    /// The epoch cannot be expressed as a `u64` count of milliseconds.
    #[error("epoch of {secs}s cannot be represented in milliseconds")]
    InvalidEpoch {
        /// The rejected epoch, in whole seconds since the Unix epoch.
        secs: u64,
    },

    /// The generator's lock was poisoned by a panicking thread.
    ///
    /// `parking_lot` mutexes do not poison, so this variant is absent when the
    /// `parking-lot` feature is enabled.
    #[cfg_attr(docsrs, doc(cfg(not(feature = "parking-lot"))))]
    #[cfg(not(feature = "parking-lot"))]
    #[error("generator lock poisoned")]
    LockPoisoned,
}

#[cfg(not(feature = "parking-lot"))]
use std::sync::{MutexGuard, PoisonError};
#[cfg(not(feature = "parking-lot"))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
