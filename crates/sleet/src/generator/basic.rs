use core::cell::Cell;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Poll, RandSource, Result, SnowflakeGenerator, SnowflakeLayout, SystemClock, ThreadRandom,
    TimeSource, generator::GeneratorState,
};

/// A non-concurrent Snowflake ID generator suitable for single-threaded
/// environments.
///
/// The last timestamp and sequence live in a [`Cell`], so this type is not
/// `Sync`: the compiler rejects sharing one instance between threads, which
/// would otherwise hand out duplicate IDs. Give each thread its own generator
/// (with its own worker ID) or use [`LockSnowflakeGenerator`].
///
/// ## Features
/// - ❌ Not thread-safe
/// - ✅ No locking on the hot path
///
/// ## Recommended When
/// - A single thread or task owns the generator
/// - You want the fastest generator
///
/// ## See Also
/// - [`LockSnowflakeGenerator`]
///
/// [`LockSnowflakeGenerator`]: crate::LockSnowflakeGenerator
pub struct BasicSnowflakeGenerator<T = SystemClock, R = ThreadRandom>
where
    T: TimeSource<u64>,
    R: RandSource<u64>,
{
    state: Cell<GeneratorState>,
    layout: SnowflakeLayout,
    time: T,
    rng: R,
}

impl BasicSnowflakeGenerator {
    /// Creates a generator for `layout` reading the system clock and seeding
    /// each millisecond's sequence from the thread-local RNG.
    ///
    /// # Example
    /// ```
    /// use core::time::Duration;
    /// use sleet::{BasicSnowflakeGenerator, SnowflakeGenerator, SnowflakeLayout};
    ///
    /// let layout = SnowflakeLayout::new(Duration::from_secs(1_649_980_800), 7, 2).unwrap();
    /// let generator = BasicSnowflakeGenerator::with_layout(layout);
    ///
    /// let id = generator.next_id().unwrap();
    /// assert_eq!(id.worker_id(), 7);
    /// assert_eq!(id.datacenter_id(), 2);
    /// ```
    pub fn with_layout(layout: SnowflakeLayout) -> Self {
        Self::new(layout, SystemClock, ThreadRandom)
    }
}

impl<T, R> BasicSnowflakeGenerator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<u64>,
{
    /// Creates a new [`BasicSnowflakeGenerator`] parked at the layout's epoch
    /// with sequence zero.
    ///
    /// # Parameters
    ///
    /// - `layout`: epoch, worker ID and datacenter ID encoded into every ID.
    /// - `time`: a [`TimeSource`] (e.g., [`SystemClock`]) read on every poll.
    /// - `rng`: a [`RandSource`] (e.g., [`ThreadRandom`]) that picks the first
    ///   sequence of each millisecond.
    ///
    /// [`SystemClock`]: crate::SystemClock
    /// [`ThreadRandom`]: crate::ThreadRandom
    pub fn new(layout: SnowflakeLayout, time: T, rng: R) -> Self {
        Self {
            state: Cell::new(GeneratorState::new(&layout)),
            layout,
            time,
            rng,
        }
    }

    /// Creates a generator that resumes from a previously issued timestamp
    /// (Unix millis) and sequence.
    ///
    /// Useful to restore state persisted across restarts, so the new process
    /// never issues IDs older than the old one did. A timestamp before the
    /// epoch is clamped to the epoch.
    pub fn from_components(
        layout: SnowflakeLayout,
        last_timestamp: u64,
        sequence: u64,
        time: T,
        rng: R,
    ) -> Self {
        Self {
            state: Cell::new(GeneratorState::from_components(
                &layout,
                last_timestamp,
                sequence,
            )),
            layout,
            time,
            rng,
        }
    }

    /// Unix time (ms) of the most recently issued ID, or the epoch if none has
    /// been issued.
    pub fn last_timestamp(&self) -> u64 {
        self.state.get().last_timestamp
    }
}

impl Default for BasicSnowflakeGenerator {
    fn default() -> Self {
        Self::with_layout(SnowflakeLayout::default())
    }
}

impl<T, R> SnowflakeGenerator for BasicSnowflakeGenerator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<u64>,
{
    fn layout(&self) -> &SnowflakeLayout {
        &self.layout
    }

    fn timestamp(&self) -> u64 {
        self.time.current_millis()
    }

    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    fn poll_id(&self) -> Result<Poll> {
        let now = self.time.current_millis();
        let mut state = self.state.get();
        let poll = state.step(now, &self.layout, &self.rng)?;
        self.state.set(state);
        Ok(poll)
    }
}
