use std::sync::Arc;

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::{
    Poll, RandSource, Result, SnowflakeGenerator, SnowflakeLayout, SystemClock, ThreadRandom,
    TimeSource,
    generator::{GeneratorState, Mutex},
};

/// A lock-based Snowflake ID generator suitable for multi-threaded
/// environments.
///
/// This generator wraps its state in an [`Arc<Mutex<_>>`], so every call to
/// [`SnowflakeGenerator::poll_id`] is serialized. Clones share the same
/// state and therefore never issue the same ID.
///
/// The clock is read while the lock is held, so a thread that waited on the
/// lock never observes a timestamp older than the one just issued.
///
/// ## Features
/// - ✅ Thread-safe
/// - ✅ Cloneable handles onto one ID stream
///
/// ## Recommended When
/// - You're in a multi-threaded environment
/// - Several threads or tasks must share one worker ID
///
/// ## See Also
/// - [`BasicSnowflakeGenerator`]
///
/// [`BasicSnowflakeGenerator`]: crate::BasicSnowflakeGenerator
pub struct LockSnowflakeGenerator<T = SystemClock, R = ThreadRandom>
where
    T: TimeSource<u64>,
    R: RandSource<u64>,
{
    pub(crate) state: Arc<Mutex<GeneratorState>>,
    layout: SnowflakeLayout,
    time: T,
    rng: R,
}

impl LockSnowflakeGenerator {
    /// Creates a shared generator for `layout` reading the system clock and
    /// seeding each millisecond's sequence from the thread-local RNG.
    ///
    /// # Example
    /// ```
    /// use sleet::{LockSnowflakeGenerator, SnowflakeGenerator, SnowflakeLayout};
    ///
    /// let generator = LockSnowflakeGenerator::with_layout(SnowflakeLayout::default());
    ///
    /// std::thread::scope(|s| {
    ///     for _ in 0..4 {
    ///         let generator = generator.clone();
    ///         s.spawn(move || generator.next_id().unwrap());
    ///     }
    /// });
    /// ```
    pub fn with_layout(layout: SnowflakeLayout) -> Self {
        Self::new(layout, SystemClock, ThreadRandom)
    }
}

impl<T, R> LockSnowflakeGenerator<T, R>
where
    T: TimeSource<u64>,
    R: RandSource<u64>,
{
    /// Creates a new [`LockSnowflakeGenerator`] parked at the layout's epoch
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
            state: Arc::new(Mutex::new(GeneratorState::new(&layout))),
            layout,
            time,
            rng,
        }
    }

    /// Creates a generator that resumes from a previously issued timestamp
    /// (Unix millis) and sequence.
    ///
    /// # ⚠️ Note
    /// In typical use cases, you should prefer [`Self::new`]. A timestamp
    /// before the epoch is clamped to the epoch.
    pub fn from_components(
        layout: SnowflakeLayout,
        last_timestamp: u64,
        sequence: u64,
        time: T,
        rng: R,
    ) -> Self {
        let state = GeneratorState::from_components(&layout, last_timestamp, sequence);
        Self {
            state: Arc::new(Mutex::new(state)),
            layout,
            time,
            rng,
        }
    }
}

impl<T, R> Clone for LockSnowflakeGenerator<T, R>
where
    T: TimeSource<u64> + Clone,
    R: RandSource<u64> + Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            layout: self.layout,
            time: self.time.clone(),
            rng: self.rng.clone(),
        }
    }
}

impl Default for LockSnowflakeGenerator {
    fn default() -> Self {
        Self::with_layout(SnowflakeLayout::default())
    }
}

impl<T, R> SnowflakeGenerator for LockSnowflakeGenerator<T, R>
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
        let mut state = {
            #[cfg(feature = "parking-lot")]
            {
                self.state.lock()
            }
            #[cfg(not(feature = "parking-lot"))]
            {
                self.state.lock()?
            }
        };

        let now = self.time.current_millis();
        state.step(now, &self.layout, &self.rng)
    }
}
