use crate::SnowflakeId;

/// The outcome of a single, non-blocking attempt to issue an ID.
///
/// - [`Poll::Ready`] carries the newly issued ID.
/// - [`Poll::Pending`] means the generator cannot issue an ID right now,
///   either because this millisecond's sequence is exhausted or because the
///   clock is behind the last issued timestamp. Wait `yield_for`
///   milliseconds and poll again.
///
/// # Example
///
/// ```
/// use sleet::{BasicSnowflakeGenerator, Poll, SnowflakeGenerator};
///
/// let generator: BasicSnowflakeGenerator = BasicSnowflakeGenerator::default();
/// let id = loop {
///     match generator.poll_id().unwrap() {
///         Poll::Ready { id } => break id,
///         Poll::Pending { yield_for, .. } => {
///             std::thread::sleep(core::time::Duration::from_millis(yield_for))
///         }
///     }
/// };
/// assert!(id.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Poll {
    /// A unique ID was generated and is ready to use.
    Ready {
        /// The generated Snowflake ID.
        id: SnowflakeId,
    },
    /// No ID could be generated yet.
    Pending {
        /// Milliseconds to wait before polling again.
        yield_for: u64,
        /// Unix time (ms) of the last issued ID. The clock has to move past
        /// it before the generator can make progress.
        last_timestamp: u64,
    },
}
