use core::time::Duration;

use crate::{
    Poll, Result, ShortId, SnowflakeId, SnowflakeLayout, SnowflakeParts,
    generator::SuspensionBudget,
};

/// A minimal interface for generating Snowflake IDs.
///
/// Implementors supply [`SnowflakeGenerator::poll_id`], a single
/// non-blocking attempt, plus access to their layout and clock. The
/// blocking, short-ID and decoding operations are built on top of those.
pub trait SnowflakeGenerator {
    /// The layout (epoch, worker and datacenter IDs) stamped into every ID.
    fn layout(&self) -> &SnowflakeLayout;

    /// Reads the generator's clock, in milliseconds since the Unix epoch.
    fn timestamp(&self) -> u64;

    /// Attempts to issue the next ID without waiting.
    ///
    /// Returns [`Poll::Pending`] when the sequence for the current millisecond
    /// is exhausted or when the clock is behind the last issued timestamp by
    /// no more than [`CLOCK_REGRESSION_TIMEOUT_MS`].
    ///
    /// # Errors
    ///
    /// - [`Error::ClockRegression`] if the clock is behind the last issued
    ///   timestamp by more than [`CLOCK_REGRESSION_TIMEOUT_MS`]
    /// - [`Error::TimestampOverflow`] if the clock is past the last
    ///   millisecond the timestamp field can hold for this epoch
    /// - [`Error::LockPoisoned`] if a shared generator's lock is poisoned
    ///
    /// [`CLOCK_REGRESSION_TIMEOUT_MS`]: crate::CLOCK_REGRESSION_TIMEOUT_MS
    /// [`Error::ClockRegression`]: crate::Error::ClockRegression
    /// [`Error::TimestampOverflow`]: crate::Error::TimestampOverflow
    /// [`Error::LockPoisoned`]: crate::Error
    fn poll_id(&self) -> Result<Poll>;

    /// Issues the next ID, calling `f` with the number of milliseconds to
    /// wait whenever the generator is pending.
    ///
    /// `f` decides how to wait (sleep, spin, advance a test clock). The total
    /// requested wait is capped at [`CLOCK_REGRESSION_TIMEOUT_MS`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::ClockRegression`] if the clock regresses past the
    /// tolerance or the wait budget runs out, and any error from
    /// [`Self::poll_id`].
    ///
    /// [`CLOCK_REGRESSION_TIMEOUT_MS`]: crate::CLOCK_REGRESSION_TIMEOUT_MS
    /// [`Error::ClockRegression`]: crate::Error::ClockRegression
    fn next_id_with(&self, mut f: impl FnMut(u64)) -> Result<SnowflakeId> {
        let mut budget = SuspensionBudget::new();
        loop {
            match self.poll_id()? {
                Poll::Ready { id } => break Ok(id),
                Poll::Pending {
                    yield_for,
                    last_timestamp,
                } => {
                    budget.charge(yield_for, last_timestamp)?;
                    f(yield_for);
                }
            }
        }
    }

    /// Issues the next ID, putting the current thread to sleep while the
    /// generator is pending.
    ///
    /// # Example
    ///
    /// ```
    /// use sleet::{LockSnowflakeGenerator, SnowflakeGenerator};
    ///
    /// let generator: LockSnowflakeGenerator = LockSnowflakeGenerator::default();
    /// let first = generator.next_id().unwrap();
    /// let second = generator.next_id().unwrap();
    /// assert!(first < second);
    /// ```
    ///
    /// # Errors
    ///
    /// See [`Self::next_id_with`].
    fn next_id(&self) -> Result<SnowflakeId> {
        self.next_id_with(|ms| std::thread::sleep(Duration::from_millis(ms)))
    }

    /// Issues the next ID and repacks it as a [`ShortId`].
    ///
    /// # Errors
    ///
    /// See [`Self::next_id_with`].
    fn short_id_with(&self, f: impl FnMut(u64)) -> Result<ShortId> {
        let id = self.next_id_with(f)?;
        Ok(self.layout().to_short_id(id))
    }

    /// Issues the next ID and repacks it as a [`ShortId`], sleeping while
    /// pending.
    ///
    /// # Errors
    ///
    /// See [`Self::next_id_with`].
    fn short_id(&self) -> Result<ShortId> {
        let id = self.next_id()?;
        Ok(self.layout().to_short_id(id))
    }

    /// Encodes a relative timestamp and sequence with this generator's
    /// datacenter and worker IDs. See [`SnowflakeLayout::to_snowflake_id`].
    fn to_snowflake_id(&self, relative_timestamp: u64, sequence: u64) -> SnowflakeId {
        self.layout().to_snowflake_id(relative_timestamp, sequence)
    }

    /// Decodes an ID against this generator's epoch. See
    /// [`SnowflakeLayout::parse`].
    fn parse(&self, id: SnowflakeId) -> SnowflakeParts {
        self.layout().parse(id)
    }
}
