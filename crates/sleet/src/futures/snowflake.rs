use core::time::Duration;

use crate::{
    Poll, Result, ShortId, SnowflakeGenerator, SnowflakeId, futures::SleepProvider,
    generator::SuspensionBudget,
};

/// Extension trait for asynchronously generating Snowflake IDs.
///
/// Instead of blocking the thread while the generator is pending, the
/// returned futures await the given [`SleepProvider`] and poll again. The
/// total wait per ID is capped exactly as in
/// [`SnowflakeGenerator::next_id_with`].
pub trait SnowflakeGeneratorAsyncExt {
    /// Returns a future that resolves to the next available Snowflake ID.
    ///
    /// # Errors
    ///
    /// Resolves to [`Error::ClockRegression`] if the clock regresses past the
    /// tolerance or the wait budget runs out.
    ///
    /// [`Error::ClockRegression`]: crate::Error::ClockRegression
    fn next_id_async_with<S>(&self) -> impl Future<Output = Result<SnowflakeId>>
    where
        S: SleepProvider;

    /// Like [`Self::next_id_async_with`], repacked as a [`ShortId`].
    ///
    /// # Errors
    ///
    /// See [`Self::next_id_async_with`].
    fn short_id_async_with<S>(&self) -> impl Future<Output = Result<ShortId>>
    where
        S: SleepProvider;
}

impl<G> SnowflakeGeneratorAsyncExt for G
where
    G: SnowflakeGenerator,
{
    fn next_id_async_with<S>(&self) -> impl Future<Output = Result<SnowflakeId>>
    where
        S: SleepProvider,
    {
        async {
            let mut budget = SuspensionBudget::new();
            loop {
                let dur = match self.poll_id()? {
                    Poll::Ready { id } => return Ok(id),
                    Poll::Pending {
                        yield_for,
                        last_timestamp,
                    } => {
                        budget.charge(yield_for, last_timestamp)?;
                        Duration::from_millis(yield_for)
                    }
                };
                S::sleep_for(dur).await;
            }
        }
    }

    fn short_id_async_with<S>(&self) -> impl Future<Output = Result<ShortId>>
    where
        S: SleepProvider,
    {
        async {
            self.next_id_async_with::<S>()
                .await
                .map(|id| self.layout().to_short_id(id))
        }
    }
}
