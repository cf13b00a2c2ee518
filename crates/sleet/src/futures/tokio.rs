use core::{pin::Pin, time::Duration};

use crate::{
    Result, ShortId, SnowflakeGenerator, SnowflakeId,
    futures::{SleepProvider, SnowflakeGeneratorAsyncExt},
};

/// An implementation of [`SleepProvider`] using Tokio's timer.
///
/// This is the default provider for use in async applications built on Tokio.
pub struct TokioSleep;
impl SleepProvider for TokioSleep {
    type Sleep = tokio::time::Sleep;

    fn sleep_for(dur: Duration) -> Self::Sleep {
        tokio::time::sleep(dur)
    }
}

/// An implementation of [`SleepProvider`] using Tokio's yield.
///
/// Yields to the scheduler instead of arming a timer. Each pending poll still
/// counts its full requested wait against the suspension budget, so a clock
/// that does not catch up fails after a handful of yields rather than
/// spinning.
pub struct TokioYield;
impl SleepProvider for TokioYield {
    /// Tokio's `yield_now()` returns a private future type, so we must use a
    /// boxed `dyn Future` to abstract over it.
    type Sleep = Pin<Box<dyn Future<Output = ()> + Send>>;

    fn sleep_for(_dur: Duration) -> Self::Sleep {
        Box::pin(tokio::task::yield_now())
    }
}

/// Extension trait for asynchronously generating Snowflake IDs using the
/// [`tokio`](https://docs.rs/tokio) async runtime.
///
/// Convenience wrappers over [`SnowflakeGeneratorAsyncExt`] with
/// [`TokioSleep`] as the sleep strategy.
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> sleet::Result<()> {
/// use sleet::{LockSnowflakeGenerator, SnowflakeGeneratorAsyncTokioExt};
///
/// let generator: LockSnowflakeGenerator = LockSnowflakeGenerator::default();
/// let a = generator.next_id_async().await?;
/// let b = generator.next_id_async().await?;
/// assert!(a < b);
/// # Ok(())
/// # }
/// ```
pub trait SnowflakeGeneratorAsyncTokioExt {
    /// Returns a future that resolves to the next available Snowflake ID,
    /// sleeping on Tokio's timer while the generator is pending.
    ///
    /// # Errors
    ///
    /// See [`SnowflakeGeneratorAsyncExt::next_id_async_with`].
    fn next_id_async(&self) -> impl Future<Output = Result<SnowflakeId>>;

    /// Returns a future that resolves to the next available [`ShortId`].
    ///
    /// # Errors
    ///
    /// See [`SnowflakeGeneratorAsyncExt::next_id_async_with`].
    fn short_id_async(&self) -> impl Future<Output = Result<ShortId>>;
}

impl<G> SnowflakeGeneratorAsyncTokioExt for G
where
    G: SnowflakeGenerator,
{
    fn next_id_async(&self) -> impl Future<Output = Result<SnowflakeId>> {
        <Self as SnowflakeGeneratorAsyncExt>::next_id_async_with::<TokioSleep>(self)
    }

    fn short_id_async(&self) -> impl Future<Output = Result<ShortId>> {
        <Self as SnowflakeGeneratorAsyncExt>::short_id_async_with::<TokioSleep>(self)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, sync::Arc};

    use tokio::{task::JoinSet, time::Instant};

    use super::*;
    use crate::{
        BasicSnowflakeGenerator, CLOCK_REGRESSION_TIMEOUT_MS, Error, LockSnowflakeGenerator,
        SnowflakeLayout, TimeSource, ZeroRandom,
    };

    const EPOCH: u64 = 1_649_980_800_000;
    const BASE: u64 = EPOCH + 10_000;

    fn layout() -> SnowflakeLayout {
        SnowflakeLayout::new(Duration::from_millis(EPOCH), 3, 2).unwrap()
    }

    /// Wall clock driven by Tokio's (pausable) time.
    #[derive(Clone, Copy)]
    struct TokioClock {
        base: u64,
        start: Instant,
    }

    impl TokioClock {
        fn at(base: u64) -> Self {
            Self {
                base,
                start: Instant::now(),
            }
        }
    }

    impl TimeSource<u64> for TokioClock {
        fn current_millis(&self) -> u64 {
            self.base + self.start.elapsed().as_millis() as u64
        }
    }

    #[tokio::test(start_paused = true)]
    async fn waits_out_small_regression() -> Result<()> {
        let generator = LockSnowflakeGenerator::from_components(
            layout(),
            BASE + 500,
            0,
            TokioClock::at(BASE),
            ZeroRandom,
        );

        let started = Instant::now();
        let id = generator.next_id_async().await?;

        assert!(started.elapsed() >= Duration::from_millis(500));
        assert_eq!(id.timestamp(), BASE + 500 - EPOCH);
        assert_eq!(id.sequence(), 1);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn rejects_large_regression_without_waiting() {
        let generator = BasicSnowflakeGenerator::from_components(
            layout(),
            BASE + CLOCK_REGRESSION_TIMEOUT_MS + 1,
            0,
            TokioClock::at(BASE),
            ZeroRandom,
        );

        let started = Instant::now();
        let err = generator.next_id_async().await.unwrap_err();

        assert_eq!(started.elapsed(), Duration::ZERO);
        assert_eq!(
            err,
            Error::ClockRegression {
                last_timestamp: BASE + CLOCK_REGRESSION_TIMEOUT_MS + 1,
                timeout_ms: CLOCK_REGRESSION_TIMEOUT_MS
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn basic_generator_rolls_into_next_millisecond() -> Result<()> {
        let generator = BasicSnowflakeGenerator::from_components(
            layout(),
            BASE,
            SnowflakeId::max_sequence(),
            TokioClock::at(BASE),
            ZeroRandom,
        );

        let short = generator.short_id_async().await?;
        assert_eq!(short, ShortId::from(BASE + 1 - EPOCH, 0));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn yield_provider_gives_up_when_clock_stays_behind() {
        // Paused time never advances on a yield, so the clock stays 500ms
        // behind until the budget runs out.
        let generator = LockSnowflakeGenerator::from_components(
            layout(),
            BASE + 500,
            0,
            TokioClock::at(BASE),
            ZeroRandom,
        );

        let err = generator
            .next_id_async_with::<TokioYield>()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ClockRegression { .. }));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn generates_many_unique_ids_across_tasks() -> Result<()> {
        const TASKS: usize = 8;
        const IDS_PER_TASK: usize = 4096 * 2;

        let generator = Arc::new(LockSnowflakeGenerator::with_layout(layout()));
        let mut tasks = JoinSet::new();
        for _ in 0..TASKS {
            let generator = Arc::clone(&generator);
            tasks.spawn(async move {
                let mut ids = Vec::with_capacity(IDS_PER_TASK);
                for _ in 0..IDS_PER_TASK {
                    ids.push(generator.next_id_async().await?);
                }
                Ok::<_, Error>(ids)
            });
        }

        let mut seen = HashSet::with_capacity(TASKS * IDS_PER_TASK);
        while let Some(joined) = tasks.join_next().await {
            for id in joined.expect("task panicked")? {
                assert!(seen.insert(id), "duplicate id: {id:?}");
            }
        }
        assert_eq!(seen.len(), TASKS * IDS_PER_TASK);
        Ok(())
    }
}
