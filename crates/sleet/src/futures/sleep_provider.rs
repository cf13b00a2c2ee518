use core::time::Duration;

/// How an async generator waits out a [`Poll::Pending`].
///
/// [`SnowflakeGeneratorAsyncExt`] is generic over this, so the waiting
/// strategy (a timer, a plain yield, a test double) is picked per call.
///
/// [`Poll::Pending`]: crate::Poll::Pending
/// [`SnowflakeGeneratorAsyncExt`]: crate::SnowflakeGeneratorAsyncExt
pub trait SleepProvider {
    /// Must be `Send` so ID futures can move between worker threads.
    type Sleep: Future<Output = ()> + Send;

    /// Returns a future that completes after roughly `dur`.
    fn sleep_for(dur: Duration) -> Self::Sleep;
}
