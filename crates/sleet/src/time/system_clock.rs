use std::time::{SystemTime, UNIX_EPOCH};

use crate::TimeSource;

/// A [`TimeSource`] backed by [`SystemTime`].
///
/// This is a wall clock: NTP corrections or manual changes can move it
/// backwards. Generators tolerate short regressions by waiting and fail with
/// [`Error::ClockRegression`] on long ones.
///
/// A system clock set before 1970 reads as `0`.
///
/// [`Error::ClockRegression`]: crate::Error::ClockRegression
#[derive(Copy, Clone, Debug, Default)]
pub struct SystemClock;

impl TimeSource<u64> for SystemClock {
    fn current_millis(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |elapsed| elapsed.as_millis() as u64)
    }
}
