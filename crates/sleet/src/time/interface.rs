use chrono::{Local, TimeZone};
use core::time::Duration;

/// Default epoch in UTC: Friday, April 15, 2022 00:00:00 UTC.
///
/// Used by [`default_epoch`] only when local midnight on that date cannot be
/// resolved.
pub const DEFAULT_EPOCH_UTC: Duration = Duration::from_millis(1_649_980_800_000);

/// A trait for time sources that return wall-clock milliseconds since the Unix
/// epoch.
///
/// This is the generator's only contact with the system clock. Plug in
/// [`SystemClock`] in production and a scripted clock in tests.
///
/// # Example
///
/// ```
/// use sleet::TimeSource;
///
/// struct FixedTime;
/// impl TimeSource<u64> for FixedTime {
///     fn current_millis(&self) -> u64 {
///         1234
///     }
/// }
///
/// let time = FixedTime;
/// assert_eq!(time.current_millis(), 1234);
/// ```
///
/// [`SystemClock`]: crate::SystemClock
pub trait TimeSource<T> {
    /// Returns the current time in milliseconds since 1970-01-01 UTC.
    fn current_millis(&self) -> T;
}

/// The default epoch: April 15, 2022 00:00:00 in the local time zone, in
/// milliseconds since the Unix epoch.
///
/// Falls back to [`DEFAULT_EPOCH_UTC`] if local midnight does not exist on
/// that date (a DST gap).
pub fn default_epoch() -> u64 {
    Local
        .with_ymd_and_hms(2022, 4, 15, 0, 0, 0)
        .earliest()
        .and_then(|midnight| u64::try_from(midnight.timestamp_millis()).ok())
        .unwrap_or(DEFAULT_EPOCH_UTC.as_millis() as u64)
}
