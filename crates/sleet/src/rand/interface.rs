/// A trait for random sources that return random integers.
///
/// Generators draw the first sequence number of every millisecond from a
/// `RandSource`, which makes consecutive IDs harder to predict. Plug in
/// [`ZeroRandom`] to start every millisecond at zero instead, which maximises
/// the number of IDs available per millisecond.
///
/// # Example
/// ```
/// use sleet::RandSource;
///
/// struct FixedRand;
/// impl RandSource<u64> for FixedRand {
///     fn rand(&self) -> u64 {
///         1234
///     }
/// }
///
/// let rng = FixedRand;
/// assert_eq!(rng.rand(), 1234);
/// ```
pub trait RandSource<T> {
    /// Returns a random integer.
    fn rand(&self) -> T;
}

/// A [`RandSource`] that always returns zero.
#[derive(Copy, Clone, Debug, Default)]
pub struct ZeroRandom;

impl RandSource<u64> for ZeroRandom {
    fn rand(&self) -> u64 {
        0
    }
}
