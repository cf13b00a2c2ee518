use ::rand::{Rng, rng};

use crate::RandSource;

/// Seeds each millisecond's sequence from `rand`'s thread-local generator.
///
/// Nothing is stored: the generator is looked up on every call, so the type
/// stays `Copy + Send + Sync` and threads never share RNG state.
#[derive(Copy, Clone, Debug, Default)]
pub struct ThreadRandom;

impl RandSource<u64> for ThreadRandom {
    fn rand(&self) -> u64 {
        rng().random()
    }
}
