use core::cmp::Ordering;

use crate::{Error, Poll, RandSource, Result, SnowflakeId, SnowflakeLayout};

/// Longest clock regression, in milliseconds, that a generator waits out.
///
/// It is also the most a single `next_id` call will spend waiting in total.
pub const CLOCK_REGRESSION_TIMEOUT_MS: u64 = 1000;

/// Mutable per-generator state: the last issued timestamp (absolute Unix
/// millis) and the sequence issued with it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct GeneratorState {
    pub(crate) last_timestamp: u64,
    pub(crate) sequence: u64,
}

impl GeneratorState {
    /// State for a fresh generator: parked at the epoch with sequence zero.
    pub(crate) const fn new(layout: &SnowflakeLayout) -> Self {
        Self {
            last_timestamp: layout.epoch(),
            sequence: 0,
        }
    }

    /// Restored state. The timestamp is clamped to the epoch so relative
    /// timestamps never underflow.
    pub(crate) fn from_components(layout: &SnowflakeLayout, last_timestamp: u64, sequence: u64) -> Self {
        Self {
            last_timestamp: last_timestamp.max(layout.epoch()),
            sequence: sequence & SnowflakeId::SEQUENCE_MASK,
        }
    }

    /// Applies one clock reading.
    ///
    /// State only changes when an ID is issued; a pending or failed step
    /// leaves it untouched.
    pub(crate) fn step<R>(&mut self, now: u64, layout: &SnowflakeLayout, rng: &R) -> Result<Poll>
    where
        R: RandSource<u64>,
    {
        match now.cmp(&self.last_timestamp) {
            Ordering::Equal => {
                if self.sequence < SnowflakeId::max_sequence() {
                    self.sequence += 1;
                    Ok(Poll::Ready {
                        id: self.encode(layout),
                    })
                } else {
                    Ok(Poll::Pending {
                        yield_for: 1,
                        last_timestamp: self.last_timestamp,
                    })
                }
            }
            Ordering::Greater => {
                let relative_timestamp = now - layout.epoch();
                if relative_timestamp > SnowflakeId::max_timestamp() {
                    return Self::cold_timestamp_overflow(relative_timestamp);
                }
                self.last_timestamp = now;
                self.sequence = rng.rand() & SnowflakeId::SEQUENCE_MASK;
                Ok(Poll::Ready {
                    id: self.encode(layout),
                })
            }
            Ordering::Less => Self::cold_clock_behind(now, self.last_timestamp),
        }
    }

    fn encode(&self, layout: &SnowflakeLayout) -> SnowflakeId {
        layout.to_snowflake_id(self.last_timestamp - layout.epoch(), self.sequence)
    }

    #[cold]
    #[inline(never)]
    fn cold_timestamp_overflow(relative_timestamp: u64) -> Result<Poll> {
        #[cfg(feature = "tracing")]
        tracing::error!(
            relative_timestamp,
            max = SnowflakeId::max_timestamp(),
            "timestamp field exhausted for this epoch"
        );
        Err(Error::TimestampOverflow {
            relative_timestamp,
            max: SnowflakeId::max_timestamp(),
        })
    }

    #[cold]
    #[inline(never)]
    fn cold_clock_behind(now: u64, last_timestamp: u64) -> Result<Poll> {
        let yield_for = last_timestamp - now;
        if yield_for > CLOCK_REGRESSION_TIMEOUT_MS {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                last_timestamp,
                now,
                timeout_ms = CLOCK_REGRESSION_TIMEOUT_MS,
                "clock moved backwards beyond tolerance"
            );
            return Err(Error::ClockRegression {
                last_timestamp,
                timeout_ms: CLOCK_REGRESSION_TIMEOUT_MS,
            });
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(last_timestamp, now, yield_for, "clock moved backwards, waiting");
        Ok(Poll::Pending {
            yield_for,
            last_timestamp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ZeroRandom;

    fn layout() -> SnowflakeLayout {
        SnowflakeLayout::new(core::time::Duration::from_millis(1_000), 3, 4).unwrap()
    }

    #[test]
    fn pending_and_errors_leave_state_untouched() {
        let layout = layout();
        let mut state = GeneratorState::from_components(&layout, 5_000, 4095);
        let before = state;

        assert_eq!(
            state.step(5_000, &layout, &ZeroRandom),
            Ok(Poll::Pending {
                yield_for: 1,
                last_timestamp: 5_000
            })
        );
        assert_eq!(state, before);

        assert_eq!(
            state.step(4_200, &layout, &ZeroRandom),
            Ok(Poll::Pending {
                yield_for: 800,
                last_timestamp: 5_000
            })
        );
        assert_eq!(state, before);

        assert!(state.step(3_000, &layout, &ZeroRandom).is_err());
        assert_eq!(state, before);
    }

    #[test]
    fn regression_of_exactly_the_timeout_is_tolerated() {
        let layout = layout();
        let mut state = GeneratorState::from_components(&layout, 5_000, 0);
        assert_eq!(
            state.step(5_000 - CLOCK_REGRESSION_TIMEOUT_MS, &layout, &ZeroRandom),
            Ok(Poll::Pending {
                yield_for: CLOCK_REGRESSION_TIMEOUT_MS,
                last_timestamp: 5_000
            })
        );
        assert_eq!(
            state.step(5_000 - CLOCK_REGRESSION_TIMEOUT_MS - 1, &layout, &ZeroRandom),
            Err(Error::ClockRegression {
                last_timestamp: 5_000,
                timeout_ms: CLOCK_REGRESSION_TIMEOUT_MS
            })
        );
    }

    #[test]
    fn timestamp_past_field_width_is_rejected() {
        let layout = SnowflakeLayout::new(core::time::Duration::ZERO, 3, 4).unwrap();
        let max = SnowflakeId::max_timestamp();
        let mut state = GeneratorState::from_components(&layout, max, 7);
        let before = state;

        assert_eq!(
            state.step(max + 1, &layout, &ZeroRandom),
            Err(Error::TimestampOverflow {
                relative_timestamp: max + 1,
                max
            })
        );
        assert_eq!(state, before);

        // The last representable millisecond keeps issuing.
        let Ok(Poll::Ready { id }) = state.step(max, &layout, &ZeroRandom) else {
            panic!("expected ready");
        };
        assert_eq!((id.timestamp(), id.sequence()), (max, 8));
    }

    #[test]
    fn restored_timestamp_is_clamped_to_epoch() {
        let layout = layout();
        let state = GeneratorState::from_components(&layout, 10, 5000);
        assert_eq!(state.last_timestamp, layout.epoch());
        assert_eq!(state.sequence, 5000 & SnowflakeId::SEQUENCE_MASK);
    }

    #[test]
    fn new_millisecond_encodes_relative_timestamp() {
        let layout = layout();
        let mut state = GeneratorState::new(&layout);
        let Ok(Poll::Ready { id }) = state.step(1_250, &layout, &ZeroRandom) else {
            panic!("expected ready");
        };
        assert_eq!(id, SnowflakeId::from(250, 4, 3, 0));
    }
}
