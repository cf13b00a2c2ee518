use crate::{CLOCK_REGRESSION_TIMEOUT_MS, Error, Result};

/// Tracks how long a single ID request has waited so far.
///
/// Every pending poll is charged here before the caller suspends. Once the
/// total would exceed [`CLOCK_REGRESSION_TIMEOUT_MS`] the request fails, so a
/// jittering or stalled clock cannot keep a caller waiting forever.
#[derive(Debug, Default)]
pub(crate) struct SuspensionBudget {
    spent: u64,
}

impl SuspensionBudget {
    pub(crate) const fn new() -> Self {
        Self { spent: 0 }
    }

    pub(crate) fn charge(&mut self, yield_for: u64, last_timestamp: u64) -> Result<()> {
        self.spent = self.spent.saturating_add(yield_for);
        if self.spent > CLOCK_REGRESSION_TIMEOUT_MS {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                last_timestamp,
                spent_ms = self.spent,
                "suspension budget exhausted"
            );
            return Err(Error::ClockRegression {
                last_timestamp,
                timeout_ms: CLOCK_REGRESSION_TIMEOUT_MS,
            });
        }
        Ok(())
    }
}
