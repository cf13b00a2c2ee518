use core::time::Duration;

use crate::{Error, Result, ShortId, SnowflakeId, SnowflakeParts, default_epoch};

/// The static configuration of a generator: its epoch and the datacenter and
/// worker IDs stamped into every ID.
///
/// A layout is validated once, at construction, so encoding never has to
/// check field widths.
///
/// # Example
///
/// ```
/// use core::time::Duration;
/// use sleet::SnowflakeLayout;
///
/// let layout = SnowflakeLayout::new(Duration::from_secs(1_649_980_800), 3, 2).unwrap();
/// let id = layout.to_snowflake_id(1, 4);
/// assert_eq!(id.to_raw(), (1 << 22) | (2 << 17) | (3 << 12) | 4);
///
/// let parts = layout.parse(id);
/// assert_eq!(parts.epoch, 1_649_980_800_000);
/// assert_eq!((parts.worker_id, parts.datacenter_id), (3, 2));
///
/// assert!(SnowflakeLayout::new(Duration::ZERO, 32, 0).is_err());
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SnowflakeLayout {
    epoch: u64,
    worker_id: u64,
    datacenter_id: u64,
}

impl SnowflakeLayout {
    /// Worker ID used when none is configured.
    pub const DEFAULT_WORKER_ID: u64 = 1;

    /// Datacenter ID used when none is configured.
    pub const DEFAULT_DATACENTER_ID: u64 = 1;

    /// Creates a layout from an epoch (as a [`Duration`] since 1970-01-01 UTC)
    /// and the two machine identifiers.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidWorkerId`] if `worker_id` exceeds
    ///   [`SnowflakeId::max_worker_id`]
    /// - [`Error::InvalidDatacenterId`] if `datacenter_id` exceeds
    ///   [`SnowflakeId::max_datacenter_id`]
    /// - [`Error::InvalidEpoch`] if the epoch does not fit in a `u64` count of
    ///   milliseconds
    pub fn new(epoch: Duration, worker_id: u64, datacenter_id: u64) -> Result<Self> {
        if worker_id > SnowflakeId::max_worker_id() {
            return Err(Error::InvalidWorkerId {
                worker_id,
                max: SnowflakeId::max_worker_id(),
            });
        }
        if datacenter_id > SnowflakeId::max_datacenter_id() {
            return Err(Error::InvalidDatacenterId {
                datacenter_id,
                max: SnowflakeId::max_datacenter_id(),
            });
        }
        let epoch = u64::try_from(epoch.as_millis()).map_err(|_| Error::InvalidEpoch {
            secs: epoch.as_secs(),
        })?;

        Ok(Self {
            epoch,
            worker_id,
            datacenter_id,
        })
    }

    /// Same as [`Self::new`], with the epoch given in whole seconds since the
    /// Unix epoch.
    ///
    /// # Errors
    ///
    /// See [`Self::new`].
    pub fn from_epoch_secs(epoch_secs: u64, worker_id: u64, datacenter_id: u64) -> Result<Self> {
        Self::new(Duration::from_secs(epoch_secs), worker_id, datacenter_id)
    }

    /// The epoch in milliseconds since the Unix epoch.
    pub const fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The worker ID stamped into every ID.
    pub const fn worker_id(&self) -> u64 {
        self.worker_id
    }

    /// The datacenter ID stamped into every ID.
    pub const fn datacenter_id(&self) -> u64 {
        self.datacenter_id
    }

    /// Encodes a relative timestamp and sequence with this layout's
    /// datacenter and worker IDs.
    ///
    /// Pure and deterministic. Out-of-range `relative_timestamp` or
    /// `sequence` values are truncated to their field widths.
    pub const fn to_snowflake_id(&self, relative_timestamp: u64, sequence: u64) -> SnowflakeId {
        SnowflakeId::from(
            relative_timestamp,
            self.datacenter_id,
            self.worker_id,
            sequence,
        )
    }

    /// Decodes an ID against this layout's epoch.
    ///
    /// The worker and datacenter fields are read from the ID itself, so IDs
    /// minted by other workers sharing the epoch decode correctly.
    pub fn parse(&self, id: SnowflakeId) -> SnowflakeParts {
        SnowflakeParts::decode(id, self.epoch)
    }

    /// Repacks an ID into a [`ShortId`].
    pub const fn to_short_id(&self, id: SnowflakeId) -> ShortId {
        ShortId::from_snowflake(id)
    }
}

impl Default for SnowflakeLayout {
    /// The default epoch ([`default_epoch`]) with worker 1 and datacenter 1.
    fn default() -> Self {
        Self {
            epoch: default_epoch(),
            worker_id: Self::DEFAULT_WORKER_ID,
            datacenter_id: Self::DEFAULT_DATACENTER_ID,
        }
    }
}
