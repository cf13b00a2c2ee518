use chrono::{DateTime, Local, SecondsFormat};

use crate::SnowflakeId;

/// A decoded [`SnowflakeId`], with each field in both numeric and binary form.
///
/// Produced by [`SnowflakeLayout::parse`]. Decoding never fails: an ID minted
/// under a different epoch or layout decodes to fields that are meaningless
/// but well-formed.
///
/// [`SnowflakeLayout::parse`]: crate::SnowflakeLayout::parse
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SnowflakeParts {
    /// Number of digits in [`Self::binary`].
    pub binary_length: usize,
    /// The raw ID in base 2, without leading zeros.
    pub binary: String,
    /// The timestamp field, zero-padded to 41 digits.
    pub binary_timestamp: String,
    /// The sequence field, zero-padded to 12 digits.
    pub binary_sequence: String,
    /// The worker ID field, zero-padded to 5 digits.
    pub binary_worker_id: String,
    /// The datacenter ID field, zero-padded to 5 digits.
    pub binary_datacenter_id: String,
    /// Milliseconds since [`Self::epoch`].
    pub timestamp: u64,
    /// Position of the ID within its millisecond.
    pub sequence: u64,
    /// The worker that issued the ID.
    pub worker_id: u64,
    /// The datacenter of the issuing worker.
    pub datacenter_id: u64,
    /// The epoch used for decoding, in milliseconds since the Unix epoch.
    pub epoch: u64,
    /// `epoch + timestamp` as an RFC 3339 string in the local time zone.
    ///
    /// `None` when the instant falls outside the range chrono can represent.
    pub datetime: Option<String>,
}

impl SnowflakeParts {
    /// Decodes `id` against an epoch given in milliseconds since the Unix
    /// epoch.
    pub fn decode(id: SnowflakeId, epoch: u64) -> Self {
        let raw = id.to_raw();
        let binary = format!("{raw:b}");
        let timestamp = id.timestamp();

        Self {
            binary_length: binary.len(),
            binary,
            binary_timestamp: format!(
                "{:0width$b}",
                timestamp,
                width = SnowflakeId::TIMESTAMP_BITS as usize
            ),
            binary_sequence: format!(
                "{:0width$b}",
                id.sequence(),
                width = SnowflakeId::SEQUENCE_BITS as usize
            ),
            binary_worker_id: format!(
                "{:0width$b}",
                id.worker_id(),
                width = SnowflakeId::WORKER_ID_BITS as usize
            ),
            binary_datacenter_id: format!(
                "{:0width$b}",
                id.datacenter_id(),
                width = SnowflakeId::DATACENTER_ID_BITS as usize
            ),
            timestamp,
            sequence: id.sequence(),
            worker_id: id.worker_id(),
            datacenter_id: id.datacenter_id(),
            epoch,
            datetime: format_local(epoch.saturating_add(timestamp)),
        }
    }

    /// Absolute time of the ID in milliseconds since the Unix epoch.
    pub fn unix_millis(&self) -> u64 {
        self.epoch.saturating_add(self.timestamp)
    }

    /// Reassembles the ID the parts were decoded from.
    pub fn to_snowflake_id(&self) -> SnowflakeId {
        SnowflakeId::from(
            self.timestamp,
            self.datacenter_id,
            self.worker_id,
            self.sequence,
        )
    }
}

fn format_local(unix_millis: u64) -> Option<String> {
    let millis = i64::try_from(unix_millis).ok()?;
    let utc = DateTime::from_timestamp_millis(millis)?;
    Some(
        utc.with_timezone(&Local)
            .to_rfc3339_opts(SecondsFormat::Millis, false),
    )
}
