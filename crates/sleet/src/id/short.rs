use core::fmt;

use crate::SnowflakeId;

/// A compact 53-bit ID holding only the timestamp and sequence of a
/// [`SnowflakeId`].
///
/// ```text
///  Bit Index:  52             12 11             0
///              +----------------+---------------+
///  Field:      | timestamp (41) | sequence (12) |
///              +----------------+---------------+
/// ```
///
/// 53 bits fit losslessly in an IEEE-754 double, which makes these IDs safe
/// to hand to consumers that store numbers as floats. The datacenter and
/// worker fields are dropped, so short IDs minted by different workers in the
/// same millisecond can collide.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShortId {
    id: u64,
}

impl ShortId {
    /// Bitmask for the 41-bit timestamp field.
    pub const TIMESTAMP_MASK: u64 = (1 << 41) - 1;

    /// Bitmask for the 12-bit sequence field.
    pub const SEQUENCE_MASK: u64 = (1 << 12) - 1;

    /// Number of bits to shift the timestamp to its position (bit 12).
    pub const TIMESTAMP_SHIFT: u64 = 12;

    /// Largest value a short ID can hold.
    pub const MAX: u64 = (1 << 53) - 1;

    pub const fn from(timestamp: u64, sequence: u64) -> Self {
        let timestamp = (timestamp & Self::TIMESTAMP_MASK) << Self::TIMESTAMP_SHIFT;
        let sequence = sequence & Self::SEQUENCE_MASK;
        Self {
            id: timestamp | sequence,
        }
    }

    /// Repacks the timestamp and sequence of a full Snowflake ID.
    pub const fn from_snowflake(id: SnowflakeId) -> Self {
        Self::from(id.timestamp(), id.sequence())
    }

    /// Extracts the timestamp from the packed ID.
    pub const fn timestamp(&self) -> u64 {
        (self.id >> Self::TIMESTAMP_SHIFT) & Self::TIMESTAMP_MASK
    }

    /// Extracts the sequence number from the packed ID.
    pub const fn sequence(&self) -> u64 {
        self.id & Self::SEQUENCE_MASK
    }

    pub const fn to_raw(&self) -> u64 {
        self.id
    }

    pub const fn from_raw(raw: u64) -> Self {
        Self { id: raw }
    }

    /// Returns `true` if no bit above bit 52 is set.
    pub const fn is_valid(&self) -> bool {
        self.id <= Self::MAX
    }
}

impl From<ShortId> for u64 {
    fn from(id: ShortId) -> Self {
        id.to_raw()
    }
}

impl fmt::Display for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl fmt::Debug for ShortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShortId")
            .field("id", &self.id)
            .field("timestamp", &self.timestamp())
            .field("sequence", &self.sequence())
            .finish()
    }
}
