use crate::SnowflakeId;

/// Errors that can occur while deserializing IDs with the field helpers in
/// this crate.
///
/// The offending input is kept so callers can log it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[non_exhaustive]
pub enum SerdeError {
    /// The decoded value sets the reserved high bit.
    #[error("decoded value {id} sets the reserved high bit")]
    DecodeOverflow {
        /// The decoded ID value, which failed validation.
        id: SnowflakeId,
    },

    /// The input string is not an unsigned decimal integer that fits in 64
    /// bits.
    #[error("expected a decimal snowflake id, got {input:?}")]
    InvalidDecimal { input: String },
}
