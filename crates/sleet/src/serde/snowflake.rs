use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Field helper for `#[serde(with = "as_native_snow")]`: a [`SnowflakeId`] as
/// a plain integer, rejecting values with the reserved bit set.
///
/// [`SnowflakeId`]: crate::SnowflakeId
pub mod as_native_snow {
    use super::{Deserialize, Deserializer, Serialize, Serializer};
    use crate::{SerdeError, SnowflakeId};

    /// Serialize a snowflake ID as its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &SnowflakeId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        id.to_raw().serialize(s)
    }

    /// Deserialize a snowflake ID from its native integer representation.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The deserialized value sets the reserved high bit
    pub fn deserialize<'de, D>(d: D) -> Result<SnowflakeId, D::Error>
    where
        D: Deserializer<'de>,
    {
        let id = SnowflakeId::from_raw(u64::deserialize(d)?);
        if !id.is_valid() {
            return Err(serde::de::Error::custom(SerdeError::DecodeOverflow { id }));
        }
        Ok(id)
    }
}

/// Field helper for `#[serde(with = "as_string_snow")]`: a [`SnowflakeId`] as
/// a decimal string.
///
/// Useful for consumers such as JavaScript that cannot hold 64-bit integers
/// exactly.
///
/// [`SnowflakeId`]: crate::SnowflakeId
pub mod as_string_snow {
    use super::{Deserializer, Serializer};
    use crate::{SerdeError, SnowflakeId};

    /// Serialize a snowflake ID as a decimal string.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &SnowflakeId, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.collect_str(id)
    }

    /// Deserialize a snowflake ID from a decimal string.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The underlying deserializer fails
    /// - The string is not an unsigned decimal integer
    /// - The decoded value sets the reserved high bit
    pub fn deserialize<'de, D>(d: D) -> Result<SnowflakeId, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DecimalVisitor;

        impl serde::de::Visitor<'_> for DecimalVisitor {
            type Value = SnowflakeId;

            fn expecting(&self, formatter: &mut core::fmt::Formatter) -> core::fmt::Result {
                formatter.write_str("a decimal snowflake id string")
            }

            #[inline]
            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let raw = v.parse::<u64>().map_err(|_| {
                    E::custom(SerdeError::InvalidDecimal {
                        input: v.to_owned(),
                    })
                })?;
                let id = SnowflakeId::from_raw(raw);
                if !id.is_valid() {
                    return Err(E::custom(SerdeError::DecodeOverflow { id }));
                }
                Ok(id)
            }
        }

        d.deserialize_str(DecimalVisitor)
    }
}
