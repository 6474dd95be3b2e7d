use crate::Snowflake;
use core::fmt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

impl Serialize for Snowflake {
    /// Serializes the zero value as `null` and any other value as its
    /// decimal digits in a string.
    ///
    /// The string form keeps all 64 bits intact for JSON readers that store
    /// numbers in a double.
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.is_zero() {
            serializer.serialize_none()
        } else {
            serializer.collect_str(self)
        }
    }
}

struct SnowflakeVisitor;

impl serde::de::Visitor<'_> for SnowflakeVisitor {
    type Value = Snowflake;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a decimal string, an unsigned integer, or null")
    }

    #[inline]
    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if v.starts_with('-') {
            return Err(E::custom(crate::Error::Negative));
        }
        Snowflake::from_dec_str(v).map_err(E::custom)
    }

    #[inline]
    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Snowflake::from_raw(v))
    }

    #[inline]
    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        if v < 0 {
            return Err(E::custom(crate::Error::Negative));
        }
        Ok(Snowflake::from_raw(v as u64))
    }

    #[inline]
    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Snowflake::from_raw(0))
    }

    #[inline]
    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        Ok(Snowflake::from_raw(0))
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    /// Deserializes the quoted decimal form, the tolerated bare-number
    /// form, and `null` (the absent value).
    ///
    /// Negative input is rejected on every path: no valid ID carries a
    /// sign.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(SnowflakeVisitor)
    }
}

/// Serialize a snowflake ID as its native integer representation.
///
/// The default [`Serialize`] impl emits a decimal string; this adapter is
/// for schema-controlled documents whose readers handle full 64-bit
/// numbers. Apply with `#[serde(with = "snowid::as_raw")]`.
pub mod as_raw {
    use super::{Deserialize, Deserializer, Serializer};
    use crate::Snowflake;

    /// Serialize the ID as a bare `u64`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying serializer fails.
    pub fn serialize<S>(id: &Snowflake, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        s.serialize_u64(id.to_raw())
    }

    /// Deserialize the ID from a bare `u64`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying deserializer fails or the value
    /// is not an unsigned 64-bit integer (negative input included).
    pub fn deserialize<'de, D>(d: D) -> Result<Snowflake, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = u64::deserialize(d)?;
        Ok(Snowflake::from_raw(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Snowflake;

    #[test]
    fn zero_serializes_as_null() {
        let json = serde_json::to_string(&Snowflake::from_raw(0)).expect("serialize");
        assert_eq!(json, "null");
    }

    #[test]
    fn nonzero_serializes_as_quoted_decimal() {
        let json = serde_json::to_string(&Snowflake::from_raw(12345)).expect("serialize");
        assert_eq!(json, r#""12345""#);
    }

    #[test]
    fn max_value_survives_the_string_form() {
        let id = Snowflake::from_raw(u64::MAX);
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, r#""18446744073709551615""#);
        let back: Snowflake = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn null_deserializes_to_zero() {
        let id: Snowflake = serde_json::from_str("null").expect("deserialize");
        assert!(id.is_zero());
    }

    #[test]
    fn bare_numbers_are_tolerated() {
        let id: Snowflake = serde_json::from_str("12345").expect("deserialize");
        assert_eq!(id, Snowflake::from_raw(12345));
    }

    #[test]
    fn roundtrip_inside_a_document() {
        #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
        struct Row {
            event_id: Snowflake,
        }
        let row = Row {
            event_id: Snowflake::from_raw(146_048_121_814_417_408),
        };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"event_id":"146048121814417408"}"#);
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn negative_input_is_rejected() {
        for doc in [r#""-1""#, "-1", r#""-146048121814417408""#] {
            let err = serde_json::from_str::<Snowflake>(doc).expect_err("should fail");
            assert!(
                err.to_string().contains("negative value"),
                "doc={doc}, err={err}"
            );
        }
    }

    #[test]
    fn non_digit_strings_are_rejected() {
        let err = serde_json::from_str::<Snowflake>(r#""12a45""#).expect_err("should fail");
        assert!(err.to_string().contains("invalid decimal digit"), "{err}");
    }

    #[test]
    fn as_raw_roundtrip() {
        #[derive(PartialEq, Eq, Debug, Serialize, Deserialize)]
        struct Row {
            #[serde(with = "as_raw")]
            event_id: Snowflake,
        }
        let row = Row {
            event_id: Snowflake::from_raw(42),
        };

        let json = serde_json::to_string(&row).expect("serialize");
        assert_eq!(json, r#"{"event_id":42}"#);
        let back: Row = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, row);
    }

    #[test]
    fn as_raw_rejects_negative_numbers() {
        #[derive(Debug, Deserialize)]
        struct Row {
            #[serde(with = "as_raw")]
            #[allow(dead_code)]
            event_id: Snowflake,
        }
        serde_json::from_str::<Row>(r#"{"event_id":-42}"#).expect_err("should fail");
    }
}
