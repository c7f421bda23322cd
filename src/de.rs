//! Deserialize `f32` values that may be written as strings.
//!
//! Data files often carry floats as quoted text, sometimes with the suffixes
//! and special tokens of a source language (`"1.5f"`, `"-Infinity"`,
//! `"0x1p-3"`). Point a field at [`deserialize`] to run such strings through
//! [`parse_float`](crate::parse_float); native numbers are accepted too.
//!
//! ```
//! use serde::de::value::{Error, StrDeserializer};
//! use serde::de::IntoDeserializer;
//! use serde_derive::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Channel {
//!     #[serde(deserialize_with = "floatparse::de::deserialize")]
//!     gain: f32,
//! }
//!
//! let text: StrDeserializer<Error> = "2.5e-1f".into_deserializer();
//! assert_eq!(floatparse::de::deserialize(text).unwrap(), 0.25);
//! ```
//!
//! The helper relies on `deserialize_any`, so it needs a self-describing data
//! format.

use core::fmt;
use serde_core::de::{self, Deserializer, Visitor};

/// Deserialize an `f32` from a string in any syntax [`parse_float`]
/// accepts, or from a number.
///
/// [`parse_float`]: crate::parse_float
pub fn deserialize<'de, D>(deserializer: D) -> Result<f32, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(F32Visitor)
}

struct F32Visitor;

impl<'de> Visitor<'de> for F32Visitor {
    type Value = f32;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a float or a string containing a float")
    }

    fn visit_str<E>(self, value: &str) -> Result<f32, E>
    where
        E: de::Error,
    {
        crate::parse_float(value).map_err(E::custom)
    }

    fn visit_f64<E>(self, value: f64) -> Result<f32, E>
    where
        E: de::Error,
    {
        Ok(value as f32)
    }

    fn visit_i64<E>(self, value: i64) -> Result<f32, E>
    where
        E: de::Error,
    {
        Ok(value as f32)
    }

    fn visit_u64<E>(self, value: u64) -> Result<f32, E>
    where
        E: de::Error,
    {
        Ok(value as f32)
    }
}
