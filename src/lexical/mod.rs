//! Fast, approximate decimal to `f32` conversion.
//!
//! The text is scanned once into a mantissa of at most nine significant
//! digits and a power of ten, then scaled by a single table lookup and
//! multiplication in `f64`. For `f32` that is almost always the correctly
//! rounded result; the exceptions land one unit in the last place away.

// MODULES
mod algorithm;
mod digit;
mod exponent;
mod parse;
mod powers;

// API
pub(crate) use self::parse::{scan, Scanned};
