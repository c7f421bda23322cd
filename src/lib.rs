//! # floatparse
//!
//! A fast parser from decimal text to `f32` that follows the syntax and,
//! almost always, the results of Java's `Float.parseFloat`.
//!
//! ```
//! # fn main() -> floatparse::Result<()> {
//! assert_eq!(floatparse::parse_float("3.25")?, 3.25);
//! assert_eq!(floatparse::parse_float(" -1e3f ")?, -1000.0);
//! assert_eq!(floatparse::parse_float(".5D")?, 0.5);
//! assert_eq!(floatparse::parse_float("0x1.8p1")?, 3.0);
//! assert!(floatparse::parse_float("NaN")?.is_nan());
//! assert_eq!(floatparse::parse_float("1e60")?, f32::INFINITY);
//! # Ok(())
//! # }
//! ```
//!
//! # How it works
//!
//! The text is scanned exactly once. The first nine significant digits are
//! gathered into an integer; later digits only count towards the magnitude,
//! since an `f32` cannot tell them apart. The decimal point, skipped zeros,
//! dropped digits and the exponent fold into one power of ten, and the result
//! is that integer times a power of ten from a table, computed in `f64` and
//! rounded once to `f32`. Powers past `10^55` or below `10^-55` are infinity or
//! zero without any arithmetic. Nothing is allocated unless the text is
//! rejected.
//!
//! # Accuracy
//!
//! That one multiplication is not a correctly rounded conversion. For rare
//! inputs whose value sits right at the midpoint between two floats the result
//! is one unit in the last place away from what `str::parse::<f32>` returns;
//! `"70.38531E-27"` is one. Parsing the text of any formatted `f32` gives back
//! the same float.
//!
//! Hexadecimal floats (`0x1.8p1`) are parsed exactly. They are handed to a
//! [`HexParser`], [`C99Hex`] unless a [`Parser`] is built with another.
//!
//! # Errors
//!
//! Text that is not a float literal produces an [`Error`], whose
//! [`ErrorCode`] says what is wrong and whose column points at the offending
//! character.
//!
//! ```
//! use floatparse::ErrorCode;
//!
//! let err = floatparse::parse_float("1.5.0").unwrap_err();
//! assert_eq!(*err.code(), ErrorCode::SecondDecimalPoint);
//! assert_eq!(err.column(), 4);
//! assert_eq!(err.to_string(), "second decimal point at column 4");
//! ```

#![doc(html_root_url = "https://docs.rs/floatparse/0.1.0")]
// Ignored clippy lints
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::float_cmp,
    clippy::module_name_repetitions
)]
// Ignored clippy_pedantic lints
#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]
#![deny(missing_docs)]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[doc(inline)]
pub use crate::error::{Error, ErrorCode, Result};
#[doc(inline)]
pub use crate::hex::C99Hex;
#[doc(inline)]
pub use crate::parser::{HexParser, Parser};

/// Parse `text` into an `f32` with the default [`Parser`].
///
/// Surrounding whitespace is ignored. See [`Parser::parse`] for the accepted
/// syntax.
///
/// ```
/// assert_eq!(floatparse::parse_float("16777217").unwrap(), 16777216.0);
/// assert!(floatparse::parse_float("1e").is_err());
/// ```
pub fn parse_float(text: &str) -> Result<f32> {
    Parser::new().parse(text)
}

mod features_check;

pub mod de;
pub mod error;
mod hex;
mod lexical;
mod parser;
