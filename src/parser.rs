//! The parser value and its pluggable hexadecimal backend.

use crate::error::Result;
use crate::hex::C99Hex;
use crate::lexical::{self, Scanned};

/// Parses C99 hexadecimal floats such as `0x1.8p1` on behalf of a
/// [`Parser`].
///
/// The parser hands over the whole text, sign and prefix included, once it has
/// seen the `0x` or `0X` prefix. Whatever the implementation returns is the
/// result of the parse, unchanged.
///
/// Any `Fn(&str) -> Result<f32>` is a `HexParser`:
///
/// ```
/// use floatparse::{Error, Parser};
///
/// let parser = Parser::with_hex_parser(|_: &str| -> Result<f32, Error> {
///     Err(Error::custom("hex floats not allowed"))
/// });
/// assert_eq!(parser.parse("1.5").unwrap(), 1.5);
/// assert_eq!(
///     parser.parse("0x1p1").unwrap_err().to_string(),
///     "hex floats not allowed",
/// );
/// ```
pub trait HexParser {
    /// Parse `text`, a trimmed string starting with an optional sign followed
    /// by `0x` or `0X`.
    fn parse_hex(&self, text: &str) -> Result<f32>;
}

impl<F> HexParser for F
where
    F: Fn(&str) -> Result<f32>,
{
    fn parse_hex(&self, text: &str) -> Result<f32> {
        self(text)
    }
}

/// A string to `f32` parser.
///
/// The parser holds no state of its own beyond the hexadecimal backend, so one
/// value can be shared freely between threads and calls.
///
/// ```
/// use floatparse::Parser;
///
/// let parser = Parser::new();
/// assert_eq!(parser.parse(" 12.5e-1 ").unwrap(), 1.25);
/// assert_eq!(parser.parse("-Infinity").unwrap(), f32::NEG_INFINITY);
/// assert_eq!(parser.parse("0x1p-2f").unwrap(), 0.25);
/// assert!(parser.parse("1.5.0").is_err());
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct Parser<H = C99Hex> {
    hex: H,
}

impl Parser {
    /// Creates a parser that handles hexadecimal floats with [`C99Hex`].
    pub const fn new() -> Self {
        Parser { hex: C99Hex }
    }
}

impl<H> Parser<H>
where
    H: HexParser,
{
    /// Creates a parser that hands hexadecimal floats to `hex`.
    pub const fn with_hex_parser(hex: H) -> Self {
        Parser { hex }
    }

    /// The hexadecimal backend of this parser.
    pub fn hex_parser(&self) -> &H {
        &self.hex
    }

    /// Parse `text` into an `f32`.
    ///
    /// Leading and trailing whitespace and control characters are ignored.
    /// The accepted syntax:
    ///
    /// - an optional `+` or `-`, then either `Infinity`, `NaN`, a hexadecimal
    ///   float, or a decimal number;
    /// - a decimal number has digits with at most one `.` anywhere among them
    ///   (`1`, `1.`, `.5`, `0001.500`), an optional exponent `e` or `E` with
    ///   optional sign and at least one digit, and may end in one of the type
    ///   suffixes `f`, `F`, `d`, `D`.
    ///
    /// Values beyond the range of `f32` are not errors; they become signed
    /// infinity or signed zero.
    ///
    /// Decimal results match the correctly rounded value except for rare
    /// inputs close to the midpoint between two floats, which may come out one
    /// unit in the last place away.
    pub fn parse(&self, text: &str) -> Result<f32> {
        let (offset, text) = trim(text);
        let value = match lexical::scan(text) {
            Ok(Scanned::Float(value)) => Ok(value),
            Ok(Scanned::Decimal(decimal)) => Ok(decimal.to_float()),
            Ok(Scanned::Hex) => self.hex.parse_hex(text),
            Err(err) => Err(err),
        };
        value.map_err(|err| err.fix_column(offset))
    }
}

/// Strip bytes up to and including the space from both ends, returning the
/// number of bytes removed from the front and what remains.
fn trim(text: &str) -> (usize, &str) {
    let trimmed = text.trim_start_matches(|c: char| c <= ' ');
    let offset = text.len() - trimmed.len();
    (offset, trimmed.trim_end_matches(|c: char| c <= ' '))
}
