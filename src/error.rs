//! When parsing a float goes wrong.

use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt::{self, Debug, Display};
use core::result;
use serde_core::de;
#[cfg(feature = "std")]
use std::io;

/// This type represents all possible errors that can occur when parsing a
/// string into an `f32`.
///
/// Every error is a format error: the text is not a float literal. Values that
/// are too large or too small for `f32` are not errors, they parse to signed
/// infinity or signed zero.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as possible. A
    /// larger `Error` type was substantially slower due to all the functions
    /// that pass around `Result<T, Error>`.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `floatparse::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// One-based column at which the error was detected, counted in bytes of
    /// the text handed to the parser (including any surrounding whitespace).
    ///
    /// Errors that are not tied to a single character, such as an empty input
    /// or a number without digits, are reported in column 0.
    pub fn column(&self) -> usize {
        self.err.column
    }

    /// Specifies the cause of this error.
    ///
    /// Useful when precise error handling is required or translation of
    /// error messages is required.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Creates an error carrying a free-form message.
    ///
    /// Meant for [`HexParser`](crate::HexParser) implementations that wrap a
    /// foreign hexadecimal parser and need to report its failures.
    #[cold]
    pub fn custom<T: Display>(msg: T) -> Self {
        Error::syntax(ErrorCode::Message(msg.to_string().into_boxed_str()), 0)
    }
}

#[cfg(feature = "std")]
impl From<Error> for io::Error {
    /// Convert a `floatparse::Error` into an `io::Error`.
    ///
    /// Format errors are turned into `InvalidData` IO errors.
    ///
    /// ```
    /// use std::io;
    ///
    /// fn read_gain(text: &str) -> io::Result<f32> {
    ///     Ok(floatparse::parse_float(text)?)
    /// }
    ///
    /// let err = read_gain("1.5.0").unwrap_err();
    /// assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    /// ```
    fn from(err: Error) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

struct ErrorImpl {
    code: ErrorCode,
    column: usize,
}

/// This type describes all possible reasons a string is rejected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    /// Catchall for messages from foreign hexadecimal parsers.
    Message(Box<str>),

    /// Nothing left to parse once surrounding whitespace is removed.
    EmptyInput,

    /// A character that cannot appear at this place in a float literal.
    InvalidCharacter(char),

    /// A second `'.'` in the mantissa.
    SecondDecimalPoint,

    /// One of the type suffixes `f`, `F`, `d`, `D` somewhere other than the
    /// very end of the text.
    MisplacedSuffix(char),

    /// An `e` or `E` with no exponent digits after it.
    EmptyExponent,

    /// The mantissa contains no digits at all.
    NoDigits,

    /// A hexadecimal float without its mandatory `p` exponent.
    MissingBinaryExponent,
}

impl Error {
    #[cold]
    pub(crate) fn syntax(code: ErrorCode, column: usize) -> Self {
        Error {
            err: Box::new(ErrorImpl { code, column }),
        }
    }

    /// Error for the byte at `index` of `text`, reported by the character that
    /// starts there.
    #[cold]
    pub(crate) fn at(text: &str, index: usize, code: fn(char) -> ErrorCode) -> Self {
        let c = text
            .get(index..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Error::syntax(code(c), index + 1)
    }

    // Columns are computed against the trimmed text; shift them back so they
    // point into what the caller passed in.
    #[cold]
    pub(crate) fn fix_column(mut self, offset: usize) -> Self {
        if self.err.column != 0 {
            self.err.column += offset;
        }
        self
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::Message(msg) => f.write_str(msg),
            ErrorCode::EmptyInput => f.write_str("empty string"),
            ErrorCode::InvalidCharacter(c) => write!(f, "invalid character `{}`", c.escape_debug()),
            ErrorCode::SecondDecimalPoint => f.write_str("second decimal point"),
            ErrorCode::MisplacedSuffix(c) => {
                write!(f, "type suffix `{}` is not the last character", c)
            }
            ErrorCode::EmptyExponent => f.write_str("exponent cannot be empty"),
            ErrorCode::NoDigits => f.write_str("no digits found"),
            ErrorCode::MissingBinaryExponent => f.write_str("missing binary exponent"),
        }
    }
}

impl de::StdError for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&*self.err, f)
    }
}

impl Display for ErrorImpl {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.column == 0 {
            Display::fmt(&self.code, f)
        } else {
            write!(f, "{} at column {}", self.code, self.column)
        }
    }
}

// Remove two layers of verbosity from the debug representation. Humans often
// end up seeing this representation because it is what unwrap() shows.
impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Error({:?}, column: {})",
            self.err.code.to_string(),
            self.err.column
        )
    }
}
