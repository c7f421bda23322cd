//! C99 hexadecimal floats.
//!
//! Grammar, as accepted by `Float.parseFloat`:
//!
//! ```text
//! hex-float:
//!     sign_opt hex-prefix hex-significand binary-exponent suffix_opt
//!
//! hex-prefix:         0x | 0X
//! hex-significand:    hex-digits | hex-digits . | hex-digits_opt . hex-digits
//! binary-exponent:    p sign_opt digits | P sign_opt digits
//! suffix:             f | F | d | D
//! ```
//!
//! The exponent is a power of two and is mandatory. The value is rounded to
//! the nearest `f32`, ties to even, with subnormals rounded directly rather
//! than through an intermediate `f64`.

use crate::error::{Error, ErrorCode, Result};
use crate::parser::HexParser;

/// The hexadecimal parser a [`Parser`](crate::Parser) uses unless it is given
/// another one.
///
/// ```
/// use floatparse::{C99Hex, HexParser};
///
/// assert_eq!(C99Hex.parse_hex("0x1.8p1").unwrap(), 3.0);
/// assert_eq!(C99Hex.parse_hex("-0x1p-149").unwrap(), -f32::from_bits(1));
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct C99Hex;

impl HexParser for C99Hex {
    fn parse_hex(&self, text: &str) -> Result<f32> {
        parse_hex_float(text)
    }
}

/// Hex digits that fit in the 64-bit accumulator.
const MAX_HEX_DIGITS: u32 = 16;

/// Bits in an `f32` significand, hidden bit included.
const SIGNIFICAND_BITS: i64 = 24;
const MIN_EXPONENT: i64 = -126;
const MAX_EXPONENT: i64 = 127;
const EXPONENT_BIAS: i64 = 127;

fn parse_hex_float(text: &str) -> Result<f32> {
    let bytes = text.as_bytes();
    let mut index = 0;
    let negative = match bytes.first() {
        Some(b'+') => {
            index += 1;
            false
        }
        Some(b'-') => {
            index += 1;
            true
        }
        _ => false,
    };

    for expected in [b'0', b'x'] {
        match bytes.get(index) {
            Some(&c) if c.to_ascii_lowercase() == expected => index += 1,
            Some(_) => return Err(Error::at(text, index, ErrorCode::InvalidCharacter)),
            None => return Err(Error::syntax(ErrorCode::NoDigits, 0)),
        }
    }

    // Move from most to least significant bits and keep what fits in a u64.
    // Anything shifted out only matters for rounding, so remember whether it
    // was nonzero. Digits before and after the point are treated the same;
    // the point only adjusts the binary exponent.
    let mut mantissa: u64 = 0;
    let mut kept = 0;
    let mut sticky = false;
    let mut shift: i64 = 0;
    let mut any_digits = false;
    let mut seen_point = false;
    let exponent_at = loop {
        let c = match bytes.get(index) {
            Some(&c) => c,
            None => {
                if !any_digits {
                    return Err(Error::syntax(ErrorCode::NoDigits, 0));
                }
                return Err(Error::syntax(ErrorCode::MissingBinaryExponent, 0));
            }
        };
        match c {
            b'.' => {
                if seen_point {
                    return Err(Error::syntax(ErrorCode::SecondDecimalPoint, index + 1));
                }
                seen_point = true;
            }
            b'p' | b'P' => break index,
            _ => {
                let digit = match (c as char).to_digit(16) {
                    Some(digit) => u64::from(digit),
                    None => return Err(Error::at(text, index, ErrorCode::InvalidCharacter)),
                };
                any_digits = true;
                if digit == 0 && kept == 0 {
                    // Leading zero.
                    if seen_point {
                        shift -= 4;
                    }
                } else if kept < MAX_HEX_DIGITS {
                    mantissa = mantissa << 4 | digit;
                    kept += 1;
                    if seen_point {
                        shift -= 4;
                    }
                } else {
                    sticky |= digit != 0;
                    if !seen_point {
                        shift += 4;
                    }
                }
            }
        }
        index += 1;
    };

    if !any_digits {
        return Err(Error::syntax(ErrorCode::NoDigits, 0));
    }

    let exponent = binary_exponent(text, exponent_at)?;
    let bits = round_to_f32(mantissa, shift.saturating_add(exponent), sticky);
    Ok(f32::from_bits(bits | u32::from(negative) << 31))
}

/// Scan the `p` exponent. Saturates; anything that large is zero or infinity
/// anyway.
fn binary_exponent(text: &str, at: usize) -> Result<i64> {
    let bytes = text.as_bytes();
    let mut index = at + 1;
    let negative = match bytes.get(index) {
        Some(b'+') => {
            index += 1;
            false
        }
        Some(b'-') => {
            index += 1;
            true
        }
        _ => false,
    };

    let mut value: i64 = 0;
    let mut any_digits = false;
    while index < bytes.len() {
        match bytes[index] {
            c @ b'0'..=b'9' => {
                any_digits = true;
                value = value
                    .saturating_mul(10)
                    .saturating_add(i64::from(c - b'0'));
            }
            b'f' | b'F' | b'd' | b'D' => {
                if index + 1 != bytes.len() {
                    return Err(Error::at(text, index, ErrorCode::MisplacedSuffix));
                }
            }
            _ => return Err(Error::at(text, index, ErrorCode::InvalidCharacter)),
        }
        index += 1;
    }

    if !any_digits {
        return Err(Error::syntax(ErrorCode::EmptyExponent, at + 1));
    }
    Ok(if negative { -value } else { value })
}

/// Round `mantissa * 2^exponent` to the bits of a positive `f32`, to nearest
/// with ties to even. `sticky` says nonzero bits were dropped below the
/// mantissa.
fn round_to_f32(mantissa: u64, exponent: i64, sticky: bool) -> u32 {
    if mantissa == 0 {
        return 0;
    }

    // Normalize to a leading 1 in the top bit; the value is then
    // 1.xxx * 2^top.
    let zeros = mantissa.leading_zeros();
    let mantissa = mantissa << zeros;
    let top = exponent.saturating_sub(i64::from(zeros)).saturating_add(63);
    if top > MAX_EXPONENT {
        return f32::INFINITY.to_bits();
    }

    // Subnormals keep fewer bits, down to the last place at 2^-149.
    let keep = if top >= MIN_EXPONENT {
        SIGNIFICAND_BITS
    } else {
        SIGNIFICAND_BITS - (MIN_EXPONENT - top)
    };
    if keep < 0 {
        return 0;
    }
    if keep == 0 {
        // Between 2^-150 and 2^-149. Exactly 2^-150 is a tie and goes to the
        // even neighbour, zero.
        return u32::from(mantissa != 1 << 63 || sticky);
    }

    let drop = 64 - keep as u32;
    let mut bits = mantissa >> drop;
    let rest = mantissa & ((1 << drop) - 1);
    let half = 1 << (drop - 1);
    if rest > half || (rest == half && (sticky || bits & 1 == 1)) {
        bits += 1;
    }

    if top < MIN_EXPONENT {
        // Subnormal. Rounding up into 2^23 yields the smallest normal, whose
        // encoding is the same number.
        return bits as u32;
    }

    let mut top = top;
    if bits == 1 << SIGNIFICAND_BITS {
        bits >>= 1;
        top += 1;
        if top > MAX_EXPONENT {
            return f32::INFINITY.to_bits();
        }
    }
    (((top + EXPONENT_BIAS) as u32) << 23) | (bits as u32 & 0x7F_FFFF)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> f32 {
        parse_hex_float(text).unwrap_or_else(|err| panic!("failed to parse {}: {}", text, err))
    }

    fn error(text: &str) -> (ErrorCode, usize) {
        let err = parse_hex_float(text).unwrap_err();
        (err.code().clone(), err.column())
    }

    fn next_up(f: f32) -> f32 {
        f32::from_bits(f.to_bits() + 1)
    }

    #[test]
    fn valid() {
        assert_eq!(parse("0x1p1"), 2.0);
        assert_eq!(parse("0x1p0"), 1.0);
        assert_eq!(parse("0X1P0"), 1.0);
        assert_eq!(parse("0x1.2p3"), 9.0);
        assert_eq!(parse("0x1.2P3"), 9.0);
        assert_eq!(parse("0x1.p1"), 2.0);
        assert_eq!(parse("0x.8p0"), 0.5);
        assert_eq!(parse("0x.1p4"), 1.0);
        assert_eq!(parse("0x10p-4"), 1.0);
        assert_eq!(parse("0xFp-2"), 3.75);
        assert_eq!(parse("0x0000.8p0"), 0.5);
        assert_eq!(parse("0x0.0008p-7"), 1.0 / 1_048_576.0);
        assert_eq!(parse("0xAA.BCDp-3"), 699_341.0 / 32_768.0);
        assert_eq!(parse("0xAA.BC0DP+3"), 11_189_261.0 / 8_192.0);
    }

    #[test]
    fn signs_and_suffixes() {
        assert_eq!(parse("+0x1p1"), 2.0);
        assert_eq!(parse("-0x1p1"), -2.0);
        assert_eq!(parse("0x1p1f"), 2.0);
        assert_eq!(parse("0x1p1D"), 2.0);
        assert_eq!(parse("-0x0p0").to_bits(), (-0.0f32).to_bits());
        assert_eq!(parse("0x0.000p0").to_bits(), 0);
    }

    #[test]
    fn rounding_ties_to_even() {
        // Halfway between 1 and the next float: stays even.
        assert_eq!(parse("0x1.000001p0"), 1.0);
        // Halfway between an odd and an even significand: goes up.
        assert_eq!(parse("0x1.000003p0"), next_up(next_up(1.0)));
        // Just past halfway.
        assert_eq!(parse("0x1.0000011p0"), next_up(1.0));
        assert_eq!(parse("0x1.00000100000000000001p0"), next_up(1.0));
        // Just below halfway.
        assert_eq!(parse("0x1.000000fffp0"), 1.0);
        // Carry into the exponent.
        assert_eq!(parse("0x1.ffffffp0"), 2.0);
    }

    #[test]
    fn range() {
        assert_eq!(parse("0x1.fffffep127"), f32::MAX);
        assert_eq!(parse("0x1.ffffffp127"), f32::INFINITY);
        assert_eq!(parse("0x1p128"), f32::INFINITY);
        assert_eq!(parse("-0x1p999999999999999999999"), f32::NEG_INFINITY);
        assert_eq!(parse("0x1p-126"), f32::MIN_POSITIVE);
        assert_eq!(parse("0x1p-999999999999999999999"), 0.0);
    }

    #[test]
    fn subnormals() {
        assert_eq!(parse("0x1p-149"), f32::from_bits(1));
        assert_eq!(parse("0x1p-148"), f32::from_bits(2));
        assert_eq!(parse("0x1.8p-149"), f32::from_bits(2));
        assert_eq!(parse("0x1p-127"), f32::from_bits(0x40_0000));
        assert_eq!(parse("0x1.fffffep-127"), f32::MIN_POSITIVE);
        // Exactly half the smallest subnormal ties to zero, anything more
        // rounds up to it.
        assert_eq!(parse("0x1p-150"), 0.0);
        assert_eq!(parse("0x1.8p-150"), f32::from_bits(1));
        assert_eq!(parse("0x1.00000000000000001p-150"), f32::from_bits(1));
        assert_eq!(parse("0x1p-151"), 0.0);
    }

    #[test]
    fn errors() {
        assert_eq!(error("0x1"), (ErrorCode::MissingBinaryExponent, 0));
        assert_eq!(error("0x1.8"), (ErrorCode::MissingBinaryExponent, 0));
        assert_eq!(error("0xp1"), (ErrorCode::NoDigits, 0));
        assert_eq!(error("0x.p1"), (ErrorCode::NoDigits, 0));
        assert_eq!(error("0x1p"), (ErrorCode::EmptyExponent, 4));
        assert_eq!(error("0x1p-"), (ErrorCode::EmptyExponent, 4));
        assert_eq!(error("0x1pz"), (ErrorCode::InvalidCharacter('z'), 5));
        assert_eq!(error("0x1.2.3p1"), (ErrorCode::SecondDecimalPoint, 6));
        assert_eq!(error("0x1p1ff"), (ErrorCode::MisplacedSuffix('f'), 6));
        assert_eq!(error("0x1gp1"), (ErrorCode::InvalidCharacter('g'), 4));
        assert_eq!(error("1x1p1"), (ErrorCode::InvalidCharacter('1'), 1));
    }
}
