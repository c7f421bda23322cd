//! Conversion of a scanned decimal into the nearest-ish `f32`.

use super::powers::{pow10, MAX_EXPONENT};

/// Signed zero or signed infinity, for values outside the range `f32` can
/// represent.
#[inline]
pub(crate) fn signed_zero(negative: bool) -> f32 {
    if negative {
        -0.0
    } else {
        0.0
    }
}

#[inline]
pub(crate) fn signed_infinity(negative: bool) -> f32 {
    if negative {
        f32::NEG_INFINITY
    } else {
        f32::INFINITY
    }
}

/// Scale `mantissa` by `10^exponent` and round to `f32`.
///
/// The product is formed in `f64` with one table multiplication and rounded
/// once to `f32`. That is not correctly rounded: when the exact value lies
/// very close to the midpoint between two floats, the double rounding can
/// land one unit in the last place away from the correctly rounded result.
/// For example `7038531e-32` yields the float just above the nearest one.
pub(crate) fn to_float(negative: bool, mantissa: u64, exponent: i64) -> f32 {
    if mantissa == 0 {
        // Literal 0 with any exponent, including ones past the table.
        return signed_zero(negative);
    }

    if exponent > MAX_EXPONENT {
        return signed_infinity(negative);
    }
    if exponent < -MAX_EXPONENT {
        return signed_zero(negative);
    }

    let value = if exponent == 0 {
        // Skip the multiply by one, the mantissa rounds directly.
        mantissa as f32
    } else {
        (mantissa as f64 * pow10(exponent)) as f32
    };

    if negative {
        -value
    } else {
        value
    }
}

// TESTS
// -----

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_mantissa_ignores_exponent() {
        assert_eq!(to_float(false, 0, 999).to_bits(), 0.0f32.to_bits());
        assert_eq!(to_float(true, 0, 999).to_bits(), (-0.0f32).to_bits());
        assert_eq!(to_float(true, 0, -999).to_bits(), (-0.0f32).to_bits());
    }

    #[test]
    fn out_of_table_clamps() {
        assert_eq!(to_float(false, 1, 56), f32::INFINITY);
        assert_eq!(to_float(true, 1, 56), f32::NEG_INFINITY);
        assert_eq!(to_float(false, 999_999_999, -56).to_bits(), 0);
        assert_eq!(to_float(true, 999_999_999, -56).to_bits(), (-0.0f32).to_bits());
    }

    #[test]
    fn table_edges() {
        assert_eq!(to_float(false, 1, 55), f32::INFINITY);
        assert_eq!(to_float(false, 999_999_999, -55), 0.0);
        assert_eq!(to_float(true, 1, 55), f32::NEG_INFINITY);
    }

    #[test]
    fn exact_values() {
        assert_eq!(to_float(false, 1, 0), 1.0);
        assert_eq!(to_float(true, 15, 0), -15.0);
        assert_eq!(to_float(false, 123, -2), 1.23);
        assert_eq!(to_float(false, 1, 2), 100.0);
        assert_eq!(to_float(false, 16_777_217, 0), 16_777_216.0);
    }

    #[test]
    fn rounds_one_ulp_high_near_midpoint() {
        let expected = 7.038531e-26f32;
        assert_eq!(to_float(false, 7_038_531, -32).to_bits(), expected.to_bits() + 1);
    }
}
