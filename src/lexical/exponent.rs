//! Utilities to calculate exponents.

/// Convert usize into i64 without overflow.
///
/// This is needed to ensure when adjusting the exponent relative to
/// the mantissa we do not overflow for comically-long inputs.
#[inline]
fn into_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

// EXPONENT CALCULATION

// Calculate the power of ten that scales the accumulated mantissa back to the
// value that was written.
//
// * `exponent`    - Signed value of the exponent clause (0 if absent).
// * `truncated`   - Significant digits dropped past the mantissa capacity.
// * `fraction`    - For numbers with a decimal point, the number of positions
//                   the point moves: skipped zeros directly after the point
//                   plus significant digits after it.
//
// For example, 0.0012 has a fraction shift of 4 and 123456789012 has 3
// truncated digits.
#[inline]
pub(crate) fn mantissa_exponent(exponent: i64, truncated: usize, fraction: Option<usize>) -> i64 {
    let exponent = exponent.saturating_add(into_i64(truncated));
    match fraction {
        Some(shift) => exponent.saturating_sub(into_i64(shift)),
        None => exponent,
    }
}

// Calculate how far the decimal point moves, from the digit counters of the
// scan.
//
// * `leading_zeros` - Zeros after the point before the first significant digit.
// * `digits`        - Significant digits in the whole mantissa.
// * `dot_pos`       - Significant digits that came before the point.
#[inline]
pub(crate) fn fraction_shift(leading_zeros: usize, digits: usize, dot_pos: usize) -> usize {
    leading_zeros.saturating_add(digits - dot_pos)
}

// TESTS
// -----
