//! Helpers to classify bytes and fold digits into the mantissa.

/// Significant decimal digits kept in the mantissa. Nine digits always fit
/// below `10^9`, comfortably more than the 24 bits of an `f32` significand.
pub(crate) const MAX_DIGITS: usize = 9;

// Add an ASCII digit to the mantissa.
#[inline]
pub(crate) fn add_digit(value: u64, c: u8) -> u64 {
    debug_assert!(c.is_ascii_digit());
    value * 10 + u64::from(c - b'0')
}

/// Type suffixes a float literal may end with.
#[inline]
pub(crate) fn is_suffix(c: u8) -> bool {
    matches!(c, b'f' | b'F' | b'd' | b'D')
}
