//! Precalculated powers of ten used to scale the accumulated mantissa.

/// Largest magnitude of a decimal exponent the table can scale by.
///
/// A mantissa holds at most 9 digits, so anything scaled by `10^56` overflows
/// `f32` and anything scaled by `10^-56` rounds to zero.
pub(crate) const MAX_EXPONENT: i64 = 55;

const LEN: usize = 2 * MAX_EXPONENT as usize + 1;
const CENTER: usize = MAX_EXPONENT as usize;

/// `10^k` as `f64` for `k` in `[-MAX_EXPONENT, MAX_EXPONENT]`, stored at index
/// `k + MAX_EXPONENT`.
///
/// Each entry is derived from its neighbour towards the centre (one multiply
/// or one divide by ten) rather than computed from scratch. Entries past
/// `10^22` are therefore not always the correctly rounded power; the rounding
/// of the parser is defined in terms of exactly these values.
pub(crate) static POW10: [f64; LEN] = build();

const fn build() -> [f64; LEN] {
    let mut table = [0.0; LEN];
    table[CENTER] = 1.0;
    let mut i = 1;
    while i <= CENTER {
        table[CENTER + i] = table[CENTER + i - 1] * 10.0;
        table[CENTER - i] = table[CENTER - i + 1] / 10.0;
        i += 1;
    }
    table
}

/// Returns `10^exponent` from the table.
///
/// Precondition: `exponent` is within `[-MAX_EXPONENT, MAX_EXPONENT]`.
#[inline]
pub(crate) fn pow10(exponent: i64) -> f64 {
    debug_assert!((-MAX_EXPONENT..=MAX_EXPONENT).contains(&exponent));
    POW10[(exponent + MAX_EXPONENT) as usize]
}

// TESTS
// -----
