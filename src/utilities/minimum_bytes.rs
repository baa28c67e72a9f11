use num_bigint::BigInt;
use num_traits::Zero;

use crate::utilities::structs::WordWidth;

/// Fewest bytes that hold the magnitude of `value`: half the hex digit
/// count, rounded up. Sign-less; zero still occupies one byte.
pub fn minimum_bytes(value: &BigInt) -> usize {
    if value.is_zero() {
        return 1;
    }
    value.magnitude().to_str_radix(16).len().div_ceil(2)
}

/// Round `min_bytes` up to whole words, at least one word.
#[inline]
pub fn padded_length(min_bytes: usize, width: WordWidth) -> usize {
    let w = width.bytes();
    min_bytes.div_ceil(w).max(1) * w
}
