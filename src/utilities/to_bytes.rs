use num_bigint::{BigInt, Sign};
use num_traits::One;

use crate::utilities::structs::ByteOrder;

/// Encode `value` as exactly `length` bytes under `order`.
///
/// The sequence represents `value mod 256^length`, so negatives come out as
/// two's complement over `length` bytes and wider magnitudes truncate to the
/// low `length` bytes, register style. The reduction is an explicit Euclidean
/// remainder rather than bigint bitwise masking, so the negative-value
/// behavior does not depend on the arithmetic backend.
pub fn to_bytes(value: &BigInt, length: usize, order: ByteOrder) -> Vec<u8> {
    if length == 0 {
        return Vec::new();
    }
    let modulus = BigInt::one() << (length * 8);
    let mut reduced = value % &modulus;
    if reduced.sign() == Sign::Minus {
        reduced += &modulus;
    }
    // reduced < 256^length, so this never holds more than `length` bytes
    let (_, mut bytes) = reduced.to_bytes_le();
    bytes.resize(length, 0);
    if order == ByteOrder::Big {
        bytes.reverse();
    }
    bytes
}
