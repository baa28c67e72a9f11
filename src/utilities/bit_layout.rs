use crate::utilities::structs::ByteOrder;

/// Significance rank of the byte at `position` in a sequence of `total`
/// bytes: 0 is the least significant regardless of memory order. Lets the
/// view keep a byte's identity stable while the order toggles.
#[inline]
pub fn significance_index(position: usize, total: usize, order: ByteOrder) -> usize {
    debug_assert!(position < total);
    match order {
        ByteOrder::Little => position,
        ByteOrder::Big => total - 1 - position,
    }
}

/// MSB-first bit decomposition of one byte.
#[inline]
pub fn byte_bits(byte: u8) -> [u8; 8] {
    std::array::from_fn(|i| (byte >> (7 - i)) & 1)
}
