// tests/helpers.rs
use num_bigint::BigInt;
use num_traits::Zero;

/// Value encoded by an LSB-first byte sequence: sum of byte[i] * 256^i.
pub fn reconstruct_le(bytes: &[u8]) -> BigInt {
    let mut acc = BigInt::zero();
    for &b in bytes.iter().rev() {
        acc = (acc << 8usize) + BigInt::from(b);
    }
    acc
}

/// Euclidean `v mod 256^len`, the truncation law's right-hand side.
pub fn mod_pow256(v: &BigInt, len: usize) -> BigInt {
    let m = BigInt::from(1) << (len * 8);
    ((v % &m) + &m) % &m
}
