use num_bigint::{BigInt, BigUint};
use num_traits::Zero;

use crate::utilities::structs::InputFormat;
use crate::utilities::utilities::strip_separators;

/// Parse user-typed text into a signed arbitrary-precision value.
///
/// Whitespace and `_` separators are ignored. Decimal accepts an optional
/// leading minus. Hex accepts an optional `0x`/`0X` prefix and either digit
/// case; a sign is malformed in hex.
pub fn parse_value(input: &str, format: InputFormat) -> Result<BigInt, String> {
    let cleaned = strip_separators(input);
    if cleaned.is_empty() {
        return Err("empty input".into());
    }
    match format {
        InputFormat::Decimal => cleaned
            .parse::<BigInt>()
            .map_err(|_| "bad decimal digits".into()),
        InputFormat::Hex => {
            let digits = cleaned
                .strip_prefix("0x")
                .or_else(|| cleaned.strip_prefix("0X"))
                .unwrap_or(&cleaned);
            if digits.is_empty() {
                return Err("empty hex digits".into());
            }
            // magnitude-only parse so a stray sign cannot slip through
            BigUint::parse_bytes(digits.as_bytes(), 16)
                .map(BigInt::from)
                .ok_or_else(|| "bad hex digits".into())
        }
    }
}

/// Live-typing contract: malformed input never surfaces as an error, it
/// reads as zero.
#[inline]
pub fn parse_or_zero(input: &str, format: InputFormat) -> BigInt {
    parse_value(input, format).unwrap_or_else(|_| BigInt::zero())
}
