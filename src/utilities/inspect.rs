use num_bigint::{BigInt, Sign};
use serde::{Deserialize, Serialize};

use crate::utilities::bit_layout::{byte_bits, significance_index};
use crate::utilities::minimum_bytes::{minimum_bytes, padded_length};
use crate::utilities::parse_value::parse_or_zero;
use crate::utilities::reinterpret::{Reinterpreted, reinterpret};
use crate::utilities::structs::{ByteOrder, Cast, InputFormat, WordWidth};
use crate::utilities::to_bytes::to_bytes;
use crate::utilities::utilities::{hex_byte, hex_bytes};

/// Reinterpretations read at most this many leading bytes of the sequence.
pub const CAST_WINDOW: usize = 8;

#[derive(Debug, Clone, Copy)]
pub struct InspectOptions {
    pub format: InputFormat,
    pub order: ByteOrder,
    pub width: WordWidth,
}

impl Default for InspectOptions {
    fn default() -> Self {
        InspectOptions {
            format: InputFormat::Decimal,
            order: ByteOrder::Little,
            width: WordWidth::W32,
        }
    }
}

/// One byte of the encoded sequence, in memory order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ByteCell {
    pub value: u8,
    pub hex: String,
    pub significance: usize,
    pub bits: [u8; 8],
}

/// One word-width chunk of the sequence, in memory order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordGroup {
    pub offset: usize,
    pub hex: String,
}

/// One reinterpretation row, rendered for display. Values travel as strings
/// so 64-bit integers survive the JS number range and NaN/inf survive JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CastRow {
    pub name: String,
    pub bits: usize,
    pub value: Cast<String>,
}

/// Everything the presentation layer renders for one input tuple.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InspectionView {
    pub value_decimal: String,
    pub value_hex: String,
    pub byte_order: ByteOrder,
    pub word_width_bits: usize,
    pub minimum_bytes: usize,
    pub byte_count: usize,
    pub bytes: Vec<ByteCell>,
    pub words: Vec<WordGroup>,
    pub casts: Vec<CastRow>,
}

/// Build the full view model for one (input, format, order, width) tuple.
/// Recomputed from scratch on every call; malformed input reads as zero.
pub fn inspect(input: &str, options: Option<InspectOptions>) -> InspectionView {
    let opts = options.unwrap_or_default();
    let value = parse_or_zero(input, opts.format);

    let min = minimum_bytes(&value);
    let count = padded_length(min, opts.width);
    let bytes = to_bytes(&value, count, opts.order);

    let cells: Vec<ByteCell> = bytes
        .iter()
        .enumerate()
        .map(|(i, &b)| ByteCell {
            value: b,
            hex: hex_byte(b),
            significance: significance_index(i, count, opts.order),
            bits: byte_bits(b),
        })
        .collect();

    let word_bytes = opts.width.bytes();
    let words: Vec<WordGroup> = bytes
        .chunks(word_bytes)
        .enumerate()
        .map(|(w, chunk)| WordGroup {
            offset: w * word_bytes,
            hex: hex_bytes(chunk),
        })
        .collect();

    let head = &bytes[..bytes.len().min(CAST_WINDOW)];
    let casts = cast_rows(&reinterpret(head, opts.order));

    InspectionView {
        value_decimal: value.to_string(),
        value_hex: signed_hex(&value),
        byte_order: opts.order,
        word_width_bits: opts.width.bits(),
        minimum_bytes: min,
        byte_count: count,
        bytes: cells,
        words,
        casts,
    }
}

fn signed_hex(value: &BigInt) -> String {
    let mag = value.magnitude().to_str_radix(16).to_uppercase();
    match value.sign() {
        Sign::Minus => format!("-0x{mag}"),
        _ => format!("0x{mag}"),
    }
}

fn cast_rows(r: &Reinterpreted) -> Vec<CastRow> {
    fn row<T: std::fmt::Display>(name: &str, bits: usize, cast: Cast<T>) -> CastRow {
        CastRow {
            name: name.to_string(),
            bits,
            value: cast.map(|v| v.to_string()),
        }
    }
    vec![
        row("int8", 8, r.int8),
        row("uint8", 8, r.uint8),
        row("int16", 16, r.int16),
        row("uint16", 16, r.uint16),
        row("int32", 32, r.int32),
        row("uint32", 32, r.uint32),
        row("float32", 32, r.float32),
        row("int64", 64, r.int64),
        row("uint64", 64, r.uint64),
        row("float64", 64, r.float64),
    ]
}
