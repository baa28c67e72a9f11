use membits::utilities::bit_layout::{byte_bits, significance_index};
use membits::utilities::inspect::{InspectOptions, InspectionView, inspect};
use membits::utilities::structs::{ByteOrder, Cast, InputFormat, WordWidth};

fn opts(format: InputFormat, order: ByteOrder, width: WordWidth) -> Option<InspectOptions> {
    Some(InspectOptions {
        format,
        order,
        width,
    })
}

fn cast_value(view: &InspectionView, name: &str) -> Cast<String> {
    view.casts
        .iter()
        .find(|row| row.name == name)
        .map(|row| row.value.clone())
        .unwrap()
}

#[test]
fn end_to_end_little_endian_32_bit() {
    let view = inspect(
        "305419896",
        opts(InputFormat::Decimal, ByteOrder::Little, WordWidth::W32),
    );
    assert_eq!(view.value_decimal, "305419896");
    assert_eq!(view.value_hex, "0x12345678");
    assert_eq!(view.minimum_bytes, 4);
    assert_eq!(view.byte_count, 4);

    let values: Vec<u8> = view.bytes.iter().map(|c| c.value).collect();
    assert_eq!(values, vec![0x78, 0x56, 0x34, 0x12]);
    let ranks: Vec<usize> = view.bytes.iter().map(|c| c.significance).collect();
    assert_eq!(ranks, vec![0, 1, 2, 3]);

    assert_eq!(view.words.len(), 1);
    assert_eq!(view.words[0].offset, 0);
    assert_eq!(view.words[0].hex, "78563412");

    assert_eq!(
        cast_value(&view, "int32"),
        Cast::Available("305419896".to_string())
    );
    assert_eq!(
        cast_value(&view, "uint32"),
        Cast::Available("305419896".to_string())
    );
    // only 4 bytes encoded: 64-bit views are explicitly unavailable
    assert_eq!(cast_value(&view, "int64"), Cast::Unavailable);
    assert_eq!(cast_value(&view, "uint64"), Cast::Unavailable);
    assert_eq!(cast_value(&view, "float64"), Cast::Unavailable);
}

#[test]
fn end_to_end_big_endian_32_bit() {
    let view = inspect(
        "0x12345678",
        opts(InputFormat::Hex, ByteOrder::Big, WordWidth::W32),
    );
    assert_eq!(view.value_decimal, "305419896");

    let values: Vec<u8> = view.bytes.iter().map(|c| c.value).collect();
    assert_eq!(values, vec![0x12, 0x34, 0x56, 0x78]);
    // most significant byte now sits first in memory
    let ranks: Vec<usize> = view.bytes.iter().map(|c| c.significance).collect();
    assert_eq!(ranks, vec![3, 2, 1, 0]);
    assert_eq!(view.words[0].hex, "12345678");

    assert_eq!(
        cast_value(&view, "int32"),
        Cast::Available("305419896".to_string())
    );
}

#[test]
fn malformed_input_renders_the_zero_view() {
    let view = inspect(
        "not a number",
        opts(InputFormat::Decimal, ByteOrder::Little, WordWidth::W32),
    );
    assert_eq!(view.value_decimal, "0");
    assert_eq!(view.value_hex, "0x0");
    assert_eq!(view.byte_count, 4);
    assert!(view.bytes.iter().all(|c| c.value == 0));
    // zero is a real reading here, not an unavailable one
    assert_eq!(cast_value(&view, "int32"), Cast::Available("0".to_string()));
}

#[test]
fn negative_value_under_16_bit_words() {
    let view = inspect(
        "-1",
        opts(InputFormat::Decimal, ByteOrder::Little, WordWidth::W16),
    );
    assert_eq!(view.value_hex, "-0x1");
    assert_eq!(view.byte_count, 2);
    let values: Vec<u8> = view.bytes.iter().map(|c| c.value).collect();
    assert_eq!(values, vec![0xFF, 0xFF]);
    assert_eq!(cast_value(&view, "int16"), Cast::Available("-1".to_string()));
    assert_eq!(
        cast_value(&view, "uint16"),
        Cast::Available("65535".to_string())
    );
}

#[test]
fn words_chunk_the_padded_sequence() {
    // 0x010203 needs 3 bytes, padded to two 16-bit words
    let view = inspect(
        "66051",
        opts(InputFormat::Decimal, ByteOrder::Little, WordWidth::W16),
    );
    assert_eq!(view.minimum_bytes, 3);
    assert_eq!(view.byte_count, 4);
    let offsets: Vec<usize> = view.words.iter().map(|w| w.offset).collect();
    assert_eq!(offsets, vec![0, 2]);
    let hexes: Vec<&str> = view.words.iter().map(|w| w.hex.as_str()).collect();
    assert_eq!(hexes, vec!["0302", "0100"]);
}

#[test]
fn zero_under_64_bit_words() {
    let view = inspect("0", opts(InputFormat::Decimal, ByteOrder::Big, WordWidth::W64));
    assert_eq!(view.byte_count, 8);
    assert_eq!(view.word_width_bits, 64);
    assert_eq!(view.words.len(), 1);
    assert_eq!(view.words[0].hex, "0000000000000000");
    assert_eq!(cast_value(&view, "float64"), Cast::Available("0".to_string()));
}

#[test]
fn non_finite_floats_render_by_name() {
    // 0x7FC00000 is a quiet f32 NaN
    let view = inspect(
        "0x7FC00000",
        opts(InputFormat::Hex, ByteOrder::Big, WordWidth::W32),
    );
    assert_eq!(cast_value(&view, "float32"), Cast::Available("NaN".to_string()));
}

#[test]
fn default_options_are_decimal_little_32() {
    let view = inspect("7", None);
    assert_eq!(view.byte_order, ByteOrder::Little);
    assert_eq!(view.word_width_bits, 32);
    assert_eq!(view.byte_count, 4);
}

#[test]
fn byte_cells_carry_msb_first_bits() {
    let view = inspect(
        "165",
        opts(InputFormat::Decimal, ByteOrder::Little, WordWidth::W16),
    );
    assert_eq!(view.bytes[0].value, 0xA5);
    assert_eq!(view.bytes[0].bits, [1, 0, 1, 0, 0, 1, 0, 1]);
    assert_eq!(view.bytes[0].hex, "A5");
}

#[test]
fn significance_index_maps_both_orders() {
    assert_eq!(significance_index(0, 4, ByteOrder::Little), 0);
    assert_eq!(significance_index(3, 4, ByteOrder::Little), 3);
    assert_eq!(significance_index(0, 4, ByteOrder::Big), 3);
    assert_eq!(significance_index(3, 4, ByteOrder::Big), 0);
}

#[test]
fn byte_bits_decomposes_msb_first() {
    assert_eq!(byte_bits(0x00), [0; 8]);
    assert_eq!(byte_bits(0xFF), [1; 8]);
    assert_eq!(byte_bits(0x80), [1, 0, 0, 0, 0, 0, 0, 0]);
    assert_eq!(byte_bits(0x01), [0, 0, 0, 0, 0, 0, 0, 1]);
}
