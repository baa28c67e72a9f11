pub mod bit_layout;
pub use bit_layout::{byte_bits, significance_index};

pub mod inspect;
pub use inspect::{InspectOptions, InspectionView, inspect};

pub mod minimum_bytes;
pub use minimum_bytes::{minimum_bytes, padded_length};

pub mod parse_value;
pub use parse_value::{parse_or_zero, parse_value};

pub mod reinterpret;
pub use reinterpret::{Reinterpreted, reinterpret};

pub mod structs;

pub mod to_bytes;
pub use to_bytes::to_bytes;

pub mod utilities;
pub use utilities::{hex_byte, hex_bytes, strip_separators};
