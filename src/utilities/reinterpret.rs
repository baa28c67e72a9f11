use serde::{Deserialize, Serialize};

use crate::utilities::structs::{ByteOrder, Cast};

/// The same byte buffer read under every supported numeric type. Types whose
/// width exceeds the buffer report `Unavailable`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Reinterpreted {
    pub int8: Cast<i8>,
    pub uint8: Cast<u8>,
    pub int16: Cast<i16>,
    pub uint16: Cast<u16>,
    pub int32: Cast<i32>,
    pub uint32: Cast<u32>,
    pub float32: Cast<f32>,
    pub int64: Cast<i64>,
    pub uint64: Cast<u64>,
    pub float64: Cast<f64>,
}

macro_rules! read_as {
    ($ty:ty, $bytes:expr, $order:expr) => {{
        const N: usize = size_of::<$ty>();
        if $bytes.len() < N {
            Cast::Unavailable
        } else {
            let mut word = [0u8; N];
            word.copy_from_slice(&$bytes[..N]);
            Cast::Available(match $order {
                ByteOrder::Little => <$ty>::from_le_bytes(word),
                ByteOrder::Big => <$ty>::from_be_bytes(word),
            })
        }
    }};
}

/// Each interpretation independently reads its width from index 0, the way a
/// typed load at the buffer's base address would.
pub fn reinterpret(bytes: &[u8], order: ByteOrder) -> Reinterpreted {
    Reinterpreted {
        int8: read_as!(i8, bytes, order),
        uint8: read_as!(u8, bytes, order),
        int16: read_as!(i16, bytes, order),
        uint16: read_as!(u16, bytes, order),
        int32: read_as!(i32, bytes, order),
        uint32: read_as!(u32, bytes, order),
        float32: read_as!(f32, bytes, order),
        int64: read_as!(i64, bytes, order),
        uint64: read_as!(u64, bytes, order),
        float64: read_as!(f64, bytes, order),
    }
}
