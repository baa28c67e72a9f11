use serde::{Deserialize, Serialize};

/// Which end of a multi-byte value sits at index 0 of the byte sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    Little,
    Big,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordWidth {
    W16,
    W32,
    W64,
}

impl WordWidth {
    #[inline]
    pub fn bits(self) -> usize {
        match self {
            WordWidth::W16 => 16,
            WordWidth::W32 => 32,
            WordWidth::W64 => 64,
        }
    }

    #[inline]
    pub fn bytes(self) -> usize {
        self.bits() / 8
    }

    pub fn from_bits(bits: usize) -> Option<WordWidth> {
        match bits {
            16 => Some(WordWidth::W16),
            32 => Some(WordWidth::W32),
            64 => Some(WordWidth::W64),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Decimal,
    Hex,
}

/// One reinterpretation of the byte buffer. `Unavailable` means the buffer
/// holds fewer bytes than the type needs, which is distinct from reading a
/// legitimate zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cast<T> {
    Available(T),
    Unavailable,
}

impl<T> Cast<T> {
    #[inline]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Cast<U> {
        match self {
            Cast::Available(v) => Cast::Available(f(v)),
            Cast::Unavailable => Cast::Unavailable,
        }
    }

    #[inline]
    pub fn available(self) -> Option<T> {
        match self {
            Cast::Available(v) => Some(v),
            Cast::Unavailable => None,
        }
    }
}
