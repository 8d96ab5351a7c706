// Splits one hex payload (PT / AD / CT) into 128-bit ROM rows.
//
// Only the final row is right-padded with '0' (least-significant end).
// pad_bytes is computed once per field, from the final row, and every row of
// that field carries the same value (the ROM consumer expects a constant pad
// field across a vector's rows).

use crate::ascon_params::{BYTES_PER_ROW, CIPHER_CHUNK_CAP, EMPTY_PAD_BYTES, HEX_PER_BYTE, HEX_PER_ROW};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Plain,
    Associated,
    Cipher,
}

impl FieldKind {
    pub const ALL: [FieldKind; 3] = [FieldKind::Plain, FieldKind::Associated, FieldKind::Cipher];

    /// Port/signal prefix in the generated module (`<signal>_index`, `<signal>_text`).
    pub fn signal(self) -> &'static str {
        match self {
            FieldKind::Plain => "plain",
            FieldKind::Associated => "associated",
            FieldKind::Cipher => "cipher",
        }
    }

    /// Maximum number of rows kept for this field.
    pub fn cap(self) -> Option<usize> {
        match self {
            FieldKind::Cipher => Some(CIPHER_CHUNK_CAP),
            FieldKind::Plain | FieldKind::Associated => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Chunk {
    /// Exactly 32 hex digits, data first, '0' padding last.
    pub data: String,
    /// Meaningful bytes at the front of `data` (0..=16).
    pub used_bytes: usize,
    pub is_last: bool,
    pub is_empty_field: bool,
    /// Trailing pad bytes of the whole field (same on every row of the field).
    pub pad_bytes: usize,
}

impl Chunk {
    fn empty_field() -> Self {
        Self {
            data: "0".repeat(HEX_PER_ROW),
            used_bytes: 0,
            is_last: true,
            is_empty_field: true,
            pad_bytes: EMPTY_PAD_BYTES,
        }
    }
}

/// Trim + uppercase, as done at the parse boundary of the ROM generator.
#[inline(always)]
pub fn normalize_hex(s: &str) -> String {
    s.trim().to_uppercase()
}

/// Pad bytes needed to fill the last 128-bit row of a `hex_len`-digit field.
#[inline(always)]
pub fn pad_bytes_for_len(hex_len: usize) -> usize {
    let rem = hex_len % HEX_PER_ROW;
    if rem == 0 {
        0
    } else {
        (HEX_PER_ROW - rem) / HEX_PER_BYTE
    }
}

/// Split `field` into rows, keeping at most `cap` of them.
pub fn chunk_field(field: &str, cap: Option<usize>) -> Vec<Chunk> {
    let hex: Vec<char> = normalize_hex(field).chars().collect();
    if hex.is_empty() {
        return vec![Chunk::empty_field()];
    }

    let pad_bytes = pad_bytes_for_len(hex.len());
    let total = hex.len().div_ceil(HEX_PER_ROW);
    let keep = cap.map_or(total, |c| total.min(c));

    hex.chunks(HEX_PER_ROW)
        .take(keep)
        .enumerate()
        .map(|(idx, digits)| {
            let mut data: String = digits.iter().collect();
            data.extend(std::iter::repeat('0').take(HEX_PER_ROW - digits.len()));

            // the field-level pad applies to the last kept row, even when the cap cut the tail
            let used_bytes = if idx + 1 == keep {
                BYTES_PER_ROW - pad_bytes
            } else {
                BYTES_PER_ROW
            };

            Chunk {
                data,
                used_bytes,
                is_last: idx + 1 == keep,
                is_empty_field: false,
                pad_bytes,
            }
        })
        .collect()
}

/// Chunk a field with the row cap of its kind.
pub fn chunk_kind(kind: FieldKind, field: &str) -> Vec<Chunk> {
    chunk_field(field, kind.cap())
}
