// In-row byte reordering for the ROM data field.
// Only the data portion (first `used_bytes`) is touched; right-side padding stays put.

use crate::ascon_params::{BYTES_PER_ROW, HEX_PER_BYTE, HEX_PER_ROW};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ByteSwapMode {
    #[default]
    None,
    /// Reverse the order of the data bytes.
    DataReverse,
}

impl ByteSwapMode {
    /// Mapping of the `--swap-bytes` flag.
    pub fn from_flag(swap_bytes: bool) -> Self {
        if swap_bytes {
            ByteSwapMode::DataReverse
        } else {
            ByteSwapMode::None
        }
    }
}

#[inline(always)]
fn zero_row() -> String {
    "0".repeat(HEX_PER_ROW)
}

/// Reorder the first `used_bytes` of a 32-hex-digit row according to `mode`.
/// A row that is not exactly 32 hex digits comes back as all zeros.
pub fn apply_byte_swap(chunk: &str, used_bytes: usize, mode: ByteSwapMode) -> String {
    let mut row = [0u8; BYTES_PER_ROW];
    if hex::decode_to_slice(chunk, &mut row).is_err() {
        return zero_row();
    }

    let used = used_bytes.min(BYTES_PER_ROW);
    if used == 0 {
        return chunk.to_string();
    }

    match mode {
        ByteSwapMode::None => chunk.to_string(),
        ByteSwapMode::DataReverse => {
            row[..used].reverse();
            // chunk is validated ASCII hex, so the byte split is a char split
            let mut out = hex::encode_upper(&row[..used]);
            out.push_str(&chunk[used * HEX_PER_BYTE..]);
            out
        }
    }
}
