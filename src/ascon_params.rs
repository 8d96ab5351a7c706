// Ascon test ROM params: one ROM row = { empty(1), last(1), pad_bytes(5), data(128) }

pub const BYTES_PER_ROW: usize = 16;
pub const HEX_PER_BYTE: usize = 2;
pub const HEX_PER_ROW: usize = BYTES_PER_ROW * HEX_PER_BYTE; // 32

// CT = PT || tag; the ROM only keeps the first 3 rows of it
pub const CIPHER_CHUNK_CAP: usize = 3;

// An empty field is one row made entirely of padding
pub const EMPTY_PAD_BYTES: usize = BYTES_PER_ROW;

pub const INDEX_BITS: usize = 13;
pub const PAD_FIELD_BITS: usize = 5;
pub const DATA_BITS: usize = BYTES_PER_ROW * 8; // 128
pub const ROW_BITS: usize = 1 + 1 + PAD_FIELD_BITS + DATA_BITS; // 135

pub const MODULE_NAME: &str = "ascon_test_rom";
pub const DEFAULT_OUT_PATH: &str = "ascon_rom.sv";
