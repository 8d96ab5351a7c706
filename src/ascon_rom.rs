// SystemVerilog ROM emitter.
//
// Three combinational lookup tables (PT / AD / CT), each indexed by a 13-bit
// {count, row} address and returning a 135-bit row:
//     { empty(1), last(1), pad_bytes(5), data(128) }

use std::fmt::Write as _;

use rhdl::prelude::{bits, Bits, U128, U5};

use crate::ascon_chunk::{chunk_kind, Chunk, FieldKind};
use crate::ascon_kat::TestVector;
use crate::ascon_params::{DATA_BITS, INDEX_BITS, MODULE_NAME, PAD_FIELD_BITS, ROW_BITS};
use crate::ascon_swap::{apply_byte_swap, ByteSwapMode};

// ------------------------------
// ROM row
// ------------------------------

#[derive(Clone, Copy, Debug, Default)]
pub struct RomEntry {
    pub count: usize,
    /// row position inside the field
    pub index: usize,
    pub empty: bool,
    pub last: bool,
    pub pad_bytes: Bits<U5>,
    pub data: Bits<U128>,
}

#[inline(always)]
fn bit_literal(b: bool) -> &'static str {
    if b {
        "1'b1"
    } else {
        "1'b0"
    }
}

impl RomEntry {
    /// Build the row for `chunk`, reordering its data bytes with `mode`.
    pub fn from_chunk(count: usize, index: usize, chunk: &Chunk, mode: ByteSwapMode) -> Self {
        let data_hex = apply_byte_swap(&chunk.data, chunk.used_bytes, mode);
        // apply_byte_swap only returns valid 32-digit hex
        let data = u128::from_str_radix(&data_hex, 16).unwrap_or(0);
        Self {
            count,
            index,
            empty: chunk.is_empty_field,
            last: chunk.is_last,
            pad_bytes: bits(chunk.pad_bytes as u128),
            data: bits(data),
        }
    }

    /// `13'h<count>_<row>`
    pub fn address(&self) -> String {
        format!("{}'h{:X}_{:X}", INDEX_BITS, self.count, self.index)
    }

    pub fn to_case_line(&self, kind: FieldKind) -> String {
        format!(
            "        {:<6}: {}_text = {{{}, {}, {}'d{}, {}'h{:032X}}};\n",
            self.address(),
            kind.signal(),
            bit_literal(self.empty),
            bit_literal(self.last),
            PAD_FIELD_BITS,
            self.pad_bytes.raw(),
            DATA_BITS,
            self.data.raw(),
        )
    }
}

// ------------------------------
// Template
// ------------------------------

fn write_header(out: &mut String) {
    let _ = write!(
        out,
        "/**\n *  Module: {name}\n *  Auto-generated.\n **/\nmodule {name} (\n    // key/nonce ROM removed (constant elsewhere)\n",
        name = MODULE_NAME
    );
    for kind in FieldKind::ALL {
        let _ = writeln!(out, "    input  [{}:0] {}_index,", INDEX_BITS - 1, kind.signal());
    }
    for (i, kind) in FieldKind::ALL.iter().enumerate() {
        let sep = if i + 1 == FieldKind::ALL.len() { "" } else { "," };
        let _ = writeln!(out, "    output logic [{}:0] {}_text{}", ROW_BITS - 1, kind.signal(), sep);
    }
    out.push_str(");\n");
}

const TPL_PLAIN_OPEN: &str = "
// ---- PT (Plain) ------------------------------------------------------------
always_comb begin : plain_text_mux
    case (plain_index)
";

const TPL_ASSOCIATED_OPEN: &str = "
// ---- AD (Associated) -------------------------------------------------------
always_comb begin : associated_text_mux
    case (associated_index)
";

const TPL_CIPHER_OPEN: &str = "
// ---- CT (Cipher) -----------------------------------------------------------
always_comb begin : cipher_text_mux
    case (cipher_index)
";


fn table_open(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Plain => TPL_PLAIN_OPEN,
        FieldKind::Associated => TPL_ASSOCIATED_OPEN,
        FieldKind::Cipher => TPL_CIPHER_OPEN,
    }
}

fn table_close(out: &mut String, kind: FieldKind) {
    let _ = write!(
        out,
        "        default: {}_text = {}'d0;\n    endcase\nend\n",
        kind.signal(),
        ROW_BITS
    );
}

// ------------------------------
// Document
// ------------------------------

/// Case-table bodies of the three ROMs, rendered into the fixed module template.
#[derive(Clone, Debug, Default)]
pub struct RomDocument {
    plain: String,
    associated: String,
    cipher: String,
}

impl RomDocument {
    pub fn body(&self, kind: FieldKind) -> &str {
        match kind {
            FieldKind::Plain => &self.plain,
            FieldKind::Associated => &self.associated,
            FieldKind::Cipher => &self.cipher,
        }
    }

    fn body_mut(&mut self, kind: FieldKind) -> &mut String {
        match kind {
            FieldKind::Plain => &mut self.plain,
            FieldKind::Associated => &mut self.associated,
            FieldKind::Cipher => &mut self.cipher,
        }
    }

    /// Append every row of one field of one vector.
    pub fn push_field(&mut self, kind: FieldKind, count: usize, field: &str, mode: ByteSwapMode) {
        let body = self.body_mut(kind);
        for (idx, chunk) in chunk_kind(kind, field).iter().enumerate() {
            let entry = RomEntry::from_chunk(count, idx, chunk, mode);
            body.push_str(&entry.to_case_line(kind));
        }
    }

    pub fn push_vector(&mut self, v: &TestVector, mode: ByteSwapMode) {
        self.push_field(FieldKind::Plain, v.count, &v.pt, mode);
        self.push_field(FieldKind::Associated, v.count, &v.ad, mode);
        self.push_field(FieldKind::Cipher, v.count, &v.ct, mode);
    }

    pub fn render(&self) -> String {
        let mut out = String::with_capacity(
            self.plain.len() + self.associated.len() + self.cipher.len() + 2048,
        );
        write_header(&mut out);
        for kind in FieldKind::ALL {
            out.push_str(table_open(kind));
            out.push_str(self.body(kind));
            table_close(&mut out, kind);
        }
        let _ = write!(out, "\nendmodule : {}\n", MODULE_NAME);
        out
    }
}

/// Render the full ROM module for `vectors`.
pub fn generate(vectors: &[TestVector], mode: ByteSwapMode) -> String {
    let mut doc = RomDocument::default();
    for v in vectors {
        doc.push_vector(v, mode);
    }
    doc.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(count: usize, pt: &str, ad: &str, ct: &str) -> TestVector {
        TestVector {
            count,
            key: "000102030405060708090A0B0C0D0E0F".into(),
            nonce: "101112131415161718191A1B1C1D1E1F".into(),
            pt: pt.into(),
            ad: ad.into(),
            ct: ct.into(),
        }
    }

    #[test]
    fn case_line_format() {
        let mut doc = RomDocument::default();
        doc.push_field(FieldKind::Plain, 0, "AABBCCDDEEFF", ByteSwapMode::None);
        assert_eq!(
            doc.body(FieldKind::Plain),
            "        13'h0_0: plain_text = {1'b0, 1'b1, 5'd10, 128'hAABBCCDDEEFF00000000000000000000};\n"
        );
    }

    #[test]
    fn swapped_case_line_keeps_padding() {
        let mut doc = RomDocument::default();
        doc.push_field(FieldKind::Plain, 0, "AABBCCDDEEFF", ByteSwapMode::DataReverse);
        assert!(doc
            .body(FieldKind::Plain)
            .contains("128'hFFEEDDCCBBAA00000000000000000000"));
    }

    #[test]
    fn empty_field_row() {
        let mut doc = RomDocument::default();
        doc.push_field(FieldKind::Associated, 0x1F, "", ByteSwapMode::DataReverse);
        assert_eq!(
            doc.body(FieldKind::Associated),
            format!(
                "        13'h1F_0: associated_text = {{1'b1, 1'b1, 5'd16, 128'h{}}};\n",
                "0".repeat(32)
            )
        );
    }

    #[test]
    fn multi_row_field_marks_only_the_last() {
        let mut doc = RomDocument::default();
        doc.push_field(FieldKind::Cipher, 2, &"11".repeat(20), ByteSwapMode::None);
        let lines: Vec<&str> = doc.body(FieldKind::Cipher).lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("13'h2_0: cipher_text = {1'b0, 1'b0, 5'd12,"));
        assert!(lines[1].contains("13'h2_1: cipher_text = {1'b0, 1'b1, 5'd12,"));
    }

    #[test]
    fn capped_cipher_swaps_only_the_padded_span_of_its_last_row() {
        // 3 full rows + 4-byte tail: pad = 12, row 2 is the last kept row
        let ct = format!(
            "{}{}{}AABBCCDD",
            "00".repeat(16),
            "11".repeat(16),
            "0102030405060708090A0B0C0D0E0F10"
        );
        let mut doc = RomDocument::default();
        doc.push_field(FieldKind::Cipher, 0, &ct, ByteSwapMode::DataReverse);
        let lines: Vec<&str> = doc.body(FieldKind::Cipher).lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[2],
            "        13'h0_2: cipher_text = {1'b0, 1'b1, 5'd12, 128'h0403020105060708090A0B0C0D0E0F10};"
        );
        assert!(!doc.body(FieldKind::Cipher).contains("AABBCCDD"));
    }

    #[test]
    fn header_matches_fixed_port_list() {
        let mut out = String::new();
        write_header(&mut out);
        assert_eq!(
            out,
            "/**
 *  Module: ascon_test_rom
 *  Auto-generated.
 **/
module ascon_test_rom (
    // key/nonce ROM removed (constant elsewhere)
    input  [12:0] plain_index,
    input  [12:0] associated_index,
    input  [12:0] cipher_index,
    output logic [134:0] plain_text,
    output logic [134:0] associated_text,
    output logic [134:0] cipher_text
);
"
        );
    }

    #[test]
    fn dropped_cipher_rows_never_reach_the_output() {
        let ct: String = ["A", "B", "C", "D", "E"].iter().map(|d| d.repeat(32)).collect();
        let out = generate(&[vector(0, "", "", &ct)], ByteSwapMode::None);
        assert!(out.contains(&"C".repeat(32)));
        assert!(!out.contains(&"D".repeat(32)));
        assert!(!out.contains(&"E".repeat(32)));
        assert!(!out.contains("13'h0_3"));
    }

    #[test]
    fn template_shape() {
        let out = generate(&[], ByteSwapMode::None);
        assert!(out.starts_with("/**\n *  Module: ascon_test_rom"));
        assert!(out.ends_with(&format!("endmodule : {}\n", MODULE_NAME)));
        assert!(out.contains(&format!("output logic [{}:0] cipher_text", ROW_BITS - 1)));
        assert!(out.contains(&format!("input  [{}:0] plain_index", INDEX_BITS - 1)));
        for sig in ["plain", "associated", "cipher"] {
            assert!(out.contains(&format!("case ({}_index)", sig)));
            assert!(out.contains(&format!("default: {}_text = 135'd0;", sig)));
        }
    }

    #[test]
    fn tables_follow_vector_order() {
        let vs = [vector(1, "01", "", "02"), vector(2, "03", "04", "")];
        let out = generate(&vs, ByteSwapMode::None);
        let a = out.find("13'h1_0: plain_text").unwrap();
        let b = out.find("13'h2_0: plain_text").unwrap();
        let ad = out.find("associated_text_mux").unwrap();
        assert!(a < b && b < ad);
        assert_eq!(out, generate(&vs, ByteSwapMode::None));
    }
}
