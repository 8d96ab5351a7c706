// Ascon LWC KAT reader (`Count = ..`, `Key = ..`, `Nonce = ..`, `PT = ..`, `AD = ..`, `CT = ..`).
// One TestVector per Count tag, in file order. Values are kept as raw hex text;
// chunking/normalization happens later in ascon_chunk.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::ascon_error::KatError;

/// One KAT case. All payloads are hex text without a `0x` prefix.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestVector {
    pub count: usize,
    // kept for KAT sanity checks, not used by the ROM
    pub key: String,
    pub nonce: String,
    pub pt: String,
    pub ad: String,
    pub ct: String,
}

impl TestVector {
    /// True when nothing but `count` was set (a flush artifact, never emitted).
    pub fn is_zero(&self) -> bool {
        self.key.is_empty()
            && self.nonce.is_empty()
            && self.pt.is_empty()
            && self.ad.is_empty()
            && self.ct.is_empty()
    }
}

#[inline(always)]
fn parse_count(v: &str) -> usize {
    // malformed counts are tolerated as 0
    v.parse().unwrap_or(0)
}

#[inline(always)]
fn split_tag(line: &str) -> Option<(&str, &str)> {
    let (tag, val) = line.split_once('=')?;
    Some((tag.trim(), val.trim()))
}

/// Parse a KAT from any line source.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Vec<TestVector>, KatError> {
    let mut out = Vec::new();
    let mut v = TestVector::default();
    let mut ln = 0usize;

    // raw byte lines: stray non-UTF-8 bytes are replaced, not fatal
    for raw in reader.split(b'\n') {
        let raw = raw.map_err(|source| KatError::Read { line: ln, source })?;
        let line = String::from_utf8_lossy(&raw);
        let line = line.trim();

        if line.is_empty() {
            debug!(line = ln, "skipping empty line");
            ln += 1;
            continue;
        }

        let (tag, val) = split_tag(line).ok_or_else(|| KatError::Format {
            line: ln,
            text: line.to_string(),
        })?;

        match tag {
            "Count" => {
                let prev = std::mem::take(&mut v);
                if !prev.is_zero() {
                    out.push(prev);
                }
                v.count = parse_count(val);
            }
            "Key" => v.key = val.to_string(),
            "Nonce" => v.nonce = val.to_string(),
            "PT" => v.pt = val.to_string(),
            "AD" => v.ad = val.to_string(),
            "CT" => v.ct = val.to_string(),
            _ => {}
        }
        ln += 1;
    }

    debug!(lines = ln, "scanned KAT input");
    if !v.is_zero() {
        out.push(v);
    }
    Ok(out)
}

/// Open `path` and parse it. Open failures carry the path.
pub fn parse_file(path: &Path) -> Result<Vec<TestVector>, KatError> {
    let f = File::open(path).map_err(|source| KatError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    parse_reader(BufReader::new(f))
}
