// Output side: atomic write of the generated ROM + overwrite prompt.

use std::ffi::OsString;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::ascon_error::KatError;

fn tmp_path(path: &Path) -> PathBuf {
    let mut s: OsString = path.as_os_str().to_owned();
    s.push(".tmp");
    PathBuf::from(s)
}

/// Write `contents` to `<path>.tmp`, then rename it over `path`.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), KatError> {
    let tmp = tmp_path(path);
    fs::write(&tmp, contents).map_err(|source| KatError::Write {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| KatError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Ask whether `path` may be overwritten. Only `y` / `yes` accept; EOF declines.
pub fn confirm_overwrite<R: BufRead, W: Write>(
    path: &Path,
    mut input: R,
    mut output: W,
) -> Result<bool, KatError> {
    write!(output, "File {} already exists. Overwrite? [y/N] ", path.display())?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
