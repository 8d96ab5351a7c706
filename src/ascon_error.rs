// Errors surfaced by the KAT parser and the ROM writer.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum KatError {
    /// The KAT file could not be opened.
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading from an already open source failed. `line` is 0-based.
    #[error("parse:{line}: failed to read KAT input: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("failed to prompt for overwrite: {0}")]
    Prompt(#[from] io::Error),

    /// A non-blank line is not `key = value`. `line` is 0-based.
    #[error("parse:{line}: expected key=value, got {text:?}")]
    Format { line: usize, text: String },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Output exists and the user declined to overwrite it.
    #[error("file {} already exists", .path.display())]
    Exists { path: PathBuf },
}
