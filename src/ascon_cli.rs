// Command-line front end for the ROM generator.

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::ascon_error::KatError;
use crate::ascon_io::{confirm_overwrite, write_atomic};
use crate::ascon_kat::parse_file;
use crate::ascon_params::DEFAULT_OUT_PATH;
use crate::ascon_rom::generate;
use crate::ascon_swap::ByteSwapMode;

#[derive(Parser, Debug)]
#[command(
    name = "ascon_rom_gen",
    version,
    about = "Generate a SystemVerilog ROM from an Ascon KAT file"
)]
pub struct Cli {
    /// Ascon KAT file (Count/Key/Nonce/PT/AD/CT records).
    #[arg(value_name = "IN_PATH")]
    pub in_path: PathBuf,

    /// Generated SystemVerilog module.
    #[arg(value_name = "OUT_PATH", default_value = DEFAULT_OUT_PATH)]
    pub out_path: PathBuf,

    #[arg(
        long = "swap-bytes",
        visible_alias = "sb",
        action = ArgAction::SetTrue,
        long_help = "Swap the byte order of the data portion of each row (padding unchanged)."
    )]
    pub swap_bytes: bool,

    #[arg(
        short = 'y',
        long = "yes",
        action = ArgAction::SetTrue,
        long_help = "Overwrite OUT_PATH without asking if it already exists."
    )]
    pub yes: bool,

    /// More log output (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn swap_mode(&self) -> ByteSwapMode {
        ByteSwapMode::from_flag(self.swap_bytes)
    }
}

fn default_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Install the stderr log subscriber. Safe to call more than once.
pub fn init_tracing(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Parse the KAT, render the ROM and write it.
pub fn run(cli: &Cli) -> Result<()> {
    if cli.out_path.exists() && !cli.yes {
        let stdin = io::stdin();
        let ok = confirm_overwrite(&cli.out_path, stdin.lock(), io::stderr())?;
        if !ok {
            return Err(KatError::Exists {
                path: cli.out_path.clone(),
            }
            .into());
        }
    }

    info!(
        input = %cli.in_path.display(),
        output = %cli.out_path.display(),
        swap_bytes = cli.swap_bytes,
        "generating Ascon ROM"
    );

    let vectors = parse_file(&cli.in_path)
        .with_context(|| format!("failed to parse KAT file {}", cli.in_path.display()))?;
    info!(vectors = vectors.len(), "parsed vectors");

    let code = generate(&vectors, cli.swap_mode());
    info!(bytes = code.len(), "generated ROM source");

    write_atomic(&cli.out_path, &code)
        .with_context(|| format!("failed to write {}", cli.out_path.display()))?;
    info!(path = %cli.out_path.display(), "wrote ROM");

    Ok(())
}
