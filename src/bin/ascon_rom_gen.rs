// Generates ascon_rom.sv (SystemVerilog test ROM) from an Ascon KAT file.
// Usage: ascon_rom_gen <in-path> [out-path] [--sb] [-y] [-v]

use clap::Parser;

use ascon_rom::ascon_cli::{init_tracing, run, Cli};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    run(&cli)
}
