pub mod ascon_params;
pub mod ascon_error;

pub mod ascon_kat;
pub mod ascon_chunk;
pub mod ascon_swap;
pub mod ascon_rom;

pub mod ascon_io;
pub mod ascon_cli;
