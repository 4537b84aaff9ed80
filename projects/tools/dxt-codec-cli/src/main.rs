#![allow(unexpected_cfgs)]
#![cfg(not(tarpaulin_include))]

mod commands;
mod error;
mod util;

use argh::FromArgs;
use core::error::Error;
use dxt_codec_common::format::FormatRegistry;
use tracing_subscriber::EnvFilter;

#[derive(FromArgs, Debug)]
/// Compress PNG images to BCn/S3TC block streams and back
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Compress(commands::compress::CompressCmd),
    Decompress(commands::decompress::DecompressCmd),
}

fn main() -> Result<(), Box<dyn Error>> {
    // Silent by default; RUST_LOG=dxt_codec_api=debug shows per-level progress.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli: TopLevel = argh::from_env();
    let registry = FormatRegistry::standard();

    match cli.command {
        Commands::Compress(cmd) => {
            commands::compress::handle_compress_command(cmd, &registry)?;
        }
        Commands::Decompress(cmd) => {
            commands::decompress::handle_decompress_command(cmd, &registry)?;
        }
    }

    Ok(())
}
