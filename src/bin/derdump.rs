//! Reads BER or DER encoded data and displays its structure.
//!
//! The input comes from a file given on the command line or from standard
//! input, optionally as hex text. The rendering goes to standard output,
//! diagnostics go to the logger.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use anyhow::Context;
use clap::Parser;
use derdump::Dumper;

#[derive(Parser)]
#[command(version, about = "Display the structure of BER or DER encoded data")]
struct Args {
    /// Decode the input from hex text first
    #[arg(long)]
    hex: bool,

    /// Width of the field name column
    #[arg(long, value_name = "COLS", default_value_t = 48)]
    width: usize,

    /// Give up beyond this nesting depth
    #[arg(long, value_name = "DEPTH", default_value_t = 64)]
    max_depth: usize,

    /// File to read; standard input if omitted
    file: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")
        .context("invalid log specification")?
        .start()
        .context("starting logger")?;

    let mut data = match args.file.as_ref() {
        Some(path) => {
            fs::read(path).with_context(|| {
                format!("reading {}", path.display())
            })?
        }
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf).context("reading stdin")?;
            buf
        }
    };

    if args.hex {
        data.retain(|octet| !octet.is_ascii_whitespace());
        data = hex::decode(&data).context("decoding hex input")?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    Dumper::new()
        .with_width(args.width)
        .with_max_depth(args.max_depth)
        .dump(&data, &mut out)?;
    writeln!(out)?;
    Ok(())
}
