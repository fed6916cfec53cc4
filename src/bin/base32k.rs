//! base32k command-line shell.
//!
//! Reads one line from stdin and writes its encoding (or, with `-d`, its
//! decoding) plus a newline to stdout. Errors go to stderr with exit status 1.
//! Diagnostics are enabled through `RUST_LOG`.

#![forbid(unsafe_code)]

use std::io;
use std::process::ExitCode;

use base32k::{cli, init_logging, CodecConfig, Mode};
use clap::Parser;

/// Encode stdin to base32k, or decode it back.
#[derive(Parser)]
#[command(name = "base32k")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Decode the standard input
    #[arg(short, long)]
    decode: bool,
}

fn main() -> ExitCode {
    let args = Cli::parse();
    let config = CodecConfig::for_mode(if args.decode { Mode::Decode } else { Mode::Encode });
    init_logging(config.log_level());

    match cli::run(&config, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
