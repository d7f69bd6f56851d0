//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::process::ExitCode;

use clap::Parser;
use log::{error, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use squeeze::compression::compress::compress;
use squeeze::compression::decompress::decompress;
use squeeze::tools::cli::{
    default_compress_output, default_decompress_output, Command, SqzOpts,
};

fn main() -> ExitCode {
    let opts = SqzOpts::parse();

    // Available log levels are Error, Warn, Info, Debug, Trace
    let level = match opts.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .is_err()
    {
        eprintln!("Could not initialize the logger.");
    }

    //----- Figure out what we need to do and go do it
    let result = match &opts.command {
        Command::Compress { input, output } => {
            let output = output
                .clone()
                .unwrap_or_else(|| default_compress_output(input));
            compress(input, &output)
        }
        Command::Decompress { input, output } => {
            let output = output
                .clone()
                .unwrap_or_else(|| default_decompress_output(input));
            decompress(input, &output)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
