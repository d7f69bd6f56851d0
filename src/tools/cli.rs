use clap::{Parser, Subcommand};

/// Command line surface for squeeze.
#[derive(Parser, Debug)]
#[clap(
    name = "squeeze",
    version,
    about = "A two-stage LZ77 + Huffman file compressor."
)]
pub struct SqzOpts {
    /// Raise log verbosity (-v debug, -vv trace)
    #[clap(short, long, parse(from_occurrences), global = true)]
    pub verbose: u64,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compress a file into a .sqz container
    Compress {
        /// File to compress
        input: String,
        /// Output path (defaults to INPUT.sqz)
        #[clap(short, long)]
        output: Option<String>,
    },
    /// Expand a .sqz container back into the original bytes
    Decompress {
        /// Container to expand
        input: String,
        /// Output path (defaults to INPUT without its .sqz suffix)
        #[clap(short, long)]
        output: Option<String>,
    },
}

/// Default output path for compression: append .sqz.
pub fn default_compress_output(input: &str) -> String {
    format!("{}.sqz", input)
}

/// Default output path for decompression: strip a trailing .sqz, or append
/// .out when there is none to strip.
pub fn default_decompress_output(input: &str) -> String {
    match input.strip_suffix(".sqz") {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => format!("{}.out", input),
    }
}
