use std::io;

use thiserror::Error;

/// Errors surfaced at the compress/decompress operation boundary.
///
/// Stages between the two file boundaries hand each other structures they
/// built themselves, so format errors can only arise while parsing external
/// bytes; everything here maps to one of the two I/O edges.
#[derive(Debug, Error)]
pub enum SqueezeError {
    /// Source path missing or unreadable.
    #[error("cannot read input file {0}")]
    InputNotFound(String),
    /// Zero-length source. Compressing nothing is refused rather than
    /// producing an empty container.
    #[error("input is empty")]
    EmptyInput,
    /// Destination path could not be created or written.
    #[error("cannot write output file {0}")]
    OutputNotWritable(String),
    /// Header, code table, or payload failed to parse cleanly.
    #[error("malformed container: {0}")]
    MalformedContainer(String),
    /// Unclassified I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
