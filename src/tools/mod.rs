//! The tools module provides the helpers around the squeeze pipeline.
//!
//! The tools are:
//! - cli: command line interface for squeeze.
//! - freq_count: byte frequency count feeding the Huffman tree builder.
//! - report: size statistics printed after a compression run.
pub mod cli;
pub mod freq_count;
pub mod report;
