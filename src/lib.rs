//! squeeze: a two-stage lossless file compressor.
//!
//! Compression runs the input through an LZ77 sliding-window matcher,
//! serializes the resulting (offset, length, literal) tokens into a
//! fixed-width byte stream, Huffman-codes that stream, and bit-packs the
//! codes into a self-describing container that carries its own code table.
//! Decompression reverses each step, rebuilding the code tree from the
//! container before producing any output.
//!
//! The format is self-contained; it is not compatible with DEFLATE or any
//! other standard compressed format.
//!
//! Basic usage to compress a file:
//!
//! `$> squeeze compress test.txt`
//!
//! This writes the container test.txt.sqz alongside the original;
//! `squeeze decompress test.txt.sqz` restores it.
//!
pub mod bitstream;
pub mod compression;
pub mod error;
pub mod huffman_coding;
pub mod lz77;
pub mod tools;
