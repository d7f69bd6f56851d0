//! The compression module composes the squeeze pipeline stages into the two
//! user-facing operations.
//!
//! Compression happens in the following steps:
//! - LZ77 matching: collapse repeated phrases into (offset, length, literal)
//!   tokens against a 4096 byte sliding window.
//! - Token serialization: fixed-width binary records, concatenated into the
//!   byte stream the entropy stage sees.
//! - Huffman coding: frequent token-stream bytes get short bit codes, rare
//!   ones long codes.
//! - Bit packing: the concatenated codes become whole bytes, zero-padded at
//!   the tail, with the meaningful bit count recorded.
//! - Container assembly: magic/version, bit count, code table, payload.
//!
//! Decompression is the exact inverse: parse the container, rebuild the code
//! tree, unpack and decode the payload, parse the token records, replay them
//! against a growing output buffer.
//!
//! Both operations are single-shot and own every intermediate buffer; the
//! only I/O is a whole-file read at the start and a whole-file write at the
//! end.
pub mod compress;
pub mod container;
pub mod decompress;
