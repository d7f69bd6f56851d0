//! The huffman_coding module is the entropy stage of the squeeze pipeline.
//!
//! The bytes being coded here are the serialized LZ77 token records, not the
//! original document bytes. A frequency count over that stream feeds a
//! min-heap merge that builds one tree per compression run; reading codes off
//! the leaf paths gives every symbol a prefix-free '0'/'1' string.
//!
//! Only the leaf codes survive in the container. Decompression re-inserts
//! each (symbol, code) pair as a path into a fresh tree and walks it bit by
//! bit, resetting to the root at every leaf.
pub mod codes;
pub mod tree;
