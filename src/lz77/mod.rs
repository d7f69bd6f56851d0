//! The lz77 module is the match-finding stage of the squeeze pipeline.
//!
//! A sliding window over the already-scanned input supplies back-references:
//! each step emits one token holding the longest match found (offset and
//! length) plus the literal byte that follows it. Input with no repetition
//! degrades to one literal token per byte; runs and repeated phrases collapse
//! into short copy instructions.
//!
//! Tokens are serialized as fixed-width binary records, and that record
//! stream is what the Huffman stage compresses.
pub mod matcher;
pub mod token;
