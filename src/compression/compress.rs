use std::fs;

use log::{debug, info};

use crate::bitstream::bitpacker::BitPacker;
use crate::compression::container::Container;
use crate::error::SqueezeError;
use crate::huffman_coding::{codes, tree};
use crate::lz77::{matcher, token};
use crate::tools::freq_count;
use crate::tools::report::Stats;

/// Compress `input` into container bytes. Refuses an empty input.
pub fn compress_bytes(input: &[u8]) -> Result<Vec<u8>, SqueezeError> {
    if input.is_empty() {
        return Err(SqueezeError::EmptyInput);
    }

    // Stage 1: sliding-window match search, then serialize the tokens into
    // the byte stream the entropy stage works on.
    let tokens = matcher::tokenize(input);
    let token_bytes = token::encode_tokens(&tokens);
    debug!(
        "{} tokens, {} token stream bytes",
        tokens.len(),
        token_bytes.len()
    );

    // Stage 2: one Huffman tree for this run, built from the token stream's
    // own frequencies.
    let freqs = freq_count::freqs(&token_bytes);
    let root = tree::build_tree(&freqs).ok_or(SqueezeError::EmptyInput)?;
    let table = codes::code_table(&root);

    // Stage 3: concatenate each token-stream byte's code and pack to bytes.
    let mut bp = BitPacker::new(token_bytes.len());
    codes::encode(&token_bytes, &table, &mut bp);
    bp.flush();
    debug!("packed payload ends at {}", bp.loc());

    // Entries go into the container sorted by symbol so the same input
    // always produces the same container bytes.
    let mut code_entries: Vec<(u8, String)> = table.into_iter().collect();
    code_entries.sort_unstable_by_key(|&(symbol, _)| symbol);

    let container = Container {
        valid_bits: bp.bit_count() as u32,
        code_entries,
        payload: bp.output,
    };
    Ok(container.to_bytes())
}

/// Compress the file at `input` into a container at `output` and report the
/// size statistics.
pub fn compress(input: &str, output: &str) -> Result<(), SqueezeError> {
    let data = fs::read(input).map_err(|_| SqueezeError::InputNotFound(input.to_string()))?;
    info!("Compressing {} ({} bytes).", input, data.len());

    let container = compress_bytes(&data)?;
    write_replacing(output, &container)?;
    info!("Wrote {}.", output);

    Stats::new(data.len(), container.len()).report();
    Ok(())
}

/// Write through a temporary sibling and rename into place, so a failure
/// partway never leaves a half-written output file behind.
pub(crate) fn write_replacing(path: &str, data: &[u8]) -> Result<(), SqueezeError> {
    let tmp = format!("{}.tmp", path);
    fs::write(&tmp, data).map_err(|_| SqueezeError::OutputNotWritable(path.to_string()))?;
    if fs::rename(&tmp, path).is_err() {
        let _ = fs::remove_file(&tmp);
        return Err(SqueezeError::OutputNotWritable(path.to_string()));
    }
    Ok(())
}
