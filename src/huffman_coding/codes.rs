use log::error;
use rustc_hash::FxHashMap;

use super::tree::{Node, NodeData};
use crate::bitstream::bitpacker::BitPacker;

/// Mapping from symbol to its '0'/'1' code string.
pub type CodeTable = FxHashMap<u8, String>;

/// Read the code table off the tree: a depth-first walk appending '0' on
/// left edges and '1' on right edges, emitting the accumulated string at
/// each leaf. A single-leaf tree (one distinct symbol in the input) gets the
/// one-bit code "0" rather than the empty string, so every encoded symbol
/// occupies at least one bit.
pub fn code_table(root: &Node) -> CodeTable {
    let mut table = CodeTable::default();
    match &root.node_data {
        NodeData::Leaf(symbol) => {
            table.insert(*symbol, "0".to_string());
        }
        NodeData::Kids(..) => walk(root, String::new(), &mut table),
    }
    table
}

fn walk(node: &Node, code: String, table: &mut CodeTable) {
    match &node.node_data {
        NodeData::Leaf(symbol) => {
            table.insert(*symbol, code);
        }
        NodeData::Kids(left, right) => {
            let mut left_code = code.clone();
            left_code.push('0');
            walk(left, left_code, table);
            let mut right_code = code;
            right_code.push('1');
            walk(right, right_code, table);
        }
    }
}

/// Huffman-encode `data` through the packer by concatenating each byte's
/// code. The table was built from this data's own frequency count, so every
/// byte has an entry.
pub fn encode(data: &[u8], table: &CodeTable, bp: &mut BitPacker) {
    for byte in data {
        match table.get(byte) {
            Some(code) => bp.push_code(code),
            None => error!("No code for byte {:#04x}.", byte),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bitstream::bitreader::BitReader;
    use crate::huffman_coding::tree::{build_tree, DecodeTree};
    use crate::tools::freq_count::freqs;

    #[test]
    fn frequent_symbols_get_shorter_codes() {
        let data = b"aaaaaaaabbbbc";
        let table = code_table(&build_tree(&freqs(data)).unwrap());
        assert!(table[&b'a'].len() < table[&b'c'].len());
        assert!(table[&b'a'].len() <= table[&b'b'].len());
    }

    #[test]
    fn table_is_prefix_free() {
        let data = b"the quick brown fox jumps over the lazy dog";
        let table = code_table(&build_tree(&freqs(data)).unwrap());
        let codes: Vec<&String> = table.values().collect();
        for (i, a) in codes.iter().enumerate() {
            assert!(!a.is_empty());
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a.as_str()), "{} prefixes {}", a, b);
                }
            }
        }
    }

    #[test]
    fn single_symbol_gets_a_one_bit_code() {
        let data = b"zzzzzz";
        let table = code_table(&build_tree(&freqs(data)).unwrap());
        assert_eq!(table.len(), 1);
        assert_eq!(table[&b'z'], "0");
    }

    #[test]
    fn encode_then_decode_is_identity() {
        let data = b"compression round trip, compression round trip";
        let table = code_table(&build_tree(&freqs(data)).unwrap());

        let mut bp = BitPacker::new(data.len());
        encode(data, &table, &mut bp);
        bp.flush();

        let dtree =
            DecodeTree::from_codes(table.iter().map(|(&s, c)| (s, c.as_str()))).unwrap();
        let mut br = BitReader::new(&bp.output, bp.bit_count());
        assert_eq!(dtree.decode(&mut br).unwrap(), data);
    }

    #[test]
    fn single_symbol_payload_is_one_bit_per_byte() {
        let data = vec![b'x'; 64];
        let table = code_table(&build_tree(&freqs(&data)).unwrap());

        let mut bp = BitPacker::new(data.len() / 8);
        encode(&data, &table, &mut bp);
        bp.flush();
        assert_eq!(bp.bit_count(), data.len());
        assert_eq!(bp.output.len(), data.len() / 8);
    }
}
