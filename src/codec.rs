//! Encoding and decoding of whole containers.

use tracing::debug;

use crate::bits::{BitReader, BitWriter};
use crate::container::Container;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::result::CompressionResult;
use crate::tree::{HuffNode, HuffmanTree};

pub const MSG_EMPTY: &str = "Compression complete! Empty file processed.";
pub const MSG_SINGLE: &str = "Compression complete! Single character file processed.";
pub const MSG_COMPRESSED: &str = "Compression completed successfully!";
pub const MSG_DECOMPRESSED: &str = "Decompression completed successfully!";

/// Stateless Huffman codec. Each call works only on its own locals, so one
/// value can be shared freely between threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct HuffmanCodec;

impl HuffmanCodec {
    pub fn new() -> Self {
        HuffmanCodec
    }

    pub fn encode(&self, data: &[u8]) -> CompressionResult {
        let frequencies = FrequencyTable::from_bytes(data);

        let Some(tree) = HuffmanTree::build(&frequencies) else {
            let (container, message) = match frequencies.single() {
                Some((symbol, count)) => (Container::Single { symbol, count }, MSG_SINGLE),
                None => (Container::Empty, MSG_EMPTY),
            };
            let out = container.write();
            debug!(original = data.len(), compressed = out.len(), "encoded degenerate input");
            let compressed_size = out.len();
            return CompressionResult::new(out, message, data.len(), compressed_size);
        };

        let codes = tree.code_table();
        let bit_len = codes
            .iter()
            .map(|(symbol, code)| frequencies.count(symbol) as usize * code.len())
            .sum();
        let mut writer = BitWriter::with_bit_capacity(bit_len);
        for &byte in data {
            match codes.get(byte) {
                Some(code) => writer.push_code(code),
                None => unreachable!("byte 0x{byte:02x} counted but missing from the code table"),
            }
        }
        debug_assert_eq!(writer.bit_count(), bit_len);
        let bits = writer.bit_count();
        let (payload, padding) = writer.finish();
        let tree_bytes = tree.serialize();

        let out = Container::Coded { padding, tree: &tree_bytes, payload: &payload }.write();
        debug!(
            original = data.len(),
            compressed = out.len(),
            symbols = codes.len(),
            depth = tree.depth(),
            bits,
            padding,
            "encoded input"
        );
        let compressed_size = out.len();
        CompressionResult::new(out, MSG_COMPRESSED, data.len(), compressed_size)
    }

    /// Fails with a format error on any malformed container; no partial
    /// output is ever returned.
    pub fn decode(&self, data: &[u8]) -> Result<CompressionResult> {
        let decoded = match Container::parse(data)? {
            Container::Empty => Vec::new(),
            Container::Single { symbol, count } => {
                // the count field follows the last delimiter
                let at = data.iter().rposition(|&b| b == b'#').map_or(0, |i| i + 1);
                let too_large = || Error::format_at(format!("repeat count {count} cannot be allocated"), at);
                let count = usize::try_from(count).map_err(|_| too_large())?;
                let mut out = Vec::new();
                out.try_reserve_exact(count).map_err(|_| too_large())?;
                out.resize(count, symbol);
                out
            }
            Container::Coded { padding, tree, payload } => {
                let tree = HuffmanTree::deserialize(tree)?;
                if tree.root.is_leaf() {
                    return Err(Error::format("tree has no branches"));
                }
                walk(&tree, BitReader::new(payload, padding)?)?
            }
        };
        debug!(compressed = data.len(), original = decoded.len(), "decoded container");
        let original_size = decoded.len();
        Ok(CompressionResult::new(decoded, MSG_DECOMPRESSED, original_size, data.len()))
    }
}

/// Follows the bits from the root, emitting a symbol at every leaf.
fn walk(tree: &HuffmanTree, bits: BitReader) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut node = &tree.root;
    let total = bits.bit_len();
    for bit in bits {
        if let HuffNode::Internal { first, second, .. } = node {
            node = if bit { second.as_ref() } else { first.as_ref() };
        }
        if let HuffNode::Leaf { symbol, .. } = node {
            out.push(*symbol);
            node = &tree.root;
        }
    }
    if !std::ptr::eq(node, &tree.root) {
        return Err(Error::format(format!("bit stream of {total} bits ends inside the tree")));
    }
    Ok(out)
}
