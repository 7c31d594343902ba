//! Prefix-notation form of a Huffman tree.
//!
//! A leaf is written as `'` followed by its raw symbol byte. An internal node
//! is written as `0`, its first subtree, `1`, its second subtree. The symbol
//! slot is positional, so any byte value (including the markers) is allowed
//! there and the form can be read back with a single forward cursor.

use crate::error::{Error, Result};
use crate::tree::{HuffNode, HuffmanTree};

pub const LEAF_MARKER: u8 = b'\'';
pub const FIRST_MARKER: u8 = b'0';
pub const SECOND_MARKER: u8 = b'1';

/// Byte symbols give at most 256 leaves, so no valid tree is deeper than this.
pub const MAX_DEPTH: usize = 255;

enum Step<'a> {
    Node(&'a HuffNode),
    Second,
}

enum Pending {
    First,
    Second(HuffNode),
}

impl HuffmanTree {
    pub fn serialize(&self) -> Vec<u8> {
        let mut out = Vec::new();
        let mut steps = vec![Step::Node(&self.root)];
        while let Some(step) = steps.pop() {
            match step {
                Step::Node(HuffNode::Leaf { symbol, .. }) => {
                    out.push(LEAF_MARKER);
                    out.push(*symbol);
                }
                Step::Node(HuffNode::Internal { first, second, .. }) => {
                    out.push(FIRST_MARKER);
                    steps.push(Step::Node(second.as_ref()));
                    steps.push(Step::Second);
                    steps.push(Step::Node(first.as_ref()));
                }
                Step::Second => out.push(SECOND_MARKER),
            }
        }
        out
    }

    /// Rebuilds a tree from exactly `bytes`. Weights are not stored and come
    /// back as zero.
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        let mut cursor = TreeCursor { bytes, pos: 0 };
        let root = cursor.read_tree()?;
        if cursor.pos != bytes.len() {
            return Err(Error::format_at("trailing bytes after tree", cursor.pos));
        }
        Ok(HuffmanTree { root })
    }
}

struct TreeCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl TreeCursor<'_> {
    fn next(&mut self, what: &str) -> Result<u8> {
        let byte = *self
            .bytes
            .get(self.pos)
            .ok_or_else(|| Error::format_at(format!("tree truncated, expected {what}"), self.pos))?;
        self.pos += 1;
        Ok(byte)
    }

    fn read_tree(&mut self) -> Result<HuffNode> {
        let mut stack: Vec<Pending> = Vec::new();
        loop {
            let mut node = match self.next("node marker")? {
                LEAF_MARKER => HuffNode::leaf(self.next("leaf symbol")?, 0),
                FIRST_MARKER => {
                    if stack.len() >= MAX_DEPTH {
                        return Err(Error::format_at("tree too deep", self.pos - 1));
                    }
                    stack.push(Pending::First);
                    continue;
                }
                other => {
                    return Err(Error::format_at(
                        format!("unexpected tree marker 0x{other:02x}"),
                        self.pos - 1,
                    ))
                }
            };
            // attach the finished subtree to its ancestors
            loop {
                match stack.pop() {
                    None => return Ok(node),
                    Some(Pending::First) => {
                        let at = self.pos;
                        if self.next("second-branch marker")? != SECOND_MARKER {
                            return Err(Error::format_at("expected second-branch marker", at));
                        }
                        stack.push(Pending::Second(node));
                        break;
                    }
                    Some(Pending::Second(first)) => {
                        node = HuffNode::Internal {
                            weight: 0,
                            first: Box::new(first),
                            second: Box::new(node),
                        };
                    }
                }
            }
        }
    }
}
