//! Huffman tree construction and code assignment.

use tracing::trace;

use crate::code::CodeTable;
use crate::frequency::FrequencyTable;
use crate::min_heap::MinHeap;

#[derive(Debug, Clone)]
pub enum HuffNode {
    Leaf {
        weight: u64,
        symbol: u8,
    },
    Internal {
        weight: u64,
        first: Box<HuffNode>,
        second: Box<HuffNode>,
    },
}

impl HuffNode {
    pub fn leaf(symbol: u8, weight: u64) -> Self {
        HuffNode::Leaf { weight, symbol }
    }

    pub fn weight(&self) -> u64 {
        match self {
            HuffNode::Leaf { weight, .. } => *weight,
            HuffNode::Internal { weight, .. } => *weight,
        }
    }

    /// Joins two subtrees; `a` becomes the `0` branch.
    pub fn merge(a: Self, b: Self) -> Self {
        HuffNode::Internal {
            weight: a.weight() + b.weight(),
            first: Box::new(a),
            second: Box::new(b),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// Compares shape and leaf symbols, ignoring weights.
    pub fn same_shape(&self, other: &HuffNode) -> bool {
        let mut pending = vec![(self, other)];
        while let Some(pair) = pending.pop() {
            match pair {
                (HuffNode::Leaf { symbol: a, .. }, HuffNode::Leaf { symbol: b, .. }) => {
                    if a != b {
                        return false;
                    }
                }
                (
                    HuffNode::Internal { first: f1, second: s1, .. },
                    HuffNode::Internal { first: f2, second: s2, .. },
                ) => {
                    pending.push((f1.as_ref(), f2.as_ref()));
                    pending.push((s1.as_ref(), s2.as_ref()));
                }
                _ => return false,
            }
        }
        true
    }
}

#[derive(Debug, Clone)]
pub struct HuffmanTree {
    pub root: HuffNode,
}

impl HuffmanTree {
    /// Builds the optimal prefix-code tree. Alphabets with fewer than two
    /// symbols have no meaningful tree and yield `None`.
    pub fn build(frequencies: &FrequencyTable) -> Option<Self> {
        if frequencies.len() < 2 {
            return None;
        }
        let mut heap = MinHeap::with_capacity(frequencies.len());
        for (symbol, count) in frequencies.iter() {
            heap.push(count, HuffNode::leaf(symbol, count));
        }
        while heap.len() >= 2 {
            let (_, a) = heap.pop_min()?;
            let (_, b) = heap.pop_min()?;
            let merged = HuffNode::merge(a, b);
            heap.push(merged.weight(), merged);
        }
        let (weight, root) = heap.pop_min()?;
        trace!(weight, symbols = frequencies.len(), "built huffman tree");
        Some(HuffmanTree { root })
    }

    /// Assigns `0` to every first branch and `1` to every second branch.
    pub fn code_table(&self) -> CodeTable {
        let mut table = CodeTable::new();
        let mut pending = vec![(&self.root, String::new())];
        while let Some((node, code)) = pending.pop() {
            match node {
                HuffNode::Leaf { symbol, .. } => table.insert(*symbol, code),
                HuffNode::Internal { first, second, .. } => {
                    let mut second_code = code.clone();
                    second_code.push('1');
                    let mut first_code = code;
                    first_code.push('0');
                    pending.push((second.as_ref(), second_code));
                    pending.push((first.as_ref(), first_code));
                }
            }
        }
        table
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_depths().len()
    }

    /// Length of the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        self.leaf_depths().into_iter().max().unwrap_or(0)
    }

    fn leaf_depths(&self) -> Vec<usize> {
        let mut depths = Vec::new();
        let mut pending = vec![(&self.root, 0usize)];
        while let Some((node, depth)) = pending.pop() {
            match node {
                HuffNode::Leaf { .. } => depths.push(depth),
                HuffNode::Internal { first, second, .. } => {
                    pending.push((second.as_ref(), depth + 1));
                    pending.push((first.as_ref(), depth + 1));
                }
            }
        }
        depths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn internal_weights_sum(node: &HuffNode) -> bool {
        match node {
            HuffNode::Leaf { .. } => true,
            HuffNode::Internal { weight, first, second } => {
                *weight == first.weight() + second.weight()
                    && internal_weights_sum(first)
                    && internal_weights_sum(second)
            }
        }
    }

    #[test]
    fn degenerate_alphabets_have_no_tree() {
        assert!(HuffmanTree::build(&FrequencyTable::from_bytes(b"")).is_none());
        assert!(HuffmanTree::build(&FrequencyTable::from_bytes(b"aaaa")).is_none());
    }

    #[test]
    fn two_symbols_get_one_bit_each() {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(b"ab")).unwrap();
        let codes = tree.code_table();
        assert_eq!(codes.len(), 2);
        // equal weights: the later push climbs to the top and is merged first
        assert_eq!(codes.get(b'b').map(String::as_str), Some("0"));
        assert_eq!(codes.get(b'a').map(String::as_str), Some("1"));
        assert_eq!(tree.depth(), 1);
    }

    #[test]
    fn root_weight_is_input_length() {
        let input = b"this is an example of a huffman tree";
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(input)).unwrap();
        assert_eq!(tree.root.weight(), input.len() as u64);
        assert!(internal_weights_sum(&tree.root));
        assert_eq!(tree.leaf_count(), 16);
    }

    #[test]
    fn frequent_symbols_get_shorter_codes() {
        let input = b"aaaaaaaaaaaaaaaabbbbbbbbccccdde";
        let codes = HuffmanTree::build(&FrequencyTable::from_bytes(input))
            .unwrap()
            .code_table();
        let len = |s: u8| codes.get(s).unwrap().len();
        assert!(len(b'a') <= len(b'b'));
        assert!(len(b'b') <= len(b'c'));
        assert!(len(b'c') <= len(b'e'));
        assert!(codes.is_prefix_free());
    }

    #[test]
    fn same_shape_ignores_weights() {
        let a = HuffNode::merge(HuffNode::leaf(b'x', 5), HuffNode::leaf(b'y', 9));
        let b = HuffNode::merge(HuffNode::leaf(b'x', 0), HuffNode::leaf(b'y', 0));
        let swapped = HuffNode::merge(HuffNode::leaf(b'y', 0), HuffNode::leaf(b'x', 0));
        assert!(a.same_shape(&b));
        assert!(!a.same_shape(&swapped));
    }
}
