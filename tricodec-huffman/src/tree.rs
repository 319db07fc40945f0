//! Huffman tree construction.
//!
//! Nodes live in an arena and refer to their children by index, so neither
//! construction nor traversal recurses.
//!
//! # Tie-breaking
//!
//! The priority queue is ordered by `(freq, tie_key)`, smallest first. A leaf
//! uses its symbol value as `tie_key`; the `i`-th internal node created uses
//! `256 + i`. Equal-frequency leaves are therefore merged in ascending
//! symbol order and always before equal-frequency internal nodes. The first
//! node extracted becomes the left child (bit `0`).

use crate::code::{CodeTable, HuffmanCode};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use tricodec_core::FrequencyTable;

/// Index of a node inside a [`HuffmanTree`].
pub type NodeId = usize;

/// A node of the Huffman tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A symbol and its occurrence count.
    Leaf {
        /// Byte value.
        symbol: u8,
        /// Occurrence count.
        freq: u64,
    },
    /// Merge of two subtrees; `freq` is the sum of both children.
    Internal {
        /// Combined frequency.
        freq: u64,
        /// Left child (bit `0`).
        left: NodeId,
        /// Right child (bit `1`).
        right: NodeId,
    },
}

impl HuffmanNode {
    /// Frequency of the node.
    pub fn freq(&self) -> u64 {
        match self {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { freq, .. } => *freq,
        }
    }
}

/// Arena-backed Huffman tree.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    nodes: Vec<HuffmanNode>,
    root: NodeId,
}

impl HuffmanTree {
    /// Build the tree by greedy minimum-frequency merging.
    ///
    /// Returns `None` for an empty table.
    pub fn build(frequencies: &FrequencyTable) -> Option<Self> {
        let distinct = frequencies.distinct();
        if distinct == 0 {
            return None;
        }

        let mut nodes = Vec::with_capacity(2 * distinct - 1);
        let mut heap = BinaryHeap::with_capacity(distinct);

        for (symbol, freq) in frequencies.iter() {
            let id = nodes.len();
            nodes.push(HuffmanNode::Leaf { symbol, freq });
            heap.push(Reverse((freq, symbol as u16, id)));
        }

        let mut merges = 0u16;
        loop {
            let Some(Reverse((left_freq, _, left))) = heap.pop() else {
                return None;
            };
            let Some(Reverse((right_freq, _, right))) = heap.pop() else {
                return Some(Self { nodes, root: left });
            };

            let freq = left_freq + right_freq;
            let id = nodes.len();
            nodes.push(HuffmanNode::Internal { freq, left, right });
            heap.push(Reverse((freq, 256 + merges, id)));
            merges += 1;
        }
    }

    /// Root node index.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> &HuffmanNode {
        &self.nodes[id]
    }

    /// Total number of nodes (leaves and internal).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a built tree has at least one leaf.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Depth of the deepest leaf (0 for a single-leaf tree).
    pub fn depth(&self) -> usize {
        let mut max_depth = 0;
        let mut stack = vec![(self.root, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            match self.nodes[id] {
                HuffmanNode::Leaf { .. } => max_depth = max_depth.max(depth),
                HuffmanNode::Internal { left, right, .. } => {
                    stack.push((left, depth + 1));
                    stack.push((right, depth + 1));
                }
            }
        }
        max_depth
    }

    /// Derive the code table: the root-to-leaf path of each symbol.
    ///
    /// A single-leaf tree assigns its symbol the 1-bit code `0`.
    pub fn code_table(&self) -> CodeTable {
        let mut table = CodeTable::new();

        if let HuffmanNode::Leaf { symbol, .. } = self.nodes[self.root] {
            table.insert(symbol, HuffmanCode::from_bits(vec![false]));
            return table;
        }

        let mut stack = vec![(self.root, Vec::new())];
        while let Some((id, path)) = stack.pop() {
            match self.nodes[id] {
                HuffmanNode::Leaf { symbol, .. } => {
                    table.insert(symbol, HuffmanCode::from_bits(path));
                }
                HuffmanNode::Internal { left, right, .. } => {
                    let mut right_path = path.clone();
                    right_path.push(true);
                    stack.push((right, right_path));

                    let mut left_path = path;
                    left_path.push(false);
                    stack.push((left, left_path));
                }
            }
        }

        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_sums(tree: &HuffmanTree, id: NodeId) -> u64 {
        match *tree.node(id) {
            HuffmanNode::Leaf { freq, .. } => freq,
            HuffmanNode::Internal { freq, left, right } => {
                let sum = check_sums(tree, left) + check_sums(tree, right);
                assert_eq!(freq, sum);
                freq
            }
        }
    }

    #[test]
    fn test_empty_table_has_no_tree() {
        assert!(HuffmanTree::build(&FrequencyTable::from_bytes(b"")).is_none());
    }

    #[test]
    fn test_root_frequency_is_total() {
        let data = b"this is an example for huffman encoding";
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(data)).unwrap();
        assert_eq!(tree.node(tree.root()).freq(), data.len() as u64);
        check_sums(&tree, tree.root());
    }

    #[test]
    fn test_node_count() {
        let table = FrequencyTable::from_bytes(b"abcdefg");
        let tree = HuffmanTree::build(&table).unwrap();
        assert_eq!(tree.len(), 2 * 7 - 1);
    }

    #[test]
    fn test_single_symbol_tree() {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(b"ZZZZ")).unwrap();
        assert_eq!(tree.len(), 1);
        assert_eq!(tree.depth(), 0);
        let codes = tree.code_table();
        assert_eq!(codes.get(b'Z').unwrap().to_string(), "0");
    }

    #[test]
    fn test_deterministic_ties() {
        // All symbols equally frequent: merges proceed in symbol order.
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(b"abcd")).unwrap();
        let codes = tree.code_table();
        assert_eq!(codes.get(b'a').unwrap().to_string(), "00");
        assert_eq!(codes.get(b'b').unwrap().to_string(), "01");
        assert_eq!(codes.get(b'c').unwrap().to_string(), "10");
        assert_eq!(codes.get(b'd').unwrap().to_string(), "11");
    }

    #[test]
    fn test_scenario_codes() {
        let tree = HuffmanTree::build(&FrequencyTable::from_bytes(b"AAAAABBBCC")).unwrap();
        let codes = tree.code_table();
        assert_eq!(codes.get(b'A').unwrap().to_string(), "0");
        assert_eq!(codes.get(b'C').unwrap().to_string(), "10");
        assert_eq!(codes.get(b'B').unwrap().to_string(), "11");
    }

    #[test]
    fn test_skewed_depth() {
        // Fibonacci-like counts produce a maximally unbalanced tree.
        let table = FrequencyTable::from_counts([(0, 1), (1, 1), (2, 2), (3, 3), (4, 5), (5, 8)]);
        let tree = HuffmanTree::build(&table).unwrap();
        assert_eq!(tree.depth(), 5);
    }
}
