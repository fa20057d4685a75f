//! Code table derivation.
//!
//! Each leaf's code is read off its parent chain: every step records whether
//! the node is its parent's left or right child, and the leaf-to-root
//! sequence is reversed into root-to-leaf order. A root that is itself a
//! leaf gets the one-step code `[left]` so that it still round-trips.

use std::collections::HashMap;
use std::hash::Hash;

use crate::tree::{HuffmanTree, Node};

/// Mapping from symbol to codeword.
#[derive(Debug, Clone)]
pub struct CodeTable<S, B = u8> {
    codes: HashMap<S, Vec<B>>,
    // Sum of frequency * codeword length over all leaves, saturating.
    encoded_len: u64,
    total: u64,
}

impl<S: Eq + Hash + Clone, B: Copy + Eq> CodeTable<S, B> {
    pub(crate) fn empty() -> Self {
        Self {
            codes: HashMap::new(),
            encoded_len: 0,
            total: 0,
        }
    }

    /// Derive the code of every leaf of `tree`.
    pub fn derive(tree: &HuffmanTree<S, B>) -> Self {
        let bits = tree.bit_symbols();
        let mut codes = HashMap::with_capacity(tree.leaf_count());
        let mut encoded_len = 0u64;

        for (symbol, leaf) in tree.leaves() {
            let mut code = Vec::new();
            let mut node = leaf;
            while let Some(parent) = tree.parent(node) {
                let is_left = matches!(tree.node(parent), Node::Internal { left, .. } if *left == node);
                code.push(if is_left { bits.left() } else { bits.right() });
                node = parent;
            }
            if code.is_empty() {
                code.push(bits.left());
            }
            code.reverse();
            let weight = tree.node(leaf).frequency().saturating_mul(code.len() as u64);
            encoded_len = encoded_len.saturating_add(weight);
            codes.insert(symbol.clone(), code);
        }

        Self {
            codes,
            encoded_len,
            total: tree.frequency(),
        }
    }

    /// Codeword for `symbol`.
    pub fn code(&self, symbol: &S) -> Option<&[B]> {
        self.codes.get(symbol).map(Vec::as_slice)
    }

    /// Whether `symbol` has a codeword.
    pub fn contains(&self, symbol: &S) -> bool {
        self.codes.contains_key(symbol)
    }

    /// Number of codewords.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table holds no codeword.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// `(symbol, codeword)` pairs, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, &[B])> {
        self.codes.iter().map(|(s, c)| (s, c.as_slice()))
    }

    /// Length of the longest codeword.
    pub fn max_len(&self) -> usize {
        self.codes.values().map(Vec::len).max().unwrap_or(0)
    }

    /// Bits needed to encode the source the tree was built from,
    /// saturating at `u64::MAX`.
    pub fn encoded_len(&self) -> u64 {
        self.encoded_len
    }

    /// Frequency-weighted mean codeword length, in bits per symbol.
    ///
    /// A single-leaf table averages exactly one bit.
    pub fn average_code_length(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.encoded_len as f64 / self.total as f64
    }
}
