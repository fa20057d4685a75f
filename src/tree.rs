//! Huffman tree construction.
//!
//! Nodes live in an arena owned by [`HuffmanTree`] and refer to each other by
//! [`NodeId`]. An internal node owns its two children through those handles;
//! the reverse parent link is a plain handle used only to derive codes from
//! leaf to root.
//!
//! # Algorithm
//!
//! Leaves are seeded into a [`NodeQueue`] in ascending frequency. The two
//! lightest nodes are repeatedly extracted and merged under a new internal
//! node (first extracted on the left) until one node remains. The result
//! minimizes the weighted sum of leaf depths over all binary prefix-code
//! trees for the same frequencies.

use std::collections::HashMap;
use std::hash::Hash;

use log::{debug, trace};

use crate::code::CodeTable;
use crate::error::{Error, Result};
use crate::frequency::FrequencyTable;
use crate::queue::NodeQueue;

/// Handle of a node inside one [`HuffmanTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the tree's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node<S> {
    /// A symbol and its frequency.
    Leaf {
        /// The symbol this leaf encodes.
        symbol: S,
        /// Occurrences of `symbol`.
        frequency: u64,
    },
    /// Merge of two subtrees.
    Internal {
        /// Sum of both children's frequencies.
        frequency: u64,
        /// First-extracted child.
        left: NodeId,
        /// Second-extracted child.
        right: NodeId,
    },
}

impl<S> Node<S> {
    /// Weight of this node.
    pub fn frequency(&self) -> u64 {
        match self {
            Node::Leaf { frequency, .. } => *frequency,
            Node::Internal { frequency, .. } => *frequency,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The leaf's symbol, `None` for internal nodes.
    pub fn symbol(&self) -> Option<&S> {
        match self {
            Node::Leaf { symbol, .. } => Some(symbol),
            Node::Internal { .. } => None,
        }
    }

    /// `(left, right)` children, `None` for leaves.
    pub fn children(&self) -> Option<(NodeId, NodeId)> {
        match self {
            Node::Leaf { .. } => None,
            Node::Internal { left, right, .. } => Some((*left, *right)),
        }
    }
}

/// The pair of values that spell a left step and a right step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitSymbols<B = u8> {
    left: B,
    right: B,
}

impl<B: Copy + Eq> BitSymbols<B> {
    /// Use `left` for left steps and `right` for right steps.
    ///
    /// # Errors
    /// Returns `Error::IndistinctBitSymbols` if the two values are equal.
    pub fn new(left: B, right: B) -> Result<Self> {
        if left == right {
            return Err(Error::IndistinctBitSymbols);
        }
        Ok(Self { left, right })
    }

    /// Value emitted for a left step.
    pub fn left(&self) -> B {
        self.left
    }

    /// Value emitted for a right step.
    pub fn right(&self) -> B {
        self.right
    }
}

impl Default for BitSymbols<u8> {
    fn default() -> Self {
        Self { left: 0, right: 1 }
    }
}

impl BitSymbols<char> {
    /// `'0'` for left, `'1'` for right.
    pub fn chars() -> Self {
        Self {
            left: '0',
            right: '1',
        }
    }
}

/// An immutable Huffman tree with its cached code table.
#[derive(Debug, Clone)]
pub struct HuffmanTree<S, B = u8> {
    nodes: Vec<Node<S>>,
    parents: Vec<Option<NodeId>>,
    root: NodeId,
    leaves: HashMap<S, NodeId>,
    bits: BitSymbols<B>,
    codes: CodeTable<S, B>,
}

impl<S: Eq + Hash + Clone> HuffmanTree<S> {
    /// Build a tree from `symbols` with the default `0`/`1` bit values.
    pub fn build(symbols: &[S]) -> Result<Self> {
        Self::build_with(symbols, BitSymbols::default())
    }
}

impl<S: Eq + Hash + Clone, B: Copy + Eq> HuffmanTree<S, B> {
    /// Build a tree from the frequencies of `symbols`.
    ///
    /// # Errors
    /// Returns `Error::EmptyInput` if `symbols` is empty.
    pub fn build_with(symbols: &[S], bits: BitSymbols<B>) -> Result<Self> {
        Self::from_frequencies(&FrequencyTable::count(symbols), bits)
    }

    /// Build a tree from a precomputed frequency table.
    ///
    /// Symbols with a zero count get no leaf.
    ///
    /// # Errors
    /// - `Error::EmptyInput` if no symbol has a positive count.
    /// - `Error::FrequencyOverflow` if the total weight exceeds `u64`.
    pub fn from_frequencies(table: &FrequencyTable<S>, bits: BitSymbols<B>) -> Result<Self> {
        let mut nodes = Vec::with_capacity(table.len().saturating_mul(2));
        let mut leaves = HashMap::with_capacity(table.len());
        let mut queue = NodeQueue::new();

        for (symbol, frequency) in table.ascending() {
            if frequency == 0 {
                continue;
            }
            let id = NodeId(nodes.len());
            nodes.push(Node::Leaf {
                symbol: symbol.clone(),
                frequency,
            });
            leaves.insert(symbol.clone(), id);
            queue.push(id, frequency);
        }
        debug!("building huffman tree over {} leaves", leaves.len());

        let mut parents = vec![None; nodes.len()];
        let root = loop {
            match (queue.pop_min(), queue.pop_min()) {
                (Some((left, lf)), Some((right, rf))) => {
                    let id = NodeId(nodes.len());
                    let frequency = lf.checked_add(rf).ok_or(Error::FrequencyOverflow)?;
                    trace!("merge {:?}({}) + {:?}({}) -> {:?}", left, lf, right, rf, id);
                    nodes.push(Node::Internal {
                        frequency,
                        left,
                        right,
                    });
                    parents.push(None);
                    parents[left.0] = Some(id);
                    parents[right.0] = Some(id);
                    queue.push(id, frequency);
                }
                (Some((root, _)), None) => break root,
                (None, _) => return Err(Error::EmptyInput),
            }
        };

        let mut tree = Self {
            nodes,
            parents,
            root,
            leaves,
            bits,
            codes: CodeTable::empty(),
        };
        tree.codes = CodeTable::derive(&tree);
        debug!(
            "huffman tree built: {} nodes, height {}, {} weighted bits",
            tree.len(),
            tree.height(),
            tree.weighted_path_length()
        );
        Ok(tree)
    }

    /// The cached code table.
    pub fn codes(&self) -> &CodeTable<S, B> {
        &self.codes
    }

    /// Leaf node holding `symbol`, if any.
    pub fn leaf(&self, symbol: &S) -> Option<NodeId> {
        self.leaves.get(symbol).copied()
    }

    /// All leaves, in no particular order.
    pub fn leaves(&self) -> impl Iterator<Item = (&S, NodeId)> {
        self.leaves.iter().map(|(s, &id)| (s, id))
    }

    /// Total bits needed to encode the sequence the tree was built from,
    /// saturating at `u64::MAX`.
    pub fn encoded_len(&self) -> u64 {
        self.codes.encoded_len()
    }
}

impl<S, B> HuffmanTree<S, B> {
    /// Root node handle.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Node behind `id`.
    ///
    /// # Panics
    /// If `id` was issued by a different tree and is out of range.
    pub fn node(&self, id: NodeId) -> &Node<S> {
        &self.nodes[id.0]
    }

    /// Parent of `id`; `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents[id.0]
    }

    /// The configured left/right bit values.
    pub fn bit_symbols(&self) -> &BitSymbols<B> {
        &self.bits
    }

    /// Number of nodes, leaves and internal.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a built tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of leaves (distinct symbols).
    pub fn leaf_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_leaf()).count()
    }

    /// Sum of all leaf frequencies, i.e. the root's frequency.
    pub fn frequency(&self) -> u64 {
        self.node(self.root).frequency()
    }

    /// Number of edges between `id` and the root.
    pub fn depth(&self, id: NodeId) -> usize {
        std::iter::successors(self.parent(id), |&p| self.parent(p)).count()
    }

    /// Depth of the deepest leaf; `0` when the root is a leaf.
    pub fn height(&self) -> usize {
        (0..self.nodes.len())
            .map(NodeId)
            .filter(|&id| self.node(id).is_leaf())
            .map(|id| self.depth(id))
            .max()
            .unwrap_or(0)
    }

    /// Sum over leaves of `frequency * depth`, saturating at `u64::MAX`.
    pub fn weighted_path_length(&self) -> u64 {
        (0..self.nodes.len())
            .map(NodeId)
            .filter(|&id| self.node(id).is_leaf())
            .map(|id| self.node(id).frequency().saturating_mul(self.depth(id) as u64))
            .fold(0, u64::saturating_add)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn check_shape<S: Eq + Hash + Clone>(tree: &HuffmanTree<S>) {
        let mut roots = 0;
        for i in 0..tree.len() {
            let id = NodeId(i);
            assert_eq!(id.index(), i);
            match tree.node(id) {
                Node::Leaf { symbol, .. } => assert_eq!(tree.leaf(symbol), Some(id)),
                Node::Internal {
                    frequency,
                    left,
                    right,
                } => {
                    assert_ne!(left, right);
                    assert!(left.index() < i && right.index() < i);
                    assert_eq!(tree.parent(*left), Some(id));
                    assert_eq!(tree.parent(*right), Some(id));
                    assert_eq!(
                        *frequency,
                        tree.node(*left).frequency() + tree.node(*right).frequency()
                    );
                }
            }
            if tree.parent(id).is_none() {
                roots += 1;
                assert_eq!(id, tree.root());
            }
        }
        assert_eq!(roots, 1);
        assert_eq!(tree.len(), 2 * tree.leaf_count() - 1);
    }

    #[test]
    fn test_build_aabbbcccc() {
        let tree = HuffmanTree::build(&chars("aabbbcccc")).unwrap();
        check_shape(&tree);
        assert_eq!(tree.leaf_count(), 3);
        assert_eq!(tree.frequency(), 9);
        assert_eq!(tree.height(), 2);
        assert_eq!(tree.weighted_path_length(), 14);

        // a and b merge first, then c joins on the left.
        let (left, right) = tree.node(tree.root()).children().unwrap();
        assert_eq!(tree.node(left).symbol(), Some(&'c'));
        let (rl, rr) = tree.node(right).children().unwrap();
        assert_eq!(tree.node(rl).symbol(), Some(&'a'));
        assert_eq!(tree.node(rr).symbol(), Some(&'b'));
    }

    #[test]
    fn test_single_symbol_root_is_leaf() {
        let tree = HuffmanTree::build(&chars("aaaa")).unwrap();
        check_shape(&tree);
        assert!(tree.node(tree.root()).is_leaf());
        assert_eq!(tree.parent(tree.root()), None);
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.frequency(), 4);
    }

    #[test]
    fn test_empty_input_rejected() {
        let err = HuffmanTree::<u8>::build(&[]).unwrap_err();
        assert_eq!(err, Error::EmptyInput);
    }

    #[test]
    fn test_zero_frequencies_skipped() {
        let table = FrequencyTable::from_counts(vec![(1u8, 0), (2, 3), (3, 0), (4, 1)]).unwrap();
        let tree = HuffmanTree::from_frequencies(&table, BitSymbols::default()).unwrap();
        assert_eq!(tree.leaf_count(), 2);
        assert!(tree.leaf(&1).is_none());
        assert!(tree.leaf(&2).is_some());

        let zeros = FrequencyTable::from_counts(vec![(1u8, 0)]).unwrap();
        assert_eq!(
            HuffmanTree::from_frequencies(&zeros, BitSymbols::default()).unwrap_err(),
            Error::EmptyInput
        );
    }

    #[test]
    fn test_indistinct_bit_symbols() {
        assert_eq!(
            BitSymbols::new('x', 'x').unwrap_err(),
            Error::IndistinctBitSymbols
        );
        let bits = BitSymbols::new('L', 'R').unwrap();
        assert_eq!((bits.left(), bits.right()), ('L', 'R'));
    }

    #[test]
    fn test_build_is_deterministic() {
        let text = chars("the quick brown fox jumps over the lazy dog");
        let a = HuffmanTree::build(&text).unwrap();
        let b = HuffmanTree::build(&text).unwrap();
        for (symbol, _) in a.leaves() {
            assert_eq!(a.codes().code(symbol), b.codes().code(symbol));
        }
        check_shape(&a);
    }

    #[test]
    fn test_depth_matches_code_length() {
        let tree = HuffmanTree::build(&b"abracadabra"[..]).unwrap();
        for (symbol, id) in tree.leaves() {
            assert_eq!(tree.codes().code(symbol).unwrap().len(), tree.depth(id));
        }
        assert_eq!(tree.encoded_len(), tree.weighted_path_length());
    }

    #[test]
    fn test_merge_overflow_is_rejected() {
        let table = FrequencyTable::from_counts(vec![(0u8, u64::MAX), (1, 1)]).unwrap();
        assert_eq!(
            HuffmanTree::from_frequencies(&table, BitSymbols::default()).unwrap_err(),
            Error::FrequencyOverflow
        );
    }

    #[test]
    fn test_weighted_sums_saturate() {
        let quarter = u64::MAX / 4;
        let table = FrequencyTable::from_counts(vec![(0u8, quarter), (1, quarter), (2, u64::MAX / 2)])
            .unwrap();
        let tree = HuffmanTree::from_frequencies(&table, BitSymbols::default()).unwrap();
        check_shape(&tree);
        assert_eq!(tree.frequency(), 2 * quarter + u64::MAX / 2);
        assert_eq!(tree.weighted_path_length(), u64::MAX);
        assert_eq!(tree.encoded_len(), u64::MAX);
    }
}
