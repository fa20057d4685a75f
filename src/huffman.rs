//! Huffman encoding and decoding.
//!
//! The free functions [`build`], [`encode`] and [`decode`] work on an
//! explicit [`HuffmanTree`]. [`HuffmanEncoder`] keeps the tree for you: it is
//! built from the first sequence it encodes and reused until [`reset`].
//!
//! Bits are an abstract sequence of the tree's two [`BitSymbols`]; packing
//! them into bytes is left to the caller.
//!
//! [`reset`]: HuffmanEncoder::reset

use std::hash::Hash;

use log::debug;

use crate::error::{Error, Result};
use crate::tree::{BitSymbols, HuffmanTree, Node};

/// Build a tree from the frequencies of `symbols`, using `0`/`1` bits.
///
/// # Errors
/// Returns `Error::EmptyInput` if `symbols` is empty.
pub fn build<S: Eq + Hash + Clone>(symbols: &[S]) -> Result<HuffmanTree<S>> {
    HuffmanTree::build(symbols)
}

/// Encode `symbols` as the concatenation of their codewords.
///
/// # Errors
/// Returns `Error::UnknownSymbol` for the first symbol without a leaf in `tree`.
pub fn encode<S, B>(tree: &HuffmanTree<S, B>, symbols: &[S]) -> Result<Vec<B>>
where
    S: Eq + Hash + Clone,
    B: Copy + Eq,
{
    let codes = tree.codes();
    let mut bits = Vec::new();
    for (position, symbol) in symbols.iter().enumerate() {
        let code = codes
            .code(symbol)
            .ok_or(Error::UnknownSymbol { position })?;
        bits.extend_from_slice(code);
    }
    Ok(bits)
}

/// Decode a bit sequence produced by [`encode`] over the same tree.
///
/// # Errors
/// See [`HuffmanDecoder::decode`].
pub fn decode<S, B, I>(tree: &HuffmanTree<S, B>, bits: I) -> Result<Vec<S>>
where
    S: Clone,
    B: Copy + Eq,
    I: IntoIterator<Item = B>,
{
    HuffmanDecoder::new(tree).decode(bits)
}

/// Huffman decoder over a borrowed tree.
#[derive(Debug)]
pub struct HuffmanDecoder<'t, S, B = u8> {
    tree: &'t HuffmanTree<S, B>,
}

impl<'t, S: Clone, B: Copy + Eq> HuffmanDecoder<'t, S, B> {
    /// Create a decoder walking `tree`.
    pub fn new(tree: &'t HuffmanTree<S, B>) -> Self {
        Self { tree }
    }

    /// Decode a bit stream into a symbol sequence.
    ///
    /// Walks from the root, one bit at a time, emitting a symbol and
    /// returning to the root whenever a leaf is reached. A tree whose root is
    /// a leaf decodes each left bit as one symbol.
    ///
    /// # Errors
    /// - `Error::InvalidBit` if a bit is neither the left nor the right value,
    ///   or names a step the tree does not have.
    /// - `Error::IncompleteCode` if the stream ends between two symbols.
    pub fn decode<I: IntoIterator<Item = B>>(&self, bits: I) -> Result<Vec<S>> {
        let tree = self.tree;
        let symbols = tree.bit_symbols();
        let root = tree.root();

        let mut out = Vec::new();
        let mut curr = root;
        let mut consumed = 0;

        for (position, bit) in bits.into_iter().enumerate() {
            let next = match tree.node(curr) {
                Node::Internal { left, right, .. } => step(symbols, bit, *left, *right),
                // Only a leaf root is ever current here.
                Node::Leaf { .. } => (bit == symbols.left()).then_some(curr),
            };
            let Some(next) = next else {
                debug!("invalid bit at position {}", position);
                return Err(Error::InvalidBit { position });
            };

            consumed += 1;
            match tree.node(next) {
                Node::Leaf { symbol, .. } => {
                    out.push(symbol.clone());
                    curr = root;
                    consumed = 0;
                }
                Node::Internal { .. } => curr = next,
            }
        }

        if consumed > 0 {
            debug!("bit stream ends {} bit(s) into a code", consumed);
            return Err(Error::IncompleteCode { consumed });
        }
        Ok(out)
    }
}

fn step<B: Copy + Eq, T>(symbols: &BitSymbols<B>, bit: B, left: T, right: T) -> Option<T> {
    if bit == symbols.left() {
        Some(left)
    } else if bit == symbols.right() {
        Some(right)
    } else {
        None
    }
}

/// Huffman encoder that builds its tree from the first input it sees.
#[derive(Debug, Clone)]
pub struct HuffmanEncoder<S, B = u8> {
    bits: BitSymbols<B>,
    tree: Option<HuffmanTree<S, B>>,
}

impl<S: Eq + Hash + Clone> HuffmanEncoder<S> {
    /// Create an encoder emitting `0`/`1` bits.
    pub fn new() -> Self {
        Self::with_bit_symbols(BitSymbols::default())
    }
}

impl<S: Eq + Hash + Clone> Default for HuffmanEncoder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Eq + Hash + Clone, B: Copy + Eq> HuffmanEncoder<S, B> {
    /// Create an encoder emitting the given bit values.
    pub fn with_bit_symbols(bits: BitSymbols<B>) -> Self {
        Self { bits, tree: None }
    }

    /// Create an encoder around an already built tree.
    pub fn from_tree(tree: HuffmanTree<S, B>) -> Self {
        Self {
            bits: *tree.bit_symbols(),
            tree: Some(tree),
        }
    }

    /// Encode a symbol sequence into a bit sequence.
    ///
    /// The first call builds the tree from `symbols`; later calls reuse it.
    ///
    /// # Errors
    /// - `Error::EmptyInput` if no tree exists yet and `symbols` is empty.
    /// - `Error::UnknownSymbol` if a symbol was absent when the tree was built.
    pub fn encode(&mut self, symbols: &[S]) -> Result<Vec<B>> {
        let tree = match self.tree.take() {
            Some(tree) => tree,
            None => HuffmanTree::build_with(symbols, self.bits)?,
        };
        encode(self.tree.insert(tree), symbols)
    }

    /// Decode against the tree built by [`encode`](Self::encode).
    ///
    /// # Errors
    /// As [`HuffmanDecoder::decode`]. Before the first successful `encode`
    /// there is no tree, and any bit is `Error::EmptyInput`.
    pub fn decode<I: IntoIterator<Item = B>>(&self, bits: I) -> Result<Vec<S>> {
        match self.tree {
            Some(ref tree) => decode(tree, bits),
            None => match bits.into_iter().next() {
                Some(_) => Err(Error::EmptyInput),
                None => Ok(Vec::new()),
            },
        }
    }

    /// Decoder borrowing the current tree.
    pub fn decoder(&self) -> Option<HuffmanDecoder<'_, S, B>> {
        self.tree.as_ref().map(HuffmanDecoder::new)
    }

    /// The current tree, if one has been built.
    pub fn tree(&self) -> Option<&HuffmanTree<S, B>> {
        self.tree.as_ref()
    }

    /// Discard the tree; the next `encode` builds a fresh one.
    pub fn reset(&mut self) {
        self.tree = None;
    }
}
