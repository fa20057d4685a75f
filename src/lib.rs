//! # Huffman Coding
//!
//! *Optimal prefix codes from symbol frequencies.*
//!
//! ## Intuition First
//!
//! Morse code gives `E` a single dot and `Q` four symbols: frequent letters
//! get short codes. Huffman coding makes that assignment optimal. Build a
//! binary tree whose leaves are the symbols, put frequent symbols near the
//! root, and read each symbol's code off the left/right turns on its path.
//! Because only leaves carry symbols, no code is a prefix of another and a
//! bit stream decodes without delimiters.
//!
//! ## Construction
//!
//! ```text
//! counts:  a:2  b:3  c:4
//!
//! merge a+b      merge c+(ab)          codes
//!   (5)              (9)               c = 0
//!   / \             /   \              a = 10
//!  a   b           c    (5)            b = 11
//!                       / \
//!                      a   b
//! ```
//!
//! Repeatedly take the two lightest nodes from a min-priority queue and merge
//! them under a new node whose weight is their sum, until one root remains.
//! The greedy merge minimizes `sum(freq(s) * depth(s))` over all binary
//! prefix-code trees (Huffman, 1952).
//!
//! ## Determinism
//!
//! Equal weights leave the merge order open, and different choices give
//! different (equally short) codes. This crate breaks ties by insertion
//! order: leaves are queued by ascending count, equal counts in order of
//! first occurrence, and each merged node queues behind everything already
//! present. Building twice from the same input yields the same codes.
//!
//! ## Complexity
//!
//! - **Build**: $O(n + k \log k)$ for $n$ input symbols and $k$ distinct ones.
//! - **Encode**: $O(1)$ table lookup per symbol plus output length.
//! - **Decode**: $O(1)$ per bit.
//!
//! ## Example
//!
//! ```
//! use huffman::{BitSymbols, HuffmanEncoder};
//!
//! let text: Vec<char> = "aabbbcccc".chars().collect();
//! let mut encoder = HuffmanEncoder::with_bit_symbols(BitSymbols::chars());
//! let bits = encoder.encode(&text)?;
//! assert_eq!(bits.iter().collect::<String>(), "10101111110000");
//! assert_eq!(encoder.decode(bits)?, text);
//! # Ok::<(), huffman::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod code;
pub mod error;
pub mod frequency;
pub mod huffman;
pub mod queue;
pub mod tree;

pub use code::CodeTable;
pub use error::{Error, Result};
pub use frequency::FrequencyTable;
pub use huffman::{build, decode, encode, HuffmanDecoder, HuffmanEncoder};
pub use tree::{BitSymbols, HuffmanTree, Node, NodeId};
