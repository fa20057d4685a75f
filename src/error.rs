//! Error types for Huffman coding.

use thiserror::Error;

/// Error variants for Huffman operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// No symbols (or only zero frequencies) to build a tree from.
    #[error("empty input: at least one symbol is required")]
    EmptyInput,

    /// The symbol at `position` has no leaf in the tree.
    #[error("unknown symbol at position {position}")]
    UnknownSymbol {
        /// Index into the input sequence.
        position: usize,
    },

    /// The bit at `position` is not a path the tree can take.
    #[error("invalid bit at position {position}")]
    InvalidBit {
        /// Index into the bit sequence.
        position: usize,
    },

    /// The bit sequence ended in the middle of a code.
    #[error("incomplete code: {consumed} trailing bit(s) do not reach a leaf")]
    IncompleteCode {
        /// Number of bits consumed since the last emitted symbol.
        consumed: usize,
    },

    /// A symbol count or a merged node weight exceeds `u64`.
    #[error("frequency overflow: total weight exceeds u64")]
    FrequencyOverflow,

    /// Left and right bit-symbols compare equal.
    #[error("left and right bit symbols must differ")]
    IndistinctBitSymbols,
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
