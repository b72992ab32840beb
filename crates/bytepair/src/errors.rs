//! # Error Types

/// Errors from bytepair operations.
#[derive(Debug, thiserror::Error)]
pub enum BytePairError {
    /// An input value is not a byte (``0..=255``).
    #[error("value {value} at index {index} is not a valid byte")]
    InvalidByteValue {
        /// The offending value.
        value: u64,

        /// The position of the value in the input.
        index: usize,
    },

    /// An operation that needs at least one pair got a sequence without any.
    #[error("empty sequence")]
    EmptySequence,

    /// The tokenizer already holds an alphabet.
    #[error("tokenizer is already trained")]
    AlreadyTrained,

    /// The tokenizer holds no alphabet.
    #[error("tokenizer is not trained")]
    NotTrained,

    /// A symbol has no entry in the alphabet.
    #[error("unknown symbol: {symbol}")]
    UnknownSymbol {
        /// The unknown symbol id.
        symbol: u64,
    },

    /// A newly allocated symbol id does not fit the symbol type.
    #[error("symbol id {count} exceeds symbol type capacity")]
    SymbolOverflow {
        /// The id that could not be represented.
        count: usize,
    },

    /// Alphabet data is inconsistent.
    #[error("{0}")]
    AlphabetConflict(String),

    /// I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Parse error (alphabet files, symbol lists).
    #[error("parse error: {0}")]
    Parse(String),

    /// Decoded bytes are not valid UTF-8.
    #[error(transparent)]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type for bytepair operations.
pub type BPResult<T> = core::result::Result<T, BytePairError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            BytePairError::InvalidByteValue {
                value: 300,
                index: 2
            }
            .to_string(),
            "value 300 at index 2 is not a valid byte"
        );
        assert_eq!(
            BytePairError::UnknownSymbol { symbol: 999 }.to_string(),
            "unknown symbol: 999"
        );
        assert_eq!(BytePairError::EmptySequence.to_string(), "empty sequence");
    }

    #[test]
    fn test_io_error_conversion() {
        let err: BytePairError = std::io::Error::other("boom").into();
        assert!(matches!(err, BytePairError::Io(_)));
    }
}
