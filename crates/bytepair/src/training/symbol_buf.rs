//! # Symbol Sequence Buffer

use crate::types::{Pair, SymbolType, byte_to_symbol};

/// Merge all non-overlapping occurrences of `pair -> replacement`, in place.
///
/// A single left-to-right pass; after each match the scan resumes
/// past the replaced pair, so ``(a, a)`` on ``a a a`` yields ``X a``.
///
/// # Arguments
/// * `symbols` - the sequence to rewrite.
/// * `pair` - the pair to merge.
/// * `replacement` - the symbol to replace `pair` with.
///
/// # Returns
/// The number of replacements made.
pub fn merge_pair_in_place<T: SymbolType>(
    symbols: &mut Vec<T>,
    pair: Pair<T>,
    replacement: T,
) -> usize {
    let n = symbols.len();
    if n < 2 {
        return 0;
    }

    let mut read = 0;
    let mut write = 0;
    let mut merged = 0;

    while read < n {
        if read + 1 < n && pair == (symbols[read], symbols[read + 1]) {
            symbols[write] = replacement;

            // Skip 'left' and 'right'.
            read += 2;
            merged += 1;
        } else {
            symbols[write] = symbols[read];
            read += 1;
        }
        write += 1;
    }

    symbols.truncate(write);
    merged
}

/// A mutable symbol sequence.
///
/// Iteratively rewritten during merge learning.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolBuf<T: SymbolType> {
    symbols: Vec<T>,
}

impl<T: SymbolType, S: AsRef<[T]>> From<S> for SymbolBuf<T> {
    fn from(symbols: S) -> Self {
        Self::from_symbols(symbols)
    }
}

impl<T: SymbolType> SymbolBuf<T> {
    /// Create a new buffer from symbols.
    pub fn from_symbols<S>(symbols: S) -> Self
    where
        S: AsRef<[T]>,
    {
        Self {
            symbols: symbols.as_ref().to_vec(),
        }
    }

    /// Create a new buffer of primitive symbols from a byte slice.
    pub fn from_bytes<B: AsRef<[u8]>>(bytes: B) -> Self {
        Self {
            symbols: bytes.as_ref().iter().map(|&b| byte_to_symbol(b)).collect(),
        }
    }

    /// View the symbols as a slice.
    pub fn symbols(&self) -> &[T] {
        &self.symbols
    }

    /// Take the symbols.
    pub fn into_symbols(self) -> Vec<T> {
        self.symbols
    }

    /// Get the length of the sequence.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Is this sequence empty?
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get an iterator over [`Pair<T>`] windows of this sequence.
    pub fn pairs<'a>(&'a self) -> impl Iterator<Item = Pair<T>> + 'a {
        self.symbols.windows(2).map(|w| (w[0], w[1]))
    }

    /// Reduce the capacity of the internal vector to fit its contents.
    pub fn shrink_to_fit(&mut self) {
        self.symbols.shrink_to_fit();
    }

    /// Merge all non-overlapping occurrences of `pair -> replacement`.
    ///
    /// See [`merge_pair_in_place`].
    ///
    /// # Returns
    /// The number of replacements made.
    pub fn merge_pair(
        &mut self,
        pair: Pair<T>,
        replacement: T,
    ) -> usize {
        merge_pair_in_place(&mut self.symbols, pair, replacement)
    }
}
