//! # Merge Scan Encoder
//!
//! Incrementally re-scans for the lowest available merge,
//! iterates until no more merges remain.

use std::sync::Arc;

use crate::{
    encoders::SymbolEncoder,
    types::{SymbolType, byte_to_symbol},
    vocab::AlphabetMap,
};

/// A [`SymbolEncoder`] which incrementally scans for merges.
///
/// Each step merges the leftmost window whose pair has the lowest
/// composite symbol. A rule can never re-create the pair of an earlier
/// rule, so this yields the same output as [`super::RulePassEncoder`].
///
/// Quadratic in the input length; it wins over per-rule passes when the
/// alphabet is much larger than the inputs.
#[derive(Debug, Clone)]
pub struct MergeScanEncoder<T: SymbolType> {
    alphabet: Arc<AlphabetMap<T>>,
}

impl<T: SymbolType> MergeScanEncoder<T> {
    /// Create a new encoder.
    ///
    /// ## Arguments
    /// * `alphabet` - The learned alphabet.
    pub fn new(alphabet: Arc<AlphabetMap<T>>) -> Self {
        Self { alphabet }
    }
}

impl<T: SymbolType> SymbolEncoder<T> for MergeScanEncoder<T> {
    fn alphabet(&self) -> &Arc<AlphabetMap<T>> {
        &self.alphabet
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn encode_append(
        &self,
        bytes: &[u8],
        symbols: &mut Vec<T>,
    ) {
        // Reuse the output buffer as our working memory.
        let start = symbols.len();
        symbols.extend(bytes.iter().map(|&b| byte_to_symbol::<T>(b)));

        let stop = start + 2;
        while symbols.len() >= stop {
            // Lowest symbol first; then leftmost window.
            let Some((symbol, idx)) = symbols[start..]
                .windows(2)
                .enumerate()
                .filter_map(|(idx, w)| {
                    self.alphabet
                        .lookup_pair(&(w[0], w[1]))
                        .map(|symbol| (symbol, idx))
                })
                .min()
            else {
                break;
            };

            // buf[idx..=idx+1] (a, b) -> buf[idx] s
            let idx = start + idx;
            symbols[idx] = symbol;
            symbols.remove(idx + 1);
        }
    }
}
