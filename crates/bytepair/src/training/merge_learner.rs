//! # Merge Learner

use crate::{
    errors::BPResult,
    training::{PairStatistics, SymbolBuf},
    types::{SymbolType, composite_symbol, validate_byte_symbols},
    vocab::MergeRule,
};

/// The output of [`MergeLearner::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LearnedMerges<T: SymbolType> {
    /// The maximally merged sequence.
    pub symbols: Vec<T>,

    /// The merge rules, in creation order.
    pub rules: Vec<MergeRule<T>>,
}

/// Learns binary pair merges over a single symbol sequence.
///
/// Each step:
/// 1. counts every adjacent pair ([`PairStatistics`]),
/// 2. stops if the most frequent pair occurs at most once,
/// 3. allocates the next composite symbol (``256 + rules.len()``),
/// 4. rewrites the sequence, left to right, replacing non-overlapping
///    occurrences of the pair with the new symbol,
/// 5. records the [`MergeRule`].
///
/// Each merge shortens the sequence by at least 1;
/// so a sequence of length ``n`` yields at most ``n - 1`` rules.
#[derive(Debug, Clone)]
pub struct MergeLearner<T: SymbolType> {
    buf: SymbolBuf<T>,
    rules: Vec<MergeRule<T>>,
}

impl<T: SymbolType> MergeLearner<T> {
    /// Create a learner over the primitive symbols of `bytes`.
    pub fn from_bytes<B: AsRef<[u8]>>(bytes: B) -> Self {
        Self {
            buf: SymbolBuf::from_bytes(bytes),
            rules: Vec::new(),
        }
    }

    /// Create a learner over a sequence of primitive symbols.
    ///
    /// ## Returns
    /// The learner; or [`crate::errors::BytePairError::InvalidByteValue`]
    /// if any symbol is not a byte.
    pub fn from_symbols(symbols: &[T]) -> BPResult<Self> {
        Ok(Self {
            buf: SymbolBuf::from_symbols(validate_byte_symbols(symbols)?),
            rules: Vec::new(),
        })
    }

    /// The current (partially merged) sequence.
    pub fn symbols(&self) -> &[T] {
        self.buf.symbols()
    }

    /// The rules learned so far, in creation order.
    pub fn rules(&self) -> &[MergeRule<T>] {
        &self.rules
    }

    /// Run a single merge step.
    ///
    /// ## Returns
    /// * `Ok(Some(rule))` - the rule applied by this step.
    /// * `Ok(None)` - no pair occurs more than once; learning is done.
    /// * `Err(SymbolOverflow)` - the next composite symbol does not fit `T`.
    pub fn step(&mut self) -> BPResult<Option<MergeRule<T>>> {
        let stats = PairStatistics::from_pairs(self.buf.pairs());
        if stats.is_empty() {
            return Ok(None);
        }

        let (pair, count) = stats.argmax()?;
        if count <= 1 {
            return Ok(None);
        }

        let symbol: T = composite_symbol(self.rules.len())?;
        let merged = self.buf.merge_pair(pair, symbol);

        log::debug!(
            "merge #{}: {:?} -> {} (frequency: {}, replaced: {}, remaining: {})",
            self.rules.len(),
            pair,
            symbol,
            count,
            merged,
            self.buf.len()
        );

        let rule = MergeRule::new(symbol, pair.0, pair.1);
        self.rules.push(rule);
        Ok(Some(rule))
    }

    /// Merge until no pair occurs more than once.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self)))]
    pub fn run(mut self) -> BPResult<LearnedMerges<T>> {
        let initial_len = self.buf.len();
        log::info!("Starting merge learning over {} symbols", initial_len);

        while self.step()?.is_some() {}

        self.buf.shrink_to_fit();

        log::info!(
            "Finished merge learning: {} merges; {} -> {} symbols",
            self.rules.len(),
            initial_len,
            self.buf.len()
        );

        Ok(LearnedMerges {
            symbols: self.buf.into_symbols(),
            rules: self.rules,
        })
    }
}
