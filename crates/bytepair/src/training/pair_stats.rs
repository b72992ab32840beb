//! # Adjacent Pair Statistics

use crate::{
    errors::{BPResult, BytePairError},
    types::{BPHashMap, Pair, SymbolType, hash_map_with_capacity},
};

/// A pair, its occurrence count, and the index of its first window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairCount<T: SymbolType> {
    /// The pair.
    pub pair: Pair<T>,

    /// The number of windows ``(seq[i], seq[i + 1])`` equal to `pair`.
    pub count: usize,

    /// The window index ``i`` where `pair` first occurs.
    pub first: usize,
}

/// Adjacent pair counts over a symbol sequence.
///
/// Every window ``(seq[i], seq[i + 1])`` is counted, so overlapping
/// occurrences (``a a a`` has two ``(a, a)`` windows) each contribute.
///
/// Entries are kept in first-occurrence order; which is the order
/// [`PairStatistics::argmax`] uses to break ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairStatistics<T: SymbolType> {
    /// Pair entries, in first-occurrence order.
    entries: Vec<PairCount<T>>,

    /// Map of ``{ pair -> index in entries }``.
    index: BPHashMap<Pair<T>, usize>,
}

impl<T: SymbolType> PairStatistics<T> {
    /// Count every adjacent pair in `symbols`.
    ///
    /// ## Arguments
    /// * `symbols` - the sequence to scan.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(symbols)))]
    pub fn from_symbols(symbols: &[T]) -> Self {
        Self::from_pairs(symbols.windows(2).map(|w| (w[0], w[1])))
    }

    /// Count a stream of adjacent pair windows.
    ///
    /// ## Arguments
    /// * `pairs` - the windows, in sequence order.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = Pair<T>>,
    {
        let pairs = pairs.into_iter();
        let size_hint = pairs.size_hint().0.min(1 << 16);

        let mut stats = Self {
            entries: Vec::with_capacity(size_hint),
            index: hash_map_with_capacity(size_hint),
        };

        for (i, pair) in pairs.enumerate() {
            stats.observe(pair, i);
        }

        stats
    }

    fn observe(
        &mut self,
        pair: Pair<T>,
        position: usize,
    ) {
        match self.index.get(&pair) {
            Some(&idx) => self.entries[idx].count += 1,
            None => {
                self.index.insert(pair, self.entries.len());
                self.entries.push(PairCount {
                    pair,
                    count: 1,
                    first: position,
                });
            }
        }
    }

    /// The number of distinct pairs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Were there no pairs at all?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The total number of windows counted.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|e| e.count).sum()
    }

    /// The occurrence count of `pair`; ``0`` if it never occurs.
    pub fn count(
        &self,
        pair: &Pair<T>,
    ) -> usize {
        self.index
            .get(pair)
            .map(|&idx| self.entries[idx].count)
            .unwrap_or(0)
    }

    /// Iterate over the entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &PairCount<T>> {
        self.entries.iter()
    }

    /// The most frequent pair, and its count.
    ///
    /// When several pairs share the maximum count, the pair whose
    /// first occurrence is leftmost wins.
    ///
    /// ## Returns
    /// ``(pair, count)``; or [`BytePairError::EmptySequence`]
    /// if the sequence had no pairs.
    pub fn argmax(&self) -> BPResult<(Pair<T>, usize)> {
        let mut best: Option<&PairCount<T>> = None;
        for entry in &self.entries {
            // Strictly greater; the earlier entry keeps ties.
            if best.is_none_or(|b| entry.count > b.count) {
                best = Some(entry);
            }
        }
        best.map(|b| (b.pair, b.count))
            .ok_or(BytePairError::EmptySequence)
    }
}
