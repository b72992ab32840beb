//! # Alphabet Map ``{ symbol -> Primitive | Composite(left, right) }``

use core::fmt::Debug;

use crate::{
    errors::{BPResult, BytePairError},
    types::{
        BPHashMap,
        BPHashSet,
        PRIMITIVE_COUNT,
        Pair,
        SymbolType,
        byte_to_symbol,
        composite_symbol,
        hash_map_with_capacity,
        hash_set_with_capacity,
        symbol_to_byte,
        symbol_to_u64,
    },
    vocab::MergeRule,
};

/// What a symbol expands to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind<T: SymbolType> {
    /// A single raw byte.
    Primitive,

    /// A merged ``(left, right)`` pair.
    Composite(T, T),
}

impl<T: SymbolType> SymbolKind<T> {
    /// Is this a primitive byte?
    pub fn is_primitive(&self) -> bool {
        matches!(self, SymbolKind::Primitive)
    }

    /// The pair a composite symbol expands to.
    pub fn pair(&self) -> Option<Pair<T>> {
        match self {
            SymbolKind::Primitive => None,
            SymbolKind::Composite(left, right) => Some((*left, *right)),
        }
    }
}

/// Validate an ordered rule list against a primitive alphabet.
///
/// - the ``i``-th rule's symbol is ``256 + i``;
/// - each rule's parents are either observed primitives,
///   or composite symbols created by an earlier rule;
/// - no pair is merged twice.
///
/// ## Arguments
/// * `primitives` - ``primitives[b]`` is true if byte ``b`` is in the alphabet.
/// * `rules` - the rules, in creation order.
pub fn try_validate_rules<T: SymbolType>(
    primitives: &[bool; PRIMITIVE_COUNT],
    rules: &[MergeRule<T>],
) -> BPResult<()> {
    let mut seen_pairs: BPHashSet<Pair<T>> = hash_set_with_capacity(rules.len());

    for (idx, rule) in rules.iter().enumerate() {
        let expected: T = composite_symbol(idx)?;
        if rule.symbol != expected {
            return Err(BytePairError::AlphabetConflict(format!(
                "rule #{idx} defines symbol {}, expected {expected}",
                rule.symbol
            )));
        }

        for parent in [rule.left, rule.right] {
            let defined = match symbol_to_byte(parent) {
                Some(b) => primitives[b as usize],
                None => parent < rule.symbol,
            };
            if !defined {
                return Err(BytePairError::AlphabetConflict(format!(
                    "rule {rule} parent {parent} is not defined"
                )));
            }
        }

        if !seen_pairs.insert(rule.pair()) {
            return Err(BytePairError::AlphabetConflict(format!(
                "rule {rule} merges a pair that was already merged"
            )));
        }
    }

    Ok(())
}

/// The learned alphabet.
///
/// Holds the observed primitive bytes and the ordered [`MergeRule`]s.
/// Composite symbols are dense: rule ``i`` defines symbol ``256 + i``;
/// so ascending symbol order is creation order.
///
/// Immutable once built.
#[derive(Clone, PartialEq)]
pub struct AlphabetMap<T: SymbolType> {
    /// ``primitives[b]`` is true if byte ``b`` was observed.
    primitives: [bool; PRIMITIVE_COUNT],

    /// The merge rules, in creation order.
    rules: Vec<MergeRule<T>>,

    /// Map of ``{ (left, right) -> symbol }``.
    pair_index: BPHashMap<Pair<T>, T>,
}

impl<T: SymbolType> Debug for AlphabetMap<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("AlphabetMap")
            .field("primitives", &self.primitives().collect::<Vec<_>>())
            .field("rules", &self.rules)
            .finish()
    }
}

impl<T: SymbolType> AlphabetMap<T> {
    /// Build an alphabet from primitive bytes and ordered rules.
    ///
    /// ## Arguments
    /// * `primitives` - the primitive bytes; duplicates are fine.
    /// * `rules` - the rules, in creation order.
    ///
    /// ## Returns
    /// The alphabet; or [`BytePairError::AlphabetConflict`] if the rules
    /// fail [`try_validate_rules`].
    pub fn new<I>(
        primitives: I,
        rules: Vec<MergeRule<T>>,
    ) -> BPResult<Self>
    where
        I: IntoIterator<Item = u8>,
    {
        let mut mask = [false; PRIMITIVE_COUNT];
        for b in primitives {
            mask[b as usize] = true;
        }

        try_validate_rules(&mask, &rules)?;

        let mut pair_index = hash_map_with_capacity(rules.len());
        for rule in &rules {
            pair_index.insert(rule.pair(), rule.symbol);
        }

        Ok(Self {
            primitives: mask,
            rules,
            pair_index,
        })
    }

    /// Build an alphabet from ``(symbol, kind)`` entries in any order.
    ///
    /// Entries are sorted by symbol id to recover creation order.
    pub fn from_entries<I>(entries: I) -> BPResult<Self>
    where
        I: IntoIterator<Item = (T, SymbolKind<T>)>,
    {
        let mut entries: Vec<(T, SymbolKind<T>)> = entries.into_iter().collect();
        entries.sort_by_key(|(symbol, _)| *symbol);

        let mut primitives: Vec<u8> = Vec::new();
        let mut rules: Vec<MergeRule<T>> = Vec::with_capacity(entries.len());
        let mut last: Option<T> = None;

        for (symbol, kind) in entries {
            if last == Some(symbol) {
                return Err(BytePairError::AlphabetConflict(format!(
                    "symbol {symbol} is defined more than once"
                )));
            }
            last = Some(symbol);

            match (symbol_to_byte(symbol), kind) {
                (Some(b), SymbolKind::Primitive) => primitives.push(b),
                (None, SymbolKind::Composite(left, right)) => {
                    rules.push(MergeRule::new(symbol, left, right))
                }
                (Some(_), SymbolKind::Composite(..)) => {
                    return Err(BytePairError::AlphabetConflict(format!(
                        "primitive symbol {symbol} cannot be a composite"
                    )));
                }
                (None, SymbolKind::Primitive) => {
                    return Err(BytePairError::AlphabetConflict(format!(
                        "composite symbol {symbol} has no pair"
                    )));
                }
            }
        }

        Self::new(primitives, rules)
    }

    /// The total number of symbols (primitive and composite).
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.primitive_count() + self.composite_count()
    }

    /// The number of observed primitive bytes.
    pub fn primitive_count(&self) -> usize {
        self.primitives.iter().filter(|&&p| p).count()
    }

    /// The number of composite symbols (merge rules).
    pub fn composite_count(&self) -> usize {
        self.rules.len()
    }

    /// The observed primitive bytes, ascending.
    pub fn primitives(&self) -> impl Iterator<Item = u8> + '_ {
        (0..PRIMITIVE_COUNT)
            .filter(|&b| self.primitives[b])
            .map(|b| b as u8)
    }

    /// The merge rules, in creation order.
    pub fn rules(&self) -> &[MergeRule<T>] {
        &self.rules
    }

    /// The largest symbol in the alphabet.
    pub fn max_symbol(&self) -> Option<T> {
        match self.rules.last() {
            Some(rule) => Some(rule.symbol),
            None => self.primitives().last().map(byte_to_symbol),
        }
    }

    /// Look up the rule which created `symbol`.
    pub fn rule(
        &self,
        symbol: T,
    ) -> Option<&MergeRule<T>> {
        if symbol_to_byte(symbol).is_some() {
            return None;
        }
        let idx = symbol.to_usize()? - PRIMITIVE_COUNT;
        self.rules.get(idx)
    }

    /// Look up a symbol.
    ///
    /// ## Returns
    /// The symbol's [`SymbolKind`]; or `None` if it is not in the alphabet.
    pub fn get(
        &self,
        symbol: T,
    ) -> Option<SymbolKind<T>> {
        match symbol_to_byte(symbol) {
            Some(b) if self.primitives[b as usize] => Some(SymbolKind::Primitive),
            Some(_) => None,
            None => self
                .rule(symbol)
                .map(|rule| SymbolKind::Composite(rule.left, rule.right)),
        }
    }

    /// Is `symbol` in the alphabet?
    pub fn contains(
        &self,
        symbol: T,
    ) -> bool {
        self.get(symbol).is_some()
    }

    /// Look up the symbol a pair merges into.
    pub fn lookup_pair(
        &self,
        pair: &Pair<T>,
    ) -> Option<T> {
        self.pair_index.get(pair).copied()
    }

    /// Iterate over every ``(symbol, kind)`` entry, ascending by symbol.
    pub fn iter(&self) -> impl Iterator<Item = (T, SymbolKind<T>)> + '_ {
        self.primitives()
            .map(|b| (byte_to_symbol(b), SymbolKind::Primitive))
            .chain(
                self.rules
                    .iter()
                    .map(|r| (r.symbol, SymbolKind::Composite(r.left, r.right))),
            )
    }

    /// The number of bytes `symbol` expands to.
    ///
    /// ## Returns
    /// The length; or [`BytePairError::UnknownSymbol`].
    pub fn expanded_len(
        &self,
        symbol: T,
    ) -> BPResult<usize> {
        let mut len = 0;
        let mut stack = vec![symbol];
        while let Some(s) = stack.pop() {
            match self.get(s) {
                Some(SymbolKind::Primitive) => len += 1,
                Some(SymbolKind::Composite(left, right)) => {
                    stack.push(right);
                    stack.push(left);
                }
                None => {
                    return Err(BytePairError::UnknownSymbol {
                        symbol: symbol_to_u64(s),
                    });
                }
            }
        }
        Ok(len)
    }
}
