//! # Merge Rule ``symbol := (left, right)``

use core::fmt;

use crate::types::{Pair, SymbolType};

/// A single learned merge: ``symbol := (left, right)``.
///
/// Rules are created in order; the ``i``-th rule has ``symbol == 256 + i``.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergeRule<T: SymbolType> {
    /// The composite symbol created by this merge.
    pub symbol: T,

    /// The left parent symbol.
    pub left: T,

    /// The right parent symbol.
    pub right: T,
}

impl<T: SymbolType> MergeRule<T> {
    /// Create a new rule.
    pub fn new(
        symbol: T,
        left: T,
        right: T,
    ) -> Self {
        Self {
            symbol,
            left,
            right,
        }
    }

    /// The ``(left, right)`` pair this rule replaces.
    pub fn pair(&self) -> Pair<T> {
        (self.left, self.right)
    }
}

impl<T: SymbolType> fmt::Display for MergeRule<T> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{} := ({}, {})", self.symbol, self.left, self.right)
    }
}
