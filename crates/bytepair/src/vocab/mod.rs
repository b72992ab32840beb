//! # Alphabet
//!
//! The learned vocabulary of a trained tokenizer.
//!
//! * [`MergeRule`] - a single ``symbol := (left, right)`` merge.
//! * [`AlphabetMap`] - the observed primitive bytes, plus the ordered rules.
//!
//! Persistence lives in [`io`].

pub mod io;

mod alphabet;
mod merge_rule;

#[doc(inline)]
pub use alphabet::{AlphabetMap, SymbolKind, try_validate_rules};
#[doc(inline)]
pub use merge_rule::MergeRule;
