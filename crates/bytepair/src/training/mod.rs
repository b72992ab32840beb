//! # Merge Training
//!
//! Learns an ordered list of [`crate::vocab::MergeRule`]s from a single byte
//! sequence.
//!
//! Training is greedy and exhaustive: at each step the most frequent adjacent
//! pair is replaced with a fresh composite symbol; learning stops when no pair
//! occurs more than once.
//!
//! * [`PairStatistics`] - adjacent pair counts, with first-occurrence tie-breaks.
//! * [`SymbolBuf`] - the sequence being rewritten.
//! * [`MergeLearner`] - the learning loop.
//!
//! ## Training Example
//!
//! ```rust
//! use bytepair::training::{LearnedMerges, MergeLearner};
//!
//! let learned: LearnedMerges<u32> = MergeLearner::from_bytes("aaabdaaabac")
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(learned.rules.len(), 3);
//! assert_eq!(learned.symbols.len(), 5);
//! ```
//!
//! The full recount per step is quadratic in the worst case; fine for the
//! single-document inputs this crate targets.

mod merge_learner;
mod pair_stats;
mod symbol_buf;

#[doc(inline)]
pub use merge_learner::{LearnedMerges, MergeLearner};
#[doc(inline)]
pub use pair_stats::{PairCount, PairStatistics};
#[doc(inline)]
pub use symbol_buf::{SymbolBuf, merge_pair_in_place};
