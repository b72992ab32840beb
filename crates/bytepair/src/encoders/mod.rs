//! # Symbol Encoders
//!
//! Encoders rewrite raw bytes into the symbols of a learned
//! [`crate::vocab::AlphabetMap`].
//!
//! * [`RulePassEncoder`] - one left-to-right pass per rule, in creation order.
//! * [`MergeScanEncoder`] - repeated lowest-symbol scans; identical output.
//! * `ParallelRayonEncoder` - a batch parallelism wrapper around any `SymbolEncoder`.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use bytepair::{
//!     encoders::{EncoderOptions, SymbolEncoder},
//!     training::MergeLearner,
//!     vocab::AlphabetMap,
//! };
//!
//! let corpus = "aaabdaaabac";
//! let learned = MergeLearner::<u32>::from_bytes(corpus).run().unwrap();
//! let alphabet = Arc::new(AlphabetMap::new(corpus.bytes(), learned.rules).unwrap());
//!
//! let encoder = EncoderOptions::default().build(alphabet);
//! assert_eq!(encoder.encode(corpus.as_bytes()), learned.symbols);
//! ```

mod encoder_options;
mod merge_scan_encoder;
mod rule_pass_encoder;
mod symbol_encoder;
#[cfg(test)]
pub(crate) mod test_utils;

#[doc(inline)]
pub use encoder_options::{EncoderKind, EncoderOptions};
#[doc(inline)]
pub use merge_scan_encoder::MergeScanEncoder;
#[doc(inline)]
pub use rule_pass_encoder::RulePassEncoder;
#[doc(inline)]
pub use symbol_encoder::SymbolEncoder;
