//! # `bytepair` Byte-Pair Encoding Engine
//!
//! Learns a byte-level merge alphabet from a single training sequence,
//! then uses it to encode arbitrary bytes into symbols, and to decode
//! symbols back into the exact original bytes.
//!
//! Symbols ``0..=255`` are primitive bytes; each learned merge rule
//! ``symbol := (left, right)`` allocates the next composite id, from ``256``.
//!
//! See:
//! * [`Tokenizer`] for the train / encode / decode lifecycle.
//! * [`training`] for the merge learner, and pair statistics.
//! * [`encoders`] to encode bytes into symbols.
//! * [`decoders`] to decode symbols into bytes.
//! * [`vocab`] for the learned [`vocab::AlphabetMap`], and its text format.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``ahash``
//! * ``rayon``
//!
//! #### feature: ``ahash``
//!
//! This swaps all HashMap/HashSet implementations for ``ahash``; which is a performance
//! win on many/(most?) modern CPUs.
//!
//! This is done by the ``types::BPHash{*}`` type alias machinery.
//!
//! #### feature: ``foldhash``
//!
//! As ``ahash``, using ``foldhash``. If both are enabled, ``ahash`` wins.
//!
//! #### feature: ``rayon``
//!
//! This enables batch parallelism wrappers using the ``rayon`` crate.
//! Training is always single-threaded.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Example
//!
//! ```rust
//! use bytepair::{Tokenizer, TokenizerOptions};
//!
//! let mut tokenizer: Tokenizer<u32> = Tokenizer::new(TokenizerOptions::default());
//!
//! let trained = tokenizer.train_str("the cat sat on the mat").unwrap();
//! let symbols = tokenizer.encode_str("the mat").unwrap();
//!
//! assert!(trained.len() < "the cat sat on the mat".len());
//! assert_eq!(tokenizer.decode_to_string(&symbols).unwrap(), "the mat");
//! ```
#![warn(missing_docs, unused)]

#[cfg(feature = "rayon")]
pub mod rayon;

pub mod decoders;
pub mod encoders;
pub mod errors;
pub mod tokenizer;
pub mod training;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use decoders::{DecoderOptions, SymbolDecoder};
#[doc(inline)]
pub use encoders::{EncoderOptions, SymbolEncoder};
#[doc(inline)]
pub use errors::{BPResult, BytePairError};
#[doc(inline)]
pub use tokenizer::{Tokenizer, TokenizerOptions};
#[doc(inline)]
pub use types::SymbolType;
#[doc(inline)]
pub use vocab::{AlphabetMap, MergeRule};
