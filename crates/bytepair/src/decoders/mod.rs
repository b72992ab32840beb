//! # Symbol Decoders
//!
//! Decoder clients should use:
//!
//! * `ExpansionDecoder` - the fastest `SymbolDecoder`.
//! * `RuleUnwindDecoder` - undoes rules in descending creation order; identical output.
//! * `ParallelRayonDecoder` - a batch parallelism wrapper around any `SymbolDecoder`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use bytepair::{
//!     decoders::{ExpansionDecoder, SymbolDecoder},
//!     types::SymbolType,
//!     vocab::AlphabetMap,
//! };
//!
//! fn example<T: SymbolType>(
//!     alphabet: Arc<AlphabetMap<T>>,
//!     batch: &[&[T]],
//! ) -> Vec<Vec<u8>> {
//!     let decoder = ExpansionDecoder::new(alphabet);
//!
//!     #[cfg(feature = "rayon")]
//!     let decoder = bytepair::rayon::ParallelRayonDecoder::new(decoder);
//!
//!     decoder.try_decode_batch(batch).unwrap()
//! }
//! ```

mod decoder_options;
mod expansion_decoder;
mod rule_unwind_decoder;
mod symbol_decoder;
#[cfg(test)]
pub(crate) mod test_utils;

#[doc(inline)]
pub use decoder_options::{DecoderKind, DecoderOptions};
#[doc(inline)]
pub use expansion_decoder::ExpansionDecoder;
#[doc(inline)]
pub use rule_unwind_decoder::RuleUnwindDecoder;
#[doc(inline)]
pub use symbol_decoder::SymbolDecoder;
