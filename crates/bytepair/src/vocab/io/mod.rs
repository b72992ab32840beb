//! # Alphabet IO
//!
//! ## Saving And Loading An Alphabet
//!
//! ```rust,no_run
//! use bytepair::{
//!     Tokenizer,
//!     errors::BPResult,
//!     vocab::AlphabetMap,
//!     vocab::io::{load_alphabet_path, load_training_bytes_path, save_alphabet_path},
//! };
//!
//! fn example() -> BPResult<Tokenizer> {
//!     let mut tokenizer: Tokenizer = Tokenizer::default();
//!     tokenizer.train(load_training_bytes_path("corpus.txt")?)?;
//!
//!     save_alphabet_path(tokenizer.alphabet()?, "alphabet.txt")?;
//!
//!     let alphabet: AlphabetMap<u32> = load_alphabet_path("alphabet.txt")?;
//!     Ok(Tokenizer::from_alphabet(alphabet, Default::default()))
//! }
//! ```

mod alphabet_text;
mod training_source;

#[doc(inline)]
pub use alphabet_text::*;
#[doc(inline)]
pub use training_source::*;
