//! # Symbol Encoder Trait

use std::sync::Arc;

use crate::{types::SymbolType, vocab::AlphabetMap};

/// A trait for symbol encoders.
///
/// Every implementation must produce the same output as applying each
/// [`crate::vocab::MergeRule`] of the alphabet, in creation order, as a
/// single left-to-right non-overlapping pass.
///
/// Input is raw bytes. Re-encoding an already encoded sequence
/// is not meaningful; callers must not feed encoder output back in.
pub trait SymbolEncoder<T: SymbolType>: Send + Sync {
    /// Return the attached alphabet.
    fn alphabet(&self) -> &Arc<AlphabetMap<T>>;

    /// Encode bytes, appending to a target buffer.
    ///
    /// ## Arguments
    /// * `bytes` - The bytes to encode.
    /// * `symbols` - The target symbol buffer to append to.
    fn encode_append(
        &self,
        bytes: &[u8],
        symbols: &mut Vec<T>,
    );

    /// Encode bytes into symbols.
    ///
    /// ## Arguments
    /// * `bytes` - The bytes to encode.
    ///
    /// ## Returns
    /// A vector of symbols.
    fn encode(
        &self,
        bytes: &[u8],
    ) -> Vec<T> {
        let mut symbols = Vec::with_capacity(bytes.len());
        self.encode_append(bytes, &mut symbols);
        symbols
    }

    /// Encode a batch of byte sequences.
    ///
    /// ## Arguments
    /// * `batch` - A slice of byte sequences to encode.
    ///
    /// ## Returns
    /// A vector of symbol vectors, in batch order.
    fn encode_batch(
        &self,
        batch: &[&[u8]],
    ) -> Vec<Vec<T>> {
        batch.iter().map(|bytes| self.encode(bytes)).collect()
    }
}

impl<T, E> SymbolEncoder<T> for Arc<E>
where
    T: SymbolType,
    E: SymbolEncoder<T> + ?Sized,
{
    fn alphabet(&self) -> &Arc<AlphabetMap<T>> {
        self.as_ref().alphabet()
    }

    fn encode_append(
        &self,
        bytes: &[u8],
        symbols: &mut Vec<T>,
    ) {
        self.as_ref().encode_append(bytes, symbols)
    }

    fn encode_batch(
        &self,
        batch: &[&[u8]],
    ) -> Vec<Vec<T>> {
        self.as_ref().encode_batch(batch)
    }
}
