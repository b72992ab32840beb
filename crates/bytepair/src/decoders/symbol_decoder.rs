//! # Symbol Decoder Trait

use std::sync::Arc;

use crate::{errors::BPResult, types::SymbolType, vocab::AlphabetMap};

/// Trait for symbol decoders.
///
/// Decoding is the exact inverse of encoding: every composite symbol
/// expands, recursively, to the primitive bytes it was merged from.
pub trait SymbolDecoder<T: SymbolType>: Send + Sync {
    /// Return the attached alphabet.
    fn alphabet(&self) -> &Arc<AlphabetMap<T>>;

    /// Decodes symbols into bytes.
    ///
    /// ## Arguments
    /// * `symbols` - A slice of symbols to decode.
    ///
    /// ## Returns
    /// The bytes; or [`crate::errors::BytePairError::UnknownSymbol`] for the
    /// first symbol which is not in the alphabet.
    fn try_decode(
        &self,
        symbols: &[T],
    ) -> BPResult<Vec<u8>>;

    /// Decodes symbols into a UTF-8 string.
    ///
    /// ## Returns
    /// The string; or [`crate::errors::BytePairError::Utf8`] if the bytes
    /// are not valid UTF-8.
    fn try_decode_to_string(
        &self,
        symbols: &[T],
    ) -> BPResult<String> {
        Ok(String::from_utf8(self.try_decode(symbols)?)?)
    }

    /// Decodes a batch of symbol sequences.
    ///
    /// ## Arguments
    /// * `batch` - A batch of symbol sequences.
    ///
    /// ## Returns
    /// The decoded bytes, in batch order; or the first error.
    fn try_decode_batch(
        &self,
        batch: &[&[T]],
    ) -> BPResult<Vec<Vec<u8>>> {
        batch
            .iter()
            .map(|symbols| self.try_decode(symbols))
            .collect()
    }
}

impl<T, D> SymbolDecoder<T> for Arc<D>
where
    T: SymbolType,
    D: SymbolDecoder<T> + ?Sized,
{
    fn alphabet(&self) -> &Arc<AlphabetMap<T>> {
        self.as_ref().alphabet()
    }

    fn try_decode(
        &self,
        symbols: &[T],
    ) -> BPResult<Vec<u8>> {
        self.as_ref().try_decode(symbols)
    }

    fn try_decode_batch(
        &self,
        batch: &[&[T]],
    ) -> BPResult<Vec<Vec<u8>>> {
        self.as_ref().try_decode_batch(batch)
    }
}
