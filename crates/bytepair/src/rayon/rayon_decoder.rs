//! # Parallel Decoder

use std::sync::Arc;

use crate::{decoders::SymbolDecoder, errors::BPResult, types::SymbolType, vocab::AlphabetMap};

/// Batch-Level Parallel Decoder Wrapper.
///
/// Enables ``rayon`` decoding of batches when available.
#[derive(Clone)]
pub struct ParallelRayonDecoder<T: SymbolType, D: SymbolDecoder<T>> {
    /// Wrapped decoder.
    pub inner: D,

    _marker: std::marker::PhantomData<T>,
}

impl<T, D> ParallelRayonDecoder<T, D>
where
    T: SymbolType,
    D: SymbolDecoder<T>,
{
    /// Create a new parallel symbol decoder.
    ///
    /// ## Arguments
    /// * `inner` - The symbol decoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonDecoder` instance.
    pub fn new(inner: D) -> Self {
        Self {
            inner,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T, D> SymbolDecoder<T> for ParallelRayonDecoder<T, D>
where
    T: SymbolType,
    D: SymbolDecoder<T>,
{
    fn alphabet(&self) -> &Arc<AlphabetMap<T>> {
        self.inner.alphabet()
    }

    fn try_decode(
        &self,
        symbols: &[T],
    ) -> BPResult<Vec<u8>> {
        self.inner.try_decode(symbols)
    }

    fn try_decode_batch(
        &self,
        batch: &[&[T]],
    ) -> BPResult<Vec<Vec<u8>>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|symbols| self.inner.try_decode(symbols))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        decoders::{ExpansionDecoder, RuleUnwindDecoder, test_utils::common_decoder_tests},
        encoders::test_utils::common_test_alphabet,
    };

    #[test]
    fn test_decoder() {
        type T = u32;

        let alphabet = common_test_alphabet::<T>();

        let decoder = ParallelRayonDecoder::new(ExpansionDecoder::new(alphabet.clone()));
        common_decoder_tests(alphabet.clone(), &decoder);

        let decoder = ParallelRayonDecoder::new(RuleUnwindDecoder::new(alphabet.clone()));
        common_decoder_tests(alphabet, &decoder);
    }
}
