//! # Parallel Encoder

use std::sync::Arc;

use crate::{encoders::SymbolEncoder, types::SymbolType, vocab::AlphabetMap};

/// Batch-Level Parallel Encoder Wrapper.
///
/// Enables ``rayon`` encoding of batches when available.
#[derive(Clone)]
pub struct ParallelRayonEncoder<T: SymbolType, E: SymbolEncoder<T>> {
    /// Inner encoder.
    pub inner: E,

    _marker: std::marker::PhantomData<T>,
}

impl<T, E> ParallelRayonEncoder<T, E>
where
    T: SymbolType,
    E: SymbolEncoder<T>,
{
    /// Create a new parallel encoder.
    ///
    /// ## Arguments
    /// * `inner` - The symbol encoder to wrap.
    ///
    /// ## Returns
    /// A new `ParallelRayonEncoder` instance.
    pub fn new(inner: E) -> Self {
        Self {
            inner,
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T, E> SymbolEncoder<T> for ParallelRayonEncoder<T, E>
where
    T: SymbolType,
    E: SymbolEncoder<T>,
{
    fn alphabet(&self) -> &Arc<AlphabetMap<T>> {
        self.inner.alphabet()
    }

    fn encode_append(
        &self,
        bytes: &[u8],
        symbols: &mut Vec<T>,
    ) {
        self.inner.encode_append(bytes, symbols)
    }

    fn encode_batch(
        &self,
        batch: &[&[u8]],
    ) -> Vec<Vec<T>> {
        use rayon::prelude::*;

        batch
            .par_iter()
            .map(|bytes| self.inner.encode(bytes))
            .collect()
    }
}
