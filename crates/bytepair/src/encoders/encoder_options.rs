//! # Symbol Encoder Options
//!
//! Options for building a [`SymbolEncoder`].

use std::sync::Arc;

use crate::{
    encoders::{MergeScanEncoder, RulePassEncoder, SymbolEncoder},
    types::SymbolType,
    vocab::AlphabetMap,
};

/// Selects a [`SymbolEncoder`] implementation.
///
/// All kinds produce identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EncoderKind {
    /// [`RulePassEncoder`]; one pass per rule.
    #[default]
    RulePass,

    /// [`MergeScanEncoder`]; repeated lowest-symbol scans.
    MergeScan,
}

/// Options for configuring a [`SymbolEncoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EncoderOptions {
    /// The encoder implementation.
    pub kind: EncoderKind,

    /// Should batches be encoded in parallel?
    pub parallel: bool,
}

impl EncoderOptions {
    /// Get the configured [`EncoderKind`].
    pub fn kind(&self) -> EncoderKind {
        self.kind
    }

    /// Set the configured [`EncoderKind`].
    pub fn set_kind(
        &mut self,
        kind: EncoderKind,
    ) {
        self.kind = kind;
    }

    /// Set the configured [`EncoderKind`] and return the builder.
    pub fn with_kind(
        mut self,
        kind: EncoderKind,
    ) -> Self {
        self.set_kind(kind);
        self
    }

    /// Gets the configured parallelism value.
    ///
    /// Enabling parallelism will request a threaded batch implementation;
    /// this has no effect without the ``rayon`` feature.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value and return the builder.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Build the configured [`SymbolEncoder`].
    ///
    /// ## Arguments
    /// * `alphabet` - The learned alphabet.
    pub fn build<T: SymbolType>(
        &self,
        alphabet: Arc<AlphabetMap<T>>,
    ) -> Arc<dyn SymbolEncoder<T>> {
        #[allow(unused_mut)]
        let mut enc: Arc<dyn SymbolEncoder<T>> = match self.kind {
            EncoderKind::RulePass => Arc::new(RulePassEncoder::new(alphabet)),
            EncoderKind::MergeScan => Arc::new(MergeScanEncoder::new(alphabet)),
        };

        #[cfg(feature = "rayon")]
        if self.parallel {
            enc = Arc::new(crate::rayon::ParallelRayonEncoder::new(enc));
        }

        enc
    }
}
