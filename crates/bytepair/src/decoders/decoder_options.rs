//! Symbol Decoder Options
//!
//! Options for building a [`SymbolDecoder`].

use std::sync::Arc;

use crate::{
    decoders::{ExpansionDecoder, RuleUnwindDecoder, SymbolDecoder},
    types::SymbolType,
    vocab::AlphabetMap,
};

/// Selects a [`SymbolDecoder`] implementation.
///
/// All kinds produce identical output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DecoderKind {
    /// [`ExpansionDecoder`]; stack-based expansion.
    #[default]
    Expansion,

    /// [`RuleUnwindDecoder`]; one pass per rule, descending.
    RuleUnwind,
}

/// Options for configuring a [`SymbolDecoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DecoderOptions {
    /// The decoder implementation.
    pub kind: DecoderKind,

    /// Should the decoder be threaded?
    ///
    /// Enabling parallelism will request a threaded implementation.
    pub parallel: bool,
}

impl DecoderOptions {
    /// Get the configured [`DecoderKind`].
    pub fn kind(&self) -> DecoderKind {
        self.kind
    }

    /// Set the configured [`DecoderKind`].
    pub fn set_kind(
        &mut self,
        kind: DecoderKind,
    ) {
        self.kind = kind;
    }

    /// Set the configured [`DecoderKind`] and return the builder.
    pub fn with_kind(
        mut self,
        kind: DecoderKind,
    ) -> Self {
        self.set_kind(kind);
        self
    }

    /// Gets the configured parallelism value.
    ///
    /// Enabling parallelism will request a threaded implementation.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request a threaded implementation.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.parallel = parallel;
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request a threaded implementation.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Build a [`SymbolDecoder`] for the given alphabet.
    pub fn build<T: SymbolType>(
        &self,
        alphabet: Arc<AlphabetMap<T>>,
    ) -> Arc<dyn SymbolDecoder<T>> {
        #[allow(unused_mut)]
        let mut dec: Arc<dyn SymbolDecoder<T>> = match self.kind {
            DecoderKind::Expansion => Arc::new(ExpansionDecoder::new(alphabet)),
            DecoderKind::RuleUnwind => Arc::new(RuleUnwindDecoder::new(alphabet)),
        };

        #[cfg(feature = "rayon")]
        if self.parallel {
            dec = Arc::new(crate::rayon::ParallelRayonDecoder::new(dec));
        }

        dec
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{decoders::test_utils::common_decoder_tests, encoders::test_utils::common_test_alphabet};

    #[test]
    fn test_build() {
        type T = u16;
        let alphabet = common_test_alphabet::<T>();

        for kind in [DecoderKind::Expansion, DecoderKind::RuleUnwind] {
            for parallel in [false, true] {
                let options = DecoderOptions::default()
                    .with_kind(kind)
                    .with_parallel(parallel);
                assert_eq!(options.kind(), kind);
                assert_eq!(options.parallel(), parallel);

                common_decoder_tests(alphabet.clone(), &options.build(alphabet.clone()));
            }
        }
    }
}
