use std::sync::Arc;

use crate::{
    decoders::DecoderOptions,
    encoders::EncoderOptions,
    tokenizer::Tokenizer,
    types::SymbolType,
    vocab::AlphabetMap,
};

/// Options for configuring a [`Tokenizer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TokenizerOptions {
    /// Encoder options.
    pub encoder: EncoderOptions,

    /// Decoder options.
    pub decoder: DecoderOptions,
}

impl TokenizerOptions {
    /// Set the encoder options and return the builder.
    pub fn with_encoder(
        mut self,
        encoder: EncoderOptions,
    ) -> Self {
        self.encoder = encoder;
        self
    }

    /// Set the decoder options and return the builder.
    pub fn with_decoder(
        mut self,
        decoder: DecoderOptions,
    ) -> Self {
        self.decoder = decoder;
        self
    }

    /// Gets the configured parallelism value.
    ///
    /// Returns true if either encoder or decoder are configured for parallelism.
    ///
    /// Enabling parallelism will request threaded implementations.
    pub fn parallel(&self) -> bool {
        self.encoder.parallel() || self.decoder.parallel()
    }

    /// Sets the configured parallelism value on both encoder and decoder.
    ///
    /// Enabling parallelism will request threaded implementations.
    pub fn set_parallel(
        &mut self,
        parallel: bool,
    ) {
        self.encoder.set_parallel(parallel);
        self.decoder.set_parallel(parallel);
    }

    /// Sets the configured parallelism value.
    ///
    /// Enabling parallelism will request threaded implementations.
    pub fn with_parallel(
        mut self,
        parallel: bool,
    ) -> Self {
        self.set_parallel(parallel);
        self
    }

    /// Build an untrained [`Tokenizer`].
    pub fn init<T: SymbolType>(&self) -> Tokenizer<T> {
        Tokenizer::new(*self)
    }

    /// Build a trained [`Tokenizer`] for the given alphabet.
    pub fn build<T: SymbolType>(
        &self,
        alphabet: Arc<AlphabetMap<T>>,
    ) -> Tokenizer<T> {
        Tokenizer::from_alphabet(alphabet, *self)
    }
}
