use std::{path::Path, sync::Arc};

use crate::{
    decoders::SymbolDecoder,
    encoders::SymbolEncoder,
    errors::{BPResult, BytePairError},
    tokenizer::TokenizerOptions,
    training::MergeLearner,
    types::{SymbolType, symbol_to_byte, validate_byte_symbols},
    vocab::{
        AlphabetMap,
        io::{load_alphabet_path, save_alphabet_path},
    },
};

/// The frozen codec of a trained [`Tokenizer`].
#[derive(Clone)]
struct TrainedCodec<T: SymbolType> {
    alphabet: Arc<AlphabetMap<T>>,
    encoder: Arc<dyn SymbolEncoder<T>>,
    decoder: Arc<dyn SymbolDecoder<T>>,
}

impl<T: SymbolType> TrainedCodec<T> {
    fn new(
        alphabet: Arc<AlphabetMap<T>>,
        options: &TokenizerOptions,
    ) -> Self {
        Self {
            encoder: options.encoder.build(alphabet.clone()),
            decoder: options.decoder.build(alphabet.clone()),
            alphabet,
        }
    }
}

/// Byte-Pair Tokenizer.
///
/// A one-way state machine: ``Untrained -> Trained``.
///
/// * [`train`](Self::train) learns the alphabet, exactly once.
/// * [`encode`](Self::encode) and [`decode`](Self::decode) require a
///   trained (or loaded) alphabet.
/// * [`reset`](Self::reset) discards the alphabet.
///
/// Once trained, the alphabet is immutable; a `&Tokenizer` can be shared
/// across threads for concurrent encode and decode.
///
/// ## Example
///
/// ```rust
/// use bytepair::Tokenizer;
///
/// let mut tokenizer: Tokenizer = Tokenizer::default();
/// let symbols = tokenizer.train_str("aaabdaaabacab").unwrap();
/// assert_eq!(symbols, vec![258, 100, 258, 97, 99, 257]);
///
/// assert_eq!(tokenizer.encode_str("aaab").unwrap(), vec![258]);
/// assert_eq!(tokenizer.decode_to_string(&symbols).unwrap(), "aaabdaaabacab");
/// ```
#[derive(Clone)]
pub struct Tokenizer<T: SymbolType = u32> {
    options: TokenizerOptions,
    codec: Option<TrainedCodec<T>>,
}

impl<T: SymbolType> Default for Tokenizer<T> {
    fn default() -> Self {
        Self::new(TokenizerOptions::default())
    }
}

impl<T: SymbolType> core::fmt::Debug for Tokenizer<T> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("Tokenizer")
            .field("options", &self.options)
            .field("alphabet", &self.codec.as_ref().map(|c| &c.alphabet))
            .finish()
    }
}

impl<T: SymbolType> Tokenizer<T> {
    /// Create a new, untrained tokenizer.
    pub fn new(options: TokenizerOptions) -> Self {
        Self {
            options,
            codec: None,
        }
    }

    /// Create a trained tokenizer from a learned (or loaded) alphabet.
    ///
    /// ## Arguments
    /// * `alphabet` - The alphabet.
    /// * `options` - The encoder and decoder options.
    pub fn from_alphabet<A>(
        alphabet: A,
        options: TokenizerOptions,
    ) -> Self
    where
        A: Into<Arc<AlphabetMap<T>>>,
    {
        let codec = TrainedCodec::new(alphabet.into(), &options);
        Self {
            options,
            codec: Some(codec),
        }
    }

    /// Create a trained tokenizer from an alphabet text file.
    ///
    /// See [`crate::vocab::io::load_alphabet_path`].
    pub fn load_alphabet_path<P: AsRef<Path>>(
        path: P,
        options: TokenizerOptions,
    ) -> BPResult<Self> {
        let alphabet: AlphabetMap<T> = load_alphabet_path(path)?;
        Ok(Self::from_alphabet(alphabet, options))
    }

    /// Save the alphabet to a text file.
    ///
    /// ## Returns
    /// [`BytePairError::NotTrained`] if there is no alphabet.
    pub fn save_alphabet_path<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> BPResult<()> {
        save_alphabet_path(self.alphabet()?, path)
    }

    /// Get the options.
    pub fn options(&self) -> &TokenizerOptions {
        &self.options
    }

    /// Is there a learned alphabet?
    pub fn is_trained(&self) -> bool {
        self.codec.is_some()
    }

    fn codec(&self) -> BPResult<&TrainedCodec<T>> {
        self.codec.as_ref().ok_or(BytePairError::NotTrained)
    }

    /// Get the learned alphabet.
    ///
    /// ## Returns
    /// The alphabet; or [`BytePairError::NotTrained`].
    pub fn alphabet(&self) -> BPResult<&AlphabetMap<T>> {
        Ok(self.codec()?.alphabet.as_ref())
    }

    /// Get the encoder.
    pub fn encoder(&self) -> BPResult<&Arc<dyn SymbolEncoder<T>>> {
        Ok(&self.codec()?.encoder)
    }

    /// Get the decoder.
    pub fn decoder(&self) -> BPResult<&Arc<dyn SymbolDecoder<T>>> {
        Ok(&self.codec()?.decoder)
    }

    /// Discard the alphabet; returning to the untrained state.
    pub fn reset(&mut self) {
        self.codec = None;
    }

    /// Learn the alphabet from a training sequence.
    ///
    /// ## Arguments
    /// * `bytes` - The training bytes.
    ///
    /// ## Returns
    /// The fully merged encoding of `bytes`; or
    /// * [`BytePairError::AlreadyTrained`] if already trained.
    /// * [`BytePairError::EmptySequence`] if `bytes` is empty.
    /// * [`BytePairError::SymbolOverflow`] if `T` cannot hold the alphabet.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn train<B: AsRef<[u8]>>(
        &mut self,
        bytes: B,
    ) -> BPResult<Vec<T>> {
        if self.is_trained() {
            return Err(BytePairError::AlreadyTrained);
        }
        let bytes = bytes.as_ref();
        if bytes.is_empty() {
            return Err(BytePairError::EmptySequence);
        }

        let learned = MergeLearner::<T>::from_bytes(bytes).run()?;
        let alphabet = AlphabetMap::new(bytes.iter().copied(), learned.rules)?;

        log::info!(
            "Trained alphabet: {} primitives, {} composites; {} -> {} symbols",
            alphabet.primitive_count(),
            alphabet.composite_count(),
            bytes.len(),
            learned.symbols.len()
        );

        self.codec = Some(TrainedCodec::new(Arc::new(alphabet), &self.options));
        Ok(learned.symbols)
    }

    /// Learn the alphabet from the UTF-8 bytes of `text`.
    ///
    /// See [`train`](Self::train).
    pub fn train_str(
        &mut self,
        text: &str,
    ) -> BPResult<Vec<T>> {
        self.train(text.as_bytes())
    }

    /// Learn the alphabet from symbol-typed byte values.
    ///
    /// ## Returns
    /// See [`train`](Self::train); or [`BytePairError::InvalidByteValue`]
    /// for the first value outside ``0..=255``.
    pub fn train_symbols(
        &mut self,
        values: &[T],
    ) -> BPResult<Vec<T>> {
        if self.is_trained() {
            return Err(BytePairError::AlreadyTrained);
        }
        let bytes: Vec<u8> = validate_byte_symbols(values)?
            .into_iter()
            .filter_map(symbol_to_byte)
            .collect();
        self.train(bytes)
    }

    /// Encode bytes into symbols.
    ///
    /// Input must be raw bytes; encoding previously encoded output
    /// is not meaningful.
    ///
    /// ## Returns
    /// The symbols; or [`BytePairError::NotTrained`].
    pub fn encode<B: AsRef<[u8]>>(
        &self,
        bytes: B,
    ) -> BPResult<Vec<T>> {
        Ok(self.encoder()?.encode(bytes.as_ref()))
    }

    /// Encode the UTF-8 bytes of `text`.
    pub fn encode_str(
        &self,
        text: &str,
    ) -> BPResult<Vec<T>> {
        self.encode(text.as_bytes())
    }

    /// Encode symbol-typed byte values.
    ///
    /// ## Returns
    /// The symbols; [`BytePairError::NotTrained`],
    /// or [`BytePairError::InvalidByteValue`].
    pub fn encode_symbols(
        &self,
        values: &[T],
    ) -> BPResult<Vec<T>> {
        let encoder = self.encoder()?;
        let bytes: Vec<u8> = validate_byte_symbols(values)?
            .into_iter()
            .filter_map(symbol_to_byte)
            .collect();
        Ok(encoder.encode(&bytes))
    }

    /// Encode a batch of byte sequences.
    pub fn encode_batch<B: AsRef<[u8]>>(
        &self,
        batch: &[B],
    ) -> BPResult<Vec<Vec<T>>> {
        let encoder = self.encoder()?;
        let batch: Vec<&[u8]> = batch.iter().map(|b| b.as_ref()).collect();
        Ok(encoder.encode_batch(&batch))
    }

    /// Decode symbols into bytes.
    ///
    /// ## Returns
    /// The bytes; [`BytePairError::NotTrained`],
    /// or [`BytePairError::UnknownSymbol`].
    pub fn decode(
        &self,
        symbols: &[T],
    ) -> BPResult<Vec<u8>> {
        self.decoder()?.try_decode(symbols)
    }

    /// Decode symbols into a UTF-8 string.
    ///
    /// ## Returns
    /// The string; see [`decode`](Self::decode),
    /// or [`BytePairError::Utf8`].
    pub fn decode_to_string(
        &self,
        symbols: &[T],
    ) -> BPResult<String> {
        self.decoder()?.try_decode_to_string(symbols)
    }

    /// Decode a batch of symbol sequences.
    pub fn decode_batch<S: AsRef<[T]>>(
        &self,
        batch: &[S],
    ) -> BPResult<Vec<Vec<u8>>> {
        let decoder = self.decoder()?;
        let batch: Vec<&[T]> = batch.iter().map(|s| s.as_ref()).collect();
        decoder.try_decode_batch(&batch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::static_is_send_sync_check;

    type T = u32;

    #[test]
    fn test_lifecycle() {
        let mut tokenizer: Tokenizer<T> = Tokenizer::default();
        static_is_send_sync_check(&tokenizer);

        assert!(!tokenizer.is_trained());
        assert!(matches!(tokenizer.alphabet(), Err(BytePairError::NotTrained)));
        assert!(matches!(tokenizer.encode("ab"), Err(BytePairError::NotTrained)));
        assert!(matches!(tokenizer.decode(&[97]), Err(BytePairError::NotTrained)));

        assert!(matches!(tokenizer.train(""), Err(BytePairError::EmptySequence)));
        assert!(!tokenizer.is_trained());

        let symbols = tokenizer.train("aaaaabab").unwrap();
        assert!(tokenizer.is_trained());
        assert_eq!(tokenizer.decode(&symbols).unwrap(), b"aaaaabab".to_vec());

        assert!(matches!(
            tokenizer.train("other"),
            Err(BytePairError::AlreadyTrained)
        ));
        assert!(matches!(
            tokenizer.train_symbols(&[1, 2]),
            Err(BytePairError::AlreadyTrained)
        ));

        tokenizer.reset();
        assert!(!tokenizer.is_trained());
        assert!(tokenizer.train("xyxy").is_ok());
    }

    #[test]
    fn test_encode_after_training() {
        let mut tokenizer: Tokenizer<T> = Tokenizer::default();
        tokenizer.train_str("aaaaabab").unwrap();

        let alphabet = tokenizer.alphabet().unwrap();
        assert_eq!(alphabet.composite_count(), 2);

        assert_eq!(tokenizer.encode("aa").unwrap(), vec![256]);
        assert_eq!(tokenizer.encode("ab").unwrap(), vec![257]);
        assert_eq!(tokenizer.encode("aaaa").unwrap(), vec![256, 256]);
        assert_eq!(tokenizer.encode("abab").unwrap(), vec![257, 257]);
        assert_eq!(tokenizer.encode("ababa").unwrap(), vec![257, 257, 97]);

        assert_eq!(
            tokenizer.encode_batch(&["aa", "ab", "ba"]).unwrap(),
            vec![vec![256], vec![257], vec![98, 97]]
        );
        assert_eq!(
            tokenizer
                .decode_batch(&[vec![256], vec![257, 98]])
                .unwrap(),
            vec![b"aa".to_vec(), b"abb".to_vec()]
        );
    }

    #[test]
    fn test_codec_accessors() {
        let mut tokenizer: Tokenizer<T> = Tokenizer::default();
        assert!(matches!(tokenizer.encoder(), Err(BytePairError::NotTrained)));
        assert!(matches!(tokenizer.decoder(), Err(BytePairError::NotTrained)));

        tokenizer.train_str("abab").unwrap();

        let encoder = tokenizer.encoder().unwrap();
        let decoder = tokenizer.decoder().unwrap();
        assert_eq!(encoder.alphabet().as_ref(), tokenizer.alphabet().unwrap());
        assert_eq!(decoder.alphabet().as_ref(), tokenizer.alphabet().unwrap());

        let symbols = encoder.encode(b"abab");
        assert_eq!(symbols, vec![256, 256]);
        assert_eq!(decoder.try_decode(&symbols).unwrap(), b"abab".to_vec());
    }

    #[test]
    fn test_symbol_inputs() {
        let mut tokenizer: Tokenizer<T> = Tokenizer::default();

        assert!(matches!(
            tokenizer.train_symbols(&[97, 300]),
            Err(BytePairError::InvalidByteValue {
                value: 300,
                index: 1
            })
        ));
        assert!(!tokenizer.is_trained());

        let symbols = tokenizer.train_symbols(&[97, 98, 97, 98]).unwrap();
        assert_eq!(symbols, vec![256, 256]);

        assert_eq!(tokenizer.encode_symbols(&[97, 98]).unwrap(), vec![256]);
        assert!(matches!(
            tokenizer.encode_symbols(&[97, 1000]),
            Err(BytePairError::InvalidByteValue {
                value: 1000,
                index: 1
            })
        ));
    }

    #[test]
    fn test_unknown_symbols() {
        let mut tokenizer: Tokenizer<T> = Tokenizer::default();
        tokenizer.train("abab").unwrap();

        assert!(matches!(
            tokenizer.decode(&[257]),
            Err(BytePairError::UnknownSymbol { symbol: 257 })
        ));
        // 'z' is a byte, but never observed.
        assert!(matches!(
            tokenizer.decode(&[122]),
            Err(BytePairError::UnknownSymbol { symbol: 122 })
        ));
    }

    #[test]
    fn test_save_load_alphabet() {
        let mut tokenizer: Tokenizer<T> = Tokenizer::default();
        let symbols = tokenizer.train_str("aaabdaaabacab").unwrap();

        tempdir::TempDir::new("tokenizer_test")
            .and_then(|dir| {
                let path = dir.path().join("alphabet.txt");

                tokenizer
                    .save_alphabet_path(&path)
                    .expect("Failed to save alphabet");

                let loaded: Tokenizer<T> =
                    Tokenizer::load_alphabet_path(&path, TokenizerOptions::default())
                        .expect("Failed to load alphabet");

                assert!(loaded.is_trained());
                assert_eq!(loaded.alphabet().unwrap(), tokenizer.alphabet().unwrap());
                assert_eq!(loaded.encode_str("aaabdaaabacab").unwrap(), symbols);
                assert_eq!(
                    loaded.decode_to_string(&symbols).unwrap(),
                    "aaabdaaabacab"
                );

                Ok(())
            })
            .unwrap();

        let untrained: Tokenizer<T> = Tokenizer::default();
        assert!(matches!(
            untrained.save_alphabet_path("unused.txt"),
            Err(BytePairError::NotTrained)
        ));
    }

    #[test]
    fn test_parallel_options() {
        let mut tokenizer: Tokenizer<T> =
            Tokenizer::new(TokenizerOptions::default().with_parallel(true));
        tokenizer.train_str("the cat sat on the mat").unwrap();

        let batch = ["the cat", "the mat", "sat on"];
        let encoded = tokenizer.encode_batch(&batch).unwrap();
        let decoded = tokenizer.decode_batch(&encoded).unwrap();
        assert_eq!(
            decoded,
            batch.iter().map(|s| s.as_bytes().to_vec()).collect::<Vec<_>>()
        );
    }
}
