//! # Encoder Test Utilities

use std::sync::Arc;

use crate::{
    decoders::{ExpansionDecoder, SymbolDecoder},
    encoders::SymbolEncoder,
    training::MergeLearner,
    types::{SymbolType, static_is_send_sync_check},
    vocab::AlphabetMap,
};

/// The training corpus behind [`common_test_alphabet`].
pub const COMMON_TEST_CORPUS: &str = "the cat sat on the mat; the cat ate the rat. \
     hello hello world! abababab aaaaaaa aaabdaaabacab";

/// Build the common test alphabet, trained on [`COMMON_TEST_CORPUS`].
pub fn common_test_alphabet<T: SymbolType>() -> Arc<AlphabetMap<T>> {
    let learned = MergeLearner::<T>::from_bytes(COMMON_TEST_CORPUS)
        .run()
        .unwrap();
    Arc::new(AlphabetMap::new(COMMON_TEST_CORPUS.bytes(), learned.rules).unwrap())
}

/// Common [`SymbolEncoder`] tests.
pub fn common_encoder_tests<T: SymbolType, E: SymbolEncoder<T>>(
    alphabet: Arc<AlphabetMap<T>>,
    encoder: &E,
) {
    static_is_send_sync_check(encoder);
    assert_eq!(encoder.alphabet().as_ref(), alphabet.as_ref());

    // Encoding the corpus replays training.
    let learned = MergeLearner::<T>::from_bytes(COMMON_TEST_CORPUS)
        .run()
        .unwrap();
    assert_eq!(encoder.encode(COMMON_TEST_CORPUS.as_bytes()), learned.symbols);

    let samples: Vec<&[u8]> = [
        "",
        "t",
        "the rat sat on the cat",
        "hello world",
        "aaaaaaaaaaaaaaaa",
        "bababab",
    ]
    .iter()
    .map(|s| s.as_bytes())
    .collect();

    let decoder = ExpansionDecoder::new(alphabet);

    let batch = encoder.encode_batch(&samples);
    assert_eq!(batch.len(), samples.len());
    for (sample, symbols) in samples.iter().zip(batch.iter()) {
        assert_eq!(&encoder.encode(sample), symbols);
        assert!(symbols.len() <= sample.len());
        assert_eq!(decoder.try_decode(symbols).unwrap(), sample.to_vec());
    }

    // Appending keeps the existing prefix.
    let mut buf: Vec<T> = encoder.encode(b"the cat");
    let prefix = buf.clone();
    encoder.encode_append(b" sat", &mut buf);
    assert_eq!(&buf[..prefix.len()], prefix.as_slice());
    assert_eq!(&buf[prefix.len()..], encoder.encode(b" sat").as_slice());
}
