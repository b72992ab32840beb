//! # Decoder Test Utilities

use std::sync::Arc;

use crate::{
    decoders::SymbolDecoder,
    encoders::{RulePassEncoder, SymbolEncoder, test_utils::COMMON_TEST_CORPUS},
    errors::BytePairError,
    types::{SymbolType, static_is_send_sync_check},
    vocab::AlphabetMap,
};

/// Common [`SymbolDecoder`] tests.
pub fn common_decoder_tests<T: SymbolType, D: SymbolDecoder<T>>(
    alphabet: Arc<AlphabetMap<T>>,
    decoder: &D,
) {
    static_is_send_sync_check(decoder);
    assert_eq!(decoder.alphabet().as_ref(), alphabet.as_ref());

    let encoder = RulePassEncoder::new(alphabet.clone());

    let samples = vec![
        COMMON_TEST_CORPUS,
        "",
        "the hat",
        "ababababababab",
        "aaaaaaaaaaa",
    ];
    let encoded: Vec<Vec<T>> = samples
        .iter()
        .map(|s| encoder.encode(s.as_bytes()))
        .collect();

    for (sample, symbols) in samples.iter().zip(encoded.iter()) {
        assert_eq!(decoder.try_decode_to_string(symbols).unwrap(), *sample);
    }

    let batch: Vec<&[T]> = encoded.iter().map(|v| v.as_slice()).collect();
    let decoded = decoder.try_decode_batch(&batch).unwrap();
    assert_eq!(
        decoded,
        samples
            .iter()
            .map(|s| s.as_bytes().to_vec())
            .collect::<Vec<_>>()
    );

    // Every composite expands to its full span.
    for rule in alphabet.rules() {
        let bytes = decoder.try_decode(&[rule.symbol]).unwrap();
        assert_eq!(bytes.len(), alphabet.expanded_len(rule.symbol).unwrap());
    }

    // Never-seen primitive byte; and a symbol past the last rule.
    let unseen = T::from_u8(b'Z').unwrap();
    assert!(!alphabet.contains(unseen));
    assert!(matches!(
        decoder.try_decode(&[unseen]),
        Err(BytePairError::UnknownSymbol { symbol: 90 })
    ));

    let past = alphabet.max_symbol().unwrap() + T::one();
    assert!(matches!(
        decoder.try_decode(&[T::from_u8(b't').unwrap(), past]),
        Err(BytePairError::UnknownSymbol { .. })
    ));
}
