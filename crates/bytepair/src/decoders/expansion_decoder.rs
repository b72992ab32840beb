//! # Pair Expansion ``{ T -> (T, T) }`` Symbol Decoder

use std::sync::Arc;

use crate::{
    decoders::SymbolDecoder,
    errors::{BPResult, BytePairError},
    types::{SymbolType, symbol_to_byte, symbol_to_u64},
    vocab::AlphabetMap,
};

/// A stack-based pair expansion [`SymbolDecoder`].
///
/// Each input symbol is expanded depth-first, left parent before right.
/// Every composite's parents were created before it, so the expansion
/// terminates in primitives; the result matches undoing the rules
/// in descending creation order.
///
/// ## Style Hints
///
/// When there is no local ambiguity, instance names should prefer `decoder`;
/// and expand to `expansion_decoder` when there is ambiguity.
#[derive(Debug, Clone)]
pub struct ExpansionDecoder<T: SymbolType> {
    alphabet: Arc<AlphabetMap<T>>,
}

impl<T: SymbolType> ExpansionDecoder<T> {
    /// Create a new decoder.
    ///
    /// ## Arguments
    /// * `alphabet` - The learned alphabet.
    pub fn new(alphabet: Arc<AlphabetMap<T>>) -> Self {
        Self { alphabet }
    }
}

impl<T: SymbolType> SymbolDecoder<T> for ExpansionDecoder<T> {
    fn alphabet(&self) -> &Arc<AlphabetMap<T>> {
        &self.alphabet
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn try_decode(
        &self,
        symbols: &[T],
    ) -> BPResult<Vec<u8>> {
        let mut value = Vec::with_capacity(symbols.len() * 2);
        let mut stack = vec![];

        for &s in symbols {
            stack.push(s);

            while let Some(t) = stack.pop() {
                let unknown = || BytePairError::UnknownSymbol {
                    symbol: symbol_to_u64(t),
                };

                match self.alphabet.get(t).ok_or_else(unknown)?.pair() {
                    Some((left, right)) => {
                        stack.push(right);
                        stack.push(left);
                    }
                    None => value.push(symbol_to_byte(t).ok_or_else(unknown)?),
                }
            }
        }

        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        decoders::test_utils::common_decoder_tests,
        encoders::test_utils::common_test_alphabet,
        vocab::MergeRule,
    };

    #[test]
    fn test_decoder_u16() {
        let alphabet = common_test_alphabet::<u16>();
        common_decoder_tests(alphabet.clone(), &ExpansionDecoder::new(alphabet));
    }

    #[test]
    fn test_decoder_u32() {
        let alphabet = common_test_alphabet::<u32>();
        common_decoder_tests(alphabet.clone(), &ExpansionDecoder::new(alphabet));
    }

    #[test]
    fn test_nested_expansion() {
        type T = u32;

        // 258 := (256, 257) := ((a, a), (a, b))
        let alphabet = Arc::new(
            AlphabetMap::new(
                *b"abcd",
                vec![
                    MergeRule::new(256, 97, 97),
                    MergeRule::new(257, 97, 98),
                    MergeRule::new(258, 256, 257),
                ],
            )
            .unwrap(),
        );
        let decoder = ExpansionDecoder::<T>::new(alphabet);

        assert_eq!(
            decoder.try_decode(&[258, 100, 258, 97, 99, 257]).unwrap(),
            b"aaabdaaabacab".to_vec()
        );
        assert_eq!(decoder.try_decode(&[]).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_to_string_rejects_invalid_utf8() {
        type T = u32;

        let alphabet = Arc::new(AlphabetMap::new([0xff_u8, b'a'], vec![]).unwrap());
        let decoder = ExpansionDecoder::<T>::new(alphabet);

        assert_eq!(decoder.try_decode_to_string(&[97]).unwrap(), "a");
        assert!(matches!(
            decoder.try_decode_to_string(&[0xff]),
            Err(BytePairError::Utf8(_))
        ));
    }
}
