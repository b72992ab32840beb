//! # Rule Unwind Decoder

use std::sync::Arc;

use crate::{
    decoders::SymbolDecoder,
    errors::{BPResult, BytePairError},
    types::{SymbolType, symbol_to_byte, symbol_to_u64},
    vocab::AlphabetMap,
};

/// A [`SymbolDecoder`] which undoes the rules in descending creation order.
///
/// Each pass replaces every occurrence of one composite symbol with its
/// ``(left, right)`` pair. A later symbol may expand into an earlier
/// composite, which is still pending; so one descending sweep leaves only
/// primitives.
///
/// This is the literal inverse of the rule pass encoder; it is slower than
/// [`super::ExpansionDecoder`] but useful as a cross-check.
#[derive(Debug, Clone)]
pub struct RuleUnwindDecoder<T: SymbolType> {
    alphabet: Arc<AlphabetMap<T>>,
}

impl<T: SymbolType> RuleUnwindDecoder<T> {
    /// Create a new decoder.
    ///
    /// ## Arguments
    /// * `alphabet` - The learned alphabet.
    pub fn new(alphabet: Arc<AlphabetMap<T>>) -> Self {
        Self { alphabet }
    }
}

impl<T: SymbolType> SymbolDecoder<T> for RuleUnwindDecoder<T> {
    fn alphabet(&self) -> &Arc<AlphabetMap<T>> {
        &self.alphabet
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn try_decode(
        &self,
        symbols: &[T],
    ) -> BPResult<Vec<u8>> {
        if let Some(&unknown) = symbols.iter().find(|&&s| !self.alphabet.contains(s)) {
            return Err(BytePairError::UnknownSymbol {
                symbol: symbol_to_u64(unknown),
            });
        }

        let mut work: Vec<T> = symbols.to_vec();
        let Some(&max) = work.iter().max() else {
            return Ok(Vec::new());
        };

        for rule in self
            .alphabet
            .rules()
            .iter()
            .rev()
            .skip_while(|rule| rule.symbol > max)
        {
            let hits = work.iter().filter(|&&s| s == rule.symbol).count();
            if hits == 0 {
                continue;
            }

            let mut next = Vec::with_capacity(work.len() + hits);
            for &s in &work {
                if s == rule.symbol {
                    next.push(rule.left);
                    next.push(rule.right);
                } else {
                    next.push(s);
                }
            }
            work = next;
        }

        work.into_iter()
            .map(|s| {
                symbol_to_byte(s).ok_or(BytePairError::UnknownSymbol {
                    symbol: symbol_to_u64(s),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        decoders::{ExpansionDecoder, test_utils::common_decoder_tests},
        encoders::{
            RulePassEncoder,
            SymbolEncoder,
            test_utils::{COMMON_TEST_CORPUS, common_test_alphabet},
        },
    };

    #[test]
    fn test_decoder_u16() {
        let alphabet = common_test_alphabet::<u16>();
        common_decoder_tests(alphabet.clone(), &RuleUnwindDecoder::new(alphabet));
    }

    #[test]
    fn test_decoder_u32() {
        let alphabet = common_test_alphabet::<u32>();
        common_decoder_tests(alphabet.clone(), &RuleUnwindDecoder::new(alphabet));
    }

    #[test]
    fn test_matches_expansion() {
        type T = u32;

        let alphabet = common_test_alphabet::<T>();
        let encoder = RulePassEncoder::new(alphabet.clone());
        let unwind = RuleUnwindDecoder::new(alphabet.clone());
        let expand = ExpansionDecoder::new(alphabet.clone());

        let symbols = encoder.encode(COMMON_TEST_CORPUS.as_bytes());
        assert_eq!(
            unwind.try_decode(&symbols).unwrap(),
            expand.try_decode(&symbols).unwrap()
        );

        // Every composite alone.
        for rule in alphabet.rules() {
            assert_eq!(
                unwind.try_decode(&[rule.symbol]).unwrap(),
                expand.try_decode(&[rule.symbol]).unwrap(),
                "rule: {rule}"
            );
        }
    }
}
