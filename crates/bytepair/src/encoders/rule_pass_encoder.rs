//! # Rule Pass Encoder
//!
//! Applies each merge rule, in creation order, as a full pass.

use std::sync::Arc;

use crate::{
    encoders::SymbolEncoder,
    training::merge_pair_in_place,
    types::{SymbolType, byte_to_symbol},
    vocab::AlphabetMap,
};

/// A [`SymbolEncoder`] which replays the learned rules in order.
///
/// For each rule ``symbol := (left, right)``, the working sequence is
/// rewritten left to right; replacing non-overlapping occurrences.
/// This is the same rewrite the learner performed during training,
/// so encoding the training input reproduces the training output.
#[derive(Debug, Clone)]
pub struct RulePassEncoder<T: SymbolType> {
    alphabet: Arc<AlphabetMap<T>>,
}

impl<T: SymbolType> RulePassEncoder<T> {
    /// Create a new encoder.
    ///
    /// ## Arguments
    /// * `alphabet` - The learned alphabet.
    pub fn new(alphabet: Arc<AlphabetMap<T>>) -> Self {
        Self { alphabet }
    }
}

impl<T: SymbolType> SymbolEncoder<T> for RulePassEncoder<T> {
    fn alphabet(&self) -> &Arc<AlphabetMap<T>> {
        &self.alphabet
    }

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn encode_append(
        &self,
        bytes: &[u8],
        symbols: &mut Vec<T>,
    ) {
        let mut work: Vec<T> = bytes.iter().map(|&b| byte_to_symbol(b)).collect();

        for rule in self.alphabet.rules() {
            if work.len() < 2 {
                break;
            }
            merge_pair_in_place(&mut work, rule.pair(), rule.symbol);
        }

        symbols.append(&mut work);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoders::test_utils::{common_encoder_tests, common_test_alphabet};

    fn test_encoder<T: SymbolType>() {
        let alphabet = common_test_alphabet::<T>();
        let encoder = RulePassEncoder::new(alphabet.clone());
        common_encoder_tests(alphabet, &encoder);
    }

    #[test]
    fn test_encoder_u16() {
        test_encoder::<u16>();
    }

    #[test]
    fn test_encoder_u32() {
        test_encoder::<u32>();
    }

    #[test]
    fn test_rules_apply_in_creation_order() {
        type T = u32;

        // 256 := (a, a); 257 := (a, b)
        let alphabet = Arc::new(
            AlphabetMap::new(
                *b"ab",
                vec![
                    crate::vocab::MergeRule::new(256, 97, 97),
                    crate::vocab::MergeRule::new(257, 97, 98),
                ],
            )
            .unwrap(),
        );
        let encoder = RulePassEncoder::<T>::new(alphabet);

        // (a, a) claims the first two bytes before (a, b) is considered.
        assert_eq!(encoder.encode(b"aab"), vec![256, 98]);
        assert_eq!(encoder.encode(b"aaab"), vec![256, 257]);
        assert_eq!(encoder.encode(b"ababa"), vec![257, 257, 97]);
        assert_eq!(encoder.encode(b""), Vec::<T>::new());
    }
}
