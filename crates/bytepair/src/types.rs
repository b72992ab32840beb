//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

use crate::errors::{BPResult, BytePairError};

/// The number of primitive (single byte) symbols.
pub const PRIMITIVE_COUNT: usize = 256;

/// A type that can be used as a symbol id.
///
/// These are constrained to be unsigned primitive integers.
/// Ids ``0..=255`` are primitive bytes; larger ids are composite symbols.
pub trait SymbolType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + From<u8>
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> SymbolType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + From<u8>
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

/// A pair of adjacent symbols ``(left, right)``.
pub type Pair<T> = (T, T);

/// Static check that a type is `Send`.
pub fn static_is_send_check<S: Send>(_: &S) {}

/// Static check that a type is `Sync`.
pub fn static_is_sync_check<S: Sync>(_: &S) {}

/// Static check that a type is `Send` and `Sync`.
pub fn static_is_send_sync_check<S: Send + Sync>(v: &S) {
    static_is_send_check(v);
    static_is_sync_check(v);
}

/// Is this symbol a primitive byte?
#[inline(always)]
pub fn is_primitive<T: SymbolType>(symbol: T) -> bool {
    symbol.to_usize().is_some_and(|s| s < PRIMITIVE_COUNT)
}

/// Convert a symbol to its byte, if it is primitive.
#[inline(always)]
pub fn symbol_to_byte<T: SymbolType>(symbol: T) -> Option<u8> {
    symbol.to_u8()
}

/// Convert a byte to its primitive symbol.
#[inline(always)]
pub fn byte_to_symbol<T: SymbolType>(byte: u8) -> T {
    <T as From<u8>>::from(byte)
}

/// Widen a symbol for error reporting and persistence.
#[inline(always)]
pub fn symbol_to_u64<T: SymbolType>(symbol: T) -> u64 {
    symbol.to_u64().unwrap_or(u64::MAX)
}

/// Allocate the composite symbol for the merge rule at `rule_index`.
///
/// The first composite symbol is ``256``.
pub fn composite_symbol<T: SymbolType>(rule_index: usize) -> BPResult<T> {
    let id = PRIMITIVE_COUNT + rule_index;
    T::from_usize(id).ok_or(BytePairError::SymbolOverflow { count: id })
}

/// Translate a symbol-typed sequence of byte values into primitive symbols.
///
/// ## Returns
/// The copied sequence; or [`BytePairError::InvalidByteValue`] for the first
/// value outside of ``0..=255``.
pub fn validate_byte_symbols<T: SymbolType>(values: &[T]) -> BPResult<Vec<T>> {
    values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if is_primitive(value) {
                Ok(value)
            } else {
                Err(BytePairError::InvalidByteValue {
                    value: symbol_to_u64(value),
                    index,
                })
            }
        })
        .collect()
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type BPHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type BPHashSet<V> = ahash::AHashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> BPHashMap<K, V> {
            BPHashMap::with_capacity(capacity)
        }

        /// Create a new hash set with the given capacity.
        pub fn hash_set_with_capacity<V>(capacity: usize) -> BPHashSet<V> {
            BPHashSet::with_capacity(capacity)
        }

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type BPHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type BPHashSet<V> = foldhash::HashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> BPHashMap<K, V> {
            foldhash::HashMapExt::with_capacity(capacity)
        }

        /// Create a new hash set with the given capacity.
        pub fn hash_set_with_capacity<V>(capacity: usize) -> BPHashSet<V> {
            foldhash::HashSetExt::with_capacity(capacity)
        }

    } else {
        /// Type Alias for hash maps in this crate.
        pub type BPHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Type Alias for hash sets in this crate.
        pub type BPHashSet<V> = std::collections::HashSet<V>;

        /// Create a new hash map with the given capacity.
        pub fn hash_map_with_capacity<K, V>(capacity: usize) -> BPHashMap<K, V> {
            BPHashMap::with_capacity(capacity)
        }

        /// Create a new hash set with the given capacity.
        pub fn hash_set_with_capacity<V>(capacity: usize) -> BPHashSet<V> {
            BPHashSet::with_capacity(capacity)
        }
    }
}
