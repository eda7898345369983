//! # FlatMap
//!
//! A small-size-optimized associative container backed by flat array storage
//! and precomputed hash probing. Entries live inline (no heap allocation) up to
//! a configurable capacity `N`, then spill to the heap, up to a hard ceiling of
//! [`MAX_CAPACITY`] entries.
//!
//! ## Performance Characteristics
//!
//! - Optimized for small collections (a handful to a few hundred entries)
//! - Zero heap allocations while at or under the inline capacity `N`
//! - Better cache locality than tree or bucket structures for small data sets
//! - O(N) worst-case lookup and removal (acceptable for small N)
//! - Lookups scan a flat array of precomputed hashes first, so expensive key
//!   comparisons (e.g. string equality) only run on hash matches
//!
//! ## Usage Warning
//!
//! Removal uses swap-and-pop: the removed entry is swapped with the last entry
//! before the storage shrinks, so relative order is **not** preserved across
//! removals. This is deliberate; it keeps removal O(1) after the scan. Until
//! the first removal (or [`FlatMap::move_front`]), iteration order is
//! insertion order.
//!
//! Inserting past [`MAX_CAPACITY`] fails with [`FlatMapError::CapacityExceeded`]
//! rather than silently dropping data. The ceiling is a design invariant: this
//! structure is for small collections, and a caller blowing past it should hear
//! about it.
//!
//! ## Example
//!
//! ```rust
//! use flatmap::FlatMap;
//!
//! // Inline capacity of 8 entries; spills to the heap past that.
//! let mut map: FlatMap<String, i32, 8> = FlatMap::new();
//!
//! map.insert("one".to_string(), 1).unwrap();
//! map.insert("two".to_string(), 2).unwrap();
//!
//! assert_eq!(map.get(&"one".to_string()), Some(&1));
//! assert_eq!(map.len(), 2);
//! ```

use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

use smallvec::SmallVec;
use thiserror::Error;

/// Hard ceiling on the number of entries a [`FlatMap`] will hold.
///
/// The linear-scan design only makes sense for small collections; the ceiling
/// keeps worst-case latency and memory use bounded and predictable. Insertions
/// that would grow the map past this limit fail with
/// [`FlatMapError::CapacityExceeded`].
pub const MAX_CAPACITY: usize = 256;

/// Error type for [`FlatMap`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FlatMapError {
    /// The map already holds [`MAX_CAPACITY`] entries and cannot accept more.
    /// Remove entries first, or use a container without a ceiling.
    #[error("flat map capacity exceeded (maximum {} entries)", MAX_CAPACITY)]
    CapacityExceeded,
}

/// Hash functor over keys of type `K`.
///
/// Implementations must be consistent with the [`KeyEqual`] functor used
/// alongside them: keys that compare equal must hash equal. The map stores one
/// precomputed hash per entry and scans those before running key equality, so
/// a poor hash degrades search to plain linear comparison but never breaks
/// correctness.
pub trait KeyHash<K> {
    /// Hash a key to a 64-bit value.
    fn hash_key(&self, key: &K) -> u64;
}

/// Equality functor over keys of type `K`.
pub trait KeyEqual<K> {
    /// Return true when the two keys are equal.
    fn eq_key(&self, a: &K, b: &K) -> bool;
}

/// Default hash functor: delegates to the key's [`Hash`] implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdHash;

impl<K: Hash> KeyHash<K> for StdHash {
    fn hash_key(&self, key: &K) -> u64 {
        let mut state = DefaultHasher::new();
        key.hash(&mut state);
        state.finish()
    }
}

/// Default equality functor: delegates to the key's [`PartialEq`]
/// implementation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StdEqual;

impl<K: PartialEq> KeyEqual<K> for StdEqual {
    fn eq_key(&self, a: &K, b: &K) -> bool {
        a == b
    }
}

/// Identity hash functor for integer keys: the key's own value is its hash.
///
/// Useful when keys are small integers that are already well distributed, so
/// the hash scan is as cheap as the integer compare it replaces.
///
/// # Examples
///
/// ```rust
/// use flatmap::{FlatMap, IdentityHash};
///
/// let mut map: FlatMap<u32, &str, 8, IdentityHash> = FlatMap::new();
/// map.insert(1, "a").unwrap();
/// assert_eq!(map.get(&1), Some(&"a"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityHash;

macro_rules! impl_identity_hash {
    ($($int:ty),* $(,)?) => {
        $(
            impl KeyHash<$int> for IdentityHash {
                fn hash_key(&self, key: &$int) -> u64 {
                    *key as u64
                }
            }
        )*
    };
}

impl_identity_hash!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

/// A small-size-optimized map with flat storage and precomputed hash probing.
///
/// `FlatMap` is designed as an alternative to `HashMap` for cases where:
/// - Collection size is small (bounded by [`MAX_CAPACITY`])
/// - Heap allocations should be avoided for the common small case
/// - Cache locality matters more than asymptotic lookup complexity
///
/// Entries and their precomputed hashes are kept in two parallel flat arrays,
/// inline up to `N` entries and heap-spilled beyond that. Search scans the
/// hash array first (cheap integer compares) and only runs key equality on
/// hash matches.
///
/// Type Parameters:
/// - `K`: Key type
/// - `V`: Value type
/// - `N`: Inline capacity - entries held without heap allocation (default 16;
///   must not exceed [`MAX_CAPACITY`])
/// - `H`: Hash functor, see [`KeyHash`] (default [`StdHash`])
/// - `E`: Equality functor, see [`KeyEqual`] (default [`StdEqual`])
#[derive(Clone)]
pub struct FlatMap<K, V, const N: usize = 16, H = StdHash, E = StdEqual> {
    // Parallel arrays: hashes[i] is always the precomputed hash of entries[i].0.
    entries: SmallVec<[(K, V); N]>,
    hashes: SmallVec<[u64; N]>,
    hasher: H,
    key_eq: E,
}

impl<K, V, const N: usize, H, E> FlatMap<K, V, N, H, E> {
    /// Creates a new empty map using default-constructed functors.
    ///
    /// Time Complexity: O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let map = FlatMap::<i32, String, 16>::new();
    /// assert!(map.is_empty());
    /// assert_eq!(map.inline_capacity(), 16);
    /// ```
    pub fn new() -> Self
    where
        H: Default,
        E: Default,
    {
        Self::with_functors(H::default(), E::default())
    }

    /// Creates a new empty map with explicit hash and equality functor
    /// instances. Use this when the functors carry state, such as a seeded
    /// hasher or a case-folding comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::{FlatMap, IdentityHash, StdEqual};
    ///
    /// let mut map: FlatMap<u64, &str, 4, IdentityHash, StdEqual> =
    ///     FlatMap::with_functors(IdentityHash, StdEqual);
    /// map.insert(7, "seven").unwrap();
    /// assert_eq!(map.get(&7), Some(&"seven"));
    /// ```
    pub fn with_functors(hasher: H, key_eq: E) -> Self {
        const { assert!(N <= MAX_CAPACITY, "inline capacity exceeds MAX_CAPACITY") };
        Self {
            entries: SmallVec::new(),
            hashes: SmallVec::new(),
            hasher,
            key_eq,
        }
    }

    /// Returns the number of entries currently in the map.
    ///
    /// Time Complexity: O(1)
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the map is empty.
    ///
    /// Time Complexity: O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<i32, &str, 8>::new();
    /// assert!(map.is_empty());
    ///
    /// map.insert(1, "one").unwrap();
    /// assert!(!map.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of entries the map can hold before its backing
    /// storage grows again. At least `N` from construction.
    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Returns the inline capacity `N`: the number of entries held without
    /// heap allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let map = FlatMap::<u32, u32, 32>::new();
    /// assert_eq!(map.inline_capacity(), 32);
    /// ```
    pub fn inline_capacity(&self) -> usize {
        N
    }

    /// Removes all entries from the map. Keeps the backing storage.
    ///
    /// Time Complexity: O(len)
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<i32, &str, 8>::new();
    /// map.insert(1, "one").unwrap();
    /// map.clear();
    /// assert!(map.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.entries.clear();
        self.hashes.clear();
    }

    /// Grows the backing storage so that `total` entries fit without further
    /// reallocation. `total` is clamped to [`MAX_CAPACITY`]; requests at or
    /// under the current length are no-ops. Never shrinks.
    pub fn reserve(&mut self, total: usize) {
        let total = total.min(MAX_CAPACITY);
        if total > self.entries.len() {
            let additional = total - self.entries.len();
            self.entries.reserve(additional);
            self.hashes.reserve(additional);
        }
    }

    /// Returns an iterator over the key-value pairs in storage order.
    ///
    /// Storage order is insertion order until a removal or a
    /// [`move_front`](FlatMap::move_front) reorders entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<&str, i32, 8>::new();
    /// map.insert("one", 1).unwrap();
    /// map.insert("two", 2).unwrap();
    ///
    /// let pairs: Vec<_> = map.iter().collect();
    /// assert_eq!(pairs, vec![(&"one", &1), (&"two", &2)]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Returns an iterator over the pairs with mutable references to the
    /// values, in storage order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&K, &mut V)> {
        self.entries.iter_mut().map(|(key, value)| (&*key, value))
    }

    /// Returns an iterator over the keys in storage order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in storage order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Returns an iterator over mutable references to the values, in storage
    /// order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> {
        self.entries.iter_mut().map(|(_, value)| value)
    }

    /// Returns the key-value pair at the given storage index, if in bounds.
    ///
    /// Indices are stable until a removal or
    /// [`move_front`](FlatMap::move_front) reorders entries.
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.entries.get(index).map(|(key, value)| (key, value))
    }
}

impl<K, V, const N: usize, H, E> FlatMap<K, V, N, H, E>
where
    H: KeyHash<K>,
    E: KeyEqual<K>,
{
    /// Inserts a key-value pair into the map.
    ///
    /// If the key is already present, nothing is mutated: the existing value
    /// stays as it was (first write wins) and the entry's storage index is
    /// returned with `inserted = false`. Otherwise the pair is appended and
    /// its precomputed hash recorded, which may grow the backing storage once
    /// the inline capacity is exceeded.
    ///
    /// Time Complexity: O(len) for the duplicate scan
    ///
    /// # Returns
    /// - `Ok((inserted, index))`: whether a new entry was appended, and its
    ///   storage index
    /// - `Err(FlatMapError::CapacityExceeded)` if the key is absent and the
    ///   map already holds [`MAX_CAPACITY`] entries; the map is unchanged
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<&str, i32, 8>::new();
    ///
    /// assert_eq!(map.insert("one", 1), Ok((true, 0)));
    /// assert_eq!(map.insert("two", 2), Ok((true, 1)));
    ///
    /// // Duplicate key: no mutation, existing index reported.
    /// assert_eq!(map.insert("one", 100), Ok((false, 0)));
    /// assert_eq!(map.get(&"one"), Some(&1));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Result<(bool, usize), FlatMapError> {
        let hash = self.hasher.hash_key(&key);
        if let Some(index) = self.scan(hash, &key) {
            return Ok((false, index));
        }
        self.push_new(hash, key, value)?;
        Ok((true, self.entries.len() - 1))
    }

    /// Inserts a key with a lazily constructed value.
    ///
    /// Follows single-insert semantics, but `make` only runs when the key is
    /// actually absent; on a duplicate the constructor is never invoked.
    /// Useful when building the value is expensive.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<u32, Vec<u8>, 8>::new();
    /// map.insert_with(1, || vec![0; 64]).unwrap();
    ///
    /// // Key 1 exists: the closure is not called, the value is untouched.
    /// map.insert_with(1, || unreachable!()).unwrap();
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert_with<F>(&mut self, key: K, make: F) -> Result<(bool, usize), FlatMapError>
    where
        F: FnOnce() -> V,
    {
        let hash = self.hasher.hash_key(&key);
        if let Some(index) = self.scan(hash, &key) {
            return Ok((false, index));
        }
        self.push_new(hash, key, make())?;
        Ok((true, self.entries.len() - 1))
    }

    /// Bulk-inserts the pairs from an iterator.
    ///
    /// Storage is reserved up front from the iterator's `size_hint` lower
    /// bound to avoid repeated growth. Each pair then goes through single
    /// [`insert`](FlatMap::insert) semantics: duplicates are silently
    /// skipped. If the ceiling is hit partway through, the pairs inserted so
    /// far are retained and the error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<i32, &str, 8>::new();
    /// map.try_extend([(1, "one"), (2, "two"), (1, "dup")]).unwrap();
    ///
    /// assert_eq!(map.len(), 2);
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// ```
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), FlatMapError>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if lower > 0 {
            self.reserve(self.entries.len().saturating_add(lower));
        }
        for (key, value) in iter {
            self.insert(key, value)?;
        }
        Ok(())
    }

    /// Creates a map from an iterator of pairs, with default functors.
    ///
    /// Duplicate keys keep their first value, per
    /// [`insert`](FlatMap::insert) semantics.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let map = FlatMap::<i32, &str, 8>::try_from_iter([(1, "one"), (2, "two")]).unwrap();
    /// assert_eq!(map.len(), 2);
    /// ```
    pub fn try_from_iter<I>(iter: I) -> Result<Self, FlatMapError>
    where
        I: IntoIterator<Item = (K, V)>,
        H: Default,
        E: Default,
    {
        let mut map = Self::new();
        map.try_extend(iter)?;
        Ok(map)
    }

    /// Retrieves a reference to the value associated with the given key.
    ///
    /// Time Complexity: O(len); hash compares first, key equality only on
    /// hash matches
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<&str, i32, 8>::new();
    /// map.insert("apple", 42).unwrap();
    ///
    /// assert_eq!(map.get(&"apple"), Some(&42));
    /// assert_eq!(map.get(&"banana"), None);
    /// ```
    pub fn get(&self, key: &K) -> Option<&V> {
        self.get_index_of(key).map(|index| &self.entries[index].1)
    }

    /// Retrieves a mutable reference to the value associated with the given
    /// key.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let index = self.get_index_of(key)?;
        Some(&mut self.entries[index].1)
    }

    /// Returns the storage index of the entry for `key`, or `None` if absent.
    ///
    /// The search scans the precomputed hash array first (cheap integer
    /// comparisons) and verifies true key equality only on hash matches, so
    /// expensive key comparisons never run against non-matching entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<&str, i32, 8>::new();
    /// map.insert("a", 1).unwrap();
    /// map.insert("b", 2).unwrap();
    ///
    /// assert_eq!(map.get_index_of(&"b"), Some(1));
    /// assert_eq!(map.get_index_of(&"z"), None);
    /// ```
    pub fn get_index_of(&self, key: &K) -> Option<usize> {
        self.scan(self.hasher.hash_key(key), key)
    }

    /// Read-only lookup with a fallback: returns a copy of the stored value,
    /// or `fallback` if the key is absent. Never mutates the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<&str, i32, 8>::new();
    /// map.insert("present", 5).unwrap();
    ///
    /// assert_eq!(map.value_or(&"present", -1), 5);
    /// assert_eq!(map.value_or(&"absent", -1), -1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn value_or(&self, key: &K, fallback: V) -> V
    where
        V: Clone,
    {
        self.get(key).cloned().unwrap_or(fallback)
    }

    /// Returns a mutable reference to the value for `key`, inserting a
    /// default-constructed value first if the key is absent.
    ///
    /// The insertion is subject to the same [`MAX_CAPACITY`] ceiling as
    /// [`insert`](FlatMap::insert); lookups on present keys never fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<&str, i32, 8>::new();
    ///
    /// *map.get_or_insert_default("hits").unwrap() += 1;
    /// *map.get_or_insert_default("hits").unwrap() += 1;
    ///
    /// assert_eq!(map.get(&"hits"), Some(&2));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> Result<&mut V, FlatMapError>
    where
        V: Default,
    {
        let hash = self.hasher.hash_key(&key);
        let index = match self.scan(hash, &key) {
            Some(index) => index,
            None => {
                self.push_new(hash, key, V::default())?;
                self.entries.len() - 1
            }
        };
        Ok(&mut self.entries[index].1)
    }

    /// Removes a key from the map, returning the associated value if found.
    ///
    /// Removal swaps the matching entry (and its hash) with the last entry,
    /// then pops the storage: O(1) after the scan, at the cost of not
    /// preserving relative order. The entry that occupied the last slot ends
    /// up at the removed entry's former index.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<i32, &str, 8>::new();
    /// map.insert(1, "one").unwrap();
    /// map.insert(2, "two").unwrap();
    /// map.insert(3, "three").unwrap();
    ///
    /// assert_eq!(map.remove(&2), Some("two"));
    /// assert_eq!(map.remove(&2), None);
    ///
    /// // The former last entry now sits where key 2 used to be.
    /// assert_eq!(map.get_index(1), Some((&3, &"three")));
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.get_index_of(key)?;
        self.hashes.swap_remove(index);
        Some(self.entries.swap_remove(index).1)
    }

    /// Moves the entry for `key` to the first storage slot by a single swap
    /// with the current front entry. Returns `true` if the key was found.
    ///
    /// This is an O(1) reorder (after the scan), distinct from removal and
    /// reinsertion. It is useful for recency ordering: promote on access and
    /// the front of the iteration is always the most recently promoted entry.
    /// Missing keys and the empty map are no-ops.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<i32, &str, 8>::new();
    /// map.insert(1, "one").unwrap();
    /// map.insert(2, "two").unwrap();
    /// map.insert(3, "three").unwrap();
    ///
    /// assert!(map.move_front(&3));
    ///
    /// let keys: Vec<_> = map.keys().copied().collect();
    /// assert_eq!(keys, vec![3, 2, 1]);
    /// ```
    pub fn move_front(&mut self, key: &K) -> bool {
        match self.get_index_of(key) {
            Some(index) => {
                self.entries.swap(0, index);
                self.hashes.swap(0, index);
                true
            }
            None => false,
        }
    }

    /// Checks whether the map contains the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let mut map = FlatMap::<&str, i32, 8>::new();
    /// map.insert("here", 1).unwrap();
    ///
    /// assert!(map.contains_key(&"here"));
    /// assert!(!map.contains_key(&"gone"));
    /// ```
    pub fn contains_key(&self, key: &K) -> bool {
        self.get_index_of(key).is_some()
    }

    /// Merges another map into this one. Entries whose keys are already
    /// present in `self` are discarded (first write wins: the receiver's
    /// value is kept); the rest are moved in and re-hashed with the
    /// receiver's own hash functor.
    ///
    /// The merge is all-or-nothing with respect to the capacity ceiling: the
    /// genuinely new keys are counted first, and if the result would exceed
    /// [`MAX_CAPACITY`] the receiver is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatmap::FlatMap;
    ///
    /// let mut a = FlatMap::<i32, &str, 8>::new();
    /// a.insert(1, "a").unwrap();
    /// a.insert(2, "b").unwrap();
    ///
    /// let mut b = FlatMap::<i32, &str, 8>::new();
    /// b.insert(2, "B").unwrap();
    /// b.insert(3, "c").unwrap();
    ///
    /// a.merge(b).unwrap();
    ///
    /// assert_eq!(a.len(), 3);
    /// assert_eq!(a.get(&2), Some(&"b")); // receiver's value kept
    /// assert_eq!(a.get(&3), Some(&"c"));
    /// ```
    pub fn merge(&mut self, other: Self) -> Result<(), FlatMapError> {
        let incoming = other
            .iter()
            .filter(|(key, _)| !self.contains_key(key))
            .count();
        if self.entries.len() + incoming > MAX_CAPACITY {
            return Err(FlatMapError::CapacityExceeded);
        }
        self.reserve(self.entries.len() + incoming);
        for (key, value) in other {
            let hash = self.hasher.hash_key(&key);
            if self.scan(hash, &key).is_none() {
                self.entries.push((key, value));
                self.hashes.push(hash);
            }
        }
        Ok(())
    }

    // Linear search over the precomputed hash array; key equality runs only
    // on hash matches.
    fn scan(&self, hash: u64, key: &K) -> Option<usize> {
        for (index, &stored) in self.hashes.iter().enumerate() {
            if stored == hash && self.key_eq.eq_key(&self.entries[index].0, key) {
                return Some(index);
            }
        }
        None
    }

    // Appends a new entry and its hash, enforcing the entry ceiling. Callers
    // have already established that the key is absent.
    fn push_new(&mut self, hash: u64, key: K, value: V) -> Result<(), FlatMapError> {
        if self.entries.len() == MAX_CAPACITY {
            return Err(FlatMapError::CapacityExceeded);
        }
        self.entries.push((key, value));
        self.hashes.push(hash);
        Ok(())
    }
}

impl<K, V, const N: usize, H: Default, E: Default> Default for FlatMap<K, V, N, H, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug, const N: usize, H, E> fmt::Debug for FlatMap<K, V, N, H, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V, const N: usize, H, E> IntoIterator for FlatMap<K, V, N, H, E> {
    type Item = (K, V);
    type IntoIter = smallvec::IntoIter<[(K, V); N]>;

    /// Consumes the map, yielding owned key-value pairs in storage order.
    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
