// Copyright 2026 Logan Magee
//
// SPDX-License-Identifier: LicenseRef-Proprietary

use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
    mem,
};

/// A key/value map resolving collisions by separate chaining.
///
/// The bucket count is fixed at construction and the map never rehashes;
/// every bucket is a vector of key/value pairs scanned linearly. Lookups
/// and removals stay *O*(1) as long as the number of entries remains small
/// relative to the bucket count.
///
/// # Examples
///
/// ```
/// use lookup::ChainMap;
///
/// let mut map = ChainMap::new(5);
/// map.insert("apple", 10);
/// map.insert("banana", 20);
///
/// assert_eq!(map.get(&"apple"), Some(&10));
/// assert!(map.remove(&"apple"));
/// assert_eq!(map.get(&"apple"), None);
/// ```
#[derive(Clone, Debug)]
pub struct ChainMap<K, V> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
}

impl<K, V> ChainMap<K, V>
where
    K: Hash + Eq,
{
    /// Creates a new `ChainMap` with `bucket_count` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `bucket_count` is 0.
    #[must_use]
    pub fn new(bucket_count: usize) -> Self {
        assert_ne!(bucket_count, 0, "bucket count must be nonzero");

        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Vec::new);

        Self { buckets, len: 0 }
    }

    /// Inserts a key/value pair, returning the previous value if the key was
    /// already present.
    ///
    /// An existing key's value is overwritten in place; the pair keeps its
    /// position within its chain.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);

        for pair in &mut self.buckets[index] {
            if pair.0 == key {
                return Some(mem::replace(&mut pair.1, value));
            }
        }

        self.buckets[index].push((key, value));
        self.len += 1;

        None
    }

    /// Returns a reference to the value stored for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.bucket_index(key);

        self.buckets[index]
            .iter()
            .find(|pair| pair.0 == *key)
            .map(|pair| &pair.1)
    }

    /// Removes the entry stored for `key`, returning `true` if one existed.
    pub fn remove(&mut self, key: &K) -> bool {
        let index = self.bucket_index(key);

        match self.buckets[index].iter().position(|pair| pair.0 == *key) {
            Some(position) => {
                self.buckets[index].remove(position);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Reduces a key's hash to a bucket index
    fn bucket_index(&self, key: &K) -> usize {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);

        (hasher.finish() % self.buckets.len() as u64) as usize
    }
}
