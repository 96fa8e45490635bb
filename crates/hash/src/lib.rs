//! In-memory hash table using separate chaining.
//!
//! Provides O(1) average-case lookups for exact keys. New keys are linked at
//! the head of their bucket chain; the table doubles once the load factor is
//! exceeded and never shrinks.

use common::{CatalogError, CatalogResult, Config};
use std::borrow::Borrow;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};
use tracing::debug;

type Link<K, V> = Option<Box<HashNode<K, V>>>;

/// A single entry in a bucket chain.
struct HashNode<K, V> {
    key: K,
    value: V,
    /// Next entry in the same bucket.
    next: Link<K, V>,
}

/// Generic chaining hash table.
///
/// Keys are unique: `put` on a present key replaces the value in place.
pub struct HashTable<K, V> {
    /// Chain heads, one per bucket.
    buckets: Vec<Link<K, V>>,
    /// Number of stored entries.
    len: usize,
    load_factor: f64,
}

impl<K, V> HashTable<K, V>
where
    K: Hash + Eq,
{
    /// Create an empty table with the default capacity (16) and load factor (0.75).
    pub fn new() -> Self {
        Self::from_parts(
            common::DEFAULT_INITIAL_CAPACITY,
            common::DEFAULT_LOAD_FACTOR,
        )
    }

    /// Create an empty table with at least one bucket.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_parts(capacity.max(1), common::DEFAULT_LOAD_FACTOR)
    }

    /// Create an empty table sized by `config`.
    pub fn with_config(config: &Config) -> CatalogResult<Self> {
        config.validate()?;
        Ok(Self::from_parts(
            config.initial_capacity,
            config.load_factor,
        ))
    }

    fn from_parts(capacity: usize, load_factor: f64) -> Self {
        Self {
            buckets: empty_buckets(capacity),
            len: 0,
            load_factor,
        }
    }

    /// Insert or update a key, returning the previous value if the key was present.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let idx = self.bucket_index(&key);

        let mut cursor = self.buckets[idx].as_deref_mut();
        while let Some(node) = cursor {
            if node.key == key {
                return Some(std::mem::replace(&mut node.value, value));
            }
            cursor = node.next.as_deref_mut();
        }

        let head = self.buckets[idx].take();
        self.buckets[idx] = Some(Box::new(HashNode {
            key,
            value,
            next: head,
        }));
        self.len += 1;

        if self.len as f64 / self.capacity() as f64 > self.load_factor {
            self.resize();
        }
        None
    }

    /// Look up a key that must be present.
    pub fn get<Q>(&self, key: &Q) -> CatalogResult<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + fmt::Debug + ?Sized,
    {
        self.find(key)
            .ok_or_else(|| CatalogError::NotFound(format!("key {key:?}")))
    }

    /// Look up a key, returning `None` when absent.
    pub fn find<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut cursor = self.buckets[self.bucket_index(key)].as_deref();
        while let Some(node) = cursor {
            if key_matches(&node.key, key) {
                return Some(&node.value);
            }
            cursor = node.next.as_deref();
        }
        None
    }

    /// Mutable access to the value stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        let mut cursor = self.buckets[idx].as_deref_mut();
        while let Some(node) = cursor {
            if key_matches(&node.key, key) {
                return Some(&mut node.value);
            }
            cursor = node.next.as_deref_mut();
        }
        None
    }

    /// Returns true if `key` is stored.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Unlink `key` from its chain, returning its value if it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let idx = self.bucket_index(key);
        let mut link = &mut self.buckets[idx];
        while link
            .as_ref()
            .is_some_and(|node| !key_matches(&node.key, key))
        {
            link = &mut link.as_mut()?.next;
        }

        let mut removed = link.take()?;
        *link = removed.next.take();
        self.len -= 1;
        Some(removed.value)
    }

    /// Double the bucket array and relink every node into its new bucket.
    ///
    /// Old buckets are drained in index order and each chain head-to-tail,
    /// with every node pushed onto the head of its new chain.
    fn resize(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity * 2;
        let old_buckets = std::mem::replace(&mut self.buckets, empty_buckets(new_capacity));

        for mut chain in old_buckets {
            while let Some(mut node) = chain {
                chain = node.next.take();
                let idx = bucket_for(&node.key, new_capacity);
                node.next = self.buckets[idx].take();
                self.buckets[idx] = Some(node);
            }
        }

        debug!(
            old_capacity,
            new_capacity,
            len = self.len,
            "hash table resized"
        );
    }

    fn bucket_index<Q: Hash + ?Sized>(&self, key: &Q) -> usize {
        bucket_for(key, self.capacity())
    }
}

impl<K, V> HashTable<K, V> {
    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no entries are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Current number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Configured resize threshold.
    pub fn load_factor(&self) -> f64 {
        self.load_factor
    }

    /// Remove every entry. Capacity is kept.
    pub fn clear(&mut self) {
        // Unlink chains iteratively so a long chain cannot overflow the stack.
        for bucket in &mut self.buckets {
            let mut chain = bucket.take();
            while let Some(mut node) = chain {
                chain = node.next.take();
            }
        }
        self.len = 0;
    }

    /// Iterate over `(key, value)` pairs.
    ///
    /// Buckets are visited in index order and each chain head-to-tail. The
    /// order is an artifact of hashing and not something to rely on.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            current: None,
            remaining: self.len,
        }
    }

    /// Iterate over stored keys.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    /// Iterate over stored values.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }
}

impl<K, V> Default for HashTable<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for HashTable<K, V>
where
    K: fmt::Debug,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> Drop for HashTable<K, V> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<'a, K, V> IntoIterator for &'a HashTable<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`HashTable`].
pub struct Iter<'a, K, V> {
    buckets: std::slice::Iter<'a, Link<K, V>>,
    current: Option<&'a HashNode<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(node) = self.current {
                self.current = node.next.as_deref();
                self.remaining -= 1;
                return Some((&node.key, &node.value));
            }
            self.current = self.buckets.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

fn key_matches<K, Q>(stored: &K, key: &Q) -> bool
where
    K: Borrow<Q>,
    Q: Eq + ?Sized,
{
    <K as Borrow<Q>>::borrow(stored) == key
}

fn empty_buckets<K, V>(capacity: usize) -> Vec<Link<K, V>> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

/// Map a key onto a bucket using an unsigned modulo of its 64-bit hash.
fn bucket_for<Q: Hash + ?Sized>(key: &Q, capacity: usize) -> usize {
    (hash_key(key) % capacity as u64) as usize
}

/// Hash a key to a u64.
fn hash_key<Q: Hash + ?Sized>(key: &Q) -> u64 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests;
