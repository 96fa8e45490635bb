use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;
use std::collections::HashMap;

#[test]
fn create_empty_table() {
    let table: HashTable<String, i32> = HashTable::new();
    assert_eq!(table.capacity(), 16);
    assert_eq!(table.len(), 0);
    assert!(table.is_empty());
    assert_eq!(table.load_factor(), 0.75);
}

#[test]
fn put_and_get_single_key() {
    let mut table = HashTable::new();
    assert_eq!(table.put("key1".to_string(), 100), None);

    assert_eq!(table.get("key1"), Ok(&100));
    assert_eq!(table.len(), 1);
}

#[test]
fn get_missing_key_is_not_found() {
    let table: HashTable<String, i32> = HashTable::new();
    let err = table.get("nonexistent").unwrap_err();
    assert!(matches!(err, CatalogError::NotFound(_)));
    assert!(err.to_string().contains("nonexistent"));
    assert_eq!(table.find("nonexistent"), None);
}

#[test]
fn put_existing_key_updates_in_place() {
    let mut table = HashTable::new();
    table.put("update".to_string(), 1);

    assert_eq!(table.put("update".to_string(), 999), Some(1));
    assert_eq!(table.get("update"), Ok(&999));
    assert_eq!(table.len(), 1);
}

#[test]
fn contains_reports_presence() {
    let mut table = HashTable::new();
    table.put("test".to_string(), 42);

    assert!(table.contains("test"));
    assert!(!table.contains("missing"));
}

#[test]
fn remove_existing_key() {
    let mut table = HashTable::new();
    table.put("remove_me".to_string(), 123);

    assert_eq!(table.remove("remove_me"), Some(123));
    assert!(!table.contains("remove_me"));
    assert_eq!(table.len(), 0);
}

#[test]
fn remove_nonexistent_returns_none() {
    let mut table: HashTable<i32, i32> = HashTable::new();
    table.put(1, 1);
    assert_eq!(table.remove(&2), None);
    assert_eq!(table.len(), 1);
}

/// Key whose hash is constant, so every instance shares one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Collide(u32);

impl Hash for Collide {
    fn hash<H: Hasher>(&self, state: &mut H) {
        0u8.hash(state);
    }
}

#[test]
fn remove_from_middle_and_tail_of_chain() {
    let mut table = HashTable::new();
    for i in 1..=4 {
        table.put(Collide(i), i);
    }
    assert_eq!(table.len(), 4);

    for key in [2, 1, 4, 3] {
        assert_eq!(
            table.remove(&Collide(key)),
            Some(key),
            "key {key} not removed"
        );
        assert!(!table.contains(&Collide(key)));
    }
    assert!(table.is_empty());
}

#[test]
fn new_keys_land_at_chain_head() {
    let mut table = HashTable::new();
    table.put(Collide(1), 'a');
    table.put(Collide(2), 'b');
    table.put(Collide(3), 'c');
    assert_eq!(
        table.values().copied().collect::<Vec<_>>(),
        vec!['c', 'b', 'a']
    );

    // An update keeps the node where it is.
    table.put(Collide(1), 'z');
    assert_eq!(
        table.values().copied().collect::<Vec<_>>(),
        vec!['c', 'b', 'z']
    );
}

#[test]
fn resize_preserves_colliding_chain() {
    let mut table = HashTable::new();
    for i in 0..40 {
        table.put(Collide(i), i);
    }
    assert_eq!(table.capacity(), 64);
    for i in 0..40 {
        assert_eq!(table.get(&Collide(i)), Ok(&i));
    }
}

#[test]
fn thirteen_keys_resize_once_to_32() {
    let mut table = HashTable::new();
    for i in 0..12 {
        table.put(i, i * 10);
    }
    // 12 / 16 == 0.75 does not exceed the threshold.
    assert_eq!(table.capacity(), 16);

    table.put(12, 120);
    assert_eq!(table.capacity(), 32);
    assert_eq!(table.len(), 13);

    for i in 0..13 {
        assert_eq!(table.get(&i), Ok(&(i * 10)), "key {i} lost in resize");
    }
}

#[test]
fn updates_never_trigger_resize() {
    let mut table = HashTable::new();
    for i in 0..12 {
        table.put(i, 0);
    }
    for round in 1..5 {
        for i in 0..12 {
            table.put(i, round);
        }
    }
    assert_eq!(table.capacity(), 16);
    assert!(table.values().all(|v| *v == 4));
}

#[test]
fn many_inserts_keep_load_factor() {
    let mut table = HashTable::new();
    for i in 0..500u32 {
        table.put(i, i.to_string());
        assert!(table.len() as f64 / table.capacity() as f64 <= 0.75);
    }
    assert_eq!(table.capacity(), 1024);

    for i in 0..500u32 {
        assert_eq!(table.get(&i).unwrap(), &i.to_string());
    }
}

#[test]
fn table_never_shrinks() {
    let mut table = HashTable::new();
    for i in 0..100 {
        table.put(i, ());
    }
    let grown = table.capacity();
    for i in 0..100 {
        table.remove(&i);
    }
    assert!(table.is_empty());
    assert_eq!(table.capacity(), grown);
}

#[test]
fn clear_keeps_capacity() {
    let mut table = HashTable::new();
    for i in 0..20 {
        table.put(i, i);
    }
    table.clear();
    assert!(table.is_empty());
    assert_eq!(table.capacity(), 32);
    assert!(!table.contains(&3));
    assert_eq!(table.values().count(), 0);

    table.put(3, 30);
    assert_eq!(table.get(&3), Ok(&30));
}

#[test]
fn values_are_restartable() {
    let mut table = HashTable::new();
    table.put("a", 1);
    table.put("b", 2);
    table.put("c", 3);

    let mut values: Vec<_> = table.values().copied().collect();
    values.sort();
    assert_eq!(values, vec![1, 2, 3]);

    table.remove("b");
    let mut again: Vec<_> = table.values().copied().collect();
    again.sort();
    assert_eq!(again, vec![1, 3]);
    assert_eq!(table.iter().len(), 2);
}

#[test]
fn get_mut_edits_value() {
    let mut table = HashTable::new();
    table.put("genre".to_string(), vec![1]);
    table.get_mut("genre").unwrap().push(2);
    assert_eq!(table.get("genre"), Ok(&vec![1, 2]));
    assert!(table.get_mut("missing").is_none());
}

#[test]
fn with_config_rejects_bad_values() {
    let bad = Config::builder().initial_capacity(0).build();
    assert!(HashTable::<u8, u8>::with_config(&bad).is_err());

    let bad = Config::builder().load_factor(2.0).build();
    assert!(HashTable::<u8, u8>::with_config(&bad).is_err());
}

#[test]
fn extreme_hashes_stay_in_bounds() {
    let mut table = HashTable::with_capacity(3);
    for key in [i32::MIN, i32::MAX, -1, 0, 1] {
        table.put(key, key);
    }
    for key in [i32::MIN, i32::MAX, -1, 0, 1] {
        assert_eq!(table.get(&key), Ok(&key));
    }
}

#[test]
fn hash_key_is_deterministic() {
    assert_eq!(hash_key("go"), hash_key(&"go".to_string()));
    assert_ne!(hash_key(&1u32), hash_key(&2u32));
}

#[test]
fn long_chain_drops_cleanly() {
    let mut table = HashTable::new();
    for i in 0..10_000 {
        table.put(Collide(i), i);
    }
    assert_eq!(table.len(), 10_000);
    drop(table);
}

#[derive(Debug, Clone)]
enum Op {
    Put(u8, u16),
    Remove(u8),
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (any::<u8>(), any::<u16>()).prop_map(|(k, v)| Op::Put(k, v)),
        1 => any::<u8>().prop_map(Op::Remove),
    ]
}

proptest! {
    #[test]
    fn len_counts_distinct_keys_and_get_sees_last_put(
        pairs in prop::collection::vec((any::<u16>(), any::<i32>()), 0..300)
    ) {
        let mut table = HashTable::new();
        let mut model = HashMap::new();
        for (k, v) in pairs {
            table.put(k, v);
            model.insert(k, v);
        }
        prop_assert_eq!(table.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(table.get(k), Ok(v));
        }
    }

    #[test]
    fn mixed_operations_match_std_hashmap(ops in prop::collection::vec(arb_op(), 0..400)) {
        let mut table = HashTable::new();
        let mut model = HashMap::new();
        for op in ops {
            match op {
                Op::Put(k, v) => {
                    prop_assert_eq!(table.put(k, v), model.insert(k, v));
                }
                Op::Remove(k) => {
                    prop_assert_eq!(table.remove(&k), model.remove(&k));
                }
            }
            prop_assert!(table.len() as f64 / table.capacity() as f64 <= 0.75);
        }
        prop_assert_eq!(table.len(), model.len());
        for (k, v) in &model {
            prop_assert_eq!(table.find(k), Some(v));
        }
        prop_assert_eq!(table.values().count(), model.len());
    }
}
