use balgos::symtable::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::BTreeMap;

fn assert_matches(st: &BstTable, reference: &BTreeMap<i32, i32>) {
    let entries: Vec<(i32, i32)> = st.iter().collect();
    let expected: Vec<(i32, i32)> = reference.iter().map(|(&k, &v)| (k, v)).collect();
    assert_eq!(entries, expected);
    assert_eq!(st.size(), reference.len());
    assert_eq!(st.min_key(), reference.keys().next().copied());
    assert_eq!(st.max_key(), reference.keys().next_back().copied());
}

#[test]
fn test_small_table() {
    let mut st = BstTable::new();
    for (k, v) in [(3, 78), (6, 4), (2, 45), (1, 27), (2, 37), (8, 44)] {
        st.put(k, v);
    }
    assert_eq!(st.size(), 5);
    assert_eq!(st.get(2), Ok(37));
    assert!(!st.contains(7));
    assert_eq!(
        st.iter().collect::<Vec<_>>(),
        vec![(1, 27), (2, 37), (3, 78), (6, 4), (8, 44)]
    );

    assert!(st.delete(3));
    assert_eq!(st.size(), 4);
    assert!(!st.contains(3));
    assert_eq!(
        st.iter().collect::<Vec<_>>(),
        vec![(1, 27), (2, 37), (6, 4), (8, 44)]
    );
}

#[test]
fn test_fill_and_drain_ascending() {
    let mut st = BstTable::new();
    for i in 0..20 {
        assert!(st.put(i, i * i));
    }
    assert_eq!(st.size(), 20);

    for i in 0..20 {
        let before = st.size();
        assert!(st.delete(i));
        assert_eq!(st.size(), before - 1);
        assert!(!st.contains(i));
        assert_eq!(st.get(i), Err(TableError::KeyNotFound(i)));
        assert_eq!(st.min_key(), if i < 19 { Some(i + 1) } else { None });
    }
    assert!(st.is_empty());
    assert_eq!(st.iter().next(), None);
}

#[test]
fn test_put_get_round_trip() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut st = BstTable::new();
    for _ in 0..500 {
        let key = rng.gen_range(-1000..1000);
        let value = rng.gen();
        st.put(key, value);
        assert_eq!(st.get(key), Ok(value));
    }
}

#[test]
fn test_shuffled_insert_delete() {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut keys: Vec<i32> = (-40..40).collect();
    keys.shuffle(&mut rng);

    let mut st = BstTable::new();
    let mut reference = BTreeMap::new();
    for &k in &keys {
        assert!(st.put(k, k * 10));
        reference.insert(k, k * 10);
        assert_matches(&st, &reference);
    }

    // deleting in a different order exercises every shape of node
    keys.shuffle(&mut rng);
    for &k in &keys {
        assert!(st.delete(k));
        reference.remove(&k);
        assert!(!st.contains(k));
        assert_eq!(st.get(k), Err(TableError::KeyNotFound(k)));
        assert_matches(&st, &reference);
    }
    assert!(st.is_empty());
    assert_eq!(st.height(), 0);
}

#[test]
fn test_random_workload_against_btreemap() {
    let mut rng = StdRng::seed_from_u64(0xb57);
    let mut st = BstTable::new();
    let mut reference = BTreeMap::new();

    for _ in 0..20_000 {
        let key = rng.gen_range(0..300);
        match rng.gen_range(0..4) {
            0 | 1 => {
                let value = rng.gen();
                assert_eq!(st.put(key, value), reference.insert(key, value).is_none());
            }
            2 => assert_eq!(st.delete(key), reference.remove(&key).is_some()),
            _ => assert_eq!(st.get(key).ok(), reference.get(&key).copied()),
        }
        assert_eq!(st.size(), reference.len());
    }
    assert_matches(&st, &reference);
}

#[test]
fn test_size_accounting() {
    let mut st = BstTable::new();
    let mut expected = 0;
    for k in [5, 3, 8, 5, 1, 3, 9] {
        if st.put(k, 0) {
            expected += 1;
        }
        assert_eq!(st.size(), expected);
    }
    for k in [4, 5, 5, 9, 100] {
        if st.delete(k) {
            expected -= 1;
        }
        assert_eq!(st.size(), expected);
    }
    assert_eq!(st.iter().count(), expected);
}

#[test]
fn test_cursor_protocol() {
    let st: BstTable = [(3, 30), (1, 10), (2, 20)].into_iter().collect();
    let mut cursor = st.cursor();
    let mut seen = vec![];
    while !cursor.is_exhausted() {
        seen.push((cursor.current_key().unwrap(), cursor.current_value().unwrap()));
        cursor.advance();
    }
    assert_eq!(seen, vec![(1, 10), (2, 20), (3, 30)]);
    assert_eq!(cursor.current_key(), Err(TableError::IteratorExhausted));
    assert_eq!(cursor.current_value(), Err(TableError::IteratorExhausted));

    // advancing past the end is a no-op
    cursor.advance();
    assert!(cursor.is_exhausted());

    let empty = BstTable::new();
    assert!(empty.cursor().is_exhausted());
    assert_eq!(empty.iter().next(), None);
}

#[test]
fn test_sorted_inserts_stay_iterative() {
    let n = 5_000;
    let mut st = BstTable::new();
    for k in 0..n {
        st.put(k, -k);
    }
    assert_eq!(st.height(), n as usize);
    assert_eq!(st.iter().map(|(k, _)| k).collect::<Vec<_>>(), (0..n).collect::<Vec<_>>());
    for k in (0..n).rev() {
        assert!(st.delete(k));
    }
    assert!(st.is_empty());
}
