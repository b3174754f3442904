use crate::{RadixSet, RadixTree};

use proptest::prelude::*;
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
enum Op<V> {
    Insert(Vec<u8>, V),
    InsertIfAbsent(Vec<u8>, V),
    Remove(Vec<u8>),
    RemovePrefix(Vec<u8>),
    Clear,
    Get(Vec<u8>),
}

/// Short keys over a tiny alphabet maximize shared prefixes, which is where
/// the split/fork/prune logic actually gets exercised.
fn key_strategy() -> impl Strategy<Value = Vec<u8>> + Clone {
    prop::collection::vec(0u8..=3, 1..=10)
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op<u64>>> {
    let key = key_strategy();
    let op = prop_oneof![
        40 => (key.clone(), any::<u64>()).prop_map(|(k, v)| Op::Insert(k, v)),
        10 => (key.clone(), any::<u64>()).prop_map(|(k, v)| Op::InsertIfAbsent(k, v)),
        25 => key.clone().prop_map(Op::Remove),
        9 => key.clone().prop_map(Op::RemovePrefix),
        1 => Just(Op::Clear),
        15 => key.clone().prop_map(Op::Get),
    ];
    prop::collection::vec(op, 0..=800)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_with_btreemap(ops in ops_strategy()) {
        let mut t: RadixTree<u64> = RadixTree::new();
        let mut m: BTreeMap<Vec<u8>, u64> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, value) => {
                    let old_t = t.insert(&key, value).unwrap();
                    let old_m = m.insert(key, value);
                    prop_assert_eq!(old_t, old_m);
                }
                Op::InsertIfAbsent(key, value) => {
                    let inserted = t.insert_if_absent(&key, value).unwrap();
                    prop_assert_eq!(inserted, !m.contains_key(&key));
                    m.entry(key).or_insert(value);
                }
                Op::Remove(key) => {
                    let old_t = t.remove(&key);
                    let old_m = m.remove(key.as_slice());
                    prop_assert_eq!(old_t, old_m);
                }
                Op::RemovePrefix(prefix) => {
                    t.remove_prefix(&prefix);
                    m.retain(|k, _| !k.starts_with(&prefix));
                }
                Op::Clear => {
                    t.remove_prefix("");
                    m.clear();
                }
                Op::Get(key) => {
                    prop_assert_eq!(t.get(&key), m.get(key.as_slice()));
                }
            }

            prop_assert_eq!(t.len(), m.len());
            let issues = t.verify_integrity();
            prop_assert!(issues.is_empty(), "structural invariants violated: {:?}", issues);
        }

        let got: Vec<(Vec<u8>, u64)> = t.iter().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<(Vec<u8>, u64)> = m.iter().map(|(k, v)| (k.clone(), *v)).collect();
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn prop_prefix_scan_matches_filter(
        keys in prop::collection::btree_set(key_strategy(), 0..=60),
        prefix in key_strategy(),
    ) {
        let mut t: RadixTree<u64> = RadixTree::new();
        for (i, k) in keys.iter().enumerate() {
            t.insert(k, i as u64).unwrap();
        }

        let got: Vec<Vec<u8>> = t.scan_prefix(&prefix).map(|(k, _)| k).collect();
        let expected: Vec<Vec<u8>> = keys
            .iter()
            .filter(|k| k.starts_with(&prefix))
            .cloned()
            .collect();
        prop_assert_eq!(got, expected);

        let mut visited = Vec::new();
        t.for_each_prefix(&prefix, |k, _| visited.push(k.to_vec()));
        let expected: Vec<Vec<u8>> = keys
            .iter()
            .filter(|k| k.starts_with(&prefix))
            .cloned()
            .collect();
        prop_assert_eq!(visited, expected);
    }

    #[test]
    fn prop_set_tracks_membership(ops in ops_strategy()) {
        let mut s = RadixSet::new();
        let mut m: BTreeMap<Vec<u8>, ()> = BTreeMap::new();

        for op in ops {
            match op {
                Op::Insert(key, _) | Op::InsertIfAbsent(key, _) => {
                    let added = s.insert(&key).unwrap();
                    prop_assert_eq!(added, m.insert(key, ()).is_none());
                }
                Op::Remove(key) => {
                    prop_assert_eq!(s.remove(&key), m.remove(key.as_slice()).is_some());
                }
                Op::RemovePrefix(prefix) => {
                    s.remove_prefix(&prefix);
                    m.retain(|k, _| !k.starts_with(&prefix));
                }
                Op::Clear => {
                    s.clear();
                    m.clear();
                }
                Op::Get(key) => {
                    prop_assert_eq!(s.contains(&key), m.contains_key(key.as_slice()));
                }
            }
            prop_assert_eq!(s.len(), m.len());
        }

        let got: Vec<Vec<u8>> = s.iter().collect();
        let expected: Vec<Vec<u8>> = m.keys().cloned().collect();
        prop_assert_eq!(got, expected);
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

#[test]
fn exhaustive_insert_order_small_set() {
    let keys: Vec<Vec<u8>> = vec![
        b"a".to_vec(),
        b"aa".to_vec(),
        b"aaa".to_vec(),
        b"aab".to_vec(),
        b"ab".to_vec(),
        b"b".to_vec(),
    ];

    for_each_permutation(&keys, |perm| {
        let mut t: RadixTree<u64> = RadixTree::new();
        let mut m: BTreeMap<Vec<u8>, u64> = BTreeMap::new();

        for (i, k) in perm.into_iter().enumerate() {
            let v = i as u64;
            assert_eq!(t.insert(&k, v).unwrap(), m.insert(k, v));
            assert!(t.verify_integrity().is_empty());
        }

        let got: Vec<(Vec<u8>, u64)> = t.iter().map(|(k, v)| (k, *v)).collect();
        let expected: Vec<(Vec<u8>, u64)> = m.iter().map(|(k, v)| (k.clone(), *v)).collect();
        assert_eq!(got, expected);
    });
}

#[test]
fn exhaustive_remove_order_small_set() {
    let keys: Vec<Vec<u8>> = vec![
        b"a".to_vec(),
        b"aa".to_vec(),
        b"aaa".to_vec(),
        b"aab".to_vec(),
        b"ab".to_vec(),
        b"b".to_vec(),
    ];

    // Build one tree per removal permutation; every order must leave the
    // structure sound at each step and empty at the end.
    for_each_permutation(&keys, |perm| {
        let mut t: RadixTree<u64> = RadixTree::new();
        let mut m: BTreeMap<Vec<u8>, u64> = BTreeMap::new();
        for (i, k) in keys.iter().enumerate() {
            let v = i as u64;
            assert_eq!(t.insert(k, v).unwrap(), m.insert(k.clone(), v));
        }

        for k in perm {
            assert_eq!(t.remove(&k), m.remove(k.as_slice()));
            assert_eq!(t.len(), m.len());
            assert!(t.verify_integrity().is_empty());
        }
        assert_eq!(t.len(), 0);
        assert!(t.is_empty());
    });
}
