use super::radix::owned::Dictionary;
use super::radix::text::TextBuffer;
use super::radix::trie::build_trie;

use itertools::Itertools;
use proptest::prelude::*;
use std::collections::BTreeSet;

fn key_strategy() -> impl Strategy<Value = Vec<u8>> + Clone {
    // A tiny alphabet makes shared prefixes, and therefore splits, common.
    prop::collection::vec(prop::sample::select(b"abc".to_vec()), 0..=8)
}

fn keys_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(key_strategy(), 0..=64)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_membership_matches_set(keys in keys_strategy(), queries in prop::collection::vec(key_strategy(), 0..=64)) {
        let dict = Dictionary::from_words(&keys).unwrap();
        let model: BTreeSet<Vec<u8>> = keys.iter().cloned().collect();

        for key in keys.iter().chain(&queries) {
            prop_assert_eq!(dict.contains(key), model.contains(key), "key {:?}", key);
        }
        prop_assert_eq!(dict.check_invariants(), Ok(()));
    }

    #[test]
    fn prop_keys_round_trip(keys in keys_strategy()) {
        let dict = Dictionary::from_words(&keys).unwrap();
        let listed = dict.keys();
        let unique: BTreeSet<Vec<u8>> = listed.iter().cloned().collect();
        prop_assert_eq!(unique.len(), listed.len(), "duplicate keys listed");

        let model: BTreeSet<Vec<u8>> = keys.into_iter().collect();
        prop_assert_eq!(unique, model);
    }

    #[test]
    fn prop_order_does_not_change_keyset(keys in keys_strategy(), seed in any::<u64>()) {
        let mut shuffled = keys.clone();
        // Deterministic rotation + reversal driven by the seed.
        if !shuffled.is_empty() {
            let mid = (seed as usize) % shuffled.len();
            shuffled.rotate_left(mid);
        }
        if seed & 1 == 1 {
            shuffled.reverse();
        }

        let a = Dictionary::from_words(&keys).unwrap();
        let b = Dictionary::from_words(&shuffled).unwrap();
        let ka: BTreeSet<Vec<u8>> = a.keys().into_iter().collect();
        let kb: BTreeSet<Vec<u8>> = b.keys().into_iter().collect();
        prop_assert_eq!(ka, kb);
        prop_assert_eq!(a.node_count(), b.node_count());
    }

    #[test]
    fn prop_reinsert_is_idempotent(keys in keys_strategy()) {
        let once = Dictionary::from_words(&keys).unwrap();
        let twice = Dictionary::from_words(keys.iter().chain(&keys)).unwrap();
        prop_assert_eq!(once.keys(), twice.keys());
        prop_assert_eq!(once.node_count(), twice.node_count());
    }

    #[test]
    fn prop_prefix_and_extension(a in key_strategy(), tail in prop::collection::vec(prop::sample::select(b"abc".to_vec()), 1..=8)) {
        let b: Vec<u8> = a.iter().chain(&tail).copied().collect();
        for words in [[&a, &b], [&b, &a]] {
            let dict = Dictionary::from_words(words).unwrap();
            prop_assert!(dict.contains(&a));
            prop_assert!(dict.contains(&b));
            for len in a.len() + 1..b.len() {
                prop_assert!(!dict.contains(&b[..len]));
            }
        }
    }

    #[test]
    fn prop_node_limit_never_corrupts(keys in keys_strategy(), limit in 1usize..=24) {
        let (text, spans) = TextBuffer::from_words(&keys);
        let options = crate::radix::TrieOptions::default().with_max_nodes(limit);
        let mut trie = crate::radix::RadixTrie::with_options(&text, options);
        let mut model = BTreeSet::new();
        for (key, span) in keys.iter().zip(spans) {
            if trie.insert_span(span).is_ok() {
                model.insert(key.clone());
            }
            prop_assert!(trie.node_count() <= limit);
            prop_assert_eq!(trie.check_invariants(), Ok(()));
        }
        let listed: BTreeSet<Vec<u8>> = trie.keys().into_iter().collect();
        prop_assert_eq!(listed, model);
    }
}

#[test]
fn every_permutation_gives_same_keyset() {
    const WORDS: [&str; 6] = ["car", "cat", "ca", "cart", "dog", ""];
    let expected: BTreeSet<&[u8]> = WORDS.iter().map(|w| w.as_bytes()).collect();
    for order in WORDS.iter().permutations(WORDS.len()) {
        let (text, spans) = TextBuffer::from_words(&order);
        let trie = build_trie(&text, spans).unwrap();
        let keys = trie.keys();
        let got: BTreeSet<&[u8]> = keys.iter().map(Vec::as_slice).collect();
        assert_eq!(got, expected, "order {order:?}");
        assert_eq!(trie.node_count(), 6, "order {order:?}");
        assert!(!trie.contains("c"));
        assert!(!trie.contains("do"));
    }
}
