//! Property-based tests for ItemStore operations.
//!
//! These tests check the store against a plain `Vec` model for arbitrary
//! sequences of adds (valid and invalid), removals, and clears.

use linksnip::managers::item_store::{ItemStore, ItemStoreTrait};
use linksnip::types::entry::ItemCandidate;
use linksnip::types::errors::StoreError;
use proptest::prelude::*;

/// Operations that can be performed on the ItemStore.
#[derive(Debug, Clone)]
enum StoreOp {
    Add(String, String),
    Remove(usize),
    Clear,
}

/// Titles and targets drawn so that some are blank after trimming.
fn arb_field() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => "[a-zA-Z0-9][a-zA-Z0-9 ]{0,12}",
        1 => Just(String::new()),
        1 => Just("   ".to_string()),
    ]
}

fn arb_ops() -> impl Strategy<Value = Vec<StoreOp>> {
    prop::collection::vec(
        prop_oneof![
            5 => (arb_field(), arb_field()).prop_map(|(t, u)| StoreOp::Add(t, u)),
            3 => (0..12usize).prop_map(StoreOp::Remove),
            1 => Just(StoreOp::Clear),
        ],
        1..60,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn store_matches_vec_model(ops in arb_ops()) {
        let mut store = ItemStore::new();
        let mut model: Vec<(String, String)> = Vec::new();

        for op in &ops {
            match op {
                StoreOp::Add(title, target) => {
                    let before = store.len();
                    let result = store.add(ItemCandidate::new(title, target, "", ""));
                    let valid = !title.trim().is_empty() && !target.trim().is_empty();
                    if valid {
                        prop_assert!(result.is_ok());
                        model.push((title.trim().to_string(), target.trim().to_string()));
                    } else {
                        prop_assert!(matches!(result, Err(StoreError::Validation(_))));
                        prop_assert_eq!(store.len(), before);
                    }
                }
                StoreOp::Remove(index) => {
                    let result = store.remove_at(*index);
                    if *index < model.len() {
                        let removed = result.unwrap().unwrap();
                        let expected = model.remove(*index);
                        prop_assert_eq!(removed.title, expected.0);
                    } else {
                        let is_out_of_range =
                            matches!(result, Err(StoreError::IndexOutOfRange { .. }));
                        prop_assert!(is_out_of_range);
                    }
                }
                StoreOp::Clear => {
                    store.clear();
                    model.clear();
                    prop_assert!(store.is_empty());
                }
            }

            let snapshot: Vec<(String, String)> = store
                .snapshot()
                .into_iter()
                .map(|i| (i.title, i.target))
                .collect();
            prop_assert_eq!(&snapshot, &model, "after {:?}", op);
        }
    }

    #[test]
    fn valid_adds_are_counted_in_order(titles in prop::collection::vec("[a-z]{1,8}", 0..20)) {
        let mut store = ItemStore::new();
        for (i, title) in titles.iter().enumerate() {
            store.add(ItemCandidate::new(title, &format!("https://x/{}", i), "", "")).unwrap();
        }
        let snapshot = store.snapshot();
        prop_assert_eq!(snapshot.len(), titles.len());
        for (item, title) in snapshot.iter().zip(&titles) {
            prop_assert_eq!(&item.title, title);
        }
    }
}
