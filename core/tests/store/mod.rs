// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Behaviour every storage backend must share, plus backend specific layout tests.

mod json_file;

use chrono::NaiveDate;
use termitodo_core::{Deletion, TodoStore};

use crate::common::test_item;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub async fn lists_nothing_before_first_write(store: &dyn TodoStore) {
    let items = store.list(date(2025, 1, 15)).await.unwrap();
    assert!(items.is_empty());
}

pub async fn round_trips_items_verbatim(store: &dyn TodoStore) {
    let item = test_item("round-trip", (2025, 1, 15), 9);
    store.insert(&item).await.unwrap();

    let items = store.list(date(2025, 1, 15)).await.unwrap();
    assert_eq!(items, vec![item]);
}

pub async fn lists_only_the_requested_date(store: &dyn TodoStore) {
    store.insert(&test_item("b", (2025, 1, 15), 12)).await.unwrap();
    store.insert(&test_item("a", (2025, 1, 15), 8)).await.unwrap();
    store.insert(&test_item("c", (2025, 1, 14), 23)).await.unwrap();

    let ids: Vec<_> = store
        .list(date(2025, 1, 15))
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, vec!["a", "b"], "oldest first, other dates excluded");

    let ids: Vec<_> = store
        .list(date(2025, 1, 14))
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.id)
        .collect();
    assert_eq!(ids, vec!["c"]);
}

pub async fn rejects_duplicate_ids(store: &dyn TodoStore) {
    let item = test_item("dup", (2025, 1, 15), 9);
    store.insert(&item).await.unwrap();

    let mut again = item.clone();
    again.title = "Overwritten".to_string();
    let err = store.insert(&again).await.unwrap_err();
    assert!(err.to_string().contains("already exists"), "got: {err}");

    let items = store.list(date(2025, 1, 15)).await.unwrap();
    assert_eq!(items, vec![item], "the original must survive");
}

pub async fn removes_items(store: &dyn TodoStore) {
    store.insert(&test_item("keep", (2025, 1, 15), 8)).await.unwrap();
    store.insert(&test_item("drop", (2025, 1, 15), 9)).await.unwrap();

    let deletion = store.remove(date(2025, 1, 15), "drop").await.unwrap();
    assert!(matches!(deletion, Deletion::Removed { .. }));

    let items = store.list(date(2025, 1, 15)).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].id, "keep");
}

pub async fn reports_missing_items(store: &dyn TodoStore) {
    let deletion = store.remove(date(2025, 1, 15), "ghost").await.unwrap();
    assert_eq!(deletion, Deletion::NotFound);

    store.insert(&test_item("a", (2025, 1, 15), 8)).await.unwrap();
    let deletion = store.remove(date(2025, 1, 16), "a").await.unwrap();
    assert_eq!(deletion, Deletion::NotFound, "wrong date must not match");
}
