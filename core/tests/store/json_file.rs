// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use termitodo_core::{Deletion, JsonFileStore, TodoItem, TodoStore};
use tokio::fs;

use super::date;
use crate::common::{assert_file_exists, setup_temp_dirs, test_item};

#[tokio::test]
async fn json_file_store_shared_behaviour() {
    for case in 0..6 {
        let dirs = setup_temp_dirs().await.unwrap();
        let store = JsonFileStore::new(&dirs.data_dir);
        match case {
            0 => super::lists_nothing_before_first_write(&store).await,
            1 => super::round_trips_items_verbatim(&store).await,
            2 => super::lists_only_the_requested_date(&store).await,
            3 => super::rejects_duplicate_ids(&store).await,
            4 => super::removes_items(&store).await,
            _ => super::reports_missing_items(&store).await,
        }
    }
}

#[tokio::test]
async fn json_file_store_appends_to_one_array() {
    let dirs = setup_temp_dirs().await.unwrap();
    let store = JsonFileStore::new(&dirs.data_dir);
    store.insert(&test_item("a", (2025, 1, 14), 8)).await.unwrap();
    store.insert(&test_item("b", (2025, 1, 15), 8)).await.unwrap();

    let path = dirs.data_dir.join("todos.json");
    assert_file_exists(&path);
    assert_eq!(store.path(), path);

    let content = fs::read_to_string(&path).await.unwrap();
    let items: Vec<TodoItem> = serde_json::from_str(&content).unwrap();
    let ids: Vec<_> = items.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"], "insertion order is kept on disk");
}

#[tokio::test]
async fn json_file_store_rewrites_without_removed_entry() {
    let dirs = setup_temp_dirs().await.unwrap();
    let store = JsonFileStore::new(&dirs.data_dir);
    store.insert(&test_item("a", (2025, 1, 15), 8)).await.unwrap();

    let deletion = store.remove(date(2025, 1, 15), "a").await.unwrap();
    assert_eq!(
        deletion,
        Deletion::Removed {
            removed_container: None
        }
    );

    let content = fs::read_to_string(store.path()).await.unwrap();
    assert_eq!(content, "[]");
}
