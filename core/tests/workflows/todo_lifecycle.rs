// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end todo lifecycle workflow tests.

use termitodo_core::{
    DEFAULT_DESCRIPTION, DateChoice, Deletion, StorageKind, TermiTodo, TodoDraft,
};

use crate::common::{assert_item_matches, setup_temp_dirs, test_config, test_draft};

const KINDS: [StorageKind; 2] = [StorageKind::Directory, StorageKind::JsonFile];

#[tokio::test]
async fn todo_lifecycle_buy_milk() {
    for kind in KINDS {
        // Arrange
        let temp_dirs = setup_temp_dirs().await.unwrap();
        let todo = TermiTodo::new(test_config(&temp_dirs.data_dir, kind)).unwrap();
        let today = todo.resolve(DateChoice::Today);

        // Act - create
        let item = todo.create(test_draft("Buy milk")).await.unwrap();

        // Assert - listed today with all fields intact
        assert_item_matches(&item, "Buy milk", DEFAULT_DESCRIPTION);
        let items = todo.list(today).await.unwrap();
        assert_eq!(items, vec![item.clone()], "{kind:?}");

        // Act - delete
        let deletion = todo.delete(today, &item.id).await.unwrap();
        assert!(matches!(deletion, Deletion::Removed { .. }), "{kind:?}");

        // Assert - gone
        let items = todo.list(today).await.unwrap();
        assert!(items.is_empty(), "{kind:?}");
    }
}

#[tokio::test]
async fn todo_lifecycle_description_is_kept() {
    for kind in KINDS {
        let temp_dirs = setup_temp_dirs().await.unwrap();
        let todo = TermiTodo::new(test_config(&temp_dirs.data_dir, kind)).unwrap();

        let draft = TodoDraft {
            title: "Call mom".to_string(),
            description: Some("Before 8pm".to_string()),
        };
        let item = todo.create(draft).await.unwrap();
        assert_item_matches(&item, "Call mom", "Before 8pm");

        let items = todo.list(todo.today()).await.unwrap();
        assert_eq!(items[0].description, "Before 8pm");
        assert_eq!(items[0].created_at, item.created_at);
    }
}

#[tokio::test]
async fn todo_lifecycle_ids_are_unique() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = test_config(&temp_dirs.data_dir, StorageKind::Directory);
    let todo = TermiTodo::new(config).unwrap();

    let mut ids = Vec::new();
    for title in ["one", "two", "three"] {
        ids.push(todo.create(test_draft(title)).await.unwrap().id);
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 3);

    let items = todo.list(todo.today()).await.unwrap();
    assert_eq!(items.len(), 3);
}

#[tokio::test]
async fn todo_lifecycle_rejects_blank_title() {
    for kind in KINDS {
        let temp_dirs = setup_temp_dirs().await.unwrap();
        let todo = TermiTodo::new(test_config(&temp_dirs.data_dir, kind)).unwrap();

        let err = todo.create(test_draft("  ")).await.unwrap_err();
        assert_eq!(err.to_string(), "Title is required");
        assert!(!temp_dirs.data_dir.exists(), "nothing written for {kind:?}");
    }
}

#[tokio::test]
async fn todo_lifecycle_empty_date_is_not_an_error() {
    for kind in KINDS {
        let temp_dirs = setup_temp_dirs().await.unwrap();
        let todo = TermiTodo::new(test_config(&temp_dirs.data_dir, kind)).unwrap();
        todo.create(test_draft("today only")).await.unwrap();

        let yesterday = todo.resolve(DateChoice::Yesterday);
        let items = todo.list(yesterday).await.unwrap();
        assert!(items.is_empty(), "{kind:?}");
    }
}

#[tokio::test]
async fn todo_lifecycle_last_delete_removes_date_directory() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = test_config(&temp_dirs.data_dir, StorageKind::Directory);
    let todo = TermiTodo::new(config).unwrap();
    let today = todo.today();

    let first = todo.create(test_draft("first")).await.unwrap();
    let second = todo.create(test_draft("second")).await.unwrap();
    let day = temp_dirs.data_dir.join(today.to_string());
    assert!(day.is_dir());

    let deletion = todo.delete(today, &first.id).await.unwrap();
    assert_eq!(
        deletion,
        Deletion::Removed {
            removed_container: None
        }
    );

    let deletion = todo.delete(today, &second.id).await.unwrap();
    assert_eq!(
        deletion,
        Deletion::Removed {
            removed_container: Some(day.clone())
        }
    );
    assert!(!day.exists());

    let deletion = todo.delete(today, &second.id).await.unwrap();
    assert_eq!(deletion, Deletion::NotFound);
}
