// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Workflows whose outcome depends on configuration.

use termitodo_core::{Config, StorageKind, TermiTodo};

use crate::common::{setup_temp_dirs, test_config, test_draft};

#[tokio::test]
async fn config_default_description_applies() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let config = Config {
        default_description: Some("Nothing yet".to_string()),
        ..test_config(&temp_dirs.data_dir, StorageKind::Directory)
    };
    let todo = TermiTodo::new(config).unwrap();

    let item = todo.create(test_draft("Buy milk")).await.unwrap();
    assert_eq!(item.description, "Nothing yet");
}

#[tokio::test]
async fn config_storage_kinds_do_not_see_each_other() {
    let temp_dirs = setup_temp_dirs().await.unwrap();

    let dir_todo =
        TermiTodo::new(test_config(&temp_dirs.data_dir, StorageKind::Directory)).unwrap();
    dir_todo.create(test_draft("in a directory")).await.unwrap();

    let file_todo =
        TermiTodo::new(test_config(&temp_dirs.data_dir, StorageKind::JsonFile)).unwrap();
    assert!(file_todo.list(file_todo.today()).await.unwrap().is_empty());
    file_todo.create(test_draft("in the file")).await.unwrap();

    let dir_items = dir_todo.list(dir_todo.today()).await.unwrap();
    assert_eq!(dir_items.len(), 1);
    assert_eq!(dir_items[0].title, "in a directory");

    let file_items = file_todo.list(file_todo.today()).await.unwrap();
    assert_eq!(file_items.len(), 1);
    assert_eq!(file_items[0].title, "in the file");
}

#[tokio::test]
async fn config_data_dir_is_exposed_after_normalize() {
    let temp_dirs = setup_temp_dirs().await.unwrap();
    let todo = TermiTodo::new(test_config(&temp_dirs.data_dir, StorageKind::JsonFile)).unwrap();

    assert_eq!(todo.data_dir(), temp_dirs.data_dir);
    assert_eq!(todo.config().storage, StorageKind::JsonFile);
}
