// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod directory;
mod json_file;

use std::error::Error;
use std::fmt;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::TodoItem;
use crate::config::StorageKind;

pub use crate::store::directory::DirectoryStore;
pub use crate::store::json_file::JsonFileStore;

/// Outcome of removing a todo item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Deletion {
    /// No item with the given id exists for the date.
    NotFound,

    /// The item was removed.
    Removed {
        /// The date container, if it became empty and was removed as well.
        removed_container: Option<PathBuf>,
    },
}

/// Persistence of todo items, grouped by their creation date.
#[async_trait(?Send)]
pub trait TodoStore: fmt::Debug {
    /// Persists a new item. Fails if an item with the same id already exists.
    async fn insert(&self, item: &TodoItem) -> Result<(), Box<dyn Error>>;

    /// Lists the items created on `date`, oldest first.
    async fn list(&self, date: NaiveDate) -> Result<Vec<TodoItem>, Box<dyn Error>>;

    /// Removes the item `id` created on `date`.
    async fn remove(&self, date: NaiveDate, id: &str) -> Result<Deletion, Box<dyn Error>>;
}

/// Opens the store of the given kind rooted at `root`.
pub fn open(kind: StorageKind, root: &Path) -> Box<dyn TodoStore> {
    tracing::debug!(?kind, root = %root.display(), "opening todo store");
    match kind {
        StorageKind::Directory => Box::new(DirectoryStore::new(root)),
        StorageKind::JsonFile => Box::new(JsonFileStore::new(root)),
    }
}

/// Orders listed items by creation time, ties broken by id.
fn sort_items(items: &mut [TodoItem]) {
    items.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
}
