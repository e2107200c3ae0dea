// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::fs;

use crate::TodoItem;
use crate::store::{Deletion, TodoStore, sort_items};

/// Name of the file holding all items.
pub const FILE_NAME: &str = "todos.json";

/// Stores all items as one JSON array in `<root>/todos.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `root`. The file is created on the first write.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            path: root.as_ref().join(FILE_NAME),
        }
    }

    /// Path of the array file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<TodoItem>, Box<dyn Error>> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "todo file does not exist yet");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(format!("Failed to read file {}: {e}", self.path.display()).into());
            }
        };

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let items = serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse {}: {e}", self.path.display()))?;
        Ok(items)
    }

    async fn save(&self, items: &[TodoItem]) -> Result<(), Box<dyn Error>> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| format!("Failed to create directory {}: {e}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, content)
            .await
            .map_err(|e| format!("Failed to write file {}: {e}", self.path.display()))?;
        Ok(())
    }
}

#[async_trait(?Send)]
impl TodoStore for JsonFileStore {
    #[tracing::instrument(skip(self, item), fields(id = %item.id))]
    async fn insert(&self, item: &TodoItem) -> Result<(), Box<dyn Error>> {
        let mut items = self.load().await?;
        if items.iter().any(|a| a.id == item.id) {
            return Err(format!("Todo item {} already exists", item.id).into());
        }

        items.push(item.clone());
        self.save(&items).await?;

        tracing::debug!(count = items.len(), "todo item appended");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self, date: NaiveDate) -> Result<Vec<TodoItem>, Box<dyn Error>> {
        let mut items: Vec<_> = self
            .load()
            .await?
            .into_iter()
            .filter(|a| a.date() == date)
            .collect();

        sort_items(&mut items);
        Ok(items)
    }

    #[tracing::instrument(skip(self))]
    async fn remove(&self, date: NaiveDate, id: &str) -> Result<Deletion, Box<dyn Error>> {
        let mut items = self.load().await?;
        let Some(index) = items.iter().position(|a| a.id == id && a.date() == date) else {
            return Ok(Deletion::NotFound);
        };

        items.remove(index);
        self.save(&items).await?;

        tracing::debug!(remaining = items.len(), "todo item removed from file");
        Ok(Deletion::Removed {
            removed_container: None,
        })
    }
}
