// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::TodoItem;
use crate::date::DATE_FORMAT;
use crate::store::{Deletion, TodoStore, sort_items};

const EXTENSION: &str = "json";

/// Stores every item as `<root>/<YYYY-MM-DD>/<id>.json`.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    root: PathBuf,
}

impl DirectoryStore {
    /// Creates a store rooted at `root`. Nothing is touched on disk until the first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory holding the items created on `date`.
    pub fn date_dir(&self, date: NaiveDate) -> PathBuf {
        self.root.join(date.format(DATE_FORMAT).to_string())
    }

    fn item_path(&self, date: NaiveDate, id: &str) -> Result<PathBuf, Box<dyn Error>> {
        if id.is_empty() || id.contains(['/', '\\']) || id == "." || id == ".." {
            return Err(format!("Invalid todo id: {id:?}").into());
        }
        Ok(self.date_dir(date).join(format!("{id}.{EXTENSION}")))
    }
}

#[async_trait(?Send)]
impl TodoStore for DirectoryStore {
    #[tracing::instrument(skip(self, item), fields(id = %item.id))]
    async fn insert(&self, item: &TodoItem) -> Result<(), Box<dyn Error>> {
        let dir = self.date_dir(item.date());
        fs::create_dir_all(&dir)
            .await
            .map_err(|e| format!("Failed to create directory {}: {e}", dir.display()))?;

        let path = self.item_path(item.date(), &item.id)?;
        let content = serde_json::to_string_pretty(item)?;

        let mut file = match fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(format!("Todo item {} already exists", item.id).into());
            }
            Err(e) => return Err(format!("Failed to create {}: {e}", path.display()).into()),
        };
        let written = match file.write_all(content.as_bytes()).await {
            Ok(()) => file.flush().await,
            Err(e) => Err(e),
        };
        drop(file);
        discard_on_error(&path, written).await?;

        tracing::debug!(path = %path.display(), "todo item written");
        Ok(())
    }

    #[tracing::instrument(skip(self))]
    async fn list(&self, date: NaiveDate) -> Result<Vec<TodoItem>, Box<dyn Error>> {
        let dir = self.date_dir(date);
        let mut reader = match fs::read_dir(&dir).await {
            Ok(reader) => reader,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(dir = %dir.display(), "no date directory");
                return Ok(Vec::new());
            }
            Err(e) => return Err(format!("Failed to read directory {}: {e}", dir.display()).into()),
        };

        let mut items = Vec::new();
        while let Some(entry) = reader.next_entry().await? {
            let path = entry.path();
            if !entry.file_type().await?.is_file() || !has_item_extension(&path) {
                tracing::warn!(path = %path.display(), "skipping unexpected entry");
                continue;
            }

            items.push(read_item(&path).await?);
        }

        sort_items(&mut items);
        Ok(items)
    }

    #[tracing::instrument(skip(self))]
    async fn remove(&self, date: NaiveDate, id: &str) -> Result<Deletion, Box<dyn Error>> {
        let path = self.item_path(date, id)?;
        match fs::remove_file(&path).await {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Deletion::NotFound),
            Err(e) => return Err(format!("Failed to delete {}: {e}", path.display()).into()),
        }
        tracing::debug!(path = %path.display(), "todo item deleted");

        let dir = self.date_dir(date);
        let is_empty = fs::read_dir(&dir).await?.next_entry().await?.is_none();
        let removed_container = if is_empty {
            fs::remove_dir(&dir)
                .await
                .map_err(|e| format!("Failed to remove directory {}: {e}", dir.display()))?;
            tracing::debug!(dir = %dir.display(), "empty date directory removed");
            Some(dir)
        } else {
            None
        };

        Ok(Deletion::Removed { removed_container })
    }
}

/// Removes `path` when `written` failed, leaving no partial item on disk.
async fn discard_on_error(
    path: &Path,
    written: std::io::Result<()>,
) -> Result<(), Box<dyn Error>> {
    let Err(e) = written else {
        return Ok(());
    };

    if let Err(rm) = fs::remove_file(path).await {
        tracing::warn!(path = %path.display(), err = %rm, "failed to remove partial todo file");
    }
    Err(format!("Failed to write {}: {e}", path.display()).into())
}

fn has_item_extension(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == EXTENSION)
}

async fn read_item(path: &Path) -> Result<TodoItem, Box<dyn Error>> {
    let content = fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read file {}: {e}", path.display()))?;
    let item = serde_json::from_str(&content)
        .map_err(|e| format!("Failed to parse todo item {}: {e}", path.display()))?;
    Ok(item)
}
