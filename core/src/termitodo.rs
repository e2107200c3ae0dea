// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, Utc};

use crate::store::{self, Deletion, TodoStore};
use crate::{Config, DateChoice, TodoDraft, TodoItem};

/// termi-todo application core.
#[derive(Debug)]
pub struct TermiTodo {
    now: DateTime<Utc>,
    config: Config,
    data_dir: PathBuf,
    store: Box<dyn TodoStore>,
}

impl TermiTodo {
    /// Creates a new instance with the given configuration.
    pub fn new(mut config: Config) -> Result<Self, Box<dyn Error>> {
        config.normalize()?;

        let data_dir = config
            .data_dir
            .clone()
            .ok_or("Data directory is not configured")?;
        let store = store::open(config.storage, &data_dir);

        Ok(Self {
            now: Utc::now(),
            config,
            data_dir,
            store,
        })
    }

    /// The normalized configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Directory holding the persisted items.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The date container of today.
    pub fn today(&self) -> NaiveDate {
        DateChoice::Today.resolve(&self.now)
    }

    /// Resolves a date choice against the current time.
    pub fn resolve(&self, choice: DateChoice) -> NaiveDate {
        choice.resolve(&self.now)
    }

    /// Creates and persists a new todo item from the given draft.
    pub async fn create(&self, draft: TodoDraft) -> Result<TodoItem, Box<dyn Error>> {
        let item = draft.into_item(self.now, self.config.default_description())?;
        tracing::debug!(id = %item.id, title = %item.title, "creating todo item");

        self.store.insert(&item).await?;
        Ok(item)
    }

    /// Lists the todo items created on `date`.
    pub async fn list(&self, date: NaiveDate) -> Result<Vec<TodoItem>, Box<dyn Error>> {
        let items = self.store.list(date).await?;
        tracing::debug!(%date, count = items.len(), "listed todo items");
        Ok(items)
    }

    /// Deletes the todo item `id` created on `date`.
    pub async fn delete(&self, date: NaiveDate, id: &str) -> Result<Deletion, Box<dyn Error>> {
        tracing::debug!(%date, id, "deleting todo item");
        self.store.remove(date, id).await
    }
}
