// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::{DateTime, NaiveDate, SubsecRound, Utc};
use uuid::Uuid;

/// Description used when the user does not provide one.
pub const DEFAULT_DESCRIPTION: &str = "No description provided";

/// A single to-do record as it is persisted on disk.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    /// Opaque unique identifier.
    pub id: String,

    /// The title of the todo item, never blank.
    pub title: String,

    /// Free text description.
    pub description: String,

    /// When the item was created.
    #[serde(with = "iso8601")]
    pub created_at: DateTime<Utc>,
}

impl TodoItem {
    /// The date container this item belongs to.
    pub fn date(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}

/// User input for a new todo item, before it gets an identifier and a timestamp.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoDraft {
    /// The title of the todo item.
    pub title: String,

    /// The description of the todo item, if any.
    pub description: Option<String>,
}

impl TodoDraft {
    /// Creates a draft with the given title and no description.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Checks the draft and fills in defaults, returning the title and description to persist.
    pub fn validate(self, default_description: &str) -> Result<(String, String), Box<dyn Error>> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err("Title is required".into());
        }

        let description = match self.description {
            Some(d) if !d.trim().is_empty() => d,
            _ => default_description.to_string(),
        };
        Ok((title.to_string(), description))
    }

    /// Converts the draft into a todo item created at `now`.
    pub(crate) fn into_item(
        self,
        now: DateTime<Utc>,
        default_description: &str,
    ) -> Result<TodoItem, Box<dyn Error>> {
        let (title, description) = self.validate(default_description)?;
        Ok(TodoItem {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            // stored with millisecond precision, keep the in-memory value identical
            created_at: now.trunc_subsecs(3),
        })
    }
}

/// `createdAt` is written as `YYYY-MM-DDTHH:MM:SS.sssZ`.
mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(dt: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&s)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| de::Error::custom(format!("invalid createdAt `{s}`: {e}")))
    }
}
