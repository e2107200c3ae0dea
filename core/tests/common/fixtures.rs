// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.

use std::path::Path;

use chrono::{TimeZone, Utc};
use termitodo_core::{Config, StorageKind, TodoDraft, TodoItem};

/// Creates a test configuration storing items in `data_dir`.
#[must_use]
pub fn test_config(data_dir: &Path, storage: StorageKind) -> Config {
    Config {
        data_dir: Some(data_dir.to_path_buf()),
        storage,
        default_description: None,
    }
}

/// Creates a test draft with the given title and no description.
#[must_use]
pub fn test_draft(title: &str) -> TodoDraft {
    TodoDraft::new(title)
}

/// Creates a todo item created at the given UTC date and hour.
///
/// # Panics
///
/// Panics if the date is invalid.
#[must_use]
pub fn test_item(id: &str, (y, m, d): (i32, u32, u32), hour: u32) -> TodoItem {
    TodoItem {
        id: id.to_string(),
        title: format!("Todo {id}"),
        description: format!("Description of {id}"),
        created_at: Utc
            .with_ymd_and_hms(y, m, d, hour, 0, 0)
            .single()
            .expect("valid test date"),
    }
}
