// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of termi-todo: dated to-do items persisted on local disk.

mod config;
mod date;
mod store;
mod termitodo;
mod todo;

pub use crate::config::{APP_NAME, Config, StorageKind};
pub use crate::date::{DATE_FORMAT, DateChoice, parse_date};
pub use crate::store::{Deletion, DirectoryStore, JsonFileStore, TodoStore};
pub use crate::termitodo::TermiTodo;
pub use crate::todo::{DEFAULT_DESCRIPTION, TodoDraft, TodoItem};
