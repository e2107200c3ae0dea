// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::todo::DEFAULT_DESCRIPTION;

/// The name of the termi-todo application.
pub const APP_NAME: &str = "termi-todo";

/// Sub-directory of the user data directory holding the items.
const DATA_SUBDIR: &str = "todo-items";

/// Configuration for the termi-todo core.
#[derive(Debug, Clone, Default, serde::Deserialize)]
pub struct Config {
    /// Directory holding the persisted todo items.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// How todo items are laid out inside `data_dir`.
    #[serde(default)]
    pub storage: StorageKind,

    /// Description used when none is given.
    #[serde(default)]
    pub default_description: Option<String>,
}

impl Config {
    /// Normalize the configuration.
    pub fn normalize(&mut self) -> Result<(), Box<dyn Error>> {
        self.data_dir = Some(match &self.data_dir {
            Some(a) => {
                expand_path(a).map_err(|e| format!("Failed to expand data directory path: {e}"))?
            }
            None => get_data_dir()?.join(APP_NAME).join(DATA_SUBDIR),
        });

        if let Some(desc) = &self.default_description
            && desc.trim().is_empty()
        {
            tracing::warn!("empty default_description in config, using the built-in one");
            self.default_description = None;
        }

        Ok(())
    }

    /// The description to use when the user does not provide one.
    pub fn default_description(&self) -> &str {
        self.default_description
            .as_deref()
            .unwrap_or(DEFAULT_DESCRIPTION)
    }
}

/// The on-disk layout of the todo items.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StorageKind {
    /// One `<id>.json` file per item inside a `<date>/` directory.
    #[default]
    Directory,

    /// A single `todos.json` file holding an array of items.
    JsonFile,
}

/// Handle tilde (~) and environment variables in the path
fn expand_path(path: &Path) -> Result<PathBuf, Box<dyn Error>> {
    if path.is_absolute() {
        return Ok(path.to_owned());
    }

    let path = path.to_str().ok_or("Invalid path")?;

    // Handle tilde and home directory
    let home_prefixes: &[&str] = if cfg!(unix) {
        &["~/", "$HOME/", "${HOME}/"]
    } else {
        &[r"~\", "~/", r"%UserProfile%\", r"%UserProfile%/"]
    };
    for prefix in home_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_home_dir()?.join(stripped));
        }
    }

    // Handle data directories
    let data_prefixes: &[&str] = if cfg!(unix) {
        &["$XDG_DATA_HOME/", "${XDG_DATA_HOME}/"]
    } else {
        &[r"%APPDATA%\", "%APPDATA%/"]
    };
    for prefix in data_prefixes {
        if let Some(stripped) = path.strip_prefix(prefix) {
            return Ok(get_data_dir()?.join(stripped));
        }
    }

    Ok(path.into())
}

fn get_home_dir() -> Result<PathBuf, Box<dyn Error>> {
    dirs::home_dir().ok_or("User-specific home directory not found".into())
}

fn get_data_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let data_dir = xdg::BaseDirectories::new().get_data_home();
    #[cfg(windows)]
    let data_dir = dirs::data_dir();
    data_dir.ok_or("User-specific data directory not found".into())
}
