// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{borrow::Cow, fmt};

use colored::Color;
use termitodo_core::TodoItem;

use crate::parser::{ArgOutputFormat, format_datetime};
use crate::table::{PaddingDirection, Table, TableColumn};

#[derive(Debug)]
pub struct TodoFormatter {
    columns: Vec<TodoColumn>,
    format: ArgOutputFormat,
}

impl TodoFormatter {
    pub fn new() -> Self {
        Self {
            columns: vec![
                TodoColumn::Created,
                TodoColumn::Id,
                TodoColumn::Title,
                TodoColumn::Description,
            ],
            format: ArgOutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: ArgOutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, items: &'a [TodoItem]) -> Display<'a> {
        Display {
            formatter: self,
            items,
        }
    }
}

impl Default for TodoFormatter {
    fn default() -> Self {
        Self::new()
    }
}

pub struct Display<'a> {
    formatter: &'a TodoFormatter,
    items: &'a [TodoItem],
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            ArgOutputFormat::Json => {
                let json = serde_json::to_string_pretty(self.items).map_err(|_| fmt::Error)?;
                write!(f, "{json}")
            }
            ArgOutputFormat::Table => {
                write!(f, "{}", Table::new(&self.formatter.columns, self.items))
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum TodoColumn {
    Created,
    Id,
    Title,
    Description,
}

impl TableColumn<TodoItem> for TodoColumn {
    fn format<'a>(&self, item: &'a TodoItem) -> Cow<'a, str> {
        match self {
            TodoColumn::Created => format_datetime(&item.created_at).into(),
            TodoColumn::Id => item.id.as_str().into(),
            TodoColumn::Title => item.title.as_str().into(),
            TodoColumn::Description => item.description.as_str().into(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            TodoColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, _item: &TodoItem) -> Option<Color> {
        match self {
            TodoColumn::Id => Some(Color::BrightBlack),
            TodoColumn::Description => Some(Color::Cyan),
            _ => None,
        }
    }
}
