// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

use crate::aggregate::frequency::FrequencyTable;
use serde::Serialize;

pub const WRAP_WIDTH: usize = 40;
/// Plotly renders `<br>` inside labels as a line break.
pub const LINE_BREAK: &str = "<br>";

/// Splits `text` into chunks of at most `width` characters, ignoring word
/// boundaries. A zero width yields the whole text as one chunk.
pub fn wrap_segments(text: &str, width: usize) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    if width == 0 {
        return vec![text];
    }
    let mut segments = Vec::with_capacity(text.len() / width + 1);
    let mut start = 0;
    for (taken, (offset, _)) in text.char_indices().enumerate() {
        if taken > 0 && taken % width == 0 {
            segments.push(&text[start..offset]);
            start = offset;
        }
    }
    segments.push(&text[start..]);
    segments
}

pub fn wrap_text(text: &str, width: usize) -> String {
    wrap_segments(text, width).join(LINE_BREAK)
}

/// A treemap leaf: `key` is the raw answer and identifies the category,
/// `display` is the wrapped form shown on the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrappedLeaf {
    pub key: String,
    pub display: String,
    pub count: u64,
}

/// One leaf per distinct raw answer. Distinct answers stay distinct even if
/// their wrapped forms coincide.
pub fn wrapped_leaves(table: &FrequencyTable, width: usize) -> Vec<WrappedLeaf> {
    table
        .iter()
        .map(|(key, count)| WrappedLeaf {
            key: key.to_string(),
            display: wrap_text(key, width),
            count,
        })
        .collect()
}
