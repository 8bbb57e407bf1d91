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

use crate::aggregate::FrequencyTable;
use crate::layout::style::Style;
use maud::{html, Markup};

pub const VIEWPORT_HEIGHT: &str = "400px";

/// Scrollable data grid. The body scrolls inside a fixed-height viewport;
/// the header row stays pinned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataGrid {
    id: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}
impl DataGrid {
    pub fn new(id: &str, columns: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self {
            id: id.to_string(),
            columns,
            rows,
        }
    }
    /// Two columns: the category and its count.
    pub fn from_frequency(id: &str, table: &FrequencyTable, label_header: &str, count_header: &str) -> Self {
        let rows = table
            .iter()
            .map(|(label, count)| vec![label.to_string(), count.to_string()])
            .collect();
        Self::new(
            id,
            vec![label_header.to_string(), count_header.to_string()],
            rows,
        )
    }
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
    fn viewport_style() -> Style {
        Style::from([
            ("height", VIEWPORT_HEIGHT),
            ("overflow-y", "auto"),
            ("width", "100%"),
        ])
    }
    fn header_style() -> Style {
        Style::from([
            ("background-color", "#f8f9fa"),
            ("font-weight", "bold"),
            ("position", "sticky"),
            ("top", "0"),
        ])
    }
    fn cell_style() -> Style {
        Style::from([
            ("font-family", "Arial"),
            ("font-size", "12px"),
            ("text-align", "left"),
            ("white-space", "normal"),
            ("height", "auto"),
            ("padding", "4px 8px"),
            ("border-bottom", "1px solid #e9ecef"),
        ])
    }
    pub fn render(&self) -> Markup {
        let header = Self::cell_style().merged(&Self::header_style()).to_css();
        let cell = Self::cell_style().to_css();
        html! {
            div id=(self.id) class="data-grid" style=(Self::viewport_style().to_css()) {
                table style="border-collapse: collapse; width: 100%" {
                    thead {
                        tr {
                            @for column in &self.columns {
                                th style=(header) { (column) }
                            }
                        }
                    }
                    tbody {
                        @for row in &self.rows {
                            tr {
                                @for value in row {
                                    td style=(cell) { (value) }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
