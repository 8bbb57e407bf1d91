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

use crate::dataset::question::Question;
use crate::error::{DashboardError, Result};
use std::collections::HashMap;
use std::io::Read;
use tracing::debug;

/// One respondent's answers, positionally aligned with the table headers.
/// Blank cells are `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyRow {
    cells: Vec<Option<String>>,
}
impl SurveyRow {
    pub fn new(cells: Vec<Option<String>>) -> Self {
        Self { cells }
    }
    pub fn get(&self, index: usize) -> Option<&str> {
        self.cells.get(index).and_then(|c| c.as_deref())
    }
}

/// The loaded survey. Built once and never mutated.
#[derive(Debug, Clone)]
pub struct SurveyTable {
    headers: Vec<String>,
    positions: HashMap<String, usize>,
    rows: Vec<SurveyRow>,
}
impl SurveyTable {
    pub fn new(headers: Vec<String>, rows: Vec<SurveyRow>) -> Self {
        let mut positions = HashMap::with_capacity(headers.len());
        for (i, header) in headers.iter().enumerate() {
            positions.entry(header.clone()).or_insert(i);
        }
        Self {
            headers,
            positions,
            rows,
        }
    }
    /// Parses CSV text with a header row. `source` only labels errors.
    pub fn from_csv_reader<R: Read>(reader: R, source: &str) -> Result<Self> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(|e| DashboardError::data_unavailable(source, format!("malformed CSV header: {e}")))?
            .iter()
            .map(str::to_string)
            .collect();
        if headers.iter().all(String::is_empty) {
            return Err(DashboardError::data_unavailable(source, "empty response"));
        }
        let mut rows = Vec::new();
        for (line, record) in csv_reader.records().enumerate() {
            let record = record.map_err(|e| {
                DashboardError::data_unavailable(source, format!("malformed CSV row {}: {e}", line + 1))
            })?;
            let cells = (0..headers.len())
                .map(|i| record.get(i).filter(|v| !v.is_empty()).map(str::to_string))
                .collect();
            rows.push(SurveyRow::new(cells));
        }
        if rows.is_empty() {
            return Err(DashboardError::data_unavailable(source, "dataset has no rows"));
        }
        debug!(rows = rows.len(), columns = headers.len(), "parsed survey CSV");
        Ok(Self::new(headers, rows))
    }
    pub fn headers(&self) -> &[String] {
        &self.headers
    }
    pub fn rows(&self) -> &[SurveyRow] {
        &self.rows
    }
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
    pub fn column(&self, question: Question) -> Result<Column<'_>> {
        self.column_by_header(question.header())
    }
    pub fn column_by_header(&self, header: &str) -> Result<Column<'_>> {
        let index = *self
            .positions
            .get(header)
            .ok_or_else(|| DashboardError::missing_column(header))?;
        Ok(Column { table: self, index })
    }
    /// Fails on the first question whose header is absent.
    pub fn require_all(&self) -> Result<()> {
        for question in Question::ALL {
            self.column(question)?;
        }
        Ok(())
    }
}

/// Borrowed view over one column of a [`SurveyTable`].
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    table: &'a SurveyTable,
    index: usize,
}
impl<'a> Column<'a> {
    pub fn header(&self) -> &'a str {
        &self.table.headers[self.index]
    }
    pub fn values(&self) -> impl Iterator<Item = Option<&'a str>> + 'a {
        let index = self.index;
        self.table.rows.iter().map(move |row| row.get(index))
    }
    pub fn len(&self) -> usize {
        self.table.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.table.rows.is_empty()
    }
    pub fn non_null_count(&self) -> usize {
        self.values().filter(Option::is_some).count()
    }
}
