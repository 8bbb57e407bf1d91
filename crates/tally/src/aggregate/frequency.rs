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

use crate::aggregate::labels::LabelMap;
use crate::dataset::{Question, SurveyTable};
use crate::error::Result;
use indexmap::IndexMap;
use serde::Serialize;

/// Category used for blank cells.
pub const MISSING_LABEL: &str = "(no response)";

/// Distinct value → occurrence count, ordered by descending count with ties
/// kept in first-appearance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FrequencyTable {
    counts: IndexMap<String, u64>,
}
impl FrequencyTable {
    pub fn from_values<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = Option<&'a str>>,
    {
        let mut counts: IndexMap<String, u64> = IndexMap::new();
        for value in values {
            *counts
                .entry(value.unwrap_or(MISSING_LABEL).to_string())
                .or_insert(0) += 1;
        }
        Self::ranked(counts)
    }
    fn ranked(mut counts: IndexMap<String, u64>) -> Self {
        // stable: equal counts keep insertion order
        counts.sort_by(|_, a, _, b| b.cmp(a));
        Self { counts }
    }
    /// Re-labels every category through `map`; categories that collapse onto
    /// the same short label have their counts summed.
    pub fn remapped(&self, map: &LabelMap) -> Self {
        let mut counts: IndexMap<String, u64> = IndexMap::with_capacity(self.counts.len());
        for (label, count) in &self.counts {
            *counts.entry(map.apply(label).to_string()).or_insert(0) += count;
        }
        Self::ranked(counts)
    }
    pub fn sorted_ascending(&self) -> Self {
        let mut counts = self.counts.clone();
        counts.sort_by(|_, a, _, b| a.cmp(b));
        Self { counts }
    }
    pub fn get(&self, label: &str) -> Option<u64> {
        self.counts.get(label).copied()
    }
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(k, v)| (k.as_str(), *v))
    }
    pub fn labels(&self) -> Vec<String> {
        self.counts.keys().cloned().collect()
    }
    pub fn counts(&self) -> Vec<u64> {
        self.counts.values().copied().collect()
    }
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
    pub fn len(&self) -> usize {
        self.counts.len()
    }
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
impl<'a> FromIterator<Option<&'a str>> for FrequencyTable {
    fn from_iter<T: IntoIterator<Item = Option<&'a str>>>(iter: T) -> Self {
        Self::from_values(iter)
    }
}

/// Counts the answers to `question`.
pub fn aggregate(table: &SurveyTable, question: Question) -> Result<FrequencyTable> {
    let column = table.column(question)?;
    Ok(column.values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::labels::EMPLOYER_TENURE_LABELS;
    use proptest::prelude::*;

    #[test]
    fn counts_in_descending_order() {
        let table = FrequencyTable::from_values([Some("Male"), Some("Female"), Some("Female")]);
        assert_eq!(table.labels(), vec!["Female", "Male"]);
        assert_eq!(table.counts(), vec![2, 1]);
        assert_eq!(table.get("Male"), Some(1));
    }

    #[test]
    fn ties_keep_first_appearance() {
        let table = FrequencyTable::from_values([Some("b"), Some("a"), Some("c"), Some("a")]);
        assert_eq!(table.labels(), vec!["a", "b", "c"]);
    }

    #[test]
    fn missing_values_are_a_category() {
        let table = FrequencyTable::from_values([None, Some("India"), None]);
        assert_eq!(table.get(MISSING_LABEL), Some(2));
        assert_eq!(table.total(), 3);
    }

    #[test]
    fn remap_merges_and_preserves_total() {
        let raw = "No way, 3 years with one employer is crazy";
        let table = FrequencyTable::from_values([Some(raw), Some("No way"), Some("Other")]);
        let short = table.remapped(&EMPLOYER_TENURE_LABELS);
        assert_eq!(short.get("No way"), Some(2));
        assert_eq!(short.get("Other"), Some(1));
        assert_eq!(short.total(), table.total());
    }

    #[test]
    fn ascending_order_reverses_ranking() {
        let table = FrequencyTable::from_values([Some("x"), Some("y"), Some("y"), Some("z")]);
        let asc = table.sorted_ascending();
        assert_eq!(asc.counts(), vec![1, 1, 2]);
        assert_eq!(asc.labels().last().map(String::as_str), Some("y"));
    }

    proptest! {
        #[test]
        fn total_equals_row_count(values in proptest::collection::vec(proptest::option::of("[a-d]{1,2}"), 0..64)) {
            let table: FrequencyTable = values.iter().map(|v| v.as_deref()).collect();
            prop_assert_eq!(table.total(), values.len() as u64);
            let counts = table.counts();
            prop_assert!(counts.windows(2).all(|w| w[0] >= w[1]));
        }
    }
}
