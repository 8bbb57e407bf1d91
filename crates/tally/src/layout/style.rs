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

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const DISPLAY: &str = "display";

/// Inline CSS declarations in insertion order. Property names are CSS
/// (kebab-case) names; on the wire this is a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Style {
    declarations: IndexMap<String, String>,
}
impl Style {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with(mut self, property: &str, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }
    pub fn set(&mut self, property: &str, value: impl Into<String>) {
        self.declarations.insert(property.to_string(), value.into());
    }
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations.get(property).map(String::as_str)
    }
    pub fn display(&self) -> Option<&str> {
        self.get(DISPLAY)
    }
    /// Declarations of `other` override ours.
    pub fn merged(mut self, other: &Style) -> Self {
        for (property, value) in &other.declarations {
            self.set(property, value.clone());
        }
        self
    }
    pub fn to_css(&self) -> String {
        self.declarations
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}
impl<const N: usize> From<[(&str, &str); N]> for Style {
    fn from(declarations: [(&str, &str); N]) -> Self {
        declarations
            .into_iter()
            .fold(Style::new(), |style, (property, value)| style.with(property, value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_in_insertion_order() {
        let style = Style::from([("width", "48%"), ("display", "inline-block")]);
        assert_eq!(style.to_css(), "width: 48%; display: inline-block");
        assert_eq!(style.display(), Some("inline-block"));
    }

    #[test]
    fn merge_overrides_existing_properties() {
        let base = Style::from([("display", "none"), ("position", "fixed")]);
        let merged = base.merged(&Style::from([("display", "block")]));
        assert_eq!(merged.to_css(), "display: block; position: fixed");
    }

    #[test]
    fn deserialises_from_flat_object() {
        let style: Style = serde_json::from_str(r#"{"display":"block"}"#).unwrap();
        assert_eq!(style.display(), Some("block"));
        assert_eq!(serde_json::to_string(&style).unwrap(), r#"{"display":"block"}"#);
    }
}
