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

use thiserror::Error;
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Survey data unavailable from '{source_url}': {reason}")]
    DataUnavailable { source_url: String, reason: String },
    #[error("Column '{column}' not found in dataset")]
    MissingColumn { column: String },
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] SerialisationError),
}
#[derive(Error, Debug)]
pub enum SerialisationError {
    #[error("JSON serialisation failed for figure '{figure}': {source}")]
    Figure {
        figure: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("JSON serialisation failed: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}
pub type Result<T> = std::result::Result<T, DashboardError>;
impl From<serde_json::Error> for DashboardError {
    fn from(err: serde_json::Error) -> Self {
        DashboardError::Serialisation(SerialisationError::Json { source: err })
    }
}
impl DashboardError {
    pub fn data_unavailable(source_url: &str, reason: impl std::fmt::Display) -> Self {
        DashboardError::DataUnavailable {
            source_url: source_url.to_string(),
            reason: reason.to_string(),
        }
    }
    pub fn missing_column(column: &str) -> Self {
        DashboardError::MissingColumn {
            column: column.to_string(),
        }
    }
    pub fn category(&self) -> &'static str {
        match self {
            DashboardError::DataUnavailable { .. } => "Data",
            DashboardError::MissingColumn { .. } => "Schema",
            DashboardError::Serialisation(_) => "Serialisation",
        }
    }
    pub fn user_message(&self) -> String {
        match self {
            DashboardError::DataUnavailable { .. } => {
                "The survey dataset could not be loaded. Check network access to the dataset host."
                    .to_string()
            }
            DashboardError::MissingColumn { column } => {
                format!("The survey dataset no longer has the expected question '{column}'.")
            }
            _ => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_follow_variant() {
        let err = DashboardError::data_unavailable("http://example.test/a.csv", "timed out");
        assert_eq!(err.category(), "Data");
        assert!(err.to_string().contains("http://example.test/a.csv"));
        assert!(err.to_string().contains("timed out"));

        let err = DashboardError::missing_column("Your Gender");
        assert_eq!(err.category(), "Schema");
        assert!(err.user_message().contains("Your Gender"));
    }

    #[test]
    fn json_errors_become_serialisation() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: DashboardError = source.into();
        assert_eq!(err.category(), "Serialisation");
    }

    #[test]
    fn every_failure_is_a_startup_category() {
        let figure = SerialisationError::Figure {
            figure: "gender-chart".to_string(),
            source: serde_json::from_str::<serde_json::Value>("[").unwrap_err(),
        };
        let errors = [
            DashboardError::data_unavailable("http://example.test/a.csv", "empty response"),
            DashboardError::missing_column("Your Gender"),
            DashboardError::from(figure),
        ];
        let categories: Vec<_> = errors.iter().map(DashboardError::category).collect();
        assert_eq!(categories, ["Data", "Schema", "Serialisation"]);
        assert!(errors[2].to_string().contains("gender-chart"));
    }
}
