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

pub mod aggregate;
pub mod charts;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod grid;
pub mod layout;
pub mod toggle;

pub use aggregate::{aggregate, FrequencyTable, LabelMap};
pub use charts::{Figure, Orientation, Trace};
pub use dashboard::Dashboard;
pub use dataset::{DatasetLoader, Question, SurveyTable, SURVEY_CSV_URL};
pub use error::{DashboardError, Result, SerialisationError};
pub use grid::DataGrid;
pub use layout::Style;
pub use toggle::{binding_for, toggle_display, ToggleBinding, Visibility, TOGGLES, UPDATE_PATH};
