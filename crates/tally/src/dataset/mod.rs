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

//! Survey dataset: the question catalogue, the in-memory table and the
//! remote loader that fills it once at startup.

pub mod loader;
pub mod question;
pub mod table;

pub use loader::{DatasetLoader, SURVEY_CSV_URL};
pub use question::Question;
pub use table::{Column, SurveyRow, SurveyTable};
