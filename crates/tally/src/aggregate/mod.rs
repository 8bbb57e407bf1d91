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

//! Frequency counting over survey columns, plus the two display-only
//! transforms applied to category labels: short-label remapping and
//! fixed-width wrapping.

pub mod frequency;
pub mod labels;
pub mod wrap;

pub use frequency::{aggregate, FrequencyTable, MISSING_LABEL};
pub use labels::{LabelMap, EMPLOYER_TENURE_LABELS, UNDEFINED_MISSION_LABELS};
pub use wrap::{wrap_segments, wrap_text, wrapped_leaves, WrappedLeaf, LINE_BREAK, WRAP_WIDTH};
