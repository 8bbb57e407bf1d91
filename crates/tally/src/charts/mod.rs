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

//! Chart builders: pure mappings from aggregated tables to Plotly figures.

pub mod bar;
pub mod figure;
pub mod hierarchy;
pub mod proportion;
pub mod reveal;
pub mod theme;

pub use bar::{bar, BarColoring, BarOptions};
pub use figure::{Figure, Frame, Layout, Orientation, Trace};
pub use hierarchy::{sunburst, treemap, HierarchyOptions};
pub use proportion::{pie, PieOptions};
pub use reveal::{reveal_bar, reveal_frames, RevealColoring, RevealOptions};
pub use theme::Palette;
