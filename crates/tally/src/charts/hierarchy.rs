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

use crate::aggregate::WrappedLeaf;
use crate::charts::figure::{Figure, HierarchyTrace, Marker, Trace};
use crate::charts::theme::{common_layout, Palette};

const LEAF_HOVER: &str = "<b>%{customdata}</b><br>Count: %{value}<extra></extra>";

#[derive(Debug, Clone)]
pub struct HierarchyOptions {
    pub title: String,
    pub palette: Palette,
}
impl HierarchyOptions {
    pub fn new(title: &str, palette: Palette) -> Self {
        Self {
            title: title.to_string(),
            palette,
        }
    }
}

fn single_level(ids: Vec<String>, labels: Vec<String>, values: Vec<u64>, palette: Palette) -> HierarchyTrace {
    let n = ids.len();
    HierarchyTrace {
        ids,
        labels,
        parents: vec![String::new(); n],
        values,
        branchvalues: "total".to_string(),
        textinfo: None,
        customdata: None,
        hovertemplate: None,
        marker: Marker {
            colors: Some(palette.cycle(n)),
            ..Default::default()
        },
    }
}

/// Treemap over wrapped free-text answers. Leaves are identified by their
/// raw answer and labelled with the wrapped text; tile text is hidden and
/// the full wrapped answer shows on hover.
pub fn treemap(leaves: &[WrappedLeaf], options: &HierarchyOptions) -> Figure {
    let ids = leaves.iter().map(|l| l.key.clone()).collect();
    let labels: Vec<String> = leaves.iter().map(|l| l.display.clone()).collect();
    let values = leaves.iter().map(|l| l.count).collect();
    let mut trace = single_level(ids, labels.clone(), values, options.palette);
    trace.customdata = Some(labels);
    trace.hovertemplate = Some(LEAF_HOVER.to_string());
    trace.textinfo = Some("none".to_string());
    Figure::new(vec![Trace::Treemap(trace)], common_layout(&options.title))
}

/// Sunburst over wrapped answers; unlike the treemap the labels stay visible
/// on the ring.
pub fn sunburst(leaves: &[WrappedLeaf], options: &HierarchyOptions) -> Figure {
    let ids = leaves.iter().map(|l| l.key.clone()).collect();
    let labels: Vec<String> = leaves.iter().map(|l| l.display.clone()).collect();
    let values = leaves.iter().map(|l| l.count).collect();
    let mut trace = single_level(ids, labels.clone(), values, options.palette);
    trace.customdata = Some(labels);
    trace.hovertemplate = Some(LEAF_HOVER.to_string());
    Figure::new(vec![Trace::Sunburst(trace)], common_layout(&options.title))
}
