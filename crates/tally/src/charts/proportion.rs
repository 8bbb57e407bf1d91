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
use crate::charts::figure::{Figure, Marker, PieTrace, Trace};
use crate::charts::theme::{common_layout, Palette};

const EXPLODE_PULL: f64 = 0.1;

#[derive(Debug, Clone)]
pub struct PieOptions {
    pub title: String,
    pub palette: Palette,
    pub hole: Option<f64>,
    pub explode_first: bool,
}
impl PieOptions {
    pub fn new(title: &str, palette: Palette) -> Self {
        Self {
            title: title.to_string(),
            palette,
            hole: None,
            explode_first: false,
        }
    }
    /// Turns the pie into a donut with the given hole fraction.
    pub fn with_hole(mut self, hole: f64) -> Self {
        self.hole = Some(hole.clamp(0.0, 0.95));
        self
    }
    pub fn with_exploded_first(mut self) -> Self {
        self.explode_first = true;
        self
    }
}

/// Pie or donut with percentage and label drawn inside each slice.
pub fn pie(table: &FrequencyTable, options: &PieOptions) -> Figure {
    let pull = options.explode_first.then(|| {
        (0..table.len())
            .map(|i| if i == 0 { EXPLODE_PULL } else { 0.0 })
            .collect()
    });
    let trace = PieTrace {
        labels: table.labels(),
        values: table.counts(),
        hole: options.hole,
        pull,
        textinfo: "percent+label".to_string(),
        textposition: "inside".to_string(),
        marker: Marker {
            colors: Some(options.palette.cycle(table.len())),
            ..Default::default()
        },
    };
    Figure::new(vec![Trace::Pie(trace)], common_layout(&options.title))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::theme::{BOLD, SET3};

    fn sample() -> FrequencyTable {
        FrequencyTable::from_values([Some("India"), Some("India"), Some("Germany")])
    }

    #[test]
    fn plain_pie_has_no_hole_or_pull() {
        let figure = pie(&sample(), &PieOptions::new("Country", SET3));
        let Trace::Pie(trace) = &figure.data[0] else {
            panic!("expected pie trace");
        };
        assert_eq!(trace.labels, vec!["India", "Germany"]);
        assert_eq!(trace.values, vec![2, 1]);
        assert!(trace.hole.is_none());
        assert!(trace.pull.is_none());
        assert_eq!(trace.textinfo, "percent+label");
    }

    #[test]
    fn donut_explodes_only_the_first_slice() {
        let options = PieOptions::new("Influence", BOLD)
            .with_hole(0.4)
            .with_exploded_first();
        let figure = pie(&sample(), &options);
        let Trace::Pie(trace) = &figure.data[0] else {
            panic!("expected pie trace");
        };
        assert_eq!(trace.hole, Some(0.4));
        assert_eq!(trace.pull.as_deref(), Some(&[0.1, 0.0][..]));
        assert_eq!(trace.marker.colors.as_ref().map(Vec::len), Some(2));
    }
}
