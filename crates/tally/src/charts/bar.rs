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
use crate::charts::figure::{
    Axis, BarTrace, Figure, Marker, MarkerColor, Orientation, Series, Trace,
};
use crate::charts::theme::{common_layout, Palette};

#[derive(Debug, Clone)]
pub enum BarColoring {
    /// One palette colour per category.
    Categorical(Palette),
    /// Colour keyed on the count through a continuous Plotly scale.
    CountScale(&'static str),
}

#[derive(Debug, Clone)]
pub struct BarOptions {
    pub title: String,
    pub orientation: Orientation,
    pub coloring: BarColoring,
    pub category_title: String,
    pub value_title: String,
}
impl BarOptions {
    pub fn new(title: &str, orientation: Orientation, coloring: BarColoring) -> Self {
        Self {
            title: title.to_string(),
            orientation,
            coloring,
            category_title: "Response".to_string(),
            value_title: "Count".to_string(),
        }
    }
    pub fn with_axis_titles(mut self, category: &str, value: &str) -> Self {
        self.category_title = category.to_string();
        self.value_title = value.to_string();
        self
    }
}

/// Places labels and counts on the axes `orientation` calls for.
pub(crate) fn oriented(orientation: Orientation, labels: Vec<String>, counts: Vec<u64>) -> (Series, Series) {
    match orientation {
        Orientation::Vertical => (Series::Labels(labels), Series::Counts(counts)),
        Orientation::Horizontal => (Series::Counts(counts), Series::Labels(labels)),
    }
}

pub(crate) fn value_template(orientation: Orientation) -> &'static str {
    match orientation {
        Orientation::Vertical => "%{y}",
        Orientation::Horizontal => "%{x}",
    }
}

pub(crate) fn oriented_axes(orientation: Orientation, category: Axis, value: Axis) -> (Axis, Axis) {
    match orientation {
        Orientation::Vertical => (category, value),
        Orientation::Horizontal => (value, category),
    }
}

/// Bar chart with the count printed just outside each bar.
pub fn bar(table: &FrequencyTable, options: &BarOptions) -> Figure {
    let counts = table.counts();
    let marker = match &options.coloring {
        BarColoring::Categorical(palette) => Marker {
            color: Some(MarkerColor::PerPoint(palette.cycle(table.len()))),
            ..Default::default()
        },
        BarColoring::CountScale(scale) => Marker {
            color: Some(MarkerColor::Scale(counts.clone())),
            colorscale: Some(scale.to_string()),
            showscale: Some(true),
            ..Default::default()
        },
    };
    let (x, y) = oriented(options.orientation, table.labels(), counts);
    let trace = BarTrace {
        x,
        y,
        orientation: options.orientation,
        marker,
        texttemplate: Some(value_template(options.orientation).to_string()),
        textposition: Some("outside".to_string()),
        customdata: None,
        hovertemplate: None,
    };
    let category_axis = Axis {
        automargin: Some(true),
        ..Axis::titled(&options.category_title)
    };
    let (xaxis, yaxis) = oriented_axes(
        options.orientation,
        category_axis,
        Axis::titled(&options.value_title),
    );
    let layout = common_layout(&options.title).with_axes(xaxis, yaxis);
    Figure::new(vec![Trace::Bar(trace)], layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::theme::{PASTEL2, VIRIDIS_SCALE};

    fn sample() -> FrequencyTable {
        FrequencyTable::from_values([Some("Yes"), Some("No"), Some("Yes"), Some("Maybe")])
    }

    #[test]
    fn horizontal_bars_put_counts_on_x() {
        let options = BarOptions::new(
            "Abroad",
            Orientation::Horizontal,
            BarColoring::CountScale(VIRIDIS_SCALE),
        );
        let figure = bar(&sample(), &options);
        let Trace::Bar(trace) = &figure.data[0] else {
            panic!("expected bar trace");
        };
        assert_eq!(trace.x, Series::Counts(vec![2, 1, 1]));
        assert_eq!(trace.texttemplate.as_deref(), Some("%{x}"));
        assert_eq!(trace.textposition.as_deref(), Some("outside"));
        assert_eq!(trace.marker.colorscale.as_deref(), Some("Viridis"));
        let xaxis = figure.layout.xaxis.as_ref().unwrap();
        assert_eq!(xaxis.title.as_ref().unwrap().text, "Count");
    }

    #[test]
    fn vertical_bars_color_each_category() {
        let options = BarOptions::new(
            "Tenure",
            Orientation::Vertical,
            BarColoring::Categorical(PASTEL2),
        )
        .with_axis_titles("Response", "Number of People");
        let figure = bar(&sample(), &options);
        let Trace::Bar(trace) = &figure.data[0] else {
            panic!("expected bar trace");
        };
        assert_eq!(trace.categories(), &["Yes", "No", "Maybe"]);
        assert_eq!(trace.texttemplate.as_deref(), Some("%{y}"));
        assert!(matches!(&trace.marker.color, Some(MarkerColor::PerPoint(c)) if c.len() == 3));
        let yaxis = figure.layout.yaxis.as_ref().unwrap();
        assert_eq!(yaxis.title.as_ref().unwrap().text, "Number of People");
    }
}
