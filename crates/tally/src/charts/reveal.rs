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

//! Bar charts that reveal one category per animation frame.
//!
//! Frame `k` shows categories `0..=k` at their counts and the rest at zero,
//! so the last frame is the fully revealed chart. The base trace starts
//! with every bar at zero and a Play button steps through the frames.

use crate::aggregate::FrequencyTable;
use crate::charts::bar::{oriented, oriented_axes, value_template};
use crate::charts::figure::{
    Axis, BarTrace, Figure, Font, Frame, Marker, MarkerColor, MenuButton, Orientation, Trace,
    UpdateMenu,
};
use crate::charts::theme::{common_layout, Palette};
use serde_json::json;

pub const MIN_FRAME_MS: u64 = 300;
pub const MAX_FRAME_MS: u64 = 400;
/// Headroom on the value axis so outside labels stay visible.
const RANGE_HEADROOM: f64 = 1.15;

#[derive(Debug, Clone)]
pub enum RevealColoring {
    /// Every bar in `base`, the bar revealed in the current frame in `active`.
    Highlight {
        base: &'static str,
        active: &'static str,
    },
    Palette(Palette),
}

#[derive(Debug, Clone)]
pub struct RevealOptions {
    pub title: String,
    pub orientation: Orientation,
    pub frame_ms: u64,
    pub coloring: RevealColoring,
    pub category_title: String,
    pub value_title: String,
    pub hover_labels: bool,
    pub size: Option<(u32, u32)>,
    pub left_margin: Option<u32>,
}
impl RevealOptions {
    pub fn new(title: &str, orientation: Orientation, coloring: RevealColoring) -> Self {
        Self {
            title: title.to_string(),
            orientation,
            frame_ms: MAX_FRAME_MS,
            coloring,
            category_title: "Category".to_string(),
            value_title: "Count".to_string(),
            hover_labels: false,
            size: None,
            left_margin: None,
        }
    }
    /// Frame interval, held within the 300–400ms window.
    pub fn with_frame_ms(mut self, frame_ms: u64) -> Self {
        self.frame_ms = frame_ms.clamp(MIN_FRAME_MS, MAX_FRAME_MS);
        self
    }
    pub fn with_axis_titles(mut self, category: &str, value: &str) -> Self {
        self.category_title = category.to_string();
        self.value_title = value.to_string();
        self
    }
    /// Adds the category name to each bar's hover text.
    pub fn with_hover_labels(mut self) -> Self {
        self.hover_labels = true;
        self
    }
    pub fn with_size(mut self, height: u32, width: u32) -> Self {
        self.size = Some((height, width));
        self
    }
    pub fn with_left_margin(mut self, left: u32) -> Self {
        self.left_margin = Some(left);
        self
    }
}

/// Value sequence for each frame: frame `k` keeps `counts[..=k]` and zeroes
/// the rest.
pub fn reveal_frames(counts: &[u64]) -> Vec<Vec<u64>> {
    (0..counts.len())
        .map(|k| {
            counts
                .iter()
                .enumerate()
                .map(|(i, &c)| if i <= k { c } else { 0 })
                .collect()
        })
        .collect()
}

fn colors(coloring: &RevealColoring, n: usize, active: Option<usize>) -> MarkerColor {
    match coloring {
        RevealColoring::Highlight { base, active: hot } => match active {
            Some(k) => MarkerColor::PerPoint(
                (0..n)
                    .map(|i| (if i == k { hot } else { base }).to_string())
                    .collect(),
            ),
            None => MarkerColor::Single(base.to_string()),
        },
        RevealColoring::Palette(palette) => MarkerColor::PerPoint(palette.cycle(n)),
    }
}

fn reveal_trace(
    options: &RevealOptions,
    labels: &[String],
    values: Vec<u64>,
    active: Option<usize>,
) -> Trace {
    let (x, y) = oriented(options.orientation, labels.to_vec(), values);
    let (customdata, hovertemplate) = if options.hover_labels {
        let template = format!(
            "<b>%{{customdata}}</b><br>Count: {}<extra></extra>",
            value_template(options.orientation)
        );
        (Some(labels.to_vec()), Some(template))
    } else {
        (None, None)
    };
    Trace::Bar(BarTrace {
        x,
        y,
        orientation: options.orientation,
        marker: Marker {
            color: Some(colors(&options.coloring, labels.len(), active)),
            ..Default::default()
        },
        texttemplate: Some(value_template(options.orientation).to_string()),
        textposition: Some("outside".to_string()),
        customdata,
        hovertemplate,
    })
}

fn play_menu(frame_ms: u64) -> UpdateMenu {
    UpdateMenu {
        kind: "buttons".to_string(),
        showactive: false,
        buttons: vec![MenuButton {
            label: "Play".to_string(),
            method: "animate".to_string(),
            args: json!([null, {"frame": {"duration": frame_ms, "redraw": true}, "fromcurrent": true}]),
        }],
    }
}

pub fn reveal_bar(table: &FrequencyTable, options: &RevealOptions) -> Figure {
    let labels = table.labels();
    let counts = table.counts();
    let frames = reveal_frames(&counts)
        .into_iter()
        .enumerate()
        .map(|(k, values)| Frame {
            name: k.to_string(),
            data: vec![reveal_trace(options, &labels, values, Some(k))],
        })
        .collect();
    let base = reveal_trace(options, &labels, vec![0; labels.len()], None);

    let peak = counts.iter().copied().max().unwrap_or(0).max(1) as f64;
    let value_axis = Axis {
        range: Some([0.0, (peak * RANGE_HEADROOM).ceil()]),
        ..Axis::titled(&options.value_title)
    };
    let category_axis = Axis {
        automargin: Some(true),
        tickfont: (options.orientation == Orientation::Horizontal).then(|| Font {
            size: Some(11),
            ..Default::default()
        }),
        ..Axis::titled(&options.category_title)
    };
    let (xaxis, yaxis) = oriented_axes(options.orientation, category_axis, value_axis);
    let mut layout = common_layout(&options.title)
        .with_axes(xaxis, yaxis)
        .with_menu(play_menu(options.frame_ms));
    if let Some((height, width)) = options.size {
        layout = layout.with_size(height, width);
    }
    if let (Some(left), Some(margin)) = (options.left_margin, layout.margin.as_mut()) {
        margin.l = left;
    }
    Figure::new(vec![base], layout).with_frames(frames)
}
