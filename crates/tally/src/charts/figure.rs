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

//! Typed subset of the Plotly.js figure schema. Only the attributes the
//! dashboard sets are modelled; everything serialises to the JSON shape
//! `Plotly.newPlot` accepts.

use serde::Serialize;
use serde_json::Value as JsonValue;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<Frame>,
}
impl Figure {
    pub fn new(data: Vec<Trace>, layout: Layout) -> Self {
        Self {
            data,
            layout,
            frames: Vec::new(),
        }
    }
    pub fn with_frames(mut self, frames: Vec<Frame>) -> Self {
        self.frames = frames;
        self
    }
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie(PieTrace),
    Bar(BarTrace),
    Treemap(HierarchyTrace),
    Sunburst(HierarchyTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull: Option<Vec<f64>>,
    pub textinfo: String,
    pub textposition: String,
    pub marker: Marker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Orientation {
    #[serde(rename = "v")]
    Vertical,
    #[serde(rename = "h")]
    Horizontal,
}

/// Axis data: category labels on one axis, counts on the other.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Series {
    Labels(Vec<String>),
    Counts(Vec<u64>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Series,
    pub y: Series,
    pub orientation: Orientation,
    pub marker: Marker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texttemplate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textposition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customdata: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
}
impl BarTrace {
    /// Counts along the value axis, whichever way the bars point.
    pub fn values(&self) -> &[u64] {
        let series = match self.orientation {
            Orientation::Vertical => &self.y,
            Orientation::Horizontal => &self.x,
        };
        match series {
            Series::Counts(counts) => counts.as_slice(),
            Series::Labels(_) => &[],
        }
    }
    pub fn categories(&self) -> &[String] {
        let series = match self.orientation {
            Orientation::Vertical => &self.x,
            Orientation::Horizontal => &self.y,
        };
        match series {
            Series::Labels(labels) => labels.as_slice(),
            Series::Counts(_) => &[],
        }
    }
}

/// Single-level treemap or sunburst: every node's parent is the root `""`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HierarchyTrace {
    pub ids: Vec<String>,
    pub labels: Vec<String>,
    pub parents: Vec<String>,
    pub values: Vec<u64>,
    pub branchvalues: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub textinfo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customdata: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
    pub marker: Marker,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<MarkerColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showscale: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarkerColor {
    Single(String),
    PerPoint(Vec<String>),
    Scale(Vec<u64>),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    pub name: String,
    pub data: Vec<Trace>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Margin {
    pub t: u32,
    pub b: u32,
    pub l: u32,
    pub r: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automargin: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickfont: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}
impl Axis {
    pub fn titled(text: &str) -> Self {
        Self {
            title: Some(Title {
                text: text.to_string(),
                font: None,
            }),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateMenu {
    #[serde(rename = "type")]
    pub kind: String,
    pub showactive: bool,
    pub buttons: Vec<MenuButton>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuButton {
    pub label: String,
    pub method: String,
    pub args: JsonValue,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub updatemenus: Vec<UpdateMenu>,
}
impl Layout {
    pub fn titled(text: &str) -> Self {
        Self {
            title: Title {
                text: text.to_string(),
                font: None,
            },
            font: None,
            paper_bgcolor: None,
            plot_bgcolor: None,
            margin: None,
            height: None,
            width: None,
            xaxis: None,
            yaxis: None,
            showlegend: None,
            updatemenus: Vec::new(),
        }
    }
    pub fn with_size(mut self, height: u32, width: u32) -> Self {
        self.height = Some(height);
        self.width = Some(width);
        self
    }
    pub fn with_margin(mut self, margin: Margin) -> Self {
        self.margin = Some(margin);
        self
    }
    pub fn with_axes(mut self, xaxis: Axis, yaxis: Axis) -> Self {
        self.xaxis = Some(xaxis);
        self.yaxis = Some(yaxis);
        self
    }
    pub fn with_menu(mut self, menu: UpdateMenu) -> Self {
        self.updatemenus.push(menu);
        self
    }
}
