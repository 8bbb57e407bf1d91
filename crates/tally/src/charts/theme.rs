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

use crate::charts::figure::{Font, Layout, Margin, Title};

pub const FONT_FAMILY: &str = "Arial, sans-serif";
pub const HEADING_COLOR: &str = "#2c3e50";
pub const CHART_HEIGHT: u32 = 400;
pub const CHART_WIDTH: u32 = 500;
pub const CHART_MARGIN: Margin = Margin {
    t: 40,
    b: 40,
    l: 40,
    r: 40,
};

/// Named colour sequence, cycled when a chart has more categories than
/// colours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub colors: &'static [&'static str],
}
impl Palette {
    pub fn cycle(&self, n: usize) -> Vec<String> {
        self.colors
            .iter()
            .cycle()
            .take(if self.colors.is_empty() { 0 } else { n })
            .map(|c| c.to_string())
            .collect()
    }
}

pub const SET3: Palette = Palette {
    name: "Set3",
    colors: &[
        "rgb(141,211,199)",
        "rgb(255,255,179)",
        "rgb(190,186,218)",
        "rgb(251,128,114)",
        "rgb(128,177,211)",
        "rgb(253,180,98)",
        "rgb(179,222,105)",
        "rgb(252,205,229)",
        "rgb(217,217,217)",
        "rgb(188,128,189)",
        "rgb(204,235,197)",
        "rgb(255,237,111)",
    ],
};
pub const PASTEL1: Palette = Palette {
    name: "Pastel1",
    colors: &[
        "rgb(251,180,174)",
        "rgb(179,205,227)",
        "rgb(204,235,197)",
        "rgb(222,203,228)",
        "rgb(254,217,166)",
        "rgb(255,255,204)",
        "rgb(229,216,189)",
        "rgb(253,218,236)",
        "rgb(242,242,242)",
    ],
};
pub const PASTEL2: Palette = Palette {
    name: "Pastel2",
    colors: &[
        "rgb(179,226,205)",
        "rgb(253,205,172)",
        "rgb(203,213,232)",
        "rgb(244,202,228)",
        "rgb(230,245,201)",
        "rgb(255,242,174)",
        "rgb(241,226,204)",
        "rgb(204,204,204)",
    ],
};
pub const BOLD: Palette = Palette {
    name: "Bold",
    colors: &[
        "rgb(127,60,141)",
        "rgb(17,165,121)",
        "rgb(57,105,172)",
        "rgb(242,183,1)",
        "rgb(231,63,116)",
        "rgb(128,186,90)",
        "rgb(230,131,16)",
        "rgb(0,134,149)",
        "rgb(207,28,144)",
        "rgb(249,123,114)",
        "rgb(165,170,153)",
    ],
};
pub const SET2: Palette = Palette {
    name: "Set2",
    colors: &[
        "rgb(102,194,165)",
        "rgb(252,141,98)",
        "rgb(141,160,203)",
        "rgb(231,138,195)",
        "rgb(166,216,84)",
        "rgb(255,217,47)",
        "rgb(229,196,148)",
        "rgb(179,179,179)",
    ],
};
pub const DARK2: Palette = Palette {
    name: "Dark2",
    colors: &[
        "rgb(27,158,119)",
        "rgb(217,95,2)",
        "rgb(117,112,179)",
        "rgb(231,41,138)",
        "rgb(102,166,30)",
        "rgb(230,171,2)",
        "rgb(166,118,29)",
        "rgb(102,102,102)",
    ],
};
pub const PLASMA: Palette = Palette {
    name: "Plasma",
    colors: &[
        "#0d0887", "#46039f", "#7201a8", "#9c179e", "#bd3786", "#d8576b", "#ed7953", "#fb9f3a",
        "#fdca26", "#f0f921",
    ],
};
/// Continuous scale name understood by Plotly.js.
pub const VIRIDIS_SCALE: &str = "Viridis";

/// Layout shared by every chart on the page.
pub fn common_layout(title: &str) -> Layout {
    let mut layout = Layout::titled(title)
        .with_size(CHART_HEIGHT, CHART_WIDTH)
        .with_margin(CHART_MARGIN);
    layout.title = Title {
        text: title.to_string(),
        font: Some(Font {
            family: None,
            size: Some(16),
            color: Some(HEADING_COLOR.to_string()),
        }),
    };
    layout.font = Some(Font {
        family: Some(FONT_FAMILY.to_string()),
        size: Some(12),
        color: None,
    });
    layout.paper_bgcolor = Some("white".to_string());
    layout.plot_bgcolor = Some("white".to_string());
    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palettes_cycle_past_their_length() {
        let colors = PASTEL2.cycle(10);
        assert_eq!(colors.len(), 10);
        assert_eq!(colors[8], PASTEL2.colors[0]);
    }

    #[test]
    fn common_layout_sets_fixed_geometry() {
        let layout = common_layout("Gender Distribution");
        assert_eq!(layout.height, Some(400));
        assert_eq!(layout.width, Some(500));
        assert_eq!(layout.margin, Some(CHART_MARGIN));
        let font = layout.title.font.unwrap();
        assert_eq!(font.size, Some(16));
        assert_eq!(font.color.as_deref(), Some(HEADING_COLOR));
    }
}
