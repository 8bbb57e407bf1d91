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

use crate::charts::theme::{FONT_FAMILY, HEADING_COLOR};
use crate::charts::Figure;
use crate::error::{Result, SerialisationError};
use crate::grid::DataGrid;
use crate::layout::script::{embed_json, CLIENT_SCRIPT, PLOTLY_CDN};
use crate::layout::style::Style;
use crate::toggle::{
    ToggleBinding, EMPLOYER_INFO, EXPLANATION_PANEL, TABLE_PANEL, TOGGLES, WORK_ENV_INFO,
};
use indexmap::IndexMap;
use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const PAGE_TITLE: &str = "GenZ Career Aspirations Dashboard";
pub const EMPLOYER_INFO_TEXT: &str = "This chart shows how likely GenZ is to stay with one employer for 3+ years. Most prefer flexibility, but some value stability if the company is right.";
pub const WORK_ENV_INFO_TEXT: &str = "This section shows the preferred work environments and employer types for GenZ. The data reveals their preferences for learning environments and potential employers.";
pub const EXPLANATION_TEXT: &str = "Each chart counts the answers to one question of the GenZ career aspirations survey. Press Play on the animated bar charts to reveal the categories one at a time, and use the floating buttons to open the response overview.";

const CARD_SHADOW: &str = "0 4px 8px 0 rgba(0,0,0,0.1)";
const FLOAT_SHADOW: &str = "0 4px 8px 0 rgba(0,0,0,0.2)";
const POPOVER_SHADOW: &str = "0 2px 8px 0 rgba(0,0,0,0.15)";

/// Chart and grid ids referenced by the page.
pub mod ids {
    pub const COUNTRY: &str = "country-chart";
    pub const GENDER: &str = "gender-chart";
    pub const INFLUENCE: &str = "influence-chart";
    pub const EDUCATION: &str = "education-chart";
    pub const EMPLOYER_DURATION: &str = "employer-duration-chart";
    pub const MISSION: &str = "mission-chart";
    pub const EMPLOYERS: &str = "employers-chart";
    pub const CAREER: &str = "career-chart";
    pub const MANAGER: &str = "manager-chart";
    pub const LEARNING_TABLE: &str = "learning-table";
    pub const OVERVIEW_TABLE: &str = "overview-table";
    pub const ALL_CHARTS: [&str; 9] = [
        COUNTRY,
        GENDER,
        INFLUENCE,
        EDUCATION,
        EMPLOYER_DURATION,
        MISSION,
        EMPLOYERS,
        CAREER,
        MANAGER,
    ];
}

/// Everything the page needs, computed ahead of rendering.
#[derive(Debug)]
pub struct PageContent<'a> {
    pub figures: &'a IndexMap<&'static str, Figure>,
    pub learning_grid: &'a DataGrid,
    pub overview_grid: &'a DataGrid,
    pub respondents: usize,
}

fn heading_style(size: &str) -> Style {
    Style::from([
        ("color", HEADING_COLOR),
        ("font-family", FONT_FAMILY),
        ("font-size", size),
    ])
}

fn card_style(first: bool) -> Style {
    let style = Style::from([
        ("width", "48%"),
        ("display", "inline-block"),
        ("vertical-align", "top"),
        ("box-shadow", CARD_SHADOW),
        ("background-color", "white"),
    ]);
    if first {
        style
    } else {
        style.with("margin-left", "2%")
    }
}

fn row_style() -> Style {
    Style::from([("margin-bottom", "20px"), ("display", "flex"), ("flex-wrap", "wrap")])
}

fn floating_button_style(bottom: &str, color: &str) -> Style {
    Style::from([
        ("position", "fixed"),
        ("bottom", bottom),
        ("right", "40px"),
        ("width", "60px"),
        ("height", "60px"),
        ("border-radius", "50%"),
        ("background-color", color),
        ("color", "white"),
        ("font-size", "32px"),
        ("box-shadow", FLOAT_SHADOW),
        ("border", "none"),
        ("cursor", "pointer"),
        ("z-index", "1000"),
    ])
}

fn info_button_style() -> Style {
    Style::from([
        ("position", "absolute"),
        ("top", "15px"),
        ("right", "15px"),
        ("width", "40px"),
        ("height", "40px"),
        ("border-radius", "50%"),
        ("background-color", "#ffb300"),
        ("color", "white"),
        ("font-size", "22px"),
        ("box-shadow", "0 2px 4px 0 rgba(0,0,0,0.15)"),
        ("border", "none"),
        ("cursor", "pointer"),
        ("z-index", "10"),
        ("padding", "0"),
    ])
}

/// Initial style of an info popover; hidden until its button is clicked.
pub fn popover_style() -> Style {
    Style::from([
        ("display", "none"),
        ("position", "absolute"),
        ("top", "60px"),
        ("right", "15px"),
        ("background-color", "white"),
        ("padding", "12px"),
        ("border-radius", "8px"),
        ("box-shadow", POPOVER_SHADOW),
        ("width", "260px"),
        ("font-size", "13px"),
        ("color", "#333"),
        ("z-index", "20"),
    ])
}

fn panel_style(bottom: &str, width: &str) -> Style {
    Style::from([
        ("display", "none"),
        ("position", "fixed"),
        ("bottom", bottom),
        ("right", "40px"),
        ("background-color", "white"),
        ("padding", "15px"),
        ("border-radius", "8px"),
        ("box-shadow", FLOAT_SHADOW),
        ("width", width),
        ("z-index", "999"),
    ])
}

fn graph(id: &str) -> Markup {
    html! { div id=(id) class="graph" {} }
}

fn section_heading(text: &str) -> Markup {
    html! { h2 style=(heading_style("18px").to_css()) { (text) } }
}

fn card(first: bool, content: Markup) -> Markup {
    html! { div class="card" style=(card_style(first).to_css()) { (content) } }
}

/// Chart card with an info button and its popover pinned to the corner.
fn card_with_info(first: bool, content: Markup, binding: &ToggleBinding, text: &str) -> Markup {
    html! {
        div class="card" style=(card_style(first).to_css()) {
            div style="position: relative; width: 100%" {
                (content)
                button id=(binding.button_id) type="button" style=(info_button_style().to_css()) { "ℹ️" }
                div id=(binding.target_id) style=(popover_style().to_css()) { (text) }
            }
        }
    }
}

fn chart_row(left: Markup, right: Markup) -> Markup {
    html! { div class="row" style=(row_style().to_css()) { (left) (right) } }
}

pub fn render_page(content: &PageContent<'_>) -> Result<Markup> {
    let figures_json = serde_json::to_string(content.figures).map_err(SerialisationError::from)?;
    let bindings_json = serde_json::to_string(&TOGGLES).map_err(SerialisationError::from)?;
    let body_style = Style::from([
        ("width", "90%"),
        ("margin", "auto"),
        ("background-color", "#f8f9fa"),
        ("padding", "15px"),
    ]);
    let title_style = heading_style("24px")
        .with("text-align", "center")
        .with("margin-bottom", "20px");
    let markup = html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (PAGE_TITLE) }
                script src=(PLOTLY_CDN) {}
            }
            body style="margin: 0; background-color: #f8f9fa" {
                div id="dashboard" style=(body_style.to_css()) {
                    h1 style=(title_style.to_css()) { (PAGE_TITLE) }
                    p class="respondents" style=(heading_style("13px").to_css()) {
                        (content.respondents) " respondents"
                    }

                    (section_heading("1. Demographics"))
                    (chart_row(card(true, graph(ids::COUNTRY)), card(false, graph(ids::GENDER))))

                    (section_heading("2. Career Influences & Education"))
                    (chart_row(card(true, graph(ids::INFLUENCE)), card(false, graph(ids::EDUCATION))))

                    (section_heading("3. Employer Preferences"))
                    (chart_row(
                        card_with_info(true, graph(ids::EMPLOYER_DURATION), &EMPLOYER_INFO, EMPLOYER_INFO_TEXT),
                        card(false, graph(ids::MISSION)),
                    ))

                    (section_heading("4. Work Environment"))
                    (chart_row(
                        card_with_info(true, html! { div style="padding: 10px" { (content.learning_grid.render()) } }, &WORK_ENV_INFO, WORK_ENV_INFO_TEXT),
                        card(false, graph(ids::EMPLOYERS)),
                    ))

                    (section_heading("5. Career Aspirations"))
                    (chart_row(card(true, graph(ids::CAREER)), card(false, graph(ids::MANAGER))))
                }

                button id=(TABLE_PANEL.button_id) type="button" title="Response overview"
                    style=(floating_button_style("40px", "#1da1f2").to_css()) { span { "⟨⟩" } }
                div id=(TABLE_PANEL.target_id) style=(panel_style("110px", "480px").to_css()) {
                    h3 style=(heading_style("16px").to_css()) { "Response overview" }
                    (content.overview_grid.render())
                }

                button id=(EXPLANATION_PANEL.button_id) type="button" title="About this dashboard"
                    style=(floating_button_style("120px", "#ffb300").to_css()) { span { "ℹ️" } }
                div id=(EXPLANATION_PANEL.target_id) style=(panel_style("190px", "300px").to_css()) {
                    (EXPLANATION_TEXT)
                }

                script type="application/json" id="figure-data" { (PreEscaped(embed_json(&figures_json))) }
                script type="application/json" id="toggle-bindings" { (PreEscaped(embed_json(&bindings_json))) }
                script { (PreEscaped(CLIENT_SCRIPT)) }
            }
        }
    };
    Ok(markup)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::FrequencyTable;
    use crate::toggle::Visibility;

    #[test]
    fn toggle_targets_start_hidden() {
        assert_eq!(Visibility::from_style(Some(&popover_style())), Visibility::Hidden);
        assert_eq!(panel_style("40px", "300px").display(), Some("none"));
    }

    #[test]
    fn page_lists_sections_in_order() {
        let figures = IndexMap::new();
        let grid = DataGrid::from_frequency(ids::LEARNING_TABLE, &FrequencyTable::default(), "Environment", "Count");
        let overview = DataGrid::new(ids::OVERVIEW_TABLE, vec!["Question".into()], Vec::new());
        let html = render_page(&PageContent {
            figures: &figures,
            learning_grid: &grid,
            overview_grid: &overview,
            respondents: 0,
        })
        .unwrap()
        .into_string();
        let positions: Vec<usize> = [
            "1. Demographics",
            "2. Career Influences &amp; Education",
            "3. Employer Preferences",
            "4. Work Environment",
            "5. Career Aspirations",
        ]
        .iter()
        .map(|heading| html.find(heading).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains(EMPLOYER_INFO_TEXT));
        assert!(html.contains("id=\"figure-data\">{}</script>"));
    }
}
