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

//! Builds every aggregate, figure and grid from the loaded survey, then
//! renders the page once. The result is immutable and shared by all
//! requests.

use crate::aggregate::{
    aggregate, wrapped_leaves, FrequencyTable, EMPLOYER_TENURE_LABELS, MISSING_LABEL,
    UNDEFINED_MISSION_LABELS, WRAP_WIDTH,
};
use crate::charts::theme::{BOLD, DARK2, PASTEL1, PASTEL2, PLASMA, SET2, SET3, VIRIDIS_SCALE};
use crate::charts::{
    bar, pie, reveal_bar, sunburst, treemap, BarColoring, BarOptions, Figure, HierarchyOptions,
    Orientation, PieOptions, RevealColoring, RevealOptions,
};
use crate::dataset::{Question, SurveyTable};
use crate::error::{Result, SerialisationError};
use crate::grid::DataGrid;
use crate::layout::{ids, render_page, PageContent};
use indexmap::IndexMap;
use tracing::{debug, info};

const GENDER_BAR: &str = "#b2bec3";
const GENDER_ACTIVE: &str = "#1da1f2";
const GENDER_FRAME_MS: u64 = 400;
const EMPLOYER_FRAME_MS: u64 = 300;

#[derive(Debug)]
pub struct Dashboard {
    row_count: usize,
    frequencies: IndexMap<Question, FrequencyTable>,
    figures: IndexMap<&'static str, Figure>,
    figure_json: IndexMap<&'static str, String>,
    learning_grid: DataGrid,
    overview_grid: DataGrid,
    page_html: String,
}

impl Dashboard {
    /// Fails on the first missing column or serialisation error.
    pub fn build(table: &SurveyTable) -> Result<Self> {
        table.require_all()?;
        let frequencies = Question::ALL
            .iter()
            .map(|&question| -> Result<_> { Ok((question, aggregate(table, question)?)) })
            .collect::<Result<IndexMap<_, _>>>()?;
        let counts = |question: Question| &frequencies[&question];

        let figures = build_figures(&counts);
        let figure_json = figures
            .iter()
            .map(|(&id, figure)| -> Result<_> {
                let json = figure.to_json().map_err(|source| SerialisationError::Figure {
                    figure: id.to_string(),
                    source,
                })?;
                debug!(figure = id, bytes = json.len(), "Serialised figure");
                Ok((id, json))
            })
            .collect::<Result<IndexMap<_, _>>>()?;

        let learning_grid = DataGrid::from_frequency(
            ids::LEARNING_TABLE,
            counts(Question::LearningEnvironment),
            "Environment",
            "Count",
        );
        let overview_grid = overview(table, &frequencies)?;
        let page_html = render_page(&PageContent {
            figures: &figures,
            learning_grid: &learning_grid,
            overview_grid: &overview_grid,
            respondents: table.row_count(),
        })?
        .into_string();

        info!(
            rows = table.row_count(),
            figures = figures.len(),
            page_bytes = page_html.len(),
            "Dashboard built"
        );
        Ok(Self {
            row_count: table.row_count(),
            frequencies,
            figures,
            figure_json,
            learning_grid,
            overview_grid,
            page_html,
        })
    }
    pub fn row_count(&self) -> usize {
        self.row_count
    }
    pub fn frequency(&self, question: Question) -> Option<&FrequencyTable> {
        self.frequencies.get(&question)
    }
    pub fn figure(&self, id: &str) -> Option<&Figure> {
        self.figures.get(id)
    }
    pub fn figure_json(&self, id: &str) -> Option<&str> {
        self.figure_json.get(id).map(String::as_str)
    }
    /// Figures keyed by the id of the element they are drawn into, in page order.
    pub fn figures(&self) -> impl Iterator<Item = (&'static str, &Figure)> {
        self.figures.iter().map(|(&id, figure)| (id, figure))
    }
    pub fn learning_grid(&self) -> &DataGrid {
        &self.learning_grid
    }
    pub fn overview_grid(&self) -> &DataGrid {
        &self.overview_grid
    }
    pub fn page_html(&self) -> &str {
        &self.page_html
    }
}

fn build_figures<'a>(
    counts: &impl Fn(Question) -> &'a FrequencyTable,
) -> IndexMap<&'static str, Figure> {
    let mut figures = IndexMap::new();
    figures.insert(
        ids::COUNTRY,
        pie(
            counts(Question::Country),
            &PieOptions::new("Distribution of Current Country", SET3),
        ),
    );
    figures.insert(
        ids::GENDER,
        reveal_bar(
            counts(Question::Gender),
            &RevealOptions::new(
                "Gender Distribution",
                Orientation::Vertical,
                RevealColoring::Highlight {
                    base: GENDER_BAR,
                    active: GENDER_ACTIVE,
                },
            )
            .with_frame_ms(GENDER_FRAME_MS)
            .with_axis_titles("Gender", "Count"),
        ),
    );
    figures.insert(
        ids::INFLUENCE,
        pie(
            counts(Question::CareerInfluence),
            &PieOptions::new("Key Factors Influencing Career Aspirations (Donut)", BOLD)
                .with_hole(0.4)
                .with_exploded_first(),
        ),
    );
    figures.insert(
        ids::EDUCATION,
        bar(
            counts(Question::HigherEducationAbroad),
            &BarOptions::new(
                "Pursue Higher Education Abroad (Self Sponsored)?",
                Orientation::Horizontal,
                BarColoring::CountScale(VIRIDIS_SCALE),
            ),
        ),
    );
    figures.insert(
        ids::EMPLOYER_DURATION,
        bar(
            &counts(Question::EmployerTenure).remapped(&EMPLOYER_TENURE_LABELS),
            &BarOptions::new(
                "Likelihood to Work for One Employer (3+ Years)",
                Orientation::Vertical,
                BarColoring::Categorical(PASTEL2),
            )
            .with_axis_titles("Response", "Number of People"),
        ),
    );
    figures.insert(
        ids::MISSION,
        pie(
            &counts(Question::UndefinedMission).remapped(&UNDEFINED_MISSION_LABELS),
            &PieOptions::new("Work for Company with Undefined Mission (Pie)", PASTEL1),
        ),
    );
    figures.insert(
        ids::EMPLOYERS,
        reveal_bar(
            &counts(Question::PreferredEmployer).sorted_ascending(),
            &RevealOptions::new(
                "Preferred Employers (Horizontal Bar)",
                Orientation::Horizontal,
                RevealColoring::Palette(PLASMA),
            )
            .with_frame_ms(EMPLOYER_FRAME_MS)
            .with_axis_titles("Employer", "Count")
            .with_hover_labels()
            .with_size(420, 600)
            .with_left_margin(120),
        ),
    );
    figures.insert(
        ids::CAREER,
        treemap(
            &wrapped_leaves(counts(Question::AspirationalJob), WRAP_WIDTH),
            &HierarchyOptions::new("Aspirational Career (Treemap)", SET2),
        ),
    );
    figures.insert(
        ids::MANAGER,
        sunburst(
            &wrapped_leaves(counts(Question::ManagerType), WRAP_WIDTH),
            &HierarchyOptions::new("Preferred Manager Type (Sunburst)", DARK2),
        ),
    );
    figures
}

/// One row per question: answered cells and distinct answers.
fn overview(
    table: &SurveyTable,
    frequencies: &IndexMap<Question, FrequencyTable>,
) -> Result<DataGrid> {
    let rows = frequencies
        .iter()
        .map(|(&question, counts)| -> Result<_> {
            let answered = table.column(question)?.non_null_count();
            let distinct = counts.iter().filter(|(label, _)| *label != MISSING_LABEL).count();
            Ok(vec![
                question.short_name().to_string(),
                answered.to_string(),
                distinct.to_string(),
            ])
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(DataGrid::new(
        ids::OVERVIEW_TABLE,
        vec![
            "Question".to_string(),
            "Responses".to_string(),
            "Distinct answers".to_string(),
        ],
        rows,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::SurveyRow;

    fn survey(rows: &[[&str; 10]]) -> SurveyTable {
        let headers = Question::ALL.iter().map(|q| q.header().to_string()).collect();
        let rows = rows
            .iter()
            .map(|cells| {
                SurveyRow::new(
                    cells
                        .iter()
                        .map(|c| (!c.is_empty()).then(|| c.to_string()))
                        .collect(),
                )
            })
            .collect();
        SurveyTable::new(headers, rows)
    }

    fn sample() -> SurveyTable {
        survey(&[
            ["India", "Male", "Parents", "Yes", "I will work for 3 years or more", "No", "Self-paced", "Google", "Engineer", "Mentor"],
            ["India", "Female", "Parents", "No", "No way, 3 years with one employer is crazy", "Maybe", "Self-paced", "Google", "Designer", "Coach"],
            ["USA", "Female", "Media", "Yes", "No way, 3 years with one employer is crazy", "", "Instructor-led", "Startup", "Engineer", "Mentor"],
        ])
    }

    #[test]
    fn builds_every_figure() {
        let dashboard = Dashboard::build(&sample()).unwrap();
        let built: Vec<_> = dashboard.figures().map(|(id, _)| id).collect();
        assert_eq!(built, ids::ALL_CHARTS);
        for id in ids::ALL_CHARTS {
            assert!(dashboard.figure_json(id).is_some(), "{id}");
        }
        assert_eq!(dashboard.row_count(), 3);
    }

    #[test]
    fn tenure_labels_are_shortened() {
        let dashboard = Dashboard::build(&sample()).unwrap();
        let json: serde_json::Value =
            serde_json::from_str(dashboard.figure_json(ids::EMPLOYER_DURATION).unwrap()).unwrap();
        assert_eq!(json["data"][0]["x"], serde_json::json!(["No way", "Yes, 3+ years"]));
        assert_eq!(json["data"][0]["y"], serde_json::json!([2, 1]));
    }

    #[test]
    fn overview_counts_answers() {
        let dashboard = Dashboard::build(&sample()).unwrap();
        let mission = dashboard
            .overview_grid()
            .rows()
            .iter()
            .find(|row| row[0] == Question::UndefinedMission.short_name())
            .unwrap();
        assert_eq!(mission[1], "2");
        assert_eq!(mission[2], "2");
    }

    #[test]
    fn missing_column_aborts() {
        let table = SurveyTable::new(vec!["Gender".into()], vec![SurveyRow::new(vec![Some("Male".into())])]);
        let err = Dashboard::build(&table).unwrap_err();
        assert_eq!(err.category(), "Schema");
    }
}
