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

mod common;

use serde_json::{json, Value};
use tally::layout::ids;
use tally::{Dashboard, Question, SurveyTable, TOGGLES};

fn dashboard() -> Dashboard {
    let csv = common::sample_csv();
    let table = SurveyTable::from_csv_reader(csv.as_bytes(), "fixture").unwrap();
    Dashboard::build(&table).unwrap()
}

fn figure(dashboard: &Dashboard, id: &str) -> Value {
    serde_json::from_str(dashboard.figure_json(id).unwrap()).unwrap()
}

#[test]
fn test_gender_reveal_ends_on_full_counts() {
    let dashboard = dashboard();
    let gender = figure(&dashboard, ids::GENDER);
    let frames = gender["frames"].as_array().unwrap();
    assert_eq!(frames.len(), 3);
    let last = &frames[2]["data"][0];
    assert_eq!(last["x"], json!(["(no response)", "Female", "Male"]));
    assert_eq!(last["y"], json!([3, 2, 1]));
    assert_eq!(frames[0]["data"][0]["y"], json!([3, 0, 0]));
    assert_eq!(gender["data"][0]["y"], json!([0, 0, 0]));
    assert_eq!(
        gender["layout"]["updatemenus"][0]["buttons"][0]["args"][1]["frame"]["duration"],
        400
    );
}

#[test]
fn test_tenure_chart_uses_short_labels() {
    let dashboard = dashboard();
    let tenure = figure(&dashboard, ids::EMPLOYER_DURATION);
    assert_eq!(tenure["data"][0]["x"], json!(["No way", "Yes, 3+ years"]));
    assert_eq!(tenure["data"][0]["y"], json!([5, 1]));
    assert_eq!(tenure["layout"]["yaxis"]["title"]["text"], "Number of People");
}

#[test]
fn test_employer_reveal_is_sorted_ascending() {
    let dashboard = dashboard();
    let employers = figure(&dashboard, ids::EMPLOYERS);
    let last = &employers["frames"][2]["data"][0];
    assert_eq!(last["y"], json!(["Government", "Startup", "Google"]));
    assert_eq!(last["x"], json!([1, 2, 3]));
    assert_eq!(last["orientation"], "h");
    assert_eq!(employers["layout"]["height"], 420);
    assert_eq!(employers["layout"]["width"], 600);
}

#[test]
fn test_treemap_wraps_long_answers() {
    let dashboard = dashboard();
    let career = figure(&dashboard, ids::CAREER);
    let trace = &career["data"][0];
    assert_eq!(trace["type"], "treemap");
    assert_eq!(trace["ids"][1], "Business Operations in any organization where I can build and scale");
    assert_eq!(trace["labels"][1], "Business Operations in any organization <br>where I can build and scale");
    assert_eq!(trace["values"], json!([3, 2, 1]));
    assert_eq!(trace["parents"], json!(["", "", ""]));
}

#[test]
fn test_frequencies_cover_every_respondent() {
    let dashboard = dashboard();
    for question in Question::ALL {
        let counts = dashboard.frequency(question).unwrap();
        assert_eq!(counts.total(), 6, "{question}");
    }
}

#[test]
fn test_page_contains_every_container() {
    let dashboard = dashboard();
    let page = dashboard.page_html();
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("GenZ Career Aspirations Dashboard"));
    for id in ids::ALL_CHARTS.iter().chain([&ids::LEARNING_TABLE, &ids::OVERVIEW_TABLE]) {
        assert!(page.contains(&format!("id=\"{id}\"")), "{id}");
    }
    for binding in TOGGLES.iter() {
        assert!(page.contains(&format!("id=\"{}\"", binding.button_id)));
        assert!(page.contains(&format!("id=\"{}\"", binding.target_id)));
    }
    assert!(page.contains("cdn.plot.ly"));
}

#[test]
fn test_page_embeds_figures_without_raw_markup() {
    let dashboard = dashboard();
    let page = dashboard.page_html();
    let start = page.find("id=\"figure-data\">").unwrap() + "id=\"figure-data\">".len();
    let end = start + page[start..].find("</script>").unwrap();
    let embedded: Value = serde_json::from_str(&page[start..end]).unwrap();
    assert_eq!(embedded.as_object().unwrap().len(), 9);
    assert!(!page[start..end].contains("<br>"));
    assert_eq!(
        embedded[ids::CAREER]["data"][0]["labels"][1],
        "Business Operations in any organization <br>where I can build and scale"
    );
}
