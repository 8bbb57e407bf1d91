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

use std::time::Duration;
use tally::{DashboardError, DatasetLoader, Question};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn serve(status: u16, body: String) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/survey.csv"))
        .respond_with(ResponseTemplate::new(status).set_body_string(body))
        .mount(&server)
        .await;
    server
}

fn loader(server: &MockServer) -> DatasetLoader {
    DatasetLoader::new(format!("{}/survey.csv", server.uri())).with_timeout(Duration::from_secs(5))
}

#[tokio::test]
async fn test_fetch_parses_survey() {
    let server = serve(200, common::sample_csv()).await;
    let table = loader(&server).fetch().await.unwrap();
    assert_eq!(table.row_count(), 6);
    table.require_all().unwrap();
    let gender = table.column(Question::Gender).unwrap();
    assert_eq!(gender.non_null_count(), 3);
}

#[tokio::test]
async fn test_fetch_not_found_is_unavailable() {
    let server = serve(404, "missing".to_string()).await;
    let err = loader(&server).fetch().await.unwrap_err();
    match err {
        DashboardError::DataUnavailable { reason, .. } => assert!(reason.contains("404")),
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn test_fetch_empty_body_is_unavailable() {
    let server = serve(200, String::new()).await;
    let err = loader(&server).fetch().await.unwrap_err();
    assert!(matches!(err, DashboardError::DataUnavailable { .. }));
    assert_eq!(err.category(), "Data");
}

#[tokio::test]
async fn test_fetch_header_only_is_unavailable() {
    let server = serve(200, common::survey_csv(&[])).await;
    let err = loader(&server).fetch().await.unwrap_err();
    assert!(matches!(err, DashboardError::DataUnavailable { .. }));
}

#[tokio::test]
async fn test_fetch_unreachable_host_is_unavailable() {
    let server = MockServer::start().await;
    let url = format!("{}/survey.csv", server.uri());
    drop(server);
    let err = DatasetLoader::new(url)
        .with_timeout(Duration::from_secs(2))
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, DashboardError::DataUnavailable { .. }));
}

#[tokio::test]
async fn test_fetch_sends_configured_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/survey.csv"))
        .and(header("user-agent", "survey-dashboard-test/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(common::sample_csv()))
        .expect(1)
        .mount(&server)
        .await;
    let table = loader(&server)
        .with_user_agent("survey-dashboard-test/1.0")
        .fetch()
        .await
        .unwrap();
    assert_eq!(table.row_count(), 6);
}
