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

use crate::dataset::table::SurveyTable;
use crate::error::{DashboardError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::info;

pub const SURVEY_CSV_URL: &str = "https://raw.githubusercontent.com/rohit951994/GenZ-Career-Aspirations-dataset/refs/heads/main/Career%20Aspirations%20survey%20of%20GenZ.csv";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_USER_AGENT: &str = concat!("genz-dashboard/", env!("CARGO_PKG_VERSION"));

/// Single-shot HTTP loader. No retry and no caching: a failure here is
/// fatal to startup.
#[derive(Debug, Clone)]
pub struct DatasetLoader {
    url: String,
    timeout: Duration,
    user_agent: String,
}
impl DatasetLoader {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
    fn build_http_client(&self) -> std::result::Result<Client, reqwest::Error> {
        Client::builder()
            .timeout(self.timeout)
            .connect_timeout(Duration::from_secs(5))
            .redirect(reqwest::redirect::Policy::limited(3))
            .user_agent(self.user_agent.as_str())
            .build()
    }
    pub async fn fetch(&self) -> Result<SurveyTable> {
        let unavailable = |reason: String| DashboardError::data_unavailable(&self.url, reason);
        let client = self
            .build_http_client()
            .map_err(|e| unavailable(format!("http client: {e}")))?;
        info!(url = %self.url, "fetching survey dataset");
        let response = client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| unavailable(format!("request failed: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(format!("unexpected status {status}")));
        }
        let body = response
            .bytes()
            .await
            .map_err(|e| unavailable(format!("reading body failed: {e}")))?;
        if body.is_empty() {
            return Err(unavailable("empty response".to_string()));
        }
        let table = SurveyTable::from_csv_reader(body.as_ref(), &self.url)?;
        info!(
            rows = table.row_count(),
            columns = table.headers().len(),
            "survey dataset loaded"
        );
        Ok(table)
    }
}
impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new(SURVEY_CSV_URL)
    }
}
