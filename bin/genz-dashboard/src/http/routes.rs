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

use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tally::{binding_for, toggle_display, Style, UPDATE_PATH};
use tracing::info;

/// Body posted by the page for every toggle click.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToggleRequest {
    #[serde(default)]
    pub n_clicks: Option<u64>,
    #[serde(default)]
    pub style: Option<Style>,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleResponse {
    pub target: String,
    pub style: Style,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    #[serde(skip)]
    status: StatusCode,
}
impl ApiError {
    pub fn unknown_target(target: &str) -> Self {
        Self {
            code: "UNKNOWN_TARGET".to_string(),
            message: format!("No toggle is bound to element '{target}'."),
            status: StatusCode::NOT_FOUND,
        }
    }
}
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status;
        let body = Json(self);
        (status, body).into_response()
    }
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(state.dashboard.page_html().to_string())
}

async fn update_toggle(
    Path(target): Path<String>,
    Json(request): Json<ToggleRequest>,
) -> Result<Json<ToggleResponse>, ApiError> {
    let binding = binding_for(&target).ok_or_else(|| ApiError::unknown_target(&target))?;
    info!(
        target_id = binding.target_id,
        button = binding.button_id,
        n_clicks = ?request.n_clicks,
        prior = ?request.style.as_ref().map(Style::to_css),
        "toggle clicked"
    );
    let style = toggle_display(request.n_clicks, request.style.as_ref());
    Ok(Json(ToggleResponse {
        target: binding.target_id.to_string(),
        style,
    }))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route(&format!("{UPDATE_PATH}/{{target}}"), post(update_toggle))
        .with_state(state)
}
