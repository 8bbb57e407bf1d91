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

//! Show/hide toggles. Every toggle runs the same two-state machine; the
//! bindings table says which button drives which element.

use crate::layout::style::{Style, DISPLAY};
use serde::Serialize;

/// Route prefix the page posts toggle clicks to; the target id follows.
pub const UPDATE_PATH: &str = "/_update";
pub const SHOWN_DISPLAY: &str = "block";
pub const HIDDEN_DISPLAY: &str = "none";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Hidden,
    Shown,
}
impl Visibility {
    /// Anything other than an explicit `display: block` counts as hidden.
    pub fn from_style(style: Option<&Style>) -> Self {
        match style.and_then(Style::display) {
            Some(SHOWN_DISPLAY) => Visibility::Shown,
            _ => Visibility::Hidden,
        }
    }
    pub fn toggled(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Shown,
            Visibility::Shown => Visibility::Hidden,
        }
    }
    pub fn display_value(self) -> &'static str {
        match self {
            Visibility::Hidden => HIDDEN_DISPLAY,
            Visibility::Shown => SHOWN_DISPLAY,
        }
    }
}

/// Next style for a toggle target after a click. A missing click count is
/// treated like a first click. Declarations other than `display` are kept.
pub fn toggle_display(n_clicks: Option<u64>, style: Option<&Style>) -> Style {
    let next = match n_clicks {
        None => Visibility::Shown,
        Some(_) => Visibility::from_style(style).toggled(),
    };
    style
        .cloned()
        .unwrap_or_default()
        .with(DISPLAY, next.display_value())
}

/// Binds a clickable button to the element whose visibility it flips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleBinding {
    pub target_id: &'static str,
    pub button_id: &'static str,
}

pub const TABLE_PANEL: ToggleBinding = ToggleBinding {
    target_id: "table-container",
    button_id: "toggle-table-btn",
};
pub const EXPLANATION_PANEL: ToggleBinding = ToggleBinding {
    target_id: "explanation-container",
    button_id: "toggle-explanation-btn",
};
pub const EMPLOYER_INFO: ToggleBinding = ToggleBinding {
    target_id: "info-box-employer",
    button_id: "info-btn-employer",
};
pub const WORK_ENV_INFO: ToggleBinding = ToggleBinding {
    target_id: "info-box-workenv",
    button_id: "info-btn-workenv",
};
pub static TOGGLES: [ToggleBinding; 4] = [TABLE_PANEL, EXPLANATION_PANEL, EMPLOYER_INFO, WORK_ENV_INFO];

pub fn binding_for(target_id: &str) -> Option<&'static ToggleBinding> {
    TOGGLES.iter().find(|b| b.target_id == target_id)
}
