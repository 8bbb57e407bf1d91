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

//! Browser side of the page: renders the embedded figures with Plotly and
//! round-trips every toggle click through the update endpoint.

pub const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Makes serialised JSON safe inside a `<script>` element. `<` only ever
/// appears inside JSON strings, where `\u003c` decodes to the same text.
pub fn embed_json(json: &str) -> String {
    json.replace('<', "\\u003c")
}

pub const CLIENT_SCRIPT: &str = r#"
document.addEventListener('DOMContentLoaded', function () {
  const figures = JSON.parse(document.getElementById('figure-data').textContent);
  for (const [id, figure] of Object.entries(figures)) {
    Plotly.newPlot(id, figure.data, figure.layout).then(function () {
      if (figure.frames) { Plotly.addFrames(id, figure.frames); }
    });
  }
  const bindings = JSON.parse(document.getElementById('toggle-bindings').textContent);
  for (const binding of bindings) {
    const button = document.getElementById(binding.button_id);
    const target = document.getElementById(binding.target_id);
    if (!button || !target) { continue; }
    let clicks = 0;
    button.addEventListener('click', function () {
      clicks += 1;
      const display = target.style.display;
      fetch('/_update/' + encodeURIComponent(binding.target_id), {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({ n_clicks: clicks, style: display ? { display: display } : null }),
      })
        .then(function (response) { return response.ok ? response.json() : Promise.reject(response.status); })
        .then(function (update) {
          for (const [property, value] of Object.entries(update.style)) {
            target.style.setProperty(property, value);
          }
        })
        .catch(function (err) { console.error('toggle update failed', err); });
    });
  }
});
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toggle::UPDATE_PATH;

    #[test]
    fn embedded_json_cannot_close_the_script() {
        let json = serde_json::to_string(&serde_json::json!({"label": "</script><b>"})).unwrap();
        let embedded = embed_json(&json);
        assert!(!embedded.contains("</"));
        let back: serde_json::Value = serde_json::from_str(&embedded).unwrap();
        assert_eq!(back["label"], "</script><b>");
    }

    #[test]
    fn script_posts_to_update_path() {
        assert!(CLIENT_SCRIPT.contains(&format!("'{UPDATE_PATH}/'")));
        assert!(CLIENT_SCRIPT.contains("Plotly.addFrames"));
    }
}
