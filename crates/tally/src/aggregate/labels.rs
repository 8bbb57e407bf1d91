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

/// Fixed verbose → short label table. Values absent from the table pass
/// through unchanged.
#[derive(Debug, Clone, Copy)]
pub struct LabelMap {
    name: &'static str,
    entries: &'static [(&'static str, &'static str)],
}
impl LabelMap {
    pub const fn new(name: &'static str, entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { name, entries }
    }
    pub fn name(&self) -> &'static str {
        self.name
    }
    pub fn apply<'a>(&self, raw: &'a str) -> &'a str {
        self.entries
            .iter()
            .find(|(verbose, _)| *verbose == raw)
            .map_or(raw, |&(_, short)| short)
    }
    pub fn entries(&self) -> &'static [(&'static str, &'static str)] {
        self.entries
    }
}

pub const EMPLOYER_TENURE_LABELS: LabelMap = LabelMap::new(
    "employer-tenure",
    &[
        ("No way, 3 years with one employer is crazy", "No way"),
        ("I will work for 3 years or more", "Yes, 3+ years"),
        (
            "This will be hard to do, but if it is the right company I will",
            "If right company",
        ),
    ],
);

pub const UNDEFINED_MISSION_LABELS: LabelMap = LabelMap::new(
    "undefined-mission",
    &[
        ("Yes", "Yes"),
        ("No", "No"),
        ("Maybe", "Maybe"),
        ("Not Sure", "Not Sure"),
    ],
);
