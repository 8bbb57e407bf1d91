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

#![allow(dead_code)]

use tally::Question;

pub const TENURE_NO_WAY: &str = "No way, 3 years with one employer is crazy";
pub const TENURE_YES: &str = "I will work for 3 years or more";
pub const TENURE_MAYBE: &str = "This will be hard to do, but if it is the right company I will";

/// CSV text with every question header followed by `rows`.
pub fn survey_csv(rows: &[[&str; 10]]) -> String {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer
        .write_record(Question::ALL.iter().map(Question::header))
        .unwrap();
    for row in rows {
        writer.write_record(row).unwrap();
    }
    String::from_utf8(writer.into_inner().unwrap()).unwrap()
}

pub fn row(gender: &str, tenure: &str, employer: &str, job: &str) -> [String; 10] {
    [
        "India".to_string(),
        gender.to_string(),
        "My Parents".to_string(),
        "Yes, I will earn and do that".to_string(),
        tenure.to_string(),
        "No".to_string(),
        "Self Paced Learning Portals".to_string(),
        employer.to_string(),
        job.to_string(),
        "Manager who explains what is expected".to_string(),
    ]
}

/// Six respondents: two women, one man, three without a gender answer;
/// five of them refuse a 3+ year tenure.
pub fn sample_csv() -> String {
    let long_job = "Business Operations in any organization where I can build and scale";
    let rows = [
        row("Female", TENURE_NO_WAY, "Google", long_job),
        row("Male", TENURE_NO_WAY, "Google", "Teaching"),
        row("Female", TENURE_NO_WAY, "Startup", long_job),
        row("", TENURE_NO_WAY, "Google", "Teaching"),
        row("", TENURE_NO_WAY, "Government", "Design"),
        row("", TENURE_YES, "Startup", "Teaching"),
    ];
    let borrowed: Vec<[&str; 10]> = rows
        .iter()
        .map(|r| std::array::from_fn(|i| r[i].as_str()))
        .collect();
    survey_csv(&borrowed)
}
