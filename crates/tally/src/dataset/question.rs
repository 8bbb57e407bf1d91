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

use serde::Serialize;
use std::fmt;

/// Survey questions the dashboard reads. Headers are matched verbatim
/// (after whitespace trimming) against the CSV header row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Question {
    Country,
    Gender,
    CareerInfluence,
    HigherEducationAbroad,
    EmployerTenure,
    UndefinedMission,
    LearningEnvironment,
    PreferredEmployer,
    AspirationalJob,
    ManagerType,
}
impl Question {
    pub const ALL: [Question; 10] = [
        Question::Country,
        Question::Gender,
        Question::CareerInfluence,
        Question::HigherEducationAbroad,
        Question::EmployerTenure,
        Question::UndefinedMission,
        Question::LearningEnvironment,
        Question::PreferredEmployer,
        Question::AspirationalJob,
        Question::ManagerType,
    ];
    pub fn header(&self) -> &'static str {
        match self {
            Question::Country => "Your Current Country.",
            Question::Gender => "Your Gender",
            Question::CareerInfluence => {
                "Which of the below factors influence the most about your career aspirations ?"
            }
            Question::HigherEducationAbroad => {
                "Would you definitely pursue a Higher Education / Post Graduation outside of India ? If only you have to self sponsor it."
            }
            Question::EmployerTenure => {
                "How likely is that you will work for one employer for 3 years or more ?"
            }
            Question::UndefinedMission => {
                "Would you work for a company whose mission is not clearly defined and publicly posted."
            }
            Question::LearningEnvironment => {
                "Which type of learning environment that you are most likely to work in ?"
            }
            Question::PreferredEmployer => "Which of the below Employers would you work with.",
            Question::AspirationalJob => {
                "Which of the below careers looks close to your Aspirational job ?"
            }
            Question::ManagerType => {
                "What type of Manager would you work without looking into your watch ?"
            }
        }
    }
    /// Short name used in the overview grid and in log fields.
    pub fn short_name(&self) -> &'static str {
        match self {
            Question::Country => "Current country",
            Question::Gender => "Gender",
            Question::CareerInfluence => "Career influence",
            Question::HigherEducationAbroad => "Higher education abroad",
            Question::EmployerTenure => "Employer tenure",
            Question::UndefinedMission => "Undefined mission",
            Question::LearningEnvironment => "Learning environment",
            Question::PreferredEmployer => "Preferred employer",
            Question::AspirationalJob => "Aspirational job",
            Question::ManagerType => "Manager type",
        }
    }
}
impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn headers_are_distinct() {
        let headers: HashSet<_> = Question::ALL.iter().map(Question::header).collect();
        assert_eq!(headers.len(), Question::ALL.len());
    }

    #[test]
    fn headers_carry_no_surrounding_whitespace() {
        for question in Question::ALL {
            assert_eq!(question.header(), question.header().trim());
        }
    }
}
