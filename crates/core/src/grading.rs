//! Grade scale constants, the [`Grade`] enum, and grading logic.
//!
//! This module is the single source of truth for the school's grade
//! bands. Result persistence, term aggregation, and the report-card
//! legend all derive their grades from here so the scale can never
//! drift between surfaces.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Band thresholds
// ---------------------------------------------------------------------------

/// Minimum percentage for an A+ grade.
pub const A_PLUS_MIN_PERCENT: f64 = 90.0;
/// Minimum percentage for an A grade.
pub const A_MIN_PERCENT: f64 = 80.0;
/// Minimum percentage for a B+ grade.
pub const B_PLUS_MIN_PERCENT: f64 = 70.0;
/// Minimum percentage for a B grade.
pub const B_MIN_PERCENT: f64 = 60.0;
/// Minimum percentage for a C grade.
pub const C_MIN_PERCENT: f64 = 50.0;
/// Minimum percentage for a D grade. Below this is F.
pub const D_MIN_PERCENT: f64 = 40.0;

// ---------------------------------------------------------------------------
// Grade enum
// ---------------------------------------------------------------------------

/// A letter grade on the school's fixed seven-band scale.
///
/// Serializes as the letter string (`"A+"`, `"B"`, ...) to match the
/// values stored in the `results.grade` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    #[serde(rename = "A")]
    A,
    #[serde(rename = "B+")]
    BPlus,
    #[serde(rename = "B")]
    B,
    #[serde(rename = "C")]
    C,
    #[serde(rename = "D")]
    D,
    #[serde(rename = "F")]
    F,
}

impl Grade {
    /// Derive the grade for a percentage. Band lower bounds are inclusive.
    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= A_PLUS_MIN_PERCENT {
            Self::APlus
        } else if percentage >= A_MIN_PERCENT {
            Self::A
        } else if percentage >= B_PLUS_MIN_PERCENT {
            Self::BPlus
        } else if percentage >= B_MIN_PERCENT {
            Self::B
        } else if percentage >= C_MIN_PERCENT {
            Self::C
        } else if percentage >= D_MIN_PERCENT {
            Self::D
        } else {
            Self::F
        }
    }

    /// The letter string stored in the database and shown on reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::BPlus => "B+",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }

    /// Human-readable description for the report-card legend.
    pub fn description(self) -> &'static str {
        match self {
            Self::APlus => "Excellent",
            Self::A => "Very Good",
            Self::BPlus => "Good",
            Self::B => "Above Average",
            Self::C => "Average",
            Self::D => "Below Average",
            Self::F => "Fail",
        }
    }
}

/// The full scale as (grade, percentage-range display, description) rows,
/// in descending band order. Drives the report-card legend.
pub const GRADE_SCALE: [(Grade, &str, &str); 7] = [
    (Grade::APlus, "90% - 100%", "Excellent"),
    (Grade::A, "80% - 89%", "Very Good"),
    (Grade::BPlus, "70% - 79%", "Good"),
    (Grade::B, "60% - 69%", "Above Average"),
    (Grade::C, "50% - 59%", "Average"),
    (Grade::D, "40% - 49%", "Below Average"),
    (Grade::F, "Below 40%", "Fail"),
];

// ---------------------------------------------------------------------------
// Grading helpers
// ---------------------------------------------------------------------------

/// Percentage scored, or `None` when `total_marks` is not positive.
///
/// A result with zero total marks is "ungraded" rather than a division
/// error or an automatic F.
pub fn percentage(marks_obtained: f64, total_marks: f64) -> Option<f64> {
    if total_marks > 0.0 {
        Some(marks_obtained / total_marks * 100.0)
    } else {
        None
    }
}

/// Grade for a raw marks pair, or `None` when the result is ungradeable.
pub fn grade_for(marks_obtained: f64, total_marks: f64) -> Option<Grade> {
    percentage(marks_obtained, total_marks).map(Grade::from_percentage)
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Grade::from_percentage boundaries --

    #[test]
    fn grade_boundaries_are_inclusive() {
        assert_eq!(Grade::from_percentage(90.0), Grade::APlus);
        assert_eq!(Grade::from_percentage(80.0), Grade::A);
        assert_eq!(Grade::from_percentage(70.0), Grade::BPlus);
        assert_eq!(Grade::from_percentage(60.0), Grade::B);
        assert_eq!(Grade::from_percentage(50.0), Grade::C);
        assert_eq!(Grade::from_percentage(40.0), Grade::D);
    }

    #[test]
    fn just_below_each_boundary_drops_a_band() {
        assert_eq!(Grade::from_percentage(89.99), Grade::A);
        assert_eq!(Grade::from_percentage(79.99), Grade::BPlus);
        assert_eq!(Grade::from_percentage(69.99), Grade::B);
        assert_eq!(Grade::from_percentage(59.99), Grade::C);
        assert_eq!(Grade::from_percentage(49.99), Grade::D);
        assert_eq!(Grade::from_percentage(39.99), Grade::F);
    }

    #[test]
    fn extremes() {
        assert_eq!(Grade::from_percentage(100.0), Grade::APlus);
        assert_eq!(Grade::from_percentage(0.0), Grade::F);
    }

    // -- grade_for --

    #[test]
    fn eighty_three_of_one_hundred_is_an_a() {
        assert_eq!(grade_for(83.0, 100.0), Some(Grade::A));
    }

    #[test]
    fn scale_independence() {
        // 45/50 is 90%, same band as 90/100.
        assert_eq!(grade_for(45.0, 50.0), Some(Grade::APlus));
        assert_eq!(grade_for(90.0, 100.0), Some(Grade::APlus));
    }

    #[test]
    fn zero_total_marks_is_ungraded_not_fail() {
        assert_eq!(grade_for(0.0, 0.0), None);
        assert_eq!(grade_for(50.0, 0.0), None);
        assert_eq!(percentage(10.0, 0.0), None);
    }

    #[test]
    fn negative_total_marks_is_ungraded() {
        assert_eq!(grade_for(10.0, -5.0), None);
    }

    // -- string / legend surface --

    #[test]
    fn grade_strings_match_scale_table() {
        for (grade, _, description) in GRADE_SCALE {
            assert_eq!(grade.description(), description);
        }
        assert_eq!(Grade::APlus.as_str(), "A+");
        assert_eq!(Grade::F.as_str(), "F");
    }

    #[test]
    fn grade_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Grade::APlus).unwrap(), "\"A+\"");
        assert_eq!(serde_json::to_string(&Grade::B).unwrap(), "\"B\"");
        let parsed: Grade = serde_json::from_str("\"B+\"").unwrap();
        assert_eq!(parsed, Grade::BPlus);
    }
}
