//! Daily attendance status codes.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Attendance mark for one student on one date, stored as a single-letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    #[serde(rename = "P")]
    Present,
    #[serde(rename = "A")]
    Absent,
    #[serde(rename = "L")]
    Late,
    #[serde(rename = "E")]
    Excused,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "P",
            AttendanceStatus::Absent => "A",
            AttendanceStatus::Late => "L",
            AttendanceStatus::Excused => "E",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
            AttendanceStatus::Excused => "Excused",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "P" => Ok(AttendanceStatus::Present),
            "A" => Ok(AttendanceStatus::Absent),
            "L" => Ok(AttendanceStatus::Late),
            "E" => Ok(AttendanceStatus::Excused),
            other => Err(CoreError::Validation(format!(
                "unknown attendance status: {other}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        for status in [
            AttendanceStatus::Present,
            AttendanceStatus::Absent,
            AttendanceStatus::Late,
            AttendanceStatus::Excused,
        ] {
            assert_eq!(AttendanceStatus::parse(status.as_str()).unwrap(), status);
        }
    }

    #[test]
    fn unknown_code_is_rejected() {
        assert!(AttendanceStatus::parse("X").is_err());
        assert!(AttendanceStatus::parse("Present").is_err());
    }

    #[test]
    fn default_is_present() {
        assert_eq!(AttendanceStatus::default(), AttendanceStatus::Present);
    }

    #[test]
    fn labels() {
        assert_eq!(AttendanceStatus::Late.label(), "Late");
        assert_eq!(AttendanceStatus::Excused.label(), "Excused");
    }

    #[test]
    fn serializes_as_single_letter() {
        let json = serde_json::to_string(&AttendanceStatus::Absent).unwrap();
        assert_eq!(json, "\"A\"");
    }
}
