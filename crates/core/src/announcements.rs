//! Announcement targeting and publication windows.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::roles::Role;
use crate::types::Timestamp;

/// Who an announcement is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Audience {
    All,
    Students,
    Teachers,
    Parents,
}

impl Audience {
    pub fn as_str(&self) -> &'static str {
        match self {
            Audience::All => "ALL",
            Audience::Students => "STUDENTS",
            Audience::Teachers => "TEACHERS",
            Audience::Parents => "PARENTS",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "ALL" => Ok(Audience::All),
            "STUDENTS" => Ok(Audience::Students),
            "TEACHERS" => Ok(Audience::Teachers),
            "PARENTS" => Ok(Audience::Parents),
            other => Err(CoreError::Validation(format!("unknown audience: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "LOW",
            Priority::Medium => "MEDIUM",
            Priority::High => "HIGH",
            Priority::Urgent => "URGENT",
        }
    }

    pub fn parse(value: &str) -> Result<Self, CoreError> {
        match value {
            "LOW" => Ok(Priority::Low),
            "MEDIUM" => Ok(Priority::Medium),
            "HIGH" => Ok(Priority::High),
            "URGENT" => Ok(Priority::Urgent),
            other => Err(CoreError::Validation(format!("unknown priority: {other}"))),
        }
    }
}

/// Whether an announcement is currently live: published, past its publish
/// time, and not yet expired. A missing expiry means it never expires; an
/// expiry exactly equal to `now` is still live.
pub fn is_live(
    now: Timestamp,
    is_published: bool,
    publish_date: Timestamp,
    expiry_date: Option<Timestamp>,
) -> bool {
    is_published && publish_date <= now && !expiry_date.is_some_and(|expiry| expiry < now)
}

/// Which audiences a viewer may see. Admins see every audience; staff and
/// parents see broadcasts plus their own group; anonymous viewers see
/// broadcasts only.
pub fn visible_audiences(viewer: Option<Role>) -> &'static [Audience] {
    match viewer {
        Some(Role::Admin) => &[
            Audience::All,
            Audience::Students,
            Audience::Teachers,
            Audience::Parents,
        ],
        Some(Role::Teacher) => &[Audience::All, Audience::Teachers],
        Some(Role::Parent) => &[Audience::All, Audience::Parents],
        None => &[Audience::All],
    }
}

/// Whether `viewer` may see an announcement addressed to `audience`.
pub fn audience_matches(audience: Audience, viewer: Option<Role>) -> bool {
    visible_audiences(viewer).contains(&audience)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(hour: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2026, 3, 10, hour, 0, 0).unwrap()
    }

    #[test]
    fn unpublished_is_never_live() {
        assert!(!is_live(at(12), false, at(8), None));
    }

    #[test]
    fn live_from_publish_time_onwards() {
        assert!(!is_live(at(7), true, at(8), None));
        assert!(is_live(at(8), true, at(8), None));
        assert!(is_live(at(12), true, at(8), None));
    }

    #[test]
    fn expiry_is_exclusive() {
        assert!(is_live(at(12), true, at(8), Some(at(12))));
        assert!(!is_live(at(13), true, at(8), Some(at(12))));
    }

    #[test]
    fn missing_expiry_never_expires() {
        assert!(is_live(at(23), true, at(8), None));
    }

    #[test]
    fn admin_sees_every_audience() {
        for audience in [
            Audience::All,
            Audience::Students,
            Audience::Teachers,
            Audience::Parents,
        ] {
            assert!(audience_matches(audience, Some(Role::Admin)));
        }
    }

    #[test]
    fn teacher_sees_broadcasts_and_teacher_notices() {
        assert!(audience_matches(Audience::All, Some(Role::Teacher)));
        assert!(audience_matches(Audience::Teachers, Some(Role::Teacher)));
        assert!(!audience_matches(Audience::Parents, Some(Role::Teacher)));
        assert!(!audience_matches(Audience::Students, Some(Role::Teacher)));
    }

    #[test]
    fn parent_sees_broadcasts_and_parent_notices() {
        assert!(audience_matches(Audience::All, Some(Role::Parent)));
        assert!(audience_matches(Audience::Parents, Some(Role::Parent)));
        assert!(!audience_matches(Audience::Teachers, Some(Role::Parent)));
    }

    #[test]
    fn anonymous_sees_broadcasts_only() {
        assert!(audience_matches(Audience::All, None));
        assert!(!audience_matches(Audience::Teachers, None));
        assert!(!audience_matches(Audience::Parents, None));
        assert!(!audience_matches(Audience::Students, None));
    }

    #[test]
    fn audience_and_priority_round_trip() {
        for audience in ["ALL", "STUDENTS", "TEACHERS", "PARENTS"] {
            assert_eq!(Audience::parse(audience).unwrap().as_str(), audience);
        }
        for priority in ["LOW", "MEDIUM", "HIGH", "URGENT"] {
            assert_eq!(Priority::parse(priority).unwrap().as_str(), priority);
        }
        assert!(Audience::parse("EVERYONE").is_err());
        assert!(Priority::parse("urgent").is_err());
    }
}
