//! Session records.
//!
//! A session is created once, on timer completion, and is never mutated or
//! deleted afterwards. The calendar `date` is derived from `completed_at`
//! at creation time using the local clock and is never recomputed.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The kind of completed interval a session records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionType {
    Focus,
    ShortBreak,
    LongBreak,
}

impl SessionType {
    /// Whether this session counts toward focus aggregates and streaks.
    pub fn is_focus(self) -> bool {
        matches!(self, SessionType::Focus)
    }

    pub fn label(self) -> &'static str {
        match self {
            SessionType::Focus => "focus",
            SessionType::ShortBreak => "short break",
            SessionType::LongBreak => "long break",
        }
    }
}

impl std::str::FromStr for SessionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "focus" => Ok(SessionType::Focus),
            "short-break" => Ok(SessionType::ShortBreak),
            "long-break" => Ok(SessionType::LongBreak),
            other => Err(format!(
                "unknown session type '{other}' (expected focus, short-break or long-break)"
            )),
        }
    }
}

/// A completed timed interval.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    /// Duration in minutes.
    pub duration_min: u64,
    pub completed_at: DateTime<Utc>,
    /// Local calendar day of completion, the aggregation key.
    pub date: NaiveDate,
}

impl Session {
    /// Create a session completed now.
    ///
    /// `date` is derived from the same instant as `completed_at` so the
    /// pair stays consistent with the clock active at creation.
    pub fn new(session_type: SessionType, duration_min: u64) -> Self {
        let completed_at = Utc::now();
        let date = completed_at.with_timezone(&Local).date_naive();
        Self {
            id: Uuid::new_v4(),
            session_type,
            duration_min,
            completed_at,
            date,
        }
    }

    /// Test helper: a session pinned to a specific calendar day.
    #[cfg(test)]
    pub(crate) fn on_date(session_type: SessionType, duration_min: u64, date: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            session_type,
            duration_min,
            completed_at: Utc::now(),
            date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_roundtrips_kebab_case() {
        let json = serde_json::to_string(&SessionType::ShortBreak).unwrap();
        assert_eq!(json, "\"short-break\"");
        let parsed: SessionType = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, SessionType::ShortBreak);
    }

    #[test]
    fn parse_rejects_unknown_type() {
        assert!("nap".parse::<SessionType>().is_err());
        assert_eq!("focus".parse::<SessionType>().unwrap(), SessionType::Focus);
    }

    #[test]
    fn new_session_date_matches_local_completion_day() {
        let s = Session::new(SessionType::Focus, 25);
        assert_eq!(s.date, s.completed_at.with_timezone(&Local).date_naive());
    }

    #[test]
    fn session_serializes_type_field_name() {
        let s = Session::new(SessionType::LongBreak, 15);
        let value = serde_json::to_value(&s).unwrap();
        assert_eq!(value["type"], "long-break");
        assert!(value["date"].as_str().unwrap().len() == 10); // YYYY-MM-DD
    }
}
