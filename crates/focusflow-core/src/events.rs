//! Events emitted on state changes.
//!
//! The CLI prints these as JSON; a GUI would poll for them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::session::{Session, SessionType};
use crate::timer::TimerState;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    TimerStarted {
        session_type: SessionType,
        duration_min: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerResumed {
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerCompleted {
        session_type: SessionType,
        duration_min: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        session_type: SessionType,
        duration_min: u64,
        remaining_secs: u64,
        progress_pct: f64,
        at: DateTime<Utc>,
    },
    SessionRecorded {
        session: Session,
        at: DateTime<Utc>,
    },
    GoalUpdated {
        daily_goal_min: u64,
        at: DateTime<Utc>,
    },
}
