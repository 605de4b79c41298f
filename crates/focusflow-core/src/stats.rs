//! The statistics engine.
//!
//! A [`WellnessStats`] snapshot is a pure function of the full session list
//! plus the persisted daily goal. It is recomputed wholesale after every
//! append -- there is no incremental path, so cost is linear in the total
//! session count per append. Acceptable at this scale; a day-indexed map of
//! running totals would replace the rescan if that ever changed.

use std::collections::HashSet;

use chrono::{Days, Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::session::Session;

/// How far back the streak scan walks from today.
const STREAK_WINDOW_DAYS: u64 = 365;

/// Number of trailing calendar days in the weekly breakdown, today included.
const WEEKLY_DAYS: u64 = 7;

/// Default daily focus goal in minutes (2 hours).
pub const DEFAULT_DAILY_GOAL_MIN: u64 = 120;

/// Focus minutes accumulated on a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayFocus {
    pub date: NaiveDate,
    pub focus_min: u64,
}

/// Derived statistics snapshot.
///
/// Break sessions are tracked in the session list but contribute to no
/// field here; all aggregates are focus-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellnessStats {
    /// Sum of durations over focus sessions, in minutes.
    pub total_focus_min: u64,
    /// Count of focus sessions.
    pub sessions_completed: u64,
    /// Consecutive calendar days with at least one focus session,
    /// ending today. Zero when today has none yet.
    pub current_streak: u32,
    /// Longest such run observed in the trailing year.
    pub longest_streak: u32,
    /// User-configured target minutes per day. Carried through
    /// recomputation untouched.
    pub daily_goal_min: u64,
    /// Trailing week, oldest to newest, ending today. Days without
    /// sessions carry an explicit zero.
    pub weekly: Vec<DayFocus>,
}

impl Default for WellnessStats {
    fn default() -> Self {
        Self::empty(DEFAULT_DAILY_GOAL_MIN)
    }
}

impl WellnessStats {
    /// A zero-valued snapshot for the given goal, with the weekly
    /// breakdown filled in for today's trailing week.
    pub fn empty(daily_goal_min: u64) -> Self {
        Self::compute(&[], daily_goal_min, local_today())
    }

    /// Recompute the full snapshot from the session list.
    ///
    /// `today` anchors the streak scan and the weekly window; callers
    /// outside tests pass [`local_today`].
    pub fn compute(sessions: &[Session], daily_goal_min: u64, today: NaiveDate) -> Self {
        let focus: Vec<&Session> = sessions.iter().filter(|s| s.session_type.is_focus()).collect();

        let total_focus_min = focus.iter().map(|s| s.duration_min).sum();
        let days: HashSet<NaiveDate> = focus.iter().map(|s| s.date).collect();
        let (current_streak, longest_streak) = streaks(&days, today);

        Self {
            total_focus_min,
            sessions_completed: focus.len() as u64,
            current_streak,
            longest_streak,
            daily_goal_min,
            weekly: weekly(&focus, today),
        }
    }

    /// Focus minutes recorded today, read off the weekly breakdown.
    pub fn today_focus_min(&self, today: NaiveDate) -> u64 {
        self.weekly
            .iter()
            .find(|d| d.date == today)
            .map(|d| d.focus_min)
            .unwrap_or(0)
    }
}

/// Today on the local clock.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Walk backward day-by-day from `today` for up to a year.
///
/// The current streak is the contiguous run starting at today; a day with
/// zero focus sessions breaks it as of today, so "today with no session
/// yet" reads as zero. The longest streak is the maximum run anywhere in
/// the window.
fn streaks(days: &HashSet<NaiveDate>, today: NaiveDate) -> (u32, u32) {
    let mut current = 0u32;
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut leading = true;

    for offset in 0..STREAK_WINDOW_DAYS {
        let Some(day) = today.checked_sub_days(Days::new(offset)) else {
            break;
        };
        if days.contains(&day) {
            run += 1;
            if leading {
                current = run;
            }
        } else {
            leading = false;
            longest = longest.max(run);
            run = 0;
        }
    }

    (current, longest.max(run).max(current))
}

/// Trailing-week buckets, oldest to newest, ending on `today`.
fn weekly(focus: &[&Session], today: NaiveDate) -> Vec<DayFocus> {
    (0..WEEKLY_DAYS)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .map(|date| DayFocus {
            focus_min: focus
                .iter()
                .filter(|s| s.date == date)
                .map(|s| s.duration_min)
                .sum(),
            date,
        })
        .collect()
}
