//! Achievement badges and daily-goal progress.
//!
//! Badges are derived from the statistics snapshot alone; nothing is
//! persisted for them.

use chrono::NaiveDate;
use serde::Serialize;

use crate::stats::WellnessStats;

#[derive(Debug, Clone, Serialize)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub unlocked: bool,
}

/// Evaluate every badge against the snapshot.
pub fn evaluate(stats: &WellnessStats) -> Vec<Badge> {
    vec![
        Badge {
            id: "first-session",
            name: "First Steps",
            description: "Complete your first focus session",
            unlocked: stats.sessions_completed >= 1,
        },
        Badge {
            id: "week-streak",
            name: "Consistent",
            description: "7-day focus streak",
            unlocked: stats.current_streak >= 7,
        },
        Badge {
            id: "century",
            name: "Centurion",
            description: "100 total focus hours",
            unlocked: stats.total_focus_min >= 6_000,
        },
        Badge {
            id: "dedication",
            name: "Dedicated",
            description: "30-day focus streak",
            unlocked: stats.current_streak >= 30,
        },
        Badge {
            id: "master",
            name: "Focus Master",
            description: "500 sessions completed",
            unlocked: stats.sessions_completed >= 500,
        },
        Badge {
            id: "zen",
            name: "Zen Mode",
            description: "1000 total focus hours",
            unlocked: stats.total_focus_min >= 60_000,
        },
    ]
}

/// Today's focus minutes as a percentage of the daily goal.
///
/// Not clamped; a day past the goal reads over 100.
pub fn daily_progress_pct(stats: &WellnessStats, today: NaiveDate) -> f64 {
    if stats.daily_goal_min == 0 {
        return 0.0;
    }
    stats.today_focus_min(today) as f64 / stats.daily_goal_min as f64 * 100.0
}
