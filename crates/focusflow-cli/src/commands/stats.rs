use clap::Subcommand;
use focusflow_core::badges;
use focusflow_core::stats::local_today;
use focusflow_core::WellnessStore;

#[derive(Subcommand)]
pub enum StatsAction {
    /// Full statistics snapshot
    Show,
    /// Trailing-week focus minutes per day
    Weekly,
    /// Achievement badges and today's goal progress
    Badges,
    /// Set the daily focus goal in minutes
    Goal {
        /// Target minutes per day
        minutes: u64,
    },
}

pub fn run(action: StatsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = WellnessStore::open()?;

    match action {
        StatsAction::Show => {
            println!("{}", serde_json::to_string_pretty(store.stats())?);
        }
        StatsAction::Weekly => {
            println!("{}", serde_json::to_string_pretty(&store.stats().weekly)?);
        }
        StatsAction::Badges => {
            let today = local_today();
            let summary = serde_json::json!({
                "badges": badges::evaluate(store.stats()),
                "daily_progress_pct": badges::daily_progress_pct(store.stats(), today),
                "today_focus_min": store.stats().today_focus_min(today),
                "daily_goal_min": store.stats().daily_goal_min,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        StatsAction::Goal { minutes } => {
            let event = store.update_daily_goal(minutes)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
    }
    Ok(())
}
