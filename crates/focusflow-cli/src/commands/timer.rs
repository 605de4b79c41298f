use clap::Subcommand;
use focusflow_core::storage::TIMER_KEY;
use focusflow_core::{CountdownTimer, SessionType, WellnessStore};

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start (or resume) the configured countdown
    Start,
    /// Pause the running countdown
    Pause,
    /// Resume a paused countdown
    Resume,
    /// Reset to idle with the full duration
    Reset,
    /// Configure session type and duration
    Select {
        /// Session type: focus, short-break or long-break
        session_type: SessionType,
        /// Duration in minutes (defaults to the type's preset)
        #[arg(long)]
        minutes: Option<u64>,
    },
    /// Print current timer state as JSON; records the session on completion
    Status,
}

fn load_timer(store: &WellnessStore) -> Result<CountdownTimer, Box<dyn std::error::Error>> {
    Ok(store.db().load_record(TIMER_KEY)?.unwrap_or_default())
}

fn save_timer(
    store: &WellnessStore,
    timer: &CountdownTimer,
) -> Result<(), Box<dyn std::error::Error>> {
    store.db().save_record(TIMER_KEY, timer)?;
    Ok(())
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = WellnessStore::open()?;
    let mut timer = load_timer(&store)?;

    match action {
        TimerAction::Start => {
            if let Some(event) = timer.start() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&timer.snapshot())?);
            }
        }
        TimerAction::Pause => {
            if let Some(event) = timer.pause() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&timer.snapshot())?);
            }
        }
        TimerAction::Resume => {
            if let Some(event) = timer.resume() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            } else {
                println!("{}", serde_json::to_string_pretty(&timer.snapshot())?);
            }
        }
        TimerAction::Reset => {
            if let Some(event) = timer.reset() {
                println!("{}", serde_json::to_string_pretty(&event)?);
            }
        }
        TimerAction::Select {
            session_type,
            minutes,
        } => {
            timer.select(session_type, minutes)?;
            println!("{}", serde_json::to_string_pretty(&timer.snapshot())?);
        }
        TimerAction::Status => {
            // Tick to flush wall-clock time since the last invocation.
            let completed = timer.tick();
            println!("{}", serde_json::to_string_pretty(&timer.snapshot())?);
            if completed.is_some() {
                let recorded = store.add_session(timer.session_type(), timer.duration_min())?;
                println!("{}", serde_json::to_string_pretty(&recorded)?);
            }
        }
    }

    save_timer(&store, &timer)?;
    Ok(())
}
