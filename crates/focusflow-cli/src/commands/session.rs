use clap::Subcommand;
use focusflow_core::{SessionType, WellnessStore};

#[derive(Subcommand)]
pub enum SessionAction {
    /// Record a completed session directly
    Add {
        /// Session type: focus, short-break or long-break
        session_type: SessionType,
        /// Duration in minutes
        minutes: u64,
    },
    /// List recorded sessions, newest last
    List {
        /// Only show the most recent N sessions
        #[arg(long)]
        limit: Option<usize>,
    },
}

pub fn run(action: SessionAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = WellnessStore::open()?;

    match action {
        SessionAction::Add {
            session_type,
            minutes,
        } => {
            let event = store.add_session(session_type, minutes)?;
            println!("{}", serde_json::to_string_pretty(&event)?);
        }
        SessionAction::List { limit } => {
            let sessions = store.sessions();
            let skip = limit
                .map(|n| sessions.len().saturating_sub(n))
                .unwrap_or(0);
            println!("{}", serde_json::to_string_pretty(&sessions[skip..])?);
        }
    }
    Ok(())
}
