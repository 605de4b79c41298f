use std::time::Duration;

use clap::Subcommand;
use focusflow_core::breaks::{self, BreathingExercise, EyeExercise};

#[derive(Subcommand)]
pub enum BreakAction {
    /// List the break-activity catalog
    List,
    /// Show one activity with its steps
    Show {
        /// Activity id (stretch, hydration, movement)
        id: String,
    },
    /// Pick a random activity
    Random,
    /// Run a guided breathing exercise
    Breathe {
        /// Number of inhale-hold-exhale cycles
        #[arg(long, default_value = "4")]
        cycles: u32,
    },
    /// Print the eye-rest routine
    Eyes,
}

pub fn run(action: BreakAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        BreakAction::List => {
            println!("{}", serde_json::to_string_pretty(&breaks::ACTIVITIES)?);
        }
        BreakAction::Show { id } => match breaks::find(&id) {
            Some(activity) => println!("{}", serde_json::to_string_pretty(activity)?),
            None => {
                eprintln!("unknown activity: {id}");
                std::process::exit(1);
            }
        },
        BreakAction::Random => {
            println!("{}", serde_json::to_string_pretty(breaks::random())?);
        }
        BreakAction::Breathe { cycles } => breathe(cycles),
        BreakAction::Eyes => {
            let mut routine = EyeExercise::new();
            while let Some(step) = routine.current() {
                println!("{}/{}  {step}", routine.step_index() + 1, routine.total_steps());
                routine.advance();
            }
        }
    }
    Ok(())
}

/// Drive the breathing state machine with a one-second sleep as the tick
/// source; returning tears it down, so nothing outlives the command.
fn breathe(cycles: u32) {
    let mut exercise = BreathingExercise::new();
    println!("{}", exercise.phase().instruction());
    while exercise.cycles_completed() < cycles {
        std::thread::sleep(Duration::from_secs(1));
        if let Some(phase) = exercise.tick() {
            if exercise.cycles_completed() >= cycles {
                break;
            }
            println!("{}", phase.instruction());
        }
    }
    println!("done: {} cycles", exercise.cycles_completed());
}
