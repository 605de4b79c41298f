use clap::Subcommand;
use focusflow_core::{Settings, WellnessStore};

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Get a settings value
    Get {
        /// Settings key (e.g. "theme", "daily_goal_min")
        key: String,
    },
    /// Set a settings value
    Set {
        /// Settings key
        key: String,
        /// New value
        value: String,
    },
    /// List all settings values
    List,
    /// Reset settings to defaults
    Reset,
}

pub fn run(action: SettingsAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = WellnessStore::open()?;

    match action {
        SettingsAction::Get { key } => match store.settings().get(&key) {
            Some(value) => println!("{value}"),
            None => {
                eprintln!("unknown key: {key}");
                std::process::exit(1);
            }
        },
        SettingsAction::Set { key, value } => {
            let mut settings = store.settings().clone();
            settings.set(&key, &value)?;
            store.update_settings(settings)?;
            println!("ok");
        }
        SettingsAction::List => {
            println!("{}", serde_json::to_string_pretty(store.settings())?);
        }
        SettingsAction::Reset => {
            store.update_settings(Settings::default())?;
            println!("settings reset to defaults");
        }
    }
    Ok(())
}
