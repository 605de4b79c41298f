use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;
use focusflow_core::{transfer, WellnessStore};

#[derive(Subcommand)]
pub enum DataAction {
    /// Export sessions, stats, and settings to a JSON file
    Export {
        /// Output path (defaults to wellness-data-<today>.json)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Import a previously exported JSON file
    Import {
        /// Path to the export file
        path: PathBuf,
    },
}

pub fn run(action: DataAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = WellnessStore::open()?;

    match action {
        DataAction::Export { out } => {
            let path = out.unwrap_or_else(|| {
                PathBuf::from(transfer::default_export_filename(Local::now().date_naive()))
            });
            transfer::write_export(&store.export(), &path)?;
            println!("exported to {}", path.display());
        }
        DataAction::Import { path } => {
            // Parse fully before the first write; a bad file changes nothing.
            let bundle = transfer::read_import(&path)?;
            store.import(bundle)?;
            println!("imported {}", path.display());
        }
    }
    Ok(())
}
