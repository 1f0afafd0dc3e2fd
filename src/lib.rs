// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod models;
pub mod ui;

// Re-export commonly used types outside of crate
pub use app::App;
pub use config::PERSISTENCE;
pub use data::RosterStore;
pub use models::{EditableRow, Roster, StoredRecord};

// CLI argument parsing
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the roster data file (created on first save)
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
