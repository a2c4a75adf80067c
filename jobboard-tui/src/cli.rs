use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "jobboard")]
#[command(about = "Terminal dashboard for tracking operations jobs")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the dashboard against the local record store (default)
    Run,
    /// Start the dashboard with in-memory demo records
    Dev,
    /// Import a .csv/.txt file into a menu entry without opening the UI
    Import {
        file: PathBuf,
        #[command(flatten)]
        entry: MenuEntryArgs,
    },
    /// Write the import template for a menu entry
    Template {
        #[command(flatten)]
        entry: MenuEntryArgs,
        /// Output directory (defaults to the configured template directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print dashboard counts
    Summary {
        /// Print as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Print config path and create default file if missing
    ConfigPath,
}

#[derive(Debug, Args)]
pub struct MenuEntryArgs {
    /// Menu category, e.g. "Produksi Master Data"
    #[arg(long)]
    pub category: String,
    /// Sub-menu within the category, e.g. "Cabang"
    #[arg(long)]
    pub sub: String,
}
