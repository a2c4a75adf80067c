mod app;
mod cli;
mod config;
mod dev_data;
mod logging;
mod runtime;
mod ui;

use anyhow::{bail, Context, Result};
use app::{App, Store};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use jobboard::domain::menu_contains;
use jobboard::{
    check_extension, import_text, FileStorage, ImportTemplate, MemoryStorage, RecordStore,
    Summary,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::{Path, PathBuf};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let cfg = config::JobboardConfig::load()?;

    match cli.command.unwrap_or(cli::Commands::Run) {
        cli::Commands::Run => {
            logging::init_file(&cfg)?;
            let data_dir = cfg.data_dir()?;
            tracing::info!(data_dir = %data_dir.display(), "starting dashboard");
            let store: Store = RecordStore::load(Box::new(FileStorage::new(data_dir)));
            run_tui(App::new(store, &cfg)).await
        }
        cli::Commands::Dev => {
            logging::init_file(&cfg)?;
            let mut store: Store = RecordStore::load(Box::new(MemoryStorage::new()));
            store.bulk_add(dev_data::demo_records(jobboard::dates::today_local()))?;
            tracing::info!(records = store.len(), "starting dashboard with in-memory demo records");
            run_tui(App::new(store, &cfg)).await
        }
        cli::Commands::Import { file, entry } => {
            logging::init_stderr(&cfg);
            run_import(&cfg, &file, &entry.category, &entry.sub).await
        }
        cli::Commands::Template { entry, out } => {
            logging::init_stderr(&cfg);
            ensure_menu_entry(&entry.category, &entry.sub)?;
            let template = ImportTemplate::for_category(
                &entry.category,
                &entry.sub,
                jobboard::dates::today_local(),
            );
            let dir = out.unwrap_or_else(|| cfg.template_dir());
            let path = runtime::write_template(&dir, &template).await?;
            println!("{}", path.display());
            Ok(())
        }
        cli::Commands::Summary { json } => {
            logging::init_stderr(&cfg);
            let store = RecordStore::load(FileStorage::new(cfg.data_dir()?));
            print_summary(&Summary::compute(
                store.records(),
                jobboard::dates::today_local(),
            ), json)
        }
        cli::Commands::ConfigPath => {
            let path = config::JobboardConfig::ensure_default_file()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

async fn run_tui(mut app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run the app
    let res = runtime::run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "dashboard exited with an error");
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn ensure_menu_entry(category: &str, sub_category: &str) -> Result<()> {
    if !menu_contains(category, sub_category) {
        bail!("Unknown menu entry {} / {}", category, sub_category);
    }
    Ok(())
}

async fn run_import(
    cfg: &config::JobboardConfig,
    file: &Path,
    category: &str,
    sub_category: &str,
) -> Result<()> {
    ensure_menu_entry(category, sub_category)?;
    check_extension(file)?;
    let bytes = tokio::fs::read(file)
        .await
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let text = String::from_utf8_lossy(&bytes);

    let data_dir: PathBuf = cfg.data_dir()?;
    let mut store = RecordStore::load(FileStorage::new(data_dir));
    let outcome = import_text(
        &mut store,
        &text,
        category,
        sub_category,
        jobboard::dates::today_local(),
    )?;

    println!(
        "Imported {} job record(s) into {} / {}.",
        outcome.imported, category, sub_category
    );
    if outcome.skipped > 0 {
        println!(
            "{} line(s) with fewer than 5 columns were skipped.",
            outcome.skipped
        );
    }
    Ok(())
}

fn print_summary(summary: &Summary, json: bool) -> Result<()> {
    if json {
        let report = serde_json::json!({
            "total": summary.total,
            "completed": summary.completed,
            "pending": summary.pending,
            "inProgress": summary.in_progress,
            "overdue": summary.overdue,
            "categoryVolume": summary
                .category_volume
                .iter()
                .map(|(category, count)| serde_json::json!({ "category": category, "count": count }))
                .collect::<Vec<_>>(),
            "overdueList": summary.overdue_list,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Total jobs:  {}", summary.total);
    println!("Completed:   {}", summary.completed);
    println!("In process:  {}", summary.active());
    println!("Overdue:     {}", summary.overdue);
    if !summary.category_volume.is_empty() {
        println!();
        for (category, count) in &summary.category_volume {
            println!("  {:<24} {}", category, count);
        }
    }
    if !summary.overdue_list.is_empty() {
        println!();
        println!("Needs attention:");
        for record in summary.overdue_preview() {
            println!(
                "  {} / {} ({} › {}), due {}",
                record.branch_dept,
                record.job_type,
                record.category,
                record.sub_category,
                jobboard::dates::display_date(&record.deadline)
            );
        }
    }
    Ok(())
}
