use crate::app::{App, View};
use anyhow::Context;
use jobboard::domain::RecordUpdate;
use jobboard::{check_extension, import_text, Confirmation, ImportError, ImportTemplate};
use std::path::{Path, PathBuf};

use super::action_queue::Action;

pub(super) async fn run_action(action: Action, app: &mut App) {
    match action {
        Action::SubmitRecordForm => handle_submit_form(app),
        Action::CycleStatus { record_id } => handle_cycle_status(app, &record_id),
        Action::ResolveDelete { confirmation } => handle_resolve_delete(app, confirmation),
        Action::ImportFile { path } => handle_import_file(app, &path).await,
        Action::ExportTemplate => handle_export_template(app).await,
    }
}

fn handle_submit_form(app: &mut App) {
    let Some(record) = app.take_form_record() else {
        return;
    };
    let label = format!("{} / {}", record.branch_dept, record.job_type);
    match app.store.add(record) {
        Ok(()) => app.set_status(format!("Saved {}", label)),
        Err(e) => app.set_status(format!("Saved in memory only: {}", e)),
    }
    app.focused_record_index = Some(0);
    app.records_scroll = 0;
}

fn handle_cycle_status(app: &mut App, record_id: &str) {
    let Some(next) = app.store.get(record_id).map(|r| r.status.next_editable()) else {
        return;
    };
    match app.store.update(record_id, RecordUpdate::status(next)) {
        Ok(_) => app.set_status(format!("Status set to {}", next)),
        Err(e) => app.set_status(format!("Status changed but not saved: {}", e)),
    }
    app.clamp_record_selection();
}

fn handle_resolve_delete(app: &mut App, confirmation: Confirmation) {
    let Some(ctx) = app.delete_context.take() else {
        app.navigate_to(View::Main);
        return;
    };
    match app.store.remove(&ctx.record_id, confirmation) {
        Ok(true) => app.set_status(format!("Deleted {}", ctx.display_label)),
        Ok(false) => app.clear_status(),
        Err(e) => app.set_status(format!("Deleted in memory only: {}", e)),
    }
    app.clamp_record_selection();
    app.navigate_to(View::Main);
}

async fn handle_import_file(app: &mut App, path: &Path) {
    let Some((category, sub_category)) = app
        .active_entry()
        .map(|(c, s)| (c.to_string(), s.to_string()))
    else {
        app.navigate_to(View::Main);
        return;
    };

    if let Err(e) = check_extension(path) {
        app.show_notice("Import failed", e.to_string(), true);
        return;
    }

    // Spreadsheet exports are often not UTF-8; undecodable bytes become U+FFFD.
    let text = match tokio::fs::read(path).await {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read import file");
            app.show_notice("Import failed", format!("Could not read {}: {}", path.display(), e), true);
            return;
        }
    };

    app.navigate_to(View::Main);
    let today = app.today();
    match import_text(&mut app.store, &text, &category, &sub_category, today) {
        Ok(outcome) => {
            let mut message = format!("Imported {} job record(s).", outcome.imported);
            if outcome.skipped > 0 {
                message.push_str(&format!(" {} line(s) with fewer than 5 columns were skipped.", outcome.skipped));
            }
            app.show_notice("Import finished", message, false);
            app.search_input.clear();
            app.focused_record_index = Some(0);
            app.records_scroll = 0;
        }
        Err(ImportError::Store(e)) => {
            app.show_notice("Import not saved", format!("Records were added but could not be saved: {}", e), true);
        }
        Err(e) => app.show_notice("Import failed", e.to_string(), true),
    }
}

async fn handle_export_template(app: &mut App) {
    let Some((category, sub_category)) = app.active_entry() else {
        return;
    };
    let template = ImportTemplate::for_category(category, sub_category, app.today());
    match write_template(&app.template_dir, &template).await {
        Ok(path) => {
            tracing::info!(path = %path.display(), "template exported");
            app.set_status(format!("Template written to {}", path.display()));
        }
        Err(e) => app.set_status(format!("Template export failed: {:#}", e)),
    }
}

pub(crate) async fn write_template(dir: &Path, template: &ImportTemplate) -> anyhow::Result<PathBuf> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(&template.file_name);
    tokio::fs::write(&path, &template.contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    Ok(path)
}
