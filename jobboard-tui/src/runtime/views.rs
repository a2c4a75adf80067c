use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent};

use super::action_queue::{Action, ActionTx};

mod confirm_delete;
mod import_prompt;
mod main_view;
mod record_form;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_notice_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => app.dismiss_notice(),
        _ => {}
    }
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match &app.current_view {
        View::Main => main_view::handle_main_key(key, app, action_tx),
        View::RecordForm => record_form::handle_record_form_key(key, app, action_tx),
        View::ImportPrompt => import_prompt::handle_import_prompt_key(key, app, action_tx),
        View::ConfirmDelete => confirm_delete::handle_confirm_delete_key(key, app, action_tx),
    }
}
