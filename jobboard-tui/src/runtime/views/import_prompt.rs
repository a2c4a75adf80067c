use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_import_prompt_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Enter => {
            let path = app.import_path_input.value.trim().to_string();
            if path.is_empty() {
                app.set_status("Enter a .csv or .txt file path".to_string());
                return;
            }
            enqueue_action(action_tx, Action::ImportFile { path: PathBuf::from(path) });
        }
        KeyCode::Esc => {
            app.navigate_to(View::Main);
        }
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.import_path_input.clear();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.import_path_input.insert(c);
        }
        KeyCode::Backspace => app.import_path_input.backspace(),
        KeyCode::Left => app.import_path_input.move_left(),
        KeyCode::Right => app.import_path_input.move_right(),
        _ => {}
    }
}
