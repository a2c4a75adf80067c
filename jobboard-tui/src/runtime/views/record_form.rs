use crate::app::{App, FormField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_record_form_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let Some(field) = app.form_focused_field() else {
        return;
    };
    let on_status = field == FormField::Status;

    match key.code {
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            enqueue_action(action_tx, Action::SubmitRecordForm);
        }
        KeyCode::Tab | KeyCode::Down => app.form_next_field(),
        KeyCode::BackTab | KeyCode::Up => app.form_prev_field(),
        KeyCode::Left if on_status => app.form_cycle_status(false),
        KeyCode::Right if on_status => app.form_cycle_status(true),
        KeyCode::Char(' ') if on_status => app.form_cycle_status(true),
        KeyCode::Left => app.form_move_cursor(true),
        KeyCode::Right => app.form_move_cursor(false),
        KeyCode::Backspace => app.form_backspace(),
        KeyCode::Enter => {
            // Enter on the last field submits; elsewhere it advances.
            if field == FormField::Deadline {
                enqueue_action(action_tx, Action::SubmitRecordForm);
            } else {
                app.form_next_field();
            }
        }
        KeyCode::Esc => app.close_record_form(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.form_input_char(c);
        }
        _ => {}
    }
}
