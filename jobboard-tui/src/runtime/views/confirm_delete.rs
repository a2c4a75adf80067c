use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};
use jobboard::Confirmation;

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_confirm_delete_key(key: KeyEvent, _app: &mut App, action_tx: &ActionTx) {
    let confirmation = match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Confirmation::Confirmed,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Confirmation::Declined,
        _ => return,
    };
    enqueue_action(action_tx, Action::ResolveDelete { confirmation });
}
