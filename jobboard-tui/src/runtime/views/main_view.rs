use crate::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_main_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if app.search_focused {
        handle_search_key(key, app);
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        _ => match app.focus {
            Focus::Sidebar => handle_sidebar_key(key, app),
            Focus::Body => handle_body_key(key, app, action_tx),
        },
    }
}

fn handle_search_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab | KeyCode::Down => {
            app.search_focused = false;
        }
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input_clear();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input_char(c);
        }
        KeyCode::Backspace => app.search_input_backspace(),
        KeyCode::Left => app.search_input.move_left(),
        KeyCode::Right => app.search_input.move_right(),
        _ => {}
    }
}

fn handle_sidebar_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.sidebar_up(),
        KeyCode::Down | KeyCode::Char('j') => app.sidebar_down(),
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => app.sidebar_activate(),
        _ => {}
    }
}

fn handle_body_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    if app.active_entry().is_none() {
        // Dashboard and the category shell have nothing to act on.
        if matches!(key.code, KeyCode::Esc | KeyCode::Left | KeyCode::Char('h')) {
            app.focus = Focus::Sidebar;
        }
        return;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_previous_record(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_record(),
        KeyCode::PageUp => app.page_records(false),
        KeyCode::PageDown => app.page_records(true),
        KeyCode::Char('/') => app.search_focused = true,
        KeyCode::Char('x') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.search_input_clear();
        }
        KeyCode::Char('n') | KeyCode::Char('N') => app.open_record_form(),
        KeyCode::Char('i') | KeyCode::Char('I') => app.open_import_prompt(),
        KeyCode::Char('t') | KeyCode::Char('T') => {
            enqueue_action(action_tx, Action::ExportTemplate);
        }
        KeyCode::Char('s') | KeyCode::Char('S') => {
            if let Some(record) = app.focused_record() {
                let record_id = record.id.clone();
                enqueue_action(action_tx, Action::CycleStatus { record_id });
            }
        }
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => {
            app.enter_delete_confirm();
        }
        KeyCode::Esc | KeyCode::Char('h') => app.focus = Focus::Sidebar,
        _ => {}
    }
}
