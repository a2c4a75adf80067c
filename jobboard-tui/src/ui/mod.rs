use crate::app::{App, View};
use jobboard::Route;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Cell, Clear, List, ListItem, Padding, Paragraph, Row, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Table, Wrap,
    },
    Frame,
};

mod dashboard_view;
mod delete_dialog;
mod form_view;
mod header;
mod import_dialog;
mod records_view;
mod sidebar;
pub(super) mod utils;

const SIDEBAR_WIDTH: u16 = 30;

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(frame.area());

    header::render_header(frame, root[0], app);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(root[1]);

    sidebar::render_sidebar(frame, app, columns[0]);

    let body = columns[1];
    match app.current_view {
        View::Main => render_main_body(frame, app, body),
        View::RecordForm => form_view::render_record_form(frame, app, body),
        View::ImportPrompt => import_dialog::render_import_dialog(frame, app, body),
        View::ConfirmDelete => delete_dialog::render_delete_confirm_dialog(frame, app, body),
    }

    // Notice overlay, rendered on top of any view
    if app.notice.is_some() {
        render_notice_overlay(frame, app);
    }
}

fn render_main_body(frame: &mut Frame, app: &mut App, body: Rect) {
    match app.nav.route() {
        Route::Dashboard => dashboard_view::render_dashboard(frame, app, body),
        Route::Shell { category } => render_shell(frame, category, body),
        Route::Records { .. } => records_view::render_records_view(frame, app, body),
    }
}

/// A category is expanded but no sub-menu picked yet: only the frame is shown.
fn render_shell(frame: &mut Frame, category: &str, body: Rect) {
    let hint = Paragraph::new(Line::from(Span::styled(
        "Pick a sub-menu in the sidebar",
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(Span::styled(
                format!(" {} ", category),
                Style::default().fg(Color::White),
            ))
            .padding(Padding::new(0, 0, 2, 0)),
    );
    frame.render_widget(hint, body);
}

fn render_notice_overlay(frame: &mut Frame, app: &App) {
    let Some(notice) = &app.notice else {
        return;
    };

    let accent = if notice.is_error {
        Color::Red
    } else {
        Color::Green
    };

    let width = 64.min(frame.area().width);
    // Rough wrap estimate: message lines plus borders, padding and the button row.
    let text_rows = (notice.message.chars().count() as u16 / width.saturating_sub(6).max(1)) + 1;
    let area = utils::centered_rect(width, text_rows + 6, frame.area());
    frame.render_widget(Clear, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            notice.message.as_str(),
            Style::default().fg(Color::White),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(": OK"),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(accent))
                .title(Span::styled(
                    format!(" {} ", notice.title),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ))
                .padding(Padding::horizontal(2)),
        );

    frame.render_widget(paragraph, area);
}
