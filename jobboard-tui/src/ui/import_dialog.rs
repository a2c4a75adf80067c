use super::utils::{centered_rect, input_text};
use super::*;
use jobboard::domain::is_production_master_data;
use jobboard::{ACCEPTED_EXTENSIONS, REQUIRED_COLUMNS};

pub fn render_import_dialog(frame: &mut Frame, app: &mut App, body: Rect) {
    // Render the record list in the background
    super::records_view::render_records_view(frame, app, body);

    let Some((category, sub_category)) = app.active_entry() else {
        return;
    };

    let columns = if is_production_master_data(category) {
        format!("{} columns + activation date", REQUIRED_COLUMNS)
    } else {
        format!("{} columns", REQUIRED_COLUMNS)
    };
    let extensions = ACCEPTED_EXTENSIONS
        .iter()
        .map(|e| format!(".{}", e))
        .collect::<Vec<_>>()
        .join(", ");

    let area = centered_rect(72.min(frame.area().width), 11, frame.area());
    frame.render_widget(Clear, area);

    let (before, after) = app.import_path_input.split_at_cursor();
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("Import into {} › {}", category, sub_category),
            Style::default().fg(Color::White),
        )),
        Line::from(Span::styled(
            format!("{} files, {}, first line is skipped", extensions, columns),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("File: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                input_text(before, after, true),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Enter", Style::default().fg(Color::Yellow)),
            Span::raw(": Import  "),
            Span::styled("Ctrl+X", Style::default().fg(Color::Yellow)),
            Span::raw(": Clear  "),
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::raw(": Cancel"),
        ]),
    ];

    let paragraph = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Span::styled(
                " Import file ",
                Style::default().fg(Color::Yellow),
            ))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(paragraph, area);
}

