use super::utils::{controls_bar, input_text, status_color};
use super::*;
use crate::app::FormField;

pub fn render_record_form(frame: &mut Frame, app: &App, body: Rect) {
    let Some(form) = &app.record_form else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(body);

    let label_style = |focused: bool| {
        if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    };

    let mut lines = vec![Line::from("")];
    for field in form.fields() {
        let focused = form.focused_field == field;
        let label = Span::styled(format!("{:<17}", field.label()), label_style(focused));

        let value = match (field, form.input(field)) {
            (FormField::Status, _) => {
                let status = form.status;
                let text = if focused {
                    format!("◂ {} ▸", status)
                } else {
                    status.to_string()
                };
                Span::styled(
                    text,
                    Style::default()
                        .fg(status_color(status))
                        .add_modifier(Modifier::BOLD),
                )
            }
            (_, Some(input)) => {
                let (before, after) = input.split_at_cursor();
                let mut text = input_text(before, after, focused);
                if input.value.is_empty() && !focused && field.is_date() {
                    text = "YYYY-MM-DD".to_string();
                }
                let style = if input.value.is_empty() && !focused {
                    Style::default().fg(Color::DarkGray)
                } else if focused {
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Span::styled(text, style)
            }
            (_, None) => Span::raw(""),
        };

        lines.push(Line::from(vec![label, value]));
        lines.push(Line::from(""));
    }

    if let Some(err) = &form.validation_error {
        lines.push(Line::from(Span::styled(
            err.as_str(),
            Style::default().fg(Color::Red),
        )));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .title(Span::styled(
                format!(" New record · {} › {} ", form.category, form.sub_category),
                Style::default().fg(Color::White),
            ))
            .padding(Padding::horizontal(2)),
    );
    frame.render_widget(paragraph, chunks[0]);

    let controls = if form.focused_field == FormField::Status {
        controls_bar(&[
            ("←→/Space", "Change status"),
            ("Tab", "Next field"),
            ("Ctrl+S", "Save"),
            ("Esc", "Cancel"),
        ])
    } else {
        controls_bar(&[
            ("Tab / ↓", "Next field"),
            ("Shift+Tab / ↑", "Previous"),
            ("Ctrl+S", "Save"),
            ("Esc", "Cancel"),
        ])
    };
    frame.render_widget(controls, chunks[1]);
}
