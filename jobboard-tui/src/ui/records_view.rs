use super::utils::{controls_bar, input_text, status_color};
use super::*;
use crate::app::Focus;
use jobboard::dates::display_date;
use jobboard::domain::is_production_master_data;

pub fn render_records_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let Some((category, sub_category)) = app
        .active_entry()
        .map(|(c, s)| (c.to_string(), s.to_string()))
    else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(0),    // Record table
            Constraint::Length(3), // Controls
        ])
        .split(body);

    render_search_box(frame, app, chunks[0]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if app.focus == Focus::Body && !app.search_focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        })
        .title(Span::styled(
            format!(
                " {} › {} ({}) ",
                category,
                sub_category,
                app.visible_records().len()
            ),
            Style::default().fg(Color::White),
        ))
        .padding(Padding::horizontal(1));
    let inner = block.inner(chunks[1]);
    frame.render_widget(block, chunks[1]);

    // One line is taken by the table header.
    let max_rows = inner.height.saturating_sub(1) as usize;
    app.records_view_height = max_rows;
    clamp_scroll(app, max_rows);

    let app: &App = app;
    let records = app.visible_records();
    let total_rows = records.len();

    if records.is_empty() {
        let text = if app.search_input.value.is_empty() {
            "No records yet. Press n to add one or i to import a file."
        } else {
            "No records match the search."
        };
        let empty = Paragraph::new(Span::styled(text, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Center)
            .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
        frame.render_widget(empty, inner);
    } else {
        let with_activation = is_production_master_data(&category);
        let today = app.today();
        let body_focused = app.focus == Focus::Body;

        let content_width = if total_rows > max_rows {
            inner.width.saturating_sub(1)
        } else {
            inner.width
        };

        let rows: Vec<Row> = records
            .iter()
            .enumerate()
            .skip(app.records_scroll)
            .take(max_rows)
            .map(|(i, record)| {
                let is_focused = body_focused && app.focused_record_index == Some(i);
                let overdue = record.is_overdue(today);

                let base = if is_focused {
                    Style::default().fg(Color::Yellow)
                } else if overdue {
                    Style::default().fg(Color::LightRed)
                } else {
                    Style::default().fg(Color::White)
                };

                let marker = if is_focused { "▶" } else { " " };
                let mut cells = vec![
                    Cell::from(format!("{} {}", marker, display_date(&record.date_input))),
                    Cell::from(record.branch_dept.as_str()),
                    Cell::from(record.job_type.as_str()),
                ];
                if with_activation {
                    cells.push(Cell::from(
                        record
                            .effective_activation_date()
                            .map(display_date)
                            .unwrap_or_else(|| "-".to_string()),
                    ));
                }
                cells.push(
                    Cell::from(record.status.as_str())
                        .style(Style::default().fg(status_color(record.status))),
                );
                let deadline = if overdue {
                    Cell::from(format!("{} !", display_date(&record.deadline))).style(
                        Style::default()
                            .fg(Color::Red)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    Cell::from(display_date(&record.deadline))
                };
                cells.push(deadline);

                Row::new(cells).style(base)
            })
            .collect();

        let mut header = vec!["  Input date", "Branch / Dept", "Job type"];
        let mut widths = vec![
            Constraint::Length(14),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ];
        if with_activation {
            header.push("Activation");
            widths.push(Constraint::Length(12));
        }
        header.extend(["Status", "Deadline"]);
        widths.extend([Constraint::Length(12), Constraint::Length(13)]);

        let table = Table::new(rows, widths).header(
            Row::new(header).style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
            ),
        );
        frame.render_widget(table, Rect::new(inner.x, inner.y, content_width, inner.height));

        if total_rows > max_rows {
            let mut scrollbar_state = ScrollbarState::new(total_rows)
                .position(app.records_scroll)
                .viewport_content_length(max_rows);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .style(Style::default().fg(Color::DarkGray)),
                inner,
                &mut scrollbar_state,
            );
        }
    }

    let controls = if app.search_focused {
        controls_bar(&[
            ("Type", "Filter"),
            ("Ctrl+X", "Clear"),
            ("Enter / Esc", "Done"),
        ])
    } else {
        controls_bar(&[
            ("↑↓/j/k", "Navigate"),
            ("PgUp/PgDn", "Page"),
            ("/", "Search"),
            ("N", "New"),
            ("I", "Import"),
            ("T", "Template"),
            ("S", "Status"),
            ("D", "Delete"),
            ("Tab", "Menu"),
            ("Q", "Quit"),
        ])
    };
    frame.render_widget(controls, chunks[2]);
}

fn render_search_box(frame: &mut Frame, app: &App, area: Rect) {
    let text = if app.search_input.value.is_empty() && !app.search_focused {
        "Press / to search branch or job type".to_string()
    } else {
        let (before, after) = app.search_input.split_at_cursor();
        input_text(before, after, app.search_focused)
    };
    let (text_style, border) = if app.search_focused {
        (Style::default().fg(Color::White), Style::default().fg(Color::Yellow))
    } else if app.search_input.value.is_empty() {
        (Style::default().fg(Color::DarkGray), Style::default().fg(Color::DarkGray))
    } else {
        (Style::default().fg(Color::White), Style::default().fg(Color::DarkGray))
    };

    let search_box = Paragraph::new(text).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(" Search ")
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(search_box, area);
}

/// Keeps the focused row inside the visible window.
fn clamp_scroll(app: &mut App, max_rows: usize) {
    let total = app.visible_records().len();
    if let Some(focused) = app.focused_record_index {
        if focused >= app.records_scroll + max_rows {
            app.records_scroll = focused + 1 - max_rows;
        }
        if focused < app.records_scroll {
            app.records_scroll = focused;
        }
    }
    if total <= max_rows {
        app.records_scroll = 0;
    } else if app.records_scroll > total - max_rows {
        app.records_scroll = total - max_rows;
    }
}
