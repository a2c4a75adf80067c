use super::*;

pub fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let breadcrumb = match app.nav.route() {
        Route::Dashboard => "Dashboard".to_string(),
        Route::Shell { category } => category.to_string(),
        Route::Records {
            category,
            sub_category,
        } => format!("{} › {}", category, sub_category),
    };

    let mut spans = vec![
        Span::styled(
            " Jobboard ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(breadcrumb, Style::default().fg(Color::White)),
    ];

    if let Some(msg) = &app.status_message {
        spans.push(Span::styled("  ·  ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.as_str(), Style::default().fg(Color::Yellow)));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}
