use super::utils::{controls_bar, status_color};
use super::*;
use jobboard::dates::display_date;
use jobboard::domain::Status;
use jobboard::Summary;

/// Category bar colors, assigned in first-seen order.
pub const PALETTE: [Color; 8] = [
    Color::Blue,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Cyan,
    Color::LightBlue,
    Color::LightGreen,
    Color::LightMagenta,
];

pub fn render_dashboard(frame: &mut Frame, app: &App, body: Rect) {
    let summary = Summary::compute(app.store.records(), app.today());
    let preview_rows = summary.overdue_preview().len().max(1) as u16;
    let banner_height = if summary.overdue > 0 { 3 } else { 0 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(5),                // Stat cards
            Constraint::Length(banner_height),    // Overdue banner
            Constraint::Min(10),                  // Charts
            Constraint::Length(preview_rows + 3), // Overdue table
            Constraint::Length(3),                // Controls
        ])
        .split(body);

    render_stat_cards(frame, &summary, chunks[0]);
    if summary.overdue > 0 {
        render_overdue_banner(frame, &summary, chunks[1]);
    }

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    render_status_panel(frame, &summary, charts[0]);
    render_volume_panel(frame, &summary, charts[1]);

    render_overdue_table(frame, &summary, chunks[3]);

    frame.render_widget(
        controls_bar(&[("Tab", "Menu"), ("↑↓/j/k", "Navigate"), ("Q", "Quit")]),
        chunks[4],
    );
}

fn render_stat_cards(frame: &mut Frame, summary: &Summary, area: Rect) {
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);

    let values = [
        ("Total jobs", summary.total, Color::White),
        ("Completed", summary.completed, status_color(Status::Completed)),
        ("In process", summary.active(), status_color(Status::InProgress)),
        ("Overdue", summary.overdue, status_color(Status::Overdue)),
    ];

    for ((title, value, color), area) in values.into_iter().zip(cards.iter()) {
        let card = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                value.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(
                    format!(" {} ", title),
                    Style::default().fg(Color::Gray),
                )),
        );
        frame.render_widget(card, *area);
    }
}

fn render_overdue_banner(frame: &mut Frame, summary: &Summary, area: Rect) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            "⚠ Attention: ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "{} job(s) are past their deadline and not completed.",
                summary.overdue
            ),
            Style::default().fg(Color::White),
        ),
    ]))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red)),
    );
    frame.render_widget(banner, area);
}

fn render_status_panel(frame: &mut Frame, summary: &Summary, area: Rect) {
    use tui_piechart::{PieChart, PieSlice};

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(
            " Status distribution ",
            Style::default().fg(Color::White),
        ))
        .padding(Padding::horizontal(2));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let distribution = summary.status_distribution();
    let colors = [
        status_color(Status::Pending),
        status_color(Status::InProgress),
        status_color(Status::Completed),
        status_color(Status::Overdue),
    ];
    let total: usize = distribution.iter().map(|(_, n)| n).sum();

    if total == 0 {
        let empty = Paragraph::new("No data")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    // Zero-count slices are left out of the pie but kept in the legend.
    let slices: Vec<PieSlice> = distribution
        .iter()
        .zip(colors)
        .filter(|((_, n), _)| *n > 0)
        .map(|((label, n), color)| PieSlice::new(*label, *n as f64, color))
        .collect();

    let legend_rows = distribution.len() as u16 + 1;
    let pie_height = (inner.width / 2)
        .min(inner.height.saturating_sub(legend_rows))
        .max(1);

    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(pie_height), Constraint::Min(0)])
        .split(inner);

    let pie = PieChart::new(slices)
        .show_legend(false)
        .show_percentages(false);
    frame.render_widget(pie, split[0]);

    let legend_lines: Vec<Line> = distribution
        .iter()
        .zip(colors)
        .map(|((label, n), color)| {
            let pct = *n as f64 / total as f64 * 100.0;
            Line::from(vec![
                Span::styled("■ ", Style::default().fg(color)),
                Span::styled(
                    format!("{}: {} ({:.0}%)", label, n, pct),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();
    let legend = Paragraph::new(legend_lines)
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::new(0, 0, 1, 0)));
    frame.render_widget(legend, split[1]);
}

fn render_volume_panel(frame: &mut Frame, summary: &Summary, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(
            " Volume per category ",
            Style::default().fg(Color::White),
        ))
        .padding(Padding::new(2, 2, 1, 0));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if summary.category_volume.is_empty() {
        let empty = Paragraph::new("No data")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(empty, inner);
        return;
    }

    let max = summary
        .category_volume
        .iter()
        .map(|(_, n)| *n)
        .max()
        .unwrap_or(0);
    // Count column: "  NNNN"
    let bar_cols = (inner.width as usize).saturating_sub(6).max(1);

    let mut lines: Vec<Line> = Vec::new();
    for (i, (category, count)) in summary.category_volume.iter().enumerate() {
        let color = PALETTE[i % PALETTE.len()];
        lines.push(Line::from(Span::styled(
            category.as_str(),
            Style::default().fg(Color::Gray),
        )));

        let filled = if max == 0 {
            0
        } else {
            ((*count as f64 / max as f64) * bar_cols as f64).round() as usize
        }
        .min(bar_cols);
        lines.push(Line::from(vec![
            Span::styled("█".repeat(filled), Style::default().fg(color)),
            Span::styled(
                "░".repeat(bar_cols - filled),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(format!("  {:>4}", count), Style::default().fg(Color::White)),
        ]));
        lines.push(Line::raw(""));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_overdue_table(frame: &mut Frame, summary: &Summary, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White))
        .title(Span::styled(
            " Needs attention ",
            Style::default().fg(Color::White),
        ))
        .padding(Padding::horizontal(1));

    let preview = summary.overdue_preview();
    if preview.is_empty() {
        let empty = Paragraph::new(Span::styled(
            "No overdue jobs",
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center)
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let rows: Vec<Row> = preview
        .iter()
        .map(|record| {
            Row::new(vec![
                Cell::from(record.branch_dept.as_str()),
                Cell::from(record.job_type.as_str()),
                Cell::from(format!("{} › {}", record.category, record.sub_category)),
                Cell::from(display_date(&record.deadline))
                    .style(Style::default().fg(Color::Red)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(15),
        ],
    )
    .header(
        Row::new(vec!["Branch / Dept", "Job type", "Menu", "Deadline"])
            .style(Style::default().fg(Color::DarkGray)),
    )
    .block(block);
    frame.render_widget(table, area);
}
