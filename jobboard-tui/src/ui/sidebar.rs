use super::*;
use crate::app::{Focus, SidebarItem};
use jobboard::domain::MENU_STRUCTURE;

pub fn render_sidebar(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Sidebar && app.current_view == View::Main;
    let route = app.nav.route();

    let items: Vec<ListItem> = app
        .sidebar_items()
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            let (text, active) = match item {
                SidebarItem::Dashboard => ("Dashboard".to_string(), route == Route::Dashboard),
                SidebarItem::Category(ci) => {
                    let category = MENU_STRUCTURE[ci];
                    let marker = if app.expanded_categories[ci] { "▾" } else { "▸" };
                    (
                        format!("{} {}", marker, category.name),
                        app.nav.category() == Some(category.name),
                    )
                }
                SidebarItem::SubCategory(ci, si) => {
                    let category = MENU_STRUCTURE[ci];
                    let sub = category.submenus[si];
                    (
                        format!("    {}", sub),
                        app.active_entry() == Some((category.name, sub)),
                    )
                }
            };

            let mut style = if focused && i == app.sidebar_index {
                Style::default().fg(Color::Yellow)
            } else if matches!(item, SidebarItem::SubCategory(..)) {
                Style::default().fg(Color::Gray)
            } else {
                Style::default().fg(Color::White)
            };
            if active {
                style = style.add_modifier(Modifier::BOLD);
            }
            let prefix = if focused && i == app.sidebar_index { "▶ " } else { "  " };
            ListItem::new(format!("{}{}", prefix, text)).style(style)
        })
        .collect();

    let border = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(" Menu ", border))
            .padding(Padding::new(0, 1, 1, 0)),
    );
    frame.render_widget(list, area);
}
