use super::*;
use jobboard::domain::MENU_STRUCTURE;

impl App {
    /// Sidebar rows in display order, honoring which categories are expanded.
    pub fn sidebar_items(&self) -> Vec<SidebarItem> {
        let mut items = vec![SidebarItem::Dashboard];
        for (ci, category) in MENU_STRUCTURE.iter().enumerate() {
            items.push(SidebarItem::Category(ci));
            if self.expanded_categories.get(ci).copied().unwrap_or(false) {
                items.extend((0..category.submenus.len()).map(|si| SidebarItem::SubCategory(ci, si)));
            }
        }
        items
    }

    pub fn sidebar_up(&mut self) {
        self.sidebar_index = self.sidebar_index.saturating_sub(1);
    }

    pub fn sidebar_down(&mut self) {
        let len = self.sidebar_items().len();
        if self.sidebar_index + 1 < len {
            self.sidebar_index += 1;
        }
    }

    /// Handle Enter on the highlighted sidebar row
    pub fn sidebar_activate(&mut self) {
        let Some(item) = self.sidebar_items().get(self.sidebar_index).copied() else {
            return;
        };
        match item {
            SidebarItem::Dashboard => self.open_dashboard(),
            // Expanding only reveals the sub-menus; the body keeps its route.
            SidebarItem::Category(ci) => {
                self.expanded_categories[ci] = !self.expanded_categories[ci];
            }
            SidebarItem::SubCategory(ci, si) => {
                let category = MENU_STRUCTURE[ci];
                self.open_menu_entry(category.name, category.submenus[si]);
            }
        }
    }

    pub fn open_dashboard(&mut self) {
        self.nav.dashboard();
        self.current_view = View::Main;
        self.sidebar_index = 0;
        self.reset_record_list();
    }

    /// Selects a menu entry and shows its record list.
    pub fn open_menu_entry(&mut self, category: &str, sub_category: &str) {
        if let Err(e) = self.nav.select(category, sub_category) {
            self.set_status(e.to_string());
            return;
        }
        if let Some(ci) = MENU_STRUCTURE.iter().position(|c| c.name == category) {
            self.expanded_categories[ci] = true;
            let si = MENU_STRUCTURE[ci].submenus.iter().position(|s| *s == sub_category);
            if let Some(pos) = self
                .sidebar_items()
                .iter()
                .position(|item| Some(*item) == si.map(|si| SidebarItem::SubCategory(ci, si)))
            {
                self.sidebar_index = pos;
            }
        }
        self.current_view = View::Main;
        self.focus = Focus::Body;
        self.reset_record_list();
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Sidebar => Focus::Body,
            Focus::Body => Focus::Sidebar,
        };
        self.search_focused = false;
    }

    pub(super) fn reset_record_list(&mut self) {
        self.search_input.clear();
        self.search_focused = false;
        self.records_scroll = 0;
        self.focused_record_index = if self.visible_records().is_empty() {
            None
        } else {
            Some(0)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::test_app;
    use super::*;
    use jobboard::Route;

    #[test]
    fn first_category_starts_expanded() {
        let app = test_app();
        let items = app.sidebar_items();
        assert_eq!(items[0], SidebarItem::Dashboard);
        assert_eq!(items[1], SidebarItem::Category(0));
        assert_eq!(items[2], SidebarItem::SubCategory(0, 0));
        // Dashboard + 4 categories + 3 sub-items of the first.
        assert_eq!(items.len(), 8);
    }

    #[test]
    fn expanding_a_category_keeps_the_current_view() {
        let mut app = test_app();
        app.open_menu_entry("Problem", "SLA");
        // Dashboard, Penyesuaian, 3 subs, Request Data
        app.sidebar_index = 5;
        app.sidebar_activate();

        assert!(app.expanded_categories[1]);
        assert_eq!(
            app.nav.route(),
            Route::Records {
                category: "Problem",
                sub_category: "SLA"
            }
        );

        app.sidebar_down();
        app.sidebar_activate();
        assert_eq!(
            app.nav.route(),
            Route::Records {
                category: "Request Data",
                sub_category: "KCU"
            }
        );
        assert_eq!(app.focus, Focus::Body);

        // Collapsing from the dashboard leaves the dashboard in place.
        app.open_dashboard();
        app.sidebar_index = 1;
        app.sidebar_activate();
        assert!(!app.expanded_categories[0]);
        assert_eq!(app.nav.route(), Route::Dashboard);
    }

    #[test]
    fn dashboard_entry_clears_selection() {
        let mut app = test_app();
        app.open_menu_entry("Problem", "Biaya");
        assert_eq!(app.sidebar_items()[app.sidebar_index], SidebarItem::SubCategory(2, 2));

        app.sidebar_index = 0;
        app.sidebar_activate();
        assert_eq!(app.nav.route(), Route::Dashboard);
    }

    #[test]
    fn unknown_menu_entry_reports_status() {
        let mut app = test_app();
        app.open_menu_entry("Problem", "Nope");
        assert_eq!(app.nav.route(), Route::Dashboard);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn sidebar_cursor_stays_in_bounds() {
        let mut app = test_app();
        app.sidebar_up();
        assert_eq!(app.sidebar_index, 0);
        for _ in 0..50 {
            app.sidebar_down();
        }
        assert_eq!(app.sidebar_index, app.sidebar_items().len() - 1);
    }
}
