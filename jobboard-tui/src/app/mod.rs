use crate::config::JobboardConfig;
use jobboard::domain::Record;
use jobboard::{Navigation, RecordStore, Route, Storage};
use std::path::PathBuf;

mod form;
mod navigation;
mod records;
mod state;
pub use state::{
    DeleteContext, Focus, FormField, Notice, RecordForm, SidebarItem, TextInput, View,
};

pub type Store = RecordStore<Box<dyn Storage>>;

pub struct App {
    pub running: bool,
    pub store: Store,
    pub nav: Navigation,
    pub status_message: Option<String>,
    pub current_view: View,
    pub focus: Focus,

    // Sidebar
    pub expanded_categories: Vec<bool>,
    pub sidebar_index: usize,

    // Record list
    pub search_input: TextInput,
    pub search_focused: bool,
    pub focused_record_index: Option<usize>,
    pub records_scroll: usize,
    pub records_view_height: usize, // Last-rendered inner height (updated by renderer each frame)

    // Manual entry form
    pub record_form: Option<RecordForm>,

    // Import prompt
    pub import_path_input: TextInput,

    // Delete confirmation
    pub delete_context: Option<DeleteContext>,

    // Blocking notice, rendered over every view
    pub notice: Option<Notice>,

    pub template_dir: PathBuf,
}

impl App {
    pub fn new(store: Store, cfg: &JobboardConfig) -> Self {
        let mut expanded_categories = vec![false; jobboard::domain::MENU_STRUCTURE.len()];
        if let Some(first) = expanded_categories.first_mut() {
            *first = true;
        }
        Self {
            running: true,
            store,
            nav: Navigation::new(),
            status_message: None,
            current_view: View::Main,
            focus: Focus::Sidebar,
            expanded_categories,
            sidebar_index: 0,
            search_input: TextInput::new(),
            search_focused: false,
            focused_record_index: None,
            records_scroll: 0,
            records_view_height: 0,
            record_form: None,
            import_path_input: TextInput::new(),
            delete_context: None,
            notice: None,
            template_dir: cfg.template_dir(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn show_notice(&mut self, title: &str, message: String, is_error: bool) {
        self.notice = Some(Notice {
            title: title.to_string(),
            message,
            is_error,
        });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    pub fn today(&self) -> time::Date {
        jobboard::dates::today_local()
    }

    /// The active `(category, sub_category)` when the record list is showing.
    pub fn active_entry(&self) -> Option<(&str, &str)> {
        match self.nav.route() {
            Route::Records {
                category,
                sub_category,
            } => Some((category, sub_category)),
            _ => None,
        }
    }

    /// Records of the active menu entry after the search filter, newest first.
    pub fn visible_records(&self) -> Vec<&Record> {
        match self.active_entry() {
            Some((category, sub_category)) => self
                .store
                .filtered(category, sub_category, &self.search_input.value)
                .collect(),
            None => Vec::new(),
        }
    }

    pub fn focused_record(&self) -> Option<&Record> {
        let idx = self.focused_record_index?;
        self.visible_records().get(idx).copied()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use jobboard::domain::{Record, Status};
    use jobboard::MemoryStorage;

    pub fn test_app() -> App {
        let store: Store = RecordStore::load(Box::new(MemoryStorage::new()));
        App::new(store, &JobboardConfig::default())
    }

    pub fn record(id: &str, category: &str, sub: &str, branch: &str) -> Record {
        Record {
            id: id.to_string(),
            category: category.to_string(),
            sub_category: sub.to_string(),
            date_input: "2024-01-01".to_string(),
            branch_dept: branch.to_string(),
            job_type: "Input Data".to_string(),
            status: Status::Pending,
            deadline: "2099-01-10".to_string(),
            activation_date: None,
        }
    }

    /// App opened on `Problem / SLA` with three records, newest first: c, b, a.
    pub fn app_with_records() -> App {
        let mut app = test_app();
        app.store
            .bulk_add(vec![
                record("c", "Problem", "SLA", "Cirebon"),
                record("b", "Problem", "SLA", "Bandung"),
                record("x", "Problem", "Tarif", "Jakarta"),
                record("a", "Problem", "SLA", "Aceh"),
            ])
            .unwrap();
        app.open_menu_entry("Problem", "SLA");
        app
    }
}
