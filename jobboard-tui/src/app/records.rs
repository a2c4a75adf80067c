use super::*;
use jobboard::dates::display_date;

impl App {
    pub fn select_previous_record(&mut self) {
        if let Some(idx) = self.focused_record_index {
            self.focused_record_index = Some(idx.saturating_sub(1));
        } else if !self.visible_records().is_empty() {
            self.focused_record_index = Some(0);
        }
    }

    pub fn select_next_record(&mut self) {
        let len = self.visible_records().len();
        if len == 0 {
            self.focused_record_index = None;
            return;
        }
        self.focused_record_index = Some(match self.focused_record_index {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    /// Moves the selection by one rendered page of the record table.
    pub fn page_records(&mut self, down: bool) {
        let len = self.visible_records().len();
        if len == 0 {
            self.focused_record_index = None;
            return;
        }
        let page = self.records_view_height.max(1);
        let idx = self.focused_record_index.unwrap_or(0);
        self.focused_record_index = Some(if down {
            (idx + page).min(len - 1)
        } else {
            idx.saturating_sub(page)
        });
    }

    /// Keeps the selection on a visible row after the list changed.
    pub fn clamp_record_selection(&mut self) {
        let len = self.visible_records().len();
        self.focused_record_index = match (len, self.focused_record_index) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(idx)) => Some(idx.min(len - 1)),
        };
    }

    pub fn search_input_char(&mut self, c: char) {
        self.search_input.insert(c);
        self.records_scroll = 0;
        self.clamp_record_selection();
    }

    pub fn search_input_backspace(&mut self) {
        self.search_input.backspace();
        self.clamp_record_selection();
    }

    pub fn search_input_clear(&mut self) {
        self.search_input.clear();
        self.clamp_record_selection();
    }

    /// Populate delete_context from the focused record and switch to ConfirmDelete.
    pub fn enter_delete_confirm(&mut self) {
        let Some(record) = self.focused_record() else {
            return;
        };
        let ctx = DeleteContext {
            record_id: record.id.clone(),
            display_label: format!("{} / {}", record.branch_dept, record.job_type),
            display_deadline: display_date(&record.deadline),
        };
        self.delete_context = Some(ctx);
        self.navigate_to(View::ConfirmDelete);
    }

    pub fn open_import_prompt(&mut self) {
        if self.active_entry().is_none() {
            return;
        }
        let mut start = self.template_dir.display().to_string();
        if !start.ends_with(std::path::MAIN_SEPARATOR) {
            start.push(std::path::MAIN_SEPARATOR);
        }
        self.import_path_input = TextInput::from_str(&start);
        self.navigate_to(View::ImportPrompt);
    }
}
