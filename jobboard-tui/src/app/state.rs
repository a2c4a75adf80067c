use jobboard::domain::{is_production_master_data, RecordDraft, Status};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    /// Dashboard or record list, depending on the navigation route.
    Main,
    RecordForm,
    ImportPrompt,
    ConfirmDelete,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Sidebar,
    Body,
}

/// One selectable row of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SidebarItem {
    Dashboard,
    Category(usize),
    SubCategory(usize, usize),
}

/// Blocking message box, dismissed with Enter or Esc.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub message: String,
    pub is_error: bool,
}

/// Record awaiting delete confirmation.
#[derive(Debug, Clone, PartialEq)]
pub struct DeleteContext {
    pub record_id: String,
    pub display_label: String,
    pub display_deadline: String,
}

/// A text input with mid-string cursor support.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextInput {
    pub value: String,
    pub cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_str(s: &str) -> Self {
        Self {
            value: s.to_string(),
            cursor: s.len(),
        }
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = self.value[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.value.drain(new_cursor..self.cursor);
        self.cursor = new_cursor;
    }

    pub fn move_left(&mut self) {
        if let Some((i, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.cursor = i;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Returns the string split at the cursor: (before, after).
    pub fn split_at_cursor(&self) -> (&str, &str) {
        (&self.value[..self.cursor], &self.value[self.cursor..])
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormField {
    DateInput,
    BranchDept,
    JobType,
    ActivationDate,
    Status,
    Deadline,
}

impl FormField {
    pub fn label(&self) -> &'static str {
        match self {
            FormField::DateInput => "Input date",
            FormField::BranchDept => "Branch / Dept",
            FormField::JobType => "Job type",
            FormField::ActivationDate => "Activation date",
            FormField::Status => "Status",
            FormField::Deadline => "Deadline",
        }
    }

    pub fn is_date(&self) -> bool {
        matches!(
            self,
            FormField::DateInput | FormField::ActivationDate | FormField::Deadline
        )
    }
}

/// Manual entry form for the active menu entry.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordForm {
    pub category: String,
    pub sub_category: String,
    pub date_input: TextInput,
    pub branch_dept: TextInput,
    pub job_type: TextInput,
    pub activation_date: TextInput,
    pub status: Status,
    pub deadline: TextInput,
    pub focused_field: FormField,
    pub validation_error: Option<String>,
}

impl RecordForm {
    pub fn new(category: &str, sub_category: &str, today: time::Date) -> Self {
        let draft = RecordDraft::new(today);
        Self {
            category: category.to_string(),
            sub_category: sub_category.to_string(),
            date_input: TextInput::from_str(&draft.date_input),
            branch_dept: TextInput::new(),
            job_type: TextInput::new(),
            activation_date: TextInput::new(),
            status: draft.status,
            deadline: TextInput::new(),
            focused_field: FormField::BranchDept,
            validation_error: None,
        }
    }

    /// Fields in display order; the activation date only exists for
    /// production master data.
    pub fn fields(&self) -> Vec<FormField> {
        let mut fields = vec![FormField::DateInput, FormField::BranchDept, FormField::JobType];
        if is_production_master_data(&self.category) {
            fields.push(FormField::ActivationDate);
        }
        fields.extend([FormField::Status, FormField::Deadline]);
        fields
    }

    pub fn input_mut(&mut self, field: FormField) -> Option<&mut TextInput> {
        match field {
            FormField::DateInput => Some(&mut self.date_input),
            FormField::BranchDept => Some(&mut self.branch_dept),
            FormField::JobType => Some(&mut self.job_type),
            FormField::ActivationDate => Some(&mut self.activation_date),
            FormField::Deadline => Some(&mut self.deadline),
            FormField::Status => None,
        }
    }

    pub fn input(&self, field: FormField) -> Option<&TextInput> {
        match field {
            FormField::DateInput => Some(&self.date_input),
            FormField::BranchDept => Some(&self.branch_dept),
            FormField::JobType => Some(&self.job_type),
            FormField::ActivationDate => Some(&self.activation_date),
            FormField::Deadline => Some(&self.deadline),
            FormField::Status => None,
        }
    }

    pub fn to_draft(&self) -> RecordDraft {
        RecordDraft {
            date_input: self.date_input.value.clone(),
            branch_dept: self.branch_dept.value.clone(),
            job_type: self.job_type.value.clone(),
            status: self.status,
            deadline: self.deadline.value.clone(),
            activation_date: self.activation_date.value.clone(),
        }
    }
}
