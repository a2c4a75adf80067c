use super::*;

impl App {
    pub fn open_record_form(&mut self) {
        let Some((category, sub_category)) = self.active_entry() else {
            return;
        };
        self.record_form = Some(RecordForm::new(category, sub_category, self.today()));
        self.navigate_to(View::RecordForm);
    }

    pub fn close_record_form(&mut self) {
        self.record_form = None;
        self.navigate_to(View::Main);
    }

    pub fn form_next_field(&mut self) {
        self.form_step_field(1);
    }

    pub fn form_prev_field(&mut self) {
        self.form_step_field(-1);
    }

    fn form_step_field(&mut self, step: isize) {
        if let Some(form) = &mut self.record_form {
            let fields = form.fields();
            let pos = fields
                .iter()
                .position(|f| *f == form.focused_field)
                .unwrap_or(0) as isize;
            let len = fields.len() as isize;
            form.focused_field = fields[(pos + step).rem_euclid(len) as usize];
        }
    }

    pub fn form_focused_field(&self) -> Option<FormField> {
        self.record_form.as_ref().map(|f| f.focused_field)
    }

    /// Types into the focused text field. Date fields only accept digits and '-'.
    pub fn form_input_char(&mut self, c: char) {
        if let Some(form) = &mut self.record_form {
            let field = form.focused_field;
            if field.is_date() && !(c.is_ascii_digit() || c == '-') {
                return;
            }
            if let Some(input) = form.input_mut(field) {
                input.insert(c);
                form.validation_error = None;
            }
        }
    }

    pub fn form_backspace(&mut self) {
        if let Some(form) = &mut self.record_form {
            if let Some(input) = form.input_mut(form.focused_field) {
                input.backspace();
            }
        }
    }

    pub fn form_move_cursor(&mut self, left: bool) {
        if let Some(form) = &mut self.record_form {
            if let Some(input) = form.input_mut(form.focused_field) {
                if left {
                    input.move_left();
                } else {
                    input.move_right();
                }
            }
        }
    }

    /// Cycles the status selector through the editable states.
    pub fn form_cycle_status(&mut self, forward: bool) {
        if let Some(form) = &mut self.record_form {
            if forward {
                form.status = form.status.next_editable();
            } else {
                // Two steps forward is one step back in a three-state cycle.
                form.status = form.status.next_editable().next_editable();
            }
        }
    }

    /// Validates the open form. On success the form is closed and the new record
    /// returned; on failure the error is kept on the form for display.
    pub fn take_form_record(&mut self) -> Option<Record> {
        let today = self.today();
        let form = self.record_form.as_mut()?;
        match form
            .to_draft()
            .into_record(&form.category, &form.sub_category, today)
        {
            Ok(record) => {
                self.close_record_form();
                Some(record)
            }
            Err(e) => {
                form.validation_error = Some(e.to_string());
                None
            }
        }
    }
}
