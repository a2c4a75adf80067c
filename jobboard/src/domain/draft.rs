use thiserror::Error;
use time::Date;

use super::{is_production_master_data, Record, Status};
use crate::dates::{format_iso_date, parse_iso_date};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be a date (YYYY-MM-DD), got '{value}'")]
    InvalidDate { field: &'static str, value: String },
}

/// Raw values of the manual entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordDraft {
    pub date_input: String,
    pub branch_dept: String,
    pub job_type: String,
    pub status: Status,
    pub deadline: String,
    pub activation_date: String,
}

impl RecordDraft {
    pub fn new(today: Date) -> Self {
        Self {
            date_input: format_iso_date(today),
            ..Default::default()
        }
    }

    /// Validates the draft and builds a record under the given menu entry.
    /// An empty input date falls back to `today`.
    pub fn into_record(self, category: &str, sub_category: &str, today: Date) -> Result<Record, FormError> {
        let date_input = match self.date_input.trim() {
            "" => format_iso_date(today),
            s => check_date("Input date", s)?,
        };
        let branch_dept = required("Branch / Dept", &self.branch_dept)?;
        let job_type = required("Job type", &self.job_type)?;
        let deadline = check_date("Deadline", &required("Deadline", &self.deadline)?)?;
        let activation_date = if is_production_master_data(category) {
            let value = required("Activation date", &self.activation_date)?;
            Some(check_date("Activation date", &value)?)
        } else {
            None
        };

        Ok(Record {
            id: Record::new_id(),
            category: category.to_string(),
            sub_category: sub_category.to_string(),
            date_input,
            branch_dept,
            job_type,
            status: self.status,
            deadline,
            activation_date,
        })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(FormError::Missing(field));
    }
    Ok(value.to_string())
}

fn check_date(field: &'static str, value: &str) -> Result<String, FormError> {
    match parse_iso_date(value) {
        Some(d) => Ok(format_iso_date(d)),
        None => Err(FormError::InvalidDate {
            field,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PRODUCTION_MASTER_DATA;
    use time::macros::date;

    fn filled() -> RecordDraft {
        RecordDraft {
            date_input: "2024-01-01".to_string(),
            branch_dept: " Jakarta / Ops ".to_string(),
            job_type: "Update Routing".to_string(),
            status: Status::InProgress,
            deadline: "2024-01-08".to_string(),
            activation_date: "2024-01-03".to_string(),
        }
    }

    #[test]
    fn builds_record_for_regular_category() {
        let r = filled()
            .into_record("Penyesuaian", "Routing", date!(2024 - 01 - 01))
            .unwrap();
        assert_eq!(r.category, "Penyesuaian");
        assert_eq!(r.sub_category, "Routing");
        assert_eq!(r.branch_dept, "Jakarta / Ops");
        assert_eq!(r.status, Status::InProgress);
        assert_eq!(r.activation_date, None);
        assert!(!r.id.is_empty());
    }

    #[test]
    fn production_master_data_requires_activation_date() {
        let mut draft = filled();
        draft.activation_date.clear();
        let err = draft
            .into_record(PRODUCTION_MASTER_DATA, "Cabang", date!(2024 - 01 - 01))
            .unwrap_err();
        assert_eq!(err, FormError::Missing("Activation date"));

        let r = filled()
            .into_record(PRODUCTION_MASTER_DATA, "Cabang", date!(2024 - 01 - 01))
            .unwrap();
        assert_eq!(r.activation_date.as_deref(), Some("2024-01-03"));
    }

    #[test]
    fn rejects_missing_and_malformed_fields() {
        let mut draft = filled();
        draft.job_type = "  ".to_string();
        assert_eq!(
            draft.into_record("Problem", "SLA", date!(2024 - 01 - 01)),
            Err(FormError::Missing("Job type"))
        );

        let mut draft = filled();
        draft.deadline = "next week".to_string();
        assert!(matches!(
            draft.into_record("Problem", "SLA", date!(2024 - 01 - 01)),
            Err(FormError::InvalidDate { field: "Deadline", .. })
        ));
    }

    #[test]
    fn empty_input_date_defaults_to_today() {
        let mut draft = filled();
        draft.date_input.clear();
        let r = draft.into_record("Problem", "SLA", date!(2024 - 05 - 06)).unwrap();
        assert_eq!(r.date_input, "2024-05-06");
    }
}
