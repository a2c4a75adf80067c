use serde::{Deserialize, Serialize};
use time::Date;

use super::{is_production_master_data, Status};
use crate::dates::parse_iso_date;

/// A tracked job, persisted as one element of the stored JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub category: String,
    pub sub_category: String,
    pub date_input: String,
    pub branch_dept: String,
    pub job_type: String,
    pub status: Status,
    pub deadline: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_date: Option<String>,
}

impl Record {
    pub fn new_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    pub fn deadline_date(&self) -> Option<Date> {
        parse_iso_date(&self.deadline)
    }

    /// Deadline strictly before `today` and not completed. A deadline that is
    /// not a valid date never counts as overdue.
    pub fn is_overdue(&self, today: Date) -> bool {
        self.status != Status::Completed && self.deadline_date().is_some_and(|d| d < today)
    }

    /// Activation date, honored only under production master data.
    pub fn effective_activation_date(&self) -> Option<&str> {
        if is_production_master_data(&self.category) {
            self.activation_date.as_deref()
        } else {
            None
        }
    }

    pub fn matches_search(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        let term = term.to_lowercase();
        self.branch_dept.to_lowercase().contains(&term) || self.job_type.to_lowercase().contains(&term)
    }
}

/// Partial update merged into an existing record. Identity and menu placement
/// are fixed at creation and cannot be changed here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    pub date_input: Option<String>,
    pub branch_dept: Option<String>,
    pub job_type: Option<String>,
    pub status: Option<Status>,
    pub deadline: Option<String>,
    pub activation_date: Option<String>,
}

impl RecordUpdate {
    pub fn status(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn apply_to(self, record: &mut Record) {
        if let Some(v) = self.date_input {
            record.date_input = v;
        }
        if let Some(v) = self.branch_dept {
            record.branch_dept = v;
        }
        if let Some(v) = self.job_type {
            record.job_type = v;
        }
        if let Some(v) = self.status {
            record.status = v;
        }
        if let Some(v) = self.deadline {
            record.deadline = v;
        }
        if let Some(v) = self.activation_date {
            record.activation_date = Some(v);
        }
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn record(id: &str, category: &str, status: Status, deadline: &str) -> Record {
        Record {
            id: id.to_string(),
            category: category.to_string(),
            sub_category: "Nasional".to_string(),
            date_input: "2024-01-01".to_string(),
            branch_dept: "Jakarta".to_string(),
            job_type: "Input Data".to_string(),
            status,
            deadline: deadline.to_string(),
            activation_date: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::record;
    use super::*;
    use crate::domain::PRODUCTION_MASTER_DATA;
    use time::macros::date;

    #[test]
    fn overdue_requires_past_deadline_and_open_status() {
        let today = date!(2024 - 02 - 01);
        let mut r = record("1", "Problem", Status::Pending, "2024-01-31");
        assert!(r.is_overdue(today));

        r.deadline = "2024-02-01".to_string();
        assert!(!r.is_overdue(today), "deadline today is not overdue");

        r.deadline = "2024-01-31".to_string();
        r.status = Status::Completed;
        assert!(!r.is_overdue(today));
        assert_eq!(r.deadline, "2024-01-31");
    }

    #[test]
    fn unparsable_deadline_is_never_overdue() {
        let r = record("1", "Problem", Status::Pending, "");
        assert!(!r.is_overdue(date!(2030 - 01 - 01)));
    }

    #[test]
    fn serializes_camel_case_and_omits_missing_activation() {
        let r = record("abc", "Problem", Status::InProgress, "2024-01-10");
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["subCategory"], "Nasional");
        assert_eq!(json["branchDept"], "Jakarta");
        assert_eq!(json["status"], "In Progress");
        assert!(json.get("activationDate").is_none());
    }

    #[test]
    fn activation_date_ignored_outside_production_master_data() {
        let mut r = record("1", "Problem", Status::Pending, "2024-01-10");
        r.activation_date = Some("2024-01-05".to_string());
        assert_eq!(r.effective_activation_date(), None);

        r.category = PRODUCTION_MASTER_DATA.to_string();
        assert_eq!(r.effective_activation_date(), Some("2024-01-05"));
    }

    #[test]
    fn search_is_case_insensitive_over_branch_and_job_type() {
        let r = record("1", "Problem", Status::Pending, "2024-01-10");
        assert!(r.matches_search(""));
        assert!(r.matches_search("jakar"));
        assert!(r.matches_search("INPUT"));
        assert!(!r.matches_search("bandung"));
    }

    #[test]
    fn update_merges_only_given_fields() {
        let mut r = record("1", "Problem", Status::Pending, "2024-01-10");
        RecordUpdate {
            job_type: Some("Audit".to_string()),
            status: Some(Status::Completed),
            ..Default::default()
        }
        .apply_to(&mut r);
        assert_eq!(r.job_type, "Audit");
        assert_eq!(r.status, Status::Completed);
        assert_eq!(r.branch_dept, "Jakarta");
        assert_eq!(r.id, "1");
    }
}
