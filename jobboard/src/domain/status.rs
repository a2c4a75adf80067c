use serde::{Deserialize, Serialize};
use std::fmt;

/// Work status of a record.
///
/// `Overdue` exists only because import files may carry it as a literal status
/// token. Nothing else in the system writes it: overdue-ness is always derived
/// from the deadline (see [`crate::Summary`]), and the form and status editor
/// only offer the three working states in [`Status::EDITABLE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Overdue,
}

impl Status {
    pub const EDITABLE: [Status; 3] = [Status::Pending, Status::InProgress, Status::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Pending => "Pending",
            Status::InProgress => "In Progress",
            Status::Completed => "Completed",
            Status::Overdue => "Overdue",
        }
    }

    /// Normalizes an import status column. Exact match only; anything else,
    /// including an empty column, becomes `Pending`.
    pub fn parse_import(token: &str) -> Status {
        match token.trim() {
            "In Progress" => Status::InProgress,
            "Completed" => Status::Completed,
            "Overdue" => Status::Overdue,
            _ => Status::Pending,
        }
    }

    /// Next state in the inline editor cycle. An imported `Overdue` re-enters
    /// the cycle at `Pending`.
    pub fn next_editable(&self) -> Status {
        match self {
            Status::Pending => Status::InProgress,
            Status::InProgress => Status::Completed,
            Status::Completed | Status::Overdue => Status::Pending,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
