use std::path::Path;
use thiserror::Error;
use time::Date;

use crate::dates::format_iso_date;
use crate::domain::{is_production_master_data, Record, Status};
use crate::storage::Storage;
use crate::store::{RecordStore, StoreError};

/// File extensions offered and accepted for import.
pub const ACCEPTED_EXTENSIONS: [&str; 2] = ["csv", "txt"];

/// Data lines need at least this many columns; the sixth is optional.
pub const REQUIRED_COLUMNS: usize = 5;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Could not read any rows, or the format does not match. Please use the provided template.")]
    FormatMismatch,
    #[error("Unsupported file type '{0}', expected .csv or .txt")]
    UnsupportedExtension(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result of parsing an import file, before it touches the store.
#[derive(Debug, Default)]
pub struct ParsedImport {
    pub records: Vec<Record>,
    /// Non-blank data lines dropped for having too few columns.
    pub skipped: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOutcome {
    pub imported: usize,
    pub skipped: usize,
}

pub fn check_extension(path: &Path) -> Result<(), ImportError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    if ACCEPTED_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(ImportError::UnsupportedExtension(ext))
    }
}

/// Parses delimited text into records placed under `category` / `sub_category`.
///
/// The first line is a header and is always dropped. Columns are split on both
/// `,` and `;` with no quoting support, so a delimiter inside a value shifts
/// the remaining columns.
pub fn parse_records(text: &str, category: &str, sub_category: &str, today: Date) -> ParsedImport {
    let today = format_iso_date(today);
    let with_activation = is_production_master_data(category);
    let mut parsed = ParsedImport::default();

    for line in text.split('\n').skip(1) {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }

        let cols: Vec<&str> = line.split([',', ';']).map(str::trim).collect();
        if cols.len() < REQUIRED_COLUMNS {
            parsed.skipped += 1;
            continue;
        }

        let or = |value: &str, fallback: &str| {
            if value.is_empty() {
                fallback.to_string()
            } else {
                value.to_string()
            }
        };

        parsed.records.push(Record {
            id: Record::new_id(),
            category: category.to_string(),
            sub_category: sub_category.to_string(),
            date_input: or(cols[0], &today),
            branch_dept: or(cols[1], "Unknown"),
            job_type: or(cols[2], "Imported Job"),
            status: Status::parse_import(cols[3]),
            deadline: or(cols[4], &today),
            activation_date: if with_activation {
                cols.get(5).filter(|v| !v.is_empty()).map(|v| v.to_string())
            } else {
                None
            },
        });
    }

    parsed
}

/// Parses `text` and bulk-adds the result. An empty batch is a format mismatch
/// and leaves the store untouched.
pub fn import_text<S: Storage>(
    store: &mut RecordStore<S>,
    text: &str,
    category: &str,
    sub_category: &str,
    today: Date,
) -> Result<ImportOutcome, ImportError> {
    let parsed = parse_records(text, category, sub_category, today);
    if parsed.records.is_empty() {
        tracing::warn!(skipped = parsed.skipped, category, sub_category, "import produced no records");
        return Err(ImportError::FormatMismatch);
    }
    let skipped = parsed.skipped;
    let imported = store.bulk_add(parsed.records)?;
    tracing::info!(imported, skipped, category, sub_category, "import finished");
    Ok(ImportOutcome { imported, skipped })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PRODUCTION_MASTER_DATA;
    use crate::storage::MemoryStorage;
    use time::macros::date;

    const TODAY: Date = date!(2024 - 02 - 01);

    #[test]
    fn single_line_import() {
        let text = "H1,H2,H3,H4,H5\n2024-01-01,Jakarta,Input Data,Pending,2024-01-10";
        let parsed = parse_records(text, "Problem", "SLA", TODAY);

        assert_eq!(parsed.records.len(), 1);
        let r = &parsed.records[0];
        assert_eq!(r.date_input, "2024-01-01");
        assert_eq!(r.branch_dept, "Jakarta");
        assert_eq!(r.job_type, "Input Data");
        assert_eq!(r.status, Status::Pending);
        assert_eq!(r.deadline, "2024-01-10");
        assert_eq!(r.category, "Problem");
        assert_eq!(r.sub_category, "SLA");
        assert!(!r.id.is_empty());
    }

    #[test]
    fn blank_lines_are_ignored() {
        let text = "H1,H2,H3,H4,H5\r\n\r\n2024-01-01,Jakarta,Input Data,Pending,2024-01-10\r\n   \n";
        let parsed = parse_records(text, "Problem", "SLA", TODAY);
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.skipped, 0);
        assert_eq!(parsed.records[0].deadline, "2024-01-10");
    }

    #[test]
    fn short_lines_are_dropped() {
        let text = "H1,H2,H3,H4,H5\n2024-01-01,Jakarta,X";
        let parsed = parse_records(text, "Problem", "SLA", TODAY);
        assert!(parsed.records.is_empty());
        assert_eq!(parsed.skipped, 1);

        let mut store = RecordStore::load(MemoryStorage::new());
        let err = import_text(&mut store, text, "Problem", "SLA", TODAY).unwrap_err();
        assert!(matches!(err, ImportError::FormatMismatch));
        assert!(store.is_empty());
    }

    #[test]
    fn unknown_status_falls_back_to_pending() {
        let text = "h\n2024-01-01,Jakarta,X,Unknown,2024-01-10\n2024-01-01,Jakarta,X,Overdue,2024-01-10";
        let parsed = parse_records(text, "Problem", "SLA", TODAY);
        assert_eq!(parsed.records[0].status, Status::Pending);
        assert_eq!(parsed.records[1].status, Status::Overdue);
    }

    #[test]
    fn empty_columns_use_fallbacks() {
        let text = "h\n ; ; ; ; ";
        let parsed = parse_records(text, "Problem", "SLA", TODAY);
        let r = &parsed.records[0];
        assert_eq!(r.date_input, "2024-02-01");
        assert_eq!(r.branch_dept, "Unknown");
        assert_eq!(r.job_type, "Imported Job");
        assert_eq!(r.status, Status::Pending);
        assert_eq!(r.deadline, "2024-02-01");
    }

    #[test]
    fn mixed_delimiters_split_on_both() {
        let text = "h\n2024-01-01;Jakarta, Ops;Audit;Completed;2024-01-10";
        let parsed = parse_records(text, "Problem", "SLA", TODAY);
        let r = &parsed.records[0];
        assert_eq!(r.branch_dept, "Jakarta");
        assert_eq!(r.job_type, "Ops");
        assert_eq!(r.status, Status::Pending, "column shift moves 'Audit' into status");
        assert_eq!(r.deadline, "Completed");
    }

    #[test]
    fn activation_column_only_for_production_master_data() {
        let text = "h\n2024-01-01,Jakarta,Vendor,Pending,2024-01-10,2024-01-05";

        let parsed = parse_records(text, PRODUCTION_MASTER_DATA, "Cabang", TODAY);
        assert_eq!(parsed.records[0].activation_date.as_deref(), Some("2024-01-05"));

        let parsed = parse_records(text, "Problem", "SLA", TODAY);
        assert_eq!(parsed.records[0].activation_date, None);
    }

    #[test]
    fn import_reports_imported_and_skipped() {
        let mut store = RecordStore::load(MemoryStorage::new());
        let text = "h\na,b,c,Pending,2024-01-10\nshort,line\nd,e,f,Completed,2024-01-11\n";
        let outcome = import_text(&mut store, text, "Problem", "SLA", TODAY).unwrap();
        assert_eq!(outcome, ImportOutcome { imported: 2, skipped: 1 });
        assert_eq!(store.records()[0].branch_dept, "b");
        assert_eq!(store.records()[1].branch_dept, "e");
    }

    #[test]
    fn header_only_file_is_a_mismatch() {
        let parsed = parse_records("Tanggal,Cabang,Jenis,Status,Dateline\n", "Problem", "SLA", TODAY);
        assert!(parsed.records.is_empty());
        assert_eq!(parsed.skipped, 0);
    }

    #[test]
    fn extension_check() {
        assert!(check_extension(Path::new("jobs.csv")).is_ok());
        assert!(check_extension(Path::new("JOBS.TXT")).is_ok());
        assert!(matches!(
            check_extension(Path::new("jobs.xlsx")),
            Err(ImportError::UnsupportedExtension(ext)) if ext == "xlsx"
        ));
        assert!(check_extension(Path::new("jobs")).is_err());
    }
}
