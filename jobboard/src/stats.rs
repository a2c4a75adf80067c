use time::Date;

use crate::domain::{Record, Status};

/// How many overdue records the dashboard priority table lists.
pub const OVERDUE_PREVIEW_LIMIT: usize = 5;

/// Dashboard aggregates derived from the full record collection.
///
/// Recomputed from scratch whenever the collection changes; overdue-ness is
/// evaluated against `today` and never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary<'a> {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub overdue: usize,
    pub overdue_list: Vec<&'a Record>,
    /// Records per category, in first-seen order.
    pub category_volume: Vec<(String, usize)>,
}

impl<'a> Summary<'a> {
    pub fn compute(records: &'a [Record], today: Date) -> Self {
        let count = |status: Status| records.iter().filter(|r| r.status == status).count();
        let overdue_list: Vec<&Record> = records.iter().filter(|r| r.is_overdue(today)).collect();

        let mut category_volume: Vec<(String, usize)> = Vec::new();
        for record in records {
            match category_volume.iter_mut().find(|(c, _)| *c == record.category) {
                Some((_, n)) => *n += 1,
                None => category_volume.push((record.category.clone(), 1)),
            }
        }

        Self {
            total: records.len(),
            completed: count(Status::Completed),
            pending: count(Status::Pending),
            in_progress: count(Status::InProgress),
            overdue: overdue_list.len(),
            overdue_list,
            category_volume,
        }
    }

    /// Pending plus in-progress, shown as the "in process" card.
    pub fn active(&self) -> usize {
        self.pending + self.in_progress
    }

    /// Status distribution chart input, in fixed slice order.
    pub fn status_distribution(&self) -> [(&'static str, usize); 4] {
        [
            (Status::Pending.as_str(), self.pending),
            (Status::InProgress.as_str(), self.in_progress),
            (Status::Completed.as_str(), self.completed),
            ("Overdue", self.overdue),
        ]
    }

    pub fn overdue_preview(&self) -> &[&'a Record] {
        &self.overdue_list[..self.overdue_list.len().min(OVERDUE_PREVIEW_LIMIT)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::record;
    use time::macros::date;

    const TODAY: Date = date!(2024 - 02 - 01);

    #[test]
    fn category_volume_in_first_seen_order() {
        let records = vec![
            record("1", "A", Status::Pending, "2024-03-01"),
            record("2", "B", Status::Pending, "2024-03-01"),
            record("3", "A", Status::Pending, "2024-03-01"),
        ];
        let s = Summary::compute(&records, TODAY);
        assert_eq!(s.total, 3);
        assert_eq!(s.category_volume, vec![("A".to_string(), 2), ("B".to_string(), 1)]);
    }

    #[test]
    fn counts_by_exact_status() {
        let records = vec![
            record("1", "A", Status::Pending, "2024-03-01"),
            record("2", "A", Status::InProgress, "2024-03-01"),
            record("3", "A", Status::Completed, "2024-03-01"),
            record("4", "A", Status::Overdue, "2024-03-01"),
        ];
        let s = Summary::compute(&records, TODAY);
        assert_eq!((s.pending, s.in_progress, s.completed), (1, 1, 1));
        assert_eq!(s.active(), 2);
        assert_eq!(s.overdue, 0, "stored Overdue with a future deadline is not overdue");
    }

    #[test]
    fn overdue_is_derived_from_deadline_and_status() {
        let mut records = vec![
            record("late", "A", Status::InProgress, "2024-01-31"),
            record("today", "A", Status::Pending, "2024-02-01"),
            record("done", "A", Status::Completed, "2024-01-01"),
        ];
        let s = Summary::compute(&records, TODAY);
        assert_eq!(s.overdue, 1);
        assert_eq!(s.overdue_list[0].id, "late");

        records[0].status = Status::Completed;
        let s = Summary::compute(&records, TODAY);
        assert_eq!(s.overdue, 0);
        assert_eq!(records[0].deadline, "2024-01-31");
    }

    #[test]
    fn distribution_and_preview() {
        let records: Vec<Record> = (0..7)
            .map(|i| record(&i.to_string(), "A", Status::Pending, "2024-01-01"))
            .collect();
        let s = Summary::compute(&records, TODAY);
        assert_eq!(
            s.status_distribution(),
            [("Pending", 7), ("In Progress", 0), ("Completed", 0), ("Overdue", 7)]
        );
        assert_eq!(s.overdue_preview().len(), OVERDUE_PREVIEW_LIMIT);
        assert_eq!(s.overdue_preview()[0].id, "0");
    }

    #[test]
    fn empty_collection() {
        let s = Summary::compute(&[], TODAY);
        assert_eq!(s.total, 0);
        assert!(s.category_volume.is_empty());
        assert!(s.overdue_preview().is_empty());
    }
}
