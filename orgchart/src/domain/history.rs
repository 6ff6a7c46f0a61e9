//! Linear undo/redo log with a movable cursor.

use tracing::debug;

use crate::domain::arena::NodeHandle;
use crate::domain::entities::EmployeeId;

/// One applied move, with enough information to reverse it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub employee_id: EmployeeId,
    /// None when the employee had no supervisor at move time
    pub old_supervisor_id: Option<EmployeeId>,
    pub new_supervisor_id: EmployeeId,
    /// Reports the employee had before the move, None if it had none
    pub displaced_reports: Option<Vec<NodeHandle>>,
    /// Position the employee held among the old supervisor's reports
    pub slot: usize,
}

/// Records at or before the cursor are undoable, records after it are redoable.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    records: Vec<HistoryRecord>,
    /// Number of records currently applied
    applied: usize,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the redoable tail, appends `record` and makes it current.
    pub fn push(&mut self, record: HistoryRecord) {
        let discarded = self.records.len() - self.applied;
        if discarded > 0 {
            debug!(discarded, "discarding redo history");
        }
        self.records.truncate(self.applied);
        self.records.push(record);
        self.applied += 1;
    }

    /// Moves the cursor back, returning the record to reverse.
    pub fn step_back(&mut self) -> Option<&HistoryRecord> {
        if self.applied == 0 {
            return None;
        }
        self.applied -= 1;
        self.records.get(self.applied)
    }

    /// Moves the cursor forward, returning the record to reapply.
    pub fn step_forward(&mut self) -> Option<&HistoryRecord> {
        let record = self.records.get(self.applied)?;
        self.applied += 1;
        Some(record)
    }

    /// Cursor as a signed position: -1 when nothing is applied.
    pub fn index(&self) -> isize {
        self.applied as isize - 1
    }

    /// The record that `undo` would reverse next.
    pub fn current(&self) -> Option<&HistoryRecord> {
        self.applied.checked_sub(1).and_then(|i| self.records.get(i))
    }

    pub fn can_undo(&self) -> bool {
        self.applied > 0
    }

    pub fn can_redo(&self) -> bool {
        self.applied < self.records.len()
    }

    pub fn past(&self) -> &[HistoryRecord] {
        &self.records[..self.applied]
    }

    pub fn future(&self) -> &[HistoryRecord] {
        &self.records[self.applied..]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(employee_id: EmployeeId) -> HistoryRecord {
        HistoryRecord {
            employee_id,
            old_supervisor_id: Some(1),
            new_supervisor_id: 2,
            displaced_reports: None,
            slot: 0,
        }
    }

    #[test]
    fn given_new_log_then_cursor_is_before_first_entry() {
        let log = HistoryLog::new();
        assert_eq!(log.index(), -1);
        assert!(!log.can_undo());
        assert!(!log.can_redo());
        assert!(log.current().is_none());
    }

    #[test]
    fn given_undone_entries_when_pushing_then_future_is_discarded() {
        let mut log = HistoryLog::new();
        log.push(record(10));
        log.push(record(11));
        log.step_back();

        log.push(record(12));

        assert_eq!(log.len(), 2);
        assert_eq!(log.index(), 1);
        assert!(log.future().is_empty());
        let ids: Vec<_> = log.past().iter().map(|r| r.employee_id).collect();
        assert_eq!(ids, vec![10, 12]);
    }

    #[test]
    fn given_bounds_when_stepping_then_cursor_stays_in_range() {
        let mut log = HistoryLog::new();
        assert!(log.step_back().is_none());
        log.push(record(10));

        assert_eq!(log.step_back().map(|r| r.employee_id), Some(10));
        assert!(log.step_back().is_none());
        assert_eq!(log.index(), -1);

        assert_eq!(log.step_forward().map(|r| r.employee_id), Some(10));
        assert!(log.step_forward().is_none());
        assert_eq!(log.index(), 0);
    }
}
