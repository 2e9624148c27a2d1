use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use super::operation::Operation;

/// One successfully evaluated calculation.
///
/// `operand2` is `None` for unary operations. `recorded_at` is assigned at
/// the moment of successful evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationRecord {
    pub operation: Operation,
    pub operand1: f64,
    pub operand2: Option<f64>,
    pub result: f64,
    pub recorded_at: DateTime<Utc>,
}

/// Bounded, most-recent-first record of successful calculations.
///
/// Created once at startup and shared by every request handler; one mutex
/// serializes every operation, mutating or not. The only mutations are
/// `record` (insert at the front, evict at the back when over capacity)
/// and `clear`.
#[derive(Debug)]
pub struct HistoryLedger {
    capacity: usize,
    entries: Mutex<VecDeque<CalculationRecord>>,
}

impl HistoryLedger {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Insert a record at the front, evicting the oldest entry when the
    /// ledger grows past capacity. Always succeeds.
    pub fn record(&self, mut record: CalculationRecord) {
        let mut entries = self.entries.lock();
        // Wall clock may step backwards; keep recorded_at non-decreasing
        // in creation order.
        if let Some(front) = entries.front() {
            if record.recorded_at < front.recorded_at {
                record.recorded_at = front.recorded_at;
            }
        }
        entries.push_front(record);
        while entries.len() > self.capacity {
            entries.pop_back();
        }
    }

    /// Every retained record, most recent first.
    pub fn all(&self) -> Vec<CalculationRecord> {
        self.entries.lock().iter().cloned().collect()
    }

    /// Drop every retained record.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Number of currently retained records.
    pub fn count(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn record(n: f64) -> CalculationRecord {
        CalculationRecord {
            operation: Operation::Add,
            operand1: n,
            operand2: Some(0.0),
            result: n,
            recorded_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = HistoryLedger::new(25);
        assert_eq!(ledger.count(), 0);
        assert!(ledger.all().is_empty());
    }

    #[test]
    fn test_most_recent_first_ordering() {
        let ledger = HistoryLedger::new(25);
        for n in 0..5 {
            ledger.record(record(f64::from(n)));
        }
        let all = ledger.all();
        assert_eq!(all.len(), 5);
        assert_eq!(all[0].operand1, 4.0);
        assert_eq!(all[4].operand1, 0.0);
    }

    #[test]
    fn test_eviction_keeps_exactly_capacity_entries() {
        let ledger = HistoryLedger::new(25);
        for n in 0..30 {
            ledger.record(record(f64::from(n)));
        }
        assert_eq!(ledger.count(), 25);
        let all = ledger.all();
        assert_eq!(all[0].operand1, 29.0);
        // The oldest surviving entry is the 6th recorded one.
        assert_eq!(all[24].operand1, 5.0);
    }

    #[test]
    fn test_custom_capacity() {
        let ledger = HistoryLedger::new(3);
        for n in 0..5 {
            ledger.record(record(f64::from(n)));
        }
        assert_eq!(ledger.count(), 3);
        assert_eq!(ledger.all()[2].operand1, 2.0);
    }

    #[test]
    fn test_clear_empties_the_ledger() {
        let ledger = HistoryLedger::new(25);
        for n in 0..10 {
            ledger.record(record(f64::from(n)));
        }
        ledger.clear();
        assert_eq!(ledger.count(), 0);
        assert!(ledger.all().is_empty());

        // Recording after clear works as from fresh.
        ledger.record(record(1.0));
        assert_eq!(ledger.count(), 1);
    }

    #[test]
    fn test_recorded_at_clamped_against_clock_steps() {
        let ledger = HistoryLedger::new(25);
        let now = Utc::now();

        let mut first = record(1.0);
        first.recorded_at = now;
        ledger.record(first);

        let mut second = record(2.0);
        second.recorded_at = now - Duration::seconds(30);
        ledger.record(second);

        let all = ledger.all();
        assert!(all[0].recorded_at >= all[1].recorded_at);
    }
}
