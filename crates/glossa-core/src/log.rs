//! In-memory detection log.
//!
//! The log lives for the lifetime of the process and is never persisted.
//! All access goes through a single `RwLock`: appends are serialized under
//! the write lock and readers work on a snapshot taken under the read lock.
//!
//! By default the log is unbounded and append-only. When a capacity is
//! configured it behaves as a ring buffer and evicts the oldest records.

use std::collections::VecDeque;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::stats::{compute_stats, DetectionStats};
use crate::types::{DetectionRecord, DetectionSource};

/// Process-wide store of detection records.
#[derive(Debug, Default)]
pub struct DetectionLog {
    records: RwLock<VecDeque<DetectionRecord>>,
    max_records: Option<usize>,
}

impl DetectionLog {
    /// Create an unbounded log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a log that keeps at most `max_records` records.
    ///
    /// `None` (or `Some(0)`) means unbounded.
    pub fn with_max_records(max_records: Option<usize>) -> Self {
        Self {
            records: RwLock::new(VecDeque::new()),
            max_records: max_records.filter(|&n| n > 0),
        }
    }

    /// Configured capacity, if any.
    pub fn max_records(&self) -> Option<usize> {
        self.max_records
    }

    /// Append a record to the end of the log.
    pub fn append(&self, record: DetectionRecord) {
        let mut records = self.write();
        if let Some(max) = self.max_records {
            while records.len() >= max {
                records.pop_front();
            }
        }
        debug!(
            id = %record.id(),
            source = %record.source(),
            language = record.language(),
            "Appended detection record"
        );
        records.push_back(record);
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Snapshot of all records in insertion order.
    pub fn records(&self) -> Vec<DetectionRecord> {
        self.read().iter().cloned().collect()
    }

    /// Snapshot of the records produced by `source`, in insertion order.
    pub fn by_source(&self, source: DetectionSource) -> Vec<DetectionRecord> {
        self.read()
            .iter()
            .filter(|r| r.source() == source)
            .cloned()
            .collect()
    }

    /// Recompute statistics for the records produced by `source`.
    pub fn stats(&self, source: DetectionSource) -> DetectionStats {
        let records = self.read();
        compute_stats(records.iter().filter(|r| r.source() == source))
    }

    // Records are only ever pushed whole, so a poisoned lock still guards a
    // consistent log.
    fn read(&self) -> RwLockReadGuard<'_, VecDeque<DetectionRecord>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, VecDeque<DetectionRecord>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Confidence;
    use std::sync::Arc;
    use std::thread;

    fn record(language: &str, source: DetectionSource) -> DetectionRecord {
        DetectionRecord::new(
            language,
            &language[..2],
            Confidence::from_fraction(0.5).unwrap(),
            source,
        )
    }

    #[test]
    fn test_append_then_filter_contains_record() {
        let log = DetectionLog::new();
        log.append(record("English", DetectionSource::Legacy));

        let rec = record("French", DetectionSource::Proposed);
        let id = rec.id();
        log.append(rec.clone());

        let proposed = log.by_source(DetectionSource::Proposed);
        assert_eq!(proposed.len(), 1);
        assert_eq!(proposed[0], rec);
        assert_eq!(proposed[0].id(), id);
        assert!(log
            .by_source(DetectionSource::Legacy)
            .iter()
            .all(|r| r.id() != id));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let log = DetectionLog::new();
        for name in ["English", "German", "Dutch"] {
            log.append(record(name, DetectionSource::Proposed));
        }
        let names: Vec<_> = log
            .records()
            .iter()
            .map(|r| r.language().to_string())
            .collect();
        assert_eq!(names, vec!["English", "German", "Dutch"]);
    }

    #[test]
    fn test_stats_split_by_source() {
        let log = DetectionLog::new();
        log.append(record("English", DetectionSource::Legacy));
        log.append(record("French", DetectionSource::Proposed));
        log.append(record("French", DetectionSource::Proposed));

        assert_eq!(log.stats(DetectionSource::Legacy).total_detections, 1);
        let proposed = log.stats(DetectionSource::Proposed);
        assert_eq!(proposed.total_detections, 2);
        assert_eq!(proposed.languages_detected, 1);
        assert_eq!(proposed.top_languages[0].percentage, 100.0);
    }

    #[test]
    fn test_unbounded_by_default() {
        let log = DetectionLog::new();
        for _ in 0..1000 {
            log.append(record("English", DetectionSource::Legacy));
        }
        assert_eq!(log.len(), 1000);
        assert_eq!(log.max_records(), None);
    }

    #[test]
    fn test_ring_buffer_evicts_oldest() {
        let log = DetectionLog::with_max_records(Some(2));
        log.append(record("English", DetectionSource::Legacy));
        log.append(record("German", DetectionSource::Legacy));
        log.append(record("Dutch", DetectionSource::Legacy));

        let names: Vec<_> = log
            .records()
            .iter()
            .map(|r| r.language().to_string())
            .collect();
        assert_eq!(names, vec!["German", "Dutch"]);
    }

    #[test]
    fn test_zero_capacity_is_unbounded() {
        let log = DetectionLog::with_max_records(Some(0));
        assert_eq!(log.max_records(), None);
    }

    #[test]
    fn test_concurrent_appends() {
        let log = Arc::new(DetectionLog::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let log = Arc::clone(&log);
                thread::spawn(move || {
                    let source = if i % 2 == 0 {
                        DetectionSource::Legacy
                    } else {
                        DetectionSource::Proposed
                    };
                    for _ in 0..100 {
                        log.append(record("English", source));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(log.len(), 800);
        assert_eq!(log.stats(DetectionSource::Legacy).total_detections, 400);
        assert_eq!(log.stats(DetectionSource::Proposed).total_detections, 400);
    }
}
