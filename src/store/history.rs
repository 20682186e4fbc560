use dashmap::DashMap;
use log::debug;
use parking_lot::Mutex;
use std::collections::VecDeque;
use uuid::Uuid;

use crate::models::report::{AnalysisReport, ReportSummary};

/// Fixed-capacity store of recent analysis reports.
///
/// Reports are keyed by id; once the store is full the oldest report is
/// evicted on insert. Lookups go through the map, listings through the
/// insertion-order queue (newest first). Thread-safe and injected into the
/// handlers as shared state; nothing else in the crate holds report state.
pub struct ReportStore {
    reports: DashMap<Uuid, AnalysisReport>,
    order: Mutex<VecDeque<Uuid>>,
    capacity: usize,
}

impl ReportStore {
    /// Create an empty store retaining up to `capacity` reports.
    pub fn new(capacity: usize) -> Self {
        Self {
            reports: DashMap::new(),
            order: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    /// Insert a report, evicting the oldest ones while the store is full.
    /// A zero-capacity store retains nothing.
    pub fn insert(&self, report: AnalysisReport) {
        if self.capacity == 0 {
            return;
        }
        let mut order = self.order.lock();
        while order.len() >= self.capacity {
            match order.pop_front() {
                Some(evicted) => {
                    self.reports.remove(&evicted);
                    debug!("Evicted report {} from history", evicted);
                }
                None => break,
            }
        }
        order.push_back(report.id);
        self.reports.insert(report.id, report);
    }

    /// Full report by id, if still retained.
    pub fn get(&self, id: Uuid) -> Option<AnalysisReport> {
        self.reports.get(&id).map(|r| r.clone())
    }

    /// Summaries of retained reports, newest first.
    pub fn list(&self) -> Vec<ReportSummary> {
        let order = self.order.lock();
        order
            .iter()
            .rev()
            .filter_map(|id| self.reports.get(id).map(|r| r.summary()))
            .collect()
    }

    /// Number of retained reports.
    pub fn len(&self) -> usize {
        self.order.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.lock().is_empty()
    }
}
