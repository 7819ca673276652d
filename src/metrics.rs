use std::sync::atomic::{AtomicU64, Ordering};

/// Thread-safe counters describing document store activity.
#[derive(Default)]
pub struct DocumentMetrics {
    reads: AtomicU64,
    edits: AtomicU64,
    replacements: AtomicU64,
    not_found: AtomicU64,
}

impl DocumentMetrics {
    /// Create an empty metrics accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful document read.
    pub fn record_read(&self) {
        self.reads.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a completed edit and the number of occurrences it substituted.
    pub fn record_edit(&self, replacements: u64) {
        self.edits.fetch_add(1, Ordering::Relaxed);
        self.replacements.fetch_add(replacements, Ordering::Relaxed);
    }

    /// Record a lookup of an unregistered document id.
    pub fn record_not_found(&self) {
        self.not_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Return a snapshot of the current counters.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            reads: self.reads.load(Ordering::Relaxed),
            edits: self.edits.load(Ordering::Relaxed),
            replacements: self.replacements.load(Ordering::Relaxed),
            not_found: self.not_found.load(Ordering::Relaxed),
        }
    }
}

/// Immutable view of store counters used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct MetricsSnapshot {
    /// Number of successful reads since startup.
    pub reads: u64,
    /// Number of edits applied to registered documents, including no-op edits.
    pub edits: u64,
    /// Total occurrences substituted across all edits.
    pub replacements: u64,
    /// Number of operations that referenced an unregistered id.
    pub not_found: u64,
}
