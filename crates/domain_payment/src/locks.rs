//! Per-receivable lock table
//!
//! Concurrent allocation attempts against the same receivable must be
//! serialized: the engine's load-clamp-apply-store window is only safe if
//! no other allocation touches the receivable in between. Each receivable
//! id maps to one mutex; unrelated receivables proceed in parallel.

use std::sync::{Arc, Mutex};

use dashmap::DashMap;

use core_kernel::ReceivableId;

/// Lock table keyed by receivable id
#[derive(Debug, Default)]
pub struct ReceivableLocks {
    cells: DashMap<ReceivableId, Arc<Mutex<()>>>,
}

impl ReceivableLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the lock cell for a receivable id, creating it on first use
    ///
    /// The caller locks the returned mutex for the duration of its
    /// read-modify-write. Cells are never removed; the table grows with
    /// the set of receivables ever allocated against.
    pub fn cell(&self, id: ReceivableId) -> Arc<Mutex<()>> {
        self.cells.entry(id).or_default().clone()
    }
}
