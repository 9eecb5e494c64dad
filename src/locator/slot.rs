use std::sync::{
    Mutex, MutexGuard, PoisonError,
    atomic::{AtomicU64, Ordering},
};

use crate::locator::SearchResults;

/// Identifies one search in the order searches were started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Ticket(u64);

/// Holds the displayed result set. Only the most recently started search may
/// replace it; completions of older searches are dropped.
#[derive(Debug, Default)]
pub struct ResultSlot {
    issued: AtomicU64,
    current: Mutex<Option<SearchResults>>,
}

impl ResultSlot {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn begin(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, ticket: Ticket) -> bool {
        self.issued.load(Ordering::SeqCst) == ticket.0
    }

    /// Replaces the current results if no newer search has started since
    /// `ticket` was issued. Returns whether the results were stored.
    pub fn commit(&self, ticket: Ticket, results: SearchResults) -> bool {
        let mut current = self.lock();
        if !self.is_latest(ticket) {
            return false;
        }
        *current = Some(results);
        true
    }

    pub fn current(&self) -> Option<SearchResults> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Option<SearchResults>> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
