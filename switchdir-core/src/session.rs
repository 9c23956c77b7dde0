//! Search session sequencing
//!
//! A search session tracks the input currently in the search box and
//! numbers every search it issues. A response is only applied when its
//! ticket is still the latest one, so a slow response for an older input
//! can never replace results for a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::assemble::SearchResult;

/// Sequence number of one issued search
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Search session
///
/// Thread-safe and can be cloned cheaply (Arc internally); clones share
/// the same sequence and result set.
#[derive(Debug, Clone)]
pub struct SearchSession {
    inner: Arc<SessionInner>,
}

#[derive(Debug)]
struct SessionInner {
    /// Latest issued ticket (0 before the first search)
    sequence: AtomicU64,

    /// Current input and displayed results
    state: parking_lot::RwLock<SessionState>,
}

#[derive(Debug, Default)]
struct SessionState {
    input: String,
    results: Vec<SearchResult>,
}

impl SearchSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self {
            inner: Arc::new(SessionInner {
                sequence: AtomicU64::new(0),
                state: parking_lot::RwLock::new(SessionState::default()),
            }),
        }
    }

    /// Record new input and issue a ticket for it
    ///
    /// Every earlier ticket becomes stale.
    pub fn begin(&self, input: &str) -> Ticket {
        let mut state = self.inner.state.write();
        state.input.clear();
        state.input.push_str(input);

        Ticket(self.inner.sequence.fetch_add(1, Ordering::AcqRel) + 1)
    }

    /// Whether `ticket` is the latest one issued
    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.inner.sequence.load(Ordering::Acquire) == ticket.0
    }

    /// Apply results for `ticket`
    ///
    /// Returns `false` and leaves the results untouched when the ticket is
    /// stale.
    pub fn accept(&self, ticket: Ticket, results: Vec<SearchResult>) -> bool {
        self.accept_with(ticket, results, |_| {})
    }

    /// Apply results for `ticket` and hand them to `publish`
    ///
    /// `publish` runs while the session is locked, so no newer input can
    /// be recorded between the ticket check and the publication. It is
    /// not called for a stale ticket.
    pub fn accept_with<F>(&self, ticket: Ticket, results: Vec<SearchResult>, publish: F) -> bool
    where
        F: FnOnce(&[SearchResult]),
    {
        let mut state = self.inner.state.write();

        if !self.is_current(ticket) {
            return false;
        }

        state.results = results;
        publish(&state.results);
        true
    }

    /// Hand the current results to `publish` while holding the session lock
    pub fn publish<F>(&self, publish: F)
    where
        F: FnOnce(&[SearchResult]),
    {
        publish(&self.inner.state.read().results);
    }

    /// Clear input and results, invalidating every issued ticket
    pub fn clear(&self) {
        let mut state = self.inner.state.write();
        self.inner.sequence.fetch_add(1, Ordering::AcqRel);
        state.input.clear();
        state.results.clear();
    }

    /// Drop the displayed results, keeping the input
    pub fn clear_results(&self) {
        self.inner.state.write().results.clear();
    }

    /// Current input
    pub fn input(&self) -> String {
        self.inner.state.read().input.clone()
    }

    /// Current results
    pub fn results(&self) -> Vec<SearchResult> {
        self.inner.state.read().results.clone()
    }
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}
