//! Debounced search box
//!
//! Every input change cancels the pending search and schedules a new one
//! after the debounce period. Responses are applied only if no newer
//! input arrived in the meantime. A failed search clears the results
//! without notifying the user.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, trace};

use switchdir_core::constants::SEARCH_DEBOUNCE;
use switchdir_core::{assemble, compose, resolve, SearchResult, SearchSession, ViewTarget};
use switchdir_store::RecordStore;

/// Search input with a result dropdown
///
/// Must be driven from within a Tokio runtime.
pub struct SearchBox {
    store: Arc<dyn RecordStore>,
    session: SearchSession,
    results: Arc<watch::Sender<Vec<SearchResult>>>,
    pending: Option<JoinHandle<()>>,
    debounce: Duration,
}

impl SearchBox {
    /// Create a search box over `store`
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        let (results, _) = watch::channel(Vec::new());

        Self {
            store,
            session: SearchSession::new(),
            results: Arc::new(results),
            pending: None,
            debounce: SEARCH_DEBOUNCE,
        }
    }

    /// Set debounce period (default: 150ms)
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Handle an input change
    pub fn input(&mut self, text: &str) {
        self.cancel_pending();

        let ticket = self.session.begin(text);

        let Some(query) = compose(text) else {
            self.session.clear_results();
            self.publish();
            return;
        };

        let store = Arc::clone(&self.store);
        let session = self.session.clone();
        let results = Arc::clone(&self.results);
        let debounce = self.debounce;
        let raw = text.to_string();

        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(debounce).await;

            debug!(seq = ticket.sequence(), "Searching for {:?}...", raw);

            let assembled = match store.fetch(&query).await {
                Ok(rows) => assemble(&rows, &raw),
                Err(e) => {
                    debug!("Search for {:?} failed: {}", raw, e);
                    Vec::new()
                }
            };

            let accepted = session.accept_with(ticket, assembled, |latest| {
                results.send_replace(latest.to_vec());
            });

            if !accepted {
                trace!(seq = ticket.sequence(), "Dropped stale results for {:?}", raw);
            }
        }));
    }

    /// Select a result, clearing the box
    pub fn select(&mut self, result: &SearchResult) -> ViewTarget {
        let target = resolve(result);
        info!("Selected {}", result);

        self.clear();
        target
    }

    /// Clear input and results, cancelling any pending search
    pub fn clear(&mut self) {
        self.cancel_pending();
        self.session.clear();
        self.publish();
    }

    /// Current input
    pub fn text(&self) -> String {
        self.session.input()
    }

    /// Current results
    pub fn results(&self) -> Vec<SearchResult> {
        self.session.results()
    }

    /// Watch the result list
    pub fn subscribe(&self) -> watch::Receiver<Vec<SearchResult>> {
        self.results.subscribe()
    }

    /// Check if a search is scheduled or in flight
    pub fn is_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|task| !task.is_finished())
    }

    fn cancel_pending(&mut self) {
        if let Some(task) = self.pending.take() {
            task.abort();
        }
    }

    fn publish(&self) {
        self.session.publish(|latest| {
            self.results.send_replace(latest.to_vec());
        });
    }
}

impl Drop for SearchBox {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
