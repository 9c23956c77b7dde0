//! In-memory record store
//!
//! Evaluates queries against a fixed record set with the same semantics
//! as the remote store: filter, exclusion, limit, selected columns and
//! insertion order.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, trace};

use switchdir_core::Query;
use switchdir_types::DeviceRecord;

use crate::{error::*, RecordStore};

/// In-memory record store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: Vec<DeviceRecord>,
    latency: Duration,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `records`
    ///
    /// Every record must be valid and ids must be unique.
    pub fn from_records(records: impl IntoIterator<Item = DeviceRecord>) -> Result<Self> {
        let records: Vec<DeviceRecord> = records.into_iter().collect();
        let mut ids = HashSet::new();

        for record in &records {
            record.validate()?;

            if !ids.insert(record.id.as_str()) {
                return Err(Error::DuplicateId(record.id.clone()));
            }
        }

        Ok(Self {
            records,
            latency: Duration::ZERO,
        })
    }

    /// Delay every fetch by `latency`
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn fetch(&self, query: &Query) -> Result<Vec<DeviceRecord>> {
        trace!("Evaluating {:?}", query);

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        let limit = query.limit.unwrap_or(usize::MAX);

        let rows: Vec<_> = self
            .records
            .iter()
            .filter(|record| query.matches(record))
            .take(limit)
            .map(|record| query.columns.project(record))
            .collect();

        debug!("Matched {} of {} records", rows.len(), self.records.len());

        Ok(rows)
    }

    fn endpoint(&self) -> String {
        format!("memory ({} records)", self.len())
    }
}
