//! Search result assembly
//!
//! Rows returned for a search are split into two tracks:
//! 1. Model matches: rows whose `hw_sku` contains the input, in store order
//! 2. Chip matches: distinct non-empty chip names across all rows, in
//!    first-seen order, whose name contains the input
//!
//! The tracks are filtered independently, so a chip can be listed even
//! when none of its rows matched on model name. Model matches come first
//! and the list is cut at [`MAX_RESULTS`].

use std::collections::HashSet;
use std::fmt;

use switchdir_types::DeviceRecord;

use crate::constants::MAX_RESULTS;
use crate::query::contains_ignore_case;

/// Kind of search result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    Model,
    Chip,
}

impl fmt::Display for ResultKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model => f.write_str("Model"),
            Self::Chip => f.write_str("Chip"),
        }
    }
}

/// One entry of the search dropdown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub kind: ResultKind,

    /// Record id for models, chip name for chips
    pub id: String,

    /// Model SKU or chip name
    pub label: String,

    /// Chip name shown next to a model; empty for chips
    pub secondary_label: String,
}

impl SearchResult {
    pub fn model(record: &DeviceRecord) -> Self {
        Self {
            kind: ResultKind::Model,
            id: record.id.clone(),
            label: record.hw_sku.clone(),
            secondary_label: record.chip_name.clone(),
        }
    }

    pub fn chip(name: impl Into<String>) -> Self {
        let name = name.into();

        Self {
            kind: ResultKind::Chip,
            id: name.clone(),
            label: name,
            secondary_label: String::new(),
        }
    }

    pub fn is_model(&self) -> bool {
        self.kind == ResultKind::Model
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.label)?;

        if !self.secondary_label.is_empty() {
            write!(f, " ({})", self.secondary_label)?;
        }

        Ok(())
    }
}

/// Assemble the result list for `raw` from the rows the store returned
pub fn assemble(rows: &[DeviceRecord], raw: &str) -> Vec<SearchResult> {
    let models = rows
        .iter()
        .filter(|row| contains_ignore_case(&row.hw_sku, raw))
        .map(SearchResult::model);

    let chips = distinct_chips(rows)
        .into_iter()
        .filter(|chip| contains_ignore_case(chip, raw))
        .map(SearchResult::chip);

    models.chain(chips).take(MAX_RESULTS).collect()
}

/// Distinct non-empty chip names in first-seen order
fn distinct_chips(rows: &[DeviceRecord]) -> Vec<&str> {
    let mut seen = HashSet::new();

    rows.iter()
        .filter(|row| row.has_chip())
        .map(|row| row.chip_name.as_str())
        .filter(|chip| seen.insert(*chip))
        .collect()
}
