//! Record store query model
//!
//! A [`Query`] describes one read against the device table:
//!
//! ```text
//! ┌─────────┬───────────┬──────────────────────────┬──────────────┬─────────┐
//! │  Table  │  Columns  │  Filter                  │  Exclusion   │  Limit  │
//! │         │  (or *)   │  eq / OR-ed ilike        │  neq         │  rows   │
//! └─────────┴───────────┴──────────────────────────┴──────────────┴─────────┘
//! ```
//!
//! Store clients translate it to their own wire format; [`Query::matches`]
//! gives the reference semantics for in-process evaluation.

use std::borrow::Cow;
use std::fmt;

use bitflags::bitflags;
use tracing::trace;

use switchdir_types::DeviceRecord;

use crate::constants::{DEVICE_TABLE, MIN_QUERY_CHARS, RELATED_LIMIT, SEARCH_ROW_LIMIT};

/// A column of the device table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Id,
    HwSku,
    ChipName,
    PortLayout,
    BufferSize,
    CreatedAt,
}

impl Column {
    /// Column name as stored
    pub fn name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::HwSku => "hw_sku",
            Self::ChipName => "chip_name",
            Self::PortLayout => "port_layout",
            Self::BufferSize => "buffer_size",
            Self::CreatedAt => "created_at",
        }
    }

    /// Read this column from a record (`None` for SQL null)
    pub fn value(self, record: &DeviceRecord) -> Option<Cow<'_, str>> {
        match self {
            Self::Id => Some(Cow::Borrowed(&record.id)),
            Self::HwSku => Some(Cow::Borrowed(&record.hw_sku)),
            Self::ChipName => Some(Cow::Borrowed(&record.chip_name)),
            Self::PortLayout => record.port_layout.as_deref().map(Cow::Borrowed),
            Self::BufferSize => record.buffer_size.as_deref().map(Cow::Borrowed),
            Self::CreatedAt => record.created_at.map(|t| Cow::Owned(t.to_rfc3339())),
        }
    }

    fn flag(self) -> Columns {
        match self {
            Self::Id => Columns::ID,
            Self::HwSku => Columns::HW_SKU,
            Self::ChipName => Columns::CHIP_NAME,
            Self::PortLayout => Columns::PORT_LAYOUT,
            Self::BufferSize => Columns::BUFFER_SIZE,
            Self::CreatedAt => Columns::CREATED_AT,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const ALL_COLUMNS: [Column; 6] = [
    Column::Id,
    Column::HwSku,
    Column::ChipName,
    Column::PortLayout,
    Column::BufferSize,
    Column::CreatedAt,
];

bitflags! {
    /// Set of selected columns
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Columns: u8 {
        const ID          = 1 << 0;
        const HW_SKU      = 1 << 1;
        const CHIP_NAME   = 1 << 2;
        const PORT_LAYOUT = 1 << 3;
        const BUFFER_SIZE = 1 << 4;
        const CREATED_AT  = 1 << 5;

        /// Columns needed to build search results
        const SEARCH = Self::ID.bits() | Self::HW_SKU.bits() | Self::CHIP_NAME.bits();
    }
}

impl Columns {
    /// Selected columns in table order
    pub fn columns(self) -> impl Iterator<Item = Column> {
        ALL_COLUMNS.into_iter().filter(move |c| self.contains(c.flag()))
    }

    pub fn includes(self, column: Column) -> bool {
        self.contains(column.flag())
    }

    /// Select list: `*` for every column, otherwise comma-separated names
    pub fn select_list(self) -> String {
        if self.is_all() {
            return "*".into();
        }

        self.columns().map(Column::name).collect::<Vec<_>>().join(",")
    }

    /// Copy of `record` with unselected columns blanked
    pub fn project(self, record: &DeviceRecord) -> DeviceRecord {
        let keep = |flag: Columns| self.contains(flag);

        DeviceRecord {
            id: if keep(Self::ID) { record.id.clone() } else { String::new() },
            hw_sku: if keep(Self::HW_SKU) { record.hw_sku.clone() } else { String::new() },
            chip_name: if keep(Self::CHIP_NAME) { record.chip_name.clone() } else { String::new() },
            port_layout: record.port_layout.clone().filter(|_| keep(Self::PORT_LAYOUT)),
            buffer_size: record.buffer_size.clone().filter(|_| keep(Self::BUFFER_SIZE)),
            created_at: record.created_at.filter(|_| keep(Self::CREATED_AT)),
        }
    }
}

/// Row filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Column equals value exactly
    Eq(Column, String),

    /// Any of the columns contains the text, ignoring case
    AnyContains(Vec<Column>, String),
}

impl Filter {
    pub fn matches(&self, record: &DeviceRecord) -> bool {
        match self {
            Self::Eq(column, value) => column.value(record).is_some_and(|v| v == value.as_str()),
            Self::AnyContains(columns, text) => columns
                .iter()
                .any(|c| c.value(record).is_some_and(|v| contains_ignore_case(&v, text))),
        }
    }
}

/// Rows to drop after filtering: column not equal to value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exclusion {
    pub column: Column,
    pub value: String,
}

impl Exclusion {
    pub fn not_eq(column: Column, value: impl Into<String>) -> Self {
        Self { column, value: value.into() }
    }

    /// Whether the record is excluded
    pub fn excludes(&self, record: &DeviceRecord) -> bool {
        self.column.value(record).is_some_and(|v| v == self.value.as_str())
    }
}

/// A read against one table of the record store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub table: String,
    pub columns: Columns,
    pub filter: Option<Filter>,
    pub exclude: Option<Exclusion>,
    pub limit: Option<usize>,
}

impl Query {
    /// Select every column of `table`
    pub fn table(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Columns::all(),
            filter: None,
            exclude: None,
            limit: None,
        }
    }

    /// Select every column of the device table
    pub fn devices() -> Self {
        Self::table(DEVICE_TABLE)
    }

    /// Restrict the selected columns
    pub fn select(mut self, columns: Columns) -> Self {
        self.columns = columns;
        self
    }

    /// Set the row filter
    pub fn filter(mut self, filter: Filter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Set the exclusion
    pub fn exclude(mut self, exclusion: Exclusion) -> Self {
        self.exclude = Some(exclusion);
        self
    }

    /// Cap the number of returned rows
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Search over model and chip names
    ///
    /// Does not check the input length; see [`compose`].
    pub fn search(text: impl Into<String>) -> Self {
        Self::devices()
            .select(Columns::SEARCH)
            .filter(Filter::AnyContains(
                vec![Column::HwSku, Column::ChipName],
                text.into(),
            ))
            .limit(SEARCH_ROW_LIMIT)
    }

    /// Exact lookup of one model
    pub fn model(id: impl Into<String>) -> Self {
        Self::devices()
            .filter(Filter::Eq(Column::Id, id.into()))
            .limit(1)
    }

    /// Other models built on `chip_name`
    pub fn related(chip_name: impl Into<String>, exclude_id: impl Into<String>) -> Self {
        Self::devices()
            .filter(Filter::Eq(Column::ChipName, chip_name.into()))
            .exclude(Exclusion::not_eq(Column::Id, exclude_id))
            .limit(RELATED_LIMIT)
    }

    /// Every model built on `chip_name`
    pub fn chip(chip_name: impl Into<String>) -> Self {
        Self::devices().filter(Filter::Eq(Column::ChipName, chip_name.into()))
    }

    /// Whether `record` passes the filter and is not excluded
    pub fn matches(&self, record: &DeviceRecord) -> bool {
        let passes = self.filter.as_ref().is_none_or(|f| f.matches(record));
        let excluded = self.exclude.as_ref().is_some_and(|e| e.excludes(record));

        passes && !excluded
    }
}

/// Build the search query for raw user input
///
/// Input shorter than two characters issues no query. Length is counted
/// in UTF-16 code units, as browser text fields do, so a single emoji is
/// long enough. The input is not trimmed.
///
/// # Examples
///
/// ```
/// use switchdir_core::compose;
///
/// assert!(compose("t").is_none());
///
/// let query = compose("tom").unwrap();
/// assert_eq!(query.limit, Some(8));
/// ```
pub fn compose(raw: &str) -> Option<Query> {
    if raw.encode_utf16().count() < MIN_QUERY_CHARS {
        trace!(input = raw, "Input too short, no search");
        return None;
    }

    Some(Query::search(raw))
}

/// Case-insensitive substring test
pub fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
