//! Test fixtures shared by the unit tests

use async_trait::async_trait;
use mockall::mock;

use switchdir_core::{Filter, Query};
use switchdir_store::{MemoryStore, RecordStore};
use switchdir_types::DeviceRecord;

mock! {
    pub Store {}

    #[async_trait]
    impl RecordStore for Store {
        async fn fetch(&self, query: &Query) -> switchdir_store::Result<Vec<DeviceRecord>>;
        fn endpoint(&self) -> String;
    }
}

pub fn unavailable() -> switchdir_store::Error {
    switchdir_store::Error::Status {
        status: 503,
        message: "service unavailable".into(),
    }
}

/// Search text of a search query
pub fn search_text(query: &Query) -> Option<&str> {
    match &query.filter {
        Some(Filter::AnyContains(_, text)) => Some(text.as_str()),
        _ => None,
    }
}

pub fn catalog() -> Vec<DeviceRecord> {
    vec![
        DeviceRecord::new("1", "SW-100", "Tomahawk")
            .with_port_layout("32x400G")
            .with_buffer_size("64MB"),
        DeviceRecord::new("2", "SW-200", "Trident"),
        DeviceRecord::new("3", "SW-110", "Tomahawk"),
        DeviceRecord::new("4", "SW-120", "Tomahawk"),
        DeviceRecord::new("5", "SW-130", "Tomahawk"),
        DeviceRecord::new("6", "SW-140", "Tomahawk"),
        DeviceRecord::new("7", "TH5-64", "Tomahawk 5"),
        DeviceRecord::new("8", "SN-4600", "Spectrum"),
    ]
}

pub fn memory_store() -> MemoryStore {
    MemoryStore::from_records(catalog()).unwrap()
}
