//! Record store clients for switchdir
//!
//! Provides access to the device table over HTTP or from memory.

pub mod config;
pub mod error;
pub mod memory;
pub mod rest;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use memory::MemoryStore;
pub use rest::RestStore;

use async_trait::async_trait;

use switchdir_core::Query;
use switchdir_types::DeviceRecord;

/// Read access to the device table
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Run a query and return the matching rows in store order
    async fn fetch(&self, query: &Query) -> Result<Vec<DeviceRecord>>;
    
    /// Human-readable location of the store
    fn endpoint(&self) -> String;
}
