//! # switchdir
//!
//! Lookup directory for network switch models and the switching chips
//! they are built on.
//!
//! ## Features
//!
//! - Debounced search over model SKUs and chip names
//! - Model pages with related models on the same chip
//! - Chip pages listing every model on the chip
//! - Async/await API using Tokio
//!
//! ## Quick Start
//!
//! ```no_run
//! use switchdir::{Directory, ViewState};
//!
//! #[tokio::main]
//! async fn main() -> switchdir::Result<()> {
//!     // Reads SWITCHDIR_STORE_URL and SWITCHDIR_STORE_KEY
//!     let directory = Directory::from_env()?;
//!     
//!     for result in directory.search("tomahawk").await {
//!         println!("{}", result);
//!     }
//!     
//!     if let ViewState::Loaded(page) = directory.load_model("42").await {
//!         println!("{} ({} related)", page.device, page.related.len());
//!     }
//!     
//!     Ok(())
//! }
//! ```

pub mod browser;
pub mod directory;
pub mod error;
pub mod notify;
pub mod search;
pub mod view;

#[cfg(test)]
mod testing;

// Re-exports
pub use browser::Browser;
pub use directory::Directory;
pub use error::{Error, Result};
pub use notify::{ChannelNotifier, LogNotifier, Notification, Notifier};
pub use search::SearchBox;
pub use view::{ChipPage, ModelPage, Page, ViewState};

// Re-export types
pub use switchdir_core::{resolve, ResultKind, SearchResult, ViewTarget};
pub use switchdir_store::{MemoryStore, RecordStore, RestStore, StoreConfig};
pub use switchdir_types::DeviceRecord;
