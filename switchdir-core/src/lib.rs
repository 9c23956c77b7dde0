//! # switchdir-core
//!
//! Core lookup rules for the switch directory.
//!
//! This crate provides the store-independent pieces:
//! - Query model and search query composition
//! - Search result assembly (model and chip matches)
//! - Navigation targets and path encoding
//! - Search session sequencing
//! - Directory constants

pub mod assemble;
pub mod constants;
pub mod error;
pub mod navigation;
pub mod query;
pub mod session;

pub use assemble::{assemble, ResultKind, SearchResult};
pub use error::{Error, Result};
pub use navigation::{resolve, ViewTarget};
pub use query::{compose, Column, Columns, Exclusion, Filter, Query};
pub use session::{SearchSession, Ticket};
