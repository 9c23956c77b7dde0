//! Type definitions for switchdir

pub mod device_record;
pub mod error;

pub use device_record::DeviceRecord;
pub use error::{Error, Result};
