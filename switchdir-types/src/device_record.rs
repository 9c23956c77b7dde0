//! Device record structures

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

/// One row of the device table: a switch model and the chip it is built on
///
/// The record store owns these rows; switchdir never writes them back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceRecord {
    /// Unique record identifier
    pub id: String,
    
    /// Model name (hardware SKU)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hw_sku: String,
    
    /// Switching chip used by the model
    #[serde(default, deserialize_with = "null_as_empty")]
    pub chip_name: String,
    
    /// Port layout description
    #[serde(default)]
    pub port_layout: Option<String>,
    
    /// Packet buffer size description
    #[serde(default)]
    pub buffer_size: Option<String>,
    
    /// Row creation time
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl DeviceRecord {
    pub fn new(id: impl Into<String>, hw_sku: impl Into<String>, chip_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hw_sku: hw_sku.into(),
            chip_name: chip_name.into(),
            port_layout: None,
            buffer_size: None,
            created_at: None,
        }
    }
    
    /// Set port layout
    pub fn with_port_layout(mut self, port_layout: impl Into<String>) -> Self {
        self.port_layout = Some(port_layout.into());
        self
    }
    
    /// Set buffer size
    pub fn with_buffer_size(mut self, buffer_size: impl Into<String>) -> Self {
        self.buffer_size = Some(buffer_size.into());
        self
    }
    
    /// Whether the record names a chip
    ///
    /// Chips exist only as the distinct non-empty `chip_name` values, so a
    /// record without one belongs to no chip group.
    pub fn has_chip(&self) -> bool {
        !self.chip_name.is_empty()
    }
    
    /// Check the record can be served as a model
    pub fn validate(&self) -> Result<()> {
        if self.id.is_empty() {
            return Err(Error::Validation("record id is empty".into()));
        }
        
        if self.hw_sku.is_empty() {
            return Err(Error::Validation(format!("record {} has no hw_sku", self.id)));
        }
        
        Ok(())
    }
}

impl fmt::Display for DeviceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Model[SKU: {}, Chip: {}]",
            self.hw_sku, self.chip_name
        )
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
