//! Directory constants
//!
//! Limits and names shared by the query composer, the result assembler
//! and the detail loaders.

use std::time::Duration;

/// Table holding the device records
pub const DEVICE_TABLE: &str = "device_layout_info";

/// Shortest input that triggers a search
pub const MIN_QUERY_CHARS: usize = 2;

/// Rows requested from the store per search
pub const SEARCH_ROW_LIMIT: usize = 8;

/// Entries shown in the assembled result list
pub const MAX_RESULTS: usize = 8;

/// Related models shown on a model page
pub const RELATED_LIMIT: usize = 4;

/// Quiet period before a search query is issued
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(150);

/// Chip series featured on the home page
pub const POPULAR_CHIPS: [&str; 4] = ["Tomahawk", "Spectrum", "Jericho", "Trident"];

/// Shown on a chip page with no models
pub const EMPTY_CHIP_MESSAGE: &str = "No models found for this chip.";

/// Placeholder for absent optional specs
pub const NOT_AVAILABLE: &str = "N/A";

/// Path prefixes understood by the navigation resolver
pub mod paths {
    pub const HOME: &str = "/";
    pub const MODEL: &str = "/model/";
    pub const CHIP: &str = "/chip/";
}
