//! Page and view state structures

use switchdir_core::constants::{EMPTY_CHIP_MESSAGE, NOT_AVAILABLE, POPULAR_CHIPS};
use switchdir_core::ViewTarget;
use switchdir_types::DeviceRecord;

/// Load state of a detail view
///
/// Every navigation starts in `Loading`. `Failed` renders like `NotFound`;
/// the difference is that a failure has already been reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Loading,
    Loaded(T),
    NotFound,
    Failed,
}

impl<T> ViewState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Loaded data, if any
    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// Model page data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPage {
    pub device: DeviceRecord,

    /// Other models on the same chip
    pub related: Vec<DeviceRecord>,
}

impl ModelPage {
    /// Key capabilities as label/value rows, `N/A` for missing specs
    pub fn capabilities(&self) -> [(&'static str, &str); 3] {
        [
            ("Chip Technology", self.device.chip_name.as_str()),
            (
                "Port Configuration",
                self.device.port_layout.as_deref().unwrap_or(NOT_AVAILABLE),
            ),
            (
                "Buffer Capacity",
                self.device.buffer_size.as_deref().unwrap_or(NOT_AVAILABLE),
            ),
        ]
    }

    /// Chip page listing every model on this chip
    pub fn chip_target(&self) -> Option<ViewTarget> {
        self.device
            .has_chip()
            .then(|| ViewTarget::for_chip(&self.device.chip_name))
    }
}

/// Chip page data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChipPage {
    pub chip: String,
    pub devices: Vec<DeviceRecord>,
}

impl ChipPage {
    pub fn model_count(&self) -> usize {
        self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Message shown in place of the model list
    pub fn empty_message(&self) -> Option<&'static str> {
        self.is_empty().then_some(EMPTY_CHIP_MESSAGE)
    }
}

/// The page currently shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Search home with featured chip series
    Home { popular_chips: Vec<ViewTarget> },

    Model { id: String, state: ViewState<ModelPage> },

    Chip { name: String, state: ViewState<ChipPage> },
}

impl Page {
    pub fn home() -> Self {
        Self::Home {
            popular_chips: POPULAR_CHIPS.iter().map(|c| ViewTarget::for_chip(*c)).collect(),
        }
    }

    /// Target that reopens this page
    pub fn target(&self) -> ViewTarget {
        match self {
            Self::Home { .. } => ViewTarget::Home,
            Self::Model { id, .. } => ViewTarget::Model(id.clone()),
            Self::Chip { name, .. } => ViewTarget::Chip(name.clone()),
        }
    }

    pub fn is_loading(&self) -> bool {
        match self {
            Self::Home { .. } => false,
            Self::Model { state, .. } => state.is_loading(),
            Self::Chip { state, .. } => state.is_loading(),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::home()
    }
}
