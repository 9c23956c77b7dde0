//! Navigation targets
//!
//! Every browsable view has a canonical path:
//!
//! ```text
//! /                      search home
//! /model/{id}            one model, id used as-is
//! /chip/{encoded name}   models on a chip, name percent-encoded
//! ```
//!
//! Chip names are encoded with everything but `A-Z a-z 0-9 - . _ ~`
//! escaped, so `!*'()` are escaped too: `Spectrum-4 (Ultra)` becomes
//! `/chip/Spectrum-4%20%28Ultra%29`. Parsing accepts them either way.

use std::fmt;

use tracing::trace;

use switchdir_types::DeviceRecord;

use crate::assemble::{ResultKind, SearchResult};
use crate::constants::paths;
use crate::error::{Error, Result};

/// A view the directory can show
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ViewTarget {
    /// Search home
    Home,

    /// Model page, keyed by record id
    Model(String),

    /// Chip page, keyed by decoded chip name
    Chip(String),
}

impl ViewTarget {
    /// Target of a device card
    pub fn for_record(record: &DeviceRecord) -> Self {
        Self::Model(record.id.clone())
    }

    /// Target of a chip badge
    pub fn for_chip(name: impl Into<String>) -> Self {
        Self::Chip(name.into())
    }

    /// Canonical path for this view
    pub fn path(&self) -> String {
        match self {
            Self::Home => paths::HOME.to_string(),
            Self::Model(id) => format!("{}{}", paths::MODEL, id),
            Self::Chip(name) => format!("{}{}", paths::CHIP, urlencoding::encode(name)),
        }
    }

    /// Parse a path produced by [`ViewTarget::path`]
    ///
    /// Chip names are percent-decoded; model ids are taken verbatim.
    ///
    /// # Examples
    ///
    /// ```
    /// use switchdir_core::ViewTarget;
    ///
    /// let target = ViewTarget::parse("/chip/Tomahawk%205").unwrap();
    /// assert_eq!(target, ViewTarget::Chip("Tomahawk 5".into()));
    /// ```
    pub fn parse(path: &str) -> Result<Self> {
        if path == paths::HOME || path.is_empty() {
            return Ok(Self::Home);
        }

        if let Some(id) = path.strip_prefix(paths::MODEL) {
            return Ok(Self::Model(id.to_string()));
        }

        if let Some(segment) = path.strip_prefix(paths::CHIP) {
            let name = urlencoding::decode(segment).map_err(|source| Error::InvalidEncoding {
                segment: segment.to_string(),
                source,
            })?;

            trace!(segment, name = %name, "Decoded chip path");

            return Ok(Self::Chip(name.into_owned()));
        }

        Err(Error::InvalidPath(path.to_string()))
    }
}

impl fmt::Display for ViewTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Resolve a selected search result to its view
pub fn resolve(result: &SearchResult) -> ViewTarget {
    match result.kind {
        ResultKind::Model => ViewTarget::Model(result.id.clone()),
        ResultKind::Chip => ViewTarget::Chip(result.id.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_model() {
        let record = DeviceRecord::new("42", "SW-100", "Tomahawk");
        let target = resolve(&SearchResult::model(&record));

        assert_eq!(target, ViewTarget::Model("42".into()));
        assert_eq!(target.path(), "/model/42");
        assert_eq!(target, ViewTarget::for_record(&record));
    }

    #[test]
    fn test_resolve_chip_encodes_name() {
        let target = resolve(&SearchResult::chip("Tomahawk 5/Plus"));

        assert_eq!(target, ViewTarget::Chip("Tomahawk 5/Plus".into()));
        assert_eq!(target.path(), "/chip/Tomahawk%205%2FPlus");
        assert_eq!(target, ViewTarget::for_chip("Tomahawk 5/Plus"));
    }

    #[test]
    fn test_parse_round_trip() {
        for target in [
            ViewTarget::Home,
            ViewTarget::Model("a1b2-c3".into()),
            ViewTarget::Chip("Spectrum-4 (Ultra)".into()),
            ViewTarget::Chip("Jericho™".into()),
        ] {
            assert_eq!(ViewTarget::parse(&target.path()).unwrap(), target);
        }
    }

    #[test]
    fn test_chip_path_escapes_reserved_marks() {
        let target = ViewTarget::for_chip("Spectrum-4 (Ultra)");
        assert_eq!(target.path(), "/chip/Spectrum-4%20%28Ultra%29");

        assert_eq!(ViewTarget::parse("/chip/Spectrum-4%20(Ultra)").unwrap(), target);
        assert_eq!(
            ViewTarget::parse("/chip/it's*new!").unwrap(),
            ViewTarget::Chip("it's*new!".into())
        );
    }

    #[test]
    fn test_parse_unencoded_chip() {
        assert_eq!(
            ViewTarget::parse("/chip/Trident").unwrap(),
            ViewTarget::Chip("Trident".into())
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(ViewTarget::parse("/vendor/x"), Err(Error::InvalidPath(_))));
        assert!(matches!(
            ViewTarget::parse("/chip/%FF"),
            Err(Error::InvalidEncoding { .. })
        ));
    }

    #[test]
    fn test_parse_empty_segments() {
        assert_eq!(ViewTarget::parse("/model/").unwrap(), ViewTarget::Model(String::new()));
        assert_eq!(ViewTarget::parse("/chip/").unwrap(), ViewTarget::Chip(String::new()));
    }
}
