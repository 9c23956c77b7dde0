//! High-level directory interface

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use switchdir_core::{assemble, compose, Query, SearchResult};
use switchdir_store::{RecordStore, RestStore, StoreConfig};

use crate::error::Result;
use crate::notify::{LogNotifier, Notifier};
use crate::view::{ChipPage, ModelPage, ViewState};

const MODEL_LOAD_FAILED: &str = "Failed to load device details";
const CHIP_LOAD_FAILED: &str = "Failed to load chip details";

/// Switch model directory
///
/// Reads device records from a [`RecordStore`] and loads the model and
/// chip views. Store errors never escape a loader: they become a
/// [`ViewState`] and, for detail views, a user notification.
///
/// # Examples
///
/// ```no_run
/// use switchdir::{Directory, ViewState};
///
/// #[tokio::main]
/// async fn main() -> switchdir::Result<()> {
///     let directory = Directory::from_env()?;
///
///     if let ViewState::Loaded(page) = directory.load_chip("Tomahawk").await {
///         println!("{} models", page.model_count());
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Clone)]
pub struct Directory {
    store: Arc<dyn RecordStore>,
    notifier: Arc<dyn Notifier>,
}

impl Directory {
    /// Create a directory over `store`
    pub fn new(store: impl RecordStore + 'static) -> Self {
        Self::with_store(Arc::new(store))
    }

    /// Create a directory over a shared store
    pub fn with_store(store: Arc<dyn RecordStore>) -> Self {
        Self {
            store,
            notifier: Arc::new(LogNotifier),
        }
    }

    /// Create a directory over the remote store described by `config`
    pub fn from_config(config: &StoreConfig) -> Result<Self> {
        Ok(Self::remote(RestStore::new(config)?))
    }

    /// Create a directory from `SWITCHDIR_STORE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self::remote(RestStore::from_env()?))
    }

    fn remote(store: RestStore) -> Self {
        info!("Using record store at {}", store.endpoint());
        Self::new(store)
    }

    /// Set notification sink (default: log)
    pub fn with_notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Arc::new(notifier);
        self
    }

    /// Underlying store
    pub fn store(&self) -> Arc<dyn RecordStore> {
        Arc::clone(&self.store)
    }

    /// Search once, without debouncing
    ///
    /// Returns an empty list for input shorter than two characters
    /// without calling the store. A failed search is an empty list too.
    pub async fn search(&self, raw: &str) -> Vec<SearchResult> {
        let Some(query) = compose(raw) else {
            return Vec::new();
        };

        match self.store.fetch(&query).await {
            Ok(rows) => assemble(&rows, raw),
            Err(e) => {
                debug!("Search for {:?} failed: {}", raw, e);
                Vec::new()
            }
        }
    }

    /// Load a model page
    ///
    /// A missing record is `NotFound` and issues no related-models fetch.
    /// A failed related-models fetch leaves the list empty.
    pub async fn load_model(&self, id: &str) -> ViewState<ModelPage> {
        if id.is_empty() {
            return ViewState::NotFound;
        }

        debug!("Loading model {}...", id);

        let device = match self.store.fetch(&Query::model(id)).await {
            Ok(rows) => rows.into_iter().next(),
            Err(e) => {
                error!("Failed to load model {}: {}", id, e);
                self.notifier.error(MODEL_LOAD_FAILED);
                return ViewState::Failed;
            }
        };

        let Some(device) = device else {
            debug!("Model {} not found", id);
            return ViewState::NotFound;
        };

        let related = if device.has_chip() {
            match self.store.fetch(&Query::related(&device.chip_name, id)).await {
                Ok(rows) => rows,
                Err(e) => {
                    warn!("Failed to load models related to {}: {}", id, e);
                    Vec::new()
                }
            }
        } else {
            Vec::new()
        };

        debug!("Loaded {} with {} related models", device, related.len());

        ViewState::Loaded(ModelPage { device, related })
    }

    /// Load a chip page
    ///
    /// A chip with no models is a loaded, empty page.
    pub async fn load_chip(&self, name: &str) -> ViewState<ChipPage> {
        if name.is_empty() {
            return ViewState::NotFound;
        }

        debug!("Loading chip {}...", name);

        match self.store.fetch(&Query::chip(name)).await {
            Ok(devices) => {
                debug!("Chip {} has {} models", name, devices.len());

                ViewState::Loaded(ChipPage {
                    chip: name.to_string(),
                    devices,
                })
            }
            Err(e) => {
                error!("Failed to load chip {}: {}", name, e);
                self.notifier.error(CHIP_LOAD_FAILED);
                ViewState::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use switchdir_core::{resolve, ResultKind};
    use switchdir_types::DeviceRecord;

    use crate::notify::MockNotifier;
    use crate::testing::{catalog, memory_store, unavailable, MockStore};

    fn silent() -> MockNotifier {
        let mut notifier = MockNotifier::new();
        notifier.expect_error().never();
        notifier
    }

    fn expecting(message: &'static str) -> MockNotifier {
        let mut notifier = MockNotifier::new();
        notifier
            .expect_error()
            .withf(move |m| m == message)
            .times(1)
            .return_const(());
        notifier
    }

    #[tokio::test]
    async fn test_load_model_with_related() {
        let directory = Directory::new(memory_store()).with_notifier(silent());

        let ViewState::Loaded(page) = directory.load_model("1").await else {
            panic!("expected loaded model");
        };

        assert_eq!(page.device, catalog()[0]);

        let related: Vec<_> = page.related.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(related, vec!["3", "4", "5", "6"]);
    }

    #[tokio::test]
    async fn test_load_model_not_found() {
        let mut store = MockStore::new();
        store
            .expect_fetch()
            .withf(|q| *q == Query::model("missing"))
            .times(1)
            .returning(|_| Ok(vec![]));

        let directory = Directory::new(store).with_notifier(silent());

        assert_eq!(directory.load_model("missing").await, ViewState::NotFound);
    }

    #[tokio::test]
    async fn test_load_model_failure_notifies() {
        let mut store = MockStore::new();
        store.expect_fetch().times(1).returning(|_| Err(unavailable()));

        let directory = Directory::new(store).with_notifier(expecting(MODEL_LOAD_FAILED));

        assert_eq!(directory.load_model("1").await, ViewState::Failed);
    }

    #[tokio::test]
    async fn test_related_failure_is_silent() {
        let mut store = MockStore::new();
        store
            .expect_fetch()
            .withf(|q| *q == Query::model("1"))
            .times(1)
            .returning(|_| Ok(vec![DeviceRecord::new("1", "SW-100", "Tomahawk")]));
        store
            .expect_fetch()
            .withf(|q| *q == Query::related("Tomahawk", "1"))
            .times(1)
            .returning(|_| Err(unavailable()));

        let directory = Directory::new(store).with_notifier(silent());

        let page = directory.load_model("1").await;
        assert_eq!(
            page,
            ViewState::Loaded(ModelPage {
                device: DeviceRecord::new("1", "SW-100", "Tomahawk"),
                related: vec![],
            })
        );
    }

    #[tokio::test]
    async fn test_model_without_chip_skips_related() {
        let mut store = MockStore::new();
        store
            .expect_fetch()
            .times(1)
            .returning(|_| Ok(vec![DeviceRecord::new("9", "SW-900", "")]));

        let directory = Directory::new(store);

        let page = directory.load_model("9").await;
        assert!(page.loaded().unwrap().related.is_empty());
    }

    #[tokio::test]
    async fn test_empty_id_not_fetched() {
        let mut store = MockStore::new();
        store.expect_fetch().never();

        let directory = Directory::new(store);

        assert_eq!(directory.load_model("").await, ViewState::NotFound);
        assert_eq!(directory.load_chip("").await, ViewState::NotFound);
    }

    #[tokio::test]
    async fn test_load_chip() {
        let directory = Directory::new(memory_store()).with_notifier(silent());

        let ViewState::Loaded(page) = directory.load_chip("Tomahawk").await else {
            panic!("expected loaded chip");
        };

        assert_eq!(page.chip, "Tomahawk");
        assert_eq!(page.model_count(), 5);
        assert!(page.devices.iter().all(|d| d.chip_name == "Tomahawk"));
        assert_eq!(page.empty_message(), None);
    }

    #[tokio::test]
    async fn test_load_chip_empty_is_not_error() {
        let directory = Directory::new(memory_store()).with_notifier(silent());

        let page = directory.load_chip("Jericho").await;

        assert_eq!(
            page,
            ViewState::Loaded(ChipPage {
                chip: "Jericho".into(),
                devices: vec![],
            })
        );
        assert_eq!(
            page.loaded().unwrap().empty_message(),
            Some("No models found for this chip.")
        );
    }

    #[tokio::test]
    async fn test_load_chip_failure_notifies() {
        let mut store = MockStore::new();
        store.expect_fetch().times(1).returning(|_| Err(unavailable()));

        let directory = Directory::new(store).with_notifier(expecting(CHIP_LOAD_FAILED));

        assert_eq!(directory.load_chip("Tomahawk").await, ViewState::Failed);
    }

    #[tokio::test]
    async fn test_resolve_then_load_round_trip() {
        let directory = Directory::new(memory_store());

        for record in catalog() {
            let target = resolve(&SearchResult::model(&record));
            let switchdir_core::ViewTarget::Model(id) = target else {
                panic!("expected model target");
            };

            let page = directory.load_model(&id).await;
            assert_eq!(page.loaded().unwrap().device.id, record.id);
        }
    }

    #[tokio::test]
    async fn test_search_once() {
        let directory = Directory::new(memory_store());

        let results = directory.search("tomahawk").await;

        assert_eq!(
            results,
            vec![SearchResult::chip("Tomahawk"), SearchResult::chip("Tomahawk 5")]
        );
        assert!(results.iter().all(|r| r.kind == ResultKind::Chip));
        assert!(directory.search("t").await.is_empty());
    }

    #[test]
    fn test_from_config_uses_rest_store() {
        let config = StoreConfig::new("https://devices.example.com").unwrap();
        let directory = Directory::from_config(&config).unwrap();

        assert_eq!(directory.store().endpoint(), "https://devices.example.com/");
    }

    #[tokio::test]
    async fn test_search_once_failure_is_empty() {
        let mut store = MockStore::new();
        store.expect_fetch().times(1).returning(|_| Err(unavailable()));

        let directory = Directory::new(store).with_notifier(silent());

        assert_eq!(directory.search("tom").await, vec![]);
    }
}
