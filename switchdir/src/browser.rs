//! Page navigation
//!
//! The browser owns the search box and the current page. Opening a view
//! publishes `Loading` first, then the loaded state; every navigation
//! fetches again and clears the search box.

use std::time::Duration;

use tokio::sync::watch;
use tracing::info;

use switchdir_core::{SearchResult, ViewTarget};

use crate::directory::Directory;
use crate::error::Result;
use crate::search::SearchBox;
use crate::view::{Page, ViewState};

/// Switch directory browser
///
/// # Examples
///
/// ```no_run
/// use switchdir::{Browser, Directory};
///
/// #[tokio::main]
/// async fn main() -> switchdir::Result<()> {
///     let mut browser = Browser::new(Directory::from_env()?);
///
///     let page = browser.open_path("/chip/Tomahawk").await?;
///     println!("{:?}", page);
///
///     Ok(())
/// }
/// ```
pub struct Browser {
    directory: Directory,
    search: SearchBox,
    page: watch::Sender<Page>,
}

impl Browser {
    /// Create a browser on the home page
    pub fn new(directory: Directory) -> Self {
        let search = SearchBox::new(directory.store());
        let (page, _) = watch::channel(Page::home());

        Self {
            directory,
            search,
            page,
        }
    }

    /// Set search debounce period (default: 150ms)
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.search = SearchBox::new(self.directory.store()).with_debounce(debounce);
        self
    }

    /// Current page
    pub fn page(&self) -> Page {
        self.page.borrow().clone()
    }

    /// Watch page changes, including `Loading` states
    pub fn subscribe(&self) -> watch::Receiver<Page> {
        self.page.subscribe()
    }

    /// Search box
    pub fn search(&self) -> &SearchBox {
        &self.search
    }

    /// Type into the search box
    pub fn input(&mut self, text: &str) {
        self.search.input(text);
    }

    /// Open the view for a search result
    pub async fn select(&mut self, result: &SearchResult) -> Page {
        let target = self.search.select(result);
        self.open(target).await
    }

    /// Open a path such as `/model/42` or `/chip/Tomahawk%205`
    pub async fn open_path(&mut self, path: &str) -> Result<Page> {
        let target = ViewTarget::parse(path)?;
        Ok(self.open(target).await)
    }

    /// Return to the search home
    pub async fn back_to_search(&mut self) -> Page {
        self.open(ViewTarget::Home).await
    }

    /// Open a view
    pub async fn open(&mut self, target: ViewTarget) -> Page {
        info!("Opening {}", target);

        self.search.clear();

        match target {
            ViewTarget::Home => {
                self.page.send_replace(Page::home());
            }
            ViewTarget::Model(id) => {
                self.page.send_replace(Page::Model {
                    id: id.clone(),
                    state: ViewState::Loading,
                });

                let state = self.directory.load_model(&id).await;
                self.page.send_replace(Page::Model { id, state });
            }
            ViewTarget::Chip(name) => {
                self.page.send_replace(Page::Chip {
                    name: name.clone(),
                    state: ViewState::Loading,
                });

                let state = self.directory.load_chip(&name).await;
                self.page.send_replace(Page::Chip { name, state });
            }
        }

        self.page()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    use crate::testing::memory_store;

    const SETTLE: Duration = Duration::from_millis(200);

    fn browser() -> Browser {
        Browser::new(Directory::new(memory_store()))
    }

    #[tokio::test]
    async fn test_starts_home() {
        let browser = browser();
        assert_eq!(browser.page(), Page::home());
    }

    #[tokio::test]
    async fn test_open_model_path() {
        let mut browser = browser();

        let page = browser.open_path("/model/1").await.unwrap();

        let Page::Model { id, state: ViewState::Loaded(model) } = page else {
            panic!("expected loaded model page");
        };
        assert_eq!(id, "1");
        assert_eq!(model.device.hw_sku, "SW-100");
        assert_eq!(model.related.len(), 4);
        assert_eq!(model.chip_target(), Some(ViewTarget::Chip("Tomahawk".into())));
    }

    #[tokio::test]
    async fn test_open_encoded_chip_path() {
        let mut browser = browser();

        let page = browser.open_path("/chip/Tomahawk%205").await.unwrap();

        let Page::Chip { name, state: ViewState::Loaded(chip) } = page else {
            panic!("expected loaded chip page");
        };
        assert_eq!(name, "Tomahawk 5");
        assert_eq!(chip.devices.len(), 1);
        assert_eq!(chip.devices[0].hw_sku, "TH5-64");
    }

    #[tokio::test]
    async fn test_open_missing_model() {
        let mut browser = browser();

        let page = browser.open_path("/model/999").await.unwrap();

        assert_eq!(
            page,
            Page::Model {
                id: "999".into(),
                state: ViewState::NotFound,
            }
        );

        assert_eq!(browser.back_to_search().await, Page::home());
    }

    #[tokio::test]
    async fn test_open_unknown_path() {
        let mut browser = browser();

        assert!(browser.open_path("/vendor/broadcom").await.is_err());
        assert_eq!(browser.page(), Page::home());
    }

    #[tokio::test(start_paused = true)]
    async fn test_loading_published_first() {
        let store = memory_store().with_latency(Duration::from_millis(100));
        let mut browser = Browser::new(Directory::new(store));
        let mut pages = browser.subscribe();

        let (page, first) = tokio::join!(browser.open(ViewTarget::for_chip("Spectrum")), async {
            pages.changed().await.unwrap();
            pages.borrow_and_update().clone()
        });

        assert_eq!(
            first,
            Page::Chip {
                name: "Spectrum".into(),
                state: ViewState::Loading,
            }
        );
        assert!(!page.is_loading());
        assert_eq!(page.target(), ViewTarget::Chip("Spectrum".into()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_search_then_select() {
        let mut browser = browser();

        browser.input("sn-46");
        tokio::time::sleep(SETTLE).await;

        let results = browser.search().results();
        assert_eq!(results.len(), 1);

        let page = browser.select(&results[0]).await;

        assert_eq!(page.target(), ViewTarget::Model("8".into()));
        assert!(browser.search().results().is_empty());
        assert_eq!(browser.search().text(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigation_clears_search() {
        let mut browser = browser().with_debounce(Duration::from_millis(50));

        browser.input("tom");
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(!browser.search().results().is_empty());

        browser.open(ViewTarget::Home).await;
        assert!(browser.search().results().is_empty());
    }
}
