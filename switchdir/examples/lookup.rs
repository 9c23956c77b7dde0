//! Search or open a path against a remote record store
//!
//! ```text
//! SWITCHDIR_STORE_URL=https://... cargo run --example lookup -- tomahawk
//! SWITCHDIR_STORE_URL=https://... cargo run --example lookup -- /chip/Tomahawk%205
//! ```

use tracing_subscriber::EnvFilter;
use switchdir::{resolve, Browser, Directory, Page, ViewState};

#[tokio::main]
async fn main() -> switchdir::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let arg = std::env::args().nth(1).unwrap_or_else(|| "tomahawk".to_string());

    let directory = Directory::from_env()?;

    if !arg.starts_with('/') {
        let results = directory.search(&arg).await;

        if results.is_empty() {
            println!("No matches for {:?}", arg);
        }
        for result in results {
            println!("{}  ->  {}", result, resolve(&result));
        }
        return Ok(());
    }

    let mut browser = Browser::new(directory);

    match browser.open_path(&arg).await? {
        Page::Home { popular_chips } => {
            println!("Popular chip series:");
            for chip in popular_chips {
                println!("  {}", chip);
            }
        }
        Page::Model { state: ViewState::Loaded(page), .. } => {
            println!("{}", page.device.hw_sku);
            for (label, value) in page.capabilities() {
                println!("  {:<20} {}", label, value);
            }
            for related in &page.related {
                println!("  related: {}", related);
            }
        }
        Page::Chip { name, state: ViewState::Loaded(page) } => {
            println!("{} ({} models)", name, page.model_count());
            match page.empty_message() {
                Some(message) => println!("  {}", message),
                None => {
                    for device in &page.devices {
                        println!("  {}", device);
                    }
                }
            }
        }
        page => println!("Nothing to show for {}", page.target()),
    }

    Ok(())
}
