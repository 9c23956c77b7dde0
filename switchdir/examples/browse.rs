//! Search and navigation against an in-memory catalog

use std::time::Duration;

use tokio::time::sleep;
use tracing_subscriber::EnvFilter;
use switchdir::{Browser, ChannelNotifier, DeviceRecord, Directory, MemoryStore, ViewTarget};

#[tokio::main]
async fn main() -> switchdir::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    let store = MemoryStore::from_records([
        DeviceRecord::new("1", "Z9332F-ON", "Tomahawk 3").with_port_layout("32x400G"),
        DeviceRecord::new("2", "S5248F-ON", "Trident 3").with_buffer_size("32MB"),
        DeviceRecord::new("3", "SN4600", "Spectrum-2").with_port_layout("64x200G"),
        DeviceRecord::new("4", "Z9264F-ON", "Tomahawk 2"),
        DeviceRecord::new("5", "AS9716-32D", "Tomahawk 3"),
    ])?
    .with_latency(Duration::from_millis(40));

    let (notifier, mut notifications) = ChannelNotifier::new();
    let mut browser = Browser::new(Directory::new(store).with_notifier(notifier));

    // Typing "toma" one key at a time issues a single search
    for text in ["t", "to", "tom", "toma"] {
        browser.input(text);
        sleep(Duration::from_millis(50)).await;
    }
    sleep(Duration::from_millis(300)).await;

    let results = browser.search().results();
    for result in &results {
        println!("{}", result);
    }

    if let Some(result) = results.first() {
        let page = browser.select(result).await;
        println!("Opened {} -> {:?}", page.target(), page);
    }

    let page = browser.open(ViewTarget::for_chip("Tomahawk 3")).await;
    println!("Opened {} -> {:?}", page.target(), page);

    while let Ok(notification) = notifications.try_recv() {
        println!("! {}", notification.message);
    }

    Ok(())
}
