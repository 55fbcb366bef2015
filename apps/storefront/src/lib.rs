//! # bloms-storefront: The Berry Bloms Cart Application
//!
//! Everything the page does that is not pure business logic: regions and
//! rendering, toasts, the controller that glues them to `bloms-core` and
//! `bloms-store`, and the demo binary's plumbing.
//!
//! ## Layering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      bloms-storefront Layers                            │
//! │                                                                         │
//! │  ┌──────────────┐    events     ┌─────────────────────────────────┐    │
//! │  │  main.rs     │──────────────►│  controller::Storefront         │    │
//! │  │  (demo loop) │               │   mutate → persist → render     │    │
//! │  └──────────────┘               └───────┬──────────────┬──────────┘    │
//! │                                         │              │               │
//! │                     ┌───────────────────▼──┐   ┌───────▼────────────┐  │
//! │                     │  render / page       │   │  notify            │  │
//! │                     │  regions + markup    │   │  toast lifecycle   │  │
//! │                     └──────────────────────┘   └────────────────────┘  │
//! │                                                                         │
//! │  Business rules live in bloms-core; SQLite lives in bloms-store.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod controller;
pub mod error;
pub mod notify;
pub mod page;
pub mod render;

pub use controller::Storefront;
pub use error::{AppError, AppResult};
pub use page::{MemoryPage, Page};

use std::path::PathBuf;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initializes the tracing subscriber.
///
/// Honors `RUST_LOG`; defaults keep sqlx quiet and our crates at debug.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bloms_storefront=debug,bloms_store=debug,sqlx=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}

/// Resolves the storage file path.
///
/// `BLOMS_DB_PATH` overrides; otherwise the platform data directory
/// (e.g. `~/.local/share/berry-bloms/storage.db`). `None` when neither
/// resolves, in which case the caller falls back to in-memory storage.
pub fn storage_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("BLOMS_DB_PATH") {
        return Some(PathBuf::from(path));
    }

    directories::ProjectDirs::from("com", "berrybloms", "berry-bloms")
        .map(|dirs| dirs.data_dir().join("storage.db"))
}
