//! # bloms-store: Persistence Layer for the Berry Bloms Cart
//!
//! This crate provides the page's persistent storage. It uses SQLite for
//! local storage with sqlx for async operations - the Rust analog of the
//! browser's `localStorage`.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Berry Bloms Data Flow                                │
//! │                                                                         │
//! │  Controller (add_to_cart, update_quantity, ...)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    bloms-store (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    Storage    │    │   CartStore   │    │  Migrations  │  │   │
//! │  │   │    (kv.rs)    │◄───│(cart_store.rs)│    │  (embedded)  │  │   │
//! │  │   │               │    │               │    │              │  │   │
//! │  │   │ SqlitePool    │    │ fixed key     │    │ 001_local_   │  │   │
//! │  │   │ get/set       │    │ JSON payload  │    │ storage.sql  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite file: ~/.local/share/berry-bloms/storage.db (platform paths)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`kv`] - Key/value storage over a SQLite pool
//! - [`migrations`] - Embedded schema migration
//! - [`cart_store`] - The cart adapter owning the fixed storage key
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bloms_store::{CartStore, Storage, StorageConfig};
//!
//! let storage = Storage::new(StorageConfig::new("path/to/storage.db")).await?;
//! let store = CartStore::new(storage);
//!
//! store.save(&cart).await?;
//! let cart = store.load().await?; // absent/malformed → empty cart
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart_store;
pub mod error;
pub mod kv;
pub mod migrations;

// =============================================================================
// Re-exports
// =============================================================================

pub use cart_store::{CartStore, CART_STORAGE_KEY};
pub use error::StoreError;
pub use kv::{Storage, StorageConfig};
