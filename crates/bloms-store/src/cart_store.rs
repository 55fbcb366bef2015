//! # Cart Store
//!
//! The adapter between the cart model and the key/value storage. Owns the
//! fixed storage key and the JSON payload format.
//!
//! ## Silent Fallback
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  load()                                                                 │
//! │    │                                                                    │
//! │    ├── key absent ──────────────► empty cart (debug log)               │
//! │    │                                                                    │
//! │    ├── value doesn't parse ─────► empty cart (warn log, value kept     │
//! │    │                              in storage until next save)          │
//! │    │                                                                    │
//! │    └── value parses ────────────► Cart::from_items(...)                │
//! │                                                                         │
//! │  Infrastructure failures (pool, query) DO propagate as StoreError.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//! A shopper must never lose the page to a corrupt cart payload; there is
//! no user-visible diagnostic for it, only logs.

use tracing::{debug, warn};

use bloms_core::{Cart, LineItem};

use crate::error::StoreResult;
use crate::kv::Storage;

/// The fixed key the serialized cart lives under.
///
/// Carried over verbatim from the original page so an existing persisted
/// cart keeps working.
pub const CART_STORAGE_KEY: &str = "berryBlomsCart";

/// Repository-style adapter for persisting the cart.
#[derive(Debug, Clone)]
pub struct CartStore {
    storage: Storage,
}

impl CartStore {
    /// Creates a new CartStore over the given storage.
    pub fn new(storage: Storage) -> Self {
        CartStore { storage }
    }

    /// Persists the cart as a JSON array of line items.
    pub async fn save(&self, cart: &Cart) -> StoreResult<()> {
        let payload = serde_json::to_string(cart.items())?;
        self.storage.set(CART_STORAGE_KEY, &payload).await?;

        debug!(items = cart.len(), "Cart persisted");
        Ok(())
    }

    /// Loads the persisted cart.
    ///
    /// Absent or malformed data yields an empty cart; only infrastructure
    /// failures surface as errors.
    pub async fn load(&self) -> StoreResult<Cart> {
        let Some(payload) = self.storage.get(CART_STORAGE_KEY).await? else {
            debug!("No persisted cart, starting empty");
            return Ok(Cart::new());
        };

        match serde_json::from_str::<Vec<LineItem>>(&payload) {
            Ok(items) => {
                debug!(items = items.len(), "Cart loaded");
                Ok(Cart::from_items(items))
            }
            Err(e) => {
                warn!(error = %e, "Persisted cart is malformed, starting empty");
                Ok(Cart::new())
            }
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
