//! # Page Regions
//!
//! The rendering surface: a set of named regions the renderer writes into.
//!
//! ## Region Contract
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Storefront Page Regions                              │
//! │                                                                         │
//! │   ┌─────────────────────────────────────────────┐  cartBadge           │
//! │   │  Berry Bloms                          🛒(3) │◄─────────            │
//! │   ├─────────────────────────────────────────────┤                      │
//! │   │  [toast] ✓ Producto agregado al carrito     │◄─ notificationCont.  │
//! │   │                                             │                      │
//! │   │  Cart                                       │◄─ cartBody           │
//! │   │    Berry Bloms   $8.000   Cantidad: [3]     │                      │
//! │   │  ─────────────────────────────────────────  │                      │
//! │   │  Subtotal                        $24.000    │◄─ cartSubtotal       │
//! │   │  IVA (19%)                        $4.560    │◄─ cartIVA            │
//! │   │  Envío                           $10.000    │◄─ cartShipping       │
//! │   │  Total                           $38.560    │◄─ cartTotal          │
//! │   └─────────────────────────────────────────────┘                      │
//! │                                                                         │
//! │  A region id that resolves to nothing makes that render step a         │
//! │  silent no-op - never an error.                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::BTreeMap;

/// Region ids the renderer targets. String ids, carried over from the
/// original page so the contract stays recognizable.
pub mod regions {
    /// Item-count badge on the cart icon.
    pub const CART_BADGE: &str = "cartBadge";
    /// Line-item list container.
    pub const CART_BODY: &str = "cartBody";
    /// The whole breakdown panel (hidden for an empty cart).
    pub const CART_BREAKDOWN: &str = "cartBreakdown";
    /// Subtotal field inside the breakdown.
    pub const CART_SUBTOTAL: &str = "cartSubtotal";
    /// IVA field inside the breakdown.
    pub const CART_IVA: &str = "cartIVA";
    /// Shipping field inside the breakdown.
    pub const CART_SHIPPING: &str = "cartShipping";
    /// Grand total field.
    pub const CART_TOTAL: &str = "cartTotal";
    /// Stacked toast container.
    pub const NOTIFICATIONS: &str = "notificationContainer";
}

/// A rendering surface with named regions.
///
/// Implementations decide what a region is; the contract is only that
/// writes to unknown regions are silently skipped and that `alert` blocks
/// (or simulates blocking) with a plain message.
pub trait Page {
    /// Replaces a region's content with plain text.
    fn set_text(&mut self, region: &str, text: &str);

    /// Replaces a region's content with markup.
    fn set_markup(&mut self, region: &str, markup: &str);

    /// Makes a region visible.
    fn show(&mut self, region: &str);

    /// Hides a region entirely (not just empties it).
    fn hide(&mut self, region: &str);

    /// Raises a blocking alert.
    fn alert(&mut self, message: &str);
}

// =============================================================================
// In-Memory Page
// =============================================================================

/// One named region's state.
#[derive(Debug, Clone, Default)]
struct Region {
    content: String,
    visible: bool,
}

/// In-memory [`Page`] implementation.
///
/// Backs the tests and the demo binary. Only registered regions accept
/// writes, which is exactly how the missing-element no-op behaves on the
/// real page.
#[derive(Debug, Default)]
pub struct MemoryPage {
    regions: BTreeMap<String, Region>,
    alerts: Vec<String>,
}

impl MemoryPage {
    /// Creates a page with no regions at all (every render is a no-op).
    pub fn new() -> Self {
        MemoryPage::default()
    }

    /// Creates a page with the full set of storefront regions registered.
    pub fn storefront() -> Self {
        let mut page = MemoryPage::new();
        for id in [
            regions::CART_BADGE,
            regions::CART_BODY,
            regions::CART_BREAKDOWN,
            regions::CART_SUBTOTAL,
            regions::CART_IVA,
            regions::CART_SHIPPING,
            regions::CART_TOTAL,
            regions::NOTIFICATIONS,
        ] {
            page.register(id);
        }
        page
    }

    /// Registers a region id so it accepts writes.
    pub fn register(&mut self, region: &str) {
        self.regions.insert(
            region.to_string(),
            Region {
                content: String::new(),
                visible: true,
            },
        );
    }

    /// Current content of a region, if it exists.
    pub fn content(&self, region: &str) -> Option<&str> {
        self.regions.get(region).map(|r| r.content.as_str())
    }

    /// Visibility of a region. Unknown regions report hidden.
    pub fn is_visible(&self, region: &str) -> bool {
        self.regions.get(region).is_some_and(|r| r.visible)
    }

    /// Drains the alerts raised since the last call.
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }
}

impl Page for MemoryPage {
    fn set_text(&mut self, region: &str, text: &str) {
        if let Some(r) = self.regions.get_mut(region) {
            r.content = text.to_string();
        }
    }

    fn set_markup(&mut self, region: &str, markup: &str) {
        if let Some(r) = self.regions.get_mut(region) {
            r.content = markup.to_string();
        }
    }

    fn show(&mut self, region: &str) {
        if let Some(r) = self.regions.get_mut(region) {
            r.visible = true;
        }
    }

    fn hide(&mut self, region: &str) {
        if let Some(r) = self.regions.get_mut(region) {
            r.visible = false;
        }
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_region_is_noop() {
        let mut page = MemoryPage::new();

        // None of these may panic or create regions
        page.set_text("nope", "x");
        page.set_markup("nope", "<b>x</b>");
        page.show("nope");
        page.hide("nope");

        assert_eq!(page.content("nope"), None);
        assert!(!page.is_visible("nope"));
    }

    #[test]
    fn test_registered_region_accepts_writes() {
        let mut page = MemoryPage::new();
        page.register("badge");

        page.set_text("badge", "3");
        assert_eq!(page.content("badge"), Some("3"));
        assert!(page.is_visible("badge"));

        page.hide("badge");
        assert!(!page.is_visible("badge"));
    }

    #[test]
    fn test_alerts_drain() {
        let mut page = MemoryPage::new();
        page.alert("uno");
        page.alert("dos");

        assert_eq!(page.take_alerts(), vec!["uno", "dos"]);
        assert!(page.take_alerts().is_empty());
    }
}
