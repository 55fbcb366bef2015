//! # Storefront Controller
//!
//! Owns the live cart and routes every page event through the same
//! pipeline: mutate, persist, re-render, notify.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Event Flow                              │
//! │                                                                         │
//! │   "Agregar al carrito" ──► add_to_cart ──┐                             │
//! │   item × button ─────────► remove_item ──┤                             │
//! │   quantity input ────────► set_quantity ─┤                             │
//! │                                          ▼                             │
//! │                              ┌──────────────────────┐                  │
//! │                              │  1. mutate Cart      │                  │
//! │                              │  2. CartStore::save  │ ◄── every       │
//! │                              │  3. render::refresh  │     mutation    │
//! │                              │  4. toast (add only) │                  │
//! │                              └──────────────────────┘                  │
//! │                                                                         │
//! │   "Finalizar compra" ────► checkout ──► alert (no mutation, no clear)  │
//! │   animation frame ───────► tick ──────► toast phases + container       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info, instrument, warn};

use bloms_core::{catalog, validation, Breakdown, Cart, Product};
use bloms_store::CartStore;

use crate::error::AppResult;
use crate::notify::{self, Clock, ToastStack};
use crate::page::{regions, Page};
use crate::render;

/// Toast text shown after every successful add.
pub const TOAST_ADDED: &str = "✓ Producto agregado al carrito";

/// Alert text for a checkout attempt on an empty cart.
pub const EMPTY_CART_ALERT: &str = "Tu carrito está vacío";

/// The storefront controller.
///
/// Generic over the page surface and the clock so tests can drive both.
pub struct Storefront<P: Page, C: Clock> {
    product: Product,
    cart: Cart,
    store: CartStore,
    page: P,
    toasts: ToastStack<C>,
}

impl<P: Page, C: Clock> Storefront<P, C> {
    /// Builds the controller around the featured product, loading any
    /// persisted cart and rendering the initial state.
    pub async fn new(store: CartStore, page: P, clock: C) -> AppResult<Self> {
        let cart = store.load().await?;
        info!(items = cart.len(), "Storefront initialized");

        let mut storefront = Storefront {
            product: catalog::featured(),
            cart,
            store,
            page,
            toasts: ToastStack::new(clock),
        };
        render::refresh(&mut storefront.page, &storefront.cart);

        Ok(storefront)
    }

    /// Re-reads the persisted cart and re-renders.
    ///
    /// The silent-fallback rules of [`CartStore::load`] apply: absent or
    /// malformed state comes back as an empty cart.
    pub async fn reload(&mut self) -> AppResult<()> {
        self.cart = self.store.load().await?;
        render::refresh(&mut self.page, &self.cart);
        Ok(())
    }

    /// Adds one unit of the featured product.
    ///
    /// Merges into an existing line item or creates one, then persists,
    /// re-renders and raises the confirmation toast.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&mut self) -> AppResult<()> {
        self.cart.add(&self.product);
        debug!(items = self.cart.total_item_count(), "Product added");

        self.commit().await?;
        self.toasts.push(TOAST_ADDED);
        self.render_toasts();

        Ok(())
    }

    /// Removes a line item. Unknown ids are a silent no-op, but the
    /// persist-and-render pass still runs.
    #[instrument(skip(self))]
    pub async fn remove_item(&mut self, id: u32) -> AppResult<()> {
        self.cart.remove(id);
        self.commit().await
    }

    /// Applies a raw quantity-field value to a line item.
    ///
    /// ## Behavior
    /// - Non-numeric input is rejected and ignored; the cart stays as it
    ///   was and the page re-renders to snap the field back
    /// - Zero or negative removes the item
    /// - Over the per-item cap: rejected and ignored, like non-numeric
    #[instrument(skip(self, raw), fields(raw = %raw))]
    pub async fn set_quantity(&mut self, id: u32, raw: &str) -> AppResult<()> {
        let quantity = match validation::parse_quantity(raw) {
            Ok(q) => q,
            Err(e) => {
                warn!(error = %e, "Ignoring invalid quantity input");
                render::refresh(&mut self.page, &self.cart);
                return Ok(());
            }
        };

        if quantity <= 0 {
            debug!(id, quantity, "Non-positive quantity removes the item");
            self.cart.remove(id);
            return self.commit().await;
        }

        if let Err(e) = validation::validate_quantity(quantity) {
            warn!(error = %e, "Ignoring out-of-range quantity");
            render::refresh(&mut self.page, &self.cart);
            return Ok(());
        }

        self.cart.update_quantity(id, quantity);
        self.commit().await
    }

    /// Simulated checkout: raises an alert with the order summary.
    ///
    /// No order is placed and the cart is left intact, persisted state
    /// included.
    pub fn checkout(&mut self) {
        if self.cart.is_empty() {
            self.page.alert(EMPTY_CART_ALERT);
            return;
        }

        let breakdown = Breakdown::compute(&self.cart);
        let shipping = if breakdown.free_shipping {
            "Gratis".to_string()
        } else {
            breakdown.shipping.format_cop()
        };

        info!(total = %breakdown.total, "Checkout simulated");
        self.page.alert(&format!(
            "Resumen de tu compra:\n\
             \n\
             Subtotal: {subtotal}\n\
             IVA (19%): {tax}\n\
             Envío: {shipping}\n\
             Total: {total}\n\
             \n\
             Redirigiendo al checkout...\n\
             (Esta es una simulación)",
            subtotal = breakdown.subtotal.format_cop(),
            tax = breakdown.tax.format_cop(),
            shipping = shipping,
            total = breakdown.total.format_cop(),
        ));
    }

    /// Advances toast phases and re-renders the notification container.
    /// Call once per animation frame (or per loop iteration in the demo).
    pub fn tick(&mut self) {
        self.toasts.tick();
        self.render_toasts();
    }

    /// Current cart state (read-only).
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The page surface, for inspection in tests and the demo binary.
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Mutable page access (the demo binary drains alerts through this).
    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    /// Persist-then-render tail shared by every mutation.
    async fn commit(&mut self) -> AppResult<()> {
        self.store.save(&self.cart).await?;
        render::refresh(&mut self.page, &self.cart);
        Ok(())
    }

    fn render_toasts(&mut self) {
        self.page
            .set_markup(regions::NOTIFICATIONS, &notify::stack_markup(&self.toasts));
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::ManualClock;
    use crate::page::MemoryPage;
    use bloms_store::{Storage, StorageConfig};
    use std::time::Duration;

    async fn storefront() -> (ManualClock, Storefront<MemoryPage, ManualClock>) {
        let storage = Storage::new(StorageConfig::in_memory()).await.unwrap();
        let store = CartStore::new(storage);
        let clock = ManualClock::new();
        let storefront = Storefront::new(store, MemoryPage::storefront(), clock.clone())
            .await
            .unwrap();
        (clock, storefront)
    }

    #[tokio::test]
    async fn test_initial_render_is_empty_state() {
        let (_clock, sf) = storefront().await;

        assert!(!sf.page().is_visible(regions::CART_BADGE));
        let body = sf.page().content(regions::CART_BODY).unwrap();
        assert!(body.contains("Tu carrito está vacío"));
    }

    #[tokio::test]
    async fn test_add_persists_renders_and_toasts() {
        let (_clock, mut sf) = storefront().await;

        sf.add_to_cart().await.unwrap();
        sf.add_to_cart().await.unwrap();

        // Rendered
        assert_eq!(sf.page().content(regions::CART_BADGE), Some("2"));
        assert_eq!(sf.page().content(regions::CART_SUBTOTAL), Some("$16.000"));

        // Toasted, one per add
        let toasts = sf.page().content(regions::NOTIFICATIONS).unwrap();
        assert_eq!(toasts.matches(TOAST_ADDED).count(), 2);

        // Persisted
        let reloaded = sf.store.load().await.unwrap();
        assert_eq!(reloaded.total_item_count(), 2);
    }

    #[tokio::test]
    async fn test_toasts_expire_through_tick() {
        let (clock, mut sf) = storefront().await;
        sf.add_to_cart().await.unwrap();

        clock.advance(Duration::from_millis(2900));
        sf.tick();

        assert_eq!(sf.page().content(regions::NOTIFICATIONS), Some(""));
    }

    #[tokio::test]
    async fn test_reload_picks_up_persisted_state() {
        let (_clock, mut sf) = storefront().await;
        sf.add_to_cart().await.unwrap();

        // Persisted state changes underneath the controller
        sf.store.save(&Cart::new()).await.unwrap();

        sf.reload().await.unwrap();
        assert!(sf.cart().is_empty());
        let body = sf.page().content(regions::CART_BODY).unwrap();
        assert!(body.contains("Tu carrito está vacío"));
    }

    #[tokio::test]
    async fn test_remove_unknown_id_is_noop() {
        let (_clock, mut sf) = storefront().await;
        sf.add_to_cart().await.unwrap();

        sf.remove_item(999).await.unwrap();
        assert_eq!(sf.cart().total_item_count(), 1);

        sf.remove_item(sf.product.id).await.unwrap();
        assert!(sf.cart().is_empty());
        assert!(sf.store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_set_quantity_paths() {
        let (_clock, mut sf) = storefront().await;
        sf.add_to_cart().await.unwrap();
        let id = sf.product.id;

        // Valid input updates and persists
        sf.set_quantity(id, " 5 ").await.unwrap();
        assert_eq!(sf.cart().total_item_count(), 5);
        assert_eq!(sf.store.load().await.unwrap().total_item_count(), 5);

        // Non-numeric input is ignored
        sf.set_quantity(id, "muchos").await.unwrap();
        assert_eq!(sf.cart().total_item_count(), 5);

        // Over the cap is ignored
        sf.set_quantity(id, "1000").await.unwrap();
        assert_eq!(sf.cart().total_item_count(), 5);

        // Zero removes
        sf.set_quantity(id, "0").await.unwrap();
        assert!(sf.cart().is_empty());
    }

    #[tokio::test]
    async fn test_checkout_empty_cart() {
        let (_clock, mut sf) = storefront().await;
        sf.checkout();

        assert_eq!(sf.page_mut().take_alerts(), vec![EMPTY_CART_ALERT]);
    }

    #[tokio::test]
    async fn test_checkout_summary_leaves_cart_intact() {
        let (_clock, mut sf) = storefront().await;
        for _ in 0..3 {
            sf.add_to_cart().await.unwrap();
        }

        sf.checkout();

        let alerts = sf.page_mut().take_alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].contains("Subtotal: $24.000"));
        assert!(alerts[0].contains("IVA (19%): $4.560"));
        assert!(alerts[0].contains("Envío: $10.000"));
        assert!(alerts[0].contains("Total: $38.560"));
        assert!(alerts[0].contains("Redirigiendo al checkout..."));

        // Cart untouched, in memory and in storage
        assert_eq!(sf.cart().total_item_count(), 3);
        assert_eq!(sf.store.load().await.unwrap().total_item_count(), 3);
    }

    #[tokio::test]
    async fn test_checkout_free_shipping_label() {
        let (_clock, mut sf) = storefront().await;
        sf.add_to_cart().await.unwrap();
        sf.set_quantity(sf.product.id, "7").await.unwrap(); // $56.000

        sf.checkout();
        let alerts = sf.page_mut().take_alerts();
        assert!(alerts[0].contains("Envío: Gratis"));
    }
}
