//! # Cart Renderer
//!
//! Turns cart state and pricing into region content. Stateless: every
//! function reads the model and writes the page, nothing else.
//!
//! ## Render Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  refresh(page, cart)                                                    │
//! │    ├── render_badge      count > 0 ? show count : hide badge           │
//! │    ├── render_items      line items, or the empty-state placeholder    │
//! │    │                     (also shows/hides the breakdown panel)        │
//! │    └── render_breakdown  subtotal / IVA / envío / total               │
//! │                          "Gratis" + struck-through price at threshold  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt::Write as _;

use bloms_core::{Breakdown, Cart, SHIPPING_FLAT};

use crate::page::{regions, Page};

/// Empty-state placeholder shown instead of line items.
const EMPTY_CART_MARKUP: &str = "<div class=\"empty-cart\">\
     <i class=\"bi bi-cart-x\"></i>\
     <p>Tu carrito está vacío</p>\
     </div>";

/// Re-renders everything the cart state drives.
pub fn refresh<P: Page + ?Sized>(page: &mut P, cart: &Cart) {
    render_badge(page, cart);
    render_items(page, cart);
    render_breakdown(page, &Breakdown::compute(cart));
}

/// Item-count badge: exact count when non-zero, hidden otherwise.
pub fn render_badge<P: Page + ?Sized>(page: &mut P, cart: &Cart) {
    let count = cart.total_item_count();
    if count > 0 {
        page.set_text(regions::CART_BADGE, &count.to_string());
        page.show(regions::CART_BADGE);
    } else {
        page.set_text(regions::CART_BADGE, "");
        page.hide(regions::CART_BADGE);
    }
}

/// Line-item list, or the empty-state placeholder.
///
/// Also toggles the breakdown panel: it is hidden entirely (not zeroed)
/// while the cart is empty.
pub fn render_items<P: Page + ?Sized>(page: &mut P, cart: &Cart) {
    if cart.is_empty() {
        page.set_markup(regions::CART_BODY, EMPTY_CART_MARKUP);
        page.hide(regions::CART_BREAKDOWN);
        return;
    }

    page.show(regions::CART_BREAKDOWN);

    let mut markup = String::new();
    for item in cart.items() {
        // write! into a String cannot fail
        let _ = write!(
            markup,
            "<div class=\"cart-item\" data-id=\"{id}\">\
             <button class=\"cart-item-remove\" title=\"Eliminar\">×</button>\
             <img src=\"{image}\" alt=\"{name}\">\
             <h4 class=\"cart-item-name\">{name}</h4>\
             <p class=\"cart-item-price\">{price}</p>\
             <label>Cantidad: \
             <input type=\"number\" class=\"cart-item-quantity-input\" \
             value=\"{quantity}\" min=\"1\"></label>\
             </div>",
            id = item.id,
            image = item.image,
            name = item.name,
            price = item.unit_price().format_cop(),
            quantity = item.quantity,
        );
    }

    page.set_markup(regions::CART_BODY, &markup);
}

/// Breakdown panel fields: subtotal, IVA, shipping, total.
pub fn render_breakdown<P: Page + ?Sized>(page: &mut P, breakdown: &Breakdown) {
    page.set_text(regions::CART_SUBTOTAL, &breakdown.subtotal.format_cop());
    page.set_text(regions::CART_IVA, &breakdown.tax.format_cop());

    if breakdown.free_shipping {
        // Struck-through flat price next to the "Gratis" label
        page.set_markup(
            regions::CART_SHIPPING,
            &format!(
                "<span class=\"shipping-original\">{}</span> \
                 <span class=\"shipping-free\">Gratis</span>",
                SHIPPING_FLAT.format_cop()
            ),
        );
    } else {
        page.set_text(regions::CART_SHIPPING, &breakdown.shipping.format_cop());
    }

    page.set_text(regions::CART_TOTAL, &breakdown.total.format_cop());
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;
    use bloms_core::catalog;

    fn cart_with_quantity(quantity: i64) -> Cart {
        let product = catalog::featured();
        let mut cart = Cart::new();
        cart.add(&product);
        cart.update_quantity(product.id, quantity);
        cart
    }

    #[test]
    fn test_badge_hidden_when_empty() {
        let mut page = MemoryPage::storefront();
        render_badge(&mut page, &Cart::new());

        assert!(!page.is_visible(regions::CART_BADGE));
        assert_eq!(page.content(regions::CART_BADGE), Some(""));
    }

    #[test]
    fn test_badge_shows_exact_count() {
        let mut page = MemoryPage::storefront();
        render_badge(&mut page, &cart_with_quantity(3));

        assert!(page.is_visible(regions::CART_BADGE));
        assert_eq!(page.content(regions::CART_BADGE), Some("3"));
    }

    #[test]
    fn test_empty_cart_placeholder_and_hidden_breakdown() {
        let mut page = MemoryPage::storefront();
        render_items(&mut page, &Cart::new());

        let body = page.content(regions::CART_BODY).unwrap();
        assert!(body.contains("Tu carrito está vacío"));
        assert!(!page.is_visible(regions::CART_BREAKDOWN));
    }

    #[test]
    fn test_items_markup() {
        let mut page = MemoryPage::storefront();
        render_items(&mut page, &cart_with_quantity(3));

        let body = page.content(regions::CART_BODY).unwrap();
        assert!(body.contains("Berry Bloms"));
        assert!(body.contains("$8.000"));
        assert!(body.contains("value=\"3\""));
        assert!(page.is_visible(regions::CART_BREAKDOWN));
    }

    #[test]
    fn test_breakdown_fields() {
        let mut page = MemoryPage::storefront();
        refresh(&mut page, &cart_with_quantity(3));

        assert_eq!(page.content(regions::CART_SUBTOTAL), Some("$24.000"));
        assert_eq!(page.content(regions::CART_IVA), Some("$4.560"));
        assert_eq!(page.content(regions::CART_SHIPPING), Some("$10.000"));
        assert_eq!(page.content(regions::CART_TOTAL), Some("$38.560"));
    }

    #[test]
    fn test_free_shipping_label() {
        // 7 × $8.000 = $56.000, over the threshold
        let mut page = MemoryPage::storefront();
        refresh(&mut page, &cart_with_quantity(7));

        let shipping = page.content(regions::CART_SHIPPING).unwrap();
        assert!(shipping.contains("Gratis"));
        assert!(shipping.contains("$10.000")); // struck-through original
    }

    #[test]
    fn test_render_into_page_without_regions_is_noop() {
        let mut page = MemoryPage::new();
        refresh(&mut page, &cart_with_quantity(2));
        // Nothing to assert beyond "did not panic": no region exists
        assert_eq!(page.content(regions::CART_BODY), None);
    }
}
