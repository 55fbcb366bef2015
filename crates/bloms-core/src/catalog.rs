//! # Product Catalog
//!
//! The storefront sells exactly one product, defined here. The catalog is
//! immutable for the session - there is no server-side pricing authority.

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// A product available for sale.
///
/// Prices are whole pesos (minor-unit-free `i64`), matching the persisted
/// cart format; use [`Product::price`] for arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: u32,

    /// Display name shown on the page and in the cart.
    pub name: String,

    /// Price in whole pesos.
    pub price: i64,

    /// Image reference rendered next to the line item.
    pub image: String,

    /// Marketing description.
    pub description: String,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_pesos(self.price)
    }
}

/// The single purchasable product of the storefront.
pub fn featured() -> Product {
    Product {
        id: 1,
        name: "Berry Bloms".to_string(),
        price: 8000,
        image: "./img/producto.png".to_string(),
        description: "Arándanos rojos deshidratados cubiertos con yogur griego \
                      y rellenos de una deliciosa crema de frutos rojos."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_product() {
        let product = featured();
        assert_eq!(product.id, 1);
        assert_eq!(product.price().format_cop(), "$8.000");
    }
}
