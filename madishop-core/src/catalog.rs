//! Product catalog shown on the home page
use crate::cart::{CartItem, ItemId};
use crate::config::ConfigError;
use serde::{Deserialize, Serialize};

/// A product that can be put in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Product {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub desc: String,
    /// Price in cents to avoid floating-point issues
    pub price_cents: i64,
}

impl Product {
    /// Cart line for this product with the given quantity.
    #[must_use]
    pub fn to_cart_item(&self, quantity: i32) -> CartItem {
        CartItem {
            id: self.id.clone(),
            name: self.name.clone(),
            price_cents: self.price_cents,
            quantity,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Catalog {
    pub products: Vec<Product>,
}

impl Catalog {
    /// Parse a catalog from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn find_product(&self, id: &ItemId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }
}

/// Add one unit of a product to an item list, merging with an existing line.
/// Returns the line's new quantity.
pub fn add_product(items: &mut Vec<CartItem>, product: &Product) -> i32 {
    if let Some(line) = items.iter_mut().find(|item| item.id == product.id) {
        line.quantity = line.quantity.saturating_add(1);
        line.quantity
    } else {
        items.push(product.to_cart_item(1));
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_json(
            r#"{"products":[
                {"id":"1","name":"Kopi","price_cents":1500},
                {"id":"2","name":"Teh","desc":"Teh manis","price_cents":900}
            ]}"#,
        )
        .unwrap()
    }

    #[test]
    fn catalog_parses_and_finds_products() {
        let catalog = catalog();
        assert_eq!(catalog.products.len(), 2);
        let tea = catalog.find_product(&ItemId::from(2)).unwrap();
        assert_eq!(tea.desc, "Teh manis");
        assert!(catalog.find_product(&ItemId::from(9)).is_none());
    }

    #[test]
    fn add_product_merges_existing_lines() {
        let catalog = catalog();
        let coffee = &catalog.products[0];
        let mut items = Vec::new();
        assert_eq!(add_product(&mut items, coffee), 1);
        assert_eq!(add_product(&mut items, coffee), 2);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Kopi");
        assert_eq!(items[0].price_cents, 1500);
    }

    #[test]
    fn add_product_stops_at_the_quantity_limit() {
        let catalog = catalog();
        let coffee = &catalog.products[0];
        let mut items = vec![coffee.to_cart_item(i32::MAX)];
        assert_eq!(add_product(&mut items, coffee), i32::MAX);
        assert_eq!(items[0].quantity, i32::MAX);
    }
}
