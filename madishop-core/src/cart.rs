//! Cart items as supplied by the upstream cart store
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a cart item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i32> for ItemId {
    fn from(value: i32) -> Self {
        Self(value.to_string())
    }
}

/// A single line in the upstream cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ItemId,
    #[serde(default)]
    pub name: String,
    /// Unit price in cents to avoid floating-point issues
    pub price_cents: i64,
    /// Base quantity as last committed to the cart
    pub quantity: i32,
}

impl CartItem {
    #[must_use]
    pub fn new(id: impl Into<ItemId>, price_cents: i64, quantity: i32) -> Self {
        let id = id.into();
        Self {
            name: id.to_string(),
            id,
            price_cents,
            quantity,
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Find an item by id in an ordered item list.
#[must_use]
pub fn find_item<'a>(items: &'a [CartItem], id: &ItemId) -> Option<&'a CartItem> {
    items.iter().find(|item| &item.id == id)
}
