//! Per-item quantity edits and checkbox selection for a cart page session
use crate::cart::{CartItem, ItemId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Smallest quantity an edit may set.
pub const MIN_QUANTITY: i32 = 1;

/// Result of a quantity edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The override was recorded with this value.
    Applied(i32),
    /// The value was below [`MIN_QUANTITY`]; nothing changed.
    Ignored,
}

impl QuantityChange {
    #[must_use]
    pub const fn is_applied(self) -> bool {
        matches!(self, Self::Applied(_))
    }
}

/// Session-local overrides and selection flags, independent of the item list.
///
/// Both maps start empty. Missing override means "use the item's base
/// quantity"; missing selection flag means unselected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartSelection {
    quantities: HashMap<ItemId, i32>,
    checked: HashMap<ItemId, bool>,
}

/// Derived view of a single item for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub item: CartItem,
    pub quantity: i32,
    pub selected: bool,
    pub line_total_cents: i64,
}

/// What the cart page should show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartView {
    /// No items upstream; totals are not computed.
    Empty,
    Items {
        lines: Vec<CartLine>,
        total_cents: i64,
        total_quantity: i64,
        can_checkout: bool,
    },
}

impl CartSelection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the checkbox state for an item. Unknown ids are kept as-is.
    pub fn set_selected(&mut self, id: &ItemId, checked: bool) {
        self.checked.insert(id.clone(), checked);
    }

    /// Record a quantity override. Values below [`MIN_QUANTITY`] are dropped.
    pub fn set_quantity(&mut self, id: &ItemId, new_qty: i32) -> QuantityChange {
        if new_qty < MIN_QUANTITY {
            return QuantityChange::Ignored;
        }
        self.quantities.insert(id.clone(), new_qty);
        QuantityChange::Applied(new_qty)
    }

    #[must_use]
    pub fn is_selected(&self, id: &ItemId) -> bool {
        self.checked.get(id).copied().unwrap_or(false)
    }

    /// True when at least one flag is set; gates the checkout action.
    #[must_use]
    pub fn any_selected(&self) -> bool {
        self.checked.values().any(|checked| *checked)
    }

    #[must_use]
    pub fn quantity_override(&self, id: &ItemId) -> Option<i32> {
        self.quantities.get(id).copied()
    }

    /// Override if present, otherwise the item's base quantity.
    #[must_use]
    pub fn effective_quantity(&self, item: &CartItem) -> i32 {
        self.quantity_override(&item.id).unwrap_or(item.quantity)
    }

    fn selected_items<'a>(
        &'a self,
        items: &'a [CartItem],
    ) -> impl Iterator<Item = (&'a CartItem, i32)> + 'a {
        items
            .iter()
            .filter(|item| self.is_selected(&item.id))
            .map(|item| (item, self.effective_quantity(item)))
    }

    /// Sum of `price * effective quantity` over selected items, in cents.
    #[must_use]
    pub fn total(&self, items: &[CartItem]) -> i64 {
        self.selected_items(items)
            .fold(0_i64, |acc, (item, qty)| {
                acc.saturating_add(line_total(item, qty))
            })
    }

    /// Sum of effective quantities over selected items.
    #[must_use]
    pub fn total_quantity(&self, items: &[CartItem]) -> i64 {
        self.selected_items(items)
            .fold(0_i64, |acc, (_, qty)| acc.saturating_add(i64::from(qty)))
    }

    /// Selected items whose effective quantity is within `max_qty`.
    ///
    /// Items over the ceiling are dropped without any signal. The returned
    /// items carry their effective quantity.
    #[must_use]
    pub fn checkout_set(&self, items: &[CartItem], max_qty: i32) -> Vec<CartItem> {
        self.selected_items(items)
            .filter(|(_, qty)| *qty <= max_qty)
            .map(|(item, qty)| CartItem {
                quantity: qty,
                ..item.clone()
            })
            .collect()
    }

    #[must_use]
    pub fn lines(&self, items: &[CartItem]) -> Vec<CartLine> {
        items
            .iter()
            .map(|item| {
                let quantity = self.effective_quantity(item);
                CartLine {
                    item: item.clone(),
                    quantity,
                    selected: self.is_selected(&item.id),
                    line_total_cents: line_total(item, quantity),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn view(&self, items: &[CartItem]) -> CartView {
        if items.is_empty() {
            return CartView::Empty;
        }
        CartView::Items {
            lines: self.lines(items),
            total_cents: self.total(items),
            total_quantity: self.total_quantity(items),
            can_checkout: self.any_selected(),
        }
    }
}

/// `price * quantity`, clamped at the `i64` bounds.
fn line_total(item: &CartItem, quantity: i32) -> i64 {
    item.price_cents.saturating_mul(i64::from(quantity))
}
