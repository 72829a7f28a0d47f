use crate::cart::{CartItem, ItemId};
use crate::error::{CartError, StoreCommand};
use crate::selection::{CartSelection, CartView, QuantityChange};
use crate::CartStore;

/// Cart page session binding local selection state to the upstream store.
///
/// Created when the cart page opens and dropped when it closes; nothing here
/// is persisted.
#[derive(Debug, Clone)]
pub struct CartSession<S> {
    store: S,
    selection: CartSelection,
}

impl<S: CartStore> CartSession<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self {
            store,
            selection: CartSelection::new(),
        }
    }

    /// Resume a session with existing local state.
    #[must_use]
    pub const fn from_parts(store: S, selection: CartSelection) -> Self {
        Self { store, selection }
    }

    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        self.store.items()
    }

    pub fn set_selected(&mut self, id: &ItemId, checked: bool) {
        self.selection.set_selected(id, checked);
    }

    /// Record a quantity edit and forward it to the store.
    ///
    /// Values below one are ignored without touching the store. The local
    /// override is kept even when the store rejects the update.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the new quantity.
    pub fn set_quantity(&mut self, id: &ItemId, new_qty: i32) -> Result<QuantityChange, CartError> {
        let change = self.selection.set_quantity(id, new_qty);
        if let QuantityChange::Applied(qty) = change {
            self.store
                .update_quantity(id, qty)
                .map_err(|e| CartError::store(StoreCommand::UpdateQuantity, e))?;
        }
        Ok(change)
    }

    #[must_use]
    pub fn total(&self) -> i64 {
        self.selection.total(&self.store.items())
    }

    #[must_use]
    pub fn total_quantity(&self) -> i64 {
        self.selection.total_quantity(&self.store.items())
    }

    #[must_use]
    pub fn any_selected(&self) -> bool {
        self.selection.any_selected()
    }

    #[must_use]
    pub fn view(&self) -> CartView {
        self.selection.view(&self.store.items())
    }

    #[must_use]
    pub const fn selection(&self) -> &CartSelection {
        &self.selection
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consume the session, returning the store and local state.
    #[must_use]
    pub fn into_parts(self) -> (S, CartSelection) {
        (self.store, self.selection)
    }
}
