//! In-memory cart store for tests, tooling and server-side rendering
use crate::CartStore;
use crate::cart::{CartItem, ItemId};
use crate::error::StoreCommand;
use std::cell::{Cell, RefCell};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MemoryStoreError {
    #[error("item {0} is not in the cart")]
    UnknownItem(ItemId),
    #[error("{0} is unavailable")]
    Unavailable(StoreCommand),
}

/// Single-threaded cart store that keeps items and committed orders in memory.
#[derive(Debug, Default)]
pub struct MemoryCartStore {
    items: RefCell<Vec<CartItem>>,
    orders: RefCell<Vec<Vec<CartItem>>>,
    updates: Cell<usize>,
    failing: Cell<Option<StoreCommand>>,
}

impl MemoryCartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_items(items: Vec<CartItem>) -> Self {
        Self {
            items: RefCell::new(items),
            ..Self::default()
        }
    }

    /// Make every subsequent `command` fail until [`Self::recover`] is called.
    pub fn fail_on(&self, command: StoreCommand) {
        self.failing.set(Some(command));
    }

    pub fn recover(&self) {
        self.failing.set(None);
    }

    /// Orders committed so far, oldest first.
    #[must_use]
    pub fn orders(&self) -> Vec<Vec<CartItem>> {
        self.orders.borrow().clone()
    }

    /// Number of accepted quantity updates.
    #[must_use]
    pub fn update_count(&self) -> usize {
        self.updates.get()
    }

    pub fn push_item(&self, item: CartItem) {
        self.items.borrow_mut().push(item);
    }

    fn check(&self, command: StoreCommand) -> Result<(), MemoryStoreError> {
        if self.failing.get() == Some(command) {
            return Err(MemoryStoreError::Unavailable(command));
        }
        Ok(())
    }
}

impl CartStore for MemoryCartStore {
    type Error = MemoryStoreError;

    fn items(&self) -> Vec<CartItem> {
        self.items.borrow().clone()
    }

    fn update_quantity(&self, id: &ItemId, quantity: i32) -> Result<(), Self::Error> {
        self.check(StoreCommand::UpdateQuantity)?;
        let mut items = self.items.borrow_mut();
        let line = items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| MemoryStoreError::UnknownItem(id.clone()))?;
        line.quantity = quantity;
        self.updates.set(self.updates.get() + 1);
        Ok(())
    }

    fn remove_item(&self, id: &ItemId) -> Result<(), Self::Error> {
        self.check(StoreCommand::RemoveItem)?;
        self.items.borrow_mut().retain(|item| &item.id != id);
        Ok(())
    }

    /// Records the order and drops the ordered items from the cart.
    fn checkout(&self, items: &[CartItem]) -> Result<(), Self::Error> {
        self.check(StoreCommand::Checkout)?;
        self.items
            .borrow_mut()
            .retain(|item| !items.iter().any(|ordered| ordered.id == item.id));
        self.orders.borrow_mut().push(items.to_vec());
        Ok(())
    }
}
