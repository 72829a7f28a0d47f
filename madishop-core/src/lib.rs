//! MadiShop Core
//!
//! Platform-agnostic cart logic for the MadiShop storefront: per-item quantity
//! edits, checkbox selection, derived totals and confirmation-gated checkout.
//! This crate has no UI or browser dependencies; front ends plug in through the
//! collaborator traits below.

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod memory;
pub mod nav;
pub mod prompt;
pub mod selection;
pub mod session;

use async_trait::async_trait;
use std::rc::Rc;

// Re-export commonly used types
pub use cart::{CartItem, ItemId, find_item};
pub use catalog::{Catalog, Product, add_product};
pub use checkout::{CheckoutOrchestrator, CheckoutOutcome, FlowState, RemoveOutcome};
pub use config::{ConfigError, DEFAULT_MAX_CHECKOUT_QTY, ShopConfig};
pub use error::{CartError, FlowAction, StoreCommand};
pub use memory::{MemoryCartStore, MemoryStoreError};
pub use nav::{NavCollapse, NavEntry, NavTarget, logout, menu_entries};
pub use prompt::{Prompt, PromptId, PromptKind};
pub use selection::{CartLine, CartSelection, CartView, MIN_QUANTITY, QuantityChange};
pub use session::CartSession;

/// Upstream cart store holding the committed item list.
/// Platform-specific implementations should provide this
pub trait CartStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Current items, in display order.
    fn items(&self) -> Vec<CartItem>;

    /// Persist a new quantity for an item.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the update.
    fn update_quantity(&self, id: &ItemId, quantity: i32) -> Result<(), Self::Error>;

    /// Drop an item from the cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the removal.
    fn remove_item(&self, id: &ItemId) -> Result<(), Self::Error>;

    /// Commit an order made of the given items.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the order.
    fn checkout(&self, items: &[CartItem]) -> Result<(), Self::Error>;
}

/// The user's answer to a confirmation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Confirmed,
    Cancelled,
}

impl Decision {
    #[must_use]
    pub const fn from_confirmed(confirmed: bool) -> Self {
        if confirmed {
            Self::Confirmed
        } else {
            Self::Cancelled
        }
    }
}

/// Dialog layer that asks the user yes/no questions and shows results.
#[async_trait(?Send)]
pub trait ConfirmSurface {
    /// Ask the user to confirm; resolves once they answer.
    async fn confirm(&self, prompt: &Prompt) -> Decision;

    /// Show a terminal status message; resolves once it is dismissed.
    async fn notify(&self, prompt: &Prompt);
}

/// Fire-and-forget routing intents.
pub trait Navigator {
    fn navigate(&self, target: NavTarget);
}

/// Read-only auth state plus the logout action.
pub trait AuthStore {
    fn is_authenticated(&self) -> bool;
    fn logout(&self);
}

impl<T: CartStore + ?Sized> CartStore for Rc<T> {
    type Error = T::Error;

    fn items(&self) -> Vec<CartItem> {
        (**self).items()
    }

    fn update_quantity(&self, id: &ItemId, quantity: i32) -> Result<(), Self::Error> {
        (**self).update_quantity(id, quantity)
    }

    fn remove_item(&self, id: &ItemId) -> Result<(), Self::Error> {
        (**self).remove_item(id)
    }

    fn checkout(&self, items: &[CartItem]) -> Result<(), Self::Error> {
        (**self).checkout(items)
    }
}

#[async_trait(?Send)]
impl<T: ConfirmSurface + ?Sized> ConfirmSurface for Rc<T> {
    async fn confirm(&self, prompt: &Prompt) -> Decision {
        (**self).confirm(prompt).await
    }

    async fn notify(&self, prompt: &Prompt) {
        (**self).notify(prompt).await;
    }
}

impl<T: Navigator + ?Sized> Navigator for Rc<T> {
    fn navigate(&self, target: NavTarget) {
        (**self).navigate(target);
    }
}

impl<T: AuthStore + ?Sized> AuthStore for Rc<T> {
    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }

    fn logout(&self) {
        (**self).logout();
    }
}
