//! Browser-side implementations of the madishop-core collaborator traits
//!
//! The cart and the auth token live in `localStorage` on wasm; native builds
//! (tests, SSR) keep everything in memory.

use crate::dialog::DialogHandle;
use std::cell::RefCell;
use std::rc::Rc;
use yew::Callback;

// Re-export all types from madishop-core
pub use madishop_core::*;

#[cfg(target_arch = "wasm32")]
const CART_KEY: &str = "madishop.cart";
const TOKEN_KEY: &str = "token";

#[derive(Debug, thiserror::Error)]
pub enum WebStoreError {
    #[error("item {0} is not in the cart")]
    UnknownItem(ItemId),
    #[error("Storage error: {0}")]
    Storage(String),
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("invalid shop config: {0}")]
    Config(#[source] ConfigError),
    #[error("invalid catalog: {0}")]
    Catalog(#[source] ConfigError),
}

/// Load the embedded storefront settings.
///
/// # Errors
/// Returns an error if the embedded JSON does not parse.
pub fn load_shop_config() -> Result<ShopConfig, CatalogLoadError> {
    let json = include_str!("../static/assets/data/shop.json");
    ShopConfig::from_json(json).map_err(CatalogLoadError::Config)
}

/// Load the embedded product catalog.
///
/// # Errors
/// Returns an error if the embedded JSON does not parse.
pub fn load_catalog() -> Result<Catalog, CatalogLoadError> {
    let json = include_str!("../static/assets/data/catalog.json");
    Catalog::from_json(json).map_err(CatalogLoadError::Catalog)
}

/// Cart store persisted to `localStorage`.
///
/// Listeners registered with [`WebCartStore::subscribe`] fire after every
/// successful mutation so views can re-read the items.
#[derive(Default)]
pub struct WebCartStore {
    items: RefCell<Vec<CartItem>>,
    persist: bool,
    listeners: RefCell<Vec<Callback<()>>>,
}

impl WebCartStore {
    /// Restore the cart saved by a previous visit.
    #[must_use]
    pub fn load() -> Self {
        Self {
            items: RefCell::new(read_saved_cart()),
            persist: true,
            listeners: RefCell::default(),
        }
    }

    /// A store that never touches `localStorage`.
    #[must_use]
    pub fn in_memory(items: Vec<CartItem>) -> Self {
        Self {
            items: RefCell::new(items),
            persist: false,
            listeners: RefCell::default(),
        }
    }

    pub fn subscribe(&self, listener: Callback<()>) {
        self.listeners.borrow_mut().push(listener);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }

    /// Add one unit of a product. Returns the line's new quantity.
    ///
    /// # Errors
    /// Returns an error if the cart cannot be saved.
    pub fn add_product(&self, product: &Product) -> Result<i32, WebStoreError> {
        let qty = add_product(&mut self.items.borrow_mut(), product);
        self.commit()?;
        Ok(qty)
    }

    fn commit(&self) -> Result<(), WebStoreError> {
        if self.persist {
            write_saved_cart(&self.items.borrow())?;
        }
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener.emit(());
        }
        Ok(())
    }
}

impl CartStore for WebCartStore {
    type Error = WebStoreError;

    fn items(&self) -> Vec<CartItem> {
        self.items.borrow().clone()
    }

    fn update_quantity(&self, id: &ItemId, quantity: i32) -> Result<(), Self::Error> {
        {
            let mut items = self.items.borrow_mut();
            let line = items
                .iter_mut()
                .find(|item| &item.id == id)
                .ok_or_else(|| WebStoreError::UnknownItem(id.clone()))?;
            line.quantity = quantity;
        }
        self.commit()
    }

    fn remove_item(&self, id: &ItemId) -> Result<(), Self::Error> {
        {
            let mut items = self.items.borrow_mut();
            let before = items.len();
            items.retain(|item| &item.id != id);
            if items.len() == before {
                return Err(WebStoreError::UnknownItem(id.clone()));
            }
        }
        self.commit()
    }

    fn checkout(&self, order: &[CartItem]) -> Result<(), Self::Error> {
        log::info!("order placed with {} line(s)", order.len());
        self.items
            .borrow_mut()
            .retain(|item| order.iter().all(|ordered| ordered.id != item.id));
        self.commit()
    }
}

#[cfg(target_arch = "wasm32")]
fn read_saved_cart() -> Vec<CartItem> {
    use gloo::storage::{LocalStorage, Storage};
    LocalStorage::get(CART_KEY).unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
const fn read_saved_cart() -> Vec<CartItem> {
    Vec::new()
}

#[cfg(target_arch = "wasm32")]
fn write_saved_cart(items: &[CartItem]) -> Result<(), WebStoreError> {
    use gloo::storage::{LocalStorage, Storage};
    LocalStorage::set(CART_KEY, items).map_err(|e| WebStoreError::Storage(format!("{e:?}")))
}

#[cfg(not(target_arch = "wasm32"))]
#[allow(clippy::unnecessary_wraps)]
const fn write_saved_cart(_items: &[CartItem]) -> Result<(), WebStoreError> {
    Ok(())
}

/// Auth state backed by the `token` key in `localStorage`.
#[derive(Default)]
pub struct WebAuthStore {
    token: RefCell<Option<String>>,
}

impl WebAuthStore {
    #[must_use]
    pub fn load() -> Self {
        #[cfg(target_arch = "wasm32")]
        let token = {
            use gloo::storage::{LocalStorage, Storage};
            LocalStorage::get::<String>(TOKEN_KEY).ok()
        };
        #[cfg(not(target_arch = "wasm32"))]
        let token = None;
        Self {
            token: RefCell::new(token),
        }
    }

    pub fn login(&self, token: impl Into<String>) {
        let token = token.into();
        #[cfg(target_arch = "wasm32")]
        {
            use gloo::storage::{LocalStorage, Storage};
            if let Err(e) = LocalStorage::set(TOKEN_KEY, &token) {
                log::warn!("could not persist token: {e}");
            }
        }
        self.token.replace(Some(token));
    }
}

impl AuthStore for WebAuthStore {
    fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    fn logout(&self) {
        #[cfg(target_arch = "wasm32")]
        {
            use gloo::storage::{LocalStorage, Storage};
            LocalStorage::delete(TOKEN_KEY);
        }
        log::debug!("cleared {TOKEN_KEY}");
        self.token.replace(None);
    }
}

/// Routes navigation intents through yew-router's history.
#[derive(Clone, Default)]
pub struct RouterNavigator(Option<yew_router::navigator::Navigator>);

impl RouterNavigator {
    #[must_use]
    pub const fn new(inner: Option<yew_router::navigator::Navigator>) -> Self {
        Self(inner)
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, target: NavTarget) {
        match &self.0 {
            Some(nav) => nav.push(&crate::router::Route::from(target)),
            None => log::warn!("no router available for {}", target.path()),
        }
    }
}

/// Checkout flows driven by the dialog component and the browser router.
pub type ShopOrchestrator = CheckoutOrchestrator<Rc<DialogHandle>, RouterNavigator>;
