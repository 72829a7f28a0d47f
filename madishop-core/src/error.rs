use crate::cart::ItemId;
use std::fmt;
use thiserror::Error;

/// Command sent to the upstream cart store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreCommand {
    UpdateQuantity,
    RemoveItem,
    Checkout,
}

impl fmt::Display for StoreCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::UpdateQuantity => "update_quantity",
            Self::RemoveItem => "remove_item",
            Self::Checkout => "checkout",
        };
        f.write_str(label)
    }
}

/// A confirmation-gated action; at most one flow per action may be pending.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FlowAction {
    Checkout,
    Remove(ItemId),
}

impl fmt::Display for FlowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Checkout => f.write_str("checkout"),
            Self::Remove(id) => write!(f, "removal of item {id}"),
        }
    }
}

#[derive(Debug, Error)]
pub enum CartError {
    #[error("checkout requires at least one selected item")]
    NothingSelected,
    #[error("{action} is already awaiting confirmation")]
    InFlight { action: FlowAction },
    #[error("cart store rejected {command}: {source}")]
    Store {
        command: StoreCommand,
        #[source]
        source: anyhow::Error,
    },
}

impl CartError {
    pub(crate) fn store<E>(command: StoreCommand, err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        log::warn!("cart store rejected {command}: {err}");
        Self::Store {
            command,
            source: anyhow::Error::new(err),
        }
    }
}
