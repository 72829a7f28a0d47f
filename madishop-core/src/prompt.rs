//! Fixed prompts shown by the confirmation surface
use serde::{Deserialize, Serialize};

/// Visual tone of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptKind {
    Warning,
    Success,
    Info,
    Error,
}

impl PromptKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Info => "info",
            Self::Error => "error",
        }
    }
}

/// Which fixed prompt is being shown; front ends may translate by key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptId {
    ConfirmCheckout,
    CheckoutSucceeded,
    ConfirmRemove,
    RemoveSucceeded,
}

impl PromptId {
    /// Translation key prefix, e.g. `prompts.confirm_checkout`.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ConfirmCheckout => "prompts.confirm_checkout",
            Self::CheckoutSucceeded => "prompts.checkout_succeeded",
            Self::ConfirmRemove => "prompts.confirm_remove",
            Self::RemoveSucceeded => "prompts.remove_succeeded",
        }
    }
}

/// Title, message and tone handed to a `ConfirmSurface`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    pub id: PromptId,
    pub title: String,
    pub message: String,
    pub kind: PromptKind,
}

impl Prompt {
    fn fixed(id: PromptId, title: &str, message: &str, kind: PromptKind) -> Self {
        Self {
            id,
            title: title.to_string(),
            message: message.to_string(),
            kind,
        }
    }

    #[must_use]
    pub fn confirm_checkout() -> Self {
        Self::fixed(
            PromptId::ConfirmCheckout,
            "Konfirmasi Checkout",
            "Apakah Anda yakin ingin melakukan checkout?",
            PromptKind::Warning,
        )
    }

    #[must_use]
    pub fn checkout_succeeded() -> Self {
        Self::fixed(
            PromptId::CheckoutSucceeded,
            "Berhasil",
            "Checkout berhasil!",
            PromptKind::Success,
        )
    }

    #[must_use]
    pub fn confirm_remove() -> Self {
        Self::fixed(
            PromptId::ConfirmRemove,
            "Konfirmasi Hapus",
            "Apakah Anda yakin ingin menghapus item ini?",
            PromptKind::Warning,
        )
    }

    #[must_use]
    pub fn remove_succeeded() -> Self {
        Self::fixed(
            PromptId::RemoveSucceeded,
            "Berhasil",
            "Item berhasil dihapus!",
            PromptKind::Success,
        )
    }
}
