//! Navigation intents and the auth-aware menu model
use crate::{AuthStore, Navigator};
use serde::{Deserialize, Serialize};

/// Destinations the core can ask the router to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavTarget {
    Home,
    Cart,
    Login,
}

impl NavTarget {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Cart => "/cart",
            Self::Login => "/login",
        }
    }
}

/// One entry in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEntry {
    Home,
    /// Cart link; the badge is shown only for a non-empty cart.
    Cart { badge: Option<usize> },
    Logout,
    Login,
}

impl NavEntry {
    /// Route opened by the entry, if it is a link.
    #[must_use]
    pub const fn target(self) -> Option<NavTarget> {
        match self {
            Self::Home => Some(NavTarget::Home),
            Self::Cart { .. } => Some(NavTarget::Cart),
            Self::Login => Some(NavTarget::Login),
            Self::Logout => None,
        }
    }
}

/// Menu entries for the current auth state and cart size.
#[must_use]
pub fn menu_entries(authenticated: bool, cart_len: usize) -> Vec<NavEntry> {
    let mut entries = vec![NavEntry::Home];
    if authenticated {
        entries.push(NavEntry::Cart {
            badge: (cart_len > 0).then_some(cart_len),
        });
        entries.push(NavEntry::Logout);
    } else {
        entries.push(NavEntry::Login);
    }
    entries
}

/// Collapsed/expanded state of the mobile menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavCollapse {
    collapsed: bool,
}

impl Default for NavCollapse {
    fn default() -> Self {
        Self { collapsed: true }
    }
}

impl NavCollapse {
    #[must_use]
    pub const fn is_collapsed(self) -> bool {
        self.collapsed
    }

    pub const fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
    }

    pub const fn collapse(&mut self) {
        self.collapsed = true;
    }

    /// Collapse an expanded menu when the click landed outside the nav bar.
    /// Returns whether the state changed.
    pub const fn on_document_click(&mut self, inside_nav: bool) -> bool {
        if inside_nav || self.collapsed {
            return false;
        }
        self.collapsed = true;
        true
    }
}

/// Log the user out, close the menu and send them to the login page.
pub fn logout<A, N>(auth: &A, navigator: &N, collapse: &mut NavCollapse)
where
    A: AuthStore + ?Sized,
    N: Navigator + ?Sized,
{
    auth.logout();
    collapse.collapse();
    log::debug!("logged out, navigating to {}", NavTarget::Login.path());
    navigator.navigate(NavTarget::Login);
}
