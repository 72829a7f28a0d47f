pub mod cart_item;
pub mod confirm_dialog;
pub mod modal;
pub mod navbar;
