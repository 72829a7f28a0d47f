// Accessibility helpers

use wasm_bindgen::JsCast;

fn element_by_id(id: &str) -> Option<web_sys::HtmlElement> {
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id(id))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
}

/// Update the live region status for screen readers
///
/// Updates the text content of the #shop-status element if present.
pub fn set_status(msg: &str) {
    if let Some(node) = element_by_id("shop-status") {
        node.set_text_content(Some(msg));
    }
}

/// Move keyboard focus back to the element that opened a dialog.
pub fn restore_focus(id: &str) {
    if let Some(el) = element_by_id(id) {
        let _ = el.focus();
    }
}
