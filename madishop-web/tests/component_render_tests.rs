use futures::executor::block_on;
use madishop_web::components::confirm_dialog::{self, ConfirmDialog};
use madishop_web::components::modal::{self, Modal};
use madishop_web::components::navbar::{self, Navbar};
use madishop_web::dialog::{ActiveDialog, DialogMode};
use madishop_web::shop::{Prompt, WebAuthStore};
use std::rc::Rc;
use yew::html::ChildrenRenderer;
use yew::prelude::*;
use yew::{AttrValue, Callback, LocalServerRenderer};
use yew_router::history::{AnyHistory, MemoryHistory};
use yew_router::Router;

#[derive(Properties, PartialEq)]
struct RoutedNavbarProps {
    nav: navbar::Props,
}

#[function_component(RoutedNavbar)]
fn routed_navbar(props: &RoutedNavbarProps) -> Html {
    let history = AnyHistory::from(MemoryHistory::new());
    let nav = props.nav.clone();
    html! {
        <Router history={history}>
            <Navbar ..nav />
        </Router>
    }
}

fn render_navbar(authenticated: bool, cart_len: usize) -> String {
    let auth = Rc::new(WebAuthStore::default());
    if authenticated {
        auth.login("token");
    }
    let nav = navbar::Props {
        brand: AttrValue::from("MadiShop"),
        auth,
        authenticated,
        cart_len,
        on_logged_out: Callback::noop(),
    };
    block_on(LocalServerRenderer::<RoutedNavbar>::with_props(RoutedNavbarProps { nav }).render())
}

#[test]
fn navbar_shows_cart_and_logout_when_signed_in() {
    madishop_web::i18n::set_lang("en");
    let html = render_navbar(true, 3);
    assert!(html.contains("MadiShop"));
    assert!(html.contains("href=\"/cart\""));
    assert!(html.contains("cart-badge"));
    assert!(html.contains("Logout"));
    assert!(!html.contains("href=\"/login\""));
}

#[test]
fn navbar_brand_links_home() {
    madishop_web::i18n::set_lang("en");
    for authenticated in [true, false] {
        let html = render_navbar(authenticated, 0);
        let tag_start = html.find("navbar-brand").and_then(|at| html[..at].rfind('<'));
        let tag = tag_start
            .map(|start| &html[start..])
            .and_then(|rest| rest.split('>').next())
            .unwrap_or_default();
        assert!(tag.starts_with("<a"), "brand tag: {tag}");
        assert!(tag.contains("href=\"/\""), "brand tag: {tag}");
    }
}

#[test]
fn navbar_hides_badge_for_empty_cart() {
    madishop_web::i18n::set_lang("en");
    let html = render_navbar(true, 0);
    assert!(html.contains("href=\"/cart\""));
    assert!(!html.contains("cart-badge"));
}

#[test]
fn navbar_offers_login_when_signed_out() {
    madishop_web::i18n::set_lang("en");
    let html = render_navbar(false, 5);
    assert!(html.contains("href=\"/login\""));
    assert!(!html.contains("href=\"/cart\""));
    assert!(!html.contains("btn-logout"));
    assert!(html.contains("collapsed"));
}

#[test]
fn modal_renders_when_open_and_skips_when_closed() {
    madishop_web::i18n::set_lang("en");
    let open_props = modal::Props {
        open: true,
        title: AttrValue::from("Title"),
        description: Some(AttrValue::from("Desc")),
        class: None,
        on_close: Callback::noop(),
        return_focus_id: None,
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(open_props).render());
    assert!(html.contains("modal__header"));
    assert!(html.contains("Desc"));
    assert!(html.contains("Close dialog"));

    let closed_props = modal::Props {
        open: false,
        title: AttrValue::from("Title"),
        description: None,
        class: None,
        on_close: Callback::noop(),
        return_focus_id: None,
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(closed_props).render());
    assert!(!html.contains("modal-backdrop"));
}

#[test]
fn remove_confirmation_uses_indonesian_copy() {
    madishop_web::i18n::set_lang("id");
    let props = confirm_dialog::Props {
        dialog: Some(ActiveDialog {
            prompt: Prompt::confirm_remove(),
            mode: DialogMode::Confirm,
        }),
        on_answer: Callback::noop(),
    };
    let html = block_on(LocalServerRenderer::<ConfirmDialog>::with_props(props).render());
    assert!(html.contains("Konfirmasi Hapus"));
    assert!(html.contains("Apakah Anda yakin ingin menghapus item ini?"));
    assert!(html.contains("Ya"));
    assert!(html.contains("Batal"));
}
