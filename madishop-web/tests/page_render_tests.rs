use futures::executor::block_on;
use madishop_web::app::{AppInner, Services};
use madishop_web::dialog::DialogHandle;
use madishop_web::pages::{
    cart::{CartPage, CartPageProps},
    home::{HomePage, HomePageProps},
    not_found::NotFound,
};
use madishop_web::shop::{
    CartItem, CheckoutOrchestrator, RouterNavigator, ShopConfig, WebAuthStore, WebCartStore,
    load_catalog,
};
use std::rc::Rc;
use yew::prelude::*;
use yew::{AttrValue, LocalServerRenderer};
use yew_router::Router;
use yew_router::history::{AnyHistory, MemoryHistory};

fn cart_props(items: Vec<CartItem>) -> CartPageProps {
    let services = Services::new(
        WebCartStore::in_memory(items),
        WebAuthStore::default(),
        RouterNavigator::default(),
    );
    CartPageProps {
        store: services.store,
        orchestrator: services.orchestrator,
        currency: AttrValue::from("$"),
        revision: 0,
    }
}

#[test]
fn empty_cart_shows_only_the_notice() {
    madishop_web::i18n::set_lang("id");
    let html = block_on(LocalServerRenderer::<CartPage>::with_props(cart_props(vec![])).render());
    assert!(html.contains("Anda belum memilih item"));
    assert!(!html.contains("Total:"));
    assert!(!html.contains("btn-checkout"));
}

#[test]
fn unselected_cart_totals_zero_and_disables_checkout() {
    madishop_web::i18n::set_lang("id");
    let items = vec![
        CartItem::new(1, 1000, 2).with_name("Kemeja Batik"),
        CartItem::new(2, 500, 1).with_name("Kopi Gayo"),
    ];
    let html = block_on(LocalServerRenderer::<CartPage>::with_props(cart_props(items)).render());
    assert!(html.contains("Keranjang Belanja"));
    assert!(html.contains("Kemeja Batik"));
    assert!(html.contains("Kopi Gayo"));
    assert!(html.contains("Total: $ 0.00 (0 item)"));
    let checkout = html.split("btn-checkout").nth(1).unwrap_or_default();
    assert!(checkout.split("</button>").next().unwrap_or_default().contains("disabled"));
}

#[test]
fn orchestrator_built_from_config_uses_its_ceiling() {
    let config = ShopConfig {
        max_checkout_qty: 5,
        ..ShopConfig::default_config()
    };
    let orchestrator =
        CheckoutOrchestrator::new(Rc::new(DialogHandle::new()), RouterNavigator::default(), &config);
    assert_eq!(orchestrator.max_checkout_qty(), 5);
}

#[test]
fn home_page_lists_catalog_products() {
    madishop_web::i18n::set_lang("en");
    let props = HomePageProps {
        catalog: Rc::new(load_catalog().unwrap()),
        store: Rc::new(WebCartStore::in_memory(vec![])),
        currency: AttrValue::from("$"),
    };
    let html = block_on(LocalServerRenderer::<HomePage>::with_props(props).render());
    assert!(html.contains("Kemeja Batik"));
    assert!(html.contains("$ 25.00"));
    assert_eq!(html.matches("btn-add").count(), 4);
}

#[test]
fn not_found_page_renders_copy() {
    madishop_web::i18n::set_lang("en");
    let html = block_on(LocalServerRenderer::<NotFound>::new().render());
    assert!(html.contains("Page not found"));
    assert!(html.contains("Back to home"));
}

#[function_component(RoutedApp)]
fn routed_app() -> Html {
    let history = AnyHistory::from(MemoryHistory::with_entries(vec!["/cart"]));
    html! {
        <Router history={history}>
            <AppInner />
        </Router>
    }
}

#[test]
fn app_shell_renders_navbar_and_current_route() {
    madishop_web::i18n::set_lang("id");
    let html = block_on(LocalServerRenderer::<RoutedApp>::new().render());
    assert!(html.contains("navbar-brand"));
    assert!(html.contains("MadiShop"));
    assert!(html.contains("Anda belum memilih item"));
}
