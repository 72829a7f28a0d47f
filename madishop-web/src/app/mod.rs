use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::navbar::Navbar;
use crate::pages::cart::CartPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFound;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub mod state;

pub use state::{AppState, Services};

/// Main application component providing browser routing
#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AppInner />
        </BrowserRouter>
    }
}

fn render_route(route: Route, app: &AppState) -> Html {
    let services = &app.services;
    let currency = AttrValue::from(services.config.currency_symbol.clone());
    match route {
        Route::Home => html! {
            <HomePage
                catalog={services.catalog.clone()}
                store={services.store.clone()}
                currency={currency}
            />
        },
        Route::Cart => html! {
            <CartPage
                store={services.store.clone()}
                orchestrator={services.orchestrator.clone()}
                currency={currency}
                revision={app.revision}
            />
        },
        Route::Login => html! {
            <LoginPage auth={services.auth.clone()} on_logged_in={app.refresh.clone()} />
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

/// Application shell; must be mounted inside a router.
#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let app = state::use_app_state();
    let services = app.services.clone();

    let switch = {
        let app = app.clone();
        Callback::from(move |route: Route| render_route(route, &app))
    };
    let on_answer = {
        let dialog = services.dialog.clone();
        Callback::from(move |confirmed: bool| dialog.answer(confirmed))
    };

    html! {
        <>
            <Navbar
                brand={AttrValue::from(services.config.brand.clone())}
                auth={services.auth.clone()}
                authenticated={app.authenticated}
                cart_len={services.store.len()}
                on_logged_out={app.refresh.clone()}
            />
            <main id="main" role="main">
                <Switch<Route> render={switch} />
            </main>
            <ConfirmDialog dialog={services.dialog.current()} on_answer={on_answer} />
        </>
    }
}
