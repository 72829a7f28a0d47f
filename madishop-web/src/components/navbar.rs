use crate::i18n::t;
use crate::router::Route;
use crate::shop::{NavCollapse, NavEntry, RouterNavigator, WebAuthStore, logout, menu_entries};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone)]
pub struct Props {
    pub brand: AttrValue,
    pub auth: Rc<WebAuthStore>,
    /// Changes whenever the auth token does, so the menu re-renders.
    pub authenticated: bool,
    pub cart_len: usize,
    pub on_logged_out: Callback<()>,
}

impl PartialEq for Props {
    fn eq(&self, other: &Self) -> bool {
        self.brand == other.brand
            && Rc::ptr_eq(&self.auth, &other.auth)
            && self.authenticated == other.authenticated
            && self.cart_len == other.cart_len
            && self.on_logged_out == other.on_logged_out
    }
}

#[function_component(Navbar)]
pub fn navbar(props: &Props) -> Html {
    let collapse = use_mut_ref(NavCollapse::default);
    let redraw = use_force_update();
    let nav_ref = use_node_ref();
    let navigator = RouterNavigator::new(use_navigator());

    #[cfg(target_arch = "wasm32")]
    {
        let collapse = collapse.clone();
        let redraw = redraw.clone();
        let nav_ref = nav_ref.clone();
        use_effect_with((), move |()| {
            use wasm_bindgen::JsCast;
            let listener = gloo::events::EventListener::new(
                &gloo::utils::document(),
                "click",
                move |event| {
                    let inside = match (
                        nav_ref.cast::<web_sys::Node>(),
                        event
                            .target()
                            .and_then(|target| target.dyn_into::<web_sys::Node>().ok()),
                    ) {
                        (Some(nav), Some(target)) => nav.contains(Some(&target)),
                        _ => false,
                    };
                    if collapse.borrow_mut().on_document_click(inside) {
                        redraw.force_update();
                    }
                },
            );
            move || drop(listener)
        });
    }

    let on_toggle = {
        let collapse = collapse.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            collapse.borrow_mut().toggle();
            redraw.force_update();
        })
    };
    let on_link = {
        let collapse = collapse.clone();
        let redraw = redraw.clone();
        Callback::from(move |_: MouseEvent| {
            collapse.borrow_mut().collapse();
            redraw.force_update();
        })
    };
    let on_logout = {
        let collapse = collapse.clone();
        let auth = props.auth.clone();
        let done = props.on_logged_out.clone();
        Callback::from(move |_: MouseEvent| {
            logout(&*auth, &navigator, &mut collapse.borrow_mut());
            redraw.force_update();
            done.emit(());
        })
    };

    let items = menu_entries(props.authenticated, props.cart_len)
        .into_iter()
        .map(|entry| match entry {
            NavEntry::Home => html! {
                <li class="nav-item" onclick={on_link.clone()}>
                    <Link<Route> to={Route::Home} classes="nav-link">{ t("nav.home") }</Link<Route>>
                </li>
            },
            NavEntry::Cart { badge } => html! {
                <li class="nav-item" onclick={on_link.clone()}>
                    <Link<Route> to={Route::Cart} classes="nav-link">
                        { t("nav.cart") }
                        { badge.map(|n| html! { <span class="badge cart-badge">{ n }</span> }).unwrap_or_default() }
                    </Link<Route>>
                </li>
            },
            NavEntry::Login => html! {
                <li class="nav-item" onclick={on_link.clone()}>
                    <Link<Route> to={Route::Login} classes="nav-link">{ t("nav.login") }</Link<Route>>
                </li>
            },
            NavEntry::Logout => html! {
                <li class="nav-item">
                    <button type="button" class="nav-link btn-logout" onclick={on_logout.clone()}>
                        { t("nav.logout") }
                    </button>
                </li>
            },
        })
        .collect::<Html>();

    let collapsed = collapse.borrow().is_collapsed();
    html! {
        <nav class="navbar" ref={nav_ref} aria-label={props.brand.clone()}>
            <Link<Route> to={Route::Home} classes="navbar-brand">{ props.brand.clone() }</Link<Route>>
            <button
                type="button"
                class="navbar-toggler"
                aria-label={t("nav.toggle")}
                aria-expanded={(!collapsed).to_string()}
                onclick={on_toggle}
            >
                {"☰"}
            </button>
            <ul class={classes!("navbar-nav", collapsed.then_some("collapsed"))}>
                { items }
            </ul>
        </nav>
    }
}
