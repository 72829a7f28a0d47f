use crate::dialog::DialogHandle;
use crate::shop::{
    AuthStore, Catalog, CheckoutOrchestrator, RouterNavigator, ShopConfig, ShopOrchestrator,
    WebAuthStore, WebCartStore, load_catalog, load_shop_config,
};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::use_navigator;

/// Long-lived collaborators shared by every page.
#[derive(Clone)]
pub struct Services {
    pub config: Rc<ShopConfig>,
    pub catalog: Rc<Catalog>,
    pub store: Rc<WebCartStore>,
    pub auth: Rc<WebAuthStore>,
    pub dialog: Rc<DialogHandle>,
    pub orchestrator: Rc<ShopOrchestrator>,
}

impl Services {
    #[must_use]
    pub fn new(store: WebCartStore, auth: WebAuthStore, navigator: RouterNavigator) -> Self {
        let config = load_shop_config().unwrap_or_else(|err| {
            log::error!("{err}; using default shop config");
            ShopConfig::default_config()
        });
        let catalog = load_catalog().unwrap_or_else(|err| {
            log::error!("{err}; starting with an empty catalog");
            Catalog::default()
        });
        let dialog = Rc::new(DialogHandle::new());
        let orchestrator = CheckoutOrchestrator::new(Rc::clone(&dialog), navigator, &config);
        Self {
            config: Rc::new(config),
            catalog: Rc::new(catalog),
            store: Rc::new(store),
            auth: Rc::new(auth),
            dialog,
            orchestrator: Rc::new(orchestrator),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub services: Services,
    /// Counts store and dialog changes; pages re-render when it moves.
    pub revision: u64,
    pub authenticated: bool,
    pub refresh: Callback<()>,
}

#[hook]
pub fn use_app_state() -> AppState {
    let counter = use_mut_ref(|| 0_u64);
    let redraw = use_force_update();
    let navigator = use_navigator();

    let refresh = {
        let counter = counter.clone();
        Callback::from(move |()| {
            *counter.borrow_mut() += 1;
            redraw.force_update();
        })
    };

    let services = {
        let refresh = refresh.clone();
        use_state(move || {
            let services = Services::new(
                WebCartStore::load(),
                WebAuthStore::load(),
                RouterNavigator::new(navigator),
            );
            services.store.subscribe(refresh.clone());
            services.dialog.subscribe(refresh);
            services
        })
    };

    let revision = *counter.borrow();
    AppState {
        authenticated: services.auth.is_authenticated(),
        services: (*services).clone(),
        revision,
        refresh,
    }
}
