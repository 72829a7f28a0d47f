use crate::a11y::set_status;
use crate::i18n::{fmt_currency, t, tr};
use crate::shop::{Catalog, Product, WebCartStore};
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct HomePageProps {
    pub catalog: Rc<Catalog>,
    pub store: Rc<WebCartStore>,
    pub currency: AttrValue,
}

impl PartialEq for HomePageProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.catalog, &other.catalog)
            && Rc::ptr_eq(&self.store, &other.store)
            && self.currency == other.currency
    }
}

#[function_component(HomePage)]
pub fn home_page(props: &HomePageProps) -> Html {
    let on_add = {
        let store = props.store.clone();
        Callback::from(move |product: Product| match store.add_product(&product) {
            Ok(qty) => {
                log::debug!("{} now at {qty}", product.id);
                let mut vars = BTreeMap::new();
                vars.insert("item", product.name.as_str());
                set_status(&tr("home.added", Some(&vars)));
            }
            Err(err) => log::error!("could not add {}: {err}", product.id),
        })
    };

    html! {
        <section class="container my-4">
            <h2 class="mb-3">{ t("home.title") }</h2>
            <p id="shop-status" class="sr-only" aria-live="polite"></p>
            <div class="product-grid">
                { for props.catalog.products.iter().map(|product| {
                    let onclick = {
                        let on_add = on_add.clone();
                        let product = product.clone();
                        Callback::from(move |_: MouseEvent| on_add.emit(product.clone()))
                    };
                    html! {
                        <div class="card product" key={product.id.to_string()}>
                            <div class="card-body">
                                <h5 class="card-title">{ product.name.clone() }</h5>
                                <p class="card-text">{ product.desc.clone() }</p>
                                <p class="card-text price">{ fmt_currency(product.price_cents, &props.currency) }</p>
                                <button type="button" class="btn btn-primary btn-add" {onclick}>
                                    { t("home.add") }
                                </button>
                            </div>
                        </div>
                    }
                }) }
            </div>
        </section>
    }
}
