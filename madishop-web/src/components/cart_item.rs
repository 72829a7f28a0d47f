use crate::i18n::{fmt_currency, tr};
use crate::shop::{CartLine, ItemId, MIN_QUANTITY};
use std::collections::BTreeMap;
use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub line: CartLine,
    pub currency: AttrValue,
    pub on_check: Callback<(ItemId, bool)>,
    pub on_quantity: Callback<(ItemId, i32)>,
    pub on_remove: Callback<ItemId>,
    /// A removal of this item is waiting on the user.
    #[prop_or_default]
    pub removing: bool,
}

fn input_target(e: &Event) -> Option<web_sys::HtmlInputElement> {
    e.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
}

/// Quantity typed into the numeric input, when it is one the cart accepts.
fn accepted_quantity(raw: &str) -> Option<i32> {
    raw.trim()
        .parse::<i32>()
        .ok()
        .filter(|qty| *qty >= MIN_QUANTITY)
}

#[function_component(CartItemRow)]
pub fn cart_item_row(props: &Props) -> Html {
    let id = props.line.item.id.clone();
    let qty = props.line.quantity;

    let on_check = {
        let cb = props.on_check.clone();
        let id = id.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = input_target(&e) {
                cb.emit((id.clone(), input.checked()));
            }
        })
    };
    let step = |delta: i32| {
        let cb = props.on_quantity.clone();
        let id = id.clone();
        Callback::from(move |_: MouseEvent| cb.emit((id.clone(), qty.saturating_add(delta))))
    };
    let on_input = {
        let cb = props.on_quantity.clone();
        let id = id.clone();
        Callback::from(move |e: Event| {
            let Some(input) = input_target(&e) else {
                return;
            };
            match accepted_quantity(&input.value()) {
                Some(next) => cb.emit((id.clone(), next)),
                // The model keeps its quantity; show it again.
                None => input.set_value(&qty.to_string()),
            }
        })
    };
    let on_remove = {
        let cb = props.on_remove.clone();
        let id = id.clone();
        Callback::from(move |_: MouseEvent| cb.emit(id.clone()))
    };

    let name = props.line.item.name.as_str();
    let mut vars = BTreeMap::new();
    vars.insert("item", name);
    let dom_id = format!("cart-item-{id}");

    html! {
        <div class="card cart-item" id={dom_id.clone()}>
            <div class="card-body">
                <input
                    type="checkbox"
                    class="form-check-input"
                    id={format!("{dom_id}-check")}
                    checked={props.line.selected}
                    aria-label={tr("cart.select", Some(&vars))}
                    onchange={on_check}
                />
                <h5 class="card-title">{ name.to_string() }</h5>
                <p class="card-text price">{ fmt_currency(props.line.item.price_cents, &props.currency) }</p>
                <div class="quantity-control">
                    <button
                        type="button"
                        class="btn btn-outline-secondary qty-dec"
                        aria-label={tr("cart.decrease", None)}
                        disabled={qty <= MIN_QUANTITY}
                        onclick={step(-1)}
                    >{"-"}</button>
                    <input
                        type="number"
                        class="form-control qty-input"
                        min={MIN_QUANTITY.to_string()}
                        value={qty.to_string()}
                        aria-label={tr("cart.quantity", Some(&vars))}
                        onchange={on_input}
                    />
                    <button
                        type="button"
                        class="btn btn-outline-secondary qty-inc"
                        aria-label={tr("cart.increase", None)}
                        onclick={step(1)}
                    >{"+"}</button>
                </div>
                <p class="card-text line-total">{ fmt_currency(props.line.line_total_cents, &props.currency) }</p>
                <button
                    type="button"
                    class="btn btn-danger btn-remove"
                    disabled={props.removing}
                    onclick={on_remove}
                >
                    { tr("cart.remove", None) }
                </button>
            </div>
        </div>
    }
}
