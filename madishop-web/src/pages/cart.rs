use madishop_core::CartStore;
use crate::components::cart_item::CartItemRow;
use crate::i18n::{fmt_currency, t, tr};
use crate::shop::{
    CartError, CartSelection, CartSession, CartView, CheckoutOutcome, FlowState, ItemId,
    RemoveOutcome, ShopOrchestrator, WebCartStore,
};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Properties, Clone)]
pub struct CartPageProps {
    pub store: Rc<WebCartStore>,
    pub orchestrator: Rc<ShopOrchestrator>,
    pub currency: AttrValue,
    /// Bumped by the app whenever the store or the dialog changes.
    #[prop_or_default]
    pub revision: u64,
}

impl PartialEq for CartPageProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
            && Rc::ptr_eq(&self.orchestrator, &other.orchestrator)
            && self.currency == other.currency
            && self.revision == other.revision
    }
}

fn report(err: &CartError) {
    match err {
        CartError::NothingSelected | CartError::InFlight { .. } => log::debug!("{err}"),
        CartError::Store { .. } => log::error!("{err}"),
    }
}

/// Apply a quantity edit on top of the latest selection. Returns whether the
/// page needs to redraw.
fn edit_quantity(
    selection: &RefCell<CartSelection>,
    store: &Rc<WebCartStore>,
    id: &ItemId,
    qty: i32,
) -> bool {
    let current = std::mem::take(&mut *selection.borrow_mut());
    let mut session = CartSession::from_parts(Rc::clone(store), current);
    let changed = match session.set_quantity(id, qty) {
        Ok(change) => change.is_applied(),
        Err(err) => {
            report(&err);
            true
        }
    };
    let (_, next) = session.into_parts();
    *selection.borrow_mut() = next;
    changed
}

#[function_component(CartPage)]
pub fn cart_page(props: &CartPageProps) -> Html {
    let selection = use_mut_ref(CartSelection::new);
    let redraw = use_force_update();

    let on_check = {
        let selection = selection.clone();
        let redraw = redraw.clone();
        Callback::from(move |(id, checked): (ItemId, bool)| {
            selection.borrow_mut().set_selected(&id, checked);
            redraw.force_update();
        })
    };

    let on_quantity = {
        let selection = selection.clone();
        let store = props.store.clone();
        let redraw = redraw.clone();
        Callback::from(move |(id, qty): (ItemId, i32)| {
            if edit_quantity(&selection, &store, &id, qty) {
                redraw.force_update();
            }
        })
    };

    let on_remove = {
        let store = props.store.clone();
        let orchestrator = props.orchestrator.clone();
        let redraw = redraw.clone();
        Callback::from(move |id: ItemId| {
            let store = store.clone();
            let orchestrator = orchestrator.clone();
            let redraw = redraw.clone();
            spawn_local(async move {
                match orchestrator.remove(&*store, &id).await {
                    Ok(RemoveOutcome::Removed(id)) => log::info!("removed {id}"),
                    Ok(RemoveOutcome::Cancelled) => {}
                    Err(err) => report(&err),
                }
                redraw.force_update();
            });
        })
    };

    let on_checkout = {
        let store = props.store.clone();
        let orchestrator = props.orchestrator.clone();
        let selection = selection.clone();
        Callback::from(move |_: MouseEvent| {
            let store = store.clone();
            let orchestrator = orchestrator.clone();
            let snapshot = selection.borrow().clone();
            let redraw = redraw.clone();
            spawn_local(async move {
                match orchestrator.checkout(&*store, &snapshot).await {
                    Ok(CheckoutOutcome::Committed { order }) => {
                        log::info!("checked out {} line(s)", order.len());
                    }
                    Ok(CheckoutOutcome::Cancelled) => {}
                    Err(err) => report(&err),
                }
                redraw.force_update();
            });
        })
    };

    let items = props.store.items();
    let current = selection.borrow().clone();
    let (lines, total_cents, total_quantity) = match current.view(&items) {
        CartView::Empty => {
            return html! {
                <div class="container mt-4">
                    <div class="alert alert-info">{ t("cart.empty") }</div>
                </div>
            };
        }
        CartView::Items {
            lines,
            total_cents,
            total_quantity,
            ..
        } => (lines, total_cents, total_quantity),
    };

    let can_checkout = props.orchestrator.can_checkout(&current);
    let sum = fmt_currency(total_cents, &props.currency);
    let count = total_quantity.to_string();
    let mut vars = BTreeMap::new();
    vars.insert("sum", sum.as_str());
    vars.insert("count", count.as_str());

    html! {
        <div class="container my-4">
            <h2 class="mb-3">{ t("cart.title") }</h2>
            { for lines.into_iter().map(|line| {
                let removing = props.orchestrator.remove_state(&line.item.id) == FlowState::Pending;
                let key = line.item.id.to_string();
                html! {
                    <CartItemRow
                        key={key}
                        line={line}
                        currency={props.currency.clone()}
                        on_check={on_check.clone()}
                        on_quantity={on_quantity.clone()}
                        on_remove={on_remove.clone()}
                        removing={removing}
                    />
                }
            }) }
            <div class="mt-4">
                <h3 class="cart-total">{ tr("cart.total", Some(&vars)) }</h3>
                <button
                    type="button"
                    class="btn btn-success btn-lg btn-checkout"
                    disabled={!can_checkout}
                    onclick={on_checkout}
                >
                    { t("cart.checkout") }
                </button>
            </div>
        </div>
    }
}
