use anyhow::{Result, bail, ensure};
use madishop_core::{CartItem, CheckoutOutcome, Decision, NavTarget, PromptId, RemoveOutcome};

use super::cart_tester::{FlowPlan, SimulationPlan, SimulationSummary};

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub plan: SimulationPlan,
}

impl TestScenario {
    #[must_use]
    pub fn simulation(name: impl Into<String>, plan: SimulationPlan) -> Self {
        Self {
            name: name.into(),
            plan,
        }
    }
}

const CATALOG: &[(&str, &str)] = &[
    ("smoke", "Select, edit and check out a small random cart"),
    ("selection-totals", "Totals follow selection and edited quantities"),
    ("quantity-floor", "Quantities below one are ignored"),
    ("checkout-ceiling", "Checkout leaves out items above the quantity ceiling"),
    ("checkout-cancel", "Cancelling checkout changes nothing"),
    ("remove-item", "Confirmed removal drops exactly one item"),
    ("remove-cancel", "Cancelling removal changes nothing"),
];

#[must_use]
pub const fn list_scenarios() -> &'static [(&'static str, &'static str)] {
    CATALOG
}

#[must_use]
pub fn get_scenario(name: &str) -> Option<TestScenario> {
    let plan = match name {
        "smoke" => SimulationPlan::new(FlowPlan::Checkout(Decision::Confirmed))
            .with_expectation(expect_totals_match_selection)
            .with_expectation(expect_committed_order),
        "selection-totals" => SimulationPlan::new(FlowPlan::Browse)
            .with_max_quantity(30)
            .with_expectation(expect_totals_match_selection),
        "quantity-floor" => SimulationPlan::new(FlowPlan::Browse)
            .with_invalid_edits()
            .with_expectation(expect_rejected_edits_ignored)
            .with_expectation(expect_totals_match_selection),
        "checkout-ceiling" => SimulationPlan::new(FlowPlan::Checkout(Decision::Confirmed))
            .with_max_quantity(40)
            .with_expectation(expect_committed_order),
        "checkout-cancel" => SimulationPlan::new(FlowPlan::Checkout(Decision::Cancelled))
            .with_max_quantity(40)
            .with_expectation(expect_untouched_after_cancel),
        "remove-item" => SimulationPlan::new(FlowPlan::Remove(Decision::Confirmed))
            .with_expectation(expect_single_removal),
        "remove-cancel" => SimulationPlan::new(FlowPlan::Remove(Decision::Cancelled))
            .with_expectation(expect_untouched_after_cancel),
        _ => return None,
    };
    Some(TestScenario::simulation(name, plan))
}

fn effective(summary: &SimulationSummary, item: &CartItem) -> i32 {
    summary.selection.effective_quantity(item)
}

fn expect_totals_match_selection(summary: &SimulationSummary) -> Result<()> {
    let (mut cents, mut qty) = (0_i64, 0_i64);
    for item in &summary.items_after {
        if summary.selection.is_selected(&item.id) {
            let q = i64::from(effective(summary, item));
            cents += item.price_cents * q;
            qty += q;
        }
    }
    ensure!(
        summary.total_cents == cents,
        "total {} != expected {cents}",
        summary.total_cents
    );
    ensure!(
        summary.total_quantity == qty,
        "quantity {} != expected {qty}",
        summary.total_quantity
    );
    Ok(())
}

fn expect_rejected_edits_ignored(summary: &SimulationSummary) -> Result<()> {
    for edit in &summary.edits {
        ensure!(
            edit.applied == (edit.requested >= 1),
            "edit of {} to {} applied={}",
            edit.id,
            edit.requested,
            edit.applied
        );
    }
    let applied = summary.edits.iter().filter(|edit| edit.applied).count();
    ensure!(
        summary.store_updates == applied,
        "store saw {} update(s), expected {applied}",
        summary.store_updates
    );
    Ok(())
}

fn expect_committed_order(summary: &SimulationSummary) -> Result<()> {
    let Some(CheckoutOutcome::Committed { order }) = &summary.checkout else {
        bail!("checkout did not commit: {:?}", summary.checkout);
    };
    let expected: Vec<CartItem> = summary
        .items_at_flow
        .iter()
        .filter(|item| summary.selection.is_selected(&item.id))
        .filter(|item| effective(summary, item) <= summary.max_checkout_qty)
        .map(|item| CartItem {
            quantity: effective(summary, item),
            ..item.clone()
        })
        .collect();
    ensure!(*order == expected, "order {order:?} != expected {expected:?}");
    ensure!(
        summary.orders == vec![expected],
        "store recorded {} order(s)",
        summary.orders.len()
    );
    ensure!(
        summary
            .items_after
            .iter()
            .all(|item| order.iter().all(|o| o.id != item.id)),
        "ordered items still in cart"
    );
    ensure!(
        summary.prompts == [PromptId::ConfirmCheckout, PromptId::CheckoutSucceeded],
        "unexpected prompts {:?}",
        summary.prompts
    );
    ensure!(
        summary.visited == [NavTarget::Home],
        "unexpected navigation {:?}",
        summary.visited
    );
    Ok(())
}

fn expect_untouched_after_cancel(summary: &SimulationSummary) -> Result<()> {
    let cancelled = matches!(summary.checkout, Some(CheckoutOutcome::Cancelled))
        || matches!(summary.removal, Some((_, RemoveOutcome::Cancelled)));
    ensure!(cancelled, "flow was not cancelled");
    ensure!(
        summary.items_after == summary.items_at_flow,
        "cart changed after cancel"
    );
    ensure!(summary.orders.is_empty(), "order recorded after cancel");
    ensure!(summary.visited.is_empty(), "navigated after cancel");
    ensure!(summary.prompts.len() == 1, "expected a single prompt");
    Ok(())
}

fn expect_single_removal(summary: &SimulationSummary) -> Result<()> {
    let Some((id, RemoveOutcome::Removed(removed))) = &summary.removal else {
        bail!("removal did not happen: {:?}", summary.removal);
    };
    ensure!(id == removed, "removed {removed} instead of {id}");
    let expected: Vec<CartItem> = summary
        .items_at_flow
        .iter()
        .filter(|item| &item.id != id)
        .cloned()
        .collect();
    ensure!(summary.items_after == expected, "unexpected cart after removal");
    ensure!(
        summary.prompts == [PromptId::ConfirmRemove, PromptId::RemoveSucceeded],
        "unexpected prompts {:?}",
        summary.prompts
    );
    ensure!(summary.visited.is_empty(), "removal navigated");
    Ok(())
}
