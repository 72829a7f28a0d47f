use async_trait::async_trait;
use futures::executor::block_on;
use madishop_core::{
    CartError, CartItem, CartSelection, CartSession, CartStore, CheckoutOrchestrator,
    CheckoutOutcome, ConfirmSurface, Decision, ItemId, MemoryCartStore, NavTarget, Navigator,
    Prompt, PromptId, RemoveOutcome, ShopConfig,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::cell::RefCell;

/// What the simulated shopper does once the cart is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowPlan {
    /// Only select and edit; no dialog flow.
    Browse,
    Checkout(Decision),
    Remove(Decision),
}

pub type Expectation = fn(&SimulationSummary) -> anyhow::Result<()>;

#[derive(Clone)]
pub struct SimulationPlan {
    pub flow: FlowPlan,
    pub max_items: usize,
    /// Upper bound for random quantity edits.
    pub max_quantity: i32,
    /// Mix zero and negative quantities into the edits.
    pub invalid_edits: bool,
    pub expectations: Vec<Expectation>,
}

impl std::fmt::Debug for SimulationPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationPlan")
            .field("flow", &self.flow)
            .field("max_items", &self.max_items)
            .field("max_quantity", &self.max_quantity)
            .field("invalid_edits", &self.invalid_edits)
            .field("expectations", &self.expectations.len())
            .finish()
    }
}

impl SimulationPlan {
    #[must_use]
    pub const fn new(flow: FlowPlan) -> Self {
        Self {
            flow,
            max_items: 6,
            max_quantity: 10,
            invalid_edits: false,
            expectations: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with_max_quantity(mut self, max_quantity: i32) -> Self {
        self.max_quantity = max_quantity;
        self
    }

    #[must_use]
    pub const fn with_invalid_edits(mut self) -> Self {
        self.invalid_edits = true;
        self
    }

    #[must_use]
    pub fn with_expectation(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantityEdit {
    pub id: ItemId,
    pub requested: i32,
    pub applied: bool,
}

/// Everything observed during one seeded run.
#[derive(Debug, Clone)]
pub struct SimulationSummary {
    pub seed: u64,
    pub max_checkout_qty: i32,
    /// Store items right before the dialog flow started.
    pub items_at_flow: Vec<CartItem>,
    pub selection: CartSelection,
    pub edits: Vec<QuantityEdit>,
    pub store_updates: usize,
    pub total_cents: i64,
    pub total_quantity: i64,
    pub checkout: Option<CheckoutOutcome>,
    pub removal: Option<(ItemId, RemoveOutcome)>,
    pub items_after: Vec<CartItem>,
    pub orders: Vec<Vec<CartItem>>,
    pub prompts: Vec<PromptId>,
    pub visited: Vec<NavTarget>,
}

#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    #[error("seed {seed}: {source}")]
    Flow {
        seed: u64,
        #[source]
        source: CartError,
    },
}

struct ScriptedSurface {
    decision: Decision,
    shown: RefCell<Vec<PromptId>>,
}

#[async_trait(?Send)]
impl ConfirmSurface for ScriptedSurface {
    async fn confirm(&self, prompt: &Prompt) -> Decision {
        self.shown.borrow_mut().push(prompt.id);
        self.decision
    }

    async fn notify(&self, prompt: &Prompt) {
        self.shown.borrow_mut().push(prompt.id);
    }
}

#[derive(Default)]
struct RecordingNavigator(RefCell<Vec<NavTarget>>);

impl Navigator for RecordingNavigator {
    fn navigate(&self, target: NavTarget) {
        self.0.borrow_mut().push(target);
    }
}

/// Drives the cart model with seeded random shoppers.
#[derive(Debug, Clone)]
pub struct CartTester {
    config: ShopConfig,
    verbose: bool,
}

impl CartTester {
    #[must_use]
    pub const fn new(config: ShopConfig, verbose: bool) -> Self {
        Self { config, verbose }
    }

    fn random_cart(rng: &mut ChaCha8Rng, max_items: usize) -> Vec<CartItem> {
        let count = rng.gen_range(1..=max_items.max(1));
        (1..=count)
            .map(|n| {
                let id = i32::try_from(n).unwrap_or(i32::MAX);
                CartItem::new(id, rng.gen_range(100..5_000), rng.gen_range(1..=5))
                    .with_name(format!("item-{n}"))
            })
            .collect()
    }

    fn random_quantity(rng: &mut ChaCha8Rng, plan: &SimulationPlan) -> i32 {
        if plan.invalid_edits && rng.gen_bool(0.3) {
            rng.gen_range(-5..=0)
        } else {
            rng.gen_range(1..=plan.max_quantity.max(1))
        }
    }

    /// Run one plan with a fixed seed.
    ///
    /// # Errors
    ///
    /// Returns an error when a flow fails in a way no plan expects.
    pub fn run_plan(
        &self,
        plan: &SimulationPlan,
        seed: u64,
    ) -> Result<SimulationSummary, SimulationError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let items = Self::random_cart(&mut rng, plan.max_items);
        let mut session = CartSession::new(MemoryCartStore::with_items(items.clone()));
        let flow_err = |source| SimulationError::Flow { seed, source };

        for item in &items {
            if rng.gen_bool(0.6) {
                session.set_selected(&item.id, true);
            }
        }
        let mut edits = Vec::new();
        for _ in 0..items.len() {
            let id = items[rng.gen_range(0..items.len())].id.clone();
            let requested = Self::random_quantity(&mut rng, plan);
            let applied = session
                .set_quantity(&id, requested)
                .map_err(flow_err)?
                .is_applied();
            edits.push(QuantityEdit {
                id,
                requested,
                applied,
            });
        }
        if matches!(plan.flow, FlowPlan::Checkout(_)) && !session.any_selected() {
            session.set_selected(&items[0].id, true);
        }

        let decision = match plan.flow {
            FlowPlan::Browse => Decision::Cancelled,
            FlowPlan::Checkout(d) | FlowPlan::Remove(d) => d,
        };
        let orchestrator = CheckoutOrchestrator::new(
            ScriptedSurface {
                decision,
                shown: RefCell::default(),
            },
            RecordingNavigator::default(),
            &self.config,
        );

        let items_at_flow = session.items();
        let mut checkout = None;
        let mut removal = None;
        match plan.flow {
            FlowPlan::Browse => {}
            FlowPlan::Checkout(_) => {
                let outcome = block_on(orchestrator.checkout(session.store(), session.selection()))
                    .map_err(flow_err)?;
                checkout = Some(outcome);
            }
            FlowPlan::Remove(_) => {
                let id = items_at_flow[rng.gen_range(0..items_at_flow.len())].id.clone();
                let outcome = block_on(orchestrator.remove(session.store(), &id)).map_err(flow_err)?;
                removal = Some((id, outcome));
            }
        }

        if self.verbose {
            log::info!(
                "seed {seed}: {} item(s), total {} cents, flow {:?}",
                items_at_flow.len(),
                session.total(),
                plan.flow
            );
        }

        Ok(SimulationSummary {
            seed,
            max_checkout_qty: self.config.max_checkout_qty,
            selection: session.selection().clone(),
            edits,
            store_updates: session.store().update_count(),
            total_cents: session.total(),
            total_quantity: session.total_quantity(),
            checkout,
            removal,
            items_after: session.store().items(),
            orders: session.store().orders(),
            prompts: orchestrator.surface().shown.borrow().clone(),
            visited: orchestrator.navigator().0.borrow().clone(),
            items_at_flow,
        })
    }
}
