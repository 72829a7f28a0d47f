//! Confirmation-gated checkout and removal flows
use crate::cart::{CartItem, ItemId};
use crate::config::ShopConfig;
use crate::error::{CartError, FlowAction, StoreCommand};
use crate::nav::NavTarget;
use crate::prompt::Prompt;
use crate::selection::CartSelection;
use crate::{CartStore, ConfirmSurface, Decision, Navigator};
use std::cell::RefCell;
use std::collections::HashMap;

/// Per-action flow state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FlowState {
    #[default]
    Idle,
    /// Waiting on the user (or on the success notice to be dismissed).
    Pending,
    /// Last invocation committed.
    Done,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutOutcome {
    /// The order was committed with these items; may be empty when every
    /// selected item was over the ceiling.
    Committed { order: Vec<CartItem> },
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(ItemId),
    Cancelled,
}

type FlowTable = RefCell<HashMap<FlowAction, FlowState>>;

/// Marks an action pending; writes the settled state back when dropped.
/// Settling to `Idle` forgets the action.
struct PendingFlow<'a> {
    table: &'a FlowTable,
    action: FlowAction,
    settled: FlowState,
}

impl PendingFlow<'_> {
    fn settle(mut self, state: FlowState) {
        self.settled = state;
    }
}

impl Drop for PendingFlow<'_> {
    fn drop(&mut self) {
        let mut table = self.table.borrow_mut();
        if self.settled == FlowState::Idle {
            table.remove(&self.action);
        } else {
            table.insert(self.action.clone(), self.settled);
        }
    }
}

/// Runs checkout and removal behind user confirmation.
///
/// Flows for different actions interleave freely; a second flow for an action
/// that is still pending is refused with [`CartError::InFlight`].
pub struct CheckoutOrchestrator<C, N> {
    surface: C,
    navigator: N,
    max_checkout_qty: i32,
    flows: FlowTable,
}

impl<C, N> CheckoutOrchestrator<C, N>
where
    C: ConfirmSurface,
    N: Navigator,
{
    #[must_use]
    pub fn new(surface: C, navigator: N, config: &ShopConfig) -> Self {
        Self {
            surface,
            navigator,
            max_checkout_qty: config.max_checkout_qty,
            flows: RefCell::new(HashMap::new()),
        }
    }

    #[must_use]
    pub const fn max_checkout_qty(&self) -> i32 {
        self.max_checkout_qty
    }

    #[must_use]
    pub fn state(&self, action: &FlowAction) -> FlowState {
        self.flows.borrow().get(action).copied().unwrap_or_default()
    }

    #[must_use]
    pub fn checkout_state(&self) -> FlowState {
        self.state(&FlowAction::Checkout)
    }

    #[must_use]
    pub fn remove_state(&self, id: &ItemId) -> FlowState {
        self.state(&FlowAction::Remove(id.clone()))
    }

    /// Whether the checkout control should be enabled.
    #[must_use]
    pub fn can_checkout(&self, selection: &CartSelection) -> bool {
        selection.any_selected() && self.checkout_state() != FlowState::Pending
    }

    fn begin(&self, action: FlowAction) -> Result<PendingFlow<'_>, CartError> {
        let mut flows = self.flows.borrow_mut();
        if flows.get(&action) == Some(&FlowState::Pending) {
            log::debug!("{action} refused: already pending");
            return Err(CartError::InFlight { action });
        }
        flows.insert(action.clone(), FlowState::Pending);
        Ok(PendingFlow {
            table: &self.flows,
            action,
            settled: FlowState::Idle,
        })
    }

    /// Confirm and commit the selected items.
    ///
    /// On confirmation the order holds every selected item whose effective
    /// quantity is within the ceiling; the rest are left out silently. After
    /// the store accepts the order the success notice is shown and the user is
    /// sent home.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NothingSelected`] when no item is selected,
    /// [`CartError::InFlight`] when a checkout is already pending, and
    /// [`CartError::Store`] when the store rejects the order.
    pub async fn checkout<S>(
        &self,
        store: &S,
        selection: &CartSelection,
    ) -> Result<CheckoutOutcome, CartError>
    where
        S: CartStore + ?Sized,
    {
        if !selection.any_selected() {
            return Err(CartError::NothingSelected);
        }
        let flow = self.begin(FlowAction::Checkout)?;
        log::debug!("checkout awaiting confirmation");

        if self.surface.confirm(&Prompt::confirm_checkout()).await == Decision::Cancelled {
            log::debug!("checkout cancelled");
            return Ok(CheckoutOutcome::Cancelled);
        }

        let order = selection.checkout_set(&store.items(), self.max_checkout_qty);
        store
            .checkout(&order)
            .map_err(|e| CartError::store(StoreCommand::Checkout, e))?;
        log::debug!("checkout committed {} item(s)", order.len());

        self.surface.notify(&Prompt::checkout_succeeded()).await;
        self.navigator.navigate(NavTarget::Home);
        flow.settle(FlowState::Done);
        Ok(CheckoutOutcome::Committed { order })
    }

    /// Confirm and remove a single item. Selection state is not consulted.
    ///
    /// The item's flow entry is dropped once the flow ends, so a removed item
    /// reports `Idle`.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::InFlight`] when a removal of the same item is
    /// already pending and [`CartError::Store`] when the store rejects it.
    pub async fn remove<S>(&self, store: &S, id: &ItemId) -> Result<RemoveOutcome, CartError>
    where
        S: CartStore + ?Sized,
    {
        let _flow = self.begin(FlowAction::Remove(id.clone()))?;
        log::debug!("removal of {id} awaiting confirmation");

        if self.surface.confirm(&Prompt::confirm_remove()).await == Decision::Cancelled {
            log::debug!("removal of {id} cancelled");
            return Ok(RemoveOutcome::Cancelled);
        }

        store
            .remove_item(id)
            .map_err(|e| CartError::store(StoreCommand::RemoveItem, e))?;
        self.surface.notify(&Prompt::remove_succeeded()).await;
        Ok(RemoveOutcome::Removed(id.clone()))
    }

    #[must_use]
    pub const fn surface(&self) -> &C {
        &self.surface
    }

    #[must_use]
    pub const fn navigator(&self) -> &N {
        &self.navigator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryCartStore;
    use crate::prompt::PromptId;
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::collections::VecDeque;

    /// Answers prompts from a queue; an empty queue answers "cancel".
    #[derive(Default)]
    struct ScriptedSurface {
        answers: RefCell<VecDeque<Decision>>,
        shown: RefCell<Vec<PromptId>>,
    }

    impl ScriptedSurface {
        fn answering(answers: &[Decision]) -> Self {
            Self {
                answers: RefCell::new(answers.iter().copied().collect()),
                ..Self::default()
            }
        }
    }

    #[async_trait(?Send)]
    impl ConfirmSurface for ScriptedSurface {
        async fn confirm(&self, prompt: &Prompt) -> Decision {
            self.shown.borrow_mut().push(prompt.id);
            self.answers
                .borrow_mut()
                .pop_front()
                .unwrap_or(Decision::Cancelled)
        }

        async fn notify(&self, prompt: &Prompt) {
            self.shown.borrow_mut().push(prompt.id);
        }
    }

    /// Holds every confirmation open until the test answers it.
    #[derive(Default)]
    struct GatedSurface {
        waiting: RefCell<Vec<oneshot::Sender<Decision>>>,
    }

    impl GatedSurface {
        fn answer_next(&self, decision: Decision) {
            let tx = self.waiting.borrow_mut().remove(0);
            tx.send(decision).unwrap();
        }
    }

    #[async_trait(?Send)]
    impl ConfirmSurface for GatedSurface {
        async fn confirm(&self, _prompt: &Prompt) -> Decision {
            let (tx, rx) = oneshot::channel();
            self.waiting.borrow_mut().push(tx);
            rx.await.unwrap_or(Decision::Cancelled)
        }

        async fn notify(&self, _prompt: &Prompt) {}
    }

    #[derive(Default)]
    struct RecordingNavigator {
        visited: RefCell<Vec<NavTarget>>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, target: NavTarget) {
            self.visited.borrow_mut().push(target);
        }
    }

    fn store() -> MemoryCartStore {
        MemoryCartStore::with_items(vec![CartItem::new(1, 10, 2), CartItem::new(2, 5, 1)])
    }

    fn orchestrator<C: ConfirmSurface>(surface: C) -> CheckoutOrchestrator<C, RecordingNavigator> {
        CheckoutOrchestrator::new(
            surface,
            RecordingNavigator::default(),
            &ShopConfig::default_config(),
        )
    }

    #[test]
    fn checkout_without_selection_never_prompts() {
        let orch = orchestrator(ScriptedSurface::answering(&[Decision::Confirmed]));
        let err = block_on(orch.checkout(&store(), &CartSelection::new())).unwrap_err();
        assert!(matches!(err, CartError::NothingSelected));
        assert!(orch.surface().shown.borrow().is_empty());
        assert_eq!(orch.checkout_state(), FlowState::Idle);
    }

    #[test]
    fn confirmed_checkout_commits_notifies_and_goes_home() {
        let store = store();
        let mut selection = CartSelection::new();
        selection.set_selected(&ItemId::from(1), true);
        let orch = orchestrator(ScriptedSurface::answering(&[Decision::Confirmed]));

        let outcome = block_on(orch.checkout(&store, &selection)).unwrap();

        let CheckoutOutcome::Committed { order } = outcome else {
            panic!("expected commit");
        };
        assert_eq!(order, vec![CartItem::new(1, 10, 2)]);
        assert_eq!(store.orders(), vec![order]);
        assert_eq!(
            *orch.surface().shown.borrow(),
            vec![PromptId::ConfirmCheckout, PromptId::CheckoutSucceeded]
        );
        assert_eq!(*orch.navigator().visited.borrow(), vec![NavTarget::Home]);
        assert_eq!(orch.checkout_state(), FlowState::Done);
    }

    #[test]
    fn cancelled_checkout_changes_nothing() {
        let store = store();
        let mut selection = CartSelection::new();
        selection.set_selected(&ItemId::from(2), true);
        selection.set_quantity(&ItemId::from(2), 3);
        let before = selection.clone();
        let orch = orchestrator(ScriptedSurface::answering(&[Decision::Cancelled]));

        let outcome = block_on(orch.checkout(&store, &selection)).unwrap();

        assert_eq!(outcome, CheckoutOutcome::Cancelled);
        assert_eq!(selection, before);
        assert!(store.orders().is_empty());
        assert_eq!(store.items().len(), 2);
        assert!(orch.navigator().visited.borrow().is_empty());
        assert_eq!(*orch.surface().shown.borrow(), vec![PromptId::ConfirmCheckout]);
        assert_eq!(orch.checkout_state(), FlowState::Idle);
    }

    #[test]
    fn checkout_store_failure_skips_notice_and_navigation() {
        let store = store();
        store.fail_on(StoreCommand::Checkout);
        let mut selection = CartSelection::new();
        selection.set_selected(&ItemId::from(1), true);
        let orch = orchestrator(ScriptedSurface::answering(&[Decision::Confirmed]));

        let err = block_on(orch.checkout(&store, &selection)).unwrap_err();

        assert!(matches!(
            err,
            CartError::Store {
                command: StoreCommand::Checkout,
                ..
            }
        ));
        assert_eq!(*orch.surface().shown.borrow(), vec![PromptId::ConfirmCheckout]);
        assert!(orch.navigator().visited.borrow().is_empty());
        assert_eq!(orch.checkout_state(), FlowState::Idle);
    }

    #[test]
    fn second_checkout_is_refused_while_pending() {
        let store = store();
        let mut selection = CartSelection::new();
        selection.set_selected(&ItemId::from(1), true);
        let orch = orchestrator(GatedSurface::default());

        block_on(async {
            let mut first = Box::pin(orch.checkout(&store, &selection));
            assert!(futures::poll!(first.as_mut()).is_pending());
            assert_eq!(orch.checkout_state(), FlowState::Pending);
            assert!(!orch.can_checkout(&selection));

            let second = orch.checkout(&store, &selection).await;
            assert!(matches!(
                second,
                Err(CartError::InFlight {
                    action: FlowAction::Checkout
                })
            ));

            orch.surface().answer_next(Decision::Confirmed);
            let outcome = first.await.unwrap();
            assert!(matches!(outcome, CheckoutOutcome::Committed { .. }));
        });
        assert!(orch.can_checkout(&selection));
    }

    #[test]
    fn removals_of_different_items_interleave() {
        let store = store();
        let orch = orchestrator(GatedSurface::default());
        let one = ItemId::from(1);
        let two = ItemId::from(2);

        block_on(async {
            let mut first = Box::pin(orch.remove(&store, &one));
            let mut second = Box::pin(orch.remove(&store, &two));
            assert!(futures::poll!(first.as_mut()).is_pending());
            assert!(futures::poll!(second.as_mut()).is_pending());

            let again = orch.remove(&store, &one).await;
            assert!(matches!(again, Err(CartError::InFlight { .. })));

            orch.surface().answer_next(Decision::Cancelled);
            orch.surface().answer_next(Decision::Confirmed);
            assert_eq!(first.await.unwrap(), RemoveOutcome::Cancelled);
            assert_eq!(second.await.unwrap(), RemoveOutcome::Removed(two.clone()));
        });

        assert_eq!(orch.remove_state(&one), FlowState::Idle);
        assert_eq!(orch.remove_state(&two), FlowState::Idle);
        assert!(orch.flows.borrow().is_empty());
        let remaining: Vec<_> = store.items().into_iter().map(|item| item.id).collect();
        assert_eq!(remaining, vec![one]);
    }

    #[test]
    fn dropped_flow_returns_to_idle() {
        let store = store();
        let mut selection = CartSelection::new();
        selection.set_selected(&ItemId::from(1), true);
        let orch = orchestrator(GatedSurface::default());

        block_on(async {
            let mut first = Box::pin(orch.checkout(&store, &selection));
            assert!(futures::poll!(first.as_mut()).is_pending());
        });

        assert_eq!(orch.checkout_state(), FlowState::Idle);
    }

    #[test]
    fn confirmed_removal_notifies_without_navigation() {
        let store = store();
        let orch = orchestrator(ScriptedSurface::answering(&[Decision::Confirmed]));

        let outcome = block_on(orch.remove(&store, &ItemId::from(1))).unwrap();

        assert_eq!(outcome, RemoveOutcome::Removed(ItemId::from(1)));
        assert_eq!(store.items().len(), 1);
        assert_eq!(
            *orch.surface().shown.borrow(),
            vec![PromptId::ConfirmRemove, PromptId::RemoveSucceeded]
        );
        assert!(orch.navigator().visited.borrow().is_empty());
    }

    #[test]
    fn settled_removals_leave_no_flow_entries() {
        let store = MemoryCartStore::with_items((1..=50).map(|n| CartItem::new(n, 10, 1)).collect());
        let orch = orchestrator(ScriptedSurface::answering(&[Decision::Confirmed; 50]));

        for n in 1..=50 {
            let outcome = block_on(orch.remove(&store, &ItemId::from(n))).unwrap();
            assert_eq!(outcome, RemoveOutcome::Removed(ItemId::from(n)));
        }

        assert!(store.items().is_empty());
        assert!(orch.flows.borrow().is_empty());
    }
}
