use futures::executor::block_on;
use madishop_web::app::Services;
use madishop_web::dialog::DialogMode;
use madishop_web::shop::{
    CartItem, CartSelection, CartStore, CheckoutOutcome, FlowState, ItemId, PromptId,
    RemoveOutcome, RouterNavigator, WebAuthStore, WebCartStore,
};

fn services(items: Vec<CartItem>) -> Services {
    Services::new(
        WebCartStore::in_memory(items),
        WebAuthStore::default(),
        RouterNavigator::default(),
    )
}

#[test]
fn dialog_driven_checkout_commits_effective_quantities() {
    let services = services(vec![CartItem::new(1, 10, 2), CartItem::new(2, 5, 1)]);
    let mut selection = CartSelection::new();
    selection.set_selected(&ItemId::from(1), true);
    selection.set_selected(&ItemId::from(2), true);
    selection.set_quantity(&ItemId::from(1), 3);

    block_on(async {
        let mut flow = Box::pin(services.orchestrator.checkout(&*services.store, &selection));
        assert!(futures::poll!(flow.as_mut()).is_pending());
        assert_eq!(services.orchestrator.checkout_state(), FlowState::Pending);
        let shown = services.dialog.current().unwrap();
        assert_eq!(shown.prompt.id, PromptId::ConfirmCheckout);
        services.dialog.answer(true);

        assert!(futures::poll!(flow.as_mut()).is_pending());
        let notice = services.dialog.current().unwrap();
        assert_eq!(notice.prompt.id, PromptId::CheckoutSucceeded);
        assert_eq!(notice.mode, DialogMode::Notice);
        services.dialog.answer(true);

        let CheckoutOutcome::Committed { order } = flow.await.unwrap() else {
            panic!("expected commit");
        };
        assert_eq!(order, vec![CartItem::new(1, 10, 3), CartItem::new(2, 5, 1)]);
    });
    assert!(services.store.is_empty());
    assert_eq!(services.orchestrator.checkout_state(), FlowState::Done);
}

#[test]
fn dismissing_the_remove_dialog_cancels() {
    let services = services(vec![CartItem::new(1, 10, 2)]);
    block_on(async {
        let id = ItemId::from(1);
        let mut flow = Box::pin(services.orchestrator.remove(&*services.store, &id));
        assert!(futures::poll!(flow.as_mut()).is_pending());
        services.dialog.answer(false);
        assert_eq!(flow.await.unwrap(), RemoveOutcome::Cancelled);
    });
    assert_eq!(services.store.items().len(), 1);
    assert!(services.dialog.current().is_none());
}
