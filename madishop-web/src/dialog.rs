//! Bridge between the async confirmation flows and the dialog component.
use crate::shop::{ConfirmSurface, Decision, Prompt};
use async_trait::async_trait;
use futures::channel::oneshot;
use std::cell::RefCell;
use yew::Callback;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogMode {
    /// Yes / cancel buttons.
    Confirm,
    /// A single OK button.
    Notice,
}

/// The dialog currently on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDialog {
    pub prompt: Prompt,
    pub mode: DialogMode,
}

struct Slot {
    dialog: ActiveDialog,
    reply: oneshot::Sender<bool>,
}

/// Single-slot dialog queue. Opening a new dialog while one is showing
/// cancels the old one.
#[derive(Default)]
pub struct DialogHandle {
    slot: RefCell<Option<Slot>>,
    listeners: RefCell<Vec<Callback<()>>>,
}

impl DialogHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, listener: Callback<()>) {
        self.listeners.borrow_mut().push(listener);
    }

    #[must_use]
    pub fn current(&self) -> Option<ActiveDialog> {
        self.slot.borrow().as_ref().map(|slot| slot.dialog.clone())
    }

    /// Close the current dialog with the user's answer.
    pub fn answer(&self, confirmed: bool) {
        let taken = self.slot.borrow_mut().take();
        if let Some(slot) = taken {
            // The waiting flow may already be gone.
            let _ = slot.reply.send(confirmed);
            self.changed();
        }
    }

    fn open(&self, prompt: &Prompt, mode: DialogMode) -> oneshot::Receiver<bool> {
        let (reply, rx) = oneshot::channel();
        let replaced = self.slot.borrow_mut().replace(Slot {
            dialog: ActiveDialog {
                prompt: prompt.clone(),
                mode,
            },
            reply,
        });
        if replaced.is_some() {
            log::debug!("dialog replaced; previous prompt cancelled");
        }
        self.changed();
        rx
    }

    fn changed(&self) {
        let listeners = self.listeners.borrow().clone();
        for listener in listeners {
            listener.emit(());
        }
    }
}

#[async_trait(?Send)]
impl ConfirmSurface for DialogHandle {
    async fn confirm(&self, prompt: &Prompt) -> Decision {
        let rx = self.open(prompt, DialogMode::Confirm);
        Decision::from_confirmed(rx.await.unwrap_or(false))
    }

    async fn notify(&self, prompt: &Prompt) {
        let rx = self.open(prompt, DialogMode::Notice);
        let _ = rx.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shop::PromptId;
    use futures::executor::block_on;

    #[test]
    fn confirm_resolves_with_the_answer() {
        let handle = DialogHandle::new();
        block_on(async {
            let prompt = Prompt::confirm_checkout();
            let mut pending = Box::pin(handle.confirm(&prompt));
            assert!(futures::poll!(pending.as_mut()).is_pending());
            let shown = handle.current().unwrap();
            assert_eq!(shown.prompt.id, PromptId::ConfirmCheckout);
            assert_eq!(shown.mode, DialogMode::Confirm);

            handle.answer(true);
            assert_eq!(pending.await, Decision::Confirmed);
        });
        assert!(handle.current().is_none());
    }

    #[test]
    fn replacing_a_dialog_cancels_the_first() {
        let handle = DialogHandle::new();
        block_on(async {
            let first_prompt = Prompt::confirm_remove();
            let second_prompt = Prompt::confirm_checkout();
            let mut first = Box::pin(handle.confirm(&first_prompt));
            assert!(futures::poll!(first.as_mut()).is_pending());
            let mut second = Box::pin(handle.confirm(&second_prompt));
            assert!(futures::poll!(second.as_mut()).is_pending());

            assert_eq!(first.await, Decision::Cancelled);
            handle.answer(true);
            assert_eq!(second.await, Decision::Confirmed);
        });
    }

    #[test]
    fn notice_waits_for_dismissal() {
        let handle = DialogHandle::new();
        block_on(async {
            let prompt = Prompt::checkout_succeeded();
            let mut notice = Box::pin(handle.notify(&prompt));
            assert!(futures::poll!(notice.as_mut()).is_pending());
            assert_eq!(handle.current().map(|d| d.mode), Some(DialogMode::Notice));
            handle.answer(true);
            notice.await;
        });
    }
}
