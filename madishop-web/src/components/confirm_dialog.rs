use crate::components::modal::Modal;
use crate::dialog::{ActiveDialog, DialogMode};
use crate::i18n::{t, t_or};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub dialog: Option<ActiveDialog>,
    /// `true` for yes/OK, `false` for cancel or dismiss.
    pub on_answer: Callback<bool>,
}

#[function_component(ConfirmDialog)]
pub fn confirm_dialog(props: &Props) -> Html {
    let on_close = {
        let cb = props.on_answer.clone();
        Callback::from(move |()| cb.emit(false))
    };
    let on_yes = {
        let cb = props.on_answer.clone();
        Callback::from(move |_: MouseEvent| cb.emit(true))
    };
    let on_cancel = {
        let cb = props.on_answer.clone();
        Callback::from(move |_: MouseEvent| cb.emit(false))
    };

    let Some(dialog) = props.dialog.as_ref() else {
        return html! {
            <Modal open={false} title={AttrValue::default()} on_close={on_close} />
        };
    };

    let key = dialog.prompt.id.key();
    let title = t_or(&format!("{key}.title"), &dialog.prompt.title);
    let message = t_or(&format!("{key}.message"), &dialog.prompt.message);
    let tone = format!("modal--{}", dialog.prompt.kind.as_str());

    let buttons = match dialog.mode {
        DialogMode::Confirm => html! {
            <>
                <button type="button" class="btn btn-primary confirm-yes" onclick={on_yes}>
                    { t("dialog.yes") }
                </button>
                <button type="button" class="btn confirm-cancel" onclick={on_cancel}>
                    { t("dialog.cancel") }
                </button>
            </>
        },
        DialogMode::Notice => html! {
            <button type="button" class="btn btn-primary confirm-ok" onclick={on_yes}>
                { t("dialog.ok") }
            </button>
        },
    };

    html! {
        <Modal
            open={true}
            title={AttrValue::from(title)}
            description={Some(AttrValue::from(message))}
            class={Some(AttrValue::from(tone))}
            on_close={on_close}
        >
            <div class="modal__actions">{ buttons }</div>
        </Modal>
    }
}
