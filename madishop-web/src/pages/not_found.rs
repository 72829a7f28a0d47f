use crate::i18n::t;
use crate::shop::{NavTarget, Navigator, RouterNavigator};
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigator = RouterNavigator::new(use_navigator());
    let go_home = Callback::from(move |_: MouseEvent| navigator.navigate(NavTarget::Home));

    html! {
        <section class="container my-4 not-found" aria-live="assertive">
            <h1>{ t("not_found.title") }</h1>
            <p>{ t("not_found.message") }</p>
            <button type="button" class="btn btn-secondary" onclick={go_home}>
                { t("not_found.back") }
            </button>
        </section>
    }
}
