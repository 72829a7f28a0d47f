use crate::i18n::t;
use crate::shop::{NavTarget, Navigator, RouterNavigator, WebAuthStore};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, Clone)]
pub struct LoginPageProps {
    pub auth: Rc<WebAuthStore>,
    pub on_logged_in: Callback<()>,
}

impl PartialEq for LoginPageProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.auth, &other.auth) && self.on_logged_in == other.on_logged_in
    }
}

/// Demo sign-in: any submit stores a session token.
#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let navigator = RouterNavigator::new(use_navigator());
    let on_submit = {
        let auth = props.auth.clone();
        let done = props.on_logged_in.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            auth.login("madishop-session");
            done.emit(());
            navigator.navigate(NavTarget::Home);
        })
    };

    html! {
        <section class="container my-4 login">
            <h2>{ t("login.title") }</h2>
            <p>{ t("login.message") }</p>
            <form onsubmit={on_submit}>
                <button type="submit" class="btn btn-primary">{ t("login.submit") }</button>
            </form>
        </section>
    }
}
