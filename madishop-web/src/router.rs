use crate::shop::NavTarget;
use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/cart")]
    Cart,
    #[at("/login")]
    Login,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl From<NavTarget> for Route {
    fn from(target: NavTarget) -> Self {
        match target {
            NavTarget::Home => Self::Home,
            NavTarget::Cart => Self::Cart,
            NavTarget::Login => Self::Login,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_targets_share_paths_with_routes() {
        for target in [NavTarget::Home, NavTarget::Cart, NavTarget::Login] {
            assert_eq!(Route::from(target).to_path(), target.path());
        }
    }

    #[test]
    fn paths_resolve_to_routes() {
        assert_eq!(Route::recognize("/cart"), Some(Route::Cart));
        assert_eq!(Route::recognize("/login"), Some(Route::Login));
        assert_eq!(Route::not_found_route(), Some(Route::NotFound));
    }
}
