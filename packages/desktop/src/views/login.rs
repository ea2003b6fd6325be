use dioxus::prelude::*;
use ui::views::LoginView;
use ui::{use_session, Page};

use crate::Route;

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let nav = use_navigator();

    if let Some(target) = Page::Login.redirect(session.is_signed_in()) {
        nav.replace(Route::from(target));
        return rsx! {};
    }

    rsx! {
        LoginView {
            on_authenticated: move |_| {
                nav.replace(Route::Dashboard {});
            },
            "Don't have an account? "
            Link { to: Route::Signup {}, "Sign up" }
        }
    }
}
