use dioxus::prelude::*;
use ui::views::SignupView;
use ui::{use_session, Page};

use crate::Route;

#[component]
pub fn Signup() -> Element {
    let session = use_session();
    let nav = use_navigator();

    if let Some(target) = Page::Signup.redirect(session.is_signed_in()) {
        nav.replace(Route::from(target));
        return rsx! {};
    }

    rsx! {
        SignupView {
            on_authenticated: move |_| {
                nav.replace(Route::Dashboard {});
            },
            "Already have an account? "
            Link { to: Route::Login {}, "Log in" }
        }
    }
}
