use dioxus::prelude::*;
use ui::views::DashboardView;
use ui::{use_session, Page};

use crate::Route;

/// Dashboard page. Sends visitors without a session to the login page.
#[component]
pub fn Dashboard() -> Element {
    let session = use_session();
    let nav = use_navigator();

    if let Some(target) = Page::Dashboard.redirect(session.is_signed_in()) {
        tracing::debug!("no session, redirecting to login");
        nav.replace(Route::from(target));
        return rsx! {};
    }

    rsx! {
        DashboardView {
            on_signed_out: move |_| {
                nav.replace(Route::Login {});
            },
        }
    }
}
