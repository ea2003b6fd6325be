use dioxus::prelude::*;
use views::{Dashboard, Login, Signup};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Root {},
    #[route("/login")]
    Login {},
    #[route("/signup")]
    Signup {},
    #[route("/dashboard")]
    Dashboard {},
}

fn main() {
    // JOBPORTAL_API_URL may come from a local .env during development
    dotenvy::dotenv().ok();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = use_hook(ui::load_config);

    rsx! {
        document::Link { rel: "stylesheet", href: ui::PORTAL_CSS }
        ui::SessionProvider {
            config: config,
            Router::<Route> {}
        }
    }
}

impl From<ui::Page> for Route {
    fn from(page: ui::Page) -> Self {
        match page {
            ui::Page::Root => Route::Root {},
            ui::Page::Login => Route::Login {},
            ui::Page::Signup => Route::Signup {},
            ui::Page::Dashboard => Route::Dashboard {},
        }
    }
}

/// Redirect `/` to the dashboard or the login page.
#[component]
fn Root() -> Element {
    let session = ui::use_session();
    let nav = use_navigator();

    if let Some(target) = ui::Page::Root.redirect(session.is_signed_in()) {
        nav.replace(Route::from(target));
    }

    rsx! {}
}
