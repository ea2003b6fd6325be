//! Signed-in dashboard: sidebar navigation, header and the active tab.

use dioxus::prelude::*;

mod jobs;
pub mod mock;
mod overview;
mod profile;
mod settings;
mod tabs;

pub use jobs::JobsTab;
pub use overview::{OverviewTab, StatCard};
pub use profile::ProfileTab;
pub use settings::SettingsTab;
pub use tabs::DashboardTab;

use crate::icons::{FaBell, FaBriefcase, FaGear, FaHouse, FaRightFromBracket, FaUser};
use crate::{use_session, Icon};

fn tab_icon(tab: DashboardTab) -> Element {
    match tab {
        DashboardTab::Overview => rsx! { Icon { icon: FaHouse, width: 16, height: 16 } },
        DashboardTab::Jobs => rsx! { Icon { icon: FaBriefcase, width: 16, height: 16 } },
        DashboardTab::Profile => rsx! { Icon { icon: FaUser, width: 16, height: 16 } },
        DashboardTab::Settings => rsx! { Icon { icon: FaGear, width: 16, height: 16 } },
    }
}

/// Dashboard view.
///
/// Renders nothing without a session; platform views redirect to login before
/// reaching this point.
#[component]
pub fn DashboardView(
    /// Called after logout has cleared the session.
    on_signed_out: EventHandler<()>,
) -> Element {
    let mut session = use_session();
    let mut active = use_signal(DashboardTab::default);

    let Some(user) = session.user() else {
        return rsx! {};
    };
    let current = active();

    let handle_logout = move |_| {
        session.sign_out();
        on_signed_out.call(());
    };

    rsx! {
        div {
            class: "dashboard",

            aside {
                class: "dashboard-sidebar",
                h2 {
                    class: "brand",
                    Icon { icon: FaBriefcase, width: 18, height: 18 }
                    "JobPortal"
                }

                nav {
                    class: "dashboard-nav",
                    for tab in DashboardTab::ALL {
                        button {
                            key: "{tab.id()}",
                            class: if current == tab { "nav-item active" } else { "nav-item" },
                            onclick: move |_| active.set(tab),
                            {tab_icon(tab)}
                            span { "{tab.label()}" }
                        }
                    }
                }

                div {
                    class: "dashboard-sidebar-bottom",
                    button {
                        class: "nav-item",
                        onclick: handle_logout,
                        Icon { icon: FaRightFromBracket, width: 16, height: 16 }
                        span { "Logout" }
                    }
                }
            }

            div {
                class: "dashboard-main",

                header {
                    class: "dashboard-header",
                    h1 { "{current.title()}" }
                    div {
                        class: "dashboard-header-actions",
                        button {
                            class: "icon-button",
                            title: "Notifications",
                            Icon { icon: FaBell, width: 16, height: 16 }
                        }
                        div { class: "avatar", title: "{user.name}", "{user.initial()}" }
                    }
                }

                div {
                    class: "dashboard-content",
                    {match current {
                        DashboardTab::Overview => rsx! { OverviewTab {} },
                        DashboardTab::Jobs => rsx! { JobsTab {} },
                        DashboardTab::Profile => rsx! { ProfileTab {} },
                        DashboardTab::Settings => rsx! { SettingsTab { user: user.clone() } },
                    }}
                }
            }
        }
    }
}
