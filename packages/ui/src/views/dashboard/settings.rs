use dioxus::prelude::*;
use store::UserRecord;

/// Read-only account summary.
#[component]
pub fn SettingsTab(user: UserRecord) -> Element {
    rsx! {
        div {
            class: "card settings-card",
            h3 { class: "card-title", "Account" }
            dl {
                class: "settings-list",
                dt { "Email" }
                dd { "{user.email}" }
                dt { "Account type" }
                dd { "{user.role.label()}" }
            }
        }
    }
}
