use dioxus::prelude::*;

use super::mock::APPLICATIONS;

#[component]
pub fn JobsTab() -> Element {
    rsx! {
        div {
            class: "card job-list",
            for job in APPLICATIONS {
                div {
                    key: "{job.role}",
                    class: "job-row",
                    div {
                        class: "job-main",
                        div { class: "job-logo", "{job.logo}" }
                        div {
                            h3 { class: "job-role", "{job.role}" }
                            p { class: "job-meta", "{job.company} \u{2022} Applied {job.applied}" }
                        }
                    }
                    span { class: job.status.class(), "{job.status.label()}" }
                }
            }
        }
    }
}
