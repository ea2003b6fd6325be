use dioxus::prelude::*;

use super::mock::{views_percent, Stat, StatKind, STATS, WEEKLY_VIEWS};
use crate::icons::{FaBriefcase, FaChartLine, FaUsers};
use crate::Icon;

/// Statistics card.
#[component]
pub fn StatCard(stat: Stat) -> Element {
    rsx! {
        div {
            class: "card stat-card",
            div {
                class: "stat-icon",
                style: "color: {stat.accent};",
                {match stat.kind {
                    StatKind::Applications => rsx! { Icon { icon: FaBriefcase, width: 20, height: 20 } },
                    StatKind::Interviews => rsx! { Icon { icon: FaUsers, width: 20, height: 20 } },
                    StatKind::ProfileViews => rsx! { Icon { icon: FaChartLine, width: 20, height: 20 } },
                }}
            }
            div {
                h3 { class: "stat-value", "{stat.value}" }
                p { class: "stat-label", "{stat.label}" }
            }
        }
    }
}

#[component]
pub fn OverviewTab() -> Element {
    rsx! {
        div {
            class: "stats-grid",
            for stat in STATS {
                StatCard { key: "{stat.label}", stat: stat }
            }
        }

        div {
            class: "card views-card",
            h3 { class: "card-title", "Profile Views Analytics" }
            div {
                class: "views-bars",
                for day in WEEKLY_VIEWS {
                    div {
                        key: "{day.day}",
                        class: "views-column",
                        title: "{day.views} views",
                        div {
                            class: "views-bar",
                            style: "height: {views_percent(day.views)}%;",
                        }
                        span { class: "views-day", "{day.day}" }
                    }
                }
            }
        }
    }
}
