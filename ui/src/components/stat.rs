use crate::content::Stat;
use dioxus::prelude::*;

#[component]
pub fn StatItem(stat: Stat) -> Element {
    rsx! {
        div { class: "stat-item",
            div { class: "stat-number", "{stat.value}" }
            div { class: "stat-label", "{stat.label}" }
        }
    }
}
