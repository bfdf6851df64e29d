//! Clickable tab showcase for the data lifecycle values. The active tab's
//! image crossfades in on the left while its panel expands on the right.

use crate::content::ValueTab;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ValueTabsProps {
    pub tabs: &'static [ValueTab],
}

#[component]
pub fn ValueTabs(props: ValueTabsProps) -> Element {
    let mut active = use_signal(|| 0_usize);

    rsx! {
        section { class: "value-tabs",
            div { class: "value-tabs-images",
                for (i , tab) in props.tabs.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: format!(
                            "value-tab-image {}",
                            if active() == i { "is-active" } else { "" },
                        ),
                        img { alt: tab.title, src: tab.image }
                        div { class: "value-tab-image-overlay" }
                    }
                }
            }
            div { class: "value-tabs-list",
                for (i , tab) in props.tabs.iter().enumerate() {
                    div {
                        key: "{i}",
                        class: format!(
                            "value-tab {}",
                            if active() == i { "is-active" } else { "" },
                        ),
                        onclick: move |_| active.set(i),
                        div { class: "value-tab-head",
                            span { class: "value-tab-number", "{tab.number}" }
                            h3 { "{tab.title}" }
                        }
                        if active() == i {
                            div { class: "value-tab-panel",
                                p { "{tab.content}" }
                                span { class: "value-tab-cta", "{tab.cta}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
