use dioxus::prelude::*;

const STATEMENT: &str =
    "We empower our company and our clients to realize the transformative power of AI";

/// Per-word stagger in milliseconds.
const WORD_STEP_MS: usize = 100;

#[component]
pub fn AboutPage() -> Element {
    rsx! {
        section { class: "about-us",
            div { class: "about-us-container",
                div { class: "about-us-content",
                    p { class: "about-us-text",
                        for (i , word) in STATEMENT.split_whitespace().enumerate() {
                            span {
                                key: "{i}",
                                class: "word",
                                style: format!("animation-delay: {}ms", i * WORD_STEP_MS),
                                "{word}"
                            }
                        }
                    }
                }
            }
        }
    }
}
