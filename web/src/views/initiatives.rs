use dioxus::prelude::*;
use ui::Reveal;

use super::projects::ProjectGrid;
use super::services::ServiceCardGrid;

#[component]
pub fn InitiativesPage() -> Element {
    rsx! {
        section { class: "ai-section",
            div { class: "container",
                Reveal {
                    h1 { class: "section-title", "AI Initiatives" }
                }
                p { class: "section-subtitle", "Pioneering AI solutions for a better tomorrow" }

                div { class: "ai-subsection",
                    h2 { class: "subsection-title", "Our AI Services" }
                    ServiceCardGrid {}
                }

                div { class: "ai-subsection",
                    h2 { class: "subsection-title", "Featured Projects" }
                    ProjectGrid {}
                }
            }
        }
    }
}
