use dioxus::prelude::*;
use ui::content::ServiceCard;
use ui::{Reveal, TiltCard};

pub(crate) const SERVICE_CARDS: &[ServiceCard] = &[
    ServiceCard {
        icon: "🤖",
        title: "Machine Learning Models",
        description: "Custom ML solutions tailored to solve complex business challenges with predictive analytics and pattern recognition.",
    },
    ServiceCard {
        icon: "💬",
        title: "Natural Language Processing",
        description: "Advanced text analysis and understanding capabilities for intelligent document processing and communication.",
    },
    ServiceCard {
        icon: "👁️",
        title: "Computer Vision",
        description: "Image and video analysis powered by deep learning for automated visual understanding and classification.",
    },
    ServiceCard {
        icon: "📊",
        title: "Data Analytics",
        description: "Transforming raw data into actionable insights with comprehensive analytics and business intelligence tools.",
    },
    ServiceCard {
        icon: "🎯",
        title: "AI Strategy Consulting",
        description: "Expert guidance on implementing AI across your organization with best practices and strategic roadmaps.",
    },
    ServiceCard {
        icon: "⚙️",
        title: "Custom AI Development",
        description: "Bespoke AI solutions engineered from the ground up to meet your specific business requirements.",
    },
];

/// Grid of tilt cards shared between the services page and the initiatives
/// overview. Cards reveal on scroll with a per-card stagger.
#[component]
pub fn ServiceCardGrid() -> Element {
    rsx! {
        div { class: "cards-grid",
            for (i , card) in SERVICE_CARDS.iter().enumerate() {
                Reveal { key: "{i}", delay_ms: (i as u32) * 100,
                    TiltCard { class: "service-card",
                        div { class: "card-icon", "{card.icon}" }
                        h3 { "{card.title}" }
                        p { "{card.description}" }
                        div { class: "card-footer",
                            button { class: "card-btn", "Learn More →" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ServicesPage() -> Element {
    rsx! {
        section { class: "ai-section",
            div { class: "container",
                Reveal {
                    h1 { class: "section-title", "AI Services" }
                }
                p { class: "section-subtitle",
                    "Data collection, labeling, MLOps and model deployment services."
                }
                ServiceCardGrid {}
            }
        }
    }
}
