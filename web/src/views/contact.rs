use dioxus::prelude::*;
use ui::content::ContactChannel;
use ui::{ContactFormCard, Reveal};

const CONTACT_CHANNELS: &[ContactChannel] = &[
    ContactChannel {
        icon: "📍",
        title: "Address",
        details: "Multiple global offices",
        description: "San Francisco, London, Singapore, Berlin",
    },
    ContactChannel {
        icon: "📧",
        title: "Email",
        details: "contact@lifewood.tech",
        description: "General inquiries",
    },
    ContactChannel {
        icon: "📞",
        title: "Phone",
        details: "+1 (415) 555-0100",
        description: "Monday - Friday, 9am - 6pm",
    },
    ContactChannel {
        icon: "💬",
        title: "Social",
        details: "@LifewoodData",
        description: "Follow us on social media",
    },
];

#[component]
pub fn ContactPage() -> Element {
    rsx! {
        div { class: "page-section contact",
            h1 { class: "section-title", "Get In Touch" }
            p { class: "section-subtitle", "We'd love to hear from you. Let's start a conversation." }

            div { class: "contact-content",
                ContactFormCard {}

                div { class: "contact-info-container",
                    h2 { "Contact Information" }
                    div { class: "contact-info-grid",
                        for (i , channel) in CONTACT_CHANNELS.iter().enumerate() {
                            Reveal { key: "{channel.title}", delay_ms: (i as u32) * 100,
                                div { class: "contact-info-card",
                                    div { class: "info-icon", "{channel.icon}" }
                                    h3 { "{channel.title}" }
                                    p { class: "info-details", "{channel.details}" }
                                    p { class: "info-description", "{channel.description}" }
                                }
                            }
                        }
                    }

                    div { class: "map-container",
                        div { class: "map-placeholder",
                            div { class: "map-icon", "🗺️" }
                            p { "Visit us at any of our global locations" }
                        }
                    }
                }
            }
        }
    }
}
