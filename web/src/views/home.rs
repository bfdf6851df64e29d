use dioxus::prelude::*;
use ui::content::{ServiceRow, ValueTab};
use ui::{CurvedMarquee, ServiceRows, ValueTabs};

use crate::Route;

const DATA_SERVICES: &[ServiceRow] = &[
    ServiceRow {
        title: "Audio",
        description: "Collection, labelling, voice categorization, music categorization, intelligent cs.",
        image: "https://images.unsplash.com/photo-1555949963-ff9fe0c870eb?auto=format&fit=crop&q=80&w=800",
        accent: "accent-green",
    },
    ServiceRow {
        title: "Video",
        description: "Collection, labelling, audit, live broadcast, subtitle generation",
        image: "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?auto=format&fit=crop&q=80&w=800",
        accent: "accent-saffron",
    },
    ServiceRow {
        title: "Image",
        description: "Collection, labelling, classification, audit, object detection and tagging",
        image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&q=80&w=800",
        accent: "accent-green",
    },
    ServiceRow {
        title: "Text",
        description: "Text, collection, labelling, transcriptions, utterance collection, sentiment analysis",
        image: "https://images.unsplash.com/photo-1563986768609-322da13575f3?auto=format&fit=crop&q=80&w=800",
        accent: "accent-saffron",
    },
];

const BRAND_VALUES: &[ValueTab] = &[
    ValueTab {
        number: "01",
        title: "Data Validation",
        content: "The goal is to create data that is consistent, accurate and complete, preventing data loss or errors in transfer, code or configuration. We verify that data conforms to predefined standards, rules or constraints, ensuring the information is trustworthy and fit for its intended purpose.",
        cta: "View Audit Protocols",
        image: "https://images.unsplash.com/photo-1620712943543-bcc4688e7485?auto=format&fit=crop&q=80&w=800",
    },
    ValueTab {
        number: "02",
        title: "Data Collection",
        content: "Lifewood delivers multi-modal data collection across text, audio, image, and video, supported by advanced workflows for categorization, labeling, tagging, transcription, sentiment analysis, and subtitle generation.",
        cta: "Explore Methodologies",
        image: "https://images.unsplash.com/photo-1552664730-d307ca884978?auto=format&fit=crop&q=80&w=800",
    },
    ValueTab {
        number: "03",
        title: "Data Acquisition",
        content: "We provide end-to-end data acquisition solutions—capturing, processing, and managing large-scale, diverse datasets.",
        cta: "Learn About Sourcing",
        image: "https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&q=80&w=800",
    },
    ValueTab {
        number: "04",
        title: "Data Curation",
        content: "We sift, select and index data to ensure reliability, accessibility and ease of classification. Data can be curated to support business decisions, academic research, genealogies, scientific research and more.",
        cta: "See Curation Process",
        image: "https://images.unsplash.com/photo-1522071820081-009f0129c71c?auto=format&fit=crop&q=80&w=800",
    },
    ValueTab {
        number: "05",
        title: "Data Annotation",
        content: "In the age of AI, data is the fuel for all analytic and machine learning. With our in-depth library of services, we're here to be an integral part of your digital strategy, accelerating your organization's cognitive systems development.",
        cta: "Start Your Project",
        image: "https://images.unsplash.com/photo-1555949963-ff9fe0c870eb?auto=format&fit=crop&q=80&w=800",
    },
];

#[component]
pub fn HomePage() -> Element {
    let mut parallax = use_signal(String::new);

    rsx! {
        section {
            class: "hero",
            style: "{parallax}",
            onmousemove: move |event| {
                #[cfg(target_arch = "wasm32")]
                {
                    let width = web_sys::window()
                        .and_then(|w| w.inner_width().ok())
                        .and_then(|v| v.as_f64())
                        .unwrap_or_default();
                    if width > 0.0 {
                        let x = event.client_coordinates().x;
                        let degrees = ((x / width) * 10.0 - 5.0) * 0.3;
                        parallax.set(format!("transform: rotateY({degrees:.2}deg)"));
                    }
                }
                #[cfg(not(target_arch = "wasm32"))]
                let _ = (&event, &mut parallax);
            },
            div { class: "hero-content",
                h1 { class: "hero-title", "Transforming Data into Innovation" }
                p { class: "hero-subtitle",
                    "Harnessing the power of artificial intelligence and technology to build a sustainable future for everyone."
                }
                div { class: "hero-cta",
                    Link {
                        class: "btn btn-primary",
                        to: Route::InitiativesPage {},
                        "Explore Our AI Solutions"
                    }
                    Link {
                        class: "btn btn-secondary",
                        to: Route::ContactPage {},
                        "Get In Touch"
                    }
                }
            }
            div { class: "hero-bg-decoration" }
        }

        CurvedMarquee {}

        section { class: "home-services",
            div { class: "container-wide",
                h2 { class: "home-services-title", "AI Data Services" }
                p { class: "home-services-subtitle",
                    "Lifewood offers AI and IT services that enhance decision-making, reduce costs, and improve productivity to optimize organizational performance."
                }
                ServiceRows {
                    rows: DATA_SERVICES,
                    cta: rsx! {
                        Link { class: "service-row-cta", to: Route::ServicesPage {}, "Learn more →" }
                    },
                }
            }
        }

        ValueTabs { tabs: BRAND_VALUES }
    }
}
