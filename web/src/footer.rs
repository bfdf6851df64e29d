use chrono::{Datelike, Utc};
use dioxus::prelude::*;

use crate::{Route, LOGO};

#[derive(Clone, PartialEq)]
struct FooterLink {
    label: &'static str,
    route: Route,
}

#[component]
pub fn SiteFooter() -> Element {
    let current_year = Utc::now().year();

    let company = vec![
        FooterLink {
            label: "About Us",
            route: Route::AboutPage {},
        },
        FooterLink {
            label: "Careers",
            route: Route::CareersPage {},
        },
        FooterLink {
            label: "Offices",
            route: Route::OfficesPage {},
        },
    ];
    let initiatives = vec![
        FooterLink {
            label: "AI Services",
            route: Route::ServicesPage {},
        },
        FooterLink {
            label: "AI Projects",
            route: Route::ProjectsPage {},
        },
        FooterLink {
            label: "Philanthropy",
            route: Route::PhilanthropyPage {},
        },
    ];
    let contact = vec![
        FooterLink {
            label: "Get In Touch",
            route: Route::ContactPage {},
        },
        FooterLink {
            label: "Support",
            route: Route::ContactPage {},
        },
    ];

    rsx! {
        footer { class: "footer",
            div { class: "footer-container",
                div { class: "footer-content",
                    div { class: "footer-section footer-brand",
                        Link { class: "footer-logo", to: Route::HomePage {},
                            img { class: "footer-logo-img", alt: "Lifewood", src: LOGO }
                            span { class: "footer-logo-text", "Lifewood" }
                        }
                        p { class: "footer-tagline",
                            "Empowering companies with transformative AI solutions."
                        }
                    }

                    FooterSection { title: "Company", links: company }
                    FooterSection { title: "AI Initiatives", links: initiatives }
                    FooterSection { title: "Contact", links: contact }
                }

                div { class: "footer-bottom",
                    p { class: "footer-copyright",
                        "© {current_year} Lifewood. All rights reserved."
                    }
                    div { class: "footer-legal",
                        a { href: "/privacy", "Privacy Policy" }
                        span { class: "separator", "•" }
                        a { href: "/terms", "Terms of Service" }
                    }
                }
            }
        }
    }
}

#[component]
fn FooterSection(title: &'static str, links: Vec<FooterLink>) -> Element {
    rsx! {
        div { class: "footer-section",
            h4 { class: "footer-section-title", "{title}" }
            ul { class: "footer-links",
                for link in links {
                    li { key: "{link.label}",
                        Link { to: link.route.clone(), "{link.label}" }
                    }
                }
            }
        }
    }
}
