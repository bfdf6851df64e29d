use dioxus::prelude::*;
use ui::content::{Office, Stat};
use ui::{Reveal, StatItem};

const STATS: &[Stat] = &[
    Stat {
        value: "150+",
        label: "Team Members",
    },
    Stat {
        value: "98%",
        label: "Client Satisfaction",
    },
    Stat {
        value: "50+",
        label: "Projects Delivered",
    },
    Stat {
        value: "12",
        label: "Years in Business",
    },
];

const OFFICES: &[Office] = &[
    Office {
        city: "San Francisco",
        country: "USA",
        address: "350 Fifth Avenue, San Francisco, CA 94107",
        phone: "+1 (415) 555-0100",
    },
    Office {
        city: "London",
        country: "UK",
        address: "30 St Mary Axe, London, EC3A 8BF",
        phone: "+44 (20) 7946 0958",
    },
    Office {
        city: "Singapore",
        country: "Singapore",
        address: "8 Marina Boulevard, Singapore, 018981",
        phone: "+65 6653 6100",
    },
    Office {
        city: "Berlin",
        country: "Germany",
        address: "Unter den Linden 77, Berlin, 10117",
        phone: "+49 (30) 27901111",
    },
];

#[component]
pub fn CompanyPage() -> Element {
    rsx! {
        section { class: "company-section",
            div { class: "container",
                Reveal {
                    h1 { class: "section-title", "Our Company" }
                }
                p { class: "section-subtitle", "Building tomorrow's innovations today" }

                section { class: "about-section",
                    div { class: "about-content",
                        Reveal {
                            div { class: "about-text",
                                h2 { "About Lifewood Data Technology" }
                                p {
                                    "Founded with a mission to democratize artificial intelligence and data science, Lifewood Data Technology has grown into a global leader in AI innovation. We believe that technology should serve humanity and contribute to building a sustainable, equitable future."
                                }
                                p {
                                    "Our team of world-class engineers, scientists, and visionaries work collaboratively to solve complex challenges across industries. We're committed to pushing the boundaries of what's possible while maintaining the highest standards of ethical AI development."
                                }
                            }
                        }
                        div { class: "about-stats",
                            for (i , stat) in STATS.iter().enumerate() {
                                Reveal { key: "{i}", delay_ms: (i as u32) * 100,
                                    StatItem { stat: *stat }
                                }
                            }
                        }
                    }
                }

                section { class: "offices-section",
                    Reveal {
                        h2 { "Our Offices" }
                    }
                    div { class: "offices-grid",
                        for (i , office) in OFFICES.iter().enumerate() {
                            Reveal { key: "{i}", delay_ms: (i as u32) * 150,
                                div { class: "office-card",
                                    div { class: "office-icon", "📍" }
                                    h3 { "{office.city}" }
                                    p { class: "office-country", "{office.country}" }
                                    p { class: "office-address", "{office.address}" }
                                    p { class: "office-phone",
                                        a { href: "tel:{office.phone}", "{office.phone}" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
