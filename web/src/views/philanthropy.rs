use dioxus::prelude::*;
use ui::Reveal;

const HERO_IMAGE: &str =
    "https://images.unsplash.com/photo-1488521787991-ed7bbaae773c?w=1600&q=80&auto=format&fit=crop";

const AFRICA_MAP_URL: &str = "https://lifewoodafricamap.vercel.app/";

struct ImpactRow {
    heading: &'static str,
    body: &'static str,
}

const IMPACT_ROWS: &[ImpactRow] = &[
    ImpactRow {
        heading: "Impact",
        body: "Through purposeful partnerships and sustainable investment, we empower communities across Africa and the Indian sub-continent to create lasting economic and social transformation.",
    },
    ImpactRow {
        heading: "Partnership",
        body: "In partnership with our philanthropic partners, Lifewood has expanded operations in South Africa, Nigeria, Republic of the Congo, Democratic Republic of the Congo, Ghana, Madagascar, Benin, Uganda, Kenya, Ivory Coast, Egypt, Ethiopia, Niger, Tanzania, Namibia, Zambia, Zimbabwe, Liberia, Sierra Leone, and Bangladesh.",
    },
    ImpactRow {
        heading: "Application",
        body: "This requires the application of our methods and experience for the development of people in under resourced economies.",
    },
    ImpactRow {
        heading: "Expanding",
        body: "We are expanding access to training, establishing equitable wage structures and career and leadership progression to create sustainable change, by equipping individuals to take the lead and grow the business for themselves for the long term benefit of everyone.",
    },
];

#[component]
pub fn PhilanthropyPage() -> Element {
    rsx! {
        div { class: "page-section philanthropy",
            div { class: "philanthropy-hero",
                img { class: "philanthropy-hero-image", alt: "Philanthropy and Community", src: HERO_IMAGE }
                div { class: "philanthropy-hero-overlay",
                    h1 { "Transforming Communities" br {} "Worldwide" }
                }
            }

            div { class: "philanthropy-vision",
                p {
                    "Our vision is of a world where financial investment plays a central role in solving the social and environmental challenges facing the global community, specifically in Africa and the Indian sub-continent."
                }
            }

            div { class: "map-frame map-frame-wide",
                iframe {
                    class: "map-iframe",
                    src: AFRICA_MAP_URL,
                    title: "Lifewood Africa Impact Map",
                    allowfullscreen: true,
                }
            }

            div { class: "impact-rows",
                for (i , row) in IMPACT_ROWS.iter().enumerate() {
                    Reveal { key: "{i}",
                        div { class: "impact-row",
                            div { class: "impact-row-heading",
                                h2 { "{row.heading}" }
                            }
                            div { class: "impact-row-body",
                                p { "{row.body}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
