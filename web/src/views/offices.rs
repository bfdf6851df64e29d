use dioxus::prelude::*;
use ui::{MarqueeDirection, MarqueeRow, Reveal};

const ROW_AMERICAS_EUROPE: &[&str] = &[
    "United States",
    "Brazil",
    "United Kingdom",
    "Germany",
    "Finland",
];
const ROW_AFRICA_ASIA: &[&str] = &[
    "Africa",
    "South Africa",
    "Madagascar",
    "Middle East",
    "India",
    "Bangladesh",
    "China",
    "Thailand",
    "Malaysia",
    "Vietnam",
];
const ROW_PACIFIC: &[&str] = &[
    "Hongkong",
    "Philippines",
    "Indonesia",
    "Japan",
    "Australia",
];

const OFFICE_PHOTOS: &[&str] = &[
    "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&w=400&q=80",
    "https://images.unsplash.com/photo-1522071820081-009f0129c71c?auto=format&fit=crop&w=400&q=80",
    "https://images.unsplash.com/photo-1521737604893-d14cc237f11d?auto=format&fit=crop&w=400&q=80",
    "https://images.unsplash.com/photo-1556761175-5973dc0f32e7?auto=format&fit=crop&w=400&q=80",
    "https://images.unsplash.com/photo-1517048676732-d65bc937f952?auto=format&fit=crop&w=400&q=80",
    "https://images.unsplash.com/photo-1531482615713-2afd69097998?auto=format&fit=crop&w=400&q=80",
    "https://images.unsplash.com/photo-1573164713988-8665fc963095?auto=format&fit=crop&w=400&q=80",
    "https://images.unsplash.com/photo-1519389950473-47ba0277781c?auto=format&fit=crop&w=400&q=80",
    "https://images.unsplash.com/photo-1600880292203-757bb62b4baf?auto=format&fit=crop&w=400&q=80",
    "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab?auto=format&fit=crop&w=400&q=80",
];

const WORLD_MAP_URL: &str = "https://lifewoodworldwidemap.vercel.app/";

#[component]
pub fn OfficesPage() -> Element {
    rsx! {
        div { class: "offices-page",
            div { class: "container",
                Reveal {
                    h1 { class: "section-title", "Largest Global Data Collection Resources Distribution" }
                }
                p { class: "section-subtitle", "Our global office locations." }
            }

            div { class: "marquee-band",
                MarqueeRow {
                    items: ROW_AMERICAS_EUROPE,
                    photos: OFFICE_PHOTOS,
                    direction: MarqueeDirection::Right,
                    repeat: 4_usize,
                    chip_class: "chip-serpent",
                }
                MarqueeRow {
                    items: ROW_AFRICA_ASIA,
                    photos: OFFICE_PHOTOS,
                    direction: MarqueeDirection::Left,
                    repeat: 3_usize,
                    photo_offset: 3_usize,
                    chip_class: "chip-castleton",
                }
                MarqueeRow {
                    items: ROW_PACIFIC,
                    photos: OFFICE_PHOTOS,
                    direction: MarqueeDirection::Right,
                    repeat: 4_usize,
                    photo_offset: 6_usize,
                    chip_class: "chip-saffron",
                }
            }

            div { class: "container",
                div { class: "map-frame",
                    iframe {
                        class: "map-iframe",
                        src: WORLD_MAP_URL,
                        title: "Lifewood Worldwide Map",
                        allowfullscreen: true,
                    }
                }
            }
        }
    }
}
