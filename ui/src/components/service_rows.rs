//! Hover-expanding rows for the AI data services (audio / video / image /
//! text). One row is open at a time; the open row reveals its description
//! and an optional call-to-action supplied by the caller.

use crate::content::ServiceRow;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ServiceRowsProps {
    pub rows: &'static [ServiceRow],
    /// Rendered inside whichever row is expanded.
    #[props(optional, default)]
    pub cta: Option<Element>,
}

#[component]
pub fn ServiceRows(props: ServiceRowsProps) -> Element {
    let mut open = use_signal(|| None::<usize>);

    rsx! {
        div {
            class: "service-rows",
            onmouseleave: move |_| open.set(None),
            for (i , row) in props.rows.iter().enumerate() {
                div {
                    key: "{i}",
                    class: format!(
                        "service-row {} {}",
                        row.accent,
                        if open() == Some(i) { "is-open" } else { "" },
                    ),
                    onmouseenter: move |_| open.set(Some(i)),
                    div { class: "service-row-head",
                        span { class: "service-row-number", {format!("{:02}", i + 1)} }
                        h3 { class: "service-row-title", "{row.title}" }
                    }
                    div { class: "service-row-body",
                        img { class: "service-row-image", alt: "", src: row.image }
                        p { "{row.description}" }
                        if open() == Some(i) {
                            {props.cta.clone()}
                        }
                    }
                }
            }
        }
    }
}
