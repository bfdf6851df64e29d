use dioxus::prelude::*;

/// Page chrome shared by every route: palette background and a full-height
/// column the shell and views flow into.
#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
        div { class: "site",
            div { class: "site-inner", {children} }
        }
    }
}
