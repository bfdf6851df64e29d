use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct NavbarProps {
    /// Logo / brand link, supplied by the app so it can be a router link.
    pub brand: Element,
    /// Whether the mobile menu is expanded.
    pub menu_open: bool,
    pub on_toggle_menu: EventHandler<MouseEvent>,
    /// Container mount hook; the app uses it to scope click-outside checks.
    pub onmounted: EventHandler<Event<MountedData>>,
    /// The menu entries.
    pub children: Element,
}

/// Structural frame of the navigation shell: brand area, hamburger toggle
/// and the (collapsible) menu list. Entry content and routing are injected
/// by the caller.
#[component]
pub fn Navbar(props: NavbarProps) -> Element {
    rsx! {
        nav { class: "navbar",
            div {
                class: "nav-container",
                onmounted: move |evt| props.onmounted.call(evt),
                {props.brand}

                button {
                    class: "menu-toggle",
                    aria_label: "Toggle menu",
                    onclick: move |evt| props.on_toggle_menu.call(evt),
                    span {}
                    span {}
                    span {}
                }

                ul {
                    class: if props.menu_open { "nav-menu active" } else { "nav-menu" },
                    {props.children}
                }
            }
        }
    }
}
