//! Route-aware navigation shell. The structural frame and the menu state
//! machine live in `ui`; this wires them to the router and the global
//! click-outside listener.

use dioxus::prelude::*;
use ui::hooks::use_click_outside;
use ui::nav::{NavItem, NavState, NAV_ITEMS};
use ui::Navbar;

use crate::{Route, LOGO};

#[component]
pub fn NavBar() -> Element {
    let mut state = use_signal(NavState::default);
    let mut container = use_signal(|| None::<web_sys::Element>);

    use_click_outside(
        container,
        EventHandler::new(move |()| {
            // Closed navbars stay untouched so stray clicks don't mark the
            // component dirty.
            if state.peek().is_open() {
                state.write().click_outside();
            }
        }),
    );

    let current = use_route::<Route>().to_string();
    let open_dropdown = state.read().open_dropdown;

    rsx! {
        Navbar {
            brand: rsx! {
                Link { class: "nav-logo", to: Route::HomePage {},
                    img { class: "nav-logo-img", alt: "Lifewood", src: LOGO }
                }
            },
            menu_open: state.read().menu_open,
            on_toggle_menu: move |_| state.write().toggle_menu(),
            onmounted: move |event: Event<MountedData>| {
                #[cfg(target_arch = "wasm32")]
                if let Some(element) = event.data().downcast::<web_sys::Element>().cloned() {
                    container.set(Some(element));
                }
                #[cfg(not(target_arch = "wasm32"))]
                let _ = (&event, &mut container);
            },

            for (i , item) in NAV_ITEMS.iter().enumerate() {
                {match *item {
                    NavItem::Leaf { path, label } => rsx! {
                        li { key: "{i}", class: "nav-item",
                            NavLeafLink {
                                path,
                                label,
                                class: link_class("nav-link", item.is_active(&current)),
                                on_follow: move |()| state.write().follow_link(),
                            }
                        }
                    },
                    NavItem::Group { label, children, .. } => rsx! {
                        li {
                            key: "{i}",
                            class: "nav-item has-dropdown",
                            onmouseenter: move |_| state.write().hover_group(i),
                            onmouseleave: move |_| state.write().leave_group(),
                            span { class: link_class("nav-link", item.is_active(&current)),
                                "{label}"
                                ChevronDown {}
                            }
                            ul {
                                class: if open_dropdown == Some(i) { "dropdown-menu active" } else { "dropdown-menu" },
                                for child in children.iter() {
                                    li { key: "{child.path}",
                                        NavLeafLink {
                                            path: child.path,
                                            label: child.label,
                                            class: link_class(
                                                "dropdown-link",
                                                ui::nav::path_matches(child.path, &current),
                                            ),
                                            on_follow: move |()| state.write().follow_link(),
                                        }
                                    }
                                }
                            }
                        }
                    },
                }}
            }
        }
    }
}

fn link_class(base: &str, active: bool) -> String {
    if active {
        format!("{base} active")
    } else {
        base.to_string()
    }
}

/// A single menu link. Falls back to a plain anchor for paths outside the
/// route table.
#[component]
fn NavLeafLink(
    path: &'static str,
    label: &'static str,
    class: String,
    on_follow: EventHandler<()>,
) -> Element {
    match path.parse::<Route>() {
        Ok(route) => rsx! {
            Link {
                class: class,
                to: route,
                onclick: move |_| on_follow.call(()),
                "{label}"
            }
        },
        Err(_) => rsx! {
            a { class: class, href: path, "{label}" }
        },
    }
}

#[component]
fn ChevronDown() -> Element {
    rsx! {
        svg {
            class: "nav-chevron",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2.5",
            view_box: "0 0 24 24",
            path {
                stroke_linecap: "round",
                stroke_linejoin: "round",
                d: "m6 9 6 6 6-6",
            }
        }
    }
}
