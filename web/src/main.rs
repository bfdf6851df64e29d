use dioxus::prelude::*;

use footer::SiteFooter;
use nav::NavBar;
use views::{
    AboutPage, CareersPage, CompanyPage, ContactPage, HomePage, InitiativesPage, OfficesPage,
    PhilanthropyPage, ProjectsPage, ServicesPage,
};

mod footer;
mod nav;
mod views;

#[derive(Debug, Clone, Routable, PartialEq, Eq, Hash)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        HomePage {},
        #[route("/ai-initiatives")]
        InitiativesPage {},
        #[route("/ai-services")]
        ServicesPage {},
        #[route("/ai-projects")]
        ProjectsPage {},
        #[route("/company")]
        CompanyPage {},
        #[route("/about")]
        AboutPage {},
        #[route("/offices")]
        OfficesPage {},
        #[route("/philanthropy")]
        PhilanthropyPage {},
        #[route("/careers")]
        CareersPage {},
        #[route("/contact")]
        ContactPage {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const LOGO: Asset = asset!("/assets/logo.svg");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: LOGO }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Title { "Lifewood | AI Data Services" }

        Router::<Route> {}
    }
}

fn scroll_to_top() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}

#[component]
fn AppShell() -> Element {
    let route = use_route::<Route>();

    // Re-runs for every navigation that lands on a different route, after
    // the new view is in the tree.
    use_effect(use_reactive!(|(route,)| {
        let _ = route;
        scroll_to_top();
    }));

    rsx! {
        ui::Layout {
            NavBar {}
            main { class: "page-outlet", Outlet::<Route> {} }
            SiteFooter {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const PATHS: &[&str] = &[
        "/",
        "/ai-initiatives",
        "/ai-services",
        "/ai-projects",
        "/company",
        "/about",
        "/offices",
        "/philanthropy",
        "/careers",
        "/contact",
    ];

    #[test]
    fn every_path_maps_to_exactly_one_route() {
        let mut seen = HashSet::new();
        for path in PATHS {
            let route: Route = path.parse().unwrap_or_else(|_| {
                panic!("{path} does not resolve to a route");
            });
            assert_eq!(&route.to_string(), path, "route does not round-trip");
            assert!(seen.insert(route), "{path} resolved to a duplicate route");
        }
    }

    /// The scroll reset is an effect keyed on the current route, so it
    /// re-fires exactly when the route value changes. Any two navigation
    /// targets must therefore compare unequal; a pair that compared equal
    /// would navigate without resetting scroll.
    #[test]
    fn scroll_reset_key_distinguishes_every_navigation_target() {
        let routes: Vec<Route> = PATHS
            .iter()
            .map(|path| path.parse().unwrap_or_else(|_| panic!("bad path {path}")))
            .collect();
        for (i, a) in routes.iter().enumerate() {
            assert_eq!(a, a, "route must equal itself or the effect loops");
            for b in routes.iter().skip(i + 1) {
                assert_ne!(a, b, "{a} and {b} would share one scroll reset");
            }
        }
    }

    #[test]
    fn nav_tree_paths_all_resolve() {
        for item in ui::nav::NAV_ITEMS {
            match item {
                ui::nav::NavItem::Leaf { path, .. } => {
                    assert!(path.parse::<Route>().is_ok(), "unroutable nav leaf {path}");
                }
                ui::nav::NavItem::Group { path, children, .. } => {
                    assert!(path.parse::<Route>().is_ok(), "unroutable nav group {path}");
                    for child in *children {
                        assert!(
                            child.path.parse::<Route>().is_ok(),
                            "unroutable nav child {}",
                            child.path
                        );
                    }
                }
            }
        }
    }
}
