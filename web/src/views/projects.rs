use dioxus::prelude::*;
use ui::content::{Project, ProjectStatus};
use ui::Reveal;

pub(crate) const PROJECTS: &[Project] = &[
    Project {
        title: "Sustainable Forest Management",
        description: "AI-powered monitoring system for real-time forest health analysis and conservation tracking.",
        status: ProjectStatus::Active,
    },
    Project {
        title: "Climate Impact Prediction",
        description: "Predictive models forecasting environmental changes to support climate action initiatives.",
        status: ProjectStatus::Active,
    },
    Project {
        title: "Smart Resource Allocation",
        description: "Intelligent system optimizing resource distribution for maximum environmental benefit.",
        status: ProjectStatus::Development,
    },
    Project {
        title: "Community Health Analytics",
        description: "Data-driven platform improving health outcomes through predictive healthcare insights.",
        status: ProjectStatus::Active,
    },
];

#[component]
pub fn ProjectGrid() -> Element {
    rsx! {
        div { class: "projects-grid",
            for (i , project) in PROJECTS.iter().enumerate() {
                Reveal { key: "{i}", delay_ms: (i as u32) * 100,
                    div { class: "project-card",
                        div { class: "project-header",
                            h3 { "{project.title}" }
                            span { class: project.status.badge_class(), {project.status.label()} }
                        }
                        p { "{project.description}" }
                        div { class: "project-footer",
                            span { class: "project-link", "View Details →" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectsPage() -> Element {
    rsx! {
        section { class: "ai-section",
            div { class: "container",
                Reveal {
                    h1 { class: "section-title", "AI Projects" }
                }
                p { class: "section-subtitle",
                    "Showcase of completed and ongoing AI projects across industries."
                }
                ProjectGrid {}
            }
        }
    }
}
