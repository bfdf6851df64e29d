use dioxus::prelude::*;
use ui::content::{Benefit, JobPosting};
use ui::{Button, ButtonVariant, Reveal};

pub(crate) const JOBS: &[JobPosting] = &[
    JobPosting {
        title: "Senior AI Engineer",
        department: "Engineering",
        location: "San Francisco, USA",
        kind: "Full-time",
        experience: "5+ years",
        description: "Lead the development of cutting-edge AI models and solutions.",
    },
    JobPosting {
        title: "Data Scientist",
        department: "Research",
        location: "London, UK",
        kind: "Full-time",
        experience: "3+ years",
        description: "Develop advanced machine learning models for real-world applications.",
    },
    JobPosting {
        title: "Product Manager",
        department: "Product",
        location: "Singapore",
        kind: "Full-time",
        experience: "4+ years",
        description: "Shape the future of our AI product offerings.",
    },
    JobPosting {
        title: "DevOps Engineer",
        department: "Infrastructure",
        location: "Berlin, Germany",
        kind: "Full-time",
        experience: "3+ years",
        description: "Build robust infrastructure for our global operations.",
    },
    JobPosting {
        title: "UX/UI Designer",
        department: "Design",
        location: "Remote",
        kind: "Full-time",
        experience: "2+ years",
        description: "Create intuitive interfaces for complex AI applications.",
    },
    JobPosting {
        title: "Business Development",
        department: "Sales",
        location: "Multiple",
        kind: "Full-time",
        experience: "5+ years",
        description: "Drive growth through strategic partnerships.",
    },
];

const BENEFITS: &[Benefit] = &[
    Benefit {
        icon: "💰",
        title: "Competitive Salary",
        description: "Industry-leading compensation packages",
    },
    Benefit {
        icon: "🏥",
        title: "Health Insurance",
        description: "Comprehensive coverage for you and family",
    },
    Benefit {
        icon: "🌍",
        title: "Remote Work",
        description: "Flexible work location options",
    },
    Benefit {
        icon: "📚",
        title: "Learning Budget",
        description: "$2000 annual professional development",
    },
    Benefit {
        icon: "🏖️",
        title: "Unlimited PTO",
        description: "Work-life balance is important",
    },
    Benefit {
        icon: "🚀",
        title: "Career Growth",
        description: "Clear progression opportunities",
    },
    Benefit {
        icon: "🍽️",
        title: "Wellness Programs",
        description: "Gym membership and healthy snacks",
    },
    Benefit {
        icon: "🎉",
        title: "Team Events",
        description: "Regular team building activities",
    },
];

/// Flips the card at `index`, leaving every other card's state untouched.
pub(crate) fn toggle_card(flipped: &mut Vec<bool>, index: usize) {
    if let Some(state) = flipped.get_mut(index) {
        *state = !*state;
    }
}

#[component]
pub fn CareersPage() -> Element {
    let mut flipped = use_signal(|| vec![false; JOBS.len()]);

    rsx! {
        div { class: "page-section careers",
            h1 { class: "section-title", "Join Our Team" }
            p { class: "section-subtitle", "Build the future with us at Lifewood" }

            section { class: "jobs-section",
                h2 { "Open Positions" }
                div { class: "jobs-grid",
                    for (i , job) in JOBS.iter().enumerate() {
                        Reveal { key: "{job.title}", delay_ms: (i as u32) * 100,
                            div {
                                class: format!(
                                    "job-card{}",
                                    if flipped.read()[i] { " is-flipped" } else { "" },
                                ),
                                onclick: move |_| toggle_card(&mut flipped.write(), i),
                                div { class: "job-header",
                                    h3 { "{job.title}" }
                                    span { class: "job-type", "{job.kind}" }
                                }
                                p { class: "job-department", "{job.department}" }
                                p { class: "job-description", "{job.description}" }
                                div { class: "job-meta",
                                    span { class: "meta-item", "📍 {job.location}" }
                                    span { class: "meta-item", "💼 {job.experience}" }
                                }
                                Button { variant: ButtonVariant::Primary, "Apply Now" }
                            }
                        }
                    }
                }
            }

            section { class: "benefits-section",
                h2 { "Why Join Lifewood?" }
                div { class: "benefits-grid",
                    for benefit in BENEFITS.iter() {
                        Reveal { key: "{benefit.title}",
                            div { class: "benefit-card",
                                div { class: "benefit-icon", "{benefit.icon}" }
                                h3 { "{benefit.title}" }
                                p { "{benefit.description}" }
                            }
                        }
                    }
                }
            }

            section { class: "careers-cta",
                h2 { "Don't see the right role?" }
                p { "Send us your resume and tell us what you're interested in." }
                Button { variant: ButtonVariant::Primary, "Send Your Resume" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_board_lists_every_posting() {
        assert_eq!(JOBS.len(), 6);
        assert!(JOBS.iter().all(|job| !job.description.is_empty()));
    }

    #[test]
    fn toggling_a_card_leaves_siblings_unchanged() {
        let mut flipped = vec![false; JOBS.len()];
        toggle_card(&mut flipped, 2);
        assert!(flipped[2]);
        for (i, state) in flipped.iter().enumerate() {
            if i != 2 {
                assert!(!state);
            }
        }
        toggle_card(&mut flipped, 2);
        assert!(flipped.iter().all(|state| !state));
    }

    #[test]
    fn toggling_out_of_range_is_a_no_op() {
        let mut flipped = vec![false; 3];
        toggle_card(&mut flipped, 10);
        assert_eq!(flipped, vec![false; 3]);
    }
}
