//! Contact form with a simulated submission lifecycle.
//!
//! Editing -> Submitted on a complete form; a scheduled reset returns to
//! Editing with cleared fields after [`RESET_DELAY_MS`]. Nothing leaves the
//! client. The reset task is owned by the component and cancelled on unmount
//! so it can never write to a disposed scope.

use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

/// How long the success message stays up before the form clears.
pub const RESET_DELAY_MS: u32 = 3_000;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub submitted: bool,
}

impl ContactForm {
    /// Field-level overwrite keyed by the input's `name` attribute.
    /// Unknown names are ignored.
    pub fn set_field(&mut self, field: &str, value: String) {
        match field {
            "name" => self.name = value,
            "email" => self.email = value,
            "subject" => self.subject = value,
            "message" => self.message = value,
            _ => {}
        }
    }

    /// All four fields are required for submission.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty()
            && !self.email.is_empty()
            && !self.subject.is_empty()
            && !self.message.is_empty()
    }

    /// Attempt the Editing -> Submitted transition. Returns whether it
    /// happened; an incomplete form stays in Editing.
    pub fn submit(&mut self) -> bool {
        if self.is_complete() {
            self.submitted = true;
        }
        self.submitted
    }

    /// Back to a pristine Editing state.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[component]
pub fn ContactFormCard() -> Element {
    let mut form = use_signal(ContactForm::default);
    let mut reset_task = use_signal(|| None::<Task>);

    use_drop(move || {
        if let Some(task) = reset_task.take() {
            task.cancel();
        }
    });

    let handle_submit = move |event: Event<FormData>| {
        event.prevent_default();
        if !form.write().submit() {
            return;
        }
        let task = spawn(async move {
            TimeoutFuture::new(RESET_DELAY_MS).await;
            form.write().reset();
            reset_task.set(None);
        });
        reset_task.set(Some(task));
    };

    let current = form.read().clone();

    rsx! {
        div { class: "form-container",
            h2 { "Send Us a Message" }
            if current.submitted {
                div { class: "success-message",
                    div { class: "success-icon", "✓" }
                    h3 { "Thank You!" }
                    p { "We've received your message and will get back to you soon." }
                }
            } else {
                form { class: "contact-form", onsubmit: handle_submit,
                    div { class: "form-group",
                        label { r#for: "name", "Full Name" }
                        input {
                            id: "name",
                            name: "name",
                            "type": "text",
                            placeholder: "Your name",
                            required: true,
                            value: "{current.name}",
                            oninput: move |e| form.write().set_field("name", e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { r#for: "email", "Email Address" }
                        input {
                            id: "email",
                            name: "email",
                            "type": "email",
                            placeholder: "your@email.com",
                            required: true,
                            value: "{current.email}",
                            oninput: move |e| form.write().set_field("email", e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { r#for: "subject", "Subject" }
                        input {
                            id: "subject",
                            name: "subject",
                            "type": "text",
                            placeholder: "How can we help?",
                            required: true,
                            value: "{current.subject}",
                            oninput: move |e| form.write().set_field("subject", e.value()),
                        }
                    }
                    div { class: "form-group",
                        label { r#for: "message", "Message" }
                        textarea {
                            id: "message",
                            name: "message",
                            rows: "5",
                            placeholder: "Your message here...",
                            required: true,
                            value: "{current.message}",
                            oninput: move |e| form.write().set_field("message", e.value()),
                        }
                    }
                    button { class: "btn btn-primary", "type": "submit", "Send Message" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.set_field("name", "Ada Lovelace".into());
        form.set_field("email", "ada@example.com".into());
        form.set_field("subject", "Partnership".into());
        form.set_field("message", "Let's talk data.".into());
        form
    }

    #[test]
    fn fields_overwrite_by_name() {
        let mut form = ContactForm::default();
        form.set_field("subject", "First".into());
        form.set_field("subject", "Second".into());
        assert_eq!(form.subject, "Second");
        form.set_field("nonexistent", "ignored".into());
        assert_eq!(form, ContactForm {
            subject: "Second".into(),
            ..ContactForm::default()
        });
    }

    #[test]
    fn complete_form_submits() {
        let mut form = complete_form();
        assert!(form.submit());
        assert!(form.submitted);
    }

    #[test]
    fn any_empty_required_field_blocks_submission() {
        for missing in ["name", "email", "subject", "message"] {
            let mut form = complete_form();
            form.set_field(missing, String::new());
            assert!(!form.submit(), "submitted with empty {missing}");
            assert!(!form.submitted);
        }
    }

    #[test]
    fn reset_returns_to_pristine_editing_state() {
        let mut form = complete_form();
        form.submit();
        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn reset_delay_is_three_seconds() {
        assert_eq!(RESET_DELAY_MS, 3_000);
    }
}
