use dioxus::prelude::*;

use common::{
    contact::{ContactForm, FieldError, submit_contact},
    runtime::expire_toast_after,
    state::Section,
};

use crate::{
    home::SocialLinks,
    site::{
        state::{use_site, use_site_state, use_view},
        timer::GlooTimer,
        transport::SiteTransport,
    },
};

#[component]
pub fn Contact() -> Element {
    let state = use_site_state();
    let site = use_site();
    let transport = use_context::<SiteTransport>();

    let mut form = use_signal(ContactForm::default);
    let field_error = use_signal(|| Option::<FieldError>::None);

    let submitting = use_view(|s| s.form_submitting());
    let toast_duration = site.config.timing.toast();
    let owner = &site.config.owner;

    // the browser's own required/type=email checks normally stop a bad form before we
    // get here; validate() catches whatever slips past them and never counts as a
    // rejected submission
    let handle_submit = move |event: FormEvent| {
        let transport = transport.clone();
        async move {
            let mut form = form;
            let mut field_error = field_error;

            event.prevent_default();

            let message = match form.read().validate() {
                Ok(message) => message,
                Err(err) => {
                    field_error.set(Some(err));
                    return;
                }
            };
            field_error.set(None);

            let Some(submission) = submit_contact(&state, transport.get(), message).await else {
                return;
            };

            if submission.clears_form() {
                form.write().clear();
            }

            spawn(expire_toast_after(
                state,
                GlooTimer,
                submission.ticket(),
                toast_duration,
            ));
        }
    };

    rsx! {
        section { id: Section::Contact.anchor(), class: "section",
            div { class: "container",
                div { class: "bento-card contact-card",
                    div {
                        h2 { class: "section-title",
                            "Let’s talk "
                            br {}
                            "innovation."
                        }
                        p { "Whether you’re a founder looking to scale or a recruiter looking for a senior lead, I’m always open to discussing new opportunities." }
                        a { class: "logo", href: "mailto:{owner.email}", "{owner.email}" }
                        SocialLinks {
                            linkedin: owner.linkedin_url.clone(),
                            github: owner.github_url.clone(),
                        }
                    }

                    form { class: "contact-form", onsubmit: handle_submit,
                        div { class: "form-group",
                            label { class: "form-label", r#for: "contact-name", "Name" }
                            input {
                                id: "contact-name",
                                class: "form-input",
                                r#type: "text",
                                required: true,
                                placeholder: "John Doe",
                                value: "{form.read().name}",
                                oninput: move |evt| form.write().name = evt.value(),
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", r#for: "contact-email", "Email" }
                            input {
                                id: "contact-email",
                                class: "form-input",
                                r#type: "email",
                                required: true,
                                placeholder: "john@example.com",
                                value: "{form.read().email}",
                                oninput: move |evt| form.write().email = evt.value(),
                            }
                        }
                        div { class: "form-group",
                            label { class: "form-label", r#for: "contact-message", "Message" }
                            textarea {
                                id: "contact-message",
                                class: "form-input",
                                required: true,
                                rows: "4",
                                placeholder: "What’s on your mind?",
                                value: "{form.read().message}",
                                oninput: move |evt| form.write().message = evt.value(),
                            }
                        }

                        if let Some(err) = field_error() {
                            p { class: "form-error", "{err}" }
                        }

                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            disabled: submitting(),
                            if submitting() {
                                span { class: "spinner" }
                            } else {
                                "Shoot Message"
                            }
                        }
                    }
                }
            }
        }
    }
}
