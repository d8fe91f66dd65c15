use dioxus::prelude::*;

use crate::board::SELECT_PLACEHOLDER;

/// What the signup form currently holds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupDraft {
    pub email: String,
    pub activity: String,
}

impl SignupDraft {
    /// Clear both fields; the select falls back to its placeholder.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Both required fields are filled in.
    pub fn is_complete(&self) -> bool {
        !self.email.is_empty() && !self.activity.is_empty()
    }
}

/// Email input plus activity select. Both fields are `required`, so the browser
/// refuses to submit an incomplete form.
#[component]
pub fn SignupForm(
    mut draft: Signal<SignupDraft>,
    options: Vec<String>,
    on_submit: EventHandler<SignupDraft>,
) -> Element {
    let current = draft();

    rsx! {
        form {
            id: "signup-form",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                let submitted = draft();
                if submitted.is_complete() {
                    on_submit.call(submitted);
                }
            },

            div {
                class: "form-group",
                label { r#for: "email", "Student Email:" }
                input {
                    id: "email",
                    r#type: "email",
                    required: true,
                    placeholder: "student@example.edu",
                    value: "{current.email}",
                    oninput: move |evt: FormEvent| draft.write().email = evt.value(),
                }
            }

            div {
                class: "form-group",
                label { r#for: "activity", "Select Activity:" }
                select {
                    id: "activity",
                    required: true,
                    value: "{current.activity}",
                    onchange: move |evt: FormEvent| draft.write().activity = evt.value(),
                    option { value: "", "{SELECT_PLACEHOLDER}" }
                    for name in options {
                        option {
                            key: "{name}",
                            value: "{name}",
                            "{name}"
                        }
                    }
                }
            }

            button { r#type: "submit", "Sign Up" }
        }
    }
}
