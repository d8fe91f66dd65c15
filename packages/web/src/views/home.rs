use api::ClientConfig;
use dioxus::prelude::*;
use ui::ActivitiesPage;

#[component]
pub fn Home() -> Element {
    let config = use_context::<ClientConfig>();

    rsx! {
        header {
            h1 { "School Activities" }
            h2 { "Sign up for an extracurricular activity" }
        }

        ActivitiesPage { config }

        footer {
            p { "Activities are updated live from the school server." }
        }
    }
}
