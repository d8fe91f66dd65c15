use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        div {
            class: "not-found",
            h2 { "Page not found" }
            p { "There is nothing at /{path}." }
            Link { to: Route::Home {}, "Back to the activities" }
        }
    }
}
