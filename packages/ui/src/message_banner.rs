use dioxus::prelude::*;

use crate::message::MessageState;

/// The shared status line. Stays in the DOM while hidden.
#[component]
pub fn MessageBanner(message: Signal<MessageState>) -> Element {
    let state = message();

    rsx! {
        div {
            id: "message",
            class: "{state.class()}",
            "{state.text()}"
        }
    }
}
