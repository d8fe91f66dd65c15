use dioxus::prelude::*;

use crate::board::{
    Board, CardView, ListState, ParticipantRow, RowKey, LOADING_TEXT, LOAD_FAILED_TEXT,
    NO_PARTICIPANTS_TEXT,
};
use crate::icons::FaXmark;
use crate::Icon;

/// The list area: loading text, one card per activity, or the failure text.
///
/// Rows are recreated on every snapshot. Their delete controls carry the row's
/// identity and report it through `on_unregister`; the renderer dispatches
/// clicks from the root, so nothing is rebound per row.
#[component]
pub fn ActivityList(board: Signal<Board>, on_unregister: EventHandler<RowKey>) -> Element {
    let board = board.read();

    match board.list() {
        ListState::Loading => rsx! {
            div { id: "activities-list", p { "{LOADING_TEXT}" } }
        },
        ListState::Failed => rsx! {
            div { id: "activities-list", p { "{LOAD_FAILED_TEXT}" } }
        },
        ListState::Ready(_) => {
            let cards = board.cards();
            rsx! {
                div {
                    id: "activities-list",
                    for card in cards {
                        ActivityCard {
                            key: "{card.name}",
                            card: card.clone(),
                            on_unregister,
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ActivityCard(card: CardView, on_unregister: EventHandler<RowKey>) -> Element {
    let participants = match card.participants.clone() {
        None => rsx! {
            div { class: "participants no-participants", "{NO_PARTICIPANTS_TEXT}" }
        },
        Some(rows) => rsx! {
            div {
                class: "participants",
                strong { "Participants:" }
                ul {
                    class: "participant-list",
                    for row in rows {
                        ParticipantItem {
                            key: "{row.key.email}",
                            row: row.clone(),
                            on_unregister,
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            class: "activity-card",
            h4 { "{card.name}" }
            p { "{card.description}" }
            p {
                strong { "Schedule:" }
                " {card.schedule}"
            }
            p {
                strong { "Availability:" }
                " {card.spots_left} spots left"
            }
            {participants}
        }
    }
}

#[component]
fn ParticipantItem(row: ParticipantRow, on_unregister: EventHandler<RowKey>) -> Element {
    let key = row.key.clone();

    rsx! {
        li {
            class: if row.removing { "participant-item removing" } else { "participant-item" },
            span { class: "participant-badge", "{row.initials}" }
            "{row.key.email}"
            button {
                r#type: "button",
                class: "participant-delete",
                "data-email": "{row.key.email}",
                "data-activity": "{row.key.activity}",
                title: "Remove participant",
                "aria-label": "Remove participant",
                onclick: move |_| on_unregister.call(key.clone()),
                Icon { icon: FaXmark, width: 10, height: 10 }
            }
        }
    }
}
