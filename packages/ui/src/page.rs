use api::{ClientConfig, HttpBackend};
use dioxus::prelude::*;

use crate::activity_list::ActivityList;
use crate::board::{Board, RowKey, LOAD_FAILED_TEXT};
use crate::message::MessageState;
use crate::message_banner::MessageBanner;
use crate::signal_view::SignalView;
use crate::signup_form::{SignupDraft, SignupForm};
use crate::synchronizer::Synchronizer;
use crate::ACTIVITIES_CSS;

/// The whole board: activity list on one side, signup form and status line on
/// the other. Loads the list once on mount; every action reloads it again.
#[component]
pub fn ActivitiesPage(config: ClientConfig) -> Element {
    let board = use_signal(Board::default);
    let message = use_signal(MessageState::default);
    let draft = use_signal(SignupDraft::default);
    let view = SignalView {
        board,
        message,
        draft,
    };

    let sync = use_hook(move || match HttpBackend::new(&config.api.base_url) {
        Ok(backend) => Some(Synchronizer::new(backend, view, config.timing.clone())),
        Err(e) => {
            tracing::error!("Cannot reach the activities server: {}", e);
            None
        }
    });

    use_hook({
        let sync = sync.clone();
        move || {
            if let Some(mut sync) = sync {
                spawn(async move {
                    sync.load_activities().await;
                });
            }
        }
    });

    let Some(sync) = sync else {
        return rsx! {
            document::Stylesheet { href: ACTIVITIES_CSS }
            p { class: "error", "{LOAD_FAILED_TEXT}" }
        };
    };

    let on_signup = {
        let sync = sync.clone();
        move |submitted: SignupDraft| {
            let mut sync = sync.clone();
            spawn(async move {
                sync.submit_signup(&submitted.email, &submitted.activity)
                    .await;
            });
        }
    };

    let on_unregister = move |row: RowKey| {
        let mut sync = sync.clone();
        spawn(async move {
            sync.submit_unregister(&row.email, &row.activity).await;
        });
    };

    let options = board.read().options().to_vec();

    rsx! {
        document::Stylesheet { href: ACTIVITIES_CSS }

        main {
            class: "activities-page",

            section {
                id: "activities-container",
                h3 { "Available Activities" }
                ActivityList { board, on_unregister }
            }

            section {
                id: "signup-container",
                h3 { "Sign Up for an Activity" }
                SignupForm { draft, options, on_submit: on_signup }
                MessageBanner { message }
            }
        }
    }
}
