use std::time::Duration;

use api::Snapshot;
use dioxus::prelude::*;

use crate::board::{Board, RowKey};
use crate::message::{Message, MessageState};
use crate::signup_form::SignupDraft;
use crate::sleep::sleep;
use crate::synchronizer::ViewPort;

/// [`ViewPort`] backed by the page's signals.
#[derive(Clone, Copy)]
pub struct SignalView {
    pub board: Signal<Board>,
    pub message: Signal<MessageState>,
    pub draft: Signal<SignupDraft>,
}

impl ViewPort for SignalView {
    fn show_snapshot(&mut self, snapshot: Snapshot) {
        self.board.write().replace(snapshot);
    }

    fn show_load_failure(&mut self) {
        self.board.write().fail();
    }

    fn show_message(&mut self, message: Message) {
        self.message.write().show(message);
    }

    fn schedule_hide(&mut self, after: Duration) {
        let mut message = self.message;
        spawn(async move {
            sleep(after).await;
            message.write().hide();
        });
    }

    fn reset_form(&mut self) {
        self.draft.write().reset();
    }

    fn confirm(&mut self, prompt: &str) -> bool {
        confirm(prompt)
    }

    fn mark_removing(&mut self, row: &RowKey) -> bool {
        self.board.write().mark_removing(row)
    }

    fn remove_row(&mut self, row: &RowKey) {
        self.board.write().remove_row(row);
    }
}

#[cfg(target_arch = "wasm32")]
fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|window| window.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

#[cfg(not(target_arch = "wasm32"))]
fn confirm(prompt: &str) -> bool {
    tracing::warn!("No confirmation prompt on this platform, declining: {}", prompt);
    false
}
