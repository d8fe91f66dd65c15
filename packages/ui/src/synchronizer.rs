//! # Synchronizer: keeps the board in step with the activities server
//!
//! [`Synchronizer`] runs the three user-facing flows against any
//! [`ActivitiesBackend`] and writes the results into any [`ViewPort`]. The Dioxus
//! page drives it through signals; the tests drive it through a recording view.
//!
//! | Flow | Request | On success |
//! |------|---------|------------|
//! | [`load_activities`](Synchronizer::load_activities) | `GET /activities` | replace the board with the snapshot |
//! | [`submit_signup`](Synchronizer::submit_signup) | `POST .../signup` | show the server message, reset the form, reload |
//! | [`submit_unregister`](Synchronizer::submit_unregister) | `POST .../unregister` | show the server message, fade the row out, drop it, reload |
//!
//! Every mutation ends with a full reload: the board is only ever rebuilt from a
//! complete snapshot, so overlapping actions converge no matter which request
//! finishes last. Nothing is retried. Each shown message gets its own hide timer
//! and timers are never cancelled.

use std::time::Duration;

use api::{ActivitiesBackend, ApiError, Snapshot, TimingConfig};

use crate::board::RowKey;
use crate::message::Message;
use crate::sleep::sleep;

pub const GENERIC_ERROR_TEXT: &str = "An error occurred";
pub const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED_TEXT: &str = "Failed to unregister. Please try again.";

/// The surface the synchronizer writes to.
pub trait ViewPort {
    /// Replace the list and the select options with a full snapshot.
    fn show_snapshot(&mut self, snapshot: Snapshot);
    /// Replace the list area with the failure text.
    fn show_load_failure(&mut self);
    fn show_message(&mut self, message: Message);
    /// Hide the message line once `after` has elapsed, independently of the caller.
    fn schedule_hide(&mut self, after: Duration);
    fn reset_form(&mut self);
    /// Blocking yes/no question to the user.
    fn confirm(&mut self, prompt: &str) -> bool;
    /// Start the removal transition. `false` if the row is not rendered.
    fn mark_removing(&mut self, row: &RowKey) -> bool;
    fn remove_row(&mut self, row: &RowKey);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The server accepted the change.
    Applied,
    /// The server answered with an error status.
    Rejected,
    /// No usable answer from the server.
    Failed,
    /// The user declined the confirmation.
    Cancelled,
    /// The trigger did not carry enough data to act on.
    Skipped,
}

#[derive(Clone, Debug)]
pub struct Synchronizer<B, V> {
    backend: B,
    view: V,
    timing: TimingConfig,
}

impl<B: ActivitiesBackend, V: ViewPort> Synchronizer<B, V> {
    pub fn new(backend: B, view: V, timing: TimingConfig) -> Self {
        Self {
            backend,
            view,
            timing,
        }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Fetch the full list and render it. Returns whether the list could be shown.
    pub async fn load_activities(&mut self) -> bool {
        match self.backend.list().await {
            Ok(snapshot) => {
                tracing::debug!(activities = snapshot.len(), "Loaded activities");
                self.view.show_snapshot(snapshot);
                true
            }
            Err(e) => {
                tracing::error!("Error fetching activities: {}", e);
                self.view.show_load_failure();
                false
            }
        }
    }

    pub async fn submit_signup(&mut self, email: &str, activity: &str) -> ActionOutcome {
        let outcome = match self.backend.signup(activity, email).await {
            Ok(receipt) => {
                self.view.show_message(Message::success(receipt.message));
                self.view.reset_form();
                ActionOutcome::Applied
            }
            Err(e) => self.report_failure(e, SIGNUP_FAILED_TEXT, "signing up"),
        };
        self.view.schedule_hide(self.timing.message_dismiss());

        if outcome == ActionOutcome::Applied {
            self.load_activities().await;
        }
        outcome
    }

    /// Unregister `email` from `activity`, as triggered by a participant row's
    /// delete control.
    pub async fn submit_unregister(&mut self, email: &str, activity: &str) -> ActionOutcome {
        let Some(row) = RowKey::from_data(activity, email) else {
            return ActionOutcome::Skipped;
        };
        if !self
            .view
            .confirm(&format!("Unregister {email} from {activity}?"))
        {
            return ActionOutcome::Cancelled;
        }

        let outcome = match self.backend.unregister(activity, email).await {
            Ok(receipt) => {
                self.view.show_message(Message::success(receipt.message));
                ActionOutcome::Applied
            }
            Err(e) => self.report_failure(e, UNREGISTER_FAILED_TEXT, "unregistering"),
        };
        self.view.schedule_hide(self.timing.message_dismiss());

        if outcome == ActionOutcome::Applied {
            if self.view.mark_removing(&row) {
                sleep(self.timing.removal_transition()).await;
                self.view.remove_row(&row);
            }
            self.load_activities().await;
        }
        outcome
    }

    fn report_failure(&mut self, error: ApiError, fallback: &str, action: &str) -> ActionOutcome {
        if error.is_rejection() {
            tracing::warn!("Server refused {}: {}", action, error);
            let text = error
                .detail()
                .filter(|d| !d.is_empty())
                .unwrap_or(GENERIC_ERROR_TEXT);
            self.view.show_message(Message::error(text));
            ActionOutcome::Rejected
        } else {
            tracing::error!("Error {}: {}", action, error);
            self.view.show_message(Message::error(fallback));
            ActionOutcome::Failed
        }
    }
}
