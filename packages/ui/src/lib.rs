//! This crate contains the activities board UI.
//!
//! [`ActivitiesPage`] renders the board; [`Synchronizer`] is the logic behind
//! it and can be driven without Dioxus through the [`ViewPort`] trait.

use dioxus::prelude::*;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub mod board;
pub use board::{initials, Board, CardView, ListState, ParticipantRow, RowKey};

pub mod message;
pub use message::{Message, MessageKind, MessageState};

pub mod synchronizer;
pub use synchronizer::{ActionOutcome, Synchronizer, ViewPort};

mod sleep;

mod signal_view;
pub use signal_view::SignalView;

mod activity_list;
pub use activity_list::{ActivityCard, ActivityList};

mod signup_form;
pub use signup_form::{SignupDraft, SignupForm};

mod message_banner;
pub use message_banner::MessageBanner;

mod page;
pub use page::ActivitiesPage;

pub const ACTIVITIES_CSS: Asset = asset!("/assets/activities.css");
