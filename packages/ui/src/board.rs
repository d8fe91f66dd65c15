//! # Board: the rendered state of the activities list
//!
//! A [`Board`] holds what the list area and the activity `<select>` currently
//! show. It is only ever rebuilt from a full [`Snapshot`]: [`Board::replace`]
//! swaps in the new snapshot, regenerates the select options and forgets every
//! per-row marker, because the rows themselves are recreated.
//!
//! Between two snapshots the only local change is the optimistic removal of a
//! participant row: [`Board::mark_removing`] flags the row for the fade-out
//! transition and [`Board::remove_row`] drops it from the rendered list. The
//! snapshot itself (and therefore the "spots left" count) is left alone until
//! the reconciling reload arrives.
//!
//! [`Board::cards`] projects the board into plain [`CardView`]s for rendering.

use std::collections::HashSet;

use api::{Activity, Snapshot};

pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";
pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

/// Identifies one participant row: the data carried by its delete control.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct RowKey {
    pub activity: String,
    pub email: String,
}

impl RowKey {
    /// Build a key from a delete control's `data-activity` / `data-email`.
    /// Returns `None` when either value is missing.
    pub fn from_data(activity: &str, email: &str) -> Option<Self> {
        if activity.is_empty() || email.is_empty() {
            return None;
        }
        Some(Self {
            activity: activity.to_string(),
            email: email.to_string(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListState {
    #[default]
    Loading,
    Ready(Snapshot),
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Board {
    list: ListState,
    options: Vec<String>,
    removing: HashSet<RowKey>,
    removed: HashSet<RowKey>,
}

/// Everything one activity card displays.
#[derive(Clone, Debug, PartialEq)]
pub struct CardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    /// `None` renders the "no participants" placeholder.
    pub participants: Option<Vec<ParticipantRow>>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticipantRow {
    pub key: RowKey,
    pub initials: String,
    pub removing: bool,
}

/// Badge text: first character of each whitespace-separated token, at most two,
/// uppercased. A bare email is a single token, so it yields one letter.
/// Works on the raw identifier: `<b>x` yields `<`, and the renderer escapes it.
pub fn initials(identifier: &str) -> String {
    identifier
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

impl Board {
    pub fn list(&self) -> &ListState {
        &self.list
    }

    /// Activity names offered by the select, after the placeholder.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        match &self.list {
            ListState::Ready(snapshot) => Some(snapshot),
            _ => None,
        }
    }

    /// Replace everything with a freshly fetched snapshot.
    pub fn replace(&mut self, snapshot: Snapshot) {
        self.options = snapshot.names();
        self.list = ListState::Ready(snapshot);
        self.removing.clear();
        self.removed.clear();
    }

    /// The list area degrades to the failure text. Options are kept.
    pub fn fail(&mut self) {
        self.list = ListState::Failed;
        self.removing.clear();
        self.removed.clear();
    }

    /// Whether the row is currently rendered.
    pub fn contains_row(&self, row: &RowKey) -> bool {
        if self.removed.contains(row) {
            return false;
        }
        self.snapshot()
            .and_then(|s| s.get(&row.activity))
            .is_some_and(|a| a.has_participant(&row.email))
    }

    /// Start the removal transition. Returns `false` if the row is not rendered.
    pub fn mark_removing(&mut self, row: &RowKey) -> bool {
        if !self.contains_row(row) {
            return false;
        }
        self.removing.insert(row.clone());
        true
    }

    pub fn is_removing(&self, row: &RowKey) -> bool {
        self.removing.contains(row)
    }

    /// Drop the row from the rendered list. Returns `false` if it was already gone.
    pub fn remove_row(&mut self, row: &RowKey) -> bool {
        let present = self.contains_row(row);
        self.removing.remove(row);
        if present {
            self.removed.insert(row.clone());
        }
        present
    }

    pub fn cards(&self) -> Vec<CardView> {
        let Some(snapshot) = self.snapshot() else {
            return Vec::new();
        };
        snapshot
            .activities()
            .iter()
            .map(|activity| self.card(activity))
            .collect()
    }

    fn card(&self, activity: &Activity) -> CardView {
        let participants = if activity.details.participants.is_empty() {
            None
        } else {
            Some(
                activity
                    .details
                    .participants
                    .iter()
                    .map(|email| RowKey {
                        activity: activity.name.clone(),
                        email: email.clone(),
                    })
                    .filter(|key| !self.removed.contains(key))
                    .map(|key| ParticipantRow {
                        initials: initials(&key.email),
                        removing: self.removing.contains(&key),
                        key,
                    })
                    .collect(),
            )
        };
        CardView {
            name: activity.name.clone(),
            description: activity.details.description.clone(),
            schedule: activity.details.schedule.clone(),
            spots_left: activity.spots_left(),
            participants,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::ActivityDetails;

    fn activity(name: &str, max: u32, participants: &[&str]) -> Activity {
        Activity::new(
            name,
            ActivityDetails {
                description: format!("{name} description"),
                schedule: "Fridays".into(),
                max_participants: max,
                participants: participants.iter().map(|p| p.to_string()).collect(),
            },
        )
    }

    fn board_with(activities: Vec<Activity>) -> Board {
        let mut board = Board::default();
        board.replace(Snapshot::new(activities));
        board
    }

    fn key(activity: &str, email: &str) -> RowKey {
        RowKey::from_data(activity, email).unwrap()
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("a@x.com"), "A");
        assert_eq!(initials("jane doe"), "JD");
        assert_eq!(initials("  ann  bob carl "), "AB");
        assert_eq!(initials(""), "");
        assert_eq!(initials("élodie"), "É");
        assert_eq!(initials("<b>x@x.com"), "<");
        assert_eq!(initials("&amp; y"), "&Y");
    }

    #[test]
    fn test_row_key_requires_both_values() {
        assert!(RowKey::from_data("Chess Club", "").is_none());
        assert!(RowKey::from_data("", "a@x.com").is_none());
        assert!(RowKey::from_data("Chess Club", "a@x.com").is_some());
    }

    #[test]
    fn test_starts_loading() {
        let board = Board::default();
        assert_eq!(board.list(), &ListState::Loading);
        assert!(board.options().is_empty());
        assert!(board.cards().is_empty());
    }

    #[test]
    fn test_chess_club_card() {
        let board = board_with(vec![activity("Chess Club", 10, &["a@x.com", "b@y.com"])]);
        let cards = board.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].spots_left, 8);
        let rows = cards[0].participants.as_ref().unwrap();
        let badges: Vec<_> = rows.iter().map(|r| r.initials.as_str()).collect();
        assert_eq!(badges, vec!["A", "B"]);
        assert_eq!(board.options(), ["Chess Club".to_string()]);
    }

    #[test]
    fn test_empty_activity_uses_placeholder() {
        let board = board_with(vec![activity("Art", 5, &[])]);
        assert_eq!(board.cards()[0].participants, None);
    }

    #[test]
    fn test_negative_spots_are_kept() {
        let board = board_with(vec![activity("Tiny", 1, &["a@x.com", "b@x.com"])]);
        assert_eq!(board.cards()[0].spots_left, -1);
    }

    #[test]
    fn test_replace_drops_stale_entries() {
        let mut board = board_with(vec![
            activity("Chess Club", 10, &["a@x.com"]),
            activity("Drama", 10, &[]),
        ]);
        board.replace(Snapshot::new(vec![activity("Chess Club", 10, &[])]));
        assert_eq!(board.options(), ["Chess Club".to_string()]);
        let cards = board.cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].participants, None);
    }

    #[test]
    fn test_failure_keeps_options() {
        let mut board = board_with(vec![activity("Chess Club", 10, &[])]);
        board.fail();
        assert_eq!(board.list(), &ListState::Failed);
        assert!(board.cards().is_empty());
        assert_eq!(board.options(), ["Chess Club".to_string()]);
    }

    #[test]
    fn test_removal_transition() {
        let mut board = board_with(vec![activity("Chess Club", 10, &["a@x.com", "b@y.com"])]);
        let row = key("Chess Club", "a@x.com");

        assert!(board.mark_removing(&row));
        assert!(board.is_removing(&row));
        let rows = board.cards()[0].participants.clone().unwrap();
        assert!(rows[0].removing);
        assert!(!rows[1].removing);

        assert!(board.remove_row(&row));
        assert!(!board.is_removing(&row));
        assert!(!board.contains_row(&row));
        let card = &board.cards()[0];
        assert_eq!(card.participants.as_ref().unwrap().len(), 1);
        // the count only changes with the next snapshot
        assert_eq!(card.spots_left, 8);
    }

    #[test]
    fn test_last_row_removed_leaves_empty_list() {
        let mut board = board_with(vec![activity("Chess Club", 10, &["a@x.com"])]);
        let row = key("Chess Club", "a@x.com");
        board.mark_removing(&row);
        board.remove_row(&row);
        assert_eq!(board.cards()[0].participants, Some(Vec::new()));
    }

    #[test]
    fn test_unknown_row_cannot_be_marked() {
        let mut board = board_with(vec![activity("Chess Club", 10, &["a@x.com"])]);
        assert!(!board.mark_removing(&key("Chess Club", "zed@x.com")));
        assert!(!board.mark_removing(&key("Drama", "a@x.com")));

        let row = key("Chess Club", "a@x.com");
        assert!(board.remove_row(&row));
        assert!(!board.mark_removing(&row));
        assert!(!board.remove_row(&row));
    }

    #[test]
    fn test_replace_forgets_removed_rows() {
        let mut board = board_with(vec![activity("Chess Club", 10, &["a@x.com"])]);
        let row = key("Chess Club", "a@x.com");
        board.remove_row(&row);
        board.replace(Snapshot::new(vec![activity("Chess Club", 10, &["a@x.com"])]));
        assert!(board.contains_row(&row));
    }
}
