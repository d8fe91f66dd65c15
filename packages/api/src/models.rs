//! # Wire models for the activities endpoints
//!
//! `GET /activities` returns a JSON object keyed by activity name. The board
//! renders cards and select options in the order the server sends them, so the
//! object is decoded into a [`Snapshot`] (an ordered `Vec<Activity>`) with a
//! hand-written visitor rather than into a `HashMap`.
//!
//! Mutations (`signup`, `unregister`) answer with a small JSON body that carries a
//! human-readable `message`; see [`Receipt`].

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The per-activity payload of `GET /activities`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Participant emails in registration order.
    #[serde(default)]
    pub participants: Vec<String>,
}

/// An activity together with its name, which is the key of the wire object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub details: ActivityDetails,
}

impl Activity {
    pub fn new(name: impl Into<String>, details: ActivityDetails) -> Self {
        Self {
            name: name.into(),
            details,
        }
    }

    /// Capacity minus current registrants. Not clamped: an over-subscribed
    /// activity reports a negative number.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.details.max_participants) - self.details.participants.len() as i64
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.details.participants.iter().any(|p| p == email)
    }
}

/// One full response of the list endpoint, in server order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    activities: Vec<Activity>,
}

impl Snapshot {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn into_activities(self) -> Vec<Activity> {
        self.activities
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|a| a.name == name)
    }

    pub fn names(&self) -> Vec<String> {
        self.activities.iter().map(|a| a.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl Serialize for Snapshot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(&activity.name, &activity.details)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Snapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = Snapshot;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Snapshot, A::Error> {
                let mut activities: Vec<Activity> =
                    Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, details)) = access.next_entry::<String, ActivityDetails>()? {
                    // a repeated key keeps its first position and its last value
                    match activities.iter_mut().find(|a| a.name == name) {
                        Some(existing) => existing.details = details,
                        None => activities.push(Activity { name, details }),
                    }
                }
                Ok(Snapshot { activities })
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}

/// Success body of `signup` and `unregister`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHESS: &str = r#"{
        "Chess Club": {
            "description": "Play chess",
            "schedule": "Fridays",
            "max_participants": 10,
            "participants": ["a@x.com", "b@y.com"]
        }
    }"#;

    #[test]
    fn test_spots_left_from_wire() {
        let snapshot: Snapshot = serde_json::from_str(CHESS).unwrap();
        let chess = snapshot.get("Chess Club").unwrap();
        assert_eq!(chess.spots_left(), 8);
        assert_eq!(chess.details.participants, vec!["a@x.com", "b@y.com"]);
    }

    #[test]
    fn test_spots_left_is_not_clamped() {
        let activity = Activity::new(
            "Tiny",
            ActivityDetails {
                description: String::new(),
                schedule: String::new(),
                max_participants: 1,
                participants: vec!["a@x.com".into(), "b@x.com".into(), "c@x.com".into()],
            },
        );
        assert_eq!(activity.spots_left(), -2);
    }

    #[test]
    fn test_snapshot_keeps_server_order() {
        let json = r#"{
            "Zumba": {"description": "", "schedule": "", "max_participants": 1, "participants": []},
            "Art": {"description": "", "schedule": "", "max_participants": 1, "participants": []},
            "Math": {"description": "", "schedule": "", "max_participants": 1, "participants": []}
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.names(), vec!["Zumba", "Art", "Math"]);
    }

    #[test]
    fn test_repeated_name_keeps_one_entry() {
        let json = r#"{
            "Art": {"description": "old", "schedule": "", "max_participants": 1, "participants": []},
            "Math": {"description": "", "schedule": "", "max_participants": 1, "participants": []},
            "Art": {"description": "new", "schedule": "", "max_participants": 3, "participants": []}
        }"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.names(), vec!["Art", "Math"]);
        let art = snapshot.get("Art").unwrap();
        assert_eq!(art.details.description, "new");
        assert_eq!(art.spots_left(), 3);
    }

    #[test]
    fn test_missing_participants_defaults_to_empty() {
        let json = r#"{"Art": {"description": "Paint", "schedule": "Mon", "max_participants": 4}}"#;
        let snapshot: Snapshot = serde_json::from_str(json).unwrap();
        assert!(snapshot.activities()[0].details.participants.is_empty());
        assert_eq!(snapshot.activities()[0].spots_left(), 4);
    }

    #[test]
    fn test_error_body_is_not_a_snapshot() {
        let result = serde_json::from_str::<Snapshot>(r#"{"detail": "Not Found"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_receipt_without_message() {
        let receipt: Receipt = serde_json::from_str("{}").unwrap();
        assert_eq!(receipt.message, "");
    }

    #[test]
    fn test_serialized_snapshot_is_keyed_by_name() {
        let snapshot: Snapshot = serde_json::from_str(CHESS).unwrap();
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["Chess Club"]["max_participants"], 10);
    }
}
