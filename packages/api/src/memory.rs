use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::backend::ActivitiesBackend;
use crate::error::ApiError;
use crate::models::{Activity, Receipt, Snapshot};

/// In-memory backend for tests. Clones share state.
///
/// Answers the way the activities server does: unknown activity is a 404,
/// signing up twice or unregistering an absent participant is a 400.
#[derive(Clone, Debug, Default)]
pub struct MemoryBackend {
    activities: Arc<Mutex<Vec<Activity>>>,
    list_requests: Arc<AtomicUsize>,
    offline: Arc<AtomicBool>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: Snapshot) -> Self {
        let backend = Self::default();
        *backend.activities.lock().unwrap() = snapshot.into_activities();
        backend
    }

    /// Number of `list` calls served (or refused while offline) so far.
    pub fn list_requests(&self) -> usize {
        self.list_requests.load(Ordering::SeqCst)
    }

    /// While offline every call fails with [`ApiError::Transport`].
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.activities.lock().unwrap().clone())
    }

    fn check_online(&self) -> Result<(), ApiError> {
        if self.offline.load(Ordering::SeqCst) {
            Err(ApiError::Transport("backend is offline".into()))
        } else {
            Ok(())
        }
    }
}

fn not_found() -> ApiError {
    ApiError::Rejected {
        status: 404,
        detail: Some("Activity not found".into()),
    }
}

impl ActivitiesBackend for MemoryBackend {
    async fn list(&self) -> Result<Snapshot, ApiError> {
        self.list_requests.fetch_add(1, Ordering::SeqCst);
        self.check_online()?;
        Ok(self.snapshot())
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<Receipt, ApiError> {
        self.check_online()?;
        let mut activities = self.activities.lock().unwrap();
        let entry = activities
            .iter_mut()
            .find(|a| a.name == activity)
            .ok_or_else(not_found)?;
        if entry.has_participant(email) {
            return Err(ApiError::Rejected {
                status: 400,
                detail: Some("Student is already signed up".into()),
            });
        }
        entry.details.participants.push(email.to_string());
        Ok(Receipt {
            message: format!("Signed up {email} for {activity}"),
        })
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<Receipt, ApiError> {
        self.check_online()?;
        let mut activities = self.activities.lock().unwrap();
        let entry = activities
            .iter_mut()
            .find(|a| a.name == activity)
            .ok_or_else(not_found)?;
        let Some(index) = entry.details.participants.iter().position(|p| p == email) else {
            return Err(ApiError::Rejected {
                status: 400,
                detail: Some("Student is not signed up for this activity".into()),
            });
        };
        entry.details.participants.remove(index);
        Ok(Receipt {
            message: format!("Unregistered {email} from {activity}"),
        })
    }
}
