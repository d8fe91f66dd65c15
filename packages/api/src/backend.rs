use crate::error::ApiError;
use crate::models::{Receipt, Snapshot};

/// Async interface to the activities server.
///
/// Implemented by [`crate::HttpBackend`] for the browser and by
/// [`crate::MemoryBackend`] for tests. No `Send` bound: in the browser every
/// request future lives on the single UI thread.
pub trait ActivitiesBackend {
    /// `GET /activities`
    fn list(&self) -> impl std::future::Future<Output = Result<Snapshot, ApiError>>;

    /// `POST /activities/{activity}/signup?email={email}`
    fn signup(
        &self,
        activity: &str,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Receipt, ApiError>>;

    /// `POST /activities/{activity}/unregister?email={email}`
    fn unregister(
        &self,
        activity: &str,
        email: &str,
    ) -> impl std::future::Future<Output = Result<Receipt, ApiError>>;
}
