//! # HTTP backend
//!
//! [`HttpBackend`] speaks the activities REST contract with `reqwest`, which
//! compiles to `fetch` on WASM and to hyper natively.
//!
//! | Call | Request |
//! |------|---------|
//! | [`list`](ActivitiesBackend::list) | `GET {base}/activities` |
//! | [`signup`](ActivitiesBackend::signup) | `POST {base}/activities/{name}/signup?email={email}` |
//! | [`unregister`](ActivitiesBackend::unregister) | `POST {base}/activities/{name}/unregister?email={email}` |
//!
//! The activity name is pushed as a single percent-encoded path segment and the
//! email as a form-encoded query value, so names containing spaces or `/` and
//! emails containing `+` reach the server intact.
//!
//! Non-2xx responses are expected to carry `{"detail": ...}`; they become
//! [`ApiError::Rejected`]. A body that is not JSON becomes [`ApiError::Decode`].

use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::backend::ActivitiesBackend;
use crate::error::ApiError;
use crate::models::{Receipt, Snapshot};

#[derive(Clone, Debug)]
pub struct HttpBackend {
    client: Client,
    base: Url,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl HttpBackend {
    /// Create a backend rooted at `base_url` (e.g. `"http://localhost:8000"`).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base =
            Url::parse(base_url).map_err(|_| ApiError::InvalidBaseUrl(base_url.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            client: Client::new(),
            base,
        })
    }

    pub fn base_url(&self) -> &str {
        self.base.as_str()
    }

    /// `{base}/activities`
    pub fn activities_url(&self) -> Result<Url, ApiError> {
        self.url_with_segments(&["activities"])
    }

    /// `{base}/activities/{activity}/{action}?email={email}`
    pub fn mutation_url(&self, activity: &str, action: &str, email: &str) -> Result<Url, ApiError> {
        let mut url = self.url_with_segments(&["activities", activity, action])?;
        url.query_pairs_mut().append_pair("email", email);
        Ok(url)
    }

    fn url_with_segments(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidBaseUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn post(&self, url: Url) -> Result<Receipt, ApiError> {
        tracing::debug!(%url, "POST");
        let response = self.client.post(url).send().await?;
        read_json(response).await
    }
}

impl ActivitiesBackend for HttpBackend {
    async fn list(&self) -> Result<Snapshot, ApiError> {
        let url = self.activities_url()?;
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        read_json(response).await
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<Receipt, ApiError> {
        let url = self.mutation_url(activity, "signup", email)?;
        self.post(url).await
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<Receipt, ApiError> {
        let url = self.mutation_url(activity, "unregister", email)?;
        self.post(url).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    if status.is_success() {
        serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Err(rejection(status.as_u16(), &body))
    }
}

fn rejection(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(error) => ApiError::Rejected {
            status,
            detail: error.detail.and_then(detail_text),
        },
        Err(e) => ApiError::Decode(e.to_string()),
    }
}

/// Servers usually send a string; validation failures send a list of objects,
/// which is shown as JSON text.
fn detail_text(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
