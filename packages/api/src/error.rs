use thiserror::Error;

/// Why a request against the activities server did not produce usable data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The configured base URL cannot carry endpoint paths.
    #[error("invalid base url `{0}`")]
    InvalidBaseUrl(String),
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Transport(String),
    /// Non-2xx response with a JSON body. `detail` is the server's explanation.
    #[error("server rejected the request with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    /// The response body was not the JSON we expected.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Server-provided explanation, only present for [`ApiError::Rejected`].
    pub fn detail(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_rejection(&self) -> bool {
        matches!(self, ApiError::Rejected { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Transport(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_only_for_rejections() {
        let rejected = ApiError::Rejected {
            status: 400,
            detail: Some("Student is already signed up".into()),
        };
        assert_eq!(rejected.detail(), Some("Student is already signed up"));
        assert!(rejected.is_rejection());

        let transport = ApiError::Transport("connection refused".into());
        assert_eq!(transport.detail(), None);
        assert!(!transport.is_rejection());
    }
}
