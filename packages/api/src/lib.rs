//! # API crate — client side of the activities REST contract
//!
//! Everything the board needs to talk to the activities server lives here, kept
//! free of any UI framework so it can be driven from the browser and from native
//! tests alike.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire models: [`Activity`], the order-preserving [`Snapshot`], and the mutation [`Receipt`] |
//! | [`backend`] | The [`ActivitiesBackend`] trait the synchronizer is generic over |
//! | [`http`] | [`HttpBackend`], a `reqwest` client for `GET /activities` and the two `POST` mutations |
//! | [`memory`] | [`MemoryBackend`], an in-process backend that mirrors the server contract for tests |
//! | [`config`] | [`ClientConfig`], the `activities.toml` client configuration |
//! | [`error`] | [`ApiError`], the failure taxonomy surfaced to the UI |

pub mod backend;
pub mod config;
pub mod error;
pub mod http;
pub mod models;

mod memory;
pub use memory::MemoryBackend;

pub use backend::ActivitiesBackend;
pub use config::{ApiConfig, ClientConfig, TimingConfig};
pub use error::ApiError;
pub use http::HttpBackend;
pub use models::{Activity, ActivityDetails, Receipt, Snapshot};
