//! Tags API client
//!
//! Authorized HTTP helpers and the tag endpoints built on them.

mod auth;
mod client;
mod error;
#[cfg(test)]
pub(crate) mod fake;
mod tags;
mod transport;

pub use auth::{Credentials, LocalStorageCredentials, StaticCredentials};
pub use client::ApiClient;
pub use error::ApiResult;
pub use tags::TagsApi;
pub use transport::HttpTransport;
