//! Request credentials
//!
//! Token acquisition and refresh happen elsewhere; this side only reads the
//! current token when a request is built.

/// Supplies the `Authorization` header value for outgoing requests
pub trait Credentials: Send + Sync {
    fn authorization(&self) -> Option<String>;
}

fn bearer(token: &str) -> Option<String> {
    let token = token.trim();
    (!token.is_empty()).then(|| format!("Bearer {token}"))
}

/// Bearer token stored in `window.localStorage` under `key`
#[derive(Debug, Clone)]
pub struct LocalStorageCredentials {
    key: String,
}

impl LocalStorageCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

impl Credentials for LocalStorageCredentials {
    fn authorization(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        let token = storage.get_item(&self.key).ok()??;
        bearer(&token)
    }
}

/// Fixed bearer token
#[derive(Debug, Clone)]
pub struct StaticCredentials(pub String);

impl Credentials for StaticCredentials {
    fn authorization(&self) -> Option<String> {
        bearer(&self.0)
    }
}
