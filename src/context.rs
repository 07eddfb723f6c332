//! Application Context
//!
//! Services constructed once at startup and provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;

use crate::api::{
    ApiClient, Credentials, HttpTransport, LocalStorageCredentials, StaticCredentials, TagsApi,
};
use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppContext {
    pub api: TagsApi,
}

impl AppContext {
    pub fn new(config: &AppConfig) -> Self {
        let credentials: Arc<dyn Credentials> = match &config.dev_token {
            Some(token) => Arc::new(StaticCredentials(token.clone())),
            None => Arc::new(LocalStorageCredentials::new(config.token_storage_key.as_str())),
        };
        let transport = Arc::new(HttpTransport::new(config.api_base_url.as_str(), credentials));
        Self {
            api: TagsApi::new(ApiClient::new(transport)),
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
