//! Authorized data helpers
//!
//! `get_data` / `post_data` / `put_data` send a request through the
//! transport and decode the JSON body of a 2xx response. Anything else
//! becomes an `ApiError` carrying a readable message.

use std::sync::Arc;

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use super::error::{ApiError, ApiResult};
use super::transport::{ApiRequest, Transport};

#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    pub async fn get_data<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn post_data<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = serde_json::to_value(body)?;
        self.execute(ApiRequest::new(Method::POST, path).with_body(body))
            .await
    }

    pub async fn put_data<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.execute(ApiRequest::new(Method::PUT, path)).await
    }

    async fn execute<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiResult<T> {
        let method = request.method.clone();
        let path = request.path.clone();
        let response = self.transport.send(request).await?;

        if !response.is_success() {
            let err = ApiError::from_response(response.status, &response.body);
            warn!(%method, %path, status = response.status, error = %err, "request rejected");
            return Err(err);
        }

        // Empty bodies (e.g. 204) decode as JSON null
        let body = if response.body.trim().is_empty() {
            "null"
        } else {
            response.body.as_str()
        };
        Ok(serde_json::from_str(body)?)
    }
}
