//! Tag endpoints

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use tracing::info;

use super::client::ApiClient;
use super::error::ApiResult;
use crate::models::{CreateTag, Tag};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

const TAGS_PATH: &str = "/tags";
const DELETED_TAGS_PATH: &str = "/tags?deleted=true";

fn delete_path(hash: &str) -> String {
    format!("/tags/{}/delete", utf8_percent_encode(hash, PATH_SEGMENT))
}

fn restore_path(hash: &str) -> String {
    format!("/tags/{}/restore", utf8_percent_encode(hash, PATH_SEGMENT))
}

#[derive(Clone)]
pub struct TagsApi {
    client: ApiClient,
}

impl TagsApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    pub async fn list_tags(&self) -> ApiResult<Vec<Tag>> {
        self.client.get_data(TAGS_PATH).await
    }

    pub async fn list_deleted_tags(&self) -> ApiResult<Vec<Tag>> {
        self.client.get_data(DELETED_TAGS_PATH).await
    }

    /// Returns the created tag when the server echoes it back
    pub async fn create_tag(&self, input: &CreateTag) -> ApiResult<Option<Tag>> {
        info!(name = %input.name, "creating tag");
        let response: serde_json::Value = self.client.post_data(TAGS_PATH, input).await?;
        Ok(serde_json::from_value(response).ok())
    }

    pub async fn delete_tag(&self, hash: &str) -> ApiResult<()> {
        info!(%hash, "deleting tag");
        let _: serde_json::Value = self.client.put_data(&delete_path(hash)).await?;
        Ok(())
    }

    pub async fn restore_tag(&self, hash: &str) -> ApiResult<()> {
        info!(%hash, "restoring tag");
        let _: serde_json::Value = self.client.put_data(&restore_path(hash)).await?;
        Ok(())
    }
}
