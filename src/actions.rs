//! Tag Actions
//!
//! Create, delete and restore as mutations. A successful mutation is
//! followed by explicit invalidation of every `["tags", ..]` entry and a
//! refetch of those entries.

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use leptos_query_cache::{Mutation, QueryClient, QueryFilter, QueryKey};

use crate::api::{ApiResult, TagsApi};
use crate::form::{FormErrors, FormValues};
use crate::models::{CreateTag, Tag};

pub fn active_tags_key() -> QueryKey {
    QueryKey::from(["tags"])
}

pub fn deleted_tags_key() -> QueryKey {
    QueryKey::from(["tags", "deleted"])
}

/// Everything under `["tags"]`, both lists included
pub fn all_tags_filter() -> QueryFilter {
    QueryFilter::prefix(active_tags_key())
}

type TagListFuture = LocalBoxFuture<'static, ApiResult<Vec<Tag>>>;

/// Fetcher for the active list (`GET /tags`)
pub fn active_tags_fetcher(api: TagsApi) -> impl Fn() -> TagListFuture + Send + Sync + 'static {
    move || {
        let api = api.clone();
        async move { api.list_tags().await }.boxed_local()
    }
}

/// Fetcher for the deleted list (`GET /tags?deleted=true`)
pub fn deleted_tags_fetcher(api: TagsApi) -> impl Fn() -> TagListFuture + Send + Sync + 'static {
    move || {
        let api = api.clone();
        async move { api.list_deleted_tags().await }.boxed_local()
    }
}

/// What happened to a form submission
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent
    Invalid(FormErrors),
    Failed(String),
    Created(Option<Tag>),
}

#[derive(Clone)]
pub struct TagActions {
    client: QueryClient,
    pub create: Mutation<CreateTag, Option<Tag>>,
    pub delete: Mutation<String, ()>,
    pub restore: Mutation<String, ()>,
}

impl TagActions {
    pub fn new(client: QueryClient, api: TagsApi) -> Self {
        let create = {
            let api = api.clone();
            Mutation::new("create_tag", move |input: CreateTag| {
                let api = api.clone();
                async move { api.create_tag(&input).await }
            })
        };
        let delete = {
            let api = api.clone();
            Mutation::new("delete_tag", move |hash: String| {
                let api = api.clone();
                async move { api.delete_tag(&hash).await }
            })
        };
        let restore = Mutation::new("restore_tag", move |hash: String| {
            let api = api.clone();
            async move { api.restore_tag(&hash).await }
        });

        Self {
            client,
            create,
            delete,
            restore,
        }
    }

    /// Validate the form, then create
    pub async fn submit(&self, values: &FormValues) -> SubmitOutcome {
        let input = match CreateTag::from_form(values) {
            Ok(input) => input,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };
        match self.create(input).await {
            Ok(created) => SubmitOutcome::Created(created),
            Err(message) => SubmitOutcome::Failed(message),
        }
    }

    pub async fn create(&self, input: CreateTag) -> Result<Option<Tag>, String> {
        let result = self.create.mutate(input).await;
        if result.is_ok() {
            self.refresh().await;
        }
        result
    }

    pub async fn delete(&self, hash: String) -> Result<(), String> {
        let result = self.delete.mutate(hash).await;
        if result.is_ok() {
            self.refresh().await;
        }
        result
    }

    pub async fn restore(&self, hash: String) -> Result<(), String> {
        let result = self.restore.mutate(hash).await;
        if result.is_ok() {
            self.refresh().await;
        }
        result
    }

    async fn refresh(&self) {
        let keys = self.client.invalidate_queries(&all_tags_filter());
        self.client.refetch_queries(&keys).await;
    }
}
