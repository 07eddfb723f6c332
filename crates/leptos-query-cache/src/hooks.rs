//! Leptos integration: provider, context lookup and the `use_query` hook.

use std::fmt::Display;
use std::future::Future;
use std::marker::PhantomData;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::client::{erase_fetcher, QueryClient, QueryState};
use crate::key::QueryKey;

/// Makes `client` available to every descendant via `use_query_client`
#[component]
pub fn QueryClientProvider(client: QueryClient, children: Children) -> impl IntoView {
    provide_context(client);
    children()
}

/// The client provided by the nearest `QueryClientProvider`
pub fn use_query_client() -> QueryClient {
    expect_context::<QueryClient>()
}

/// Typed view onto one cache entry
pub struct QueryHandle<T> {
    client: QueryClient,
    key: QueryKey,
    _data: PhantomData<fn() -> T>,
}

impl<T> Clone for QueryHandle<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            key: self.key.clone(),
            _data: PhantomData,
        }
    }
}

impl<T: Clone + 'static> QueryHandle<T> {
    pub fn new(client: QueryClient, key: QueryKey) -> Self {
        Self {
            client,
            key,
            _data: PhantomData,
        }
    }

    pub fn key(&self) -> &QueryKey {
        &self.key
    }

    /// Reactive snapshot of the entry
    pub fn state(&self) -> QueryState<T> {
        self.client.query_state(&self.key)
    }
}

/// Subscribe a component to `key`.
///
/// Registers `fetcher` so later invalidations can refetch it, and starts a
/// fetch when the entry is new or stale. Concurrent callers for the same key
/// share the in-flight request.
pub fn use_query<T, F, Fut, E>(key: impl Into<QueryKey>, fetcher: F) -> QueryHandle<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
    E: Display,
{
    let client = use_query_client();
    let key = key.into();
    let fetcher = erase_fetcher(fetcher);
    client.register(&key, fetcher.clone());

    if client.needs_fetch(&key) {
        let client = client.clone();
        let key = key.clone();
        spawn_local(async move {
            client.run_fetch(&key, &fetcher).await;
        });
    }

    QueryHandle::new(client, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::QueryStatus;

    #[tokio::test]
    async fn test_handle_reads_typed_state() {
        let client = QueryClient::new();
        let key = QueryKey::from(["tags"]);
        client
            .fetch_query(key.clone(), || async { Ok::<_, String>(vec![3u32, 5]) })
            .await;

        let handle = QueryHandle::<Vec<u32>>::new(client, key.clone());

        assert_eq!(handle.key(), &key);
        let state = handle.state();
        assert_eq!(state.status, QueryStatus::Success);
        assert_eq!(state.data, Some(vec![3, 5]));
    }

    #[tokio::test]
    async fn test_handle_with_wrong_type_has_no_data() {
        let client = QueryClient::new();
        let key = QueryKey::from(["tags"]);
        client
            .fetch_query(key.clone(), || async { Ok::<_, String>(7u32) })
            .await;

        let state = QueryHandle::<String>::new(client, key).state();
        assert!(state.is_success());
        assert_eq!(state.data, None);
    }
}
