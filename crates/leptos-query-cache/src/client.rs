//! Query Client
//!
//! Keyed cache of last-known server state. Each entry lives in its own
//! `ArcRwSignal`, so views reading an entry re-render when it changes.

use std::any::Any;
use std::collections::HashMap;
use std::fmt::Display;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{join_all, LocalBoxFuture};
use futures::FutureExt;
use leptos::prelude::*;
use tracing::{debug, warn};

use crate::key::{QueryFilter, QueryKey};

type AnyData = Arc<dyn Any + Send + Sync>;

/// Type-erased fetcher registered for a key
pub(crate) type Fetcher =
    Arc<dyn Fn() -> LocalBoxFuture<'static, Result<AnyData, String>> + Send + Sync>;

pub(crate) fn erase_fetcher<T, F, Fut, E>(fetcher: F) -> Fetcher
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T, E>> + 'static,
    E: Display,
{
    Arc::new(move || {
        fetcher()
            .map(|result| match result {
                Ok(data) => Ok(Arc::new(data) as AnyData),
                Err(err) => Err(err.to_string()),
            })
            .boxed_local()
    })
}

/// Lifecycle of a cached query
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum QueryStatus {
    #[default]
    Idle,
    Pending,
    Success,
    Error,
}

/// Snapshot of one cache entry, typed
#[derive(Clone, Debug, PartialEq)]
pub struct QueryState<T> {
    pub status: QueryStatus,
    pub data: Option<T>,
    pub error: Option<String>,
    pub is_fetching: bool,
    pub is_stale: bool,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            status: QueryStatus::Idle,
            data: None,
            error: None,
            is_fetching: false,
            is_stale: false,
        }
    }
}

impl<T> QueryState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self.status, QueryStatus::Idle | QueryStatus::Pending)
    }

    pub fn is_error(&self) -> bool {
        self.status == QueryStatus::Error
    }

    pub fn is_success(&self) -> bool {
        self.status == QueryStatus::Success
    }
}

/// Result of asking the client to fetch a key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The fetcher ran (possibly more than once if invalidated mid-flight)
    Fetched,
    /// Another fetch for the key was already in flight
    Deduplicated,
}

#[derive(Default)]
struct QueryEntry {
    status: QueryStatus,
    data: Option<AnyData>,
    error: Option<String>,
    fetching: bool,
    stale: bool,
    /// Bumped on every invalidation
    generation: u64,
    fetch_count: u64,
}

#[derive(Default)]
struct Registry {
    entries: HashMap<QueryKey, ArcRwSignal<QueryEntry>>,
    fetchers: HashMap<QueryKey, Fetcher>,
}

/// Shared query cache. Cloning yields another handle to the same store.
#[derive(Clone, Default)]
pub struct QueryClient {
    registry: Arc<Mutex<Registry>>,
}

impl QueryClient {
    pub fn new() -> Self {
        Self::default()
    }

    fn registry(&self) -> MutexGuard<'_, Registry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Entry for `key`, created on first access
    fn entry(&self, key: &QueryKey) -> ArcRwSignal<QueryEntry> {
        self.registry()
            .entries
            .entry(key.clone())
            .or_insert_with(|| ArcRwSignal::new(QueryEntry::default()))
            .clone()
    }

    pub(crate) fn register(&self, key: &QueryKey, fetcher: Fetcher) {
        self.registry().fetchers.insert(key.clone(), fetcher);
    }

    fn fetcher(&self, key: &QueryKey) -> Option<Fetcher> {
        self.registry().fetchers.get(key).cloned()
    }

    /// Keys currently held in the cache
    pub fn keys(&self) -> Vec<QueryKey> {
        let mut keys: Vec<QueryKey> = self.registry().entries.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// True when the entry has never been fetched or was invalidated, and no
    /// fetch is running
    pub fn needs_fetch(&self, key: &QueryKey) -> bool {
        self.entry(key).with_untracked(|e| {
            !e.fetching && (e.status == QueryStatus::Idle || e.stale)
        })
    }

    /// Register `fetcher` for `key` and fetch it
    pub async fn fetch_query<T, F, Fut, E>(&self, key: QueryKey, fetcher: F) -> FetchOutcome
    where
        T: Send + Sync + 'static,
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<T, E>> + 'static,
        E: Display,
    {
        let fetcher = erase_fetcher(fetcher);
        self.register(&key, fetcher.clone());
        self.run_fetch(&key, &fetcher).await
    }

    pub(crate) async fn run_fetch(&self, key: &QueryKey, fetcher: &Fetcher) -> FetchOutcome {
        let entry = self.entry(key);

        let started = entry
            .try_update(|e| {
                if e.fetching {
                    return None;
                }
                e.fetching = true;
                if e.status == QueryStatus::Idle {
                    e.status = QueryStatus::Pending;
                }
                Some(e.generation)
            })
            .flatten();

        let Some(mut generation) = started else {
            debug!(%key, "fetch already in flight");
            return FetchOutcome::Deduplicated;
        };

        loop {
            debug!(%key, "fetching query");
            let result = fetcher().await;
            if let Err(message) = &result {
                warn!(%key, %message, "query failed");
            }

            let invalidated_during_fetch = entry
                .try_update(|e| {
                    match result {
                        Ok(data) => {
                            e.data = Some(data);
                            e.error = None;
                            e.status = QueryStatus::Success;
                        }
                        Err(message) => {
                            e.error = Some(message);
                            e.status = QueryStatus::Error;
                        }
                    }
                    e.fetch_count += 1;
                    if e.generation == generation {
                        e.stale = false;
                        e.fetching = false;
                        None
                    } else {
                        Some(e.generation)
                    }
                })
                .flatten();

            match invalidated_during_fetch {
                Some(next) => generation = next,
                None => return FetchOutcome::Fetched,
            }
        }
    }

    /// Mark matching entries stale and return their keys
    pub fn invalidate_queries(&self, filter: &QueryFilter) -> Vec<QueryKey> {
        let matching: Vec<(QueryKey, ArcRwSignal<QueryEntry>)> = self
            .registry()
            .entries
            .iter()
            .filter(|(key, _)| filter.matches(key))
            .map(|(key, entry)| (key.clone(), entry.clone()))
            .collect();

        let mut keys = Vec::with_capacity(matching.len());
        for (key, entry) in matching {
            entry.update(|e| {
                e.stale = true;
                e.generation += 1;
            });
            debug!(%key, "query invalidated");
            keys.push(key);
        }
        keys.sort();
        keys
    }

    /// Re-run the registered fetchers of `keys` concurrently.
    /// Returns how many fetches ran; in-flight keys and keys without a
    /// fetcher are skipped.
    pub async fn refetch_queries(&self, keys: &[QueryKey]) -> usize {
        let fetches = keys.iter().filter_map(|key| {
            let fetcher = self.fetcher(key)?;
            Some(async move { self.run_fetch(key, &fetcher).await })
        });
        join_all(fetches)
            .await
            .into_iter()
            .filter(|outcome| *outcome == FetchOutcome::Fetched)
            .count()
    }

    /// `invalidate_queries` followed by `refetch_queries`
    pub async fn invalidate_and_refetch(&self, filter: &QueryFilter) -> usize {
        let keys = self.invalidate_queries(filter);
        self.refetch_queries(&keys).await
    }

    /// Typed snapshot of `key`. Tracked when read inside a reactive scope.
    pub fn query_state<T>(&self, key: &QueryKey) -> QueryState<T>
    where
        T: Clone + 'static,
    {
        self.entry(key).with(|e| QueryState {
            status: e.status,
            data: e
                .data
                .as_ref()
                .and_then(|data| data.downcast_ref::<T>())
                .cloned(),
            error: e.error.clone(),
            is_fetching: e.fetching,
            is_stale: e.stale,
        })
    }

    /// Number of completed fetches for `key`
    pub fn fetch_count(&self, key: &QueryKey) -> u64 {
        self.entry(key).with_untracked(|e| e.fetch_count)
    }
}
