//! Leptos Query Cache
//!
//! Keyed cache of server state for Leptos CSR apps, with request
//! de-duplication, explicit invalidation and per-invocation mutation state.

mod client;
mod hooks;
mod key;
mod mutation;

pub use client::{FetchOutcome, QueryClient, QueryState, QueryStatus};
pub use hooks::{use_query, use_query_client, QueryClientProvider, QueryHandle};
pub use key::{QueryFilter, QueryKey};
pub use mutation::{Mutation, MutationState};
