//! View State
//!
//! What each part of the page shows, derived from query and mutation state
//! alone.

use leptos_query_cache::{MutationState, QueryState, QueryStatus};

pub const ACTIVE_EMPTY: &str = "Nenhuma tag cadastrada";
pub const DELETED_EMPTY: &str = "Nenhuma tag apagada";
pub const LOADING: &str = "Loading...";
pub const CREATE_PENDING: &str = "Adding todo...";
pub const CREATE_SUCCESS: &str = "Todo added!";

pub fn error_text(message: &str) -> String {
    format!("An error occurred: {message}")
}

#[derive(Clone, Debug, PartialEq)]
pub enum ListView<T> {
    Loading,
    Error(String),
    Empty(&'static str),
    Items(Vec<T>),
}

impl<T: Clone> ListView<T> {
    /// An error wins over cached data, so a failed list never shows stale rows
    pub fn from_query(state: &QueryState<Vec<T>>, empty: &'static str) -> Self {
        match (state.status, &state.data) {
            (QueryStatus::Error, _) => {
                ListView::Error(state.error.clone().unwrap_or_default())
            }
            (_, Some(items)) if items.is_empty() => ListView::Empty(empty),
            (_, Some(items)) => ListView::Items(items.clone()),
            (_, None) => ListView::Loading,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MutationFeedback {
    None,
    Pending(&'static str),
    Error(String),
    Success(&'static str),
}

impl MutationFeedback {
    /// Feedback under the create form
    pub fn for_create<O>(state: &MutationState<O>) -> Self {
        match state {
            MutationState::Idle => MutationFeedback::None,
            MutationState::Pending => MutationFeedback::Pending(CREATE_PENDING),
            MutationState::Error(message) => MutationFeedback::Error(error_text(message)),
            MutationState::Success(_) => MutationFeedback::Success(CREATE_SUCCESS),
        }
    }

    /// Delete/restore only report failures
    pub fn for_list_action<O>(state: &MutationState<O>) -> Self {
        match state {
            MutationState::Error(message) => MutationFeedback::Error(error_text(message)),
            _ => MutationFeedback::None,
        }
    }

    pub fn text(&self) -> Option<String> {
        match self {
            MutationFeedback::None => None,
            MutationFeedback::Pending(text) | MutationFeedback::Success(text) => {
                Some(text.to_string())
            }
            MutationFeedback::Error(text) => Some(text.clone()),
        }
    }
}
