//! Tags Page
//!
//! Create form, active list with delete, deleted list with restore. All
//! state comes from the query cache and the three mutations.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_query_cache::{use_query, use_query_client, Mutation};

use crate::actions::{
    active_tags_fetcher, active_tags_key, deleted_tags_fetcher, deleted_tags_key, TagActions,
};
use crate::components::{NewTagForm, TagList};
use crate::context::use_app_context;
use crate::view_state::{ListView, MutationFeedback, ACTIVE_EMPTY, DELETED_EMPTY};

fn action_feedback(mutation: &Mutation<String, ()>) -> Signal<MutationFeedback> {
    let mutation = mutation.clone();
    Signal::derive(move || MutationFeedback::for_list_action(&mutation.state()))
}

#[component]
pub fn TagsPage() -> impl IntoView {
    let ctx = use_app_context();
    let actions = TagActions::new(use_query_client(), ctx.api.clone());

    let active = use_query(active_tags_key(), active_tags_fetcher(ctx.api.clone()));
    let deleted = use_query(deleted_tags_key(), deleted_tags_fetcher(ctx.api.clone()));

    let active_list = Signal::derive(move || ListView::from_query(&active.state(), ACTIVE_EMPTY));
    let deleted_list =
        Signal::derive(move || ListView::from_query(&deleted.state(), DELETED_EMPTY));

    let on_delete = {
        let actions = actions.clone();
        Callback::new(move |hash: String| {
            let actions = actions.clone();
            spawn_local(async move {
                let _ = actions.delete(hash).await;
            });
        })
    };

    let on_restore = {
        let actions = actions.clone();
        Callback::new(move |hash: String| {
            let actions = actions.clone();
            spawn_local(async move {
                let _ = actions.restore(hash).await;
            });
        })
    };

    let delete_feedback = action_feedback(&actions.delete);
    let restore_feedback = action_feedback(&actions.restore);

    view! {
        <main>
            <h2>"Adicionar uma tag"</h2>
            <NewTagForm actions=actions />

            <h2>"Tags cadastradas"</h2>
            <TagList
                list=active_list
                action_label="delete"
                on_action=on_delete
                feedback=delete_feedback
            />

            <h2>"Tags apagadas"</h2>
            <TagList
                list=deleted_list
                action_label="restore"
                on_action=on_restore
                feedback=restore_feedback
            />
        </main>
    }
}
