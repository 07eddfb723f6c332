//! Tag List Component
//!
//! One list of tags with a per-row action button (delete or restore).

use leptos::prelude::*;

use crate::models::Tag;
use crate::view_state::{ListView, MutationFeedback, LOADING};

#[component]
pub fn TagList(
    #[prop(into)] list: Signal<ListView<Tag>>,
    action_label: &'static str,
    #[prop(into)] on_action: Callback<String>,
    #[prop(into)] feedback: Signal<MutationFeedback>,
) -> impl IntoView {
    let message = move || match list.get() {
        ListView::Loading => Some(LOADING.to_string()),
        ListView::Error(message) => Some(message),
        ListView::Empty(message) => Some(message.to_string()),
        ListView::Items(_) => None,
    };

    let items = move || match list.get() {
        ListView::Items(tags) => tags,
        _ => Vec::new(),
    };

    view! {
        {move || feedback.get().text().map(|text| view! { <p class="action-error">{text}</p> })}
        {move || message().map(|text| view! { <p>{text}</p> })}
        <ul>
            <For
                each=items
                key=|tag| tag.hash.clone()
                children=move |tag| {
                    let hash = tag.hash.clone();
                    view! {
                        <li>
                            {tag.name}
                            <button
                                type="button"
                                on:click=move |_| on_action.run(hash.clone())
                            >
                                {action_label}
                            </button>
                        </li>
                    }
                }
            />
        </ul>
    }
}
