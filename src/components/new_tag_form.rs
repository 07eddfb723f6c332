//! New Tag Form Component
//!
//! Renders the fields declared in `TAG_FORM`, validates on submit and hands
//! valid values to the create action.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions::{SubmitOutcome, TagActions};
use crate::form::{FormErrors, FormValues, TAG_FORM};
use crate::view_state::MutationFeedback;

#[component]
pub fn NewTagForm(actions: TagActions) -> impl IntoView {
    let (values, set_values) = signal(FormValues::new());
    let (errors, set_errors) = signal(FormErrors::default());

    let feedback = {
        let create = actions.create.clone();
        Signal::derive(move || MutationFeedback::for_create(&create.state()))
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let actions = actions.clone();
        let submitted = values.get_untracked();

        spawn_local(async move {
            match actions.submit(&submitted).await {
                SubmitOutcome::Invalid(found) => set_errors.set(found),
                SubmitOutcome::Created(_) => {
                    set_errors.set(FormErrors::default());
                    set_values.set(FormValues::new());
                }
                SubmitOutcome::Failed(_) => set_errors.set(FormErrors::default()),
            }
        });
    };

    let fields = TAG_FORM
        .fields
        .iter()
        .map(|field| {
            let name = field.name;
            view! {
                <input
                    type=field.kind.input_type()
                    id=format!("{name}-input")
                    name=name
                    autocomplete="off"
                    prop:value=move || values.with(|v| v.get(name).cloned().unwrap_or_default())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_values.update(|v| {
                            v.insert(name, value);
                        });
                    }
                />
                {move || errors.with(|e| e.get(name)).map(|message| view! {
                    <span class="field-error">{message}</span>
                })}
            }
        })
        .collect_view();

    view! {
        <form class="new-tag-form" on:submit=on_submit>
            {fields}
            <button type="submit">"Send"</button>
            {move || feedback.get().text().map(|text| view! { <div>{text}</div> })}
        </form>
    }
}
