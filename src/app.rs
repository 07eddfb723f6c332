//! Tag Admin App
//!
//! Root component: header, tags page, footer.

use leptos::prelude::*;

use crate::components::{PageFooter, PageHeader};
use crate::context::AppContext;
use crate::pages::TagsPage;

#[component]
pub fn App(context: AppContext) -> impl IntoView {
    // Provide context to all children
    provide_context(context);

    view! {
        <PageHeader />
        <hr />
        <TagsPage />
        <hr />
        <PageFooter />
    }
}
