//! Page Header and Footer
//!
//! Static navigation around the tags page. Routing lives elsewhere; only the
//! logout entry is a link.

use leptos::prelude::*;

const NAV_ITEMS: &[&str] = &["Home", "Reports", "Tags", "Preferences"];

#[component]
pub fn PageHeader() -> impl IntoView {
    view! {
        <header>
            <h1>"Events"</h1>
            <nav>
                <ul>
                    {NAV_ITEMS.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                    <li>
                        <a href="/logout">"Logout"</a>
                    </li>
                </ul>
            </nav>
        </header>
    }
}

#[component]
pub fn PageFooter() -> impl IntoView {
    view! { <footer>"2023"</footer> }
}
