use leptos::prelude::*;

use crate::page::Page;
use crate::state::AppState;

#[component]
pub(crate) fn Header(state: AppState) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Catalog"</h1>
            <nav>
                {Page::ALL
                    .into_iter()
                    .map(|page| {
                        view! {
                            <button
                                class:active=move || state.page.get() == page
                                on:click=move |_| state.page.set(page)
                            >
                                {page.title()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
        </header>
    }
}
