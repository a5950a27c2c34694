use catalog_core::{CardView, Post};
use leptos::prelude::*;

use crate::components::card::CardPanel;
use crate::components::post_modal::PostModal;
use crate::page::{Page, summary};
use crate::state::AppState;

#[component]
pub(crate) fn PostsPage(state: AppState) -> impl IntoView {
    let on_commit = Callback::new(move |post: Post| state.add_post(post));

    view! {
        <section class="page">
            <div class="toolbar">
                <button
                    on:click=move |_| state.open_modal(Page::Posts)
                    disabled=move || state.loading.get()
                >
                    {Page::Posts.add_label()}
                </button>
                <span>
                    {move || summary(Page::Posts, state.posts.with(|posts| posts.len()), state.loading.get())}
                </span>
            </div>
            <div class="grid">
                <For
                    each=move || {
                        state
                            .posts
                            .with(|posts| posts.items().iter().map(CardView::card).enumerate().collect::<Vec<_>>())
                    }
                    key=|(index, _)| *index
                    children=|(_, card)| view! { <CardPanel card=card /> }
                />
            </div>
            <Show when=move || state.post_modal.with(|modal| modal.is_open())>
                <PostModal modal=state.post_modal on_commit=on_commit />
            </Show>
        </section>
    }
}
