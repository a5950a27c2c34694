use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::header::Header;
use crate::page::Page;
use crate::pages::posts::PostsPage;
use crate::pages::users::UsersPage;
use crate::state::AppState;

/// Однократная загрузка обоих списков при старте.
fn load_catalog(state: AppState) {
    state.loading.set(true);
    state.clear_error();

    spawn_local(async move {
        match api::list_users().await {
            Ok(users) => state.users.update(|collection| collection.merge_fetched(users)),
            Err(err) => state.set_error(format!("users: {err}")),
        }
        match api::list_posts().await {
            Ok(posts) => state.posts.update(|collection| collection.merge_fetched(posts)),
            Err(err) => state.set_error(format!("posts: {err}")),
        }
        state.loading.set(false);
    });
}

#[component]
pub fn App() -> impl IntoView {
    let state = AppState::new();

    load_catalog(state);

    let error_text = move || state.error.get().unwrap_or_default();

    view! {
        <main class="layout">
            <Header state=state />

            <Show when=move || state.error.get().is_some()>
                <div class="error-banner">
                    <strong>"Error: "</strong>
                    {error_text}
                </div>
            </Show>

            {move || match state.page.get() {
                Page::Users => view! { <UsersPage state=state /> }.into_any(),
                Page::Posts => view! { <PostsPage state=state /> }.into_any(),
            }}
        </main>
    }
}
