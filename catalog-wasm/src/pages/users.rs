use catalog_core::{CardView, User};
use leptos::prelude::*;

use crate::components::card::CardPanel;
use crate::components::user_modal::UserModal;
use crate::page::{Page, summary};
use crate::state::AppState;

#[component]
pub(crate) fn UsersPage(state: AppState) -> impl IntoView {
    let on_commit = Callback::new(move |user: User| state.add_user(user));

    view! {
        <section class="page">
            <div class="toolbar">
                <button
                    on:click=move |_| state.open_modal(Page::Users)
                    disabled=move || state.loading.get()
                >
                    {Page::Users.add_label()}
                </button>
                <span>
                    {move || summary(Page::Users, state.users.with(|users| users.len()), state.loading.get())}
                </span>
            </div>
            <div class="grid">
                <For
                    each=move || {
                        state
                            .users
                            .with(|users| users.items().iter().map(CardView::card).enumerate().collect::<Vec<_>>())
                    }
                    key=|(index, _)| *index
                    children=|(_, card)| view! { <CardPanel card=card /> }
                />
            </div>
            <Show when=move || state.user_modal.with(|modal| modal.is_open())>
                <UserModal modal=state.user_modal on_commit=on_commit />
            </Show>
        </section>
    }
}
