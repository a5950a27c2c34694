use catalog_core::Card;
use leptos::prelude::*;

#[component]
pub(crate) fn CardPanel(card: Card) -> impl IntoView {
    let Card {
        heading,
        lines,
        sections,
    } = card;

    view! {
        <article class="card">
            <h2>{heading}</h2>
            {lines
                .into_iter()
                .map(|line| view! { <p>{line}</p> })
                .collect_view()}
            {sections
                .into_iter()
                .map(|section| {
                    view! {
                        <div class="card-section">
                            <h3>{format!("{}:", section.title)}</h3>
                            {section
                                .lines
                                .into_iter()
                                .map(|line| view! { <p>{line}</p> })
                                .collect_view()}
                        </div>
                    }
                })
                .collect_view()}
        </article>
    }
}
