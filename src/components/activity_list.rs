//! Activity List Component
//!
//! One card per activity, rebuilt whenever the listing changes.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::render::{ActivityCard, Roster, RosterEntry};
use crate::store::{use_page_store, Listing, PageStateStoreFields};
use crate::text;

#[component]
pub fn ActivityList() -> impl IntoView {
    let store = use_page_store();

    view! {
        <div id="activities-list">
            {move || match store.listing().get() {
                Listing::Loading => view! { <p>{text::LOADING}</p> }.into_any(),
                Listing::Failed(notice) => view! { <p>{notice}</p> }.into_any(),
                Listing::Cards(cards) => cards
                    .into_iter()
                    .map(|card| view! { <ActivityCardView card=card /> })
                    .collect_view()
                    .into_any(),
            }}
        </div>
    }
}

#[component]
fn ActivityCardView(card: ActivityCard) -> impl IntoView {
    let availability = card.availability_text();
    let roster = match card.roster {
        Roster::Empty => view! {
            <span class="no-participants">{text::NO_PARTICIPANTS}</span>
        }.into_any(),
        Roster::Entries(entries) => view! {
            <ul class="participants-list">
                {entries.into_iter().map(|entry| view! { <ParticipantItem entry=entry /> }).collect_view()}
            </ul>
        }.into_any(),
    };

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p><strong>{text::SCHEDULE_LABEL}</strong>" "{card.schedule}</p>
            <p><strong>{text::AVAILABILITY_LABEL}</strong>" "{availability}</p>
            <div class="participants-section">
                <strong>{text::PARTICIPANTS_TITLE}</strong>
                {roster}
            </div>
        </div>
    }
}

/// Roster entry with its removal control
#[component]
fn ParticipantItem(entry: RosterEntry) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let intent = entry.intent;

    view! {
        <li class="participant-item">
            <span>{entry.email}</span>
            <button
                class="delete-participant"
                title=text::REMOVE_TITLE
                on:click=move |_| ctx.route(intent.clone())
            >
                {text::REMOVE_GLYPH}
            </button>
        </li>
    }
}
