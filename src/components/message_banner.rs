//! Message Banner Component

use leptos::prelude::*;

use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn MessageBanner() -> impl IntoView {
    let store = use_page_store();

    view! {
        <div
            id="message"
            class=move || store.banner().get().css_class()
            hidden=move || store.banner().get().is_hidden()
        >
            {move || store.banner().get().text()}
        </div>
    }
}
