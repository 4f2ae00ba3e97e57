//! Signup Panel Component
//!
//! Email field plus activity selector; submitting raises a signup.

use leptos::prelude::*;

use crate::context::AppContext;
use crate::router::Interaction;
use crate::store::{use_page_store, PageStateStoreFields};
use crate::text;

#[component]
pub fn SignupPanel() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_page_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.route(Interaction::SubmitSignup);
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">{text::EMAIL_LABEL}</label>
                <input
                    type="email"
                    id="email"
                    required=true
                    placeholder=text::EMAIL_PLACEHOLDER
                    prop:value=move || store.email().get()
                    on:input=move |ev| store.email().set(event_target_value(&ev))
                />
            </div>
            <div class="form-group">
                <label for="activity">{text::ACTIVITY_LABEL}</label>
                <select
                    id="activity"
                    required=true
                    prop:value=move || {
                        // Re-applied after the options are rebuilt
                        store.options().track();
                        store.activity().get()
                    }
                    on:change=move |ev| store.activity().set(event_target_value(&ev))
                >
                    <option value="" prop:selected=move || store.activity().get().is_empty()>
                        {text::SELECT_PLACEHOLDER}
                    </option>
                    {move || store.options().get().into_iter().map(|option| {
                        let value = option.value.clone();
                        view! {
                            <option
                                value=option.value
                                prop:selected=move || store.activity().get() == value
                            >
                                {option.label}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </div>
            <button type="submit">{text::SIGNUP_BUTTON}</button>
        </form>
    }
}
