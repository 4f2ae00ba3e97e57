//! Activities Frontend App
//!
//! Wires the loader, dispatcher and notifier to the page store and lays
//! out the directory next to the signup panel.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::{ActivityApi, HttpActivityApi};
use crate::components::{ActivityList, MessageBanner, SignupPanel};
use crate::config::ClientConfig;
use crate::context::AppContext;
use crate::dispatcher::MutationDispatcher;
use crate::loader::DirectoryLoader;
use crate::router::{Interaction, InteractionKind, InteractionRouter};
use crate::status::StatusNotifier;
use crate::store::{PagePort, PageState};
use crate::text;
use crate::web::{GlooTimer, WindowConfirmer};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(PageState::default());
    provide_context(store);

    let config = ClientConfig::from_window().unwrap_or_default();
    log::info!("[APP] Using API at {}", config.api_base);

    let port = Rc::new(PagePort::new(store));
    let api: Rc<dyn ActivityApi> = Rc::new(HttpActivityApi::new(config.api_base.clone()));
    let loader = Rc::new(DirectoryLoader::new(api.clone(), port.clone(), port.clone()));
    let notifier = Rc::new(StatusNotifier::new(port.clone(), Rc::new(GlooTimer), config.status_hide_delay));
    let dispatcher = Rc::new(MutationDispatcher::new(api, loader.clone(), notifier, port, Rc::new(WindowConfirmer)));

    provide_context(AppContext::new(build_router(dispatcher, |task: Task| spawn_local(task))));

    // Initial load
    spawn_local(async move { loader.load().await });

    view! {
        <main class="activities-app">
            <section id="activities-container">
                <h3>{text::ACTIVITIES_HEADING}</h3>
                <ActivityList />
            </section>
            <section id="signup-container">
                <h3>{text::SIGNUP_HEADING}</h3>
                <SignupPanel />
                <MessageBanner />
            </section>
        </main>
    }
}

/// A dispatcher run started by the router
pub type Task = Pin<Box<dyn Future<Output = ()>>>;

fn build_router<S>(dispatcher: Rc<MutationDispatcher>, spawn: S) -> InteractionRouter
where
    S: Fn(Task) + Clone + 'static,
{
    let signup = dispatcher.clone();
    let spawn_signup = spawn.clone();
    InteractionRouter::new()
        .on(InteractionKind::SubmitSignup, move |_| {
            let dispatcher = signup.clone();
            spawn_signup(Box::pin(async move { dispatcher.submit_signup().await }));
        })
        .on(InteractionKind::RemoveParticipant, move |interaction| {
            if let Interaction::RemoveParticipant { activity, email } = interaction {
                let dispatcher = dispatcher.clone();
                spawn(Box::pin(async move { dispatcher.remove_participant(&activity, &email).await }));
            }
        })
}
