//! Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! what the page components render; `PagePort` is how the loader, the
//! dispatcher and the notifier write to it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::StatusMessage;
use crate::render::{ActivityCard, SelectorOption};
use crate::surface::{ActivitiesContainer, ActivitySelector, SignupForm, StatusBanner};

/// What the activities container currently shows
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Listing {
    #[default]
    Loading,
    Cards(Vec<ActivityCard>),
    Failed(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Banner {
    pub message: Option<StatusMessage>,
    pub visible: bool,
}

impl Banner {
    /// Drives the element's `hidden` attribute
    pub fn is_hidden(&self) -> bool {
        self.message.is_none() || !self.visible
    }

    pub fn css_class(&self) -> String {
        match (&self.message, self.visible) {
            (Some(message), true) => message.kind.css_class().to_string(),
            (Some(message), false) => format!("{} hidden", message.kind.css_class()),
            (None, _) => "hidden".to_string(),
        }
    }

    pub fn text(&self) -> String {
        self.message.as_ref().map(|m| m.text.clone()).unwrap_or_default()
    }
}

/// Page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct PageState {
    pub listing: Listing,
    /// Selector options, one per activity
    pub options: Vec<SelectorOption>,
    /// Signup form fields
    pub email: String,
    pub activity: String,
    pub banner: Banner,
}

pub type PageStore = Store<PageState>;

/// Get the page store from context
pub fn use_page_store() -> PageStore {
    expect_context::<PageStore>()
}

/// Surface implementation writing into the page store
#[derive(Clone, Copy)]
pub struct PagePort {
    store: PageStore,
}

impl PagePort {
    pub fn new(store: PageStore) -> Self {
        Self { store }
    }
}

impl ActivitiesContainer for PagePort {
    fn replace_cards(&self, cards: Vec<ActivityCard>) {
        self.store.listing().set(Listing::Cards(cards));
    }

    fn show_failure(&self, notice: &str) {
        self.store.listing().set(Listing::Failed(notice.to_string()));
    }
}

impl ActivitySelector for PagePort {
    // A selection whose activity vanished from the directory is dropped.
    fn replace_options(&self, options: Vec<SelectorOption>) {
        let selected = self.store.activity().get_untracked();
        if !selected.is_empty() && !options.iter().any(|option| option.value == selected) {
            self.store.activity().set(String::new());
        }
        self.store.options().set(options);
    }
}

impl SignupForm for PagePort {
    fn email(&self) -> String {
        self.store.email().get_untracked()
    }

    fn activity(&self) -> String {
        self.store.activity().get_untracked()
    }

    fn reset(&self) {
        self.store.email().set(String::new());
        self.store.activity().set(String::new());
    }
}

impl StatusBanner for PagePort {
    fn show(&self, message: &StatusMessage) {
        self.store.banner().set(Banner { message: Some(message.clone()), visible: true });
    }

    fn hide(&self) {
        self.store.banner().update(|banner| banner.visible = false);
    }
}
