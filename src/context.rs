//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use crate::router::{Interaction, InteractionRouter};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Routes page interactions to the dispatcher
    router: StoredValue<Rc<InteractionRouter>, LocalStorage>,
}

impl AppContext {
    pub fn new(router: InteractionRouter) -> Self {
        Self { router: StoredValue::new_local(Rc::new(router)) }
    }

    /// Raise a user interaction
    pub fn route(&self, interaction: Interaction) {
        self.router.with_value(|router| {
            router.route(interaction);
        });
    }
}
