//! Interaction Router
//!
//! Maps user intents raised by the page to the handler registered for
//! their kind.

use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionKind {
    SubmitSignup,
    RemoveParticipant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    SubmitSignup,
    RemoveParticipant { activity: String, email: String },
}

impl Interaction {
    pub fn remove(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Interaction::RemoveParticipant { activity: activity.into(), email: email.into() }
    }

    pub fn kind(&self) -> InteractionKind {
        match self {
            Interaction::SubmitSignup => InteractionKind::SubmitSignup,
            Interaction::RemoveParticipant { .. } => InteractionKind::RemoveParticipant,
        }
    }
}

pub type Handler = Rc<dyn Fn(Interaction)>;

#[derive(Default)]
pub struct InteractionRouter {
    routes: HashMap<InteractionKind, Handler>,
}

impl InteractionRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for `kind`, replacing any earlier one
    pub fn on(mut self, kind: InteractionKind, handler: impl Fn(Interaction) + 'static) -> Self {
        self.routes.insert(kind, Rc::new(handler));
        self
    }

    /// Hand `interaction` to its handler. Returns false if none is registered.
    pub fn route(&self, interaction: Interaction) -> bool {
        match self.routes.get(&interaction.kind()) {
            Some(handler) => {
                handler(interaction);
                true
            }
            None => {
                log::warn!("[ROUTER] no handler for {:?}", interaction.kind());
                false
            }
        }
    }
}
