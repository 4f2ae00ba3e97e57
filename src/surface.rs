//! Page Surface
//!
//! The page elements the client drives, injected into each component so
//! the components run without a live page.

use std::any::Any;
use std::time::Duration;

use crate::models::StatusMessage;
use crate::render::{ActivityCard, SelectorOption};

/// Container holding one card per activity
pub trait ActivitiesContainer {
    /// Drop whatever is shown and show exactly these cards
    fn replace_cards(&self, cards: Vec<ActivityCard>);
    /// Replace the contents with a single inline notice
    fn show_failure(&self, notice: &str);
}

/// Activity drop-down of the signup form
pub trait ActivitySelector {
    fn replace_options(&self, options: Vec<SelectorOption>);
}

pub trait SignupForm {
    fn email(&self) -> String;
    fn activity(&self) -> String;
    fn reset(&self);
}

pub trait StatusBanner {
    fn show(&self, message: &StatusMessage);
    fn hide(&self);
}

/// Blocking yes/no prompt
pub trait Confirmer {
    fn confirm(&self, prompt: &str) -> bool;
}

/// One-shot timer source
pub trait HideTimer {
    /// Arm a timer; dropping the guard disarms it if it has not fired yet.
    fn arm(&self, delay: Duration, on_fire: Box<dyn FnOnce()>) -> TimerGuard;
}

/// Owns a pending timer
pub struct TimerGuard(#[allow(dead_code)] Box<dyn Any>);

impl TimerGuard {
    pub fn new<T: 'static>(inner: T) -> Self {
        Self(Box::new(inner))
    }
}
