//! Browser Bindings
//!
//! Timer and confirmation prompt backed by the browser window.

use std::time::Duration;

use gloo_timers::callback::Timeout;

use crate::surface::{Confirmer, HideTimer, TimerGuard};

/// `setTimeout`-backed timer; dropping the `Timeout` clears it
pub struct GlooTimer;

impl HideTimer for GlooTimer {
    fn arm(&self, delay: Duration, on_fire: Box<dyn FnOnce()>) -> TimerGuard {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        TimerGuard::new(Timeout::new(millis, on_fire))
    }
}

/// `window.confirm`
pub struct WindowConfirmer;

impl Confirmer for WindowConfirmer {
    fn confirm(&self, prompt: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(prompt).ok())
            .unwrap_or(false)
    }
}
