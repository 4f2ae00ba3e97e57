//! Status Notifier
//!
//! Owns the transient success/error banner.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::models::{StatusKind, StatusMessage};
use crate::surface::{HideTimer, StatusBanner, TimerGuard};

pub struct StatusNotifier {
    banner: Rc<dyn StatusBanner>,
    timer: Rc<dyn HideTimer>,
    delay: Duration,
    /// Hide timer of the message currently shown
    pending: RefCell<Option<TimerGuard>>,
}

impl StatusNotifier {
    pub fn new(banner: Rc<dyn StatusBanner>, timer: Rc<dyn HideTimer>, delay: Duration) -> Self {
        Self { banner, timer, delay, pending: RefCell::new(None) }
    }

    /// Show `text` and hide it after the configured delay. A newer
    /// message cancels the older one's timer.
    pub fn show_status(&self, text: impl Into<String>, kind: StatusKind) {
        self.banner.show(&StatusMessage { text: text.into(), kind });
        let banner = self.banner.clone();
        let guard = self.timer.arm(self.delay, Box::new(move || banner.hide()));
        let previous = self.pending.replace(Some(guard));
        drop(previous);
    }
}
