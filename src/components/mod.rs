//! UI Components
//!
//! Leptos components rendering the page store.

mod activity_list;
mod signup_panel;
mod message_banner;

pub use activity_list::ActivityList;
pub use signup_panel::SignupPanel;
pub use message_banner::MessageBanner;
