//! Render Model
//!
//! Turns a directory into the cards and selector options the page shows.

use crate::models::{Activity, Directory};
use crate::router::Interaction;
use crate::text;

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub roster: Roster,
}

impl ActivityCard {
    pub fn from_activity(name: &str, activity: &Activity) -> Self {
        let roster = if activity.participants.is_empty() {
            Roster::Empty
        } else {
            Roster::Entries(
                activity
                    .participants
                    .iter()
                    .map(|email| RosterEntry {
                        email: email.clone(),
                        intent: Interaction::remove(name, email.as_str()),
                    })
                    .collect(),
            )
        };
        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            roster,
        }
    }

    pub fn availability_text(&self) -> String {
        text::spots_available(self.spots_left)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Roster {
    /// Shown as the "no participants yet" placeholder
    Empty,
    Entries(Vec<RosterEntry>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RosterEntry {
    pub email: String,
    /// Raised by the entry's removal control
    pub intent: Interaction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorOption {
    pub value: String,
    pub label: String,
}

pub fn render_cards(directory: &Directory) -> Vec<ActivityCard> {
    directory
        .iter()
        .map(|(name, activity)| ActivityCard::from_activity(name, activity))
        .collect()
}

pub fn render_options(directory: &Directory) -> Vec<SelectorOption> {
    directory
        .names()
        .map(|name| SelectorOption { value: name.to_string(), label: name.to_string() })
        .collect()
}
