//! Directory Loader
//!
//! Fetches the whole directory and rebuilds the cards and the selector
//! from it. Every run is a full replace, so overlapping runs settle on
//! whichever response arrives last.

use std::rc::Rc;

use crate::api::ActivityApi;
use crate::render::{render_cards, render_options};
use crate::surface::{ActivitiesContainer, ActivitySelector};
use crate::text;

pub struct DirectoryLoader {
    api: Rc<dyn ActivityApi>,
    container: Rc<dyn ActivitiesContainer>,
    selector: Rc<dyn ActivitySelector>,
}

impl DirectoryLoader {
    pub fn new(
        api: Rc<dyn ActivityApi>,
        container: Rc<dyn ActivitiesContainer>,
        selector: Rc<dyn ActivitySelector>,
    ) -> Self {
        Self { api, container, selector }
    }

    pub async fn load(&self) {
        match self.api.fetch_directory().await {
            Ok(directory) => {
                log::info!("[LOADER] Loaded {} activities", directory.len());
                self.container.replace_cards(render_cards(&directory));
                self.selector.replace_options(render_options(&directory));
            }
            Err(err) => {
                log::error!("[LOADER] Failed to load activities: {}", err);
                self.container.show_failure(text::LOAD_FAILED);
            }
        }
    }
}
