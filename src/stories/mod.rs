//! Story Definitions for button-kit
//!
//! Stories are manually registered in get_all_stories().

pub mod button_catalog;
mod button_stories;

use crate::storybook::StoryEntry;
use std::sync::OnceLock;

pub use button_catalog::{button_catalog, catalog_entry, ButtonArgs, CatalogEntry, CatalogStory};
pub use button_stories::{ButtonPlaygroundStory, ButtonStory};

/// Static storage for all stories
static ALL_STORIES: OnceLock<Vec<StoryEntry>> = OnceLock::new();

/// Get all registered stories
pub fn get_all_stories() -> &'static Vec<StoryEntry> {
    ALL_STORIES.get_or_init(|| {
        vec![
            StoryEntry::new(Box::new(ButtonStory::default())),
            StoryEntry::new(Box::new(ButtonPlaygroundStory::default())),
        ]
    })
}
