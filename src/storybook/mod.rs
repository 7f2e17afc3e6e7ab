//! Storybook - Component preview system for button-kit
//!
//! # Components
//!
//! - [`Story`] - Trait for defining previewable stories
//! - [`StoryBrowser`] - Main UI for browsing stories
//! - [`story_container`], [`story_section`], etc. - Layout helpers
//!
//! # Usage
//!
//! ```ignore
//! use crate::storybook::{Story, StoryLayout, story_container, story_section, story_item};
//!
//! pub struct MyComponentStory;
//!
//! impl Story for MyComponentStory {
//!     fn id(&self) -> &'static str { "my-component" }
//!     fn name(&self) -> &'static str { "My Component" }
//!     fn category(&self) -> &'static str { "Components" }
//!     fn render(&self) -> AnyElement {
//!         story_container(self.layout())
//!             .child(story_section("Variants")
//!                 .child(story_item("Default", MyComponent::new())))
//!             .into_any_element()
//!     }
//! }
//!
//! // Register it in stories/mod.rs get_all_stories()
//! ```

mod browser;
mod layout;
mod registry;
mod story;

pub use browser::StoryBrowser;
pub use layout::{
    code_block, story_container, story_divider, story_item, story_row, story_section,
    PREVIEW_BACKGROUND,
};
pub use registry::{
    all_categories, all_stories, filter_stories, find_story, stories_by_category, StoryEntry,
};
pub use story::{Story, StoryLayout, StoryMeta, StoryVariant};
