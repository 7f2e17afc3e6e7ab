//! Story registry - manual registration for compile-time story collection
//!
//! Stories are collected in the stories module and returned via
//! `get_all_stories()`.

use super::Story;

/// Entry for a registered story
pub struct StoryEntry {
    pub story: Box<dyn Story>,
}

impl StoryEntry {
    pub fn new(story: Box<dyn Story>) -> Self {
        Self { story }
    }

    /// Case-insensitive match on name, category, or id
    pub fn matches(&self, filter: &str) -> bool {
        if filter.is_empty() {
            return true;
        }
        let filter = filter.to_lowercase();
        self.story.name().to_lowercase().contains(&filter)
            || self.story.category().to_lowercase().contains(&filter)
            || self.story.id().contains(&filter)
    }
}

/// Get all registered stories
pub fn all_stories() -> impl Iterator<Item = &'static StoryEntry> {
    crate::stories::get_all_stories().iter()
}

/// Find a story by id
pub fn find_story(id: &str) -> Option<&'static StoryEntry> {
    all_stories().find(|e| e.story.id() == id)
}

/// Stories matching a search filter, in registration order
pub fn filter_stories(filter: &str) -> Vec<&'static StoryEntry> {
    all_stories().filter(|e| e.matches(filter)).collect()
}

/// Find stories by category
pub fn stories_by_category(category: &str) -> Vec<&'static StoryEntry> {
    all_stories()
        .filter(|e| e.story.category() == category)
        .collect()
}

/// Get unique categories
pub fn all_categories() -> Vec<&'static str> {
    let mut categories: Vec<_> = all_stories().map(|e| e.story.category()).collect();
    categories.sort();
    categories.dedup();
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_ids_are_unique() {
        let mut ids: Vec<_> = all_stories().map(|e| e.story.id()).collect();
        let count = ids.len();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }

    #[test]
    fn test_button_stories_registered() {
        assert_eq!(find_story("button").map(|e| e.story.name()), Some("Button"));
        assert!(find_story("button-playground").is_some());
        assert!(find_story("missing").is_none());
    }

    #[test]
    fn test_categories() {
        assert_eq!(all_categories(), vec!["Components"]);
        assert_eq!(stories_by_category("Components").len(), all_stories().count());
    }

    #[test]
    fn test_filter_stories() {
        assert_eq!(filter_stories("").len(), all_stories().count());
        assert_eq!(filter_stories("PLAYGROUND").len(), 1);
        assert_eq!(filter_stories("components").len(), all_stories().count());
        assert!(filter_stories("zzz").is_empty());
    }
}
