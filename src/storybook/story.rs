use gpui::*;
use std::collections::HashMap;

/// How the browser frames a story preview
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StoryLayout {
    /// Content centered in the preview pane
    Centered,
    /// Content top-left with padding
    #[default]
    Padded,
}

impl StoryLayout {
    pub fn name(&self) -> &'static str {
        match self {
            StoryLayout::Centered => "centered",
            StoryLayout::Padded => "padded",
        }
    }
}

/// Documentation metadata for a component's stories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoryMeta {
    pub title: &'static str,
    pub description: &'static str,
    pub layout: StoryLayout,
    pub tags: &'static [&'static str],
}

/// A story renders a component in various states for preview
///
/// Stories hold no window state. Anything a story mutates across renders
/// (e.g. a click counter) must be `Send + Sync`.
pub trait Story: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn category(&self) -> &'static str;
    fn render(&self) -> AnyElement;
    fn meta(&self) -> Option<&'static StoryMeta> {
        None
    }
    fn layout(&self) -> StoryLayout {
        self.meta().map(|meta| meta.layout).unwrap_or_default()
    }
    fn variants(&self) -> Vec<StoryVariant> {
        vec![StoryVariant::default()]
    }
}

#[derive(Default, Clone, Debug)]
pub struct StoryVariant {
    pub name: String,
    pub description: Option<String>,
    pub props: HashMap<String, String>,
}
