//! Button component stories for the storybook

use gpui::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::button_catalog::{
    button_catalog, interactive_config, CatalogEntry, CatalogStory, RenderedExample, BUTTON_META,
};
use crate::components::{Button, ButtonLabel, ButtonSize, ButtonVariant};
use crate::storybook::{
    code_block, story_container, story_divider, story_item, story_row, story_section, Story,
    StoryMeta, StoryVariant,
};

/// Render one catalog entry. `clicks` backs the interactive counter.
fn render_entry(entry: &CatalogEntry, clicks: &Arc<AtomicUsize>) -> AnyElement {
    match &entry.story {
        CatalogStory::Args(args) => {
            let name = entry.name;
            Button::from_config(args.clone().into_config())
                .on_activate(move |event| {
                    tracing::info!(story = name, kind = event.kind.name(), "activated");
                })
                .into_any_element()
        }
        CatalogStory::Render(example) => render_example(*example, clicks),
    }
}

fn render_example(example: RenderedExample, clicks: &Arc<AtomicUsize>) -> AnyElement {
    match example {
        RenderedExample::Interactive => {
            let count = clicks.load(Ordering::SeqCst);
            let clicks = clicks.clone();
            Button::from_config(interactive_config(count))
                .on_activate(move |_| {
                    clicks.fetch_add(1, Ordering::SeqCst);
                })
                .into_any_element()
        }
        RenderedExample::AllVariants => story_row()
            .children(ButtonVariant::ALL.iter().map(|variant| {
                Button::new(title_case(variant.name())).variant(*variant)
            }))
            .into_any_element(),
        RenderedExample::AllSizes => story_row()
            .children(
                ButtonSize::ALL
                    .iter()
                    .map(|size| Button::new(title_case(size.name())).size(*size)),
            )
            .into_any_element(),
        RenderedExample::WithIcon => {
            Button::new(ButtonLabel::with_icon("→", "Continue")).into_any_element()
        }
    }
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn catalog_section(title: &str, names: &[&str], clicks: &Arc<AtomicUsize>) -> Div {
    let catalog = button_catalog();
    story_section(title).children(
        catalog
            .iter()
            .filter(|entry| names.contains(&entry.name))
            .map(|entry| story_item(entry.name, render_entry(entry, clicks))),
    )
}

/// Story showcasing every catalog configuration of the Button component
#[derive(Default)]
pub struct ButtonStory {
    clicks: Arc<AtomicUsize>,
}

impl Story for ButtonStory {
    fn id(&self) -> &'static str {
        "button"
    }

    fn name(&self) -> &'static str {
        "Button"
    }

    fn category(&self) -> &'static str {
        "Components"
    }

    fn meta(&self) -> Option<&'static StoryMeta> {
        Some(&BUTTON_META)
    }

    fn render(&self) -> AnyElement {
        story_container(self.layout())
            .child(catalog_section(
                "Variants",
                &["Default", "Primary", "Secondary", "Outline", "Ghost"],
                &self.clicks,
            ))
            .child(story_divider())
            .child(catalog_section(
                "Sizes",
                &["Small", "Large", "AllSizes"],
                &self.clicks,
            ))
            .child(story_divider())
            .child(catalog_section(
                "States",
                &["Disabled", "Loading", "Submit"],
                &self.clicks,
            ))
            .child(story_divider())
            .child(story_section("Usage").child(code_block(
                r#"
use button_kit::components::{Button, ButtonKind, ButtonSize, ButtonVariant};

Button::new("Save")
    .variant(ButtonVariant::Outline)
    .size(ButtonSize::Small)
    .kind(ButtonKind::Submit)
    .on_activate(|event| {
        tracing::info!(kind = event.kind.name(), "Saved");
    })
"#,
            )))
            .into_any_element()
    }

    fn variants(&self) -> Vec<StoryVariant> {
        button_catalog()
            .into_iter()
            .map(|entry| {
                let props = entry
                    .button_args()
                    .and_then(|args| serde_json::to_value(args).ok())
                    .and_then(|value| value.as_object().cloned())
                    .map(|object| {
                        object
                            .into_iter()
                            .map(|(key, value)| match value {
                                serde_json::Value::String(s) => (key, s),
                                other => (key, other.to_string()),
                            })
                            .collect()
                    })
                    .unwrap_or_default();
                StoryVariant {
                    name: entry.name.to_string(),
                    description: None,
                    props,
                }
            })
            .collect()
    }
}

/// Story for the stateful and composite catalog entries
#[derive(Default)]
pub struct ButtonPlaygroundStory {
    clicks: Arc<AtomicUsize>,
}

impl Story for ButtonPlaygroundStory {
    fn id(&self) -> &'static str {
        "button-playground"
    }

    fn name(&self) -> &'static str {
        "Button Playground"
    }

    fn category(&self) -> &'static str {
        "Components"
    }

    fn meta(&self) -> Option<&'static StoryMeta> {
        Some(&BUTTON_META)
    }

    fn render(&self) -> AnyElement {
        story_container(self.layout())
            .child(catalog_section(
                "Interactive",
                &["Interactive", "AllVariants", "WithIcon"],
                &self.clicks,
            ))
            .into_any_element()
    }

    fn variants(&self) -> Vec<StoryVariant> {
        vec![
            StoryVariant {
                name: "Interactive".into(),
                description: Some("Counter owned by the story, fed back into the label".into()),
                ..Default::default()
            },
            StoryVariant {
                name: "AllVariants".into(),
                description: Some("Every variant side by side".into()),
                ..Default::default()
            },
            StoryVariant {
                name: "WithIcon".into(),
                description: Some("Icon glyph followed by text".into()),
                ..Default::default()
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("primary"), "Primary");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_button_story_variants_follow_catalog() {
        let variants = ButtonStory::default().variants();
        assert_eq!(variants.len(), button_catalog().len());

        let submit = variants.iter().find(|v| v.name == "Submit").unwrap();
        assert_eq!(submit.props.get("kind").map(String::as_str), Some("submit"));
        assert_eq!(submit.props.get("label").map(String::as_str), Some("Submit"));

        let disabled = variants.iter().find(|v| v.name == "Disabled").unwrap();
        assert_eq!(disabled.props.get("disabled").map(String::as_str), Some("true"));

        let interactive = variants.iter().find(|v| v.name == "Interactive").unwrap();
        assert!(interactive.props.is_empty());
    }

    #[test]
    fn test_stories_use_button_meta() {
        assert_eq!(ButtonStory::default().meta(), Some(&BUTTON_META));
        assert_eq!(
            ButtonPlaygroundStory::default().layout(),
            crate::storybook::StoryLayout::Centered
        );
    }
}
