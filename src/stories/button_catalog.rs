//! Button catalog - the representative configurations shown in the storybook
//!
//! Plain data, separate from the GPUI stories so it can be listed from the
//! CLI and checked in tests without a window.

use serde::{Deserialize, Serialize};

use crate::components::{ButtonConfig, ButtonKind, ButtonLabel, ButtonSize, ButtonVariant};
use crate::storybook::{StoryLayout, StoryMeta};

pub const BUTTON_META: StoryMeta = StoryMeta {
    title: "Components/Button",
    description: "A versatile button component driven by fixed style lookup tables. \
                  Supports multiple variants, sizes, and states with hover effects and \
                  accessibility features.",
    layout: StoryLayout::Centered,
    tags: &["autodocs"],
};

/// Editor control for one argument
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgControl {
    Text,
    Select(&'static [&'static str]),
    Boolean,
    /// Event sink, logged when fired
    Action(&'static str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgType {
    pub name: &'static str,
    pub control: ArgControl,
    pub description: &'static str,
}

pub const BUTTON_ARG_TYPES: &[ArgType] = &[
    ArgType {
        name: "label",
        control: ArgControl::Text,
        description: "Button text content",
    },
    ArgType {
        name: "variant",
        control: ArgControl::Select(&["primary", "secondary", "outline", "ghost"]),
        description: "Button variant style",
    },
    ArgType {
        name: "size",
        control: ArgControl::Select(&["small", "medium", "large"]),
        description: "Button size",
    },
    ArgType {
        name: "disabled",
        control: ArgControl::Boolean,
        description: "Whether the button is disabled",
    },
    ArgType {
        name: "kind",
        control: ArgControl::Select(&["action", "submit", "reset"]),
        description: "Native activation semantics",
    },
    ArgType {
        name: "on_activate",
        control: ArgControl::Action("activated"),
        description: "Activation handler",
    },
    ArgType {
        name: "test_id",
        control: ArgControl::Text,
        description: "Test ID for testing purposes",
    },
    ArgType {
        name: "style_class",
        control: ArgControl::Text,
        description: "Custom style class name",
    },
];

/// Serializable story args. Absent fields take the component defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<ButtonVariant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<ButtonSize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ButtonKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_class: Option<String>,
}

impl ButtonArgs {
    fn labeled(label: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            ..Default::default()
        }
    }

    /// Build a config, filling absent fields with the component defaults
    pub fn into_config(self) -> ButtonConfig {
        let mut config = ButtonConfig::new(ButtonLabel::from(self.label.unwrap_or_default()))
            .variant(self.variant.unwrap_or_default())
            .size(self.size.unwrap_or_default())
            .disabled(self.disabled.unwrap_or(false))
            .kind(self.kind.unwrap_or_default());
        if let Some(test_id) = self.test_id {
            config = config.test_id(test_id);
        }
        if let Some(style_class) = self.style_class {
            config = config.style_class(style_class);
        }
        config
    }
}

/// Catalog entries rendered by hand rather than from args
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderedExample {
    /// Caller-side click counter fed back into the label
    Interactive,
    AllVariants,
    AllSizes,
    /// Icon glyph followed by text
    WithIcon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogStory {
    Args(ButtonArgs),
    Render(RenderedExample),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub story: CatalogStory,
}

impl CatalogEntry {
    fn args(name: &'static str, args: ButtonArgs) -> Self {
        Self {
            name,
            story: CatalogStory::Args(args),
        }
    }

    fn rendered(name: &'static str, example: RenderedExample) -> Self {
        Self {
            name,
            story: CatalogStory::Render(example),
        }
    }

    pub fn button_args(&self) -> Option<&ButtonArgs> {
        match &self.story {
            CatalogStory::Args(args) => Some(args),
            CatalogStory::Render(_) => None,
        }
    }
}

/// Every catalog entry in display order
pub fn button_catalog() -> Vec<CatalogEntry> {
    vec![
        CatalogEntry::args("Default", ButtonArgs::labeled("Click me")),
        CatalogEntry::args(
            "Primary",
            ButtonArgs {
                variant: Some(ButtonVariant::Primary),
                ..ButtonArgs::labeled("Primary Button")
            },
        ),
        CatalogEntry::args(
            "Secondary",
            ButtonArgs {
                variant: Some(ButtonVariant::Secondary),
                ..ButtonArgs::labeled("Secondary Button")
            },
        ),
        CatalogEntry::args(
            "Outline",
            ButtonArgs {
                variant: Some(ButtonVariant::Outline),
                ..ButtonArgs::labeled("Outline Button")
            },
        ),
        CatalogEntry::args(
            "Ghost",
            ButtonArgs {
                variant: Some(ButtonVariant::Ghost),
                ..ButtonArgs::labeled("Ghost Button")
            },
        ),
        CatalogEntry::args(
            "Small",
            ButtonArgs {
                size: Some(ButtonSize::Small),
                ..ButtonArgs::labeled("Small Button")
            },
        ),
        CatalogEntry::args(
            "Large",
            ButtonArgs {
                size: Some(ButtonSize::Large),
                ..ButtonArgs::labeled("Large Button")
            },
        ),
        CatalogEntry::args(
            "Disabled",
            ButtonArgs {
                disabled: Some(true),
                ..ButtonArgs::labeled("Disabled Button")
            },
        ),
        CatalogEntry::args(
            "Submit",
            ButtonArgs {
                kind: Some(ButtonKind::Submit),
                ..ButtonArgs::labeled("Submit")
            },
        ),
        CatalogEntry::rendered("Interactive", RenderedExample::Interactive),
        CatalogEntry::rendered("AllVariants", RenderedExample::AllVariants),
        CatalogEntry::rendered("AllSizes", RenderedExample::AllSizes),
        CatalogEntry::rendered("WithIcon", RenderedExample::WithIcon),
        CatalogEntry::args(
            "Loading",
            ButtonArgs {
                disabled: Some(true),
                ..ButtonArgs::labeled("Loading...")
            },
        ),
    ]
}

/// Look up a catalog entry by name (case-insensitive)
pub fn catalog_entry(name: &str) -> Option<CatalogEntry> {
    button_catalog()
        .into_iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(name))
}

/// Element id of the interactive example. Stays fixed while the label counts.
pub const INTERACTIVE_TEST_ID: &str = "interactive-counter";

/// Label shown by the interactive example after `count` activations
pub fn interactive_label(count: usize) -> String {
    format!("Clicked {} times", count)
}

/// Configuration of the interactive example after `count` activations
pub fn interactive_config(count: usize) -> ButtonConfig {
    ButtonConfig::new(interactive_label(count)).test_id(INTERACTIVE_TEST_ID)
}
