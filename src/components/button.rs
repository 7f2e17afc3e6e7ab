//! Configurable Button component for GPUI
//!
//! Thin GPUI element over [`render`](super::button_config::render). The
//! element resolves a [`ButtonNode`] and realizes its [`ComputedStyle`] onto
//! a `div`, with hover/active/focus refinements taken from the same
//! resolved layers.
//!
//! GPUI has no outline, transform, or pointer-events styling, so:
//! - focus-visible paints the outline color onto the border
//! - active nudges the element down with a relative `top` offset
//! - pointer-events none is covered by the activation gate

use gpui::*;

use super::button_config::{
    render, ActivationEvent, ActivationGate, ActivationSource, ButtonConfig, ButtonKind,
    ButtonLabel, ButtonNode, LabelPart,
};
use super::button_style::{ButtonSize, ButtonVariant, ComputedStyle, CursorStyle, InteractionState, Paint};

/// Gap between a leading icon and the label text
const ICON_GAP: f32 = 8.0;

/// GPUI font family standing in for the system font stack
const SYSTEM_UI_FONT: &str = ".SystemUIFont";

/// A configurable button element
///
/// # Example
/// ```ignore
/// Button::new("Save")
///     .variant(ButtonVariant::Outline)
///     .size(ButtonSize::Small)
///     .on_activate(|event| tracing::info!(kind = event.kind.name(), "Saved"))
/// ```
#[derive(IntoElement)]
pub struct Button {
    config: ButtonConfig,
    focus_handle: Option<FocusHandle>,
}

impl Button {
    pub fn new(label: impl Into<ButtonLabel>) -> Self {
        Self::from_config(ButtonConfig::new(label))
    }

    pub fn from_config(config: ButtonConfig) -> Self {
        Self {
            config,
            focus_handle: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.config = self.config.variant(variant);
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.config = self.config.size(size);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.config = self.config.disabled(disabled);
        self
    }

    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.config = self.config.kind(kind);
        self
    }

    pub fn on_activate(mut self, callback: impl Fn(&ActivationEvent) + 'static) -> Self {
        self.config = self.config.on_activate(callback);
        self
    }

    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.config = self.config.test_id(test_id);
        self
    }

    pub fn style_class(mut self, style_class: impl Into<String>) -> Self {
        self.config = self.config.style_class(style_class);
        self
    }

    pub fn gate(mut self, gate: ActivationGate) -> Self {
        self.config = self.config.gate(gate);
        self
    }

    /// Track keyboard focus so the focus-visible refinement can apply
    pub fn track_focus(mut self, focus_handle: &FocusHandle) -> Self {
        self.focus_handle = Some(focus_handle.clone());
        self
    }
}

fn paint(value: Paint) -> Rgba {
    match value {
        Paint::Solid(hex) => rgb(hex),
        Paint::Transparent => rgba(0x00000000),
    }
}

/// Apply computed values that GPUI can express
fn apply_computed<E: Styled>(element: E, style: &ComputedStyle) -> E {
    let mut element = element
        .px(px(style.padding_x))
        .py(px(style.padding_y))
        .text_size(px(style.font_size))
        .line_height(relative(style.line_height))
        .font_weight(FontWeight(style.font_weight as f32))
        .rounded(px(style.corner_radius))
        .bg(paint(style.background))
        .text_color(rgb(style.text_color))
        .border_color(paint(style.border_color))
        .opacity(style.opacity)
        .top(px(style.translate_y));

    if style.border_width > 0. {
        element = element.border_1();
    }
    if style.outline_width > 0. {
        element = element.border_color(paint(style.outline_color));
    }

    match style.cursor {
        CursorStyle::Pointer => element.cursor_pointer(),
        CursorStyle::NotAllowed => element.cursor_not_allowed(),
        CursorStyle::Default => element.cursor_default(),
    }
}

fn label_element(label: &ButtonLabel) -> AnyElement {
    match label {
        ButtonLabel::Text(text) => text.clone().into_any_element(),
        ButtonLabel::Parts(parts) => div()
            .flex()
            .flex_row()
            .items_center()
            .children(parts.iter().map(|part| match part {
                LabelPart::Icon(glyph) => div().mr(px(ICON_GAP)).child(glyph.clone()),
                LabelPart::Text(text) => div().child(text.clone()),
            }))
            .into_any_element(),
    }
}

fn element_id(node: &ButtonNode) -> ElementId {
    let name = node
        .test_id()
        .map(str::to_string)
        .unwrap_or_else(|| format!("button-{}", node.label().plain_text()));
    ElementId::Name(name.into())
}

impl RenderOnce for Button {
    fn render(self, _window: &mut Window, _cx: &mut App) -> impl IntoElement {
        let node = render(self.config);
        let style = node.style();

        let rest = style.computed(InteractionState::default());
        let hovered = style.computed(InteractionState::hovered());
        let pressed = style.computed(InteractionState::pressed());
        let focused = style.computed(InteractionState::focus_visible());

        let mut button = div().id(element_id(&node)).relative();
        if rest.inline_flex_centered {
            button = button.flex().flex_row().items_center().justify_center();
        }
        if !rest.font_family.is_empty() {
            button = button.font_family(SYSTEM_UI_FONT);
        }
        let mut button = apply_computed(button, &rest).child(label_element(node.label()));

        if hovered != rest {
            button = button.hover(move |s| apply_computed(s, &hovered));
        }
        if pressed != rest {
            button = button.active(move |s| apply_computed(s, &pressed));
        }
        if let Some(focus_handle) = self.focus_handle {
            button = button
                .track_focus(&focus_handle)
                .focus(move |s| apply_computed(s, &focused));
        }

        if node.handler().has_callback() {
            let handler = node.handler().clone();
            let kind = node.kind();
            button = button.on_click(move |event, window, _cx| {
                let activation = ActivationEvent {
                    source: if event.is_keyboard() {
                        ActivationSource::Keyboard
                    } else {
                        ActivationSource::Pointer
                    },
                    click_count: event.click_count(),
                    kind,
                };
                // Caller state may have changed
                if handler.activate(&activation) {
                    window.refresh();
                }
            });
        }

        button
    }
}
