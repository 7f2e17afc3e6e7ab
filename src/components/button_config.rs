//! Button configuration and the render contract
//!
//! [`render`] maps an immutable [`ButtonConfig`] to a [`ButtonNode`]: the
//! resolved style plus the pass-through props and a bound activation
//! handler. Nothing here touches GPUI, so the whole contract can be tested
//! without a window.
//!
//! # Activation gating
//!
//! The handler does not capture `disabled` by value. It reads a shared
//! [`ActivationGate`] on every call, so disabling a button after it was
//! rendered still suppresses an activation that arrives later.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::button_style::{resolve_style, ButtonSize, ButtonVariant, ResolvedStyle};

/// Native activation semantics exposed to the host form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ButtonKind {
    /// Plain action button (DOM `type="button"`)
    #[default]
    Action,
    Submit,
    Reset,
}

/// What a form should do when a button of a given kind activates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormIntent {
    Submit,
    Reset,
}

impl ButtonKind {
    pub const ALL: [ButtonKind; 3] = [ButtonKind::Action, ButtonKind::Submit, ButtonKind::Reset];

    /// Total lookup by exact lowercase name. `button` (the DOM name) and
    /// anything unrecognized resolve to `Action`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "submit" => ButtonKind::Submit,
            "reset" => ButtonKind::Reset,
            _ => ButtonKind::Action,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ButtonKind::Action => "action",
            ButtonKind::Submit => "submit",
            ButtonKind::Reset => "reset",
        }
    }

    /// The equivalent HTML `type` attribute value
    pub fn native_name(&self) -> &'static str {
        match self {
            ButtonKind::Action => "button",
            ButtonKind::Submit => "submit",
            ButtonKind::Reset => "reset",
        }
    }

    pub fn form_intent(&self) -> Option<FormIntent> {
        match self {
            ButtonKind::Action => None,
            ButtonKind::Submit => Some(FormIntent::Submit),
            ButtonKind::Reset => Some(FormIntent::Reset),
        }
    }
}

impl From<String> for ButtonKind {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

// ============================================
// LABEL
// ============================================

/// One piece of composite label content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelPart {
    /// Leading glyph, rendered with a small trailing gap
    Icon(String),
    Text(String),
}

/// Button content. Rendered as given, never interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ButtonLabel {
    Text(String),
    Parts(Vec<LabelPart>),
}

impl ButtonLabel {
    /// Icon followed by text, e.g. `→ Continue`
    pub fn with_icon(icon: impl Into<String>, text: impl Into<String>) -> Self {
        ButtonLabel::Parts(vec![LabelPart::Icon(icon.into()), LabelPart::Text(text.into())])
    }

    /// Concatenated text of every part, used for ids and logging
    pub fn plain_text(&self) -> String {
        match self {
            ButtonLabel::Text(text) => text.clone(),
            ButtonLabel::Parts(parts) => parts
                .iter()
                .map(|part| match part {
                    LabelPart::Icon(glyph) => glyph.as_str(),
                    LabelPart::Text(text) => text.as_str(),
                })
                .collect(),
        }
    }
}

impl Default for ButtonLabel {
    fn default() -> Self {
        ButtonLabel::Text(String::new())
    }
}

impl From<&str> for ButtonLabel {
    fn from(text: &str) -> Self {
        ButtonLabel::Text(text.to_string())
    }
}

impl From<String> for ButtonLabel {
    fn from(text: String) -> Self {
        ButtonLabel::Text(text)
    }
}

impl fmt::Display for ButtonLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.plain_text())
    }
}

// ============================================
// ACTIVATION
// ============================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationSource {
    Pointer,
    Keyboard,
}

/// Payload forwarded to `on_activate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivationEvent {
    pub source: ActivationSource,
    pub click_count: usize,
    pub kind: ButtonKind,
}

impl ActivationEvent {
    pub fn pointer(kind: ButtonKind) -> Self {
        Self {
            source: ActivationSource::Pointer,
            click_count: 1,
            kind,
        }
    }

    pub fn keyboard(kind: ButtonKind) -> Self {
        Self {
            source: ActivationSource::Keyboard,
            click_count: 0,
            kind,
        }
    }
}

/// Caller-supplied activation callback
pub type OnActivate = Rc<dyn Fn(&ActivationEvent) + 'static>;

/// Shared disabled flag read at activation time.
///
/// Clones share the same flag. Single-threaded, like the rest of the UI.
#[derive(Debug, Clone, Default)]
pub struct ActivationGate(Rc<Cell<bool>>);

impl ActivationGate {
    pub fn new(disabled: bool) -> Self {
        Self(Rc::new(Cell::new(disabled)))
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.0.set(disabled);
    }

    pub fn is_disabled(&self) -> bool {
        self.0.get()
    }
}

/// Activation handler bound to a rendered button
#[derive(Clone)]
pub struct ActivationHandler {
    gate: ActivationGate,
    callback: Option<OnActivate>,
}

impl ActivationHandler {
    /// Forward `event` to the callback unless the gate is closed.
    ///
    /// Returns true if the callback ran. A panic inside the callback is
    /// not caught here.
    pub fn activate(&self, event: &ActivationEvent) -> bool {
        if self.gate.is_disabled() {
            debug!(
                kind = event.kind.name(),
                source = ?event.source,
                "Activation suppressed: button disabled"
            );
            return false;
        }

        match &self.callback {
            Some(callback) => {
                callback(event);
                true
            }
            None => false,
        }
    }

    pub fn has_callback(&self) -> bool {
        self.callback.is_some()
    }

    pub fn gate(&self) -> &ActivationGate {
        &self.gate
    }
}

impl fmt::Debug for ActivationHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActivationHandler")
            .field("disabled", &self.gate.is_disabled())
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

// ============================================
// CONFIG
// ============================================

/// Immutable per-render button configuration
///
/// # Example
/// ```ignore
/// let node = render(
///     ButtonConfig::new("Save")
///         .variant(ButtonVariant::Outline)
///         .size(ButtonSize::Small)
///         .on_activate(|event| println!("{:?}", event)),
/// );
/// ```
#[derive(Clone, Default)]
pub struct ButtonConfig {
    pub label: ButtonLabel,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    pub kind: ButtonKind,
    pub on_activate: Option<OnActivate>,
    pub test_id: Option<String>,
    pub style_class: Option<String>,
    pub gate: Option<ActivationGate>,
}

impl ButtonConfig {
    pub fn new(label: impl Into<ButtonLabel>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }

    pub fn label(mut self, label: impl Into<ButtonLabel>) -> Self {
        self.label = label.into();
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn on_activate(mut self, callback: impl Fn(&ActivationEvent) + 'static) -> Self {
        self.on_activate = Some(Rc::new(callback));
        self
    }

    pub fn test_id(mut self, test_id: impl Into<String>) -> Self {
        self.test_id = Some(test_id.into());
        self
    }

    pub fn style_class(mut self, style_class: impl Into<String>) -> Self {
        self.style_class = Some(style_class.into());
        self
    }

    /// Share a caller-owned gate. Each render writes `disabled` into it; the
    /// caller may flip it afterwards.
    pub fn gate(mut self, gate: ActivationGate) -> Self {
        self.gate = Some(gate);
        self
    }
}

impl fmt::Debug for ButtonConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonConfig")
            .field("label", &self.label)
            .field("variant", &self.variant)
            .field("size", &self.size)
            .field("disabled", &self.disabled)
            .field("kind", &self.kind)
            .field("on_activate", &self.on_activate.is_some())
            .field("test_id", &self.test_id)
            .field("style_class", &self.style_class)
            .finish()
    }
}

// ============================================
// RENDER
// ============================================

/// The rendered button: markup-level props plus resolved style
#[derive(Debug, Clone)]
pub struct ButtonNode {
    label: ButtonLabel,
    style: ResolvedStyle,
    kind: ButtonKind,
    test_id: Option<String>,
    style_class: Option<String>,
    handler: ActivationHandler,
}

impl ButtonNode {
    pub fn label(&self) -> &ButtonLabel {
        &self.label
    }

    pub fn style(&self) -> &ResolvedStyle {
        &self.style
    }

    pub fn kind(&self) -> ButtonKind {
        self.kind
    }

    /// Current state of the activation gate. Follows post-render changes,
    /// so it always agrees with what [`activate`](Self::activate) will do.
    pub fn is_disabled(&self) -> bool {
        self.handler.gate.is_disabled()
    }

    pub fn test_id(&self) -> Option<&str> {
        self.test_id.as_deref()
    }

    pub fn style_class(&self) -> Option<&str> {
        self.style_class.as_deref()
    }

    pub fn handler(&self) -> &ActivationHandler {
        &self.handler
    }

    /// Shorthand for `handler().activate(event)`
    pub fn activate(&self, event: &ActivationEvent) -> bool {
        self.handler.activate(event)
    }
}

/// Render a button configuration. Pure apart from the gate write and a
/// trace event; same config in, same style out.
pub fn render(config: ButtonConfig) -> ButtonNode {
    let style = resolve_style(config.variant, config.size, config.disabled);

    let gate = config.gate.unwrap_or_default();
    gate.set_disabled(config.disabled);

    trace!(
        label = %config.label,
        variant = config.variant.name(),
        size = config.size.name(),
        disabled = config.disabled,
        kind = config.kind.name(),
        "Rendered button"
    );

    ButtonNode {
        label: config.label,
        style,
        kind: config.kind,
        test_id: config.test_id,
        style_class: config.style_class,
        handler: ActivationHandler {
            gate,
            callback: config.on_activate,
        },
    }
}

#[cfg(test)]
#[path = "button_config_tests.rs"]
mod tests;
