//! Style resolution for the Button component
//!
//! Styling is a fixed lookup table: every [`ButtonVariant`] and [`ButtonSize`]
//! maps to an immutable fragment of style declarations. A render concatenates
//! those fragments with the baseline and state overrides into an ordered list
//! of [`StyleLayer`]s. Later layers win on conflicting properties, so the
//! disabled override always beats variant and size styling.
//!
//! This module has no GPUI dependency; the element in `button.rs` realizes a
//! [`ComputedStyle`] onto a `div`.
//!
//! # Layer order
//!
//! 1. base (layout, typography, transition)
//! 2. variant, followed by its hover override (dropped when disabled)
//! 3. size
//! 4. disabled override (only when disabled)
//! 5. focus-visible override
//! 6. active override (dropped when disabled)

use serde::{Deserialize, Serialize};

// ============================================
// PALETTE
// ============================================

pub const BLUE: u32 = 0x007bff;
pub const BLUE_HOVER: u32 = 0x0056b3;
pub const GRAY: u32 = 0x6c757d;
pub const GRAY_HOVER: u32 = 0x545b62;
pub const GHOST_HOVER_BG: u32 = 0xf8f9fa;
pub const GHOST_HOVER_TEXT: u32 = 0x495057;
pub const WHITE: u32 = 0xffffff;

/// CSS-style font stack used by the base layer
pub const SYSTEM_FONT_STACK: &str =
    "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, sans-serif";

// ============================================
// ENUMS
// ============================================

/// Visual theme of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ButtonVariant {
    /// Filled blue
    #[default]
    Primary,
    /// Filled gray
    Secondary,
    /// Blue border, transparent fill
    Outline,
    /// Gray text only
    Ghost,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 4] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
    ];

    /// Total lookup by exact lowercase name. Anything else, including
    /// other casings and padded names, resolves to `Primary`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "primary" => ButtonVariant::Primary,
            "secondary" => ButtonVariant::Secondary,
            "outline" => ButtonVariant::Outline,
            "ghost" => ButtonVariant::Ghost,
            _ => ButtonVariant::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "primary",
            ButtonVariant::Secondary => "secondary",
            ButtonVariant::Outline => "outline",
            ButtonVariant::Ghost => "ghost",
        }
    }

    /// The immutable style fragment for this variant
    pub fn fragment(&self) -> &'static VariantFragment {
        match self {
            ButtonVariant::Primary => &PRIMARY_FRAGMENT,
            ButtonVariant::Secondary => &SECONDARY_FRAGMENT,
            ButtonVariant::Outline => &OUTLINE_FRAGMENT,
            ButtonVariant::Ghost => &GHOST_FRAGMENT,
        }
    }
}

impl From<&str> for ButtonVariant {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for ButtonVariant {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

/// Dimensional preset of a button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

    /// Total lookup by exact lowercase name. Anything else resolves to `Medium`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "small" => ButtonSize::Small,
            "medium" => ButtonSize::Medium,
            "large" => ButtonSize::Large,
            _ => ButtonSize::default(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
        }
    }

    pub fn fragment(&self) -> &'static [StyleDecl] {
        match self {
            ButtonSize::Small => SMALL_FRAGMENT,
            ButtonSize::Medium => MEDIUM_FRAGMENT,
            ButtonSize::Large => LARGE_FRAGMENT,
        }
    }
}

impl From<&str> for ButtonSize {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for ButtonSize {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

// ============================================
// DECLARATIONS
// ============================================

/// A color or nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Solid(u32),
    Transparent,
}

impl Paint {
    fn css(&self) -> String {
        match self {
            Paint::Solid(hex) => format!("#{:06x}", hex),
            Paint::Transparent => "transparent".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    Default,
    Pointer,
    NotAllowed,
}

/// Property keys used when folding layers. Two declarations with the same
/// key conflict and the later one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    Layout,
    FontFamily,
    FontWeight,
    LineHeight,
    Cursor,
    Transition,
    UserSelect,
    TextDecoration,
    Background,
    TextColor,
    BorderWidth,
    BorderColor,
    OutlineWidth,
    OutlineColor,
    OutlineOffset,
    PaddingY,
    PaddingX,
    FontSize,
    CornerRadius,
    Opacity,
    PointerEvents,
    TranslateY,
}

/// A single style declaration
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleDecl {
    /// inline-flex with both axes centered
    InlineFlexCentered,
    FontFamily(&'static str),
    FontWeight(u16),
    LineHeight(f32),
    Cursor(CursorStyle),
    TransitionMs(u32),
    UserSelect(bool),
    TextDecoration(bool),
    Background(Paint),
    TextColor(u32),
    BorderWidth(f32),
    BorderColor(Paint),
    OutlineWidth(f32),
    OutlineColor(Paint),
    OutlineOffset(f32),
    PaddingY(f32),
    PaddingX(f32),
    FontSize(f32),
    CornerRadius(f32),
    Opacity(f32),
    PointerEvents(bool),
    TranslateY(f32),
}

impl StyleDecl {
    pub fn property(&self) -> StyleProperty {
        match self {
            StyleDecl::InlineFlexCentered => StyleProperty::Layout,
            StyleDecl::FontFamily(_) => StyleProperty::FontFamily,
            StyleDecl::FontWeight(_) => StyleProperty::FontWeight,
            StyleDecl::LineHeight(_) => StyleProperty::LineHeight,
            StyleDecl::Cursor(_) => StyleProperty::Cursor,
            StyleDecl::TransitionMs(_) => StyleProperty::Transition,
            StyleDecl::UserSelect(_) => StyleProperty::UserSelect,
            StyleDecl::TextDecoration(_) => StyleProperty::TextDecoration,
            StyleDecl::Background(_) => StyleProperty::Background,
            StyleDecl::TextColor(_) => StyleProperty::TextColor,
            StyleDecl::BorderWidth(_) => StyleProperty::BorderWidth,
            StyleDecl::BorderColor(_) => StyleProperty::BorderColor,
            StyleDecl::OutlineWidth(_) => StyleProperty::OutlineWidth,
            StyleDecl::OutlineColor(_) => StyleProperty::OutlineColor,
            StyleDecl::OutlineOffset(_) => StyleProperty::OutlineOffset,
            StyleDecl::PaddingY(_) => StyleProperty::PaddingY,
            StyleDecl::PaddingX(_) => StyleProperty::PaddingX,
            StyleDecl::FontSize(_) => StyleProperty::FontSize,
            StyleDecl::CornerRadius(_) => StyleProperty::CornerRadius,
            StyleDecl::Opacity(_) => StyleProperty::Opacity,
            StyleDecl::PointerEvents(_) => StyleProperty::PointerEvents,
            StyleDecl::TranslateY(_) => StyleProperty::TranslateY,
        }
    }

    /// Stylesheet text for this declaration, one or more `name: value;` lines
    fn css_lines(&self) -> Vec<String> {
        match self {
            StyleDecl::InlineFlexCentered => vec![
                "display: inline-flex;".to_string(),
                "align-items: center;".to_string(),
                "justify-content: center;".to_string(),
            ],
            StyleDecl::FontFamily(stack) => vec![format!("font-family: {};", stack)],
            StyleDecl::FontWeight(weight) => vec![format!("font-weight: {};", weight)],
            StyleDecl::LineHeight(height) => vec![format!("line-height: {};", height)],
            StyleDecl::Cursor(cursor) => {
                let value = match cursor {
                    CursorStyle::Default => "default",
                    CursorStyle::Pointer => "pointer",
                    CursorStyle::NotAllowed => "not-allowed",
                };
                vec![format!("cursor: {};", value)]
            }
            StyleDecl::TransitionMs(ms) => vec![format!("transition: all {}ms ease;", ms)],
            StyleDecl::UserSelect(enabled) => vec![format!(
                "user-select: {};",
                if *enabled { "auto" } else { "none" }
            )],
            StyleDecl::TextDecoration(enabled) => vec![format!(
                "text-decoration: {};",
                if *enabled { "underline" } else { "none" }
            )],
            StyleDecl::Background(paint) => vec![format!("background-color: {};", paint.css())],
            StyleDecl::TextColor(hex) => vec![format!("color: #{:06x};", hex)],
            StyleDecl::BorderWidth(width) => vec![format!("border-width: {}px;", width)],
            StyleDecl::BorderColor(paint) => vec![format!("border-color: {};", paint.css())],
            StyleDecl::OutlineWidth(width) => vec![format!("outline-width: {}px;", width)],
            StyleDecl::OutlineColor(paint) => vec![format!("outline-color: {};", paint.css())],
            StyleDecl::OutlineOffset(offset) => vec![format!("outline-offset: {}px;", offset)],
            StyleDecl::PaddingY(value) => vec![
                format!("padding-top: {}px;", value),
                format!("padding-bottom: {}px;", value),
            ],
            StyleDecl::PaddingX(value) => vec![
                format!("padding-left: {}px;", value),
                format!("padding-right: {}px;", value),
            ],
            StyleDecl::FontSize(size) => vec![format!("font-size: {}px;", size)],
            StyleDecl::CornerRadius(radius) => vec![format!("border-radius: {}px;", radius)],
            StyleDecl::Opacity(opacity) => vec![format!("opacity: {};", opacity)],
            StyleDecl::PointerEvents(enabled) => vec![format!(
                "pointer-events: {};",
                if *enabled { "auto" } else { "none" }
            )],
            StyleDecl::TranslateY(offset) => {
                vec![format!("transform: translateY({}px);", offset)]
            }
        }
    }
}

// ============================================
// FRAGMENT TABLES
// ============================================

/// Resting and hover declarations for one variant
#[derive(Debug, PartialEq)]
pub struct VariantFragment {
    pub rest: &'static [StyleDecl],
    pub hover: &'static [StyleDecl],
}

pub static BASE_FRAGMENT: &[StyleDecl] = &[
    StyleDecl::InlineFlexCentered,
    StyleDecl::FontFamily(SYSTEM_FONT_STACK),
    StyleDecl::FontWeight(500),
    StyleDecl::LineHeight(1.4),
    StyleDecl::Cursor(CursorStyle::Pointer),
    StyleDecl::TransitionMs(200),
    StyleDecl::UserSelect(false),
    StyleDecl::TextDecoration(false),
    StyleDecl::BorderWidth(0.0),
    StyleDecl::OutlineWidth(0.0),
];

pub static PRIMARY_FRAGMENT: VariantFragment = VariantFragment {
    rest: &[
        StyleDecl::Background(Paint::Solid(BLUE)),
        StyleDecl::TextColor(WHITE),
        StyleDecl::BorderWidth(1.0),
        StyleDecl::BorderColor(Paint::Solid(BLUE)),
    ],
    hover: &[
        StyleDecl::Background(Paint::Solid(BLUE_HOVER)),
        StyleDecl::BorderColor(Paint::Solid(BLUE_HOVER)),
    ],
};

pub static SECONDARY_FRAGMENT: VariantFragment = VariantFragment {
    rest: &[
        StyleDecl::Background(Paint::Solid(GRAY)),
        StyleDecl::TextColor(WHITE),
        StyleDecl::BorderWidth(1.0),
        StyleDecl::BorderColor(Paint::Solid(GRAY)),
    ],
    hover: &[
        StyleDecl::Background(Paint::Solid(GRAY_HOVER)),
        StyleDecl::BorderColor(Paint::Solid(GRAY_HOVER)),
    ],
};

pub static OUTLINE_FRAGMENT: VariantFragment = VariantFragment {
    rest: &[
        StyleDecl::Background(Paint::Transparent),
        StyleDecl::TextColor(BLUE),
        StyleDecl::BorderWidth(1.0),
        StyleDecl::BorderColor(Paint::Solid(BLUE)),
    ],
    hover: &[
        StyleDecl::Background(Paint::Solid(BLUE)),
        StyleDecl::TextColor(WHITE),
    ],
};

pub static GHOST_FRAGMENT: VariantFragment = VariantFragment {
    rest: &[
        StyleDecl::Background(Paint::Transparent),
        StyleDecl::TextColor(GRAY),
        StyleDecl::BorderWidth(1.0),
        StyleDecl::BorderColor(Paint::Transparent),
    ],
    hover: &[
        StyleDecl::Background(Paint::Solid(GHOST_HOVER_BG)),
        StyleDecl::TextColor(GHOST_HOVER_TEXT),
    ],
};

pub static SMALL_FRAGMENT: &[StyleDecl] = &[
    StyleDecl::PaddingY(6.0),
    StyleDecl::PaddingX(12.0),
    StyleDecl::FontSize(12.0),
    StyleDecl::CornerRadius(4.0),
];

pub static MEDIUM_FRAGMENT: &[StyleDecl] = &[
    StyleDecl::PaddingY(8.0),
    StyleDecl::PaddingX(16.0),
    StyleDecl::FontSize(14.0),
    StyleDecl::CornerRadius(6.0),
];

pub static LARGE_FRAGMENT: &[StyleDecl] = &[
    StyleDecl::PaddingY(12.0),
    StyleDecl::PaddingX(24.0),
    StyleDecl::FontSize(16.0),
    StyleDecl::CornerRadius(8.0),
];

pub static DISABLED_FRAGMENT: &[StyleDecl] = &[
    StyleDecl::Opacity(0.6),
    StyleDecl::Cursor(CursorStyle::NotAllowed),
    StyleDecl::PointerEvents(false),
];

pub static FOCUS_VISIBLE_FRAGMENT: &[StyleDecl] = &[
    StyleDecl::OutlineWidth(2.0),
    StyleDecl::OutlineColor(Paint::Solid(BLUE)),
    StyleDecl::OutlineOffset(2.0),
];

pub static ACTIVE_FRAGMENT: &[StyleDecl] = &[StyleDecl::TranslateY(1.0)];

// ============================================
// LAYERS
// ============================================

/// Where a layer came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerOrigin {
    Base,
    Variant(ButtonVariant),
    VariantHover(ButtonVariant),
    Size(ButtonSize),
    Disabled,
    FocusVisible,
    Active,
}

/// Interaction flag a layer is gated on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateCondition {
    Always,
    Hovered,
    FocusVisible,
    Pressed,
}

impl StateCondition {
    fn holds(&self, state: InteractionState) -> bool {
        match self {
            StateCondition::Always => true,
            StateCondition::Hovered => state.hovered,
            StateCondition::FocusVisible => state.focus_visible,
            StateCondition::Pressed => state.pressed,
        }
    }

    fn selector(&self) -> Option<&'static str> {
        match self {
            StateCondition::Always => None,
            StateCondition::Hovered => Some("&:hover"),
            StateCondition::FocusVisible => Some("&:focus-visible"),
            StateCondition::Pressed => Some("&:active"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleLayer {
    pub origin: LayerOrigin,
    pub condition: StateCondition,
    pub declarations: &'static [StyleDecl],
}

/// Environment-driven interaction flags. Not stored by the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub hovered: bool,
    pub pressed: bool,
    pub focus_visible: bool,
}

impl InteractionState {
    pub fn hovered() -> Self {
        Self {
            hovered: true,
            ..Default::default()
        }
    }

    pub fn pressed() -> Self {
        Self {
            pressed: true,
            ..Default::default()
        }
    }

    pub fn focus_visible() -> Self {
        Self {
            focus_visible: true,
            ..Default::default()
        }
    }
}

/// The fully resolved style for one render.
///
/// Recomputed on every render and never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    layers: Vec<StyleLayer>,
}

/// Resolve the ordered style layers for a `(variant, size, disabled)` triple
pub fn resolve_style(variant: ButtonVariant, size: ButtonSize, disabled: bool) -> ResolvedStyle {
    let fragment = variant.fragment();
    let mut layers = Vec::with_capacity(7);

    layers.push(StyleLayer {
        origin: LayerOrigin::Base,
        condition: StateCondition::Always,
        declarations: BASE_FRAGMENT,
    });
    layers.push(StyleLayer {
        origin: LayerOrigin::Variant(variant),
        condition: StateCondition::Always,
        declarations: fragment.rest,
    });
    if !disabled {
        layers.push(StyleLayer {
            origin: LayerOrigin::VariantHover(variant),
            condition: StateCondition::Hovered,
            declarations: fragment.hover,
        });
    }
    layers.push(StyleLayer {
        origin: LayerOrigin::Size(size),
        condition: StateCondition::Always,
        declarations: size.fragment(),
    });
    if disabled {
        layers.push(StyleLayer {
            origin: LayerOrigin::Disabled,
            condition: StateCondition::Always,
            declarations: DISABLED_FRAGMENT,
        });
    }
    layers.push(StyleLayer {
        origin: LayerOrigin::FocusVisible,
        condition: StateCondition::FocusVisible,
        declarations: FOCUS_VISIBLE_FRAGMENT,
    });
    if !disabled {
        layers.push(StyleLayer {
            origin: LayerOrigin::Active,
            condition: StateCondition::Pressed,
            declarations: ACTIVE_FRAGMENT,
        });
    }

    ResolvedStyle {
        variant,
        size,
        disabled,
        layers,
    }
}

impl ResolvedStyle {
    pub fn variant(&self) -> ButtonVariant {
        self.variant
    }

    pub fn size(&self) -> ButtonSize {
        self.size
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn layers(&self) -> &[StyleLayer] {
        &self.layers
    }

    /// Find the layer with the given origin, if it was emitted
    pub fn layer(&self, origin: LayerOrigin) -> Option<&StyleLayer> {
        self.layers.iter().find(|layer| layer.origin == origin)
    }

    /// Fold the layers that apply under `state`, left to right
    pub fn computed(&self, state: InteractionState) -> ComputedStyle {
        let mut computed = ComputedStyle::default();
        for layer in self.layers.iter().filter(|l| l.condition.holds(state)) {
            for decl in layer.declarations {
                computed.apply(decl);
            }
        }
        computed
    }

    /// Deterministic stylesheet text. Unconditional layers are emitted flat,
    /// gated layers as nested `&:state { ... }` blocks in layer order.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for layer in &self.layers {
            match layer.condition.selector() {
                None => {
                    for decl in layer.declarations {
                        for line in decl.css_lines() {
                            css.push_str(&line);
                            css.push('\n');
                        }
                    }
                }
                Some(selector) => {
                    css.push_str(selector);
                    css.push_str(" {\n");
                    for decl in layer.declarations {
                        for line in decl.css_lines() {
                            css.push_str("  ");
                            css.push_str(&line);
                            css.push('\n');
                        }
                    }
                    css.push_str("}\n");
                }
            }
        }
        css
    }
}

// ============================================
// COMPUTED STYLE
// ============================================

/// Final property values after folding the applicable layers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComputedStyle {
    pub inline_flex_centered: bool,
    pub font_family: &'static str,
    pub font_weight: u16,
    pub line_height: f32,
    pub cursor: CursorStyle,
    pub transition_ms: u32,
    pub user_select: bool,
    pub text_decoration: bool,
    pub background: Paint,
    pub text_color: u32,
    pub border_width: f32,
    pub border_color: Paint,
    pub outline_width: f32,
    pub outline_color: Paint,
    pub outline_offset: f32,
    pub padding_y: f32,
    pub padding_x: f32,
    pub font_size: f32,
    pub corner_radius: f32,
    pub opacity: f32,
    pub pointer_events: bool,
    pub translate_y: f32,
}

impl Default for ComputedStyle {
    fn default() -> Self {
        Self {
            inline_flex_centered: false,
            font_family: "",
            font_weight: 400,
            line_height: 1.0,
            cursor: CursorStyle::Default,
            transition_ms: 0,
            user_select: true,
            text_decoration: true,
            background: Paint::Transparent,
            text_color: 0x000000,
            border_width: 0.0,
            border_color: Paint::Transparent,
            outline_width: 0.0,
            outline_color: Paint::Transparent,
            outline_offset: 0.0,
            padding_y: 0.0,
            padding_x: 0.0,
            font_size: 16.0,
            corner_radius: 0.0,
            opacity: 1.0,
            pointer_events: true,
            translate_y: 0.0,
        }
    }
}

impl ComputedStyle {
    fn apply(&mut self, decl: &StyleDecl) {
        match *decl {
            StyleDecl::InlineFlexCentered => self.inline_flex_centered = true,
            StyleDecl::FontFamily(stack) => self.font_family = stack,
            StyleDecl::FontWeight(weight) => self.font_weight = weight,
            StyleDecl::LineHeight(height) => self.line_height = height,
            StyleDecl::Cursor(cursor) => self.cursor = cursor,
            StyleDecl::TransitionMs(ms) => self.transition_ms = ms,
            StyleDecl::UserSelect(enabled) => self.user_select = enabled,
            StyleDecl::TextDecoration(enabled) => self.text_decoration = enabled,
            StyleDecl::Background(paint) => self.background = paint,
            StyleDecl::TextColor(hex) => self.text_color = hex,
            StyleDecl::BorderWidth(width) => self.border_width = width,
            StyleDecl::BorderColor(paint) => self.border_color = paint,
            StyleDecl::OutlineWidth(width) => self.outline_width = width,
            StyleDecl::OutlineColor(paint) => self.outline_color = paint,
            StyleDecl::OutlineOffset(offset) => self.outline_offset = offset,
            StyleDecl::PaddingY(value) => self.padding_y = value,
            StyleDecl::PaddingX(value) => self.padding_x = value,
            StyleDecl::FontSize(size) => self.font_size = size,
            StyleDecl::CornerRadius(radius) => self.corner_radius = radius,
            StyleDecl::Opacity(opacity) => self.opacity = opacity,
            StyleDecl::PointerEvents(enabled) => self.pointer_events = enabled,
            StyleDecl::TranslateY(offset) => self.translate_y = offset,
        }
    }
}

#[cfg(test)]
#[path = "button_style_tests.rs"]
mod tests;
