//! Reusable UI Components
//!
//! # Components
//!
//! - [`Button`] - Configurable button with variants (Primary, Secondary,
//!   Outline, Ghost), sizes (Small, Medium, Large), and gated activation
//!
//! # Design Patterns
//!
//! - **Pure core**: style resolution and the render contract live in
//!   `button_style` and `button_config` with no GPUI dependency
//! - **Builder pattern**: Fluent API with `.method()` chaining
//! - **IntoElement trait**: `Button` is a `RenderOnce` element over the core

pub mod button;
pub mod button_config;
pub mod button_style;

// Re-export commonly used types
pub use button::Button;
pub use button_config::{
    render, ActivationEvent, ActivationGate, ActivationHandler, ActivationSource, ButtonConfig,
    ButtonKind, ButtonLabel, ButtonNode, FormIntent, LabelPart, OnActivate,
};
pub use button_style::{
    resolve_style, ButtonSize, ButtonVariant, ComputedStyle, InteractionState, ResolvedStyle,
};
