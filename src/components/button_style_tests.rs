//! Unit tests for button style resolution.

use super::*;

// -------------------------------------------------------------------------
// Lookup tables
// -------------------------------------------------------------------------

#[test]
fn test_variant_value_set() {
    let names: Vec<_> = ButtonVariant::ALL.iter().map(|v| v.name()).collect();
    assert_eq!(names, vec!["primary", "secondary", "outline", "ghost"]);
}

#[test]
fn test_size_value_set() {
    let names: Vec<_> = ButtonSize::ALL.iter().map(|s| s.name()).collect();
    assert_eq!(names, vec!["small", "medium", "large"]);
}

#[test]
fn test_known_names_round_trip() {
    for variant in ButtonVariant::ALL {
        assert_eq!(ButtonVariant::from_name(variant.name()), variant);
    }
    for size in ButtonSize::ALL {
        assert_eq!(ButtonSize::from_name(size.name()), size);
    }
}

#[test]
fn test_from_name_is_exact_and_case_sensitive() {
    for name in ["Ghost", "  ghost ", "Secondary", "GHOST", " outline", "PRIMARY"] {
        assert_eq!(ButtonVariant::from_name(name), ButtonVariant::Primary, "input {:?}", name);
    }
    for name in ["LARGE", "Large", " small", "small "] {
        assert_eq!(ButtonSize::from_name(name), ButtonSize::Medium, "input {:?}", name);
    }

    let style = resolve_style(ButtonVariant::from_name("Ghost"), ButtonSize::from_name("LARGE"), false);
    assert_eq!(style, resolve_style(ButtonVariant::Primary, ButtonSize::Medium, false));
}

#[test]
fn test_unknown_variant_falls_back_to_primary() {
    for name in ["", "danger", "link", "primaryy", "🔥"] {
        let variant = ButtonVariant::from_name(name);
        assert_eq!(variant, ButtonVariant::Primary, "input {:?}", name);
        assert_eq!(variant.fragment(), &PRIMARY_FRAGMENT);
    }
}

#[test]
fn test_unknown_size_falls_back_to_medium() {
    for name in ["", "xl", "tiny", "12"] {
        let size = ButtonSize::from_name(name);
        assert_eq!(size, ButtonSize::Medium, "input {:?}", name);
        assert_eq!(size.fragment(), MEDIUM_FRAGMENT);
    }
}

#[test]
fn test_unknown_names_resolve_identically_to_defaults() {
    let fallback = resolve_style(
        ButtonVariant::from_name("nope"),
        ButtonSize::from_name("nope"),
        false,
    );
    let defaults = resolve_style(ButtonVariant::default(), ButtonSize::default(), false);
    assert_eq!(fallback, defaults);
    assert_eq!(fallback.to_css(), defaults.to_css());
}

#[test]
fn test_serde_deserialize_is_total() {
    let variant: ButtonVariant = serde_json::from_str("\"outline\"").unwrap();
    assert_eq!(variant, ButtonVariant::Outline);

    let variant: ButtonVariant = serde_json::from_str("\"not-a-variant\"").unwrap();
    assert_eq!(variant, ButtonVariant::Primary);

    let size: ButtonSize = serde_json::from_str("\"huge\"").unwrap();
    assert_eq!(size, ButtonSize::Medium);
}

#[test]
fn test_serde_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&ButtonVariant::Secondary).unwrap(),
        "\"secondary\""
    );
    assert_eq!(serde_json::to_string(&ButtonSize::Small).unwrap(), "\"small\"");
}

// -------------------------------------------------------------------------
// Layer order
// -------------------------------------------------------------------------

fn origins(style: &ResolvedStyle) -> Vec<LayerOrigin> {
    style.layers().iter().map(|l| l.origin).collect()
}

#[test]
fn test_enabled_layer_order() {
    let style = resolve_style(ButtonVariant::Outline, ButtonSize::Large, false);
    assert_eq!(
        origins(&style),
        vec![
            LayerOrigin::Base,
            LayerOrigin::Variant(ButtonVariant::Outline),
            LayerOrigin::VariantHover(ButtonVariant::Outline),
            LayerOrigin::Size(ButtonSize::Large),
            LayerOrigin::FocusVisible,
            LayerOrigin::Active,
        ]
    );
}

#[test]
fn test_disabled_layer_order_drops_hover_and_active() {
    let style = resolve_style(ButtonVariant::Primary, ButtonSize::Medium, true);
    assert_eq!(
        origins(&style),
        vec![
            LayerOrigin::Base,
            LayerOrigin::Variant(ButtonVariant::Primary),
            LayerOrigin::Size(ButtonSize::Medium),
            LayerOrigin::Disabled,
            LayerOrigin::FocusVisible,
        ]
    );
    assert!(style.layer(LayerOrigin::Active).is_none());
}

// -------------------------------------------------------------------------
// Computed values
// -------------------------------------------------------------------------

#[test]
fn test_primary_medium_defaults() {
    let computed =
        resolve_style(ButtonVariant::default(), ButtonSize::default(), false)
            .computed(InteractionState::default());

    assert_eq!(computed.background, Paint::Solid(BLUE));
    assert_eq!(computed.border_color, Paint::Solid(BLUE));
    assert_eq!(computed.text_color, WHITE);
    assert_eq!(computed.padding_y, 8.0);
    assert_eq!(computed.padding_x, 16.0);
    assert_eq!(computed.font_size, 14.0);
    assert_eq!(computed.corner_radius, 6.0);
    assert_eq!(computed.cursor, CursorStyle::Pointer);
    assert_eq!(computed.opacity, 1.0);
}

#[test]
fn test_small_size_with_default_variant() {
    let computed = resolve_style(ButtonVariant::default(), ButtonSize::Small, false)
        .computed(InteractionState::default());

    assert_eq!(computed.padding_y, 6.0);
    assert_eq!(computed.padding_x, 12.0);
    assert_eq!(computed.font_size, 12.0);
    assert_eq!(computed.corner_radius, 4.0);
    assert_eq!(computed.background, Paint::Solid(BLUE));
}

#[test]
fn test_variant_border_overrides_base_border_none() {
    let computed = resolve_style(ButtonVariant::Ghost, ButtonSize::Medium, false)
        .computed(InteractionState::default());
    assert_eq!(computed.border_width, 1.0);
    assert_eq!(computed.border_color, Paint::Transparent);
}

#[test]
fn test_disabled_override_wins_over_base_cursor() {
    let computed = resolve_style(ButtonVariant::Secondary, ButtonSize::Large, true)
        .computed(InteractionState::default());
    assert_eq!(computed.opacity, 0.6);
    assert_eq!(computed.cursor, CursorStyle::NotAllowed);
    assert!(!computed.pointer_events);
    // Variant and size still apply underneath
    assert_eq!(computed.background, Paint::Solid(GRAY));
    assert_eq!(computed.padding_x, 24.0);
}

#[test]
fn test_hover_applies_only_when_enabled() {
    let enabled = resolve_style(ButtonVariant::Outline, ButtonSize::Medium, false);
    let hovered = enabled.computed(InteractionState::hovered());
    assert_eq!(hovered.background, Paint::Solid(BLUE));
    assert_eq!(hovered.text_color, WHITE);

    let disabled = resolve_style(ButtonVariant::Outline, ButtonSize::Medium, true);
    assert_eq!(
        disabled.computed(InteractionState::hovered()),
        disabled.computed(InteractionState::default())
    );
}

#[test]
fn test_active_translate_suppressed_when_disabled() {
    let enabled = resolve_style(ButtonVariant::Primary, ButtonSize::Medium, false);
    assert_eq!(enabled.computed(InteractionState::pressed()).translate_y, 1.0);

    let disabled = resolve_style(ButtonVariant::Primary, ButtonSize::Medium, true);
    assert_eq!(disabled.computed(InteractionState::pressed()).translate_y, 0.0);
}

#[test]
fn test_focus_visible_outline_even_when_disabled() {
    for disabled in [false, true] {
        let computed = resolve_style(ButtonVariant::Ghost, ButtonSize::Small, disabled)
            .computed(InteractionState::focus_visible());
        assert_eq!(computed.outline_width, 2.0);
        assert_eq!(computed.outline_color, Paint::Solid(BLUE));
        assert_eq!(computed.outline_offset, 2.0);
    }
}

// -------------------------------------------------------------------------
// Stylesheet text
// -------------------------------------------------------------------------

#[test]
fn test_to_css_is_deterministic() {
    for variant in ButtonVariant::ALL {
        for size in ButtonSize::ALL {
            for disabled in [false, true] {
                let first = resolve_style(variant, size, disabled).to_css();
                let second = resolve_style(variant, size, disabled).to_css();
                assert_eq!(first, second);
            }
        }
    }
}

#[test]
fn test_to_css_contains_fragments_in_order() {
    let css = resolve_style(ButtonVariant::Primary, ButtonSize::Medium, true).to_css();

    let background = css.find("background-color: #007bff;").unwrap();
    let padding = css.find("padding-top: 8px;").unwrap();
    let opacity = css.find("opacity: 0.6;").unwrap();
    let not_allowed = css.find("cursor: not-allowed;").unwrap();
    let focus = css.find("&:focus-visible {").unwrap();

    assert!(background < padding);
    assert!(padding < opacity);
    assert!(opacity < not_allowed);
    assert!(not_allowed < focus);
    assert!(!css.contains("&:hover"));
    assert!(!css.contains("&:active"));
}

#[test]
fn test_to_css_nests_hover_block() {
    let css = resolve_style(ButtonVariant::Secondary, ButtonSize::Medium, false).to_css();
    assert!(css.contains("&:hover {\n  background-color: #545b62;\n  border-color: #545b62;\n}\n"));
    assert!(css.contains("&:active {\n  transform: translateY(1px);\n}\n"));
}
