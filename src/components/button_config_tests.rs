//! Unit tests for the button render contract and activation gating.

use super::*;
use crate::components::button_style::{CursorStyle, InteractionState, Paint, BLUE};
use std::cell::RefCell;

/// Callback that records every event it receives
fn recorder() -> (Rc<RefCell<Vec<ActivationEvent>>>, impl Fn(&ActivationEvent) + 'static) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = events.clone();
    (events, move |event: &ActivationEvent| {
        sink.borrow_mut().push(*event)
    })
}

#[test]
fn test_kind_value_set() {
    let names: Vec<_> = ButtonKind::ALL.iter().map(|k| k.name()).collect();
    assert_eq!(names, vec!["action", "submit", "reset"]);
}

#[test]
fn test_kind_from_name_accepts_dom_names() {
    assert_eq!(ButtonKind::from_name("button"), ButtonKind::Action);
    assert_eq!(ButtonKind::from_name("submit"), ButtonKind::Submit);
    assert_eq!(ButtonKind::from_name("reset"), ButtonKind::Reset);
    assert_eq!(ButtonKind::from_name("menu"), ButtonKind::Action);
    assert_eq!(ButtonKind::from_name("Reset"), ButtonKind::Action);
    assert_eq!(ButtonKind::from_name(" submit"), ButtonKind::Action);
}

#[test]
fn test_kind_form_intent() {
    assert_eq!(ButtonKind::Action.form_intent(), None);
    assert_eq!(ButtonKind::Submit.form_intent(), Some(FormIntent::Submit));
    assert_eq!(ButtonKind::Reset.form_intent(), Some(FormIntent::Reset));
    assert_eq!(ButtonKind::Action.native_name(), "button");
}

#[test]
fn test_config_defaults() {
    let config = ButtonConfig::new("Click me");
    assert_eq!(config.label, ButtonLabel::Text("Click me".into()));
    assert_eq!(config.variant, ButtonVariant::Primary);
    assert_eq!(config.size, ButtonSize::Medium);
    assert!(!config.disabled);
    assert_eq!(config.kind, ButtonKind::Action);
    assert!(config.on_activate.is_none());
    assert!(config.test_id.is_none());
    assert!(config.style_class.is_none());
}

#[test]
fn test_render_primary_scenario() {
    let node = render(ButtonConfig::new("Primary Button").variant(ButtonVariant::from_name("primary")));
    let computed = node.style().computed(InteractionState::default());

    assert_eq!(computed.background, Paint::Solid(BLUE));
    assert_eq!(computed.border_color, Paint::Solid(BLUE));
    assert_eq!(computed.padding_x, 16.0);
    assert_eq!(computed.font_size, 14.0);
    assert_eq!(node.label().plain_text(), "Primary Button");
}

#[test]
fn test_render_small_scenario() {
    let node = render(ButtonConfig::new("Small Button").size(ButtonSize::from_name("small")));
    assert_eq!(node.style().variant(), ButtonVariant::Primary);
    assert_eq!(node.style().size(), ButtonSize::Small);
    assert_eq!(node.style().computed(InteractionState::default()).padding_x, 12.0);
}

#[test]
fn test_render_disabled_scenario() {
    let (events, callback) = recorder();
    let node = render(
        ButtonConfig::new("Disabled Button")
            .disabled(true)
            .on_activate(callback),
    );

    assert!(node.is_disabled());
    assert!(node.handler().has_callback());
    for _ in 0..5 {
        assert!(!node.activate(&ActivationEvent::pointer(node.kind())));
        assert!(!node.activate(&ActivationEvent::keyboard(node.kind())));
    }
    assert!(events.borrow().is_empty());

    let computed = node.style().computed(InteractionState::default());
    assert_eq!(computed.opacity, 0.6);
    assert_eq!(computed.cursor, CursorStyle::NotAllowed);
}

#[test]
fn test_render_submit_scenario() {
    let node = render(ButtonConfig::new("Submit").kind(ButtonKind::from_name("submit")));
    assert_eq!(node.kind(), ButtonKind::Submit);
    assert_eq!(node.kind().native_name(), "submit");
}

#[test]
fn test_one_activation_one_callback() {
    let (events, callback) = recorder();
    let node = render(
        ButtonConfig::new("Go")
            .kind(ButtonKind::Reset)
            .on_activate(callback),
    );

    let event = ActivationEvent {
        source: ActivationSource::Pointer,
        click_count: 2,
        kind: node.kind(),
    };
    assert!(node.activate(&event));

    let events = events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0], event);
}

#[test]
fn test_repeated_activation_fires_each_time() {
    let (events, callback) = recorder();
    let node = render(ButtonConfig::new("Again").on_activate(callback));
    for _ in 0..3 {
        node.activate(&ActivationEvent::keyboard(ButtonKind::Action));
    }
    assert_eq!(events.borrow().len(), 3);
}

#[test]
fn test_activation_without_callback_is_noop() {
    let node = render(ButtonConfig::new("Inert"));
    assert!(!node.handler().has_callback());
    assert!(!node.activate(&ActivationEvent::pointer(ButtonKind::Action)));
}

#[test]
fn test_disable_after_render_suppresses_activation() {
    let (events, callback) = recorder();
    let gate = ActivationGate::default();
    let node = render(
        ButtonConfig::new("Later")
            .gate(gate.clone())
            .on_activate(callback),
    );

    assert!(node.activate(&ActivationEvent::pointer(ButtonKind::Action)));
    gate.set_disabled(true);
    assert!(node.is_disabled());
    assert!(!node.activate(&ActivationEvent::pointer(ButtonKind::Action)));
    assert_eq!(events.borrow().len(), 1);

    // Re-enabling reopens the same handler
    gate.set_disabled(false);
    assert!(!node.is_disabled());
    assert!(node.activate(&ActivationEvent::pointer(ButtonKind::Action)));
    assert_eq!(events.borrow().len(), 2);
}

#[test]
fn test_render_writes_disabled_into_shared_gate() {
    let gate = ActivationGate::new(false);
    let _node = render(ButtonConfig::new("x").disabled(true).gate(gate.clone()));
    assert!(gate.is_disabled());

    let _node = render(ButtonConfig::new("x").disabled(false).gate(gate.clone()));
    assert!(!gate.is_disabled());
}

#[test]
fn test_render_is_idempotent() {
    let config = ButtonConfig::new("Same")
        .variant(ButtonVariant::Ghost)
        .size(ButtonSize::Large)
        .disabled(true);

    let first = render(config.clone());
    let second = render(config);
    assert_eq!(first.style(), second.style());
    assert_eq!(first.style().to_css(), second.style().to_css());
}

#[test]
fn test_pass_through_identifiers() {
    let node = render(
        ButtonConfig::new("Tagged")
            .test_id("test-button")
            .style_class("custom-class"),
    );
    assert_eq!(node.test_id(), Some("test-button"));
    assert_eq!(node.style_class(), Some("custom-class"));

    // No effect on style
    let plain = render(ButtonConfig::new("Tagged"));
    assert_eq!(node.style(), plain.style());
}

#[test]
fn test_composite_label_passes_through() {
    let label = ButtonLabel::with_icon("→", "Continue");
    let node = render(ButtonConfig::new(label.clone()));
    assert_eq!(node.label(), &label);
    assert_eq!(node.label().plain_text(), "→Continue");
}

#[test]
#[should_panic(expected = "caller bug")]
fn test_callback_panic_propagates() {
    let node = render(ButtonConfig::new("Boom").on_activate(|_| panic!("caller bug")));
    node.activate(&ActivationEvent::pointer(ButtonKind::Action));
}
