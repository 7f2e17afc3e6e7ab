//! Button Kit demo - mounts a set of configured buttons for visual inspection
//!
//! The click counter and status line are harness state. Buttons only
//! forward activations; the harness owns whatever they change.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use button_kit::components::{Button, ButtonKind, ButtonSize, ButtonVariant, FormIntent};
use button_kit::error::{ButtonKitError, ResultExt};
use button_kit::{config, logging};
use gpui::*;

struct DemoApp {
    count: Rc<Cell<usize>>,
    status: Rc<RefCell<String>>,
}

impl DemoApp {
    fn new() -> Self {
        Self {
            count: Rc::new(Cell::new(0)),
            status: Rc::new(RefCell::new(String::new())),
        }
    }

    fn row() -> Div {
        div()
            .flex()
            .flex_row()
            .flex_wrap()
            .items_center()
            .gap(px(12.))
            .mb(px(16.))
    }

    fn render_counter(&self) -> impl IntoElement {
        let count = self.count.clone();
        Button::new(format!("count is {}", self.count.get()))
            .variant(ButtonVariant::Secondary)
            .test_id("demo-counter")
            .on_activate(move |_| count.set(count.get() + 1))
    }

    fn render_variant_row(&self) -> Div {
        Self::row()
            .child(Button::new("Primary").variant(ButtonVariant::Primary))
            .child(Button::new("Secondary").variant(ButtonVariant::Secondary))
            .child(Button::new("Outline").variant(ButtonVariant::Outline))
            .child(Button::new("Ghost").variant(ButtonVariant::Ghost))
    }

    fn render_size_row(&self) -> Div {
        Self::row()
            .child(Button::new("Small").size(ButtonSize::Small))
            .child(Button::new("Medium").size(ButtonSize::Medium))
            .child(Button::new("Large").size(ButtonSize::Large))
    }

    fn render_state_row(&self) -> Div {
        let submit_status = self.status.clone();
        let click_status = self.status.clone();

        Self::row()
            .child(Button::new("Disabled").disabled(true).on_activate(|_| {
                tracing::error!("Disabled button activated");
            }))
            .child(
                Button::new("Submit")
                    .kind(ButtonKind::Submit)
                    .on_activate(move |event| {
                        if event.kind.form_intent() == Some(FormIntent::Submit) {
                            tracing::info!(event_type = "demo", action = "submit", "Form submitted");
                            *submit_status.borrow_mut() = "Form submitted".to_string();
                        }
                    }),
            )
            .child(Button::new("Click Me").on_activate(move |event| {
                tracing::info!(
                    event_type = "demo",
                    source = ?event.source,
                    click_count = event.click_count,
                    "Button clicked!"
                );
                *click_status.borrow_mut() = "Button clicked!".to_string();
            }))
    }
}

impl Render for DemoApp {
    fn render(&mut self, _window: &mut Window, _cx: &mut Context<Self>) -> impl IntoElement {
        let status = self.status.borrow().clone();

        div()
            .flex()
            .flex_col()
            .items_center()
            .size_full()
            .p_8()
            .bg(rgb(0xffffff))
            .text_color(rgb(0x213547))
            .child(
                div()
                    .text_2xl()
                    .font_weight(FontWeight::BOLD)
                    .mb(px(16.))
                    .child("Button Kit"),
            )
            .child(div().mb(px(16.)).child(self.render_counter()))
            .child(
                div()
                    .flex()
                    .flex_col()
                    .mt(px(32.))
                    .p(px(16.))
                    .border_1()
                    .border_color(rgb(0xcccccc))
                    .rounded(px(8.))
                    .child(
                        div()
                            .text_xl()
                            .font_weight(FontWeight::SEMIBOLD)
                            .mb(px(12.))
                            .child("Button Component Demo"),
                    )
                    .child(self.render_variant_row())
                    .child(self.render_size_row())
                    .child(self.render_state_row())
                    .child(
                        div()
                            .text_sm()
                            .text_color(rgb(0x666666))
                            .child(status),
                    ),
            )
    }
}

fn main() {
    let config = config::load_config();
    let _guard = logging::init(config.get_log_filter());

    Application::new().run(move |cx: &mut App| {
        tracing::info!(event_type = "app_lifecycle", "Demo application starting");

        let window_size = size(
            px(config.get_window_width()),
            px(config.get_window_height()),
        );
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                window_size,
                cx,
            ))),
            titlebar: Some(TitlebarOptions {
                title: Some("Button Component Demo".into()),
                appears_transparent: false,
                ..Default::default()
            }),
            focus: true,
            show: true,
            kind: WindowKind::Normal,
            ..Default::default()
        };

        let opened = cx
            .open_window(options, |_window, cx| cx.new(|_cx| DemoApp::new()))
            .map_err(|e| ButtonKitError::Window(e.to_string()))
            .log_err();

        match opened {
            Some(_) => cx.activate(true),
            None => cx.quit(),
        }
    });
}
