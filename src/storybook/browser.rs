//! StoryBrowser - Main UI for browsing and previewing stories
//!
//! Features:
//! - Left sidebar with story list grouped by category
//! - Type-to-filter search (backspace deletes, escape clears)
//! - Right panel showing selected story preview
//! - Up/down keyboard navigation within the filtered list

use gpui::*;
use tracing::{debug, warn};

use crate::storybook::{all_categories, all_stories, StoryEntry};

/// Main browser view for the storybook
pub struct StoryBrowser {
    stories: Vec<&'static StoryEntry>,
    selected_index: usize,
    filter: String,
    focus_handle: FocusHandle,
}

impl StoryBrowser {
    pub fn new(cx: &mut Context<Self>) -> Self {
        Self {
            stories: all_stories().collect(),
            selected_index: 0,
            filter: String::new(),
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn select_story(&mut self, story_id: &str) {
        match self.stories.iter().position(|s| s.story.id() == story_id) {
            Some(pos) => {
                debug!(story_id, "Selected story");
                self.selected_index = pos;
            }
            None => warn!(story_id, "Unknown story id, keeping current selection"),
        }
    }

    fn filtered_stories(&self) -> Vec<&'static StoryEntry> {
        self.stories
            .iter()
            .filter(|s| s.matches(&self.filter))
            .copied()
            .collect()
    }

    fn selected(&self) -> Option<&'static StoryEntry> {
        self.stories.get(self.selected_index).copied()
    }

    fn select_entry(&mut self, entry: &StoryEntry) {
        if let Some(pos) = self
            .stories
            .iter()
            .position(|s| s.story.id() == entry.story.id())
        {
            self.selected_index = pos;
        }
    }

    /// Move the selection by `delta` within the filtered list
    fn move_selection(&mut self, delta: isize, cx: &mut Context<Self>) {
        let filtered = self.filtered_stories();
        let Some(current) = self.selected() else {
            return;
        };
        let Some(pos) = filtered
            .iter()
            .position(|s| s.story.id() == current.story.id())
        else {
            // Selection is filtered out; jump to the first match
            if let Some(first) = filtered.first() {
                self.select_entry(first);
                cx.notify();
            }
            return;
        };

        let next = pos as isize + delta;
        if next >= 0 && (next as usize) < filtered.len() {
            self.select_entry(filtered[next as usize]);
            cx.notify();
        }
    }

    fn set_filter(&mut self, filter: String, cx: &mut Context<Self>) {
        self.filter = filter;
        // Keep the selection visible when it still matches
        let filtered = self.filtered_stories();
        let still_visible = self
            .selected()
            .is_some_and(|current| filtered.iter().any(|s| s.story.id() == current.story.id()));
        if !still_visible {
            if let Some(first) = filtered.first() {
                self.select_entry(first);
            }
        }
        cx.notify();
    }

    fn handle_key_down(&mut self, event: &KeyDownEvent, cx: &mut Context<Self>) {
        let keystroke = &event.keystroke;
        match keystroke.key.as_str() {
            "up" | "arrowup" => self.move_selection(-1, cx),
            "down" | "arrowdown" => self.move_selection(1, cx),
            "backspace" => {
                let mut filter = self.filter.clone();
                filter.pop();
                self.set_filter(filter, cx);
            }
            "escape" => self.set_filter(String::new(), cx),
            _ => {
                if keystroke.modifiers.platform || keystroke.modifiers.control {
                    return;
                }
                if let Some(text) = keystroke.key_char.as_ref() {
                    if text.chars().all(|c| !c.is_control()) {
                        let filter = format!("{}{}", self.filter, text);
                        self.set_filter(filter, cx);
                    }
                }
            }
        }
    }

    fn render_search_bar(&self) -> impl IntoElement {
        let filter = self.filter.clone();
        div().p_2().border_b_1().border_color(rgb(0x3d3d3d)).child(
            div()
                .flex()
                .flex_row()
                .items_center()
                .gap_2()
                .px_2()
                .py_1()
                .bg(rgb(0x2d2d2d))
                .rounded_md()
                .child(div().text_color(rgb(0x666666)).child("🔍"))
                .child(
                    div()
                        .flex_1()
                        .text_sm()
                        .text_color(if filter.is_empty() {
                            rgb(0x666666)
                        } else {
                            rgb(0xcccccc)
                        })
                        .child(if filter.is_empty() {
                            "Type to filter stories...".to_string()
                        } else {
                            filter
                        }),
                ),
        )
    }

    fn render_story_list(
        &self,
        filtered: &[&'static StoryEntry],
        cx: &mut Context<Self>,
    ) -> impl IntoElement {
        let selected_id = self.selected().map(|s| s.story.id());

        div()
            .flex()
            .flex_col()
            .flex_1()
            .overflow_hidden()
            .children(all_categories().into_iter().map(|category| {
                let category_stories: Vec<_> = filtered
                    .iter()
                    .filter(|s| s.story.category() == category)
                    .copied()
                    .collect();

                if category_stories.is_empty() {
                    return div().into_any_element();
                }

                div()
                    .flex()
                    .flex_col()
                    .child(
                        div()
                            .px_3()
                            .py_2()
                            .text_xs()
                            .text_color(rgb(0x888888))
                            .font_weight(FontWeight::SEMIBOLD)
                            .child(category.to_uppercase()),
                    )
                    .children(category_stories.into_iter().map(|story| {
                        let story_id = story.story.id();
                        let is_selected = selected_id == Some(story_id);

                        let base = div()
                            .id(ElementId::Name(story_id.into()))
                            .px_3()
                            .py_1()
                            .cursor_pointer()
                            .text_sm()
                            .rounded_sm()
                            .child(story.story.name())
                            .on_click(cx.listener(move |this, _event, _window, cx| {
                                this.select_story(story_id);
                                cx.notify();
                            }));

                        if is_selected {
                            base.bg(rgb(0x4a90d9)).text_color(rgb(0xffffff))
                        } else {
                            base.text_color(rgb(0xcccccc))
                                .hover(|s| s.bg(rgb(0x3d3d3d)))
                        }
                    }))
                    .into_any_element()
            }))
    }

    fn render_toolbar(&self) -> impl IntoElement {
        let selected = self.selected();
        let title = selected
            .and_then(|s| s.story.meta().map(|meta| meta.title))
            .or_else(|| selected.map(|s| s.story.name()))
            .unwrap_or("No story selected");
        let category = selected
            .map(|s| format!("({})", s.story.category()))
            .unwrap_or_default();
        let layout = selected
            .map(|s| s.story.layout().name())
            .unwrap_or_default();

        div()
            .flex()
            .flex_row()
            .items_center()
            .justify_between()
            .px_4()
            .py_2()
            .border_b_1()
            .border_color(rgb(0x3d3d3d))
            .bg(rgb(0x252525))
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap_2()
                    .child(
                        div()
                            .text_base()
                            .font_weight(FontWeight::MEDIUM)
                            .text_color(rgb(0xffffff))
                            .child(title),
                    )
                    .child(div().text_xs().text_color(rgb(0x666666)).child(category)),
            )
            .child(
                div()
                    .flex()
                    .flex_row()
                    .items_center()
                    .gap_1()
                    .child(div().text_xs().text_color(rgb(0x888888)).child("Layout:"))
                    .child(
                        div()
                            .px_2()
                            .py_1()
                            .text_xs()
                            .text_color(rgb(0xcccccc))
                            .bg(rgb(0x2d2d2d))
                            .rounded_sm()
                            .child(layout),
                    ),
            )
    }

    fn render_preview(&self) -> AnyElement {
        match self.selected() {
            Some(story) => story.story.render(),
            None => div()
                .flex()
                .items_center()
                .justify_center()
                .size_full()
                .text_color(rgb(0x666666))
                .child("No story selected")
                .into_any_element(),
        }
    }
}

impl Render for StoryBrowser {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let filtered = self.filtered_stories();
        let preview = self.render_preview();

        div()
            .id("story-browser")
            .key_context("StoryBrowser")
            .track_focus(&self.focus_handle)
            .on_key_down(cx.listener(|this, event: &KeyDownEvent, _window, cx| {
                this.handle_key_down(event, cx);
            }))
            .flex()
            .flex_row()
            .size_full()
            .bg(rgb(0x1e1e1e))
            .text_color(rgb(0xcccccc))
            // Left sidebar: story list
            .child(
                div()
                    .w(px(280.))
                    .border_r_1()
                    .border_color(rgb(0x3d3d3d))
                    .flex()
                    .flex_col()
                    .bg(rgb(0x252525))
                    .child(
                        div()
                            .px_3()
                            .py_2()
                            .border_b_1()
                            .border_color(rgb(0x3d3d3d))
                            .child(
                                div()
                                    .text_sm()
                                    .font_weight(FontWeight::SEMIBOLD)
                                    .text_color(rgb(0xffffff))
                                    .child("Button Kit Storybook"),
                            ),
                    )
                    .child(self.render_search_bar())
                    .child(self.render_story_list(&filtered, cx)),
            )
            // Right panel: story preview
            .child(
                div()
                    .flex_1()
                    .flex()
                    .flex_col()
                    .child(self.render_toolbar())
                    .child(preview),
            )
    }
}

impl Focusable for StoryBrowser {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}
