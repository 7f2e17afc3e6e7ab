use gpui::*;

use super::StoryLayout;

/// Light page background; the button palette is designed against white
pub const PREVIEW_BACKGROUND: u32 = 0xffffff;
const SECTION_TITLE: u32 = 0x555555;
const ITEM_LABEL: u32 = 0x888888;
const DIVIDER: u32 = 0xe5e5e5;

/// Container for story content, framed per `layout`
pub fn story_container(layout: StoryLayout) -> Div {
    let container = div()
        .flex()
        .flex_col()
        .gap_4()
        .p_4()
        .bg(rgb(PREVIEW_BACKGROUND))
        .size_full()
        .overflow_hidden();

    match layout {
        StoryLayout::Centered => container.items_center().justify_center(),
        StoryLayout::Padded => container,
    }
}

/// Section with title
pub fn story_section(title: &str) -> Div {
    div().flex().flex_col().gap_2().child(
        div()
            .text_sm()
            .font_weight(FontWeight::MEDIUM)
            .text_color(rgb(SECTION_TITLE))
            .child(title.to_string()),
    )
}

/// Item row with label and element
pub fn story_item(label: &str, element: impl IntoElement) -> Div {
    div()
        .flex()
        .flex_row()
        .items_center()
        .gap_4()
        .child(
            div()
                .w(px(120.))
                .text_sm()
                .text_color(rgb(ITEM_LABEL))
                .child(label.to_string()),
        )
        .child(element)
}

/// Wrapping row with a 12px gap, for side-by-side showcases
pub fn story_row() -> Div {
    div()
        .flex()
        .flex_row()
        .flex_wrap()
        .items_center()
        .gap(px(12.))
}

/// Code block for examples
pub fn code_block(code: &str) -> Div {
    div()
        .font_family("Menlo")
        .text_xs()
        .p_2()
        .bg(rgb(0xf5f5f5))
        .text_color(rgb(0x333333))
        .rounded_md()
        .overflow_hidden()
        .child(code.trim().to_string())
}

/// Horizontal divider
pub fn story_divider() -> Div {
    div().h(px(1.)).w_full().bg(rgb(DIVIDER)).my_2()
}
