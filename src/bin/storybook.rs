//! Storybook - Component Preview Tool for button-kit
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin storybook
//! cargo run --bin storybook -- --story button-playground
//! cargo run --bin storybook -- --list
//! ```

use button_kit::error::{ButtonKitError, ResultExt};
use button_kit::stories::{button_catalog, CatalogStory};
use button_kit::storybook::{all_stories, StoryBrowser};
use button_kit::{config, logging};
use clap::Parser;
use gpui::*;

/// Button Kit Storybook - Component Preview Tool
#[derive(Parser, Debug)]
#[command(name = "storybook", version, about)]
struct Cli {
    /// Open a specific story by ID
    #[arg(short, long)]
    story: Option<String>,

    /// Print registered stories and the button catalog, then exit
    #[arg(short, long)]
    list: bool,
}

fn print_catalog() -> anyhow::Result<()> {
    println!("Stories:");
    for entry in all_stories() {
        println!(
            "  {:<20} {} ({})",
            entry.story.id(),
            entry.story.name(),
            entry.story.category()
        );
    }

    println!();
    println!("Button catalog:");
    for entry in button_catalog() {
        match &entry.story {
            CatalogStory::Args(args) => {
                println!("  {:<14} {}", entry.name, serde_json::to_string(args)?)
            }
            CatalogStory::Render(example) => println!("  {:<14} <{:?}>", entry.name, example),
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list {
        return print_catalog();
    }

    let config = config::load_config();
    let _guard = logging::init(config.get_log_filter());

    let initial_story = cli.story.or_else(|| config.initial_story.clone());
    tracing::info!(initial_story = ?initial_story, "Starting storybook");

    Application::new().run(move |cx| {
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
                title: Some("Button Kit Storybook".into()),
                appears_transparent: false,
                ..Default::default()
            }),
            window_min_size: Some(size(
                px(config::MIN_WINDOW_WIDTH),
                px(config::MIN_WINDOW_HEIGHT),
            )),
            focus: true,
            show: true,
            kind: WindowKind::Normal,
            ..Default::default()
        };

        let opened = cx
            .open_window(options, |window, cx| {
                let browser = cx.new(|cx| {
                    let mut browser = StoryBrowser::new(cx);
                    if let Some(ref story_id) = initial_story {
                        browser.select_story(story_id);
                    }
                    browser
                });
                let focus_handle = browser.read(cx).focus_handle(cx);
                window.focus(&focus_handle, cx);
                browser
            })
            .map_err(|e| ButtonKitError::Window(e.to_string()))
            .log_err();

        if opened.is_none() {
            cx.quit();
        }
    });

    Ok(())
}
