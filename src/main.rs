#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod sections;
mod theme;
mod viewport;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use keepsake_core::CardContent;

/// The card being shown this run, resolved from command line args
static CONTENT: OnceLock<CardContent> = OnceLock::new();

/// Get the card content (custom file or the built-in card)
pub fn card_content() -> CardContent {
    CONTENT.get().cloned().unwrap_or_default()
}

/// Keepsake - a scroll-driven interactive greeting card
#[derive(Parser, Debug)]
#[command(name = "keepsake-desktop")]
#[command(about = "Keepsake - a scroll-driven interactive greeting card")]
struct Args {
    /// Card content as JSON (defaults to the built-in card)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Override the recipient name on the card
    #[arg(short, long)]
    recipient: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut content = match args.content {
        Some(ref path) => match CardContent::from_path(path) {
            Ok(content) => content,
            Err(e) => {
                tracing::error!("Failed to load card content from {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => CardContent::default(),
    };

    if let Some(recipient) = args.recipient {
        content.recipient = recipient;
    }

    let title = format!("Keepsake — for {}", content.recipient);
    tracing::info!("Starting card for '{}'", content.recipient);

    let _ = CONTENT.set(content);

    // Phone-card proportions: narrow and tall
    let window_width = 720.0;
    let window_height = 920.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(
                window_width,
                window_height,
            ))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
