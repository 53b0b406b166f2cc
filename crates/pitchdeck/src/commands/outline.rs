use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use colored::Colorize;

use crate::animation::NoAnimation;
use crate::chrome::{ChromeOptions, PresentationChrome};
use crate::page::PageLayout;
use crate::parser;

/// Walk the deck with the real navigation path and print what a screen
/// reader would hear on each slide.
pub fn run(file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let deck = parser::parse(&content)?;
    if deck.slides.is_empty() {
        anyhow::bail!("No slides found in {}", file.display());
    }

    let now = Instant::now();
    let mut chrome = PresentationChrome::new(
        deck,
        PageLayout::default(),
        Box::new(NoAnimation),
        ChromeOptions::default(),
        now,
    );

    if let Some(title) = &chrome.meta().title {
        println!("{}", title.bold());
        println!();
    }
    for line in announcements(&mut chrome, now) {
        println!("  {line}");
    }
    Ok(())
}

fn announcements(chrome: &mut PresentationChrome, now: Instant) -> Vec<String> {
    let mut lines = Vec::with_capacity(chrome.deck().total());
    loop {
        lines.push(chrome.current_slide_info().announcement());
        if !chrome.next_slide(now) {
            break;
        }
    }
    lines
}
