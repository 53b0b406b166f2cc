pub mod frontmatter;
pub mod splitter;

use std::sync::LazyLock;

use anyhow::Result;
use regex::Regex;
use tracing::debug;

pub use frontmatter::{DeckMeta, PaymentInfo};

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("valid heading regex"));
static LIST_ITEM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[-*+]\s+(.+)$").expect("valid list regex"));
static DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@([A-Za-z0-9_-]+):\s*(.*)$").expect("valid directive regex")
});

#[derive(Debug, Clone)]
pub struct Deck {
    pub meta: DeckMeta,
    pub slides: Vec<SlideSource>,
}

#[derive(Debug, Clone, Default)]
pub struct SlideSource {
    pub blocks: Vec<Block>,
}

impl SlideSource {
    /// Text of the first H1, which names the slide.
    pub fn title(&self) -> Option<&str> {
        self.blocks.iter().find_map(|b| match b {
            Block::Heading { level: 1, text } => Some(text.as_str()),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph(String),
    Item { class: ItemClass, text: String },
    Trigger { kind: TriggerKind, label: String },
}

/// Presentation class of list items, set with `@items:`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemClass {
    /// Animated card with no hover effect.
    #[default]
    Card,
    PartnerBox,
    SdgItem,
    PartnerProfile,
    /// Static bullet, never animated.
    Plain,
}

impl ItemClass {
    pub fn from_name(name: &str) -> Self {
        match name {
            "partner-box" => Self::PartnerBox,
            "sdg-item" => Self::SdgItem,
            "partner-profile" => Self::PartnerProfile,
            "none" | "plain" => Self::Plain,
            _ => Self::Card,
        }
    }

    pub fn is_animated(self) -> bool {
        self != Self::Plain
    }
}

/// Informational elements that open a dialog when clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TriggerKind {
    PaymentQr,
    UpiId,
    Partnership,
    Cta,
}

impl TriggerKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "payment-qr" | "qr-code" => Some(Self::PaymentQr),
            "upi-id" => Some(Self::UpiId),
            "partnership" | "lions-trust" => Some(Self::Partnership),
            "cta" => Some(Self::Cta),
            _ => None,
        }
    }

    pub fn default_label(self) -> &'static str {
        match self {
            Self::PaymentQr => "Scan to pay",
            Self::UpiId => "Copy UPI ID",
            Self::Partnership => "About the partnership",
            Self::Cta => "Partner with us",
        }
    }
}

pub fn parse(content: &str) -> Result<Deck> {
    let (meta, body) = frontmatter::extract(content)?;
    let slides = splitter::split(&body)
        .iter()
        .map(|raw| parse_slide(raw.as_str()))
        .collect();
    Ok(Deck { meta, slides })
}

fn parse_slide(raw: &str) -> SlideSource {
    let mut blocks = Vec::new();
    let mut class = ItemClass::default();
    let mut paragraph: Vec<&str> = Vec::new();

    for line in raw.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            flush_paragraph(&mut paragraph, &mut blocks);
            continue;
        }

        if let Some(caps) = DIRECTIVE.captures(trimmed) {
            flush_paragraph(&mut paragraph, &mut blocks);
            let value = caps[2].trim();
            match &caps[1] {
                "items" => class = ItemClass::from_name(value),
                "trigger" => {
                    let (name, label) = value.split_once(char::is_whitespace).unwrap_or((value, ""));
                    match TriggerKind::from_name(name) {
                        Some(kind) => {
                            let label = match label.trim() {
                                "" => kind.default_label().to_string(),
                                l => l.to_string(),
                            };
                            blocks.push(Block::Trigger { kind, label });
                        }
                        None => debug!("Ignoring unknown trigger '{name}'"),
                    }
                }
                other => debug!("Ignoring unknown directive '@{other}'"),
            }
            continue;
        }

        if let Some(caps) = HEADING.captures(trimmed) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::Heading {
                level: caps[1].len() as u8,
                text: caps[2].trim().to_string(),
            });
            continue;
        }

        if let Some(caps) = LIST_ITEM.captures(line) {
            flush_paragraph(&mut paragraph, &mut blocks);
            blocks.push(Block::Item {
                class,
                text: caps[1].trim().to_string(),
            });
            continue;
        }

        paragraph.push(trimmed);
    }
    flush_paragraph(&mut paragraph, &mut blocks);

    SlideSource { blocks }
}

fn flush_paragraph(lines: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if !lines.is_empty() {
        blocks.push(Block::Paragraph(lines.join(" ")));
        lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_deck_parses() {
        let content = include_str!("../../../../decks/solar-education.md");
        let deck = parse(content).unwrap();
        assert!(deck.slides.len() >= 6, "got {} slides", deck.slides.len());
        assert_eq!(deck.meta.theme.as_deref(), Some("light"));
        assert!(deck.meta.payment.is_some());
        assert!(deck.meta.partnership.is_some());
        assert!(deck.slides.iter().all(|s| s.title().is_some()));
        let triggers: Vec<TriggerKind> = deck
            .slides
            .iter()
            .flat_map(|s| &s.blocks)
            .filter_map(|b| match b {
                Block::Trigger { kind, .. } => Some(*kind),
                _ => None,
            })
            .collect();
        assert!(triggers.contains(&TriggerKind::PaymentQr));
        assert!(triggers.contains(&TriggerKind::UpiId));
    }

    #[test]
    fn test_title_is_first_h1() {
        let deck = parse("# Main Title\n\n## Kicker\n\nText").unwrap();
        assert_eq!(deck.slides.len(), 1);
        assert_eq!(deck.slides[0].title(), Some("Main Title"));
    }

    #[test]
    fn test_slide_without_h1_has_no_title() {
        let deck = parse("## Only a subtitle").unwrap();
        assert_eq!(deck.slides[0].title(), None);
    }

    #[test]
    fn test_items_take_directive_class() {
        let deck = parse("# Partners\n\n- Plain card\n\n@items: partner-box\n- SELCO\n- Rock & Anchor").unwrap();
        let blocks = &deck.slides[0].blocks;
        assert_eq!(
            blocks[1],
            Block::Item {
                class: ItemClass::Card,
                text: "Plain card".into()
            }
        );
        assert_eq!(
            blocks[3],
            Block::Item {
                class: ItemClass::PartnerBox,
                text: "Rock & Anchor".into()
            }
        );
    }

    #[test]
    fn test_trigger_labels() {
        let deck = parse("# Pay\n\n@trigger: upi-id\n@trigger: payment-qr Scan the code\n@trigger: bogus").unwrap();
        let blocks = &deck.slides[0].blocks;
        assert_eq!(blocks.len(), 3);
        assert_eq!(
            blocks[1],
            Block::Trigger {
                kind: TriggerKind::UpiId,
                label: "Copy UPI ID".into()
            }
        );
        assert_eq!(
            blocks[2],
            Block::Trigger {
                kind: TriggerKind::PaymentQr,
                label: "Scan the code".into()
            }
        );
    }

    #[test]
    fn test_paragraph_lines_join() {
        let deck = parse("# T\n\nfirst line\nsecond line\n\nnext").unwrap();
        let blocks = &deck.slides[0].blocks;
        assert_eq!(blocks[1], Block::Paragraph("first line second line".into()));
        assert_eq!(blocks[2], Block::Paragraph("next".into()));
    }

    #[test]
    fn test_item_class_names() {
        assert_eq!(ItemClass::from_name("sdg-item"), ItemClass::SdgItem);
        assert_eq!(ItemClass::from_name("challenge-item"), ItemClass::Card);
        assert!(!ItemClass::from_name("none").is_animated());
    }
}
