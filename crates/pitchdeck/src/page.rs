//! In-memory projection of the presentation page.
//!
//! The chrome writes slide activity, indicator highlight, counter text,
//! button state, inline styles and live-region announcements here; the egui
//! frontend only reads it. Chrome elements are optional so a page can be
//! assembled without any of them.

use crate::animation::InlineStyle;
use crate::parser::{Block, Deck, ItemClass, TriggerKind};

pub const ANNOUNCER_ID: &str = "slide-announcer";

#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub slides: Vec<SlideView>,
    pub indicators: Option<Vec<Indicator>>,
    pub counter_current: Option<TextSlot>,
    pub counter_total: Option<TextSlot>,
    pub prev_button: Option<NavButton>,
    pub next_button: Option<NavButton>,
    live_region: Option<LiveRegion>,
}

/// Which optional chrome elements the page provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub indicators: bool,
    pub counter: bool,
    pub nav_buttons: bool,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            indicators: true,
            counter: true,
            nav_buttons: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideView {
    pub title: Option<String>,
    pub active: bool,
    pub elements: Vec<SlideElement>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SlideElement {
    pub content: ElementContent,
    pub style: InlineStyle,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ElementContent {
    Heading { level: u8, text: String },
    Paragraph(String),
    Item { class: ItemClass, text: String },
    Trigger { kind: TriggerKind, label: String },
}

impl SlideElement {
    fn new(content: ElementContent) -> Self {
        Self {
            content,
            style: InlineStyle::default(),
        }
    }

    /// Animated items and triggers take part in the entrance stagger.
    pub fn is_animatable(&self) -> bool {
        match self.content {
            ElementContent::Item { class, .. } => class.is_animated(),
            ElementContent::Trigger { .. } => true,
            ElementContent::Heading { .. } | ElementContent::Paragraph(_) => false,
        }
    }
}

impl SlideView {
    /// Indices of the elements that take part in the entrance stagger, in order.
    pub fn animatable_indices(&self) -> Vec<usize> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_animatable())
            .map(|(i, _)| i)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Indicator {
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSlot {
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavButton {
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiveRegion {
    pub id: &'static str,
    pub polite: bool,
    pub atomic: bool,
    pub text: String,
}

/// Addresses one element of one slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementRef {
    pub slide: usize,
    pub element: usize,
}

impl Page {
    pub fn from_deck(deck: &Deck, layout: PageLayout) -> Self {
        let slides = deck
            .slides
            .iter()
            .map(|source| SlideView {
                title: source.title().map(str::to_string),
                active: false,
                elements: source
                    .blocks
                    .iter()
                    .cloned()
                    .map(|block| SlideElement::new(block.into()))
                    .collect(),
            })
            .collect();

        Self {
            slides,
            indicators: layout.indicators.then(Vec::new),
            counter_current: layout.counter.then(TextSlot::default),
            counter_total: layout.counter.then(TextSlot::default),
            prev_button: layout.nav_buttons.then(NavButton::default),
            next_button: layout.nav_buttons.then(NavButton::default),
            live_region: None,
        }
    }

    #[cfg(test)]
    pub fn element(&self, at: ElementRef) -> Option<&SlideElement> {
        self.slides.get(at.slide)?.elements.get(at.element)
    }

    pub fn element_mut(&mut self, at: ElementRef) -> Option<&mut SlideElement> {
        self.slides.get_mut(at.slide)?.elements.get_mut(at.element)
    }

    pub fn active_slide(&self) -> Option<usize> {
        self.slides.iter().position(|s| s.active)
    }

    pub fn live_region(&self) -> Option<&LiveRegion> {
        self.live_region.as_ref()
    }

    /// Replace the live-region text, creating the region on first use.
    pub fn announce(&mut self, text: String) {
        let region = self.live_region.get_or_insert_with(|| LiveRegion {
            id: ANNOUNCER_ID,
            polite: true,
            atomic: true,
            text: String::new(),
        });
        region.text = text;
    }
}

impl From<Block> for ElementContent {
    fn from(block: Block) -> Self {
        match block {
            Block::Heading { level, text } => Self::Heading { level, text },
            Block::Paragraph(text) => Self::Paragraph(text),
            Block::Item { class, text } => Self::Item { class, text },
            Block::Trigger { kind, label } => Self::Trigger { kind, label },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser;

    #[test]
    fn test_from_deck_builds_slides() {
        let deck = parser::parse("# One\n\n- a\n- b\n\n---\n\n# Two\n\ntext").unwrap();
        let page = Page::from_deck(&deck, PageLayout::default());
        assert_eq!(page.slides.len(), 2);
        assert_eq!(page.slides[0].title.as_deref(), Some("One"));
        assert_eq!(page.slides[0].animatable_indices(), vec![1, 2]);
        assert!(page.slides[1].animatable_indices().is_empty());
        assert_eq!(page.active_slide(), None);
        assert!(page.indicators.is_some());
    }

    #[test]
    fn test_layout_omits_elements() {
        let deck = parser::parse("# One").unwrap();
        let layout = PageLayout {
            indicators: false,
            counter: false,
            nav_buttons: true,
        };
        let page = Page::from_deck(&deck, layout);
        assert!(page.indicators.is_none());
        assert!(page.counter_current.is_none());
        assert!(page.counter_total.is_none());
        assert!(page.prev_button.is_some());
    }

    #[test]
    fn test_announce_creates_region_once() {
        let deck = parser::parse("# One").unwrap();
        let mut page = Page::from_deck(&deck, PageLayout::default());
        assert!(page.live_region().is_none());
        page.announce("first".into());
        page.announce("second".into());
        let region = page.live_region().unwrap();
        assert_eq!(region.id, ANNOUNCER_ID);
        assert!(region.polite && region.atomic);
        assert_eq!(region.text, "second");
    }

    #[test]
    fn test_triggers_join_the_stagger() {
        let deck = parser::parse("# Ask\n\nFund us\n\n- Target\n\n@trigger: payment-qr\n@trigger: cta")
            .unwrap();
        let page = Page::from_deck(&deck, PageLayout::default());
        let slide = &page.slides[0];
        let animated: Vec<bool> = slide.elements.iter().map(SlideElement::is_animatable).collect();
        assert_eq!(animated, vec![false, false, true, true, true]);
        assert_eq!(slide.animatable_indices(), vec![2, 3, 4]);
    }

    #[test]
    fn test_plain_items_not_animatable() {
        let deck = parser::parse("# One\n\n@items: none\n- static").unwrap();
        let page = Page::from_deck(&deck, PageLayout::default());
        assert!(page.slides[0].animatable_indices().is_empty());
    }
}
