//! Input binding and view synchronization around a single [`SlideDeck`].
//!
//! Every input is reduced to an [`Intent`]; navigation intents go through the
//! deck, and every successful index change is followed by a full render sync
//! of the [`Page`] projections.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::animation::{EntranceAnimator, HoverProfile};
use crate::deck::{NavigationError, SlideDeck, SlideInfo};
use crate::dialogs;
use crate::input::{self, ElementRole, InputEvent, Intent, SwipeTracker};
use crate::page::{ElementRef, Indicator, Page, PageLayout};
use crate::parser::{Deck, DeckMeta, TriggerKind};
use crate::platform::Host;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeOptions {
    pub swipe_threshold: f32,
    /// 1-based slide number; clamped to the deck.
    pub start_slide: Option<usize>,
}

impl Default for ChromeOptions {
    fn default() -> Self {
        Self {
            swipe_threshold: input::DEFAULT_SWIPE_THRESHOLD,
            start_slide: None,
        }
    }
}

/// Whether the host should suppress its default handling of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    Handled,
    Ignored,
}

pub struct PresentationChrome {
    deck: SlideDeck,
    page: Page,
    meta: DeckMeta,
    swipe: SwipeTracker,
    animator: Box<dyn EntranceAnimator>,
}

impl PresentationChrome {
    pub fn new(
        deck: Deck,
        layout: PageLayout,
        animator: Box<dyn EntranceAnimator>,
        options: ChromeOptions,
        now: Instant,
    ) -> Self {
        let page = Page::from_deck(&deck, layout);
        let titles = page.slides.iter().map(|s| s.title.clone()).collect();
        let mut chrome = Self {
            deck: SlideDeck::new(titles),
            page,
            meta: deck.meta,
            swipe: SwipeTracker::new(options.swipe_threshold),
            animator,
        };
        info!(
            "Presentation initialized with {} slides",
            chrome.deck.total()
        );

        chrome.create_indicators();
        match chrome.deck.total() {
            0 => warn!("Deck has no slides; navigation is disabled"),
            total => {
                let number = options.start_slide.map_or(1, |n| n.clamp(1, total));
                if let Err(e) = chrome.navigate_to(number, now) {
                    warn!("{e}");
                }
            }
        }
        chrome
    }

    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn meta(&self) -> &DeckMeta {
        &self.meta
    }

    pub fn current_slide_info(&self) -> SlideInfo {
        self.deck.info()
    }

    pub fn go_to_slide(&mut self, index: usize, now: Instant) -> Result<(), NavigationError> {
        match self.deck.go_to(index) {
            Ok(_) => {
                self.sync(now);
                Ok(())
            }
            Err(e) => {
                warn!("Invalid slide index: {index}");
                Err(e)
            }
        }
    }

    /// Jump by 1-based slide number.
    pub fn navigate_to(&mut self, number: usize, now: Instant) -> Result<(), NavigationError> {
        match number.checked_sub(1) {
            Some(index) => self.go_to_slide(index, now),
            None => {
                warn!("Invalid slide number: 0");
                Err(NavigationError::InvalidIndex {
                    index: 0,
                    total: self.deck.total(),
                })
            }
        }
    }

    pub fn next_slide(&mut self, now: Instant) -> bool {
        let moved = self.deck.next().is_some();
        if moved {
            self.sync(now);
        }
        moved
    }

    pub fn previous_slide(&mut self, now: Instant) -> bool {
        let moved = self.deck.previous().is_some();
        if moved {
            self.sync(now);
        }
        moved
    }

    /// Run scheduled entrance effects. Returns `true` while more are pending.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.animator.tick(&mut self.page, now)
    }

    pub fn handle(&mut self, event: InputEvent, host: &mut dyn Host, now: Instant) -> EventOutcome {
        match event {
            InputEvent::Key(press) => match input::key_intent(press) {
                Some(intent) => {
                    self.perform(intent, host, now);
                    EventOutcome::Handled
                }
                None => EventOutcome::Ignored,
            },
            InputEvent::PointerDown { x, y } => {
                self.swipe.begin(x, y);
                EventOutcome::Ignored
            }
            InputEvent::PointerUp { x, y } => {
                if let Some(direction) = self.swipe.end(x, y) {
                    debug!("Swipe {direction:?}");
                    self.perform(direction.intent(), host, now);
                }
                EventOutcome::Ignored
            }
            InputEvent::PointerCancel => {
                self.swipe.cancel();
                EventOutcome::Ignored
            }
            InputEvent::Click(None) => EventOutcome::Ignored,
            InputEvent::Click(Some(role)) => {
                if !self.has_element(role) {
                    debug!("Click on missing element {role:?}");
                    return EventOutcome::Ignored;
                }
                debug!("Clicked {role:?}");
                self.perform(input::click_intent(role), host, now);
                EventOutcome::Handled
            }
            InputEvent::HoverEnter(at) => {
                self.hover(at, true);
                EventOutcome::Ignored
            }
            InputEvent::HoverLeave(at) => {
                self.hover(at, false);
                EventOutcome::Ignored
            }
        }
    }

    fn perform(&mut self, intent: Intent, host: &mut dyn Host, now: Instant) {
        match intent {
            Intent::Previous => {
                self.previous_slide(now);
            }
            Intent::Next => {
                self.next_slide(now);
            }
            Intent::First => {
                let _ = self.go_to_slide(0, now);
            }
            Intent::Last => {
                if let Some(last) = self.deck.last_index() {
                    let _ = self.go_to_slide(last, now);
                }
            }
            Intent::GoTo(index) => {
                let _ = self.go_to_slide(index, now);
            }
            Intent::ToggleFullscreen => {
                if let Err(e) = host.toggle_fullscreen() {
                    info!("Fullscreen unavailable: {e}");
                }
            }
            Intent::ShowDialog(kind) => self.show_dialog(kind, host),
        }
    }

    fn show_dialog(&self, kind: TriggerKind, host: &mut dyn Host) {
        match kind {
            TriggerKind::PaymentQr => match &self.meta.payment {
                Some(payment) => host.show_message(&dialogs::payment_instructions(payment)),
                None => warn!("Deck has no payment details"),
            },
            TriggerKind::UpiId => match &self.meta.payment {
                Some(payment) => {
                    let message = match host.write_clipboard(&payment.upi_id) {
                        Ok(()) => dialogs::upi_copied(payment),
                        Err(e) => {
                            debug!("Clipboard unavailable: {e}");
                            dialogs::upi_fallback(payment)
                        }
                    };
                    host.show_message(&message);
                }
                None => warn!("Deck has no payment details"),
            },
            TriggerKind::Partnership => match dialogs::partnership(&self.meta) {
                Some(text) => host.show_message(text),
                None => warn!("Deck has no partnership description"),
            },
            TriggerKind::Cta => host.show_message(dialogs::cta_acknowledgement(&self.meta)),
        }
    }

    fn has_element(&self, role: ElementRole) -> bool {
        match role {
            ElementRole::Indicator(index) => self
                .page
                .indicators
                .as_ref()
                .is_some_and(|ind| index < ind.len()),
            ElementRole::PrevButton => self.page.prev_button.is_some(),
            ElementRole::NextButton => self.page.next_button.is_some(),
            ElementRole::Trigger(_) => true,
        }
    }

    fn hover(&mut self, at: ElementRef, entering: bool) {
        let Some(element) = self.page.element_mut(at) else {
            return;
        };
        let Some(profile) = HoverProfile::for_content(&element.content) else {
            return;
        };
        if entering {
            profile.enter(&mut element.style);
        } else {
            profile.leave(&mut element.style);
        }
    }

    fn create_indicators(&mut self) {
        let total = self.deck.total();
        let Some(indicators) = self.page.indicators.as_mut() else {
            warn!("Slide indicators container not found");
            return;
        };
        indicators.clear();
        indicators.extend((0..total).map(|i| Indicator {
            label: format!("Go to slide {}", i + 1),
            active: i == 0,
        }));
        debug!("Created {total} indicators");
    }

    /// Bring every projection in line with the deck's current index.
    fn sync(&mut self, now: Instant) {
        let current = self.deck.current_index();
        debug!("Showing slide: {}", current + 1);

        for (i, slide) in self.page.slides.iter_mut().enumerate() {
            slide.active = i == current;
        }
        if let Some(indicators) = self.page.indicators.as_mut() {
            for (i, indicator) in indicators.iter_mut().enumerate() {
                indicator.active = i == current;
            }
        }
        if let Some(slot) = self.page.counter_current.as_mut() {
            slot.text = (current + 1).to_string();
        }
        if let Some(slot) = self.page.counter_total.as_mut() {
            slot.text = self.deck.total().to_string();
        }
        if let Some(button) = self.page.prev_button.as_mut() {
            button.disabled = self.deck.is_first();
        }
        if let Some(button) = self.page.next_button.as_mut() {
            button.disabled = self.deck.is_last();
        }
        self.page.announce(self.deck.info().announcement());
        self.animator.animate_entrance(&mut self.page, current, now);
    }
}
