use std::time::{Duration, Instant};

use tracing::trace;

use crate::page::{ElementContent, ElementRef, Page};
use crate::parser::{ItemClass, TriggerKind};

/// Delay before the first staggered element appears.
pub const STAGGER_BASE_DELAY: Duration = Duration::from_millis(200);
/// Extra delay per element after the first.
pub const STAGGER_STEP: Duration = Duration::from_millis(100);
pub const ENTRANCE_DURATION: f32 = 0.4;
pub const HOVER_DURATION: f32 = 0.3;
/// Vertical offset an element starts from before sliding in.
pub const ENTRANCE_OFFSET: f32 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shadow {
    #[default]
    None,
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Easing {
    /// Fast start, long settle (`cubic-bezier(0.16, 1, 0.3, 1)`).
    EaseOutExpo,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::EaseOutExpo => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f32.powf(-10.0 * t)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub duration: f32,
    pub easing: Easing,
}

impl Transition {
    pub fn ease_out(duration: f32) -> Self {
        Self {
            duration,
            easing: Easing::EaseOutExpo,
        }
    }
}

/// Presentation style of a single element, mutated by hover and entrance
/// effects. `transition` governs how the frontend moves to the new values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InlineStyle {
    pub opacity: f32,
    pub translate_y: f32,
    pub scale: f32,
    pub shadow: Shadow,
    pub transition: Option<Transition>,
    pub pointer_cursor: bool,
}

impl Default for InlineStyle {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translate_y: 0.0,
            scale: 1.0,
            shadow: Shadow::None,
            transition: None,
            pointer_cursor: false,
        }
    }
}

/// The "animate slide entrance" capability, run whenever a slide becomes active.
pub trait EntranceAnimator {
    fn animate_entrance(&mut self, page: &mut Page, slide: usize, now: Instant);

    /// Apply effects that are due. Returns `true` while effects remain queued.
    fn tick(&mut self, page: &mut Page, now: Instant) -> bool;
}

/// Animator that leaves every element as it is.
#[derive(Debug, Default)]
pub struct NoAnimation;

impl EntranceAnimator for NoAnimation {
    fn animate_entrance(&mut self, _page: &mut Page, _slide: usize, _now: Instant) {}

    fn tick(&mut self, _page: &mut Page, _now: Instant) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledEffect {
    pub target: ElementRef,
    pub due: Instant,
}

/// Hides the animatable elements of the entering slide, then reveals them one
/// by one. Scheduled reveals are never cancelled: navigating away early still
/// lets them land on the now inactive slide.
#[derive(Debug, Default)]
pub struct StaggeredEntrance {
    pending: Vec<ScheduledEffect>,
}

impl StaggeredEntrance {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn pending(&self) -> &[ScheduledEffect] {
        &self.pending
    }
}

impl EntranceAnimator for StaggeredEntrance {
    fn animate_entrance(&mut self, page: &mut Page, slide: usize, now: Instant) {
        let Some(view) = page.slides.get_mut(slide) else {
            return;
        };
        for (order, element) in view.animatable_indices().into_iter().enumerate() {
            let el = &mut view.elements[element];
            el.style.opacity = 0.0;
            el.style.translate_y = ENTRANCE_OFFSET;
            el.style.transition = None;

            self.pending.push(ScheduledEffect {
                target: ElementRef { slide, element },
                due: now + STAGGER_BASE_DELAY + STAGGER_STEP * order as u32,
            });
        }
        trace!(slide, queued = self.pending.len(), "entrance scheduled");
    }

    fn tick(&mut self, page: &mut Page, now: Instant) -> bool {
        self.pending.retain(|effect| {
            if effect.due > now {
                return true;
            }
            if let Some(el) = page.element_mut(effect.target) {
                el.style.transition = Some(Transition::ease_out(ENTRANCE_DURATION));
                el.style.opacity = 1.0;
                el.style.translate_y = 0.0;
            }
            false
        });
        !self.pending.is_empty()
    }
}

/// How an element reacts to the pointer hovering over it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoverProfile {
    /// Partner boxes lift and grow slightly.
    Lift,
    /// SDG cards lift and cast a large shadow.
    Raise,
    /// Partner profiles nudge up with a medium shadow.
    Nudge,
    /// QR codes grow and show a pointer cursor.
    Grow,
}

impl HoverProfile {
    pub fn for_content(content: &ElementContent) -> Option<Self> {
        match content {
            ElementContent::Item { class, .. } => match class {
                ItemClass::PartnerBox => Some(Self::Lift),
                ItemClass::SdgItem => Some(Self::Raise),
                ItemClass::PartnerProfile => Some(Self::Nudge),
                ItemClass::Card | ItemClass::Plain => None,
            },
            ElementContent::Trigger {
                kind: TriggerKind::PaymentQr,
                ..
            } => Some(Self::Grow),
            _ => None,
        }
    }

    pub fn enter(self, style: &mut InlineStyle) {
        match self {
            Self::Lift => {
                style.translate_y = -8.0;
                style.scale = 1.02;
            }
            Self::Raise => {
                style.translate_y = -6.0;
                style.shadow = Shadow::Large;
            }
            Self::Nudge => {
                style.translate_y = -4.0;
                style.shadow = Shadow::Medium;
            }
            Self::Grow => {
                style.scale = 1.05;
                style.pointer_cursor = true;
            }
        }
        style.transition = Some(Transition::ease_out(HOVER_DURATION));
    }

    /// Restore the resting style. The enter transition stays in place so the
    /// element eases back.
    pub fn leave(self, style: &mut InlineStyle) {
        match self {
            Self::Lift => {
                style.translate_y = 0.0;
                style.scale = 1.0;
            }
            Self::Raise | Self::Nudge => {
                style.translate_y = 0.0;
                style.shadow = Shadow::Small;
            }
            Self::Grow => style.scale = 1.0,
        }
    }
}
