use crate::page::ElementRef;
use crate::parser::TriggerKind;

/// Minimum horizontal travel, in points, for a drag to count as a swipe.
pub const DEFAULT_SWIPE_THRESHOLD: f32 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowUp,
    ArrowRight,
    ArrowDown,
    Space,
    Home,
    End,
    Char(char),
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub command: bool,
}

impl Modifiers {
    pub fn shortcut(self) -> bool {
        self.ctrl || self.command
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

#[cfg(test)]
impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }
}

/// Role tag carried by every interactive element of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementRole {
    Indicator(usize),
    PrevButton,
    NextButton,
    Trigger(TriggerKind),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    Key(KeyPress),
    PointerDown { x: f32, y: f32 },
    PointerUp { x: f32, y: f32 },
    PointerCancel,
    /// A click; `None` when it hit no tagged element.
    Click(Option<ElementRole>),
    HoverEnter(ElementRef),
    HoverLeave(ElementRef),
}

/// What an input asks the chrome to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Previous,
    Next,
    First,
    Last,
    GoTo(usize),
    ToggleFullscreen,
    ShowDialog(TriggerKind),
}

pub fn key_intent(press: KeyPress) -> Option<Intent> {
    if press.modifiers.shortcut() {
        match press.key {
            Key::Char('f' | 'F') => return Some(Intent::ToggleFullscreen),
            Key::Char('p' | 'P') => return Some(Intent::ShowDialog(TriggerKind::Partnership)),
            _ => {}
        }
    }
    match press.key {
        Key::ArrowLeft | Key::ArrowUp => Some(Intent::Previous),
        Key::ArrowRight | Key::ArrowDown | Key::Space => Some(Intent::Next),
        Key::Home => Some(Intent::First),
        Key::End => Some(Intent::Last),
        Key::Char(_) | Key::Other => None,
    }
}

pub fn click_intent(role: ElementRole) -> Intent {
    match role {
        ElementRole::Indicator(index) => Intent::GoTo(index),
        ElementRole::PrevButton => Intent::Previous,
        ElementRole::NextButton => Intent::Next,
        ElementRole::Trigger(kind) => Intent::ShowDialog(kind),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Finger moved right to left.
    Left,
    /// Finger moved left to right.
    Right,
}

impl SwipeDirection {
    pub fn intent(self) -> Intent {
        match self {
            Self::Left => Intent::Next,
            Self::Right => Intent::Previous,
        }
    }
}

/// Tracks one touch or drag gesture from press to release.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: f32,
    start: Option<(f32, f32)>,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(DEFAULT_SWIPE_THRESHOLD)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start: None,
        }
    }

    #[cfg(test)]
    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn begin(&mut self, x: f32, y: f32) {
        self.start = Some((x, y));
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    /// Finish the gesture. Only a mostly horizontal travel longer than the
    /// threshold is a swipe. The start point is cleared either way.
    pub fn end(&mut self, x: f32, y: f32) -> Option<SwipeDirection> {
        let (start_x, start_y) = self.start.take()?;
        let dx = start_x - x;
        let dy = start_y - y;
        if dx.abs() <= dy.abs() || dx.abs() <= self.threshold {
            return None;
        }
        Some(if dx > 0.0 {
            SwipeDirection::Left
        } else {
            SwipeDirection::Right
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_keys() {
        let cases = [
            (Key::ArrowLeft, Some(Intent::Previous)),
            (Key::ArrowUp, Some(Intent::Previous)),
            (Key::ArrowRight, Some(Intent::Next)),
            (Key::ArrowDown, Some(Intent::Next)),
            (Key::Space, Some(Intent::Next)),
            (Key::Home, Some(Intent::First)),
            (Key::End, Some(Intent::Last)),
            (Key::Char('f'), None),
            (Key::Other, None),
        ];
        for (key, expected) in cases {
            assert_eq!(key_intent(KeyPress::plain(key)), expected, "{key:?}");
        }
    }

    #[test]
    fn test_shortcuts_need_modifier() {
        let ctrl_f = KeyPress {
            key: Key::Char('f'),
            modifiers: Modifiers {
                ctrl: true,
                command: false,
            },
        };
        let cmd_p = KeyPress {
            key: Key::Char('P'),
            modifiers: Modifiers {
                ctrl: false,
                command: true,
            },
        };
        assert_eq!(key_intent(ctrl_f), Some(Intent::ToggleFullscreen));
        assert_eq!(
            key_intent(cmd_p),
            Some(Intent::ShowDialog(TriggerKind::Partnership))
        );
        assert_eq!(key_intent(KeyPress::plain(Key::Char('p'))), None);
    }

    #[test]
    fn test_modified_arrow_still_navigates() {
        let press = KeyPress {
            key: Key::ArrowRight,
            modifiers: Modifiers {
                ctrl: true,
                command: false,
            },
        };
        assert_eq!(key_intent(press), Some(Intent::Next));
    }

    #[test]
    fn test_click_intents() {
        assert_eq!(click_intent(ElementRole::Indicator(3)), Intent::GoTo(3));
        assert_eq!(click_intent(ElementRole::PrevButton), Intent::Previous);
        assert_eq!(click_intent(ElementRole::NextButton), Intent::Next);
        assert_eq!(
            click_intent(ElementRole::Trigger(TriggerKind::UpiId)),
            Intent::ShowDialog(TriggerKind::UpiId)
        );
    }

    #[test]
    fn test_swipe_left_is_next() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(200.0, 100.0);
        let dir = swipe.end(140.0, 90.0);
        assert_eq!(dir, Some(SwipeDirection::Left));
        assert_eq!(dir.map(SwipeDirection::intent), Some(Intent::Next));
        assert!(!swipe.is_tracking());
    }

    #[test]
    fn test_swipe_right_is_previous() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(100.0, 100.0);
        assert_eq!(swipe.end(180.0, 110.0), Some(SwipeDirection::Right));
    }

    #[test]
    fn test_short_swipe_ignored() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(200.0, 100.0);
        assert_eq!(swipe.end(160.0, 100.0), None);
        assert!(!swipe.is_tracking());
    }

    #[test]
    fn test_exact_threshold_ignored() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(200.0, 100.0);
        assert_eq!(swipe.end(150.0, 100.0), None);
    }

    #[test]
    fn test_vertical_swipe_ignored() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(200.0, 100.0);
        assert_eq!(swipe.end(130.0, 10.0), None);
    }

    #[test]
    fn test_release_without_start_ignored() {
        let mut swipe = SwipeTracker::default();
        assert_eq!(swipe.end(0.0, 0.0), None);
    }

    #[test]
    fn test_origin_start_is_tracked() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(0.0, 0.0);
        assert_eq!(swipe.end(-80.0, 0.0), Some(SwipeDirection::Left));
    }

    #[test]
    fn test_cancel_resets() {
        let mut swipe = SwipeTracker::new(10.0);
        swipe.begin(50.0, 50.0);
        swipe.cancel();
        assert_eq!(swipe.end(0.0, 50.0), None);
    }
}
