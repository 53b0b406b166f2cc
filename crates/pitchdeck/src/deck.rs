use thiserror::Error;
use tracing::debug;

/// Title reported for slides without an H1 heading.
pub const UNTITLED: &str = "Untitled";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("invalid slide index {index} (deck has {total} slides)")]
    InvalidIndex { index: usize, total: usize },
}

/// Snapshot of the active slide, with a 1-based `current`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideInfo {
    pub current: usize,
    pub total: usize,
    pub title: String,
}

impl SlideInfo {
    /// Text pushed to the accessibility live region.
    pub fn announcement(&self) -> String {
        format!("Slide {} of {}: {}", self.current, self.total, self.title)
    }
}

/// Slide index state machine.
///
/// The slide count is fixed at construction. With at least one slide the
/// current index always lies in `0..total`; an empty deck rejects every move.
#[derive(Debug, Clone)]
pub struct SlideDeck {
    current: usize,
    titles: Vec<Option<String>>,
}

impl SlideDeck {
    pub fn new(titles: Vec<Option<String>>) -> Self {
        Self { current: 0, titles }
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 == self.total()
    }

    pub fn last_index(&self) -> Option<usize> {
        self.total().checked_sub(1)
    }

    /// Jump to `index`. Re-selecting the current slide is allowed and leaves
    /// the state as it was.
    pub fn go_to(&mut self, index: usize) -> Result<usize, NavigationError> {
        if index >= self.total() {
            return Err(NavigationError::InvalidIndex {
                index,
                total: self.total(),
            });
        }
        self.current = index;
        Ok(index)
    }

    /// Advance one slide. Returns the new index, or `None` on the last slide.
    pub fn next(&mut self) -> Option<usize> {
        if self.is_empty() || self.is_last() {
            debug!("Already on last slide");
            return None;
        }
        self.go_to(self.current + 1).ok()
    }

    /// Step back one slide. Returns the new index, or `None` on the first slide.
    pub fn previous(&mut self) -> Option<usize> {
        if self.is_empty() || self.is_first() {
            debug!("Already on first slide");
            return None;
        }
        self.go_to(self.current - 1).ok()
    }

    pub fn title(&self, index: usize) -> &str {
        self.titles
            .get(index)
            .and_then(|t| t.as_deref())
            .filter(|t| !t.trim().is_empty())
            .unwrap_or(UNTITLED)
    }

    pub fn info(&self) -> SlideInfo {
        SlideInfo {
            current: self.current + 1,
            total: self.total(),
            title: self.title(self.current).to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn deck(n: usize) -> SlideDeck {
        SlideDeck::new((0..n).map(|i| Some(format!("Slide {i}"))).collect())
    }

    #[test]
    fn test_starts_on_first_slide() {
        let d = deck(5);
        assert_eq!(d.current_index(), 0);
        assert!(d.is_first());
        assert!(!d.is_last());
    }

    #[test]
    fn test_next_three_times() {
        let mut d = deck(5);
        d.next();
        d.next();
        d.next();
        assert_eq!(d.current_index(), 3);
    }

    #[test]
    fn test_previous_on_first_is_noop() {
        let mut d = deck(5);
        assert_eq!(d.previous(), None);
        assert_eq!(d.current_index(), 0);
    }

    #[test]
    fn test_next_on_last_is_noop() {
        let mut d = deck(5);
        d.go_to(4).unwrap();
        assert_eq!(d.next(), None);
        assert_eq!(d.current_index(), 4);
    }

    #[test]
    fn test_invalid_index_leaves_state() {
        let mut d = deck(5);
        d.go_to(2).unwrap();
        assert_eq!(
            d.go_to(10),
            Err(NavigationError::InvalidIndex {
                index: 10,
                total: 5
            })
        );
        assert_eq!(d.current_index(), 2);
    }

    #[test]
    fn test_empty_deck_is_noop() {
        let mut d = deck(0);
        assert_eq!(d.next(), None);
        assert_eq!(d.previous(), None);
        assert!(d.go_to(0).is_err());
        assert_eq!(d.last_index(), None);
    }

    #[test]
    fn test_info_uses_placeholder_title() {
        let mut d = SlideDeck::new(vec![Some("Intro".into()), None, Some("  ".into())]);
        assert_eq!(d.info().title, "Intro");
        d.next();
        assert_eq!(
            d.info(),
            SlideInfo {
                current: 2,
                total: 3,
                title: UNTITLED.to_string()
            }
        );
        d.next();
        assert_eq!(d.info().title, UNTITLED);
    }

    #[test]
    fn test_announcement_format() {
        let d = deck(3);
        assert_eq!(d.info().announcement(), "Slide 1 of 3: Slide 0");
    }

    #[derive(Debug, Clone)]
    enum Step {
        Next,
        Previous,
        GoTo(usize),
    }

    fn step() -> impl Strategy<Value = Step> {
        prop_oneof![
            Just(Step::Next),
            Just(Step::Previous),
            (0usize..20).prop_map(Step::GoTo),
        ]
    }

    proptest! {
        #[test]
        fn prop_index_stays_in_bounds(total in 1usize..12, steps in prop::collection::vec(step(), 0..64)) {
            let mut d = deck(total);
            for s in steps {
                match s {
                    Step::Next => { d.next(); }
                    Step::Previous => { d.previous(); }
                    Step::GoTo(k) => { let _ = d.go_to(k); }
                }
                prop_assert!(d.current_index() < total);
            }
        }

        #[test]
        fn prop_go_to_is_idempotent(total in 1usize..12, k in 0usize..12) {
            let mut once = deck(total);
            let mut twice = deck(total);
            let a = once.go_to(k);
            let _ = twice.go_to(k);
            let b = twice.go_to(k);
            prop_assert_eq!(a, b);
            prop_assert_eq!(once.current_index(), twice.current_index());
        }

        #[test]
        fn prop_next_never_wraps(total in 1usize..12, presses in 0usize..30) {
            let mut d = deck(total);
            for _ in 0..presses {
                d.next();
            }
            prop_assert_eq!(d.current_index(), presses.min(total - 1));
        }
    }
}
