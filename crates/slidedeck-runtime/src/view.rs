#![forbid(unsafe_code)]

//! Read-only view snapshot.
//!
//! Rendering is a pure projection from this snapshot; the controller
//! never sees the display and the display never mutates state.

use slidedeck_core::Slide;

/// Everything a renderer needs for one frame of the presentation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeckView<'a> {
    /// The slide to show.
    pub slide: &'a Slide,
    /// Zero-based index of the current slide.
    pub current: usize,
    /// Total number of slides. Always at least 1.
    pub count: usize,
    /// Whether the controls panel and help text should be drawn.
    pub controls_visible: bool,
    /// Whether the host reports a fullscreen surface.
    pub fullscreen: bool,
}

impl DeckView<'_> {
    /// Fraction of the deck viewed, `(current + 1) / count`, in `(0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        (self.current + 1) as f64 / self.count as f64
    }

    /// The slide counter in the literal `"{position} / {total}"` format,
    /// with a 1-based position.
    #[must_use]
    pub fn counter_text(&self) -> String {
        format!("{} / {}", self.current + 1, self.count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidedeck_core::{Slide, SlideKind};

    fn view(current: usize, count: usize, slide: &Slide) -> DeckView<'_> {
        DeckView {
            slide,
            current,
            count,
            controls_visible: true,
            fullscreen: false,
        }
    }

    #[test]
    fn counter_is_one_based() {
        let slide = Slide::new(SlideKind::Title);
        assert_eq!(view(0, 10, &slide).counter_text(), "1 / 10");
        assert_eq!(view(9, 10, &slide).counter_text(), "10 / 10");
    }

    #[test]
    fn progress_matches_position() {
        let slide = Slide::new(SlideKind::Content);
        assert!((view(0, 4, &slide).progress() - 0.25).abs() < f64::EPSILON);
        assert!((view(3, 4, &slide).progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_never_zero() {
        let slide = Slide::new(SlideKind::Content);
        assert!(view(0, 1, &slide).progress() > 0.0);
    }
}
