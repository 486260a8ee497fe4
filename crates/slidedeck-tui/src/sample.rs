#![forbid(unsafe_code)]

//! The built-in sample deck, used when no deck file is given.
//!
//! Ten slides: a title slide, eight content sections, and a closing
//! title slide. This is also the reference deck the scenario tests
//! navigate.

use slidedeck_core::{Deck, Slide, SlideKind};

/// Build the built-in ten-slide sample deck.
#[must_use]
pub fn sample_deck() -> Deck {
    let slides = vec![
        Slide::new(SlideKind::Title)
            .with_title("Building Modern Web Applications")
            .with_subtitle("From Idea to Production")
            .with_footer("Conf 2025"),
        Slide::new(SlideKind::Content).with_title("About This Talk").with_items([
            "Modern frontend architecture",
            "Component-driven development",
            "Testing strategies that scale",
            "Deployment and monitoring",
            "Lessons from production",
        ]),
        Slide::new(SlideKind::Content).with_title("The Problem").with_text(
            "Shipping features fast without sacrificing reliability is the \
             central tension of modern product engineering.",
        ),
        Slide::new(SlideKind::Content).with_title("Architecture").with_items([
            "Small, focused components",
            "State lives in one place",
            "Rendering is a pure projection of state",
        ]),
        Slide::new(SlideKind::Content).with_title("State Management").with_items([
            "Events in, view out",
            "No implicit global mutation",
            "Every transition is testable in isolation",
        ]),
        Slide::new(SlideKind::Content).with_title("Testing").with_items([
            "Unit tests for every transition",
            "Property tests for invariants",
            "End-to-end tests for the user's journey",
        ]),
        Slide::new(SlideKind::Content).with_title("Performance").with_text(
            "Measure first. Most slowness hides in a handful of hot paths.",
        ),
        Slide::new(SlideKind::Content).with_title("Deployment").with_items([
            "Ship small, ship often",
            "Roll back faster than you roll forward",
        ]),
        Slide::new(SlideKind::Content).with_title("Key Takeaways").with_items([
            "Own your state transitions",
            "Let the host be the authority on its own state",
            "Test behavior, not implementation",
        ]),
        Slide::new(SlideKind::Title)
            .with_title("Thank You")
            .with_subtitle("Questions?"),
    ];
    Deck::new(slides).expect("sample deck is non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_deck_has_ten_slides() {
        assert_eq!(sample_deck().len(), 10);
    }

    #[test]
    fn sample_deck_matches_reference_content() {
        let deck = sample_deck();
        let first = deck.get(0).unwrap();
        assert_eq!(first.kind, SlideKind::Title);
        assert_eq!(
            first.title.as_deref(),
            Some("Building Modern Web Applications")
        );

        let second = deck.get(1).unwrap();
        assert_eq!(second.title.as_deref(), Some("About This Talk"));
        match &second.body {
            Some(slidedeck_core::SlideBody::Items(items)) => assert_eq!(items.len(), 5),
            other => panic!("expected five bullet items, got {other:?}"),
        }

        let last = deck.get(9).unwrap();
        assert_eq!(last.title.as_deref(), Some("Thank You"));
    }
}
