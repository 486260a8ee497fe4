#![forbid(unsafe_code)]

//! Text rendering of a [`DeckView`].
//!
//! Rendering is split in two: [`render_lines`] is a pure projection from
//! the view snapshot to a grid of text rows (unit-testable, no
//! terminal), and the presenter in `app` writes those rows to the
//! terminal. Layout from the top:
//!
//! - slide block (title, subtitle, body, footer), vertically centered
//! - controls row and help row, only while controls are visible
//! - progress bar, always on the bottom row

use slidedeck_runtime::DeckView;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use slidedeck_core::{SlideBody, SlideKind};

/// Help line shown while the controls are visible.
pub const HELP_TEXT: &str =
    "Use arrow keys or space to navigate • Home/End for first/last slide • F for fullscreen";

/// Fixed label for the fullscreen toggle.
pub const FULLSCREEN_HINT: &str = "Toggle Fullscreen (F)";

/// Rows at the bottom reserved for controls, help, and the progress bar.
const CHROME_ROWS: usize = 3;

/// Project a view snapshot onto `height` rows of at most `width` cells.
#[must_use]
pub fn render_lines(view: &DeckView<'_>, width: u16, height: u16) -> Vec<String> {
    let width = width as usize;
    let height = height as usize;
    let mut rows = vec![String::new(); height];
    if width == 0 || height == 0 {
        return rows;
    }

    let content_rows = height.saturating_sub(CHROME_ROWS);
    let block = slide_block(view);
    let top = content_rows.saturating_sub(block.len()) / 2;
    for (i, line) in block.iter().enumerate() {
        let row = top + i;
        if row >= content_rows {
            break;
        }
        rows[row] = center(line, width);
    }

    if height >= CHROME_ROWS {
        if view.controls_visible {
            let controls = format!(
                "◀  {}  ▶  ⛶ {}",
                view.counter_text(),
                FULLSCREEN_HINT
            );
            rows[height - 3] = center(&controls, width);
            rows[height - 2] = center(HELP_TEXT, width);
        }
        rows[height - 1] = progress_bar(view.progress(), width);
    }

    rows
}

/// The slide's own lines, before placement.
fn slide_block(view: &DeckView<'_>) -> Vec<String> {
    let slide = view.slide;
    let mut block = Vec::new();

    if let Some(title) = &slide.title {
        match slide.kind {
            SlideKind::Title => {
                block.push(title.to_uppercase());
                block.push(String::new());
            }
            _ => {
                block.push(title.clone());
                block.push(String::new());
            }
        }
    }
    if let Some(subtitle) = &slide.subtitle {
        block.push(subtitle.clone());
        block.push(String::new());
    }
    match &slide.body {
        Some(SlideBody::Text(text)) => block.push(text.clone()),
        Some(SlideBody::Items(items)) => {
            for item in items {
                block.push(format!("• {item}"));
            }
        }
        None => {}
    }
    if let Some(footer) = &slide.footer {
        block.push(String::new());
        block.push(footer.clone());
    }

    while block.last().is_some_and(String::is_empty) {
        block.pop();
    }
    block
}

/// The bottom progress bar: filled cells equal `round(progress * width)`.
fn progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress * width as f64).round() as usize).min(width);
    let mut bar = String::with_capacity(width * 3);
    for _ in 0..filled {
        bar.push('█');
    }
    for _ in filled..width {
        bar.push('░');
    }
    bar
}

/// Center `text` in `width` display cells, truncating if it overflows.
fn center(text: &str, width: usize) -> String {
    let truncated = truncate_to_width(text, width);
    let text_width = UnicodeWidthStr::width(truncated.as_str());
    let pad = width.saturating_sub(text_width) / 2;
    let mut line = " ".repeat(pad);
    line.push_str(&truncated);
    line
}

fn truncate_to_width(text: &str, width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use slidedeck_core::{Slide, SlideKind};

    fn view(slide: &Slide, current: usize, count: usize, controls: bool) -> DeckView<'_> {
        DeckView {
            slide,
            current,
            count,
            controls_visible: controls,
            fullscreen: false,
        }
    }

    fn title_slide() -> Slide {
        Slide::new(SlideKind::Title)
            .with_title("Building Modern Web Applications")
            .with_subtitle("From Idea to Production")
    }

    #[test]
    fn produces_exactly_height_rows() {
        let slide = title_slide();
        let rows = render_lines(&view(&slide, 0, 10, true), 80, 24);
        assert_eq!(rows.len(), 24);
    }

    #[test]
    fn counter_and_help_appear_when_controls_visible() {
        let slide = title_slide();
        let rows = render_lines(&view(&slide, 0, 10, true), 100, 24);
        assert!(rows[21].contains("1 / 10"), "controls row: {:?}", rows[21]);
        assert!(rows[21].contains(FULLSCREEN_HINT));
        assert!(rows[22].contains("arrow keys"));
    }

    #[test]
    fn chrome_is_blank_when_controls_hidden() {
        let slide = title_slide();
        let rows = render_lines(&view(&slide, 0, 10, false), 100, 24);
        assert!(rows[21].is_empty());
        assert!(rows[22].is_empty());
        // Progress bar stays.
        assert!(rows[23].contains('█'));
    }

    #[test]
    fn progress_bar_fill_matches_position() {
        let slide = title_slide();
        let first = render_lines(&view(&slide, 0, 10, true), 10, 24);
        let filled = first[23].chars().filter(|&c| c == '█').count();
        assert_eq!(filled, 1); // round(0.1 * 10)

        let last = render_lines(&view(&slide, 9, 10, true), 10, 24);
        let filled = last[23].chars().filter(|&c| c == '█').count();
        assert_eq!(filled, 10);
    }

    #[test]
    fn title_slide_title_is_uppercased() {
        let slide = title_slide();
        let rows = render_lines(&view(&slide, 0, 10, true), 100, 24);
        assert!(rows.iter().any(|r| r.contains("BUILDING MODERN WEB APPLICATIONS")));
    }

    #[test]
    fn content_slide_renders_bullets() {
        let slide = Slide::new(SlideKind::Content)
            .with_title("About This Talk")
            .with_items(["one", "two", "three"]);
        let rows = render_lines(&view(&slide, 1, 10, true), 80, 24);
        let bullets = rows.iter().filter(|r| r.contains('•')).count();
        assert_eq!(bullets, 3);
        assert!(rows.iter().any(|r| r.contains("About This Talk")));
    }

    #[test]
    fn footer_is_rendered() {
        let slide = Slide::new(SlideKind::Content)
            .with_title("T")
            .with_footer("the footer");
        let rows = render_lines(&view(&slide, 0, 1, true), 80, 24);
        assert!(rows.iter().any(|r| r.contains("the footer")));
    }

    #[test]
    fn long_lines_are_truncated_to_width() {
        let slide = Slide::new(SlideKind::Content).with_title("x".repeat(500));
        let rows = render_lines(&view(&slide, 0, 1, true), 40, 24);
        for row in &rows {
            assert!(UnicodeWidthStr::width(row.as_str()) <= 40, "{row:?}");
        }
    }

    #[test]
    fn zero_area_is_harmless() {
        let slide = title_slide();
        assert_eq!(render_lines(&view(&slide, 0, 10, true), 0, 0).len(), 0);
        assert_eq!(render_lines(&view(&slide, 0, 10, true), 80, 2).len(), 2);
    }
}
