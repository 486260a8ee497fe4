#![forbid(unsafe_code)]

//! Slide and deck data model.
//!
//! Slides are plain immutable records supplied by the caller; the deck is
//! a validated non-empty sequence the controller treats as read-only.
//! The serde shapes match the deck JSON format: an array of
//! `{ "type", "title", "subtitle", "content", "footer" }` objects where
//! `content` is either a single string or an array of strings.

use serde::{Deserialize, Serialize};

use crate::error::{DeckError, Result};

/// The kind of a slide, which drives how the renderer treats its title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    /// A title slide: the title is the main heading.
    Title,
    /// A regular content slide: the title is a section heading.
    #[default]
    Content,
    /// Any other kind; rendered like a content slide.
    Other,
}

// Unknown kinds map to `Other` rather than failing the whole deck, so a
// deck authored for a richer renderer still loads.
impl<'de> Deserialize<'de> for SlideKind {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(match tag.as_str() {
            "title" => Self::Title,
            "content" => Self::Content,
            _ => Self::Other,
        })
    }
}

/// The body of a slide: a single text block or an ordered list of items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SlideBody {
    /// A single paragraph of text.
    Text(String),
    /// An ordered sequence of bullet items.
    Items(Vec<String>),
}

/// One unit of presentation content.
///
/// All fields other than `kind` are optional; the renderer skips what is
/// absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Slide kind.
    #[serde(rename = "type", default)]
    pub kind: SlideKind,

    /// Main heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Secondary heading.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,

    /// Body content.
    #[serde(rename = "content", default, skip_serializing_if = "Option::is_none")]
    pub body: Option<SlideBody>,

    /// Footer line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
}

impl Slide {
    /// Create an empty slide of the given kind.
    #[must_use]
    pub fn new(kind: SlideKind) -> Self {
        Self {
            kind,
            title: None,
            subtitle: None,
            body: None,
            footer: None,
        }
    }

    /// Set the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    /// Set a single-paragraph body.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.body = Some(SlideBody::Text(text.into()));
        self
    }

    /// Set a bullet-list body.
    #[must_use]
    pub fn with_items<I, S>(mut self, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body = Some(SlideBody::Items(items.into_iter().map(Into::into).collect()));
        self
    }

    /// Set the footer.
    #[must_use]
    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }
}

/// An ordered, non-empty, read-only sequence of slides.
///
/// Navigation and progress math are undefined over an empty sequence, so
/// construction fails fast on one instead of deferring the error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    /// Validate and wrap a slide sequence.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::Empty`] if `slides` is empty.
    pub fn new(slides: Vec<Slide>) -> Result<Self> {
        if slides.is_empty() {
            return Err(DeckError::Empty);
        }
        Ok(Self { slides })
    }

    /// Number of slides. Always at least 1.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// A deck is never empty; provided for clippy's sake.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Slide at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// All slides in order.
    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}

impl<'de> Deserialize<'de> for Deck {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let slides = Vec::<Slide>::deserialize(deserializer)?;
        Deck::new(slides).map_err(serde::de::Error::custom)
    }
}
