#![forbid(unsafe_code)]

//! Deck file loading.
//!
//! A deck file is a JSON array of slide objects:
//!
//! ```json
//! [
//!   { "type": "title", "title": "Hello", "subtitle": "World" },
//!   { "type": "content", "title": "One", "content": ["a", "b"] }
//! ]
//! ```

use std::fs;
use std::path::Path;

use slidedeck_core::{Deck, DeckError, Result};

/// Load and validate a deck from a JSON file.
///
/// # Errors
///
/// Returns [`DeckError::Io`] if the file cannot be read,
/// [`DeckError::Parse`] if it is not valid deck JSON (including an
/// empty slide array).
pub fn load_deck(path: &Path) -> Result<Deck> {
    let raw = fs::read_to_string(path)?;
    serde_json::from_str(&raw).map_err(|err| DeckError::Parse(err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_deck(json: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_valid_deck() {
        let file = write_deck(
            r#"[
                { "type": "title", "title": "T", "subtitle": "S" },
                { "type": "content", "title": "C", "content": ["a", "b"] }
            ]"#,
        );
        let deck = load_deck(file.path()).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get(0).unwrap().title.as_deref(), Some("T"));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_deck(Path::new("/nonexistent/deck.json")).unwrap_err();
        assert!(matches!(err, DeckError::Io(_)));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let file = write_deck("{ not json");
        let err = load_deck(file.path()).unwrap_err();
        assert!(matches!(err, DeckError::Parse(_)));
    }

    #[test]
    fn empty_slide_array_is_rejected() {
        let file = write_deck("[]");
        let err = load_deck(file.path()).unwrap_err();
        assert!(matches!(err, DeckError::Parse(_)));
    }
}
