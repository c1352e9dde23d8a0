//! Canonical test fixtures shared between unit tests and the tests/ tree.
//!
//! Kept in the library so integration tests and doc examples build the same
//! shapes the same way instead of each growing its own helpers.

use serde_json::Map;

use crate::types::{Book, Chapter, Document, Verse};

/// A verse with the given number and text.
pub fn verse(number: u32, text: &str) -> Verse {
    Verse {
        number,
        text: Some(text.to_string()),
        end_number: None,
        extra: Map::new(),
    }
}

/// A verse whose text is present but blank.
pub fn empty_verse(number: u32) -> Verse {
    verse(number, "")
}

pub fn chapter(number: u32, verses: Vec<Verse>) -> Chapter {
    Chapter {
        number,
        verses,
        extra: Map::new(),
    }
}

pub fn book(name: &str, chapters: Vec<Chapter>) -> Book {
    Book {
        name: name.to_string(),
        chapters,
        extra: Map::new(),
    }
}

pub fn document(books: Vec<Book>) -> Document {
    Document {
        books,
        extra: Map::new(),
    }
}
