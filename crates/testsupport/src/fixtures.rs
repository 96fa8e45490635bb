//! Common record fixtures.

use types::{Record, RecordId, ResourceType};

/// Build a book with the four indexed fields set.
///
/// # Example
///
/// ```
/// use testsupport::prelude::*;
///
/// let book = record(1, "Dune", "Frank Herbert", "Science Fiction", 1965);
/// assert_eq!(book.id.0, 1);
/// ```
pub fn record(id: u32, title: &str, author: &str, genre: &str, year: i32) -> Record {
    Record::new(RecordId(id), title, author, genre, year)
}

/// Build a record of a specific kind.
pub fn record_of_kind(
    id: u32,
    title: &str,
    author: &str,
    genre: &str,
    year: i32,
    kind: ResourceType,
) -> Record {
    Record::builder()
        .id(RecordId(id))
        .title(title)
        .author(author)
        .genre(genre)
        .year(year)
        .kind(kind)
        .build()
}

/// A small mixed catalog.
///
/// - Two authors own two records each (`Ursula K. Le Guin`, `Warner Bros.`).
/// - Genre `Science Fiction` appears three times.
/// - Years span 1949..=2014.
pub fn sample_catalog_records() -> Vec<Record> {
    vec![
        record(
            1,
            "The Left Hand of Darkness",
            "Ursula K. Le Guin",
            "Science Fiction",
            1969,
        ),
        record(
            2,
            "A Wizard of Earthsea",
            "Ursula K. Le Guin",
            "Fantasy",
            1968,
        ),
        record(
            3,
            "Nineteen Eighty-Four",
            "George Orwell",
            "Dystopian",
            1949,
        ),
        record(4, "Neuromancer", "William Gibson", "Science Fiction", 1984),
        record(5, "The Hobbit", "J. R. R. Tolkien", "Fantasy", 1937),
        record_of_kind(
            6,
            "Inception",
            "Warner Bros.",
            "Thriller",
            2010,
            ResourceType::Media,
        ),
        record_of_kind(
            7,
            "The Matrix",
            "Warner Bros.",
            "Science Fiction",
            1999,
            ResourceType::Media,
        ),
        record_of_kind(
            8,
            "Nature Physics",
            "Various",
            "Academic",
            2014,
            ResourceType::Journal,
        ),
    ]
}
