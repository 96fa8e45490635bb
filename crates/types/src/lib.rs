use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a record while it is indexed.
/// Examples:
/// - `let first = RecordId(1);`
/// - `let imported = RecordId(4_096);`
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RecordId(pub u32);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Broad classification of a catalogued resource.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    #[default]
    Book,
    Journal,
    Media,
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Book => "Book",
            Self::Journal => "Journal",
            Self::Media => "Media",
        };
        f.write_str(name)
    }
}

/// A catalogued resource.
///
/// `title`, `author` and `genre` are read by the catalog at index time; the
/// remaining fields are carried along untouched.
///
/// # Example
/// ```
/// use types::{Record, RecordId, ResourceType};
///
/// let record = Record::builder()
///     .id(RecordId(7))
///     .title("Dune")
///     .author("Frank Herbert")
///     .genre("Science Fiction")
///     .year(1965)
///     .kind(ResourceType::Book)
///     .build();
/// assert!(record.available);
/// assert_eq!(record.language, "English");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, bon::Builder)]
pub struct Record {
    pub id: RecordId,
    #[builder(into)]
    pub title: String,
    #[builder(into)]
    pub author: String,
    #[builder(into)]
    pub genre: String,
    pub year: i32,
    #[builder(default)]
    #[serde(default)]
    pub kind: ResourceType,
    #[builder(into)]
    pub isbn: Option<String>,
    #[builder(into)]
    pub publisher: Option<String>,
    pub page_count: Option<u32>,
    #[builder(into, default = String::from("English"))]
    #[serde(default = "default_language")]
    pub language: String,
    #[builder(default = true)]
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_language() -> String {
    "English".into()
}

fn default_available() -> bool {
    true
}

impl Record {
    /// Shorthand for the four fields every record needs.
    pub fn new(
        id: RecordId,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
        year: i32,
    ) -> Self {
        Self::builder()
            .id(id)
            .title(title)
            .author(author)
            .genre(genre)
            .year(year)
            .build()
    }
}

impl AsRef<Record> for Record {
    fn as_ref(&self) -> &Record {
        self
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.available {
            "Available"
        } else {
            "Borrowed"
        };
        write!(
            f,
            "[{}] {} by {} ({}) - {} [{}] - {}",
            self.id, self.title, self.author, self.year, self.genre, self.kind, status
        )
    }
}
