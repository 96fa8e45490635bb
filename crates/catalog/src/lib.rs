//! Multi-index search engine over catalog records.
//!
//! Every record is held in four structures that change together on each
//! `add`/`remove`:
//! - a primary hash table keyed by identifier,
//! - secondary hash tables keyed by lowercased title, author and genre,
//! - a binary search tree ordered by case-insensitive title.
//!
//! The tree never holds two elements with equal titles, so among records whose
//! titles differ only in case just the first one added shows up in
//! [`CatalogIndex::all_sorted_by_title`]. The other structures hold them all.

mod shared;
mod title;

pub use shared::SharedCatalog;
pub use title::TitleKey;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use bst::SearchTree;
use common::{CatalogError, CatalogResult, Config};
use hash::HashTable;
use title::TitleOrdered;
use tracing::{debug, trace};
use types::{Record, RecordId};

/// Lowercased field value mapped to every record sharing it.
type SecondaryIndex = HashTable<String, Vec<Arc<Record>>>;

/// Record attribute backed by a secondary index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Author,
    Genre,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Title, Field::Author, Field::Genre];

    /// The raw attribute value on `record`.
    pub fn value_of(self, record: &Record) -> &str {
        match self {
            Self::Title => &record.title,
            Self::Author => &record.author,
            Self::Genre => &record.genre,
        }
    }

    fn index_key(self, record: &Record) -> String {
        self.value_of(record).to_lowercase()
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Genre => "genre",
        };
        f.write_str(name)
    }
}

impl FromStr for Field {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "title" => Ok(Self::Title),
            "author" => Ok(Self::Author),
            "genre" => Ok(Self::Genre),
            other => Err(CatalogError::InvalidArgument(format!(
                "unknown search field '{other}'"
            ))),
        }
    }
}

/// In-memory catalog answering id, exact-field, partial-title, year-range and
/// sorted queries.
pub struct CatalogIndex {
    by_id: HashTable<RecordId, Arc<Record>>,
    by_title: SecondaryIndex,
    by_author: SecondaryIndex,
    by_genre: SecondaryIndex,
    sorted_by_title: SearchTree<TitleOrdered>,
}

impl CatalogIndex {
    /// Create an empty catalog with default table sizing.
    pub fn new() -> Self {
        Self {
            by_id: HashTable::new(),
            by_title: HashTable::new(),
            by_author: HashTable::new(),
            by_genre: HashTable::new(),
            sorted_by_title: SearchTree::new(),
        }
    }

    /// Create an empty catalog whose hash tables are sized by `config`.
    pub fn with_config(config: Config) -> CatalogResult<Self> {
        Ok(Self {
            by_id: HashTable::with_config(&config)?,
            by_title: HashTable::with_config(&config)?,
            by_author: HashTable::with_config(&config)?,
            by_genre: HashTable::with_config(&config)?,
            sorted_by_title: SearchTree::new(),
        })
    }

    /// Index a record under its id, its three field values and its title.
    ///
    /// An id that is already indexed is rejected and nothing changes; to
    /// change a record, `remove` it and add the new version (or `replace`).
    pub fn add(&mut self, record: Record) -> CatalogResult<()> {
        if self.by_id.contains(&record.id) {
            return Err(CatalogError::DuplicateId(record.id.0));
        }

        let record = Arc::new(record);
        self.by_id.put(record.id, Arc::clone(&record));
        for field in Field::ALL {
            let key = field.index_key(&record);
            add_to_index(self.secondary_mut(field), key, &record);
        }

        if !self
            .sorted_by_title
            .insert(TitleOrdered::new(Arc::clone(&record)))
        {
            debug!(id = %record.id, title = %record.title, "title already present in sorted view");
        }

        debug!(id = %record.id, len = self.len(), "record indexed");
        Ok(())
    }

    /// Index every record in order, stopping at the first rejected one.
    ///
    /// Returns how many records were added.
    pub fn add_all(&mut self, records: impl IntoIterator<Item = Record>) -> CatalogResult<usize> {
        let mut added = 0;
        for record in records {
            self.add(record)?;
            added += 1;
        }
        Ok(added)
    }

    /// Remove a record from all four structures. Returns false if `id` is not indexed.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let Some(record) = self.by_id.remove(&id) else {
            return false;
        };

        for field in Field::ALL {
            let key = field.index_key(&record);
            remove_from_index(self.secondary_mut(field), &key, id);
        }
        // Matches by title, so this can drop a same-titled record's entry.
        self.sorted_by_title
            .remove(&TitleKey::new(record.title.as_str()));

        debug!(id = %id, len = self.len(), "record removed");
        true
    }

    /// Swap in a new version of a record: remove by id, then add.
    ///
    /// Returns true if an older version was removed.
    pub fn replace(&mut self, record: Record) -> CatalogResult<bool> {
        let id = record.id;
        let replaced = self.remove(id);
        self.add(record)?;
        debug!(id = %id, replaced, "record replaced");
        Ok(replaced)
    }

    /// Drop every record. Table capacities are kept.
    pub fn clear(&mut self) {
        self.by_id.clear();
        self.by_title.clear();
        self.by_author.clear();
        self.by_genre.clear();
        self.sorted_by_title.clear();
    }

    /// Look up a record that must be indexed.
    pub fn get_by_id(&self, id: RecordId) -> CatalogResult<Arc<Record>> {
        self.by_id
            .find(&id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(format!("record {id}")))
    }

    /// Returns true if `id` is indexed.
    pub fn contains(&self, id: RecordId) -> bool {
        self.by_id.contains(&id)
    }

    /// Number of indexed records.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Exact, case-insensitive match on one field.
    ///
    /// Empty input or an unknown value yields an empty result.
    pub fn search(&self, field: Field, value: &str) -> Vec<Arc<Record>> {
        if value.is_empty() {
            return Vec::new();
        }
        let hits = self
            .secondary(field)
            .find(value.to_lowercase().as_str())
            .cloned()
            .unwrap_or_default();
        trace!(%field, value, hits = hits.len(), "exact search");
        hits
    }

    pub fn search_by_title(&self, title: &str) -> Vec<Arc<Record>> {
        self.search(Field::Title, title)
    }

    pub fn search_by_author(&self, author: &str) -> Vec<Arc<Record>> {
        self.search(Field::Author, author)
    }

    pub fn search_by_genre(&self, genre: &str) -> Vec<Arc<Record>> {
        self.search(Field::Genre, genre)
    }

    /// Records whose title contains `partial`, ignoring case. Scans every record.
    pub fn search_by_title_partial(&self, partial: &str) -> Vec<Arc<Record>> {
        if partial.is_empty() {
            return Vec::new();
        }
        let needle = partial.to_lowercase();
        let hits: Vec<_> = self
            .by_id
            .values()
            .filter(|record| record.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();
        trace!(partial, hits = hits.len(), "partial title scan");
        hits
    }

    /// Records published in `min..=max`. Scans every record.
    pub fn search_by_year_range(&self, min: i32, max: i32) -> Vec<Arc<Record>> {
        let hits: Vec<_> = self
            .by_id
            .values()
            .filter(|record| (min..=max).contains(&record.year))
            .cloned()
            .collect();
        trace!(min, max, hits = hits.len(), "year range scan");
        hits
    }

    /// Records whose title falls in `min..=max` under case-insensitive
    /// ordering, ascending. Served by the title tree.
    pub fn search_by_title_range(&self, min: &str, max: &str) -> Vec<Arc<Record>> {
        self.sorted_by_title
            .search_range(&TitleKey::new(min), &TitleKey::new(max))
            .into_iter()
            .map(|entry| Arc::clone(&entry.record))
            .collect()
    }

    /// Every record in the sorted view, ascending by case-insensitive title.
    pub fn all_sorted_by_title(&self) -> Vec<Arc<Record>> {
        self.sorted_by_title
            .iter()
            .map(|entry| Arc::clone(&entry.record))
            .collect()
    }

    /// Every indexed record, in no particular order.
    pub fn all_records(&self) -> Vec<Arc<Record>> {
        self.by_id.values().cloned().collect()
    }

    fn secondary(&self, field: Field) -> &SecondaryIndex {
        match field {
            Field::Title => &self.by_title,
            Field::Author => &self.by_author,
            Field::Genre => &self.by_genre,
        }
    }

    fn secondary_mut(&mut self, field: Field) -> &mut SecondaryIndex {
        match field {
            Field::Title => &mut self.by_title,
            Field::Author => &mut self.by_author,
            Field::Genre => &mut self.by_genre,
        }
    }
}

impl Default for CatalogIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CatalogIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogIndex")
            .field("records", &self.by_id.len())
            .field("titles", &self.by_title.len())
            .field("authors", &self.by_author.len())
            .field("genres", &self.by_genre.len())
            .field("sorted", &self.sorted_by_title.len())
            .finish()
    }
}

fn add_to_index(index: &mut SecondaryIndex, key: String, record: &Arc<Record>) {
    match index.get_mut(key.as_str()) {
        Some(list) => list.push(Arc::clone(record)),
        None => {
            index.put(key, vec![Arc::clone(record)]);
        }
    }
}

fn remove_from_index(index: &mut SecondaryIndex, key: &str, id: RecordId) {
    let emptied = match index.get_mut(key) {
        Some(list) => {
            list.retain(|record| record.id != id);
            list.is_empty()
        }
        None => false,
    };
    if emptied {
        index.remove(key);
    }
}
