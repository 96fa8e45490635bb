//! Case-insensitive title ordering for the sorted view.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::sync::Arc;

use types::Record;

/// A title compared ordinally after upper-casing each character.
///
/// `"Go"` and `"go"` are equal under this ordering. Characters whose upper
/// case spans several characters (`ß`) are compared as they are.
#[derive(Clone, Debug)]
pub struct TitleKey(String);

impl TitleKey {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }
}

impl PartialEq for TitleKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for TitleKey {}

impl PartialOrd for TitleKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TitleKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_ignore_case(&self.0, &other.0)
    }
}

/// Ordinal comparison of two strings with each character folded to upper case.
fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars().map(fold_char).cmp(b.chars().map(fold_char))
}

/// Upper-case `c` when that maps it to exactly one character.
fn fold_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

/// Tree element: a record ordered by its title.
#[derive(Clone, Debug)]
pub(crate) struct TitleOrdered {
    key: TitleKey,
    pub(crate) record: Arc<Record>,
}

impl TitleOrdered {
    pub(crate) fn new(record: Arc<Record>) -> Self {
        Self {
            key: TitleKey::new(record.title.clone()),
            record,
        }
    }
}

impl PartialEq for TitleOrdered {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for TitleOrdered {}

impl PartialOrd for TitleOrdered {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TitleOrdered {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl Borrow<TitleKey> for TitleOrdered {
    fn borrow(&self) -> &TitleKey {
        &self.key
    }
}
