//! Assertion helpers for query results.

use types::Record;

/// Ids of `records`, sorted ascending.
pub fn record_ids<R: AsRef<Record>>(records: &[R]) -> Vec<u32> {
    let mut ids: Vec<u32> = records.iter().map(|r| r.as_ref().id.0).collect();
    ids.sort_unstable();
    ids
}

/// Assert that `records` holds exactly the given ids, in any order.
///
/// # Example
///
/// ```
/// use testsupport::prelude::*;
///
/// let records = vec![record(2, "B", "x", "y", 2000), record(1, "A", "x", "y", 2000)];
/// assert_ids(&records, &[1, 2]);
/// ```
pub fn assert_ids<R: AsRef<Record>>(records: &[R], expected: &[u32]) {
    let mut expected = expected.to_vec();
    expected.sort_unstable();
    assert_eq!(
        record_ids(records),
        expected,
        "record id mismatch: expected {:?}, got {:?}",
        expected,
        record_ids(records)
    );
}

/// Titles of `records`, in the order given.
pub fn titles<R: AsRef<Record>>(records: &[R]) -> Vec<String> {
    records.iter().map(|r| r.as_ref().title.clone()).collect()
}

/// Assert that titles are strictly ascending when each character is
/// upper-cased on its own (one-to-one mappings only).
pub fn assert_sorted_by_title<R: AsRef<Record>>(records: &[R]) {
    for pair in records.windows(2) {
        let (a, b) = (&pair[0].as_ref().title, &pair[1].as_ref().title);
        assert!(
            fold_title(a) < fold_title(b),
            "titles out of order: {a:?} then {b:?}"
        );
    }
}

fn fold_title(title: &str) -> Vec<char> {
    title
        .chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        })
        .collect()
}
