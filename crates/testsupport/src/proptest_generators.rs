//! Property-based test generators using proptest.

use proptest::prelude::*;
use types::{Record, RecordId, ResourceType};

/// Strategy for short titles drawn from a tiny alphabet in mixed case, so
/// case-insensitive collisions are common.
pub fn arb_title() -> impl Strategy<Value = String> {
    "[a-cA-C]{1,3}"
}

/// Strategy for generating random `ResourceType` instances.
pub fn arb_resource_type() -> impl Strategy<Value = ResourceType> {
    prop_oneof![
        Just(ResourceType::Book),
        Just(ResourceType::Journal),
        Just(ResourceType::Media),
    ]
}

/// Strategy for a record with the given id.
pub fn arb_record_with_id(id: u32) -> impl Strategy<Value = Record> {
    (
        arb_title(),
        "[a-dA-D]{1,2}",
        "[a-cA-C]",
        1900i32..2030,
        arb_resource_type(),
    )
        .prop_map(move |(title, author, genre, year, kind)| {
            Record::builder()
                .id(RecordId(id))
                .title(title)
                .author(author)
                .genre(genre)
                .year(year)
                .kind(kind)
                .build()
        })
}

/// Strategy for a batch of records with distinct ids `0..len`.
///
/// # Example
///
/// ```
/// use proptest::prelude::*;
/// use testsupport::proptest_generators::arb_records;
///
/// proptest! {
///     #[test]
///     fn ids_are_distinct(records in arb_records(1..20)) {
///         let mut ids: Vec<_> = records.iter().map(|r| r.id).collect();
///         ids.dedup();
///         prop_assert_eq!(ids.len(), records.len());
///     }
/// }
/// ```
pub fn arb_records(len: std::ops::Range<usize>) -> impl Strategy<Value = Vec<Record>> {
    len.prop_flat_map(|n| {
        let ids = 0..n as u32;
        ids.map(arb_record_with_id).collect::<Vec<_>>()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn generated_records_have_indexable_fields(record in arb_record_with_id(5)) {
            prop_assert_eq!(record.id, RecordId(5));
            prop_assert!(!record.title.is_empty());
            prop_assert!(!record.author.is_empty());
            prop_assert!(!record.genre.is_empty());
            prop_assert!((1900..2030).contains(&record.year));
        }

        #[test]
        fn batches_use_sequential_ids(records in arb_records(0..10)) {
            for (i, record) in records.iter().enumerate() {
                prop_assert_eq!(record.id, RecordId(i as u32));
            }
        }
    }
}
