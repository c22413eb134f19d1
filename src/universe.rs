//! The sorted identifier universe that fixes the field order of records.

use std::collections::HashMap;

/// An immutable, lexicographically sorted list of unique geographic
/// identifiers, shared by the encoder and the decoder of a file.
///
/// The universe defines the field order and the width of every record.
/// The on-disk format carries no header describing it, so the two sides
/// must be built from identical membership: a mismatch does not error,
/// it silently misaligns values and identifiers.
#[derive(Clone, Debug)]
pub struct Universe {
    /// Identifiers in ascending byte order.
    ids: Vec<String>,
    /// Maps each identifier to its position in 'ids'.
    index: HashMap<String, usize>,
}

impl Universe {
    /// Collects the identifiers, sorts them by byte value and drops
    /// duplicates. O(n log n).
    pub fn new<I>(identifiers: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut ids: Vec<String> =
            identifiers.into_iter().map(Into::into).collect();
        ids.sort_unstable();
        ids.dedup();
        let index = ids
            .iter()
            .enumerate()
            .map(|(at, id)| (id.clone(), at))
            .collect();
        Self { ids, index }
    }

    /// The identifiers in ascending byte order.
    pub fn order(&self) -> &[String] {
        &self.ids
    }

    /// Return True if 'id' is a member of the universe.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// The position of 'id' in the sorted order, if it is a member.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}
