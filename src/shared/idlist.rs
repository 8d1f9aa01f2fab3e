/**
 * Id-Addressable Embedded Lists
 *
 * Likes, experience entries and education entries are all ordered lists
 * stored inline on their parent record, with entries addressed by a stable
 * id rather than by position. Every mutation on them is the same
 * test-then-mutate sequence: scan for the id, then either reject or splice.
 *
 * This module is the single home for that sequence. Handlers call
 * `find_by_id` / `insert_front` / `remove_by_id` instead of re-rolling the
 * scan per route.
 *
 * # Ordering
 *
 * New entries are prepended, keeping lists most-recent-first. Removal is by
 * position after an id scan, so the relative order of the remaining entries
 * is untouched.
 */

/// An entry addressable by a stable id, independent of list position.
///
/// For likes the id is the liking user's id; for experience and education
/// entries it is the entry's own generated id.
pub trait HasId {
    type Id: PartialEq;

    fn id(&self) -> &Self::Id;
}

/// Position of the entry with the given id, if present.
///
/// Linear scan; these lists are small and bounded by a single record.
pub fn find_by_id<T: HasId>(entries: &[T], id: &T::Id) -> Option<usize> {
    entries.iter().position(|entry| entry.id() == id)
}

/// Prepend an entry, keeping the list most-recent-first.
pub fn insert_front<T>(entries: &mut Vec<T>, entry: T) {
    entries.insert(0, entry);
}

/// Remove the single entry with the given id, returning it.
///
/// Returns `None` (and leaves the list untouched) when no entry matches.
pub fn remove_by_id<T: HasId>(entries: &mut Vec<T>, id: &T::Id) -> Option<T> {
    find_by_id(entries, id).map(|index| entries.remove(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, PartialEq)]
    struct Entry {
        id: u32,
        label: &'static str,
    }

    impl HasId for Entry {
        type Id = u32;

        fn id(&self) -> &u32 {
            &self.id
        }
    }

    fn entry(id: u32, label: &'static str) -> Entry {
        Entry { id, label }
    }

    #[test]
    fn test_find_by_id() {
        let entries = vec![entry(1, "a"), entry(2, "b"), entry(3, "c")];
        assert_eq!(find_by_id(&entries, &2), Some(1));
        assert_eq!(find_by_id(&entries, &4), None);
    }

    #[test]
    fn test_insert_front_prepends() {
        let mut entries = vec![entry(1, "old")];
        insert_front(&mut entries, entry(2, "new"));
        assert_eq!(entries[0].id, 2);
        assert_eq!(entries[1].id, 1);
    }

    #[test]
    fn test_remove_by_id() {
        let mut entries = vec![entry(1, "a"), entry(2, "b"), entry(3, "c")];
        let removed = remove_by_id(&mut entries, &2);
        assert_eq!(removed, Some(entry(2, "b")));
        assert_eq!(entries, vec![entry(1, "a"), entry(3, "c")]);
    }

    #[test]
    fn test_remove_missing_id_leaves_list_unchanged() {
        let mut entries = vec![entry(1, "a"), entry(2, "b")];
        let before = entries.clone();
        assert_eq!(remove_by_id(&mut entries, &9), None);
        assert_eq!(entries, before);
    }

    #[test]
    fn test_add_then_remove_restores_prior_list() {
        let mut entries = vec![entry(1, "a"), entry(2, "b")];
        let before = entries.clone();

        insert_front(&mut entries, entry(3, "c"));
        assert_eq!(entries.len(), 3);

        remove_by_id(&mut entries, &3);
        assert_eq!(entries, before);
    }

    #[test]
    fn test_duplicate_detection_via_find() {
        // The add path rejects when the id is already present; the list
        // never grows past one entry per id.
        let mut entries: Vec<Entry> = Vec::new();

        if find_by_id(&entries, &7).is_none() {
            insert_front(&mut entries, entry(7, "like"));
        }
        if find_by_id(&entries, &7).is_none() {
            insert_front(&mut entries, entry(7, "like"));
        }

        assert_eq!(entries.len(), 1);
    }
}
