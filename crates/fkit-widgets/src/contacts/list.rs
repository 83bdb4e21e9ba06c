#![forbid(unsafe_code)]

//! Immutable contact list kept sorted by last name.
//!
//! # Invariants
//!
//! 1. Every `ContactList` is sorted ascending by `last_name`, compared by
//!    Unicode scalar value (byte order of UTF-8), case-sensitive.
//! 2. A list is never changed after construction. [`insert`] builds a new
//!    list; the input keeps its allocation and contents.
//! 3. The relative order of records with equal last names is unspecified
//!    and may change between insertions.

use std::rc::Rc;

use tracing::debug;

use super::record::ContactRecord;

/// Sorted, shared, immutable sequence of contacts.
///
/// Cloning is O(1) and shares the allocation.
#[derive(Debug, Clone, Default)]
pub struct ContactList {
    records: Rc<[ContactRecord]>,
}

impl ContactList {
    /// An empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from records in any order.
    pub fn from_records(records: impl IntoIterator<Item = ContactRecord>) -> Self {
        let mut records: Vec<ContactRecord> = records.into_iter().collect();
        sort_by_last_name(&mut records);
        Self {
            records: records.into(),
        }
    }

    /// A new list holding this list's records plus `record`.
    #[must_use]
    pub fn inserted(&self, record: ContactRecord) -> Self {
        insert(self, record)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ContactRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[ContactRecord] {
        &self.records
    }

    /// True if both lists share one allocation.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.records, &other.records)
    }
}

impl PartialEq for ContactList {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.records[..] == other.records[..]
    }
}

impl Eq for ContactList {}

impl<'a> IntoIterator for &'a ContactList {
    type Item = &'a ContactRecord;
    type IntoIter = std::slice::Iter<'a, ContactRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<ContactRecord> for ContactList {
    fn from_iter<I: IntoIterator<Item = ContactRecord>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

/// Return a new list containing `list`'s records and `record`, sorted by
/// last name. `list` is left untouched.
#[must_use]
pub fn insert(list: &ContactList, record: ContactRecord) -> ContactList {
    let mut records = Vec::with_capacity(list.len() + 1);
    records.push(record);
    records.extend(list.iter().cloned());
    sort_by_last_name(&mut records);
    debug!(len = records.len(), "contact inserted");
    ContactList {
        records: records.into(),
    }
}

/// True if every adjacent pair is ordered by last name.
#[must_use]
pub fn is_sorted_by_last_name(records: &[ContactRecord]) -> bool {
    records
        .windows(2)
        .all(|pair| pair[0].last_name <= pair[1].last_name)
}

fn sort_by_last_name(records: &mut [ContactRecord]) {
    records.sort_unstable_by(|a, b| a.last_name.cmp(&b.last_name));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn last_names(list: &ContactList) -> Vec<&str> {
        list.iter().map(|r| r.last_name.as_str()).collect()
    }

    #[test]
    fn insert_into_empty() {
        let list = insert(&ContactList::new(), ContactRecord::new("Ada", "Lovelace", "1"));
        assert_eq!(list.as_slice(), [ContactRecord::new("Ada", "Lovelace", "1")]);
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let brown = ContactRecord::new("Bob", "Brown", "2");
        let adams = ContactRecord::new("Amy", "Adams", "3");

        let a = insert(&insert(&ContactList::new(), brown.clone()), adams.clone());
        let b = insert(&insert(&ContactList::new(), adams), brown);
        assert_eq!(last_names(&a), ["Adams", "Brown"]);
        assert_eq!(last_names(&b), ["Adams", "Brown"]);
    }

    #[test]
    fn input_list_is_untouched() {
        let original = ContactList::from_records([
            ContactRecord::new("Amy", "Adams", "3"),
            ContactRecord::new("Bob", "Brown", "2"),
        ]);
        let alias = original.clone();
        let snapshot: Vec<ContactRecord> = original.as_slice().to_vec();

        let next = insert(&original, ContactRecord::new("Cy", "Ames", "4"));

        assert!(original.ptr_eq(&alias));
        assert!(!next.ptr_eq(&original));
        assert_eq!(original.as_slice(), snapshot.as_slice());
        assert_eq!(last_names(&next), ["Adams", "Ames", "Brown"]);
    }

    #[test]
    fn ties_stay_adjacent() {
        let list = ContactList::from_records([
            ContactRecord::new("Amy", "Adams", "1"),
            ContactRecord::new("Bob", "Byte", "2"),
            ContactRecord::new("Cal", "Cole", "3"),
        ]);
        let next = insert(&list, ContactRecord::new("Coder", "Byte", "4"));

        assert_eq!(next.len(), list.len() + 1);
        assert_eq!(last_names(&next), ["Adams", "Byte", "Byte", "Cole"]);
        let firsts: Vec<&str> = next.as_slice()[1..3]
            .iter()
            .map(|r| r.first_name.as_str())
            .collect();
        assert!(firsts.contains(&"Bob"));
        assert!(firsts.contains(&"Coder"));
    }

    #[test]
    fn duplicates_are_kept() {
        let record = ContactRecord::new("Coder", "Byte", "8885559999");
        let list = insert(&insert(&ContactList::new(), record.clone()), record.clone());
        assert_eq!(list.as_slice(), [record.clone(), record]);
    }

    #[test]
    fn empty_fields_are_accepted() {
        let list = ContactList::from_records([ContactRecord::new("A", "Adams", "1")]);
        let next = insert(&list, ContactRecord::default());
        assert_eq!(last_names(&next), ["", "Adams"]);
    }

    #[test]
    fn comparison_is_case_sensitive_ordinal() {
        let list = ContactList::from_records([
            ContactRecord::new("", "adams", ""),
            ContactRecord::new("", "Zed", ""),
            ContactRecord::new("", "Émile", ""),
            ContactRecord::new("", "Brown", ""),
        ]);
        assert_eq!(last_names(&list), ["Brown", "Zed", "adams", "Émile"]);
        assert!(is_sorted_by_last_name(list.as_slice()));
    }

    #[test]
    fn equality_compares_contents() {
        let a = ContactList::from_records([ContactRecord::new("A", "B", "C")]);
        let b = ContactList::from_records([ContactRecord::new("A", "B", "C")]);
        assert!(!a.ptr_eq(&b));
        assert_eq!(a, b);
        assert_ne!(a, ContactList::new());
    }
}
