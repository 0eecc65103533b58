//! AddressBook model: every known contact, keyed by name.

use super::record::Record;
use crate::domain::Name;
use indexmap::IndexMap;

/// In-memory collection of records keyed by contact name.
///
/// Iteration follows insertion order. Adding a record under a name that is
/// already present replaces the old record in place.
#[derive(Debug, Clone, Default)]
pub struct AddressBook {
    records: IndexMap<Name, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its own name, replacing any previous record.
    pub fn add_record(&mut self, record: Record) {
        self.records.insert(record.name().clone(), record);
    }

    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record for `name`, if any. Order of the rest is kept.
    pub fn delete(&mut self, name: &str) -> Option<Record> {
        self.records.shift_remove(name)
    }

    /// All `(name, record)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&Name, &Record)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = (&'a Name, &'a Record);
    type IntoIter = indexmap::map::Iter<'a, Name, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
