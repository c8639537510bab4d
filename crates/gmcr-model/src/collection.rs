//! Ordered entry lists with stable identities.
//!
//! Every list in a conflict model (decision makers, a decision maker's
//! options, infeasible conditions) has the same shape: order matters, each
//! entry has a name and an id that is unique within the list, and membership
//! only changes through insert, move and remove.

use serde::{Deserialize, Serialize};

use crate::{EntryId, ModelError, Result};

/// An item stored in an [`EntryList`].
pub trait Entry {
    /// Build a fresh entry for a newly allocated id.
    fn create(id: EntryId, name: String) -> Self;

    fn id(&self) -> EntryId;

    fn name(&self) -> &str;

    fn set_name(&mut self, name: String);
}

/// Positional view of a list, used by the editing core.
///
/// Implementations must keep ids unique and must leave the list untouched
/// when an index is rejected.
pub trait OrderedCollection {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn id_at(&self, index: usize) -> Option<EntryId>;

    fn name_at(&self, index: usize) -> Option<&str>;

    /// Move the entry at `from` so that it ends up at `to`.
    fn move_entry(&mut self, from: usize, to: usize) -> Result<()>;

    fn remove_entry(&mut self, index: usize) -> Result<()>;
}

/// Ordered list of entries that allocates ids for the entries it creates.
///
/// Deserialization checks id uniqueness and moves the allocator past every
/// stored id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    try_from = "StoredEntryList<T>",
    bound(deserialize = "T: Entry + Deserialize<'de>")
)]
pub struct EntryList<T> {
    entries: Vec<T>,
    next_id: u64,
}

impl<T> Default for EntryList<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 1,
        }
    }
}

impl<T: Entry> EntryList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    /// Names in list order.
    pub fn names(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|entry| entry.name().to_string())
            .collect()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.entries.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.entries.get_mut(index)
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.position(id).is_some()
    }

    pub fn get_by_id(&self, id: EntryId) -> Option<&T> {
        self.entries.iter().find(|entry| entry.id() == id)
    }

    pub fn get_by_id_mut(&mut self, id: EntryId) -> Option<&mut T> {
        self.entries.iter_mut().find(|entry| entry.id() == id)
    }

    /// Append a new entry and return its id.
    pub fn push_new(&mut self, name: impl Into<String>) -> EntryId {
        let id = self.allocate_id();
        self.entries.push(T::create(id, name.into()));
        id
    }

    /// Insert an existing entry (typically one returned by [`pop`](Self::pop)).
    ///
    /// Ids above [`EntryId::MAX`] are rejected.
    pub fn insert(&mut self, index: usize, entry: T) -> Result<()> {
        if index > self.entries.len() {
            return Err(ModelError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        let id = entry.id();
        self.check_foreign_id(id)?;
        self.next_id = self.next_id.max(id.get() + 1);
        self.entries.insert(index, entry);
        Ok(())
    }

    pub fn pop(&mut self, index: usize) -> Result<T> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    pub fn remove(&mut self, index: usize) -> Result<()> {
        self.pop(index).map(drop)
    }

    /// Remove the entry with the given id, returning it.
    pub fn remove_by_id(&mut self, id: EntryId) -> Result<T> {
        let index = self.position(id).ok_or(ModelError::UnknownEntry(id))?;
        self.pop(index)
    }

    fn allocate_id(&mut self) -> EntryId {
        let id = EntryId::new(self.next_id);
        self.next_id += 1;
        id
    }

    fn check_foreign_id(&self, id: EntryId) -> Result<()> {
        if id.get() > EntryId::MAX {
            return Err(ModelError::IdOutOfRange(id));
        }
        if self.contains(id) {
            return Err(ModelError::DuplicateEntry(id));
        }
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(ModelError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }
}

impl<T: Entry> OrderedCollection for EntryList<T> {
    fn len(&self) -> usize {
        self.entries.len()
    }

    fn id_at(&self, index: usize) -> Option<EntryId> {
        self.entries.get(index).map(Entry::id)
    }

    fn name_at(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(Entry::name)
    }

    fn move_entry(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_index(from)?;
        self.check_index(to)?;
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        Ok(())
    }

    fn remove_entry(&mut self, index: usize) -> Result<()> {
        self.remove(index)
    }
}

#[derive(Deserialize)]
struct StoredEntryList<T> {
    entries: Vec<T>,
    #[serde(default)]
    next_id: u64,
}

impl<T: Entry> TryFrom<StoredEntryList<T>> for EntryList<T> {
    type Error = ModelError;

    fn try_from(stored: StoredEntryList<T>) -> Result<Self> {
        let mut list = Self {
            entries: Vec::with_capacity(stored.entries.len()),
            next_id: stored.next_id.clamp(1, EntryId::MAX + 1),
        };
        for entry in stored.entries {
            let index = list.len();
            list.insert(index, entry)?;
        }
        Ok(list)
    }
}

impl<'a, T> IntoIterator for &'a EntryList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
