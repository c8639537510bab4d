use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of an entry within one ordered list.
///
/// Ids are allocated by the owning [`EntryList`](crate::EntryList) and survive
/// moves, so row handlers can be keyed by id instead of by position.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    /// Largest id a list accepts from outside. Ids stay exact in JSON numbers
    /// and leave the allocator room to grow.
    pub const MAX: u64 = (1 << 53) - 1;

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
