use thiserror::Error;

use crate::EntryId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("entry {0} is already present in this list")]
    DuplicateEntry(EntryId),
    #[error("entry {0} exceeds the largest accepted id {max}", max = EntryId::MAX)]
    IdOutOfRange(EntryId),
    #[error("entry {0} not found")]
    UnknownEntry(EntryId),
    #[error("feasible state recalculation failed: {0}")]
    Recalculation(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
