//! Infeasible-state conditions.
//!
//! A condition is keyed by a pattern with one character per option across all
//! decision makers: `Y` (taken), `N` (not taken) or `-` (either). Conditions
//! are applied in list order, so moving one changes how many states each
//! removes.

use serde::{Deserialize, Serialize};

use crate::{Entry, EntryId, EntryList, OrderedCollection, Result};

/// Ordered infeasible conditions; earlier conditions take precedence.
pub type Infeasibles = EntryList<Infeasible>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Infeasible {
    id: EntryId,
    /// Condition key, e.g. `"Y-N"`.
    pub name: String,
    /// Number of states this condition removed in the last recalculation.
    /// Written by the external model only.
    pub states_removed: u64,
}

impl Infeasible {
    pub fn key(&self) -> &str {
        &self.name
    }
}

impl Entry for Infeasible {
    fn create(id: EntryId, name: String) -> Self {
        Self {
            id,
            name,
            states_removed: 0,
        }
    }

    fn id(&self) -> EntryId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl EntryList<Infeasible> {
    /// Move a condition, changing its precedence.
    pub fn move_condition(&mut self, from: usize, to: usize) -> Result<()> {
        self.move_entry(from, to)
    }

    pub fn remove_condition(&mut self, index: usize) -> Result<()> {
        self.remove(index)
    }

    /// Record a recalculated removal count.
    pub fn set_states_removed(&mut self, index: usize, count: u64) -> Result<()> {
        let len = self.len();
        let condition = self
            .get_mut(index)
            .ok_or(crate::ModelError::IndexOutOfRange { index, len })?;
        condition.states_removed = count;
        Ok(())
    }
}
